//! In-memory deck model.
//!
//! This module defines the data structures that represent a presentation
//! before serialization: a deck of slides, each an ordered list of shapes
//! (filled cards and text boxes) placed in absolute canvas coordinates.
//! Layout primitives build these structures; the `pptx` module turns them
//! into an OOXML package.

mod deck;
mod slide;
mod text;

pub use deck::*;
pub use slide::*;
pub use text::*;
