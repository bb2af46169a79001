//! PPTX serialization.
//!
//! Turns the in-memory [`Deck`](crate::model::Deck) into an OOXML
//! presentation package: one `ppt/slides/slideN.xml` part per slide, the
//! minimal static master/layout/theme parts, and the relationship plumbing
//! that ties them together.

mod parts;
mod slide_xml;
mod writer;

pub use writer::PptxWriter;
