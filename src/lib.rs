//! # deckforge
//!
//! Programmatic pitch-deck generation: a small set of themed layout
//! primitives composed into a fixed sequence of slides, serialized to a
//! PowerPoint (.pptx) package.
//!
//! The crate splits into three layers:
//!
//! - [`model`] — the in-memory deck: slides, shapes, text frames.
//! - [`layout`] — stateless primitives (background, accent bar, title,
//!   bullet block, two-column cards, metric row, footer) that place shapes
//!   at fixed canvas geometry, plus the slide factory every slide goes
//!   through.
//! - [`pptx`] — the OOXML serialization boundary.
//!
//! Slide text lives in [`content`] as one ordered data table; the
//! [`builder`] walks it with a single sequential loop.
//!
//! ## Quick Start
//!
//! ```no_run
//! // Build the fixed deck and save it
//! let path = deckforge::generate("402FC_Pitch_Deck.pptx")?;
//! println!("Generated: {}", path.display());
//!
//! // Or work with the model directly
//! let deck = deckforge::build_pitch_deck();
//! assert_eq!(deck.len(), 10);
//! deckforge::pptx::PptxWriter::new(&deck).save("out/deck.pptx")?;
//! # Ok::<(), deckforge::Error>(())
//! ```

pub mod builder;
pub mod container;
pub mod content;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod model;
pub mod pptx;
pub mod theme;

// Re-exports
pub use builder::{build_deck_from, build_pitch_deck};
pub use error::{Error, Result};
pub use geometry::{Rect, CANVAS_HEIGHT, CANVAS_WIDTH};
pub use model::{Deck, Paragraph, Shape, ShapeKind, Slide, TextAlignment, TextFrame, TextRun};
pub use theme::{Color, Theme, DARK};

use std::path::{Path, PathBuf};

/// Default output file name for the fixed deck.
pub const DEFAULT_OUTPUT_FILE: &str = "402FC_Pitch_Deck.pptx";

/// Build the fixed pitch deck and save it to `path`.
///
/// Creates parent directories as needed and overwrites any existing file.
/// Returns the path written to.
pub fn generate(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    let deck = build_pitch_deck();
    pptx::PptxWriter::new(&deck).save(path)?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_writes_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("deck").join(DEFAULT_OUTPUT_FILE);

        let written = generate(&target).unwrap();
        assert_eq!(written, target);
        let first = std::fs::read(&target).unwrap();
        assert!(!first.is_empty());

        // Second run overwrites the same path deterministically
        generate(&target).unwrap();
        let second = std::fs::read(&target).unwrap();
        assert_eq!(first, second);
    }
}
