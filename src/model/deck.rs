//! Deck model: the unit of serialization.

use super::Slide;
use crate::geometry::{CANVAS_HEIGHT, CANVAS_WIDTH};
use serde::{Deserialize, Serialize};

/// An ordered sequence of slides plus the document page size.
///
/// A deck is constructed in memory slide by slide, serialized once, and
/// then discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    /// Page width in inches
    pub page_width: f64,

    /// Page height in inches
    pub page_height: f64,

    /// Slides in presentation order
    #[serde(default)]
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Create an empty deck with the fixed 16:9 widescreen page size.
    pub fn widescreen() -> Self {
        Self {
            page_width: CANVAS_WIDTH,
            page_height: CANVAS_HEIGHT,
            slides: Vec::new(),
        }
    }

    /// Number of slides in the deck.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Check if the deck has no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::widescreen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widescreen_page_size() {
        let deck = Deck::widescreen();
        assert!(deck.is_empty());
        assert_eq!(deck.page_width, 13.333);
        assert_eq!(deck.page_height, 7.5);
    }

    #[test]
    fn test_slide_order() {
        let mut deck = Deck::widescreen();
        deck.slides.push(Slide::new());
        deck.slides.push(Slide::new());
        assert_eq!(deck.len(), 2);
    }
}
