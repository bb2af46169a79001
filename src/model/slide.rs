//! Slide and shape models.

use super::TextFrame;
use crate::geometry::Rect;
use crate::theme::Color;
use serde::{Deserialize, Serialize};

/// What a shape renders inside its frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShapeKind {
    /// A solid-filled rectangle, optionally outlined.
    Card {
        fill: Color,
        #[serde(skip_serializing_if = "Option::is_none")]
        line: Option<Color>,
    },
    /// An unfilled text box.
    TextBox { text: TextFrame },
}

/// A shape placed at an absolute position on the slide canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Position and size in inches
    pub frame: Rect,

    /// Shape content
    pub kind: ShapeKind,
}

impl Shape {
    /// Create a filled card shape.
    pub fn card(frame: Rect, fill: Color, line: Option<Color>) -> Self {
        Self {
            frame,
            kind: ShapeKind::Card { fill, line },
        }
    }

    /// Create a text box shape.
    pub fn text_box(frame: Rect, text: TextFrame) -> Self {
        Self {
            frame,
            kind: ShapeKind::TextBox { text },
        }
    }

    /// Get the text frame, if this shape is a text box.
    pub fn text(&self) -> Option<&TextFrame> {
        match &self.kind {
            ShapeKind::TextBox { text } => Some(text),
            ShapeKind::Card { .. } => None,
        }
    }

    /// Check if this shape is a filled card.
    pub fn is_card(&self) -> bool {
        matches!(self.kind, ShapeKind::Card { .. })
    }
}

/// One page of the deck: an ordered canvas of shapes.
///
/// Slides are write-only from the builder's perspective: primitives append
/// shapes in place and nothing reads them back until serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    /// Background fill color, if set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,

    /// Shapes in z-order (first drawn is bottom-most)
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

impl Slide {
    /// Create a new blank slide.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape to the slide.
    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Number of shapes on the slide.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the slide has no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Iterate over the text boxes on the slide, in z-order.
    pub fn text_boxes(&self) -> impl Iterator<Item = (&Rect, &TextFrame)> {
        self.shapes.iter().filter_map(|s| match &s.kind {
            ShapeKind::TextBox { text } => Some((&s.frame, text)),
            ShapeKind::Card { .. } => None,
        })
    }
}
