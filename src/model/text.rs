//! Text frame, paragraph, and run models.

use crate::theme::Color;
use serde::{Deserialize, Serialize};

/// Horizontal alignment of a paragraph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// A styled span of text with uniform formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Font size in points
    pub size: u32,

    /// Bold weight
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,

    /// Text color
    pub color: Color,
}

impl TextRun {
    /// Create a run with the given text, size, and color.
    pub fn new(text: impl Into<String>, size: u32, color: Color) -> Self {
        Self {
            text: text.into(),
            size,
            bold: false,
            color,
        }
    }

    /// Create a bold run.
    pub fn bold(text: impl Into<String>, size: u32, color: Color) -> Self {
        Self {
            text: text.into(),
            size,
            bold: true,
            color,
        }
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A paragraph: an ordered sequence of runs plus paragraph-level style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Text runs in reading order
    #[serde(default)]
    pub runs: Vec<TextRun>,

    /// Horizontal alignment
    #[serde(default, skip_serializing_if = "is_default_alignment")]
    pub alignment: TextAlignment,

    /// Space after the paragraph, in points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_after: Option<u32>,
}

fn is_default_alignment(a: &TextAlignment) -> bool {
    *a == TextAlignment::Left
}

impl Paragraph {
    /// Create a paragraph holding a single run.
    pub fn with_run(run: TextRun) -> Self {
        Self {
            runs: vec![run],
            ..Default::default()
        }
    }

    /// Set the alignment.
    pub fn aligned(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the space after the paragraph, in points.
    pub fn spaced_after(mut self, points: u32) -> Self {
        self.space_after = Some(points);
        self
    }

    /// Get the plain text content.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// An ordered sequence of paragraphs inside a text box.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextFrame {
    /// Paragraphs in reading order
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,

    /// Wrap text at the frame's width
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub word_wrap: bool,
}

impl TextFrame {
    /// Create an empty text frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a wrapping text frame.
    pub fn wrapping() -> Self {
        Self {
            word_wrap: true,
            ..Default::default()
        }
    }

    /// Append a paragraph.
    pub fn add_paragraph(&mut self, para: Paragraph) {
        self.paragraphs.push(para);
    }

    /// Check if the frame has no visible text.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty() || self.paragraphs.iter().all(|p| p.plain_text().is_empty())
    }
}
