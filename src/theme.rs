//! Shared color palette applied by all layout primitives.

use serde::{Deserialize, Serialize};

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uppercase hex form without a leading `#`, as used by `a:srgbClr`.
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// The deck-wide color palette.
///
/// A theme is fixed for the lifetime of a build and shared by reference
/// across all primitives; nothing mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Slide background fill.
    pub background: Color,
    /// Card/panel fill.
    pub surface: Color,
    /// Primary text.
    pub text: Color,
    /// Secondary text (subtitles, labels, footers).
    pub muted: Color,
    /// Brand accent (bars, card titles, metric values).
    pub accent: Color,
    /// Positive highlight (milestone callouts).
    pub success: Color,
}

/// Card outline color, one step above the surface fill.
pub const CARD_BORDER: Color = Color::new(39, 39, 42);

/// The dark brand theme used by the pitch deck.
pub const DARK: Theme = Theme {
    background: Color::new(9, 9, 11),
    surface: Color::new(24, 24, 27),
    text: Color::new(250, 250, 250),
    muted: Color::new(161, 161, 170),
    // Stacks orange, extracted from the logo asset
    accent: Color::new(252, 100, 50),
    success: Color::new(16, 185, 129),
};
