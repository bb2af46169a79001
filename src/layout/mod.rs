//! Layout primitives and the slide factory.
//!
//! Primitives are stateless functions that append shapes to a target slide
//! at caller-supplied or fixed geometry. Every position is derived from the
//! named constants below; there is no layout solver and no overlap
//! detection. The slide factory is the single entry point for creating a
//! themed slide, so background, accent bar, and title are applied uniformly
//! across the deck.

mod primitives;

pub use primitives::*;

use crate::geometry::Rect;
use crate::model::{Deck, Slide};
use crate::theme::Theme;

/// Height of the decorative accent bar at the top edge, in inches.
pub const TOP_BAR_HEIGHT: f64 = 0.12;

/// Left content margin shared by the title block, the columns, and the
/// footer, in inches.
pub const MARGIN_X: f64 = 0.8;

/// Title textbox frame.
pub const TITLE_FRAME: Rect = Rect::new(MARGIN_X, 0.45, 11.8, 1.1);

/// Subtitle textbox frame, directly beneath the title.
pub const SUBTITLE_FRAME: Rect = Rect::new(MARGIN_X, 1.5, 11.5, 0.8);

/// Title font size in points.
pub const TITLE_SIZE: u32 = 40;

/// Subtitle font size in points.
pub const SUBTITLE_SIZE: u32 = 18;

/// Default bullet-block card frame; callers override top/height when the
/// slide also carries a metric row or a second block.
pub const BULLET_FRAME: Rect = Rect::new(0.9, 2.2, 11.5, 4.6);

/// Default bullet font size in points.
pub const BULLET_SIZE: u32 = 24;

/// Horizontal inset from a bullet card to its text, in inches.
pub(crate) const BULLET_INSET_X: f64 = 0.45;

/// Vertical inset from a bullet card to its text, in inches.
pub(crate) const BULLET_INSET_Y: f64 = 0.35;

/// Space after each bullet paragraph, in points.
pub(crate) const BULLET_SPACING: u32 = 14;

/// Two-column card width, in inches.
pub const COLUMN_CARD_WIDTH: f64 = 5.75;

/// Two-column card height, in inches.
pub const COLUMN_CARD_HEIGHT: f64 = 4.4;

/// Top edge of two-column cards, in inches.
pub const COLUMN_TOP: f64 = 2.2;

/// Horizontal distance between the left edges of the two columns.
pub const COLUMN_STRIDE: f64 = 6.0;

pub(crate) const COLUMN_INSET: f64 = 0.35;
pub(crate) const COLUMN_INNER_WIDTH: f64 = 5.2;
pub(crate) const COLUMN_TITLE_OFFSET: f64 = 0.25;
pub(crate) const COLUMN_TITLE_HEIGHT: f64 = 0.6;
pub(crate) const COLUMN_ITEMS_OFFSET: f64 = 0.95;
pub(crate) const COLUMN_ITEMS_HEIGHT: f64 = 3.2;
pub(crate) const COLUMN_TITLE_SIZE: u32 = 22;
pub(crate) const COLUMN_ITEM_SIZE: u32 = 18;
pub(crate) const COLUMN_ITEM_SPACING: u32 = 10;

/// Top edge of the metric row, in inches.
pub const METRIC_TOP: f64 = 4.8;

/// Metric card width, in inches.
pub const METRIC_CARD_WIDTH: f64 = 2.9;

/// Metric card height, in inches.
pub const METRIC_CARD_HEIGHT: f64 = 1.65;

/// Gap between metric cards, in inches.
pub const METRIC_GAP: f64 = 0.35;

/// Left edge of the first metric card, in inches.
pub const METRIC_START_X: f64 = 0.9;

pub(crate) const METRIC_INSET: f64 = 0.2;
pub(crate) const METRIC_VALUE_HEIGHT: f64 = 0.65;
pub(crate) const METRIC_LABEL_OFFSET: f64 = 0.95;
pub(crate) const METRIC_LABEL_HEIGHT: f64 = 0.5;
pub(crate) const METRIC_VALUE_SIZE: u32 = 26;
pub(crate) const METRIC_LABEL_SIZE: u32 = 12;

/// Footer textbox frame, near the bottom edge.
pub const FOOTER_FRAME: Rect = Rect::new(MARGIN_X, 7.0, 11.8, 0.35);

/// Footer font size in points.
pub const FOOTER_SIZE: u32 = 12;

/// Append a new themed slide to the deck and return it for decoration.
///
/// Applies the background fill, the top accent bar, and the title block in
/// that fixed order. Every slide in a deck is produced through this factory
/// so none bypasses the theming.
pub fn add_slide<'a>(
    deck: &'a mut Deck,
    theme: &Theme,
    title: &str,
    subtitle: Option<&str>,
) -> &'a mut Slide {
    let mut slide = Slide::new();
    set_dark_background(&mut slide, theme);
    add_top_bar(&mut slide, theme);
    add_title(&mut slide, theme, title, subtitle);
    deck.slides.push(slide);
    let last = deck.slides.len() - 1;
    &mut deck.slides[last]
}
