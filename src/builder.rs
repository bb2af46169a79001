//! Deck builder: assembles the fixed pitch deck from the content table.

use crate::content::{Block, CalloutTone, SlideSpec, PITCH_SECTIONS};
use crate::layout;
use crate::model::{Deck, Slide, TextAlignment};
use crate::theme::{Theme, DARK};

/// Build the full ten-slide 402FC pitch deck.
///
/// One sequential pass over [`PITCH_SECTIONS`]: every section goes through
/// the slide factory and then its content blocks, in order. There is no
/// data-dependent branching beyond block dispatch.
pub fn build_pitch_deck() -> Deck {
    build_deck_from(&DARK, PITCH_SECTIONS)
}

/// Build a deck from an arbitrary content table.
pub fn build_deck_from(theme: &Theme, sections: &[SlideSpec]) -> Deck {
    let mut deck = Deck::widescreen();
    for spec in sections {
        let slide = layout::add_slide(&mut deck, theme, spec.title, spec.subtitle);
        populate(slide, theme, spec);
    }
    deck
}

/// Apply one section's content blocks and footer to a themed slide.
fn populate(slide: &mut Slide, theme: &Theme, spec: &SlideSpec) {
    for block in spec.blocks {
        match block {
            Block::Bullets {
                items,
                frame,
                font_size,
            } => {
                layout::add_bullet_block(slide, theme, items, *frame, *font_size);
            }
            Block::TwoColumn {
                left_title,
                left_items,
                right_title,
                right_items,
            } => {
                layout::add_two_column_cards(
                    slide,
                    theme,
                    left_title,
                    left_items,
                    right_title,
                    right_items,
                );
            }
            Block::Metrics { metrics } => {
                layout::add_metric_row(slide, theme, metrics);
            }
            Block::Callout {
                text,
                frame,
                font_size,
                tone,
                centered,
            } => {
                let color = match tone {
                    CalloutTone::Accent => theme.accent,
                    CalloutTone::Success => theme.success,
                };
                let align = if *centered {
                    TextAlignment::Center
                } else {
                    TextAlignment::Left
                };
                layout::add_callout(slide, text, *frame, *font_size, color, align);
            }
        }
    }
    layout::add_footer(slide, theme, spec.footer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{FOOTER_FRAME, TITLE_FRAME, TOP_BAR_HEIGHT};

    #[test]
    fn test_full_deck_has_ten_slides() {
        let deck = build_pitch_deck();
        assert_eq!(deck.len(), 10);
    }

    #[test]
    fn test_every_slide_is_factory_made() {
        let deck = build_pitch_deck();
        for (i, slide) in deck.slides.iter().enumerate() {
            assert_eq!(slide.background, Some(DARK.background), "slide {}", i + 1);

            // Accent bar is the bottom-most shape
            let bar = &slide.shapes[0];
            assert!(bar.is_card(), "slide {}", i + 1);
            assert_eq!(bar.frame.height, TOP_BAR_HEIGHT);

            // Title textbox right after the bar
            let (frame, title) = slide.text_boxes().next().unwrap();
            assert_eq!(*frame, TITLE_FRAME);
            assert!(!title.is_empty());
        }
    }

    #[test]
    fn test_slide_titles_follow_section_order() {
        let deck = build_pitch_deck();
        for (slide, spec) in deck.slides.iter().zip(PITCH_SECTIONS) {
            let (_, title) = slide.text_boxes().next().unwrap();
            assert_eq!(title.paragraphs[0].plain_text(), spec.title);
        }
    }

    #[test]
    fn test_every_slide_ends_with_footer() {
        let deck = build_pitch_deck();
        for (slide, spec) in deck.slides.iter().zip(PITCH_SECTIONS) {
            let (frame, footer) = slide.text_boxes().last().unwrap();
            assert_eq!(*frame, FOOTER_FRAME);
            assert_eq!(footer.paragraphs[0].plain_text(), spec.footer);
        }
    }

    #[test]
    fn test_solution_slide_carries_bullets_and_metrics() {
        let deck = build_pitch_deck();
        // Slide 4: bullet card + 4 metric cards + top bar
        let cards = deck.slides[3].shapes.iter().filter(|s| s.is_card()).count();
        assert_eq!(cards, 1 + 4 + 1);
    }

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(build_pitch_deck(), build_pitch_deck());
    }
}
