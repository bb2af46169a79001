//! The layout primitives.
//!
//! Each primitive mutates the target slide by appending one or more shapes.
//! Content parameters are ordered sequences; input order is reading order
//! and is preserved in the emitted paragraphs.

use super::*;
use crate::geometry::{Rect, CANVAS_WIDTH};
use crate::model::{Paragraph, Shape, Slide, TextAlignment, TextFrame, TextRun};
use crate::theme::{Color, Theme, CARD_BORDER};

/// Fill the slide background with the theme background color.
///
/// Idempotent: a second call overwrites the first (last write wins).
pub fn set_dark_background(slide: &mut Slide, theme: &Theme) {
    slide.background = Some(theme.background);
}

/// Draw the thin full-width accent bar along the top edge.
pub fn add_top_bar(slide: &mut Slide, theme: &Theme) {
    slide.add_shape(Shape::card(
        Rect::new(0.0, 0.0, CANVAS_WIDTH, TOP_BAR_HEIGHT),
        theme.accent,
        None,
    ));
}

/// Place the bold title textbox, and a smaller muted subtitle beneath it
/// when one is supplied.
///
/// Omitting the subtitle adds exactly one textbox; callers that stack
/// content below compensate with explicit `top` offsets.
pub fn add_title(slide: &mut Slide, theme: &Theme, title: &str, subtitle: Option<&str>) {
    let mut tf = TextFrame::new();
    tf.add_paragraph(Paragraph::with_run(TextRun::bold(
        title, TITLE_SIZE, theme.text,
    )));
    slide.add_shape(Shape::text_box(TITLE_FRAME, tf));

    if let Some(subtitle) = subtitle {
        let mut stf = TextFrame::new();
        stf.add_paragraph(Paragraph::with_run(TextRun::new(
            subtitle,
            SUBTITLE_SIZE,
            theme.muted,
        )));
        slide.add_shape(Shape::text_box(SUBTITLE_FRAME, stf));
    }
}

/// Draw a surface card at `frame` with an inset bullet list.
///
/// Each bullet becomes one paragraph, in input order, with uniform font
/// size and color. An empty `bullets` slice is rendered as the card alone:
/// the inner text frame is left with zero paragraphs rather than faulting.
pub fn add_bullet_block(
    slide: &mut Slide,
    theme: &Theme,
    bullets: &[&str],
    frame: Rect,
    font_size: u32,
) {
    slide.add_shape(Shape::card(frame, theme.surface, Some(CARD_BORDER)));

    let mut tf = TextFrame::wrapping();
    for bullet in bullets {
        tf.add_paragraph(
            Paragraph::with_run(TextRun::new(*bullet, font_size, theme.text))
                .spaced_after(BULLET_SPACING),
        );
    }
    slide.add_shape(Shape::text_box(
        frame.inset(BULLET_INSET_X, BULLET_INSET_Y),
        tf,
    ));
}

/// Lay out exactly two cards side by side, each with an accent title line
/// and a bulleted item list. Column order is left to right, matching
/// argument order.
///
/// An empty item slice leaves that column's items frame with zero
/// paragraphs; the card and both textboxes are still emitted.
pub fn add_two_column_cards(
    slide: &mut Slide,
    theme: &Theme,
    left_title: &str,
    left_items: &[&str],
    right_title: &str,
    right_items: &[&str],
) {
    let columns = [(left_title, left_items), (right_title, right_items)];

    for (idx, (title, items)) in columns.iter().enumerate() {
        let left = MARGIN_X + idx as f64 * COLUMN_STRIDE;
        slide.add_shape(Shape::card(
            Rect::new(left, COLUMN_TOP, COLUMN_CARD_WIDTH, COLUMN_CARD_HEIGHT),
            theme.surface,
            Some(CARD_BORDER),
        ));

        let mut title_tf = TextFrame::new();
        title_tf.add_paragraph(Paragraph::with_run(TextRun::bold(
            *title,
            COLUMN_TITLE_SIZE,
            theme.accent,
        )));
        slide.add_shape(Shape::text_box(
            Rect::new(
                left + COLUMN_INSET,
                COLUMN_TOP + COLUMN_TITLE_OFFSET,
                COLUMN_INNER_WIDTH,
                COLUMN_TITLE_HEIGHT,
            ),
            title_tf,
        ));

        let mut items_tf = TextFrame::wrapping();
        for item in *items {
            items_tf.add_paragraph(
                Paragraph::with_run(TextRun::new(*item, COLUMN_ITEM_SIZE, theme.text))
                    .spaced_after(COLUMN_ITEM_SPACING),
            );
        }
        slide.add_shape(Shape::text_box(
            Rect::new(
                left + COLUMN_INSET,
                COLUMN_TOP + COLUMN_ITEMS_OFFSET,
                COLUMN_INNER_WIDTH,
                COLUMN_ITEMS_HEIGHT,
            ),
            items_tf,
        ));
    }
}

/// Lay out one metric card per `(label, value)` pair in a single row.
///
/// Card i sits at `METRIC_START_X + i * (METRIC_CARD_WIDTH + METRIC_GAP)`;
/// the row never wraps, so a long list runs off the canvas.
pub fn add_metric_row(slide: &mut Slide, theme: &Theme, metrics: &[(&str, &str)]) {
    for (i, (label, value)) in metrics.iter().enumerate() {
        let x = METRIC_START_X + i as f64 * (METRIC_CARD_WIDTH + METRIC_GAP);
        slide.add_shape(Shape::card(
            Rect::new(x, METRIC_TOP, METRIC_CARD_WIDTH, METRIC_CARD_HEIGHT),
            theme.surface,
            Some(CARD_BORDER),
        ));

        let inner_width = METRIC_CARD_WIDTH - 2.0 * METRIC_INSET;

        let mut value_tf = TextFrame::new();
        value_tf.add_paragraph(
            Paragraph::with_run(TextRun::bold(*value, METRIC_VALUE_SIZE, theme.accent))
                .aligned(TextAlignment::Center),
        );
        slide.add_shape(Shape::text_box(
            Rect::new(
                x + METRIC_INSET,
                METRIC_TOP + METRIC_INSET,
                inner_width,
                METRIC_VALUE_HEIGHT,
            ),
            value_tf,
        ));

        let mut label_tf = TextFrame::new();
        label_tf.add_paragraph(
            Paragraph::with_run(TextRun::new(*label, METRIC_LABEL_SIZE, theme.muted))
                .aligned(TextAlignment::Center),
        );
        slide.add_shape(Shape::text_box(
            Rect::new(
                x + METRIC_INSET,
                METRIC_TOP + METRIC_LABEL_OFFSET,
                inner_width,
                METRIC_LABEL_HEIGHT,
            ),
            label_tf,
        ));
    }
}

/// Place a single bold colored line at caller-supplied geometry.
///
/// Used for one-off emphasis text such as the roadmap milestone and the
/// closing call to action.
pub fn add_callout(
    slide: &mut Slide,
    text: &str,
    frame: Rect,
    font_size: u32,
    color: Color,
    align: TextAlignment,
) {
    let mut tf = TextFrame::new();
    tf.add_paragraph(Paragraph::with_run(TextRun::bold(text, font_size, color)).aligned(align));
    slide.add_shape(Shape::text_box(frame, tf));
}

/// Place the small muted right-aligned footer line near the bottom edge.
pub fn add_footer(slide: &mut Slide, theme: &Theme, text: &str) {
    let mut tf = TextFrame::new();
    tf.add_paragraph(
        Paragraph::with_run(TextRun::new(text, FOOTER_SIZE, theme.muted))
            .aligned(TextAlignment::Right),
    );
    slide.add_shape(Shape::text_box(FOOTER_FRAME, tf));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Deck;
    use crate::theme::DARK;

    fn blank() -> Slide {
        Slide::new()
    }

    #[test]
    fn test_background_idempotent() {
        let mut slide = blank();
        set_dark_background(&mut slide, &DARK);
        set_dark_background(&mut slide, &DARK);
        assert_eq!(slide.background, Some(DARK.background));
        assert!(slide.is_empty());
    }

    #[test]
    fn test_top_bar_geometry() {
        let mut slide = blank();
        add_top_bar(&mut slide, &DARK);

        assert_eq!(slide.len(), 1);
        let bar = &slide.shapes[0];
        assert_eq!(bar.frame, Rect::new(0.0, 0.0, CANVAS_WIDTH, TOP_BAR_HEIGHT));
        assert!(bar.is_card());
    }

    #[test]
    fn test_title_without_subtitle_is_one_textbox() {
        let mut slide = blank();
        add_title(&mut slide, &DARK, "X", None);

        assert_eq!(slide.text_boxes().count(), 1);
        let (frame, tf) = slide.text_boxes().next().unwrap();
        assert_eq!(*frame, TITLE_FRAME);
        let run = &tf.paragraphs[0].runs[0];
        assert_eq!(run.text, "X");
        assert_eq!(run.size, TITLE_SIZE);
        assert!(run.bold);
        assert_eq!(run.color, DARK.text);
    }

    #[test]
    fn test_title_with_subtitle_is_two_textboxes() {
        let mut slide = blank();
        add_title(&mut slide, &DARK, "X", Some("Y"));

        let boxes: Vec<_> = slide.text_boxes().collect();
        assert_eq!(boxes.len(), 2);

        let (frame, sub) = boxes[1];
        assert_eq!(*frame, SUBTITLE_FRAME);
        let run = &sub.paragraphs[0].runs[0];
        assert_eq!(run.text, "Y");
        assert_eq!(run.size, SUBTITLE_SIZE);
        assert!(!run.bold);
        assert_eq!(run.color, DARK.muted);
    }

    #[test]
    fn test_bullet_block_preserves_order_and_style() {
        let mut slide = blank();
        let bullets = ["first", "second", "third"];
        add_bullet_block(&mut slide, &DARK, &bullets, BULLET_FRAME, 20);

        // Card plus inner textbox
        assert_eq!(slide.len(), 2);
        assert_eq!(slide.shapes[0].frame, BULLET_FRAME);

        let (_, tf) = slide.text_boxes().next().unwrap();
        assert!(tf.word_wrap);
        assert_eq!(tf.paragraphs.len(), bullets.len());
        for (para, expected) in tf.paragraphs.iter().zip(bullets) {
            assert_eq!(para.plain_text(), expected);
            assert_eq!(para.runs[0].size, 20);
            assert_eq!(para.runs[0].color, DARK.text);
            assert_eq!(para.space_after, Some(BULLET_SPACING));
        }
    }

    #[test]
    fn test_bullet_block_requested_geometry_is_exact() {
        let mut slide = blank();
        let frame = Rect::new(0.9, 2.3, 11.5, 3.9);
        add_bullet_block(&mut slide, &DARK, &["a"], frame, 24);
        assert_eq!(slide.shapes[0].frame, frame);
    }

    #[test]
    fn test_bullet_block_empty_input_does_not_fault() {
        let mut slide = blank();
        add_bullet_block(&mut slide, &DARK, &[], BULLET_FRAME, 24);

        assert_eq!(slide.len(), 2);
        let (_, tf) = slide.text_boxes().next().unwrap();
        assert_eq!(tf.paragraphs.len(), 0);
        assert!(tf.is_empty());
    }

    #[test]
    fn test_two_column_cards_left_to_right() {
        let mut slide = blank();
        add_two_column_cards(&mut slide, &DARK, "L", &["l1", "l2"], "R", &["r1"]);

        let cards: Vec<_> = slide.shapes.iter().filter(|s| s.is_card()).collect();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].frame.left, MARGIN_X);
        assert_eq!(cards[1].frame.left, MARGIN_X + COLUMN_STRIDE);

        let boxes: Vec<_> = slide.text_boxes().collect();
        // Title + items per column
        assert_eq!(boxes.len(), 4);
        assert_eq!(boxes[0].1.paragraphs[0].plain_text(), "L");
        assert_eq!(boxes[0].1.paragraphs[0].runs[0].color, DARK.accent);
        assert_eq!(boxes[1].1.paragraphs.len(), 2);
        assert_eq!(boxes[2].1.paragraphs[0].plain_text(), "R");
        assert_eq!(boxes[3].1.paragraphs[0].plain_text(), "r1");
    }

    #[test]
    fn test_two_column_cards_empty_items_do_not_fault() {
        let mut slide = blank();
        add_two_column_cards(&mut slide, &DARK, "L", &[], "R", &["r1"]);

        // Both cards and all four textboxes are still there
        let cards: Vec<_> = slide.shapes.iter().filter(|s| s.is_card()).collect();
        assert_eq!(cards.len(), 2);
        let boxes: Vec<_> = slide.text_boxes().collect();
        assert_eq!(boxes.len(), 4);

        // Left items frame is empty, left title and right column untouched
        assert_eq!(boxes[0].1.paragraphs[0].plain_text(), "L");
        assert_eq!(boxes[1].1.paragraphs.len(), 0);
        assert!(boxes[1].1.is_empty());
        assert_eq!(boxes[3].1.paragraphs[0].plain_text(), "r1");
    }

    #[test]
    fn test_metric_row_offsets_and_order() {
        let mut slide = blank();
        add_metric_row(&mut slide, &DARK, &[("A", "1"), ("B", "2"), ("C", "3")]);

        let cards: Vec<_> = slide.shapes.iter().filter(|s| s.is_card()).collect();
        assert_eq!(cards.len(), 3);
        let stride = METRIC_CARD_WIDTH + METRIC_GAP;
        for (i, card) in cards.iter().enumerate() {
            assert_eq!(card.frame.left, METRIC_START_X + i as f64 * stride);
            assert_eq!(card.frame.top, METRIC_TOP);
            assert_eq!(card.frame.width, METRIC_CARD_WIDTH);
        }

        // Value above label, centered, per pair
        let boxes: Vec<_> = slide.text_boxes().collect();
        assert_eq!(boxes.len(), 6);
        assert_eq!(boxes[0].1.paragraphs[0].plain_text(), "1");
        assert_eq!(boxes[1].1.paragraphs[0].plain_text(), "A");
        assert!(boxes[0].0.top < boxes[1].0.top);
        assert_eq!(boxes[0].1.paragraphs[0].alignment, TextAlignment::Center);
        assert_eq!(boxes[5].1.paragraphs[0].plain_text(), "C");
    }

    #[test]
    fn test_metric_row_empty_input() {
        let mut slide = blank();
        add_metric_row(&mut slide, &DARK, &[]);
        assert!(slide.is_empty());
    }

    #[test]
    fn test_footer_is_right_aligned_and_muted() {
        let mut slide = blank();
        add_footer(&mut slide, &DARK, "Contact: 402FC project team");

        let (frame, tf) = slide.text_boxes().next().unwrap();
        assert_eq!(*frame, FOOTER_FRAME);
        assert_eq!(tf.paragraphs[0].alignment, TextAlignment::Right);
        assert_eq!(tf.paragraphs[0].runs[0].color, DARK.muted);
        assert_eq!(tf.paragraphs[0].runs[0].size, FOOTER_SIZE);
    }

    #[test]
    fn test_callout() {
        let mut slide = blank();
        let frame = Rect::new(0.9, 6.25, 11.5, 0.7);
        add_callout(
            &mut slide,
            "Thank you | 402FC",
            frame,
            24,
            DARK.accent,
            TextAlignment::Center,
        );

        let (got, tf) = slide.text_boxes().next().unwrap();
        assert_eq!(*got, frame);
        let para = &tf.paragraphs[0];
        assert_eq!(para.alignment, TextAlignment::Center);
        assert!(para.runs[0].bold);
        assert_eq!(para.runs[0].color, DARK.accent);
    }

    #[test]
    fn test_primitives_do_not_touch_other_slides() {
        let mut deck = Deck::widescreen();
        add_slide(&mut deck, &DARK, "One", None);
        let before = deck.slides[0].len();

        let slide = add_slide(&mut deck, &DARK, "Two", None);
        add_footer(slide, &DARK, "f");

        assert_eq!(deck.slides[0].len(), before);
    }
}
