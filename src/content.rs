//! Literal slide content for the 402FC pitch deck.
//!
//! All text in the deck lives here as one ordered data table, kept apart
//! from the layout logic: each [`SlideSpec`] names a section and lists the
//! content blocks the builder feeds to the primitives. Nothing in this
//! module computes anything.

use crate::geometry::Rect;
use crate::layout::{BULLET_FRAME, BULLET_SIZE};
use serde::Serialize;

/// Which theme color a callout line uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutTone {
    /// Brand accent (the closing CTA)
    Accent,
    /// Success green (the roadmap milestone)
    Success,
}

/// One content block on a slide, dispatched to a layout primitive.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum Block {
    /// A bullet-list card at explicit geometry.
    Bullets {
        items: &'static [&'static str],
        frame: Rect,
        font_size: u32,
    },
    /// Two side-by-side titled cards.
    TwoColumn {
        left_title: &'static str,
        left_items: &'static [&'static str],
        right_title: &'static str,
        right_items: &'static [&'static str],
    },
    /// A row of (label, value) metric cards.
    Metrics {
        metrics: &'static [(&'static str, &'static str)],
    },
    /// A single bold emphasis line.
    Callout {
        text: &'static str,
        frame: Rect,
        font_size: u32,
        tone: CalloutTone,
        centered: bool,
    },
}

/// One logical deck section: factory input plus content blocks.
#[derive(Debug, Clone, Serialize)]
pub struct SlideSpec {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub blocks: &'static [Block],
    pub footer: &'static str,
}

/// The ten deck sections, in presentation order.
pub const PITCH_SECTIONS: &[SlideSpec] = &[
    // 1. Title
    SlideSpec {
        title: "402FC: Pay-Per-Watch Football",
        subtitle: Some(
            "Making football access fairer for fans and more profitable for rights holders",
        ),
        blocks: &[Block::Bullets {
            items: &[
                "Origin: Built from real fan pain in Indonesia",
                "Model: Pay only for the matches you actually watch",
                "Rail: x402 + STX micropayments for instant unlock",
                "Vision: Convert subscription-frustrated users into legal paying viewers",
            ],
            frame: Rect::new(0.9, 2.3, 11.5, 3.9),
            font_size: 20,
        }],
        footer: "Hackathon pitch deck | 402FC",
    },
    // 2. Background
    SlideSpec {
        title: "Background",
        subtitle: Some("Football passion is high, but access is rigid"),
        blocks: &[Block::Bullets {
            items: &[
                "In Indonesia, football is one of the strongest fan cultures.",
                "Fans are loyal to one club and do not want to miss key matches.",
                "Many supporters only want selected fixtures, not full monthly bundles.",
                "When schedules conflict, users still pay the full subscription and feel wasted spend.",
            ],
            frame: BULLET_FRAME,
            font_size: BULLET_SIZE,
        }],
        footer: "Context from fan behavior in Indonesia",
    },
    // 3. Problem
    SlideSpec {
        title: "Problem",
        subtitle: Some("Subscription-only access creates friction and leakage"),
        blocks: &[Block::TwoColumn {
            left_title: "User-side pain",
            left_items: &[
                "Paying monthly for 1-2 matches feels inefficient",
                "Emergency schedules make paid subscriptions underused",
                "Price mismatch pushes fans to illegal streams",
            ],
            right_title: "Market-side loss",
            right_items: &[
                "Rights holders miss casual and price-sensitive demand",
                "Piracy captures users willing to pay a fair per-match price",
                "Limited data on match-level willingness to pay",
            ],
        }],
        footer: "Core gap: pricing model does not match fan behavior",
    },
    // 4. Solution
    SlideSpec {
        title: "Solution",
        subtitle: Some("402FC enables legal, flexible pay-per-watch access"),
        blocks: &[
            Block::Bullets {
                items: &[
                    "Per-event purchase: users pay only when they watch",
                    "Micropayment unlock: wallet signs payment on demand",
                    "No subscription lock-in, no long commitment",
                    "Expandable paid modules: stream pass, highlights, analytics, AI insights",
                ],
                frame: BULLET_FRAME,
                font_size: BULLET_SIZE,
            },
            Block::Metrics {
                metrics: &[
                    ("Entry Price", "0.02-0.08 STX"),
                    ("Protocol", "HTTP 402"),
                    ("Payment Rail", "x402 + STX"),
                    ("Model", "Per Match"),
                ],
            },
        ],
        footer: "Low-friction legal alternative to piracy",
    },
    // 5. Product flow
    SlideSpec {
        title: "How It Works",
        subtitle: Some("Two-step payment flow"),
        blocks: &[
            Block::Bullets {
                items: &[
                    "1) User requests premium match content",
                    "2) Server responds with HTTP 402 Payment Required",
                    "3) Wallet signs micro STX payment",
                    "4) Paid retry returns unlocked content/session",
                ],
                frame: Rect::new(0.9, 2.3, 11.5, 3.4),
                font_size: 22,
            },
            Block::Bullets {
                items: &[
                    "MVP already validates this preflight + paid retry behavior",
                    "Integration tests lock flow reliability for future iterations",
                ],
                frame: Rect::new(0.9, 5.95, 11.5, 1.05),
                font_size: 14,
            },
        ],
        footer: "x402 payment challenge -> signed payment -> content unlock",
    },
    // 6. Market
    SlideSpec {
        title: "Market Opportunity",
        subtitle: Some("Indonesia beachhead, then territory-by-territory expansion"),
        blocks: &[Block::TwoColumn {
            left_title: "MVP market model",
            left_items: &[
                "TAM: Large digital football audience",
                "SAM: Fans who prefer occasional event-based purchases",
                "SOM: Focused first-year capture via one-league launch",
            ],
            right_title: "Illustrative assumptions",
            right_items: &[
                "Early paid capture: 0.2% to 0.8% of reachable SAM",
                "Paid events/user/month: 1 to 3",
                "Upside from high-intent derby and big-match windows",
            ],
        }],
        footer: "Illustrative planning model, not final financial guidance",
    },
    // 7. Benefits
    SlideSpec {
        title: "Stakeholder Benefits",
        subtitle: Some("Win-win for fans and rights ecosystem"),
        blocks: &[Block::TwoColumn {
            left_title: "For clubs/leagues/organizers",
            left_items: &[
                "New incremental revenue from non-subscriber segments",
                "Monetize long-tail fixtures beyond marquee matches",
                "Reduce piracy pressure with fair legal pricing",
                "Get richer match-level demand and pricing data",
            ],
            right_title: "For fans",
            right_items: &[
                "Pay only when they watch",
                "Lower commitment and clearer value per spend",
                "Faster, cleaner legal access for priority matches",
                "Optional premium modules without bundle lock-in",
            ],
        }],
        footer: "Business and consumer incentives are aligned",
    },
    // 8. Monetization
    SlideSpec {
        title: "Monetization Model",
        subtitle: Some("Flexible packaging around match-level intent"),
        blocks: &[
            Block::Bullets {
                items: &[
                    "Single match pass (core product)",
                    "Derby pass and club-only mini bundles",
                    "Replay/highlight unlocks after live window",
                    "Premium analytics and AI prediction add-ons",
                    "Future levers: sponsor-backed unlock credits and dynamic pricing",
                ],
                frame: BULLET_FRAME,
                font_size: BULLET_SIZE,
            },
            Block::Metrics {
                metrics: &[
                    ("Primary KPI", "Paid Unlock Rate"),
                    ("Retention KPI", "Repeat Purchases"),
                    ("Ops KPI", "Playback Success"),
                    ("Risk KPI", "Piracy Substitution"),
                ],
            },
        ],
        footer: "Revenue scales with real match demand, not forced subscriptions",
    },
    // 9. Roadmap
    SlideSpec {
        title: "Execution Roadmap",
        subtitle: Some("From hackathon MVP to licensed production"),
        blocks: &[
            Block::Bullets {
                items: &[
                    "Phase 1 (now): Stabilize payment + entitlement flow, polish UX",
                    "Phase 2: Territory pilot with one licensed competition",
                    "Phase 3: Add geo-rights, DRM, concurrency controls",
                    "Phase 4: Expand by territory and add prediction intelligence",
                ],
                frame: Rect::new(0.9, 2.3, 11.5, 3.3),
                font_size: 20,
            },
            Block::Callout {
                text: "Near-term goal: prove conversion + reliability in one pilot market, then scale.",
                frame: Rect::new(0.95, 5.85, 11.2, 0.8),
                font_size: 18,
                tone: CalloutTone::Success,
                centered: false,
            },
        ],
        footer: "Rights-compliant expansion strategy",
    },
    // 10. Closing
    SlideSpec {
        title: "Closing Thesis",
        subtitle: Some(
            "402FC turns subscription-frustrated football fans into legal pay-per-watch customers",
        ),
        blocks: &[
            Block::Bullets {
                items: &[
                    "Fan truth: loyalty is club-centric, not always monthly-plan-centric.",
                    "Product truth: match-level pricing creates a fair legal path.",
                    "Business truth: rights holders gain incremental demand and better pricing intelligence.",
                    "Ask: support pilot territory partnerships to validate this model at scale.",
                ],
                frame: Rect::new(0.9, 2.3, 11.5, 3.8),
                font_size: 20,
            },
            Block::Callout {
                text: "Thank you | 402FC",
                frame: Rect::new(0.9, 6.25, 11.5, 0.7),
                font_size: 24,
                tone: CalloutTone::Accent,
                centered: true,
            },
        ],
        footer: "Contact: 402FC project team",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_sections_in_order() {
        assert_eq!(PITCH_SECTIONS.len(), 10);
        let titles: Vec<_> = PITCH_SECTIONS.iter().map(|s| s.title).collect();
        assert_eq!(titles[0], "402FC: Pay-Per-Watch Football");
        assert_eq!(titles[4], "How It Works");
        assert_eq!(titles[9], "Closing Thesis");
    }

    #[test]
    fn test_all_sections_have_subtitle_and_footer() {
        for spec in PITCH_SECTIONS {
            assert!(spec.subtitle.is_some(), "{} lacks subtitle", spec.title);
            assert!(!spec.footer.is_empty(), "{} lacks footer", spec.title);
            assert!(!spec.blocks.is_empty(), "{} lacks blocks", spec.title);
        }
    }

    #[test]
    fn test_section_serialization() {
        // Slide 9 carries a success callout
        let json = serde_json::to_string(&PITCH_SECTIONS[8]).unwrap();
        assert!(json.contains("\"title\":\"Execution Roadmap\""));
        assert!(json.contains("\"type\":\"Bullets\""));
        assert!(json.contains("\"type\":\"Callout\""));
        assert!(json.contains("\"tone\":\"success\""));
    }

    #[test]
    fn test_no_literal_content_is_empty() {
        for spec in PITCH_SECTIONS {
            for block in spec.blocks {
                match block {
                    Block::Bullets { items, .. } => assert!(!items.is_empty()),
                    Block::TwoColumn {
                        left_items,
                        right_items,
                        ..
                    } => {
                        assert!(!left_items.is_empty());
                        assert!(!right_items.is_empty());
                    }
                    Block::Metrics { metrics } => assert!(!metrics.is_empty()),
                    Block::Callout { text, .. } => assert!(!text.is_empty()),
                }
            }
        }
    }
}
