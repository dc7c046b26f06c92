//! Pre-computed static text styles to avoid per-frame object construction.
//!
//! Badge fonts are chosen per frame from the responsive metrics (see
//! [`FontPolicy`](crate::widgets::FontPolicy)), so only the alignment half of
//! each style can be const. Every badge text is anchored at its vertical
//! middle so it can be placed by the centers of layout rectangles.

use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};

/// Centered horizontally and vertically on the anchor point.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Left-aligned, vertically centered. Header title and pill labels.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Middle)
    .build();

/// Top-left anchored. Debug log lines.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();
