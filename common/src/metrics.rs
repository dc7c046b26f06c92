//! Responsive sizing derived from the viewport.
//!
//! Every size is a fraction of the viewport's *short* side, so text and box
//! proportions stay stable across a rotation. Only the name box width (and
//! the fixed spacing) change character in landscape, where the box stretches
//! along the long side to use the extra horizontal room.
//!
//! | Metric            | Portrait      | Landscape     |
//! |-------------------|---------------|---------------|
//! | welcome font      | 0.14 · short  | 0.14 · short  |
//! | subtitle font     | 0.045 · short | 0.05 · short  |
//! | name font         | 0.10 · short  | 0.10 · short  |
//! | name box height   | 0.40 · short  | 0.5 · short   |
//! | name box width    | 0.9 · short   | 0.8 · long    |
//! | horizontal pad    | 20            | 40            |
//! | vertical margin   | 5             | 10            |
//! | pronoun font      | 0.045 · short | 0.045 · short |
//! | tagline font      | 0.0375 · short| 0.0375 · short|
//! | button font       | 0.04 · short  | 0.04 · short  |

use crate::config::{
    LANDSCAPE_HORIZONTAL_PADDING,
    LANDSCAPE_VERTICAL_MARGIN,
    PORTRAIT_HORIZONTAL_PADDING,
    PORTRAIT_VERTICAL_MARGIN,
};
use crate::orientation::OrientationMode;
use crate::viewport::Viewport;

const WELCOME_FONT_RATIO: f32 = 0.14;
const NAME_FONT_RATIO: f32 = 0.10;
const PRONOUN_FONT_RATIO: f32 = 0.045;
const TAGLINE_FONT_RATIO: f32 = 0.0375;
const BUTTON_FONT_RATIO: f32 = 0.04;

const PORTRAIT_SUBTITLE_FONT_RATIO: f32 = 0.045;
const LANDSCAPE_SUBTITLE_FONT_RATIO: f32 = 0.05;

const PORTRAIT_NAME_BOX_HEIGHT_RATIO: f32 = 0.40;
const LANDSCAPE_NAME_BOX_HEIGHT_RATIO: f32 = 0.5;

/// Portrait box width, against the short side.
const PORTRAIT_NAME_BOX_WIDTH_RATIO: f32 = 0.9;
/// Landscape box width, against the long side.
const LANDSCAPE_NAME_BOX_WIDTH_RATIO: f32 = 0.8;

/// Derived sizes for one render, in layout pixels.
///
/// A projection of `(Viewport, OrientationMode)`; never stored apart from
/// those inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResponsiveMetrics {
    pub orientation: OrientationMode,
    pub welcome_font: f32,
    pub subtitle_font: f32,
    pub name_font: f32,
    pub name_box_height: f32,
    pub name_box_width: f32,
    pub horizontal_padding: f32,
    pub vertical_margin: f32,
    pub pronoun_font: f32,
    pub tagline_font: f32,
    pub button_font: f32,
}

/// Compute the responsive metrics for a viewport in a given orientation.
pub fn derive_metrics(
    viewport: Viewport,
    orientation: OrientationMode,
) -> ResponsiveMetrics {
    let short = viewport.short_side();
    let long = viewport.long_side();

    let (subtitle_ratio, box_height_ratio, name_box_width, horizontal_padding, vertical_margin) = match orientation {
        OrientationMode::Landscape => (
            LANDSCAPE_SUBTITLE_FONT_RATIO,
            LANDSCAPE_NAME_BOX_HEIGHT_RATIO,
            long * LANDSCAPE_NAME_BOX_WIDTH_RATIO,
            LANDSCAPE_HORIZONTAL_PADDING,
            LANDSCAPE_VERTICAL_MARGIN,
        ),
        OrientationMode::Portrait => (
            PORTRAIT_SUBTITLE_FONT_RATIO,
            PORTRAIT_NAME_BOX_HEIGHT_RATIO,
            short * PORTRAIT_NAME_BOX_WIDTH_RATIO,
            PORTRAIT_HORIZONTAL_PADDING,
            PORTRAIT_VERTICAL_MARGIN,
        ),
    };

    ResponsiveMetrics {
        orientation,
        welcome_font: short * WELCOME_FONT_RATIO,
        subtitle_font: short * subtitle_ratio,
        name_font: short * NAME_FONT_RATIO,
        name_box_height: short * box_height_ratio,
        name_box_width,
        horizontal_padding,
        vertical_margin,
        pronoun_font: short * PRONOUN_FONT_RATIO,
        tagline_font: short * TAGLINE_FONT_RATIO,
        button_font: short * BUTTON_FONT_RATIO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(
        actual: f32,
        expected: f32,
    ) -> bool {
        (actual - expected).abs() < 1e-3
    }

    #[test]
    fn test_portrait_scenario() {
        let vp = Viewport::new(400.0, 800.0).unwrap();
        let m = derive_metrics(vp, vp.orientation());

        assert_eq!(m.orientation, OrientationMode::Portrait);
        assert!(approx(m.name_box_height, 160.0));
        assert!(approx(m.name_box_width, 360.0));
        assert!(approx(m.welcome_font, 56.0));
        assert!(approx(m.subtitle_font, 18.0));
        assert_eq!(m.horizontal_padding, 20.0);
        assert_eq!(m.vertical_margin, 5.0);
    }

    #[test]
    fn test_landscape_scenario() {
        let vp = Viewport::new(800.0, 400.0).unwrap();
        let m = derive_metrics(vp, vp.orientation());

        assert_eq!(m.orientation, OrientationMode::Landscape);
        assert!(approx(m.name_box_height, 200.0));
        assert!(approx(m.name_box_width, 640.0));
        assert!(approx(m.subtitle_font, 20.0));
        assert_eq!(m.horizontal_padding, 40.0);
        assert_eq!(m.vertical_margin, 10.0);
    }

    #[test]
    fn test_shared_fonts_stable_across_rotation() {
        let portrait = Viewport::new(360.0, 640.0).unwrap();
        let landscape = portrait.rotated();
        let p = derive_metrics(portrait, portrait.orientation());
        let l = derive_metrics(landscape, landscape.orientation());

        assert_eq!(p.welcome_font, l.welcome_font);
        assert_eq!(p.name_font, l.name_font);
        assert_eq!(p.pronoun_font, l.pronoun_font);
        assert_eq!(p.tagline_font, l.tagline_font);
        assert_eq!(p.button_font, l.button_font);
    }

    #[test]
    fn test_landscape_name_box_wider_than_portrait() {
        for (w, h) in [(240.0, 400.0), (360.0, 640.0), (390.0, 844.0), (768.0, 1024.0)] {
            let portrait = Viewport::new(w, h).unwrap();
            let landscape = portrait.rotated();
            let p = derive_metrics(portrait, portrait.orientation());
            let l = derive_metrics(landscape, landscape.orientation());
            assert!(l.name_box_width > p.name_box_width, "{w}x{h}");
        }
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let vp = Viewport::new(412.0, 915.0).unwrap();
        assert_eq!(derive_metrics(vp, vp.orientation()), derive_metrics(vp, vp.orientation()));
    }
}
