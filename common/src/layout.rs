//! Rectangle layout of the badge and tap hit testing.
//!
//! Pure geometry: given the viewport and its responsive metrics, place every
//! badge element in viewport coordinates. Drawing code and the presentation
//! surface's tap forwarding both work from the same [`BadgeLayout`], so a
//! tap lands on exactly what was drawn.
//!
//! # Vertical Stack
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ Name Badge        [⟳] [▣]    │  header (fixed height)
//! │            gap               │
//! │           HELLO              │  hello block (welcome + subtitle fonts)
//! │         MY NAME IS           │
//! │            gap               │
//! │   ┌──────────────────────┐   │
//! │   │       name box       │   │  name box (responsive size)
//! │   │  [Change Text Color] │   │
//! │   └──────────────────────┘   │
//! │            gap               │
//! │      [▯ Portrait Mode]       │  orientation pill (optional)
//! │            gap               │
//! │   Tip: Rotate your device…   │  instructions (optional)
//! └──────────────────────────────┘
//! ```
//!
//! Free space is spread evenly between the items, never below the
//! orientation's vertical margin. When even the margins do not fit, the
//! instructions and then the pill are left out.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::controller::BadgeAction;
use crate::labels::CHANGE_TEXT_COLOR;
use crate::metrics::ResponsiveMetrics;
use crate::viewport::{Viewport, round_px};

// =============================================================================
// Layout Constants
// =============================================================================

/// Header bar height in pixels.
pub const HEADER_HEIGHT: u32 = 32;

/// Square icon button side (rotate, palette).
pub const ICON_BUTTON_SIZE: u32 = 24;

/// Horizontal gap between the two icon buttons.
pub const ICON_BUTTON_GAP: u32 = 10;

/// Gap between the welcome and subtitle lines.
pub const HELLO_LINE_GAP: u32 = 4;

/// Orientation indicator pill.
pub const PILL_WIDTH: u32 = 200;
pub const PILL_HEIGHT: u32 = 20;

/// Instructions line height.
pub const TIP_HEIGHT: u32 = 14;

/// Text color button: padding around the label and inset from the box bottom.
const BUTTON_PADDING_X: u32 = 16;
const BUTTON_PADDING_Y: u32 = 8;
const BUTTON_BOTTOM_INSET: u32 = 8;

/// Approximate monospace advance as a fraction of the font size.
const GLYPH_ADVANCE_RATIO: f32 = 0.6;

// =============================================================================
// Badge Layout
// =============================================================================

/// Placement of every badge element, in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BadgeLayout {
    pub bounds: Rectangle,
    pub header: Rectangle,
    pub rotate_button: Rectangle,
    pub palette_button: Rectangle,
    pub hello_block: Rectangle,
    pub name_box: Rectangle,
    pub text_color_button: Rectangle,
    pub orientation_pill: Option<Rectangle>,
    pub instructions: Option<Rectangle>,
}

impl BadgeLayout {
    pub fn compute(
        viewport: Viewport,
        metrics: &ResponsiveMetrics,
    ) -> Self {
        let (width, height) = viewport.rounded();
        let bounds = Rectangle::new(Point::zero(), Size::new(width, height));

        // Header spans the padded content width, buttons right-aligned
        let padding = round_px(metrics.horizontal_padding).min(width / 2);
        let content_width = width - 2 * padding;
        let header = Rectangle::new(Point::new(padding as i32, 0), Size::new(content_width, HEADER_HEIGHT));

        let button_y = ((HEADER_HEIGHT - ICON_BUTTON_SIZE) / 2) as i32;
        let palette_x = (padding + content_width) as i32 - ICON_BUTTON_SIZE as i32;
        let rotate_x = palette_x - (ICON_BUTTON_GAP + ICON_BUTTON_SIZE) as i32;
        let icon_size = Size::new(ICON_BUTTON_SIZE, ICON_BUTTON_SIZE);
        let palette_button = Rectangle::new(Point::new(palette_x, button_y), icon_size);
        let rotate_button = Rectangle::new(Point::new(rotate_x, button_y), icon_size);

        // Vertical stack below the header
        let hello_height = round_px(metrics.welcome_font + metrics.subtitle_font) + HELLO_LINE_GAP;
        let box_size = Size::new(round_px(metrics.name_box_width), round_px(metrics.name_box_height));
        let available = height.saturating_sub(HEADER_HEIGHT);
        let margin = round_px(metrics.vertical_margin);

        let optional_heights = [PILL_HEIGHT, TIP_HEIGHT];
        let mut shown = optional_heights.len();
        let (stacked, gaps) = loop {
            let stacked = hello_height + box_size.height + optional_heights[..shown].iter().sum::<u32>();
            let gaps = (shown + 3) as u32;
            if stacked + gaps * margin <= available || shown == 0 {
                break (stacked, gaps);
            }
            shown -= 1;
        };
        let gap = (available.saturating_sub(stacked) / gaps).max(margin);

        let centered_x = |item_width: u32| (width as i32 - item_width as i32) / 2;

        let mut y = (HEADER_HEIGHT + gap) as i32;
        let hello_block = Rectangle::new(Point::new(centered_x(content_width), y), Size::new(content_width, hello_height));
        y += (hello_height + gap) as i32;

        let name_box = Rectangle::new(Point::new(centered_x(box_size.width), y), box_size);
        y += (box_size.height + gap) as i32;

        let text_color_button = text_color_button_rect(name_box, metrics.button_font);

        let orientation_pill = (shown >= 1).then(|| {
            let pill_width = PILL_WIDTH.min(content_width);
            let rect = Rectangle::new(Point::new(centered_x(pill_width), y), Size::new(pill_width, PILL_HEIGHT));
            y += (PILL_HEIGHT + gap) as i32;
            rect
        });

        let instructions = (shown >= 2)
            .then(|| Rectangle::new(Point::new(centered_x(content_width), y), Size::new(content_width, TIP_HEIGHT)));

        Self {
            bounds,
            header,
            rotate_button,
            palette_button,
            hello_block,
            name_box,
            text_color_button,
            orientation_pill,
            instructions,
        }
    }

    /// Action for a tap at `point`, if it lands on a control.
    pub fn hit_test(
        &self,
        point: Point,
    ) -> Option<BadgeAction> {
        if self.rotate_button.contains(point) {
            Some(BadgeAction::RequestRotation)
        } else if self.palette_button.contains(point) {
            Some(BadgeAction::CycleBadgeColor)
        } else if self.text_color_button.contains(point) {
            Some(BadgeAction::CycleTextColor)
        } else {
            None
        }
    }
}

/// "Change Text Color" button, centered at the bottom of the name box.
fn text_color_button_rect(
    name_box: Rectangle,
    button_font: f32,
) -> Rectangle {
    let label_width = round_px(button_font * GLYPH_ADVANCE_RATIO * CHANGE_TEXT_COLOR.len() as f32);
    let max_width = name_box.size.width.saturating_sub(2 * BUTTON_PADDING_X);
    let size = Size::new(
        (label_width + 2 * BUTTON_PADDING_X).min(max_width),
        round_px(button_font) + 2 * BUTTON_PADDING_Y,
    );
    let x = name_box.top_left.x + (name_box.size.width as i32 - size.width as i32) / 2;
    let y = name_box.top_left.y + name_box.size.height as i32 - (BUTTON_BOTTOM_INSET + size.height) as i32;
    Rectangle::new(Point::new(x, y), size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::derive_metrics;

    fn layout_for(
        width: f32,
        height: f32,
    ) -> BadgeLayout {
        let vp = Viewport::new(width, height).unwrap();
        BadgeLayout::compute(vp, &derive_metrics(vp, vp.orientation()))
    }

    fn inside(
        outer: &Rectangle,
        inner: &Rectangle,
    ) -> bool {
        let Some(inner_br) = inner.bottom_right() else { return true };
        outer.contains(inner.top_left) && outer.contains(inner_br)
    }

    #[test]
    fn test_portrait_shows_everything_inside_viewport() {
        let layout = layout_for(240.0, 400.0);
        assert!(layout.orientation_pill.is_some());
        assert!(layout.instructions.is_some());

        for rect in [
            layout.header,
            layout.rotate_button,
            layout.palette_button,
            layout.hello_block,
            layout.name_box,
            layout.text_color_button,
            layout.orientation_pill.unwrap(),
            layout.instructions.unwrap(),
        ] {
            assert!(inside(&layout.bounds, &rect), "{rect:?} outside {:?}", layout.bounds);
        }
    }

    #[test]
    fn test_name_box_matches_metrics_and_is_centered() {
        let layout = layout_for(400.0, 800.0);
        assert_eq!(layout.name_box.size, Size::new(360, 160));
        assert_eq!(layout.name_box.top_left.x, 20);
    }

    #[test]
    fn test_short_landscape_drops_optional_rows() {
        let layout = layout_for(400.0, 240.0);
        assert!(layout.instructions.is_none());
        assert!(inside(&layout.bounds, &layout.name_box));
    }

    #[test]
    fn test_stack_order_top_to_bottom() {
        let layout = layout_for(360.0, 640.0);
        let pill = layout.orientation_pill.unwrap();
        let tip = layout.instructions.unwrap();
        assert!(layout.header.top_left.y < layout.hello_block.top_left.y);
        assert!(layout.hello_block.top_left.y < layout.name_box.top_left.y);
        assert!(layout.name_box.top_left.y < pill.top_left.y);
        assert!(pill.top_left.y < tip.top_left.y);
    }

    #[test]
    fn test_text_color_button_inside_name_box() {
        for (w, h) in [(240.0, 400.0), (400.0, 240.0), (390.0, 844.0)] {
            let layout = layout_for(w, h);
            assert!(inside(&layout.name_box, &layout.text_color_button), "{w}x{h}");
        }
    }

    #[test]
    fn test_hit_test_controls() {
        let layout = layout_for(240.0, 400.0);
        assert_eq!(layout.hit_test(layout.rotate_button.center()), Some(BadgeAction::RequestRotation));
        assert_eq!(layout.hit_test(layout.palette_button.center()), Some(BadgeAction::CycleBadgeColor));
        assert_eq!(layout.hit_test(layout.text_color_button.center()), Some(BadgeAction::CycleTextColor));
        assert_eq!(layout.hit_test(layout.hello_block.center()), None);
        assert_eq!(layout.hit_test(Point::new(-5, -5)), None);
    }

    #[test]
    fn test_icon_buttons_do_not_overlap() {
        let layout = layout_for(240.0, 400.0);
        assert!(layout.rotate_button.intersection(&layout.palette_button).is_zero_sized());
    }
}
