//! The name badge screen.
//!
//! Draws one frame of the badge from a [`BadgeScene`] snapshot: background
//! in the badge color, header with the two icon buttons, the fading hello
//! block, the name box, the orientation pill and the instructions.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use super::fonts::{FontPolicy, FontRole};
use super::icons::{draw_device_glyph, draw_palette_icon, draw_rotate_icon};
use super::primitives::{draw_rounded_panel, draw_text, draw_text_with_shadow};
use crate::animations::{AnimationFrame, fade_over, lerp_rgb565};
use crate::colors::{BLACK, BUTTON_BORDER, BUTTON_FILL, GRAY_333, GRAY_666, WHITE};
use crate::config::{BADGE_NAME, BADGE_PRONOUNS, BADGE_TAGLINE};
use crate::controller::DisplayStateController;
use crate::labels::{CHANGE_TEXT_COLOR, HELLO, MY_NAME_IS, Platform, TITLE, dimensions_label};
use crate::layout::BadgeLayout;
use crate::metrics::ResponsiveMetrics;
use crate::orientation::{OrientationMode, OrientationService};
use crate::styles::{CENTERED, LEFT_ALIGNED};
use crate::viewport::Viewport;

/// Header title size in pixels.
const TITLE_FONT_PX: f32 = 16.0;

/// Orientation pill and instructions text size in pixels.
const INDICATOR_FONT_PX: f32 = 11.0;

const NAME_BOX_RADIUS: u32 = 14;
const BUTTON_RADIUS: u32 = 10;

/// Name box drop shadow offset.
const BOX_SHADOW_OFFSET: Point = Point::new(0, 4);

/// Icon button fill: white at 20% over the badge color.
const ICON_BUTTON_ALPHA: f32 = 0.2;
/// Pill fill: white at 10% over the badge color.
const PILL_ALPHA: f32 = 0.1;
/// Shadow under heavy text: black at 20% over the badge color.
const TEXT_SHADOW_ALPHA: f32 = 0.2;

/// Everything needed to draw one badge frame.
#[derive(Clone, Copy, Debug)]
pub struct BadgeScene {
    pub viewport: Viewport,
    pub metrics: ResponsiveMetrics,
    pub layout: BadgeLayout,
    pub badge_color: Rgb565,
    pub text_color: Rgb565,
    pub palette: &'static [Rgb565],
    pub frame: AnimationFrame,
    pub platform: Platform,
}

impl BadgeScene {
    /// Snapshot the controller for a frame rendered at `now_ms`.
    pub fn capture<S: OrientationService>(
        controller: &DisplayStateController<S>,
        now_ms: u64,
        platform: Platform,
        palette: &'static [Rgb565],
    ) -> Self {
        let viewport = controller.viewport();
        let metrics = controller.responsive_metrics();
        Self {
            viewport,
            metrics,
            layout: BadgeLayout::compute(viewport, &metrics),
            badge_color: controller.badge_color(),
            text_color: controller.text_color(),
            palette,
            frame: controller.animation_frame(now_ms),
            platform,
        }
    }

    #[inline]
    pub const fn orientation(&self) -> OrientationMode { self.metrics.orientation }
}

/// Draw a complete badge frame. The target's origin is the viewport's top-left.
pub fn draw_badge<D>(
    display: &mut D,
    scene: &BadgeScene,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let fonts = FontPolicy::for_platform(scene.platform);
    let bg = scene.badge_color;

    display.fill_solid(&scene.layout.bounds, bg).ok();

    draw_header(display, scene, &fonts);
    draw_hello_block(display, scene, &fonts);
    draw_name_box(display, scene, &fonts);
    draw_orientation_pill(display, scene, &fonts);

    if let Some(tip) = scene.layout.instructions {
        let font = fonts.pick(FontRole::Italic, INDICATOR_FONT_PX);
        let color = fade_over(WHITE, bg, 0.8);
        draw_text(display, scene.platform.instruction_tip(), tip.center(), font, color, CENTERED);
    }
}

fn draw_header<D>(
    display: &mut D,
    scene: &BadgeScene,
    fonts: &FontPolicy,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let layout = &scene.layout;
    let title_pos = Point::new(layout.header.top_left.x, layout.header.center().y);
    draw_text(display, TITLE, title_pos, fonts.pick(FontRole::Heavy, TITLE_FONT_PX), WHITE, LEFT_ALIGNED);

    let button_fill = fade_over(WHITE, scene.badge_color, ICON_BUTTON_ALPHA);
    for button in [layout.rotate_button, layout.palette_button] {
        draw_rounded_panel(display, button, 6, button_fill, None);
    }

    draw_rotate_icon(display, layout.rotate_button, scene.frame.spin_degrees, WHITE);
    draw_palette_icon(display, layout.palette_button, scene.palette, WHITE);
}

fn draw_hello_block<D>(
    display: &mut D,
    scene: &BadgeScene,
    fonts: &FontPolicy,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let block = scene.layout.hello_block;
    let m = &scene.metrics;
    let bg = scene.badge_color;
    let opacity = scene.frame.opacity;

    let text_color = fade_over(WHITE, bg, opacity);
    let shadow_color = fade_over(lerp_rgb565(bg, BLACK, TEXT_SHADOW_ALPHA), bg, opacity);

    let welcome_center = Point::new(block.center().x, block.top_left.y + (m.welcome_font / 2.0) as i32);
    draw_text_with_shadow(
        display,
        HELLO,
        welcome_center,
        fonts.pick(FontRole::Heavy, m.welcome_font),
        text_color,
        shadow_color,
        CENTERED,
    );

    let subtitle_center = Point::new(
        block.center().x,
        block.top_left.y + block.size.height as i32 - (m.subtitle_font / 2.0) as i32,
    );
    draw_text(
        display,
        MY_NAME_IS,
        subtitle_center,
        fonts.pick(FontRole::Regular, m.subtitle_font),
        text_color,
        CENTERED,
    );
}

fn draw_name_box<D>(
    display: &mut D,
    scene: &BadgeScene,
    fonts: &FontPolicy,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let name_box = scene.layout.name_box;
    let button = scene.layout.text_color_button;
    let m = &scene.metrics;

    let shadow = lerp_rgb565(scene.badge_color, BLACK, 0.3);
    draw_rounded_panel(display, name_box.translate(BOX_SHADOW_OFFSET), NAME_BOX_RADIUS, shadow, None);
    draw_rounded_panel(display, name_box, NAME_BOX_RADIUS, WHITE, Some(BUTTON_FILL));

    // Name, pronouns and tagline share the space above the button
    let text_top = name_box.top_left.y;
    let text_bottom = button.top_left.y;
    let rows = [m.name_font, m.pronoun_font, m.tagline_font];
    let total: f32 = rows.iter().sum();
    let spare = ((text_bottom - text_top) as f32 - total).max(0.0) / (rows.len() + 1) as f32;
    let center_x = name_box.center().x;

    let mut y = text_top as f32 + spare;
    let mut next_center = |height: f32| {
        let center = Point::new(center_x, (y + height / 2.0) as i32);
        y += height + spare;
        center
    };

    let name_pos = next_center(m.name_font);
    draw_text(
        display,
        BADGE_NAME,
        name_pos,
        fonts.pick(FontRole::Heavy, m.name_font),
        scene.text_color,
        CENTERED,
    );
    let pronoun_pos = next_center(m.pronoun_font);
    draw_text(
        display,
        BADGE_PRONOUNS,
        pronoun_pos,
        fonts.pick(FontRole::Regular, m.pronoun_font),
        GRAY_666,
        CENTERED,
    );
    let tagline_pos = next_center(m.tagline_font);
    draw_text(
        display,
        BADGE_TAGLINE,
        tagline_pos,
        fonts.pick(FontRole::Italic, m.tagline_font),
        GRAY_333,
        CENTERED,
    );

    draw_rounded_panel(display, button, BUTTON_RADIUS, BUTTON_FILL, Some(BUTTON_BORDER));
    draw_text(
        display,
        CHANGE_TEXT_COLOR,
        button.center(),
        fonts.pick(FontRole::Regular, m.button_font),
        GRAY_333,
        CENTERED,
    );
}

fn draw_orientation_pill<D>(
    display: &mut D,
    scene: &BadgeScene,
    fonts: &FontPolicy,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let Some(pill) = scene.layout.orientation_pill else {
        return;
    };
    let bg = scene.badge_color;
    draw_rounded_panel(display, pill, pill.size.height / 2, fade_over(WHITE, bg, PILL_ALPHA), None);

    let orientation = scene.orientation();
    let y = pill.center().y;
    let glyph_x = pill.top_left.x + 14;
    draw_device_glyph(display, Point::new(glyph_x, y), orientation, WHITE);

    draw_text(
        display,
        orientation.label(),
        Point::new(glyph_x + 12, y),
        fonts.pick(FontRole::Regular, INDICATOR_FONT_PX),
        fade_over(WHITE, bg, 0.9),
        LEFT_ALIGNED,
    );

    let dims = dimensions_label(scene.viewport);
    let dims_font = fonts.pick(FontRole::Monospace, INDICATOR_FONT_PX);
    let dims_width = dims.len() as i32 * (dims_font.character_size.width + dims_font.character_spacing) as i32;
    draw_text(
        display,
        &dims,
        Point::new(pill.top_left.x + pill.size.width as i32 - 10 - dims_width, y),
        dims_font,
        fade_over(WHITE, bg, 0.7),
        LEFT_ALIGNED,
    );
}

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;

    use super::*;
    use crate::animations::AnimationPhase;
    use crate::orientation::{OrientationError, OrientationLock};
    use crate::palette::BADGE_PALETTE;

    struct NoopService;

    impl OrientationService for NoopService {
        fn unlock(&mut self) -> Result<(), OrientationError> { Ok(()) }

        fn lock(
            &mut self,
            _lock: OrientationLock,
        ) -> Result<(), OrientationError> {
            Ok(())
        }
    }

    fn mock() -> MockDisplay<Rgb565> {
        let mut display = MockDisplay::new();
        display.set_allow_out_of_bounds_drawing(true);
        display.set_allow_overdraw(true);
        display
    }

    #[test]
    fn test_capture_reflects_controller_state() {
        let viewport = Viewport::new(60.0, 64.0).unwrap();
        let mut controller = DisplayStateController::new(NoopService, viewport);
        controller.activate();
        controller.cycle_badge_color();

        let scene = BadgeScene::capture(&controller, 0, Platform::Other, &BADGE_PALETTE);
        assert_eq!(scene.badge_color, BADGE_PALETTE[1]);
        assert_eq!(scene.orientation(), OrientationMode::Portrait);
        assert_eq!(scene.frame.phase, AnimationPhase::Idle);
    }

    #[test]
    fn test_draw_badge_fills_background() {
        let viewport = Viewport::new(240.0, 400.0).unwrap();
        let mut controller = DisplayStateController::new(NoopService, viewport);
        controller.activate();

        let scene = BadgeScene::capture(&controller, 0, Platform::Ios, &BADGE_PALETTE);
        let mut display = mock();
        draw_badge(&mut display, &scene);

        // Left of the header padding nothing but background is drawn
        assert_eq!(display.get_pixel(Point::new(0, 0)), Some(scene.badge_color));
        assert_eq!(display.get_pixel(Point::new(4, 60)), Some(scene.badge_color));
    }

    #[test]
    fn test_draw_badge_mid_rotation() {
        let viewport = Viewport::new(64.0, 40.0).unwrap();
        let mut controller = DisplayStateController::new(NoopService, viewport.rotated());
        controller.activate();
        controller.on_viewport_changed(64.0, 40.0, 0);

        let scene = BadgeScene::capture(&controller, 150, Platform::Other, &BADGE_PALETTE);
        assert_eq!(scene.frame.phase, AnimationPhase::Rotating);
        assert!(scene.frame.opacity < 1.0);

        let mut display = mock();
        draw_badge(&mut display, &scene);
    }
}
