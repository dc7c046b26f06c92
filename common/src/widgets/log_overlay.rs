//! Diagnostic log overlay.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use profont::PROFONT_9_POINT;

use crate::animations::lerp_rgb565;
use crate::colors::{BLACK, SAFFRON, WHITE};
use crate::diagnostics::DebugLog;
use crate::styles::TOP_LEFT;

const LINE_HEIGHT: i32 = 12;
const INSET: i32 = 4;

/// Draw the log lines (oldest first) on a dimmed panel filling `area`.
///
/// Lines that do not fit the panel height are skipped from the oldest end.
pub fn draw_log_overlay<D>(
    display: &mut D,
    log: &DebugLog,
    area: Rectangle,
    backdrop: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    area.into_styled(PrimitiveStyle::with_fill(lerp_rgb565(backdrop, BLACK, 0.75)))
        .draw(display)
        .ok();

    let capacity = ((area.size.height as i32 - 2 * INSET) / LINE_HEIGHT).max(0) as usize;
    let skip = log.len().saturating_sub(capacity);
    let newest = log.len().saturating_sub(1);

    for (row, (i, line)) in log.iter().enumerate().skip(skip).enumerate() {
        let color = if i == newest { SAFFRON } else { WHITE };
        let pos = area.top_left + Point::new(INSET, INSET + row as i32 * LINE_HEIGHT);
        Text::with_text_style(line, pos, MonoTextStyle::new(&PROFONT_9_POINT, color), TOP_LEFT)
            .draw(display)
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;

    use super::*;

    #[test]
    fn test_overlay_draws_backdrop() {
        let mut log = DebugLog::new();
        log.push("Orientation unlocked");
        log.push("Landscape Mode");

        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        display.set_allow_out_of_bounds_drawing(true);
        display.set_allow_overdraw(true);

        let area = Rectangle::new(Point::zero(), Size::new(64, 30));
        draw_log_overlay(&mut display, &log, area, WHITE);

        let dimmed = lerp_rgb565(WHITE, BLACK, 0.75);
        assert_eq!(display.get_pixel(Point::new(63, 29)), Some(dimmed));
    }

    #[test]
    fn test_overlay_with_empty_log() {
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        let area = Rectangle::new(Point::zero(), Size::new(8, 8));
        draw_log_overlay(&mut display, &DebugLog::new(), area, BLACK);
        assert_eq!(display.get_pixel(Point::new(0, 0)), Some(BLACK));
    }
}
