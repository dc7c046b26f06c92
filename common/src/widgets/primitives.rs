//! Low-level drawing primitives shared across widgets.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyleBuilder, Rectangle, RoundedRectangle};
use embedded_graphics::text::{Text, TextStyle};

/// Offset of the drop shadow under heavy text.
const TEXT_SHADOW_OFFSET: Point = Point::new(2, 2);

/// Draw text in one color.
pub fn draw_text<D>(
    display: &mut D,
    text: &str,
    position: Point,
    font: &MonoFont<'_>,
    color: Rgb565,
    text_style: TextStyle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(text, position, MonoTextStyle::new(font, color), text_style)
        .draw(display)
        .ok();
}

/// Draw text with a bottom-right drop shadow.
pub fn draw_text_with_shadow<D>(
    display: &mut D,
    text: &str,
    position: Point,
    font: &MonoFont<'_>,
    text_color: Rgb565,
    shadow_color: Rgb565,
    text_style: TextStyle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_text(display, text, position + TEXT_SHADOW_OFFSET, font, shadow_color, text_style);
    draw_text(display, text, position, font, text_color, text_style);
}

/// Rounded rectangle with optional 1px border.
pub fn draw_rounded_panel<D>(
    display: &mut D,
    bounds: Rectangle,
    radius: u32,
    fill: Rgb565,
    border: Option<Rgb565>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if bounds.is_zero_sized() {
        return;
    }
    let mut style = PrimitiveStyleBuilder::new().fill_color(fill);
    if let Some(border) = border {
        style = style.stroke_color(border).stroke_width(1);
    }
    RoundedRectangle::with_equal_corners(bounds, Size::new(radius, radius))
        .into_styled(style.build())
        .draw(display)
        .ok();
}
