//! Vector icons for the header buttons and the orientation indicator.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Polyline, PrimitiveStyle, Rectangle, RoundedRectangle, Triangle};
use micromath::F32;

use crate::orientation::OrientationMode;

/// Open part of the rotate ring, in degrees.
const ROTATE_ARC_SWEEP: f32 = 290.0;

/// Segments used to approximate the rotate ring.
const ROTATE_ARC_SEGMENTS: usize = 16;

const ARROW_HEAD_SIZE: f32 = 4.0;

/// Screen point at `degrees` on a circle (0° = 3 o'clock, clockwise).
fn point_on_circle(
    center: Point,
    radius: f32,
    degrees: f32,
) -> Point {
    let radians = F32((degrees % 360.0) * (core::f32::consts::PI / 180.0));
    Point::new(
        center.x + (radians.cos().0 * radius) as i32,
        center.y + (radians.sin().0 * radius) as i32,
    )
}

/// Circular arrow, rotated clockwise by `spin_degrees`.
pub fn draw_rotate_icon<D>(
    display: &mut D,
    bounds: Rectangle,
    spin_degrees: f32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let center = bounds.center();
    let radius = (bounds.size.width.min(bounds.size.height) as f32 / 2.0) - 4.0;
    if radius < 2.0 {
        return;
    }

    let mut ring = [Point::zero(); ROTATE_ARC_SEGMENTS + 1];
    let step = ROTATE_ARC_SWEEP / ROTATE_ARC_SEGMENTS as f32;
    for (i, vertex) in ring.iter_mut().enumerate() {
        *vertex = point_on_circle(center, radius, spin_degrees + step * i as f32);
    }
    Polyline::new(&ring)
        .into_styled(PrimitiveStyle::with_stroke(color, 2))
        .draw(display)
        .ok();

    // Arrow head at the end of the ring, pointing along the direction of travel
    let end_angle = spin_degrees + ROTATE_ARC_SWEEP;
    let tip = point_on_circle(center, radius, end_angle + 25.0);
    let outer = point_on_circle(center, radius + ARROW_HEAD_SIZE, end_angle);
    let inner = point_on_circle(center, radius - ARROW_HEAD_SIZE, end_angle);
    Triangle::new(tip, outer, inner)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// 2×2 grid of swatches from the badge palette.
pub fn draw_palette_icon<D>(
    display: &mut D,
    bounds: Rectangle,
    swatches: &[Rgb565],
    outline: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let cell = bounds.size.width.min(bounds.size.height) / 2;
    if cell < 4 || swatches.is_empty() {
        return;
    }
    let diameter = cell - 2;
    for i in 0..4usize {
        let color = swatches[i % swatches.len()];
        let top_left = bounds.top_left + Point::new(((i % 2) as u32 * cell) as i32 + 1, ((i / 2) as u32 * cell) as i32 + 1);
        Circle::new(top_left, diameter)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(display)
            .ok();
        Circle::new(top_left, diameter)
            .into_styled(PrimitiveStyle::with_stroke(outline, 1))
            .draw(display)
            .ok();
    }
}

/// Phone outline turned to match `orientation`.
pub fn draw_device_glyph<D>(
    display: &mut D,
    center: Point,
    orientation: OrientationMode,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let size = match orientation {
        OrientationMode::Portrait => Size::new(8, 13),
        OrientationMode::Landscape => Size::new(13, 8),
    };
    RoundedRectangle::with_equal_corners(Rectangle::with_center(center, size), Size::new(2, 2))
        .into_styled(PrimitiveStyle::with_stroke(color, 1))
        .draw(display)
        .ok();
}
