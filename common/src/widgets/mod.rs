//! Widget components for the name badge display.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` for platform independence.

mod badge;
mod fonts;
mod icons;
mod log_overlay;
mod primitives;

pub use badge::{BadgeScene, draw_badge};
pub use fonts::{FontPolicy, FontRole};
pub use icons::{draw_device_glyph, draw_palette_icon, draw_rotate_icon};
pub use log_overlay::draw_log_overlay;
pub use primitives::{draw_rounded_panel, draw_text, draw_text_with_shadow};
