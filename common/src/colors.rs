//! Color constants for the name badge.
//!
//! Badge colors are authored as 24-bit hex values (`0xE63946`) and packed
//! into RGB565 at compile time, which is the native format of the SPI panels
//! and the simulator display alike.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! Converting from 8-bit channels drops the low bits (`r >> 3`, `g >> 2`, `b >> 3`).

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Pack a `0xRRGGBB` value into RGB565 at const time.
pub const fn hex(rgb: u32) -> Rgb565 {
    let r = ((rgb >> 16) & 0xFF) as u8;
    let g = ((rgb >> 8) & 0xFF) as u8;
    let b = (rgb & 0xFF) as u8;
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure black. Drop shadows and the simulator bezel.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Header and hello text, name box fill.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Badge Palette (background cycle)
// =============================================================================

pub const CORAL_RED: Rgb565 = hex(0xE6_39_46);
pub const STEEL_BLUE: Rgb565 = hex(0x45_7B_9D);
pub const TEAL: Rgb565 = hex(0x2A_9D_8F);
pub const SAFFRON: Rgb565 = hex(0xE9_C4_6A);
pub const SANDY_ORANGE: Rgb565 = hex(0xF4_A2_61);
pub const PURPLE: Rgb565 = hex(0x9D_4E_DD);

// =============================================================================
// Text Palette (name color cycle)
// =============================================================================

/// Default name color.
pub const NAVY: Rgb565 = hex(0x1D_35_57);

// =============================================================================
// Name Box Details
// =============================================================================

/// Pronoun line.
pub const GRAY_666: Rgb565 = hex(0x66_66_66);

/// Tagline and button label.
pub const GRAY_333: Rgb565 = hex(0x33_33_33);

/// "Change Text Color" button fill.
pub const BUTTON_FILL: Rgb565 = hex(0xF0_F0_F0);

/// "Change Text Color" button border.
pub const BUTTON_BORDER: Rgb565 = hex(0xDD_DD_DD);

/// Simulator canvas around the device viewport.
pub const CANVAS_BG: Rgb565 = hex(0x20_20_24);
