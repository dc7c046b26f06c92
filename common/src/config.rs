//! Badge and display configuration constants.
//!
//! Badge text is baked in at compile time, so a badge can be personalized
//! without touching the source:
//!
//! ```sh
//! BADGE_NAME="Ferris" BADGE_PRONOUNS="(they/them)" BADGE_TAGLINE="Crab Wrangler" cargo run -p badge-simulator
//! ```

// =============================================================================
// Badge Profile
// =============================================================================

/// Name shown inside the name box.
pub const BADGE_NAME: &str = match option_env!("BADGE_NAME") {
    Some(name) => name,
    None => "Chris",
};

/// Pronoun line under the name.
pub const BADGE_PRONOUNS: &str = match option_env!("BADGE_PRONOUNS") {
    Some(pronouns) => pronouns,
    None => "(he/him)",
};

/// Tagline under the pronouns.
pub const BADGE_TAGLINE: &str = match option_env!("BADGE_TAGLINE") {
    Some(tagline) => tagline,
    None => "React Native Developer",
};

// =============================================================================
// Rotation Animation
// =============================================================================

/// Length of the spin and fade played after an orientation change.
pub const ROTATION_DURATION_MS: u32 = 300;

/// Full turn of the rotate icon.
pub const ROTATION_SPIN_DEGREES: f32 = 360.0;

/// Opacity of the hello block at the midpoint of the rotation.
pub const ROTATION_MIN_OPACITY: f32 = 0.5;

// =============================================================================
// Fixed Spacing (not scaled with the viewport)
// =============================================================================

pub const LANDSCAPE_HORIZONTAL_PADDING: f32 = 40.0;
pub const PORTRAIT_HORIZONTAL_PADDING: f32 = 20.0;
pub const LANDSCAPE_VERTICAL_MARGIN: f32 = 10.0;
pub const PORTRAIT_VERTICAL_MARGIN: f32 = 5.0;

// =============================================================================
// Simulated Device
// =============================================================================

/// Native (portrait) panel width of the simulated device.
pub const DEVICE_WIDTH: u32 = 240;

/// Native (portrait) panel height of the simulated device.
pub const DEVICE_HEIGHT: u32 = 400;
