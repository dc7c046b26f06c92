//! Orientation classification and the platform orientation-lock boundary.
//!
//! The badge never rotates the screen itself. It asks an [`OrientationService`]
//! (the platform, a display driver, or the simulator) to unlock or lock the
//! screen, and learns the outcome later through the next viewport change.

use core::fmt;

use thiserror::Error;

// =============================================================================
// Orientation Mode
// =============================================================================

/// Orientation classification of the current viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OrientationMode {
    #[default]
    Portrait,
    Landscape,
}

impl OrientationMode {
    /// Landscape iff strictly wider than tall. Square viewports are portrait.
    #[inline]
    pub fn from_dimensions(
        width: f32,
        height: f32,
    ) -> Self {
        if width > height { Self::Landscape } else { Self::Portrait }
    }

    #[inline]
    pub const fn is_landscape(self) -> bool { matches!(self, Self::Landscape) }

    /// Lock to request when the user asks to flip the current orientation.
    #[inline]
    pub const fn flip_lock(self) -> OrientationLock {
        match self {
            Self::Portrait => OrientationLock::LandscapeLeft,
            Self::Landscape => OrientationLock::PortraitUp,
        }
    }

    /// Indicator text shown in the orientation pill.
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Portrait => "Portrait Mode",
            Self::Landscape => "Landscape Mode",
        }
    }
}

// =============================================================================
// Orientation Lock
// =============================================================================

/// Platform-level rotation constraint the badge may request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OrientationLock {
    /// Upright portrait. Also the default restored on shutdown.
    PortraitUp,
    /// Landscape with the top of the device to the left.
    LandscapeLeft,
}

impl OrientationLock {
    /// Orientation the screen ends up in once this lock is honored.
    #[inline]
    pub const fn mode(self) -> OrientationMode {
        match self {
            Self::PortraitUp => OrientationMode::Portrait,
            Self::LandscapeLeft => OrientationMode::Landscape,
        }
    }
}

impl fmt::Display for OrientationLock {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(match self {
            Self::PortraitUp => "PORTRAIT_UP",
            Self::LandscapeLeft => "LANDSCAPE_LEFT",
        })
    }
}

// =============================================================================
// Orientation Service
// =============================================================================

/// Failure reported by an [`OrientationService`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OrientationError {
    #[error("orientation control unsupported")]
    Unsupported,
    #[error("orientation service busy")]
    Busy,
    #[error("lock to {lock} rejected")]
    Rejected { lock: OrientationLock },
}

/// Platform service that constrains screen rotation.
///
/// Calls are fire-and-forget from the badge's point of view: they must not
/// block the render loop, and the badge never waits for the rotation they
/// cause. Failures are reported but carry no state the badge depends on.
pub trait OrientationService {
    /// Permit both portrait and landscape.
    fn unlock(&mut self) -> Result<(), OrientationError>;

    /// Force the screen into `lock`.
    fn lock(
        &mut self,
        lock: OrientationLock,
    ) -> Result<(), OrientationError>;
}

impl<S: OrientationService + ?Sized> OrientationService for &mut S {
    fn unlock(&mut self) -> Result<(), OrientationError> { (**self).unlock() }

    fn lock(
        &mut self,
        lock: OrientationLock,
    ) -> Result<(), OrientationError> {
        (**self).lock(lock)
    }
}
