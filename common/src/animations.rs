//! Rotation animation: phase tracking, easing and frame interpolation.
//!
//! The badge core never runs a timing loop. An orientation change *declares*
//! an animation (start time, duration, easing, end values); the presentation
//! surface samples it once per frame with its own clock via
//! [`RotationAnimation::frame_at`] and drives the phase back to idle through
//! [`RotationTimer::update`].
//!
//! # Interpolation
//!
//! ```text
//! t        = clamp(elapsed / duration, 0, 1)
//! progress = ease(t)                        (cubic-bezier 0.42, 0, 1, 1)
//! spin     = progress * 360°                (rotate icon)
//! opacity  = 1 → 0.5 → 1 over progress     (hello block, piecewise linear)
//! ```
//!
//! A new trigger while rotating restarts the timer (latest wins, no queue).

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::IntoStorage;

use crate::config::{ROTATION_DURATION_MS, ROTATION_MIN_OPACITY, ROTATION_SPIN_DEGREES};

// =============================================================================
// Animation Phase
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationPhase {
    #[default]
    Idle,
    Rotating,
}

// =============================================================================
// Easing
// =============================================================================

/// Newton iterations when inverting the bezier x(t).
const NEWTON_ITERATIONS: usize = 8;

/// Bisection steps used when Newton's slope gets too flat.
const BISECTION_ITERATIONS: usize = 24;

const SOLVE_EPSILON: f32 = 1e-5;

/// CSS-style cubic bezier easing curve through (0,0), (x1,y1), (x2,y2), (1,1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl CubicBezier {
    /// The standard "ease" curve used by the rotation animation.
    pub const EASE: Self = Self::new(0.42, 0.0, 1.0, 1.0);

    pub const fn new(
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    ) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Eased value for linear time `t` in `[0, 1]` (clamped).
    pub fn apply(
        &self,
        t: f32,
    ) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        let s = self.solve_parameter(t);
        bezier_axis(s, self.y1, self.y2)
    }

    /// Find the curve parameter whose x equals `x`.
    fn solve_parameter(
        &self,
        x: f32,
    ) -> f32 {
        let mut s = x;
        for _ in 0..NEWTON_ITERATIONS {
            let error = bezier_axis(s, self.x1, self.x2) - x;
            if error.abs() < SOLVE_EPSILON {
                return s;
            }
            let slope = bezier_slope(s, self.x1, self.x2);
            if slope.abs() < 1e-6 {
                break;
            }
            s -= error / slope;
        }

        // x(s) is monotonic for x1, x2 in [0, 1]
        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        s = x;
        for _ in 0..BISECTION_ITERATIONS {
            let value = bezier_axis(s, self.x1, self.x2);
            if (value - x).abs() < SOLVE_EPSILON {
                break;
            }
            if value < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) * 0.5;
        }
        s
    }
}

/// One axis of the bezier at parameter `s` (endpoints fixed at 0 and 1).
#[inline]
fn bezier_axis(
    s: f32,
    p1: f32,
    p2: f32,
) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

#[inline]
fn bezier_slope(
    s: f32,
    p1: f32,
    p2: f32,
) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

// =============================================================================
// Animation Descriptor
// =============================================================================

/// Declarative description of the rotation animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationAnimation {
    pub duration_ms: u32,
    pub easing: CubicBezier,
    /// Rotate icon angle at progress 0 and 1.
    pub spin_from_deg: f32,
    pub spin_to_deg: f32,
    /// Hello block opacity at progress 0.5 (1.0 at both ends).
    pub min_opacity: f32,
}

impl RotationAnimation {
    /// 300 ms ease, one full turn, half-opacity pulse.
    pub const DEFAULT: Self = Self {
        duration_ms: ROTATION_DURATION_MS,
        easing: CubicBezier::EASE,
        spin_from_deg: 0.0,
        spin_to_deg: ROTATION_SPIN_DEGREES,
        min_opacity: ROTATION_MIN_OPACITY,
    };

    /// Eased progress after `elapsed_ms`, in `[0, 1]`.
    pub fn progress(
        &self,
        elapsed_ms: u64,
    ) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let t = (elapsed_ms as f32 / self.duration_ms as f32).min(1.0);
        self.easing.apply(t)
    }

    /// Rotate icon angle for a progress value.
    #[inline]
    pub fn spin_degrees(
        &self,
        progress: f32,
    ) -> f32 {
        self.spin_from_deg + (self.spin_to_deg - self.spin_from_deg) * progress
    }

    /// Opacity pulse: 1 at progress 0, `min_opacity` at 0.5, back to 1 at 1.
    pub fn opacity(
        &self,
        progress: f32,
    ) -> f32 {
        let p = progress.clamp(0.0, 1.0);
        let dip = 1.0 - self.min_opacity;
        if p <= 0.5 {
            1.0 - dip * (p / 0.5)
        } else {
            self.min_opacity + dip * ((p - 0.5) / 0.5)
        }
    }

    /// Sample the animation `elapsed_ms` after it started.
    pub fn frame_at(
        &self,
        elapsed_ms: u64,
    ) -> AnimationFrame {
        let progress = self.progress(elapsed_ms);
        AnimationFrame {
            phase: AnimationPhase::Rotating,
            progress,
            spin_degrees: self.spin_degrees(progress),
            opacity: self.opacity(progress),
        }
    }
}

impl Default for RotationAnimation {
    fn default() -> Self { Self::DEFAULT }
}

/// Interpolated values for one rendered frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationFrame {
    pub phase: AnimationPhase,
    pub progress: f32,
    pub spin_degrees: f32,
    pub opacity: f32,
}

impl AnimationFrame {
    /// Resting values: no spin, fully opaque.
    pub const IDLE: Self = Self {
        phase: AnimationPhase::Idle,
        progress: 0.0,
        spin_degrees: 0.0,
        opacity: 1.0,
    };
}

// =============================================================================
// Rotation Timer
// =============================================================================

/// Single-slot run tracker for the rotation animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RotationTimer {
    started_at_ms: Option<u64>,
}

impl RotationTimer {
    pub const fn new() -> Self { Self { started_at_ms: None } }

    /// Start a run at `now_ms`, replacing any run in progress.
    #[inline]
    pub fn start(
        &mut self,
        now_ms: u64,
    ) {
        self.started_at_ms = Some(now_ms);
    }

    /// Drop the current run, returning to idle with progress reset.
    #[inline]
    pub fn cancel(&mut self) { self.started_at_ms = None; }

    #[inline]
    pub const fn phase(&self) -> AnimationPhase {
        match self.started_at_ms {
            Some(_) => AnimationPhase::Rotating,
            None => AnimationPhase::Idle,
        }
    }

    /// Milliseconds since the run started, if one is active.
    #[inline]
    pub fn elapsed(
        &self,
        now_ms: u64,
    ) -> Option<u64> {
        self.started_at_ms.map(|start| now_ms.saturating_sub(start))
    }

    /// Finish the run once `duration_ms` has elapsed. Returns the phase after the update.
    pub fn update(
        &mut self,
        now_ms: u64,
        duration_ms: u32,
    ) -> AnimationPhase {
        if let Some(elapsed) = self.elapsed(now_ms)
            && elapsed >= u64::from(duration_ms)
        {
            self.started_at_ms = None;
        }
        self.phase()
    }
}

// =============================================================================
// Color Interpolation Helpers
// =============================================================================

/// Linear interpolation between two Rgb565 colors.
///
/// Uses integer math with fixed-point for efficiency. Any non-zero `t`
/// moves each differing channel at least one step.
pub fn lerp_rgb565(
    from: Rgb565,
    to: Rgb565,
    t: f32,
) -> Rgb565 {
    let t = t.clamp(0.0, 1.0);
    if t >= 1.0 {
        return to;
    }

    let (from_r, from_g, from_b) = channels(from);
    let (to_r, to_g, to_b) = channels(to);

    let t_fixed = (t * 256.0) as i32;

    let compute_step = |delta: i32| -> i32 {
        if delta == 0 || t_fixed == 0 {
            0
        } else {
            let step = (delta * t_fixed) >> 8;
            if step == 0 {
                if delta > 0 { 1 } else { -1 }
            } else {
                step
            }
        }
    };

    let r = (from_r + compute_step(to_r - from_r)).clamp(0, 31);
    let g = (from_g + compute_step(to_g - from_g)).clamp(0, 63);
    let b = (from_b + compute_step(to_b - from_b)).clamp(0, 31);

    Rgb565::new(r as u8, g as u8, b as u8)
}

/// Color `fg` drawn at `opacity` over `bg`.
#[inline]
pub fn fade_over(
    fg: Rgb565,
    bg: Rgb565,
    opacity: f32,
) -> Rgb565 {
    lerp_rgb565(bg, fg, opacity)
}

fn channels(color: Rgb565) -> (i32, i32, i32) {
    let raw = color.into_storage();
    (
        i32::from((raw >> 11) & 0x1F),
        i32::from((raw >> 5) & 0x3F),
        i32::from(raw & 0x1F),
    )
}
