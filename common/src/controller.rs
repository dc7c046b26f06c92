//! Display state controller for the name badge.
//!
//! Owns the orientation classification, both color selections and the
//! rotation animation phase. The presentation surface feeds it viewport
//! changes and taps; it calls out to an [`OrientationService`] for the
//! startup unlock, manual rotation and the shutdown lock.
//!
//! # Lifecycle
//!
//! ```text
//! Created ──activate()──▶ Active ──deactivate()──▶ Deactivated
//!    │                                                 ▲
//!    └──────────────────deactivate()───────────────────┘
//! ```
//!
//! - `activate` issues the unlock before any other orientation request can
//!   be made (manual rotation is ignored until the badge is active).
//! - After `deactivate` every mutating operation is a no-op.
//!
//! Orientation-service failures are logged to the [`DebugLog`] and
//! otherwise ignored: the badge keeps rendering, only the forced rotation
//! convenience is lost.
//!
//! # Orientation Authority
//!
//! A manual rotation request never changes [`OrientationMode`] directly.
//! Only a subsequent [`DisplayStateController::on_viewport_changed`] with the
//! rotated dimensions does, which is also what starts the rotation animation.

use embedded_graphics::pixelcolor::Rgb565;

use crate::animations::{AnimationFrame, AnimationPhase, RotationAnimation, RotationTimer};
use crate::diagnostics::DebugLog;
use crate::metrics::{ResponsiveMetrics, derive_metrics};
use crate::orientation::{OrientationLock, OrientationMode, OrientationService};
use crate::palette::ColorCycle;
use crate::viewport::Viewport;

/// User actions forwarded by the presentation surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BadgeAction {
    /// Tap on the rotate icon.
    RequestRotation,
    /// Tap on the palette icon.
    CycleBadgeColor,
    /// Tap on the "Change Text Color" button.
    CycleTextColor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lifecycle {
    Created,
    Active,
    Deactivated,
}

pub struct DisplayStateController<S> {
    service: S,
    viewport: Viewport,
    orientation: OrientationMode,
    badge_color: ColorCycle<Rgb565>,
    text_color: ColorCycle<Rgb565>,
    animation: RotationAnimation,
    rotation: RotationTimer,
    lifecycle: Lifecycle,
    log: DebugLog,
}

impl<S: OrientationService> DisplayStateController<S> {
    /// Controller with the default palettes and rotation animation.
    ///
    /// The initial orientation is taken from `initial` without animating.
    pub fn new(
        service: S,
        initial: Viewport,
    ) -> Self {
        Self::with_palettes(service, initial, ColorCycle::badge(), ColorCycle::text())
    }

    pub fn with_palettes(
        service: S,
        initial: Viewport,
        badge_color: ColorCycle<Rgb565>,
        text_color: ColorCycle<Rgb565>,
    ) -> Self {
        Self {
            service,
            viewport: initial,
            orientation: initial.orientation(),
            badge_color,
            text_color,
            animation: RotationAnimation::DEFAULT,
            rotation: RotationTimer::new(),
            lifecycle: Lifecycle::Created,
            log: DebugLog::new(),
        }
    }

    /// Replace the rotation animation descriptor.
    #[must_use]
    pub fn with_animation(
        mut self,
        animation: RotationAnimation,
    ) -> Self {
        self.animation = animation;
        self
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Permit free rotation. Idempotent; ignored after deactivation.
    pub fn activate(&mut self) {
        if self.lifecycle != Lifecycle::Created {
            return;
        }
        self.lifecycle = Lifecycle::Active;
        match self.service.unlock() {
            Ok(()) => self.log.push("Orientation unlocked"),
            Err(err) => self.log.push_fmt(format_args!("Unlock failed: {err}")),
        }
    }

    /// Restore the default portrait lock and stop reacting to input. Idempotent.
    pub fn deactivate(&mut self) {
        if self.lifecycle == Lifecycle::Deactivated {
            return;
        }
        self.lifecycle = Lifecycle::Deactivated;
        self.rotation.cancel();
        match self.service.lock(OrientationLock::PortraitUp) {
            Ok(()) => self.log.push("Portrait lock restored"),
            Err(err) => self.log.push_fmt(format_args!("Restore lock failed: {err}")),
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool { self.lifecycle == Lifecycle::Active }

    // =========================================================================
    // Viewport & Animation
    // =========================================================================

    /// Record new viewport dimensions.
    ///
    /// Invalid dimensions (non-positive, NaN, infinite) are ignored. When the
    /// orientation flips, the rotation animation (re)starts at `now_ms`.
    /// Returns `true` if the orientation changed.
    pub fn on_viewport_changed(
        &mut self,
        width: f32,
        height: f32,
        now_ms: u64,
    ) -> bool {
        if self.lifecycle == Lifecycle::Deactivated {
            return false;
        }
        let Some(viewport) = Viewport::new(width, height) else {
            self.log.push("Ignored invalid viewport");
            return false;
        };
        self.viewport = viewport;

        let orientation = viewport.orientation();
        if orientation == self.orientation {
            return false;
        }
        self.orientation = orientation;
        self.rotation.start(now_ms);
        self.log.push(orientation.label());
        true
    }

    /// Advance the animation clock, returning to idle once the run is over.
    pub fn tick(
        &mut self,
        now_ms: u64,
    ) -> AnimationPhase {
        self.rotation.update(now_ms, self.animation.duration_ms)
    }

    /// Interpolated spin/opacity for a frame rendered at `now_ms`.
    pub fn animation_frame(
        &self,
        now_ms: u64,
    ) -> AnimationFrame {
        match self.rotation.elapsed(now_ms) {
            Some(elapsed) => self.animation.frame_at(elapsed),
            None => AnimationFrame::IDLE,
        }
    }

    #[inline]
    pub const fn phase(&self) -> AnimationPhase { self.rotation.phase() }

    // =========================================================================
    // User Actions
    // =========================================================================

    pub fn cycle_badge_color(&mut self) {
        if self.lifecycle == Lifecycle::Deactivated {
            return;
        }
        self.badge_color.advance();
    }

    pub fn cycle_text_color(&mut self) {
        if self.lifecycle == Lifecycle::Deactivated {
            return;
        }
        self.text_color.advance();
    }

    /// Ask the orientation service to lock to the opposite orientation.
    ///
    /// Fire-and-forget: failures are logged, and the orientation itself only
    /// changes once the rotated viewport is reported.
    pub fn request_manual_rotation(&mut self) {
        if self.lifecycle != Lifecycle::Active {
            self.log.push("Rotation ignored: badge inactive");
            return;
        }
        let lock = self.orientation.flip_lock();
        match self.service.lock(lock) {
            Ok(()) => self.log.push_fmt(format_args!("Requested {lock}")),
            Err(err) => self.log.push_fmt(format_args!("Rotate failed: {err}")),
        }
    }

    /// Route a forwarded tap to its operation.
    pub fn dispatch(
        &mut self,
        action: BadgeAction,
    ) {
        match action {
            BadgeAction::RequestRotation => self.request_manual_rotation(),
            BadgeAction::CycleBadgeColor => self.cycle_badge_color(),
            BadgeAction::CycleTextColor => self.cycle_text_color(),
        }
    }

    // =========================================================================
    // Derived Values & Accessors
    // =========================================================================

    /// Responsive sizes for the current viewport and orientation.
    #[inline]
    pub fn responsive_metrics(&self) -> ResponsiveMetrics { derive_metrics(self.viewport, self.orientation) }

    #[inline]
    pub const fn orientation(&self) -> OrientationMode { self.orientation }

    #[inline]
    pub const fn viewport(&self) -> Viewport { self.viewport }

    #[inline]
    pub const fn badge_color(&self) -> Rgb565 { self.badge_color.current() }

    #[inline]
    pub const fn text_color(&self) -> Rgb565 { self.text_color.current() }

    #[inline]
    pub const fn badge_color_index(&self) -> usize { self.badge_color.index() }

    #[inline]
    pub const fn text_color_index(&self) -> usize { self.text_color.index() }

    #[inline]
    pub const fn log(&self) -> &DebugLog { &self.log }

    #[inline]
    pub const fn service(&self) -> &S { &self.service }

    #[inline]
    pub fn service_mut(&mut self) -> &mut S { &mut self.service }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::OrientationError;

    /// Records requests; optionally rejects all of them.
    #[derive(Default)]
    struct RecordingService {
        unlocks: u32,
        locks: Vec<OrientationLock>,
        reject: bool,
    }

    impl OrientationService for RecordingService {
        fn unlock(&mut self) -> Result<(), OrientationError> {
            self.unlocks += 1;
            if self.reject { Err(OrientationError::Unsupported) } else { Ok(()) }
        }

        fn lock(
            &mut self,
            lock: OrientationLock,
        ) -> Result<(), OrientationError> {
            self.locks.push(lock);
            if self.reject { Err(OrientationError::Rejected { lock }) } else { Ok(()) }
        }
    }

    fn portrait() -> Viewport { Viewport::new(400.0, 800.0).unwrap() }

    fn active(service: RecordingService) -> DisplayStateController<RecordingService> {
        let mut controller = DisplayStateController::new(service, portrait());
        controller.activate();
        controller
    }

    #[test]
    fn test_initial_state() {
        let controller = DisplayStateController::new(RecordingService::default(), portrait());
        assert_eq!(controller.orientation(), OrientationMode::Portrait);
        assert_eq!(controller.phase(), AnimationPhase::Idle);
        assert_eq!(controller.badge_color_index(), 0);
        assert_eq!(controller.text_color_index(), 0);
        assert!(!controller.is_active());
    }

    #[test]
    fn test_activate_unlocks_once() {
        let mut controller = active(RecordingService::default());
        controller.activate();
        assert_eq!(controller.service().unlocks, 1);
        assert!(controller.is_active());
    }

    #[test]
    fn test_orientation_change_starts_rotation() {
        let mut controller = active(RecordingService::default());

        assert!(controller.on_viewport_changed(800.0, 400.0, 1_000));
        assert_eq!(controller.orientation(), OrientationMode::Landscape);
        assert_eq!(controller.phase(), AnimationPhase::Rotating);

        assert_eq!(controller.tick(1_150), AnimationPhase::Rotating);
        assert_eq!(controller.tick(1_300), AnimationPhase::Idle);
        assert_eq!(controller.animation_frame(1_300), AnimationFrame::IDLE);
    }

    #[test]
    fn test_same_orientation_resize_does_not_animate() {
        let mut controller = active(RecordingService::default());
        assert!(!controller.on_viewport_changed(420.0, 820.0, 10));
        assert_eq!(controller.phase(), AnimationPhase::Idle);
        assert_eq!(controller.viewport().width(), 420.0);
    }

    #[test]
    fn test_invalid_viewport_ignored() {
        let mut controller = active(RecordingService::default());
        assert!(!controller.on_viewport_changed(0.0, 400.0, 0));
        assert!(!controller.on_viewport_changed(f32::NAN, 400.0, 0));
        assert_eq!(controller.viewport(), portrait());
        assert_eq!(controller.log().last(), Some("Ignored invalid viewport"));
    }

    #[test]
    fn test_manual_rotation_does_not_change_orientation() {
        let mut controller = active(RecordingService::default());
        controller.request_manual_rotation();

        assert_eq!(controller.service().locks, [OrientationLock::LandscapeLeft]);
        assert_eq!(controller.orientation(), OrientationMode::Portrait);
        assert_eq!(controller.phase(), AnimationPhase::Idle);
    }

    #[test]
    fn test_manual_rotation_failure_is_logged() {
        let mut controller = active(RecordingService {
            reject: true,
            ..RecordingService::default()
        });
        controller.request_manual_rotation();

        assert_eq!(controller.orientation(), OrientationMode::Portrait);
        let last = controller.log().last().unwrap();
        assert!(last.starts_with("Rotate failed"), "{last}");
        assert!(last.contains("LANDSCAPE_LEFT"), "{last}");
    }

    #[test]
    fn test_manual_rotation_before_activate_ignored() {
        let mut controller = DisplayStateController::new(RecordingService::default(), portrait());
        controller.request_manual_rotation();
        assert!(controller.service().locks.is_empty());
    }

    #[test]
    fn test_deactivate_restores_portrait_and_freezes_state() {
        let mut controller = active(RecordingService::default());
        controller.on_viewport_changed(800.0, 400.0, 0);
        controller.deactivate();
        controller.deactivate();

        assert_eq!(controller.service().locks, [OrientationLock::PortraitUp]);
        assert_eq!(controller.phase(), AnimationPhase::Idle);

        controller.cycle_badge_color();
        controller.cycle_text_color();
        controller.request_manual_rotation();
        assert!(!controller.on_viewport_changed(400.0, 800.0, 10));

        assert_eq!(controller.badge_color_index(), 0);
        assert_eq!(controller.text_color_index(), 0);
        assert_eq!(controller.orientation(), OrientationMode::Landscape);
        assert_eq!(controller.service().locks.len(), 1);
    }

    #[test]
    fn test_state_changes_are_logged() {
        let mut controller = active(RecordingService::default());
        assert_eq!(controller.log().last(), Some("Orientation unlocked"));

        // Color cycling touches nothing but the color
        controller.cycle_text_color();
        assert_eq!(controller.log().len(), 1);

        controller.on_viewport_changed(800.0, 400.0, 0);
        assert_eq!(controller.log().last(), Some("Landscape Mode"));

        controller.deactivate();
        assert_eq!(controller.log().last(), Some("Portrait lock restored"));
    }

    #[test]
    fn test_dispatch_routes_actions() {
        let mut controller = active(RecordingService::default());
        controller.dispatch(BadgeAction::CycleBadgeColor);
        controller.dispatch(BadgeAction::CycleTextColor);
        controller.dispatch(BadgeAction::CycleTextColor);
        controller.dispatch(BadgeAction::RequestRotation);

        assert_eq!(controller.badge_color_index(), 1);
        assert_eq!(controller.text_color_index(), 2);
        assert_eq!(controller.service().locks.len(), 1);
    }

    #[test]
    fn test_metrics_follow_viewport() {
        let mut controller = active(RecordingService::default());
        controller.on_viewport_changed(800.0, 400.0, 0);
        let m = controller.responsive_metrics();
        assert_eq!(m.orientation, OrientationMode::Landscape);
        assert!((m.name_box_width - 640.0).abs() < 1e-3);
        assert_eq!(controller.responsive_metrics(), m);
    }
}
