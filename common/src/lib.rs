//! Core of the responsive name badge.
//!
//! Platform-agnostic state and drawing shared by the desktop simulator and
//! any embedded target:
//!
//! - [`viewport`]: Validated viewport dimensions
//! - [`orientation`]: Orientation classification, locks and the service trait
//! - [`metrics`]: Responsive sizes derived from the viewport
//! - [`palette`]: Badge and text color cycles
//! - [`animations`]: Rotation easing, timer and color blending
//! - [`controller`]: The display state controller
//! - [`layout`]: Element placement and tap hit testing
//! - [`labels`]: Badge text and platform tips
//! - [`diagnostics`]: Debug log ring buffer
//! - [`widgets`]: Drawing routines
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` outside of tests. Time is always passed in as
//! milliseconds, so nothing here depends on `std::time`.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod animations;
pub mod colors;
pub mod config;
pub mod controller;
pub mod diagnostics;
pub mod labels;
pub mod layout;
pub mod metrics;
pub mod orientation;
pub mod palette;
pub mod styles;
pub mod viewport;
pub mod widgets;

// Re-export commonly used items
pub use animations::{AnimationFrame, AnimationPhase, RotationAnimation};
pub use controller::{BadgeAction, DisplayStateController};
pub use diagnostics::DebugLog;
pub use labels::Platform;
pub use layout::BadgeLayout;
pub use metrics::{ResponsiveMetrics, derive_metrics};
pub use orientation::{OrientationError, OrientationLock, OrientationMode, OrientationService};
pub use palette::ColorCycle;
pub use viewport::Viewport;
