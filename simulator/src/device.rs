//! Simulated phone: physical pose plus an orientation lock.
//!
//! The viewport follows the lock when one is set and the physical pose
//! otherwise, like a real device with auto-rotate on.

use badge_common::{OrientationError, OrientationLock, OrientationMode, OrientationService, Viewport};

pub struct SimulatedDevice {
    /// Native size with the device held upright (short side first).
    native: (u32, u32),
    physical: OrientationMode,
    lock: Option<OrientationLock>,
    reject: bool,
}

impl SimulatedDevice {
    /// Device with the given screen size; a wider-than-tall size starts it on its side.
    pub fn new(
        width: u32,
        height: u32,
        reject: bool,
    ) -> Self {
        let physical = if width > height { OrientationMode::Landscape } else { OrientationMode::Portrait };
        Self {
            native: (width.min(height).max(1), width.max(height).max(1)),
            physical,
            // Apps start locked to portrait until they unlock
            lock: Some(OrientationLock::PortraitUp),
            reject,
        }
    }

    /// Turn the device a quarter turn.
    pub fn rotate_physical(&mut self) {
        self.physical = match self.physical {
            OrientationMode::Portrait => OrientationMode::Landscape,
            OrientationMode::Landscape => OrientationMode::Portrait,
        };
    }

    pub fn physical(&self) -> OrientationMode { self.physical }

    pub fn current_lock(&self) -> Option<OrientationLock> { self.lock }

    /// Orientation the screen content is currently shown in.
    pub fn effective_orientation(&self) -> OrientationMode { self.lock.map_or(self.physical, OrientationLock::mode) }

    /// Viewport size in the effective orientation.
    pub fn viewport_size(&self) -> (u32, u32) {
        let (short, long) = self.native;
        match self.effective_orientation() {
            OrientationMode::Portrait => (short, long),
            OrientationMode::Landscape => (long, short),
        }
    }

    pub fn viewport(&self) -> Option<Viewport> {
        let (w, h) = self.viewport_size();
        Viewport::new(w as f32, h as f32)
    }

    /// Longest side, for sizing a canvas that fits both orientations.
    pub fn long_side(&self) -> u32 { self.native.1 }
}

impl OrientationService for SimulatedDevice {
    fn unlock(&mut self) -> Result<(), OrientationError> {
        if self.reject {
            return Err(OrientationError::Unsupported);
        }
        self.lock = None;
        Ok(())
    }

    fn lock(
        &mut self,
        lock: OrientationLock,
    ) -> Result<(), OrientationError> {
        if self.reject {
            return Err(OrientationError::Rejected { lock });
        }
        self.lock = Some(lock);
        Ok(())
    }
}
