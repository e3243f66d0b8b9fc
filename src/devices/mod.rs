//! Displays.
//!
//! A display port reads and writes the screen configuration of the window
//! system. Absolute pointing devices (touchscreens, digitizers) are rotated
//! along with the screen; a mouse doesn't change movement direction based on
//! screen orientation, so it is left alone.

pub mod dummy;
pub mod xinput;
pub mod xrandr;

use crate::error::Result;
use crate::orientation::RotationState;

/// Snapshot of the screen configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScreenConfig {
    pub rotation: RotationState,
    /// Index into the screen's size list.
    pub size: u16,
    /// Refresh rate in Hz.
    pub rate: u16,
    pub timestamp: u32,
    pub config_timestamp: u32,
}

impl ScreenConfig {
    /// Same configuration, rotated.
    pub fn rotated(self, rotation: RotationState) -> Self {
        ScreenConfig { rotation, ..self }
    }
}

pub trait DisplayPort {
    /// Query the live configuration; never served from a cache.
    fn current_config(&mut self) -> Result<ScreenConfig>;

    fn set_config(&mut self, config: &ScreenConfig) -> Result<()>;
}

