//! Touchscreens and styli on 2-in-1 devices.
//!
//! X doesn't remap absolute input devices when the screen rotates, so their
//! coordinate transformation matrix is updated through `xinput`.

use std::process::Command;

use crate::error::{Error, Result};
use crate::orientation::RotationState;

pub fn rotate_touchscreen(device: &str, rotation: RotationState) -> Result<()> {
    let status = Command::new("xinput")
        .arg("set-prop")
        .arg(device)
        .arg("Coordinate Transformation Matrix")
        .args(&rotation.touch_matrix())
        .status()?;
    if !status.success() {
        return Err(Error::Xinput(format!(
            "could not rotate {:?} ({})",
            device, status
        )));
    }
    Ok(())
}

/// Rotates every device, logging failures instead of stopping at the first.
pub fn rotate_touchscreens(devices: &[String], rotation: RotationState) {
    for device in devices {
        if let Err(e) = rotate_touchscreen(device, rotation) {
            log::warn!("touchscreen {}: {}", device, e);
        }
    }
}
