//! Sensors
//!
//! This is the abstraction over whatever produces tilt readings, usually an
//! accelerometer exposing its axes through sysfs.

pub mod coord;
pub mod dummy;

use std::path::PathBuf;

use glob::glob;

use crate::error::{Error, Result};
use crate::orientation::TiltVector;

/// Sysfs files exposing accelerometer axes as whitespace separated integers.
pub const SENSOR_PATTERNS: &[&str] = &[
    "/sys/class/i2c-adapter/i2c-*/*-*/coord",
    "/sys/bus/i2c/devices/*/coord",
];

pub trait Sensor {
    /// Take a fresh reading.
    fn sample(&mut self) -> Result<TiltVector>;
}

/// Lists the sensor files matching `patterns`, in pattern order.
pub fn available_sensors(patterns: &[&str]) -> Result<Vec<PathBuf>> {
    let mut found = vec![];
    for pattern in patterns {
        let entries = glob(pattern).map_err(|e| Error::Config(e.to_string()))?;
        for entry in entries {
            match entry {
                Ok(path) if !found.contains(&path) => found.push(path),
                Ok(_) => {}
                Err(e) => log::debug!("skipping unreadable sensor candidate: {}", e),
            }
        }
    }
    Ok(found)
}

/// First sensor found in the well-known locations.
pub fn discover() -> Result<PathBuf> {
    available_sensors(SENSOR_PATTERNS)?
        .into_iter()
        .next()
        .ok_or(Error::NoSensor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_matching_files_once() -> Result<()> {
        let dir = std::env::temp_dir().join(format!("rotationd-sensors-{}", std::process::id()));
        std::fs::create_dir_all(dir.join("3-001d"))?;
        std::fs::write(dir.join("3-001d").join("coord"), "0 0 0\n")?;

        let pattern = format!("{}/*/coord", dir.display());
        let found = available_sensors(&[pattern.as_str(), pattern.as_str()])?;
        std::fs::remove_dir_all(&dir)?;

        assert_eq!(found, vec![dir.join("3-001d").join("coord")]);
        Ok(())
    }

    #[test]
    fn bad_pattern_is_a_config_error() {
        assert!(matches!(
            available_sensors(&["/sys/[unterminated"]),
            Err(Error::Config(_))
        ));
    }
}
