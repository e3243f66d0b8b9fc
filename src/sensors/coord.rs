//! Text accelerometer files.
//!
//! Drivers such as lis3lv02d expose the current acceleration as a single
//! line of whitespace separated integers, e.g. `-18 540 -36`. Only the first
//! two axes matter for screen orientation.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use super::Sensor;
use crate::error::{Error, Result};
use crate::orientation::TiltVector;

pub struct CoordSensor<R> {
    source: R,
    invert_x: bool,
    invert_y: bool,
}

impl CoordSensor<File> {
    /// Opens the sensor file. It stays open until the sensor is dropped.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(CoordSensor::new(File::open(path)?))
    }
}

impl<R: Read + Seek> CoordSensor<R> {
    pub fn new(source: R) -> Self {
        CoordSensor {
            source,
            invert_x: false,
            invert_y: false,
        }
    }

    /// Flip the sign of either axis, for sensors mounted mirrored.
    pub fn with_inversion(mut self, invert_x: bool, invert_y: bool) -> Self {
        self.invert_x = invert_x;
        self.invert_y = invert_y;
        self
    }
}

impl<R: Read + Seek> Sensor for CoordSensor<R> {
    fn sample(&mut self) -> Result<TiltVector> {
        // rewind, the file is reused across ticks
        self.source.seek(SeekFrom::Start(0))?;
        let mut raw = String::new();
        self.source.read_to_string(&mut raw)?;

        let mut tilt = parse_reading(&raw)?;
        if self.invert_x {
            tilt.x = tilt.x.saturating_neg();
        }
        if self.invert_y {
            tilt.y = tilt.y.saturating_neg();
        }
        Ok(tilt)
    }
}

/// Parses the first two whitespace separated integers as x and y.
pub fn parse_reading(raw: &str) -> Result<TiltVector> {
    let mut tokens = raw.split_whitespace();
    let mut axis = || -> Result<i32> {
        tokens
            .next()
            .and_then(|token| token.parse().ok())
            .ok_or_else(|| Error::Parse(raw.trim().to_owned()))
    };
    let x = axis()?;
    let y = axis()?;
    Ok(TiltVector::new(x, y))
}
