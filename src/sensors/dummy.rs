//! Dummy sensor.
//!
//! Replays a scripted list of readings. Useful for testing or for driving
//! the daemon without hardware.

use std::collections::VecDeque;
use std::io;

use super::Sensor;
use crate::error::{Error, Result};
use crate::orientation::TiltVector;

#[derive(Default)]
pub struct DummySensor {
    readings: VecDeque<Result<TiltVector>>,
    samples: usize,
}

impl DummySensor {
    pub fn new<I>(readings: I) -> Self
    where
        I: IntoIterator<Item = Result<TiltVector>>,
    {
        DummySensor {
            readings: readings.into_iter().collect(),
            samples: 0,
        }
    }

    /// Scripts a list of well-formed readings.
    pub fn from_vectors<I>(vectors: I) -> Self
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        Self::new(vectors.into_iter().map(|(x, y)| Ok(TiltVector::new(x, y))))
    }

    pub fn push(&mut self, reading: Result<TiltVector>) {
        self.readings.push_back(reading);
    }

    /// How many times the sensor has been sampled.
    pub fn samples(&self) -> usize {
        self.samples
    }
}

impl Sensor for DummySensor {
    fn sample(&mut self) -> Result<TiltVector> {
        self.samples += 1;
        self.readings.pop_front().unwrap_or_else(|| {
            Err(Error::IOError(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "dummy sensor ran out of readings",
            )))
        })
    }
}
