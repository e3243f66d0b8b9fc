//! rotationd
//!
//! Keeps the X screen upright by polling a tilt sensor and rotating the
//! root window through RandR, unless the focused application is pinned to a
//! fixed orientation.

pub mod config;
pub mod controller;
pub mod devices;
pub mod error;
pub mod orientation;
pub mod policy;
pub mod sensors;
pub mod x11;

pub use controller::{decide, RotationController, TickOutcome};
pub use error::{Error, Result};
pub use orientation::{RotationState, TiltVector};
