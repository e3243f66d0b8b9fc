//! Rotation controller
//!
//! Turns tilt readings into screen rotations. Each tick consults the active
//! window policy, samples the sensor, maps the reading to an orientation and
//! reconfigures the display when that orientation differs from the one last
//! applied. Nothing that goes wrong inside a tick escapes it; the next tick
//! simply tries again.

use crate::devices::DisplayPort;
use crate::error::Result;
use crate::orientation::{RotationState, TiltVector};
use crate::policy::ActiveWindowPolicy;
use crate::sensors::Sensor;

/// Tilt magnitude a reading must exceed on one axis before the screen turns.
pub const DEFAULT_THRESHOLD: u32 = 500;

/// Maps a reading to an orientation.
///
/// The y axis is tested before the x axis, so when both exceed the threshold
/// the y axis decides. Readings with both axes within `[-threshold, threshold]`
/// are in the dead zone and yield `None`.
pub fn decide(tilt: TiltVector, threshold: u32) -> Option<RotationState> {
    // widened so that neither the negated threshold nor any reading overflows
    let limit = i64::from(threshold);
    let (x, y) = (i64::from(tilt.x), i64::from(tilt.y));
    if y < -limit {
        Some(RotationState::Inverted)
    } else if y > limit {
        Some(RotationState::Left)
    } else if x < -limit {
        Some(RotationState::Right)
    } else if x > limit {
        Some(RotationState::Normal)
    } else {
        None
    }
}

/// What a single tick did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The display was reconfigured.
    Rotated(RotationState),
    /// The wanted orientation is already on screen.
    Unchanged(RotationState),
    /// The reading was inside the dead zone.
    DeadZone,
    /// Sampling or the display failed; see the log.
    Skipped,
}

pub struct RotationController<S, D, P> {
    sensor: S,
    display: D,
    policy: P,
    threshold: u32,
    last_applied: Option<RotationState>,
}

impl<S, D, P> RotationController<S, D, P>
where
    S: Sensor,
    D: DisplayPort,
    P: ActiveWindowPolicy,
{
    pub fn new(sensor: S, display: D, policy: P) -> Self {
        RotationController {
            sensor,
            display,
            policy,
            threshold: DEFAULT_THRESHOLD,
            last_applied: None,
        }
    }

    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn last_applied(&self) -> Option<RotationState> {
        self.last_applied
    }

    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn decide(&self, tilt: TiltVector) -> Option<RotationState> {
        decide(tilt, self.threshold)
    }

    /// Puts the screen in `state`. Returns whether the display was
    /// reconfigured.
    ///
    /// Nothing is sent when `state` was the last one applied. Otherwise size,
    /// rate and timestamps are read from the display right before the change,
    /// since another client may have touched them since the previous tick.
    pub fn apply(&mut self, state: RotationState) -> Result<bool> {
        if self.last_applied == Some(state) {
            return Ok(false);
        }

        let current = self.display.current_config()?;
        if current.rotation == state {
            log::debug!("screen is already {}", state);
            self.last_applied = Some(state);
            return Ok(false);
        }

        log::info!(
            "rotating from {} to {} ({} degrees clockwise)",
            current.rotation,
            state,
            state.to_degrees()
        );
        self.display.set_config(&current.rotated(state))?;
        self.last_applied = Some(state);
        Ok(true)
    }

    /// One full iteration of the daemon.
    pub fn tick(&mut self) -> TickOutcome {
        let wanted = match self.policy.forced_rotation() {
            Some(forced) => {
                log::debug!("active window forces {}", forced);
                forced
            }
            None => {
                let tilt = match self.sensor.sample() {
                    Ok(tilt) => tilt,
                    Err(e) => {
                        log::warn!("skipping tick, unable to sample sensor: {}", e);
                        return TickOutcome::Skipped;
                    }
                };
                log::debug!("tilt {}", tilt);
                match self.decide(tilt) {
                    Some(state) => state,
                    None => return TickOutcome::DeadZone,
                }
            }
        };

        match self.apply(wanted) {
            Ok(true) => TickOutcome::Rotated(wanted),
            Ok(false) => TickOutcome::Unchanged(wanted),
            Err(e) => {
                log::warn!("skipping tick, unable to rotate to {}: {}", wanted, e);
                TickOutcome::Skipped
            }
        }
    }
}
