//! Active window policy
//!
//! Some applications misbehave when the screen turns under them. The policy
//! looks at the focused window and may pin the screen to a fixed orientation
//! while that window has focus, overriding the sensor.

pub mod blacklist;
pub mod x11;

use crate::error::Result;
use crate::orientation::RotationState;

pub use blacklist::{Blacklist, BlacklistRule};

/// `WM_CLASS` of a window.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WindowIdentity {
    /// Instance name (`res_name`).
    pub name: String,
    /// Application class (`res_class`).
    pub class: String,
}

impl WindowIdentity {
    pub fn new<N: Into<String>, C: Into<String>>(name: N, class: C) -> Self {
        WindowIdentity {
            name: name.into(),
            class: class.into(),
        }
    }
}

/// Looks up the identity of the currently focused window.
pub trait WindowQuery {
    /// `Ok(None)` when nothing has focus.
    fn active_window(&mut self) -> Result<Option<WindowIdentity>>;
}

pub trait ActiveWindowPolicy {
    /// Orientation to pin the screen to, if the focused application asks for one.
    fn forced_rotation(&mut self) -> Option<RotationState>;

    fn should_force_landscape(&mut self) -> bool {
        self.forced_rotation().is_some()
    }
}

/// Never overrides the sensor.
#[derive(Copy, Clone, Debug, Default)]
pub struct NeverForce;

impl ActiveWindowPolicy for NeverForce {
    fn forced_rotation(&mut self) -> Option<RotationState> {
        None
    }
}

/// Forces the orientation of the first blacklist rule matching the focused
/// window. Lookup failures never force anything.
pub struct BlacklistPolicy<Q> {
    query: Q,
    blacklist: Blacklist,
}

impl<Q: WindowQuery> BlacklistPolicy<Q> {
    pub fn new(query: Q, blacklist: Blacklist) -> Self {
        BlacklistPolicy { query, blacklist }
    }
}

impl<Q: WindowQuery> ActiveWindowPolicy for BlacklistPolicy<Q> {
    fn forced_rotation(&mut self) -> Option<RotationState> {
        if self.blacklist.is_empty() {
            return None;
        }
        let window = match self.query.active_window() {
            Ok(Some(window)) => window,
            Ok(None) => {
                log::debug!("no active window");
                return None;
            }
            Err(e) => {
                log::warn!("active window lookup failed: {}", e);
                return None;
            }
        };
        log::debug!("active window is {} {}", window.name, window.class);
        self.blacklist.forced_rotation(&window)
    }
}
