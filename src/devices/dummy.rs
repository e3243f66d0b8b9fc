//! Dummy display.
//!
//! This is purely for testing or debugging.
//! It keeps the configuration in memory and records every change.

use std::io;

use super::{DisplayPort, ScreenConfig};
use crate::error::{Error, Result};
use crate::orientation::RotationState;

pub struct DummyDisplay {
    config: ScreenConfig,
    queries: usize,
    applied: Vec<ScreenConfig>,
    fail_next_query: bool,
    fail_next_set: bool,
}

impl DummyDisplay {
    pub fn new(rotation: RotationState) -> Self {
        DummyDisplay {
            config: ScreenConfig {
                rotation,
                size: 0,
                rate: 60,
                timestamp: 1,
                config_timestamp: 1,
            },
            queries: 0,
            applied: vec![],
            fail_next_query: false,
            fail_next_set: false,
        }
    }

    pub fn config(&self) -> ScreenConfig {
        self.config
    }

    /// Every configuration passed to `set_config`, in order.
    pub fn applied(&self) -> &[ScreenConfig] {
        &self.applied
    }

    pub fn queries(&self) -> usize {
        self.queries
    }

    /// Simulates another client reconfiguring the screen.
    pub fn external_change(&mut self, config: ScreenConfig) {
        self.config = config;
    }

    /// Makes the next query fail, as a dropped X reply would.
    pub fn fail_next_query(&mut self) {
        self.fail_next_query = true;
    }

    /// Makes the next change fail, as a refused `SetScreenConfig` would.
    /// The failed change is neither applied nor recorded.
    pub fn fail_next_set(&mut self) {
        self.fail_next_set = true;
    }
}

impl DisplayPort for DummyDisplay {
    fn current_config(&mut self) -> Result<ScreenConfig> {
        self.queries += 1;
        if self.fail_next_query {
            self.fail_next_query = false;
            return Err(Error::IOError(io::Error::new(
                io::ErrorKind::Other,
                "dummy display query failed",
            )));
        }
        Ok(self.config)
    }

    fn set_config(&mut self, config: &ScreenConfig) -> Result<()> {
        if self.fail_next_set {
            self.fail_next_set = false;
            return Err(Error::SetConfig("Failed".into()));
        }
        log::info!("dummy: rotating to {}", config.rotation);
        self.applied.push(*config);
        self.config = ScreenConfig {
            timestamp: self.config.timestamp + 1,
            ..*config
        };
        Ok(())
    }
}
