//! XRandR display port.
//!
//! Talks the RandR 1.1 screen configuration requests over the shared
//! connection, so the rotation applies to the whole root window.

use std::rc::Rc;

use x11rb::protocol::randr::{self, ConnectionExt as _};

use super::{xinput, DisplayPort, ScreenConfig};
use crate::error::{Error, Result};
use crate::orientation::RotationState;
use crate::x11::XSession;

pub struct XRandrDisplay {
    session: Rc<XSession>,
    touchscreens: Vec<String>,
}

impl XRandrDisplay {
    pub fn new(session: Rc<XSession>) -> Self {
        XRandrDisplay {
            session,
            touchscreens: vec![],
        }
    }

    /// Devices whose input matrix follows the screen rotation.
    pub fn with_touchscreens(mut self, touchscreens: Vec<String>) -> Self {
        self.touchscreens = touchscreens;
        self
    }
}

impl DisplayPort for XRandrDisplay {
    fn current_config(&mut self) -> Result<ScreenConfig> {
        let info = self
            .session
            .conn
            .randr_get_screen_info(self.session.root)?
            .reply()?;
        let bits = u16::from(info.rotation);
        let rotation = RotationState::from_randr_bits(bits).ok_or(Error::UnknownRotation(bits))?;
        Ok(ScreenConfig {
            rotation,
            size: info.size_id,
            rate: info.rate,
            timestamp: info.timestamp,
            config_timestamp: info.config_timestamp,
        })
    }

    fn set_config(&mut self, config: &ScreenConfig) -> Result<()> {
        let reply = self
            .session
            .conn
            .randr_set_screen_config(
                self.session.root,
                config.timestamp,
                config.config_timestamp,
                config.size,
                randr::Rotation::from(config.rotation.to_randr_bits()),
                config.rate,
            )?
            .reply()?;
        if reply.status != randr::SetConfig::SUCCESS {
            return Err(Error::SetConfig(format!("{:?}", reply.status)));
        }

        xinput::rotate_touchscreens(&self.touchscreens, config.rotation);
        Ok(())
    }
}
