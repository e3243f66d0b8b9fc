//! Focused window lookup through EWMH.

use std::rc::Rc;

use x11rb::protocol::xproto::{AtomEnum, ConnectionExt as _, Window};

use super::{WindowIdentity, WindowQuery};
use crate::error::{Error, Result};
use crate::x11::XSession;

pub struct X11WindowQuery {
    session: Rc<XSession>,
}

impl X11WindowQuery {
    pub fn new(session: Rc<XSession>) -> Self {
        X11WindowQuery { session }
    }

    /// `_NET_ACTIVE_WINDOW` of the root window.
    fn active_window_id(&self) -> Result<Option<Window>> {
        let reply = self
            .session
            .conn
            .get_property(
                false,
                self.session.root,
                self.session.atoms._NET_ACTIVE_WINDOW,
                AtomEnum::WINDOW,
                0,
                1,
            )?
            .reply()?;
        Ok(reply
            .value32()
            .and_then(|mut ids| ids.next())
            .filter(|&id| id != x11rb::NONE))
    }
}

impl WindowQuery for X11WindowQuery {
    fn active_window(&mut self) -> Result<Option<WindowIdentity>> {
        let window = match self.active_window_id()? {
            Some(window) => window,
            None => return Ok(None),
        };
        let reply = self
            .session
            .conn
            .get_property(false, window, AtomEnum::WM_CLASS, AtomEnum::STRING, 0, 256)?
            .reply()?;
        if reply.value.is_empty() {
            return Ok(None);
        }
        parse_wm_class(&reply.value).map(Some)
    }
}

/// `WM_CLASS` holds two NUL terminated strings, instance then class.
pub fn parse_wm_class(raw: &[u8]) -> Result<WindowIdentity> {
    let mut parts = raw.split(|&b| b == 0);
    let name = parts.next().ok_or(Error::Property("WM_CLASS"))?;
    let class = parts.next().ok_or(Error::Property("WM_CLASS"))?;
    Ok(WindowIdentity::new(
        String::from_utf8_lossy(name),
        String::from_utf8_lossy(class),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_instance_and_class() -> Result<()> {
        assert_eq!(
            parse_wm_class(b"Navigator\0firefox\0")?,
            WindowIdentity::new("Navigator", "firefox")
        );
        // some clients omit the final terminator
        assert_eq!(
            parse_wm_class(b"xterm\0XTerm")?,
            WindowIdentity::new("xterm", "XTerm")
        );
        Ok(())
    }

    #[test]
    fn rejects_missing_class() {
        assert!(matches!(
            parse_wm_class(b"lonely"),
            Err(Error::Property("WM_CLASS"))
        ));
    }
}
