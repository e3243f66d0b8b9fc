//! Shared X server connection.
//!
//! One connection is opened at startup and handed to both the display port
//! and the active window query. It lives until the daemon exits.

use std::rc::Rc;

use x11rb::connection::Connection;
use x11rb::protocol::randr::ConnectionExt as _;
use x11rb::protocol::xproto::Window;
use x11rb::rust_connection::RustConnection;

use crate::error::Result;

x11rb::atom_manager! {
    pub Atoms: AtomsCookie {
        _NET_ACTIVE_WINDOW,
    }
}

pub struct XSession {
    pub conn: RustConnection,
    pub root: Window,
    pub atoms: Atoms,
}

impl XSession {
    /// Connects to `$DISPLAY`, checks for RandR and interns the atoms we need.
    pub fn connect() -> Result<Rc<Self>> {
        let (conn, screen_num) = x11rb::connect(None)?;
        let root = conn.setup().roots[screen_num].root;

        let version = conn.randr_query_version(1, 1)?.reply()?;
        log::debug!(
            "RandR {}.{} on screen {}",
            version.major_version,
            version.minor_version,
            screen_num
        );

        let atoms = Atoms::new(&conn)?.reply()?;
        Ok(Rc::new(XSession { conn, root, atoms }))
    }
}
