//! Error types for rotationd
//!
//! Startup errors abort the daemon from `main`; everything raised during a
//! tick is logged by the controller and the tick is skipped.

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unable to parse sensor reading {0:?}")]
    Parse(String),

    #[error("No tilt sensor found, pass one with --sensor")]
    NoSensor,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Unable to read configuration file")]
    ConfigFile(#[from] serde_json::Error),

    #[error("Invalid window pattern")]
    Pattern(#[from] regex::Error),

    #[error("Underlying I/O error")]
    IOError(#[from] std::io::Error),

    #[error("Unable to connect to the X server")]
    Connect(#[from] x11rb::errors::ConnectError),

    #[error("Lost the X server connection")]
    Connection(#[from] x11rb::errors::ConnectionError),

    #[error("X request failed")]
    Reply(#[from] x11rb::errors::ReplyError),

    #[error("Unknown RandR rotation bits {0:#x}")]
    UnknownRotation(u16),

    #[error("RandR refused the screen configuration ({0})")]
    SetConfig(String),

    #[error("xinput failed: {0}")]
    Xinput(String),

    #[error("Window property {0} is malformed")]
    Property(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
