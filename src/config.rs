//! Configuration
//!
//! Settings come from three layers: built-in defaults, an optional JSON file
//! and the command line (each flag also reads an environment variable). Later
//! layers override earlier ones.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use serde::Deserialize;

use crate::controller::DEFAULT_THRESHOLD;
use crate::error::{Error, Result};
use crate::policy::{Blacklist, BlacklistRule};

pub const DEFAULT_SLEEP_MS: u64 = 1000;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Sensor file; discovered when unset.
    pub sensor: Option<PathBuf>,
    pub threshold: u32,
    /// Delay between ticks.
    pub sleep_ms: u64,
    pub invert_x: bool,
    pub invert_y: bool,
    /// xinput devices rotated along with the screen.
    pub touchscreens: Vec<String>,
    pub blacklist: Vec<BlacklistRule>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sensor: None,
            threshold: DEFAULT_THRESHOLD,
            sleep_ms: DEFAULT_SLEEP_MS,
            invert_x: false,
            invert_y: false,
            touchscreens: vec![],
            blacklist: vec![],
        }
    }
}

impl Config {
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config = Self::from_json(&fs::read_to_string(path)?)?;
        log::info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Defaults, then the `--config` file, then the remaining flags.
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let mut config = match matches.get_one::<PathBuf>("config") {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(sensor) = matches.get_one::<PathBuf>("sensor") {
            config.sensor = Some(sensor.clone());
        }
        if let Some(&threshold) = matches.get_one::<u32>("threshold") {
            config.threshold = threshold;
        }
        if let Some(&sleep_ms) = matches.get_one::<u64>("sleep") {
            config.sleep_ms = sleep_ms;
        }
        if let Some(touchscreens) = matches.get_many::<String>("touchscreen") {
            config.touchscreens.extend(touchscreens.cloned());
        }
        config.invert_x |= flag(matches, "invert-x");
        config.invert_y |= flag(matches, "invert-y");

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.sleep_ms == 0 {
            return Err(Error::Config("sleep must be at least 1ms".into()));
        }
        Ok(())
    }

    pub fn sleep(&self) -> Duration {
        Duration::from_millis(self.sleep_ms)
    }

    pub fn blacklist(&self) -> Result<Blacklist> {
        Blacklist::new(self.blacklist.clone())
    }
}

pub fn flag(matches: &ArgMatches, id: &str) -> bool {
    matches.get_one::<bool>(id).copied().unwrap_or(false)
}

pub fn command() -> Command<'static> {
    Command::new("rotationd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Rotates the X screen to follow the device's accelerometer")
        .arg(
            Arg::new("sensor")
                .long("sensor")
                .value_name("PATH")
                .env("ROTATIOND_SENSOR")
                .help("Accelerometer file, discovered in sysfs when omitted")
                .takes_value(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("threshold")
                .long("threshold")
                .short('t')
                .value_name("THRESHOLD")
                .env("ROTATIOND_THRESHOLD")
                .help("Tilt needed on one axis before rotating [default: 500]")
                .takes_value(true)
                .allow_hyphen_values(true)
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("sleep")
                .long("sleep")
                .short('s')
                .value_name("SLEEP")
                .env("ROTATIOND_SLEEP")
                .help("Milliseconds between samples [default: 1000]")
                .takes_value(true)
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .env("ROTATIOND_CONFIG")
                .help("JSON configuration file")
                .takes_value(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("touchscreen")
                .long("touchscreen")
                .value_name("DEVICE")
                .help("xinput device to rotate with the screen, may be repeated")
                .takes_value(true)
                .multiple_occurrences(true)
                .value_parser(value_parser!(String)),
        )
        .arg(
            Arg::new("invert-x")
                .long("invert-x")
                .help("Invert the x axis of the sensor")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("invert-y")
                .long("invert-y")
                .help("Invert the y axis of the sensor")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("oneshot")
                .long("oneshot")
                .short('O')
                .help("Sample once, rotate if needed and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-sensors")
                .long("list-sensors")
                .help("Print the sensors found in sysfs and exit")
                .action(ArgAction::SetTrue),
        )
}
