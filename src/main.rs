use std::path::PathBuf;
use std::process;
use std::thread;

use rotationd::config::{self, Config};
use rotationd::devices::xrandr::XRandrDisplay;
use rotationd::policy::x11::X11WindowQuery;
use rotationd::policy::BlacklistPolicy;
use rotationd::sensors::{self, coord::CoordSensor};
use rotationd::x11::XSession;
use rotationd::{Result, RotationController};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            log::error!("  caused by: {}", cause);
            source = std::error::Error::source(cause);
        }
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let matches = config::command().get_matches();

    if config::flag(&matches, "list-sensors") {
        for path in sensors::available_sensors(sensors::SENSOR_PATTERNS)? {
            println!("{}", path.display());
        }
        return Ok(());
    }

    let config = Config::from_matches(&matches)?;

    let sensor_path: PathBuf = match &config.sensor {
        Some(path) => path.clone(),
        None => sensors::discover()?,
    };
    let sensor =
        CoordSensor::open(&sensor_path)?.with_inversion(config.invert_x, config.invert_y);
    log::info!("reading tilt from {}", sensor_path.display());

    let session = XSession::connect()?;
    let display =
        XRandrDisplay::new(session.clone()).with_touchscreens(config.touchscreens.clone());
    let blacklist = config.blacklist()?;
    if !blacklist.is_empty() {
        log::info!("{} blacklist rule(s) loaded", blacklist.len());
    }
    let policy = BlacklistPolicy::new(X11WindowQuery::new(session), blacklist);

    let mut controller =
        RotationController::new(sensor, display, policy).with_threshold(config.threshold);

    if config::flag(&matches, "oneshot") {
        log::info!("{:?}", controller.tick());
        return Ok(());
    }

    log::info!(
        "polling every {}ms, threshold {}",
        config.sleep_ms,
        controller.threshold()
    );
    loop {
        controller.tick();
        thread::sleep(config.sleep());
    }
}
