use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use rotationd::config::Config;
use rotationd::devices::dummy::DummyDisplay;
use rotationd::policy::{BlacklistPolicy, WindowIdentity, WindowQuery};
use rotationd::sensors::coord::CoordSensor;
use rotationd::{Error, Result, RotationController, RotationState, TickOutcome};

/// Focus shared with the test so it can change between ticks.
#[derive(Clone, Default)]
struct Focus(Rc<RefCell<Option<WindowIdentity>>>);

impl Focus {
    fn set(&self, window: Option<WindowIdentity>) {
        *self.0.borrow_mut() = window;
    }
}

impl WindowQuery for Focus {
    fn active_window(&mut self) -> Result<Option<WindowIdentity>> {
        match self.0.borrow().clone() {
            Some(window) if window.class == "Broken" => Err(Error::Property("WM_CLASS")),
            window => Ok(window),
        }
    }
}

struct SensorFile(PathBuf);

impl SensorFile {
    fn new(name: &str) -> Self {
        SensorFile(std::env::temp_dir().join(format!("rotationd-{}-{}", name, std::process::id())))
    }

    fn write(&self, reading: &str) {
        fs::write(&self.0, reading).unwrap();
    }
}

impl Drop for SensorFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

#[test]
fn follows_the_sensor_file() -> Result<()> {
    let file = SensorFile::new("follow");
    file.write("0 -600\n");

    let config = Config::from_json(r#"{"threshold": 500}"#)?;
    let focus = Focus::default();
    let policy = BlacklistPolicy::new(focus, config.blacklist()?);
    let mut ctl = RotationController::new(
        CoordSensor::open(&file.0)?,
        DummyDisplay::new(RotationState::Normal),
        policy,
    )
    .with_threshold(config.threshold);

    assert_eq!(ctl.tick(), TickOutcome::Rotated(RotationState::Inverted));

    file.write("600 0\n");
    assert_eq!(ctl.tick(), TickOutcome::Rotated(RotationState::Normal));

    file.write("100 100\n");
    assert_eq!(ctl.tick(), TickOutcome::DeadZone);

    file.write("abc\n");
    assert_eq!(ctl.tick(), TickOutcome::Skipped);

    assert_eq!(ctl.display().applied().len(), 2);
    assert_eq!(ctl.display().config().rotation, RotationState::Normal);
    Ok(())
}

#[test]
fn blacklisted_window_pins_the_screen() -> Result<()> {
    let file = SensorFile::new("pinned");
    file.write("0 700 12\n");

    let config = Config::from_json(r#"{"blacklist": [{"class": "^mpv$", "rotation": "normal"}]}"#)?;
    let focus = Focus::default();
    let mut ctl = RotationController::new(
        CoordSensor::open(&file.0)?,
        DummyDisplay::new(RotationState::Normal),
        BlacklistPolicy::new(focus.clone(), config.blacklist()?),
    );

    focus.set(Some(WindowIdentity::new("xterm", "XTerm")));
    assert_eq!(ctl.tick(), TickOutcome::Rotated(RotationState::Left));

    focus.set(Some(WindowIdentity::new("gl", "mpv")));
    assert_eq!(ctl.tick(), TickOutcome::Rotated(RotationState::Normal));
    assert_eq!(ctl.tick(), TickOutcome::Unchanged(RotationState::Normal));

    // lookup failures fall back to the sensor
    focus.set(Some(WindowIdentity::new("broken", "Broken")));
    assert_eq!(ctl.tick(), TickOutcome::Rotated(RotationState::Left));

    focus.set(None);
    assert_eq!(ctl.tick(), TickOutcome::Unchanged(RotationState::Left));
    Ok(())
}

#[test]
fn inverted_axes_flip_the_decision() -> Result<()> {
    let file = SensorFile::new("inverted");
    file.write("-600 0\n");

    let config = Config::from_json(r#"{"invert_x": true}"#)?;
    let sensor = CoordSensor::open(&file.0)?.with_inversion(config.invert_x, config.invert_y);
    let mut ctl = RotationController::new(
        sensor,
        DummyDisplay::new(RotationState::Left),
        rotationd::policy::NeverForce,
    );
    assert_eq!(ctl.tick(), TickOutcome::Rotated(RotationState::Normal));
    Ok(())
}
