//! Turns the screen through every orientation and back, printing what RandR
//! reports after each step. Handy for checking the display side of a new
//! machine without touching the sensor.

use std::thread::sleep;
use std::time::Duration;

use rotationd::devices::xrandr::XRandrDisplay;
use rotationd::devices::DisplayPort;
use rotationd::x11::XSession;
use rotationd::{Result, RotationState};

fn main() -> Result<()> {
    let mut display = XRandrDisplay::new(XSession::connect()?);
    let start = display.current_config()?;
    println!("starting from {:?}", start);

    let mut steps = RotationState::ALL.to_vec();
    steps.push(start.rotation);
    for rotation in steps {
        let current = display.current_config()?;
        display.set_config(&current.rotated(rotation))?;
        println!("{:>8}: {:?}", rotation.as_str(), display.current_config()?);
        sleep(Duration::from_secs(1));
    }
    Ok(())
}
