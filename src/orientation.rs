//! # Orientation
//!
//! Raw tilt readings and the four screen orientations they are mapped to.

use std::fmt;

use serde::Deserialize;

/// A raw two-axis accelerometer reading.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TiltVector {
    pub x: i32,
    pub y: i32,
}

impl TiltVector {
    pub fn new(x: i32, y: i32) -> Self {
        TiltVector { x, y }
    }
}

impl fmt::Display for TiltVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Screen orientation, named the way `xrandr --rotate` names them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationState {
    /// Zero degree rotation; don't rotate.
    #[default]
    Normal,
    /// 90 degree clockwise rotation; screen "up" is on the right.
    Right,
    /// 180 degree rotation; screen is flipped.
    Inverted,
    /// 270 degree clockwise rotation; screen "up" is on the left.
    Left,
}

impl RotationState {
    pub const ALL: [RotationState; 4] = [
        RotationState::Normal,
        RotationState::Right,
        RotationState::Inverted,
        RotationState::Left,
    ];

    /// Convert to clockwise degrees.
    pub fn to_degrees(self) -> isize {
        match self {
            Self::Normal => 0,
            Self::Right => 90,
            Self::Inverted => 180,
            Self::Left => 270,
        }
    }

    /// RandR rotation bit. RandR counts counter clockwise, so `Rotate_90`
    /// is xrandr's "left".
    pub fn to_randr_bits(self) -> u16 {
        match self {
            Self::Normal => 1,
            Self::Left => 2,
            Self::Inverted => 4,
            Self::Right => 8,
        }
    }

    /// Reflection bits (16 and 32) are ignored.
    pub fn from_randr_bits(bits: u16) -> Option<Self> {
        match bits & 0x0f {
            1 => Some(Self::Normal),
            2 => Some(Self::Left),
            4 => Some(Self::Inverted),
            8 => Some(Self::Right),
            _ => None,
        }
    }

    /// `Coordinate Transformation Matrix` for absolute pointing devices
    /// that follow the screen.
    pub fn touch_matrix(self) -> [&'static str; 9] {
        match self {
            Self::Normal => ["1", "0", "0", "0", "1", "0", "0", "0", "1"],
            Self::Right => ["0", "1", "0", "-1", "0", "1", "0", "0", "1"],
            Self::Inverted => ["-1", "0", "1", "0", "-1", "1", "0", "0", "1"],
            Self::Left => ["0", "-1", "1", "1", "0", "0", "0", "0", "1"],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Right => "right",
            Self::Inverted => "inverted",
            Self::Left => "left",
        }
    }
}

impl fmt::Display for RotationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
