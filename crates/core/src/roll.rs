//! Roll values and conversion from caller input.
//!
//! A [`Roll`] is a pin count already known to lie in `0..=10`. Whether it
//! fits the frame it is bowled into is checked later by the frame itself.
//! Raw input of any integer, float or text type goes through [`IntoRoll`],
//! which is where non-integer input is turned away.

use crate::error::RollError;
use crate::types::PIN_COUNT;

/// Pins knocked down by a single delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Roll(u8);

impl Roll {
    pub const STRIKE: Roll = Roll(PIN_COUNT);
    pub const GUTTER: Roll = Roll(0);

    /// Validate a pin count against a full rack.
    pub fn new(pins: i64) -> Result<Self, RollError> {
        if (0..=i64::from(PIN_COUNT)).contains(&pins) {
            Ok(Roll(pins as u8))
        } else {
            Err(RollError::Range {
                pins,
                standing: PIN_COUNT,
            })
        }
    }

    pub fn pins(&self) -> u8 {
        self.0
    }
}

impl From<Roll> for u8 {
    fn from(roll: Roll) -> Self {
        roll.0
    }
}

/// Conversion from caller input into a [`Roll`].
///
/// Integers are range-checked, floats must be finite and integral, and
/// text must parse as an integer.
pub trait IntoRoll {
    fn into_roll(self) -> Result<Roll, RollError>;
}

impl IntoRoll for Roll {
    fn into_roll(self) -> Result<Roll, RollError> {
        Ok(self)
    }
}

macro_rules! impl_into_roll_for_int {
    ($($t:ty),*) => {
        $(
            impl IntoRoll for $t {
                fn into_roll(self) -> Result<Roll, RollError> {
                    match i64::try_from(self) {
                        Ok(pins) => Roll::new(pins),
                        Err(_) => Err(RollError::Range {
                            pins: i64::MAX,
                            standing: PIN_COUNT,
                        }),
                    }
                }
            }
        )*
    };
}

impl_into_roll_for_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl IntoRoll for f64 {
    fn into_roll(self) -> Result<Roll, RollError> {
        if !self.is_finite() || self.fract() != 0.0 {
            return Err(RollError::InvalidType(self.to_string()));
        }
        // Saturating cast; anything that large is out of range anyway.
        Roll::new(self as i64)
    }
}

impl IntoRoll for f32 {
    fn into_roll(self) -> Result<Roll, RollError> {
        f64::from(self).into_roll()
    }
}

impl IntoRoll for &str {
    fn into_roll(self) -> Result<Roll, RollError> {
        match self.trim().parse::<i64>() {
            Ok(pins) => Roll::new(pins),
            Err(_) => Err(RollError::InvalidType(self.to_owned())),
        }
    }
}

impl IntoRoll for String {
    fn into_roll(self) -> Result<Roll, RollError> {
        self.as_str().into_roll()
    }
}

impl IntoRoll for &String {
    fn into_roll(self) -> Result<Roll, RollError> {
        self.as_str().into_roll()
    }
}
