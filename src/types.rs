//! Strongly-typed angle primitives for petalviz (zero-cost newtypes).
//!
//! Layout math mixes radians (what the band scales produce) with degrees (what
//! SVG `rotate()` consumes). Keeping them apart in the type system makes the
//! hemisphere checks impossible to feed with the wrong unit.

use std::f64::consts::{PI, TAU};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is negative when non-negative required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Check that a configuration value is a usable finite number.
pub fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Check that a configuration value is finite and not negative.
pub fn check_non_negative(val: f64) -> Result<f64, NumericError> {
    let val = check_finite(val)?;
    if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Angle in radians, measured clockwise from 12 o'clock (d3 convention)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Radians(pub f64);

impl Radians {
    pub const ZERO: Radians = Radians(0.0);
    pub const FULL_TURN: Radians = Radians(TAU);

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn to_degrees(self) -> Degrees {
        Degrees(self.0 * 180.0 / PI)
    }

    /// Same direction, wrapped into `[0, 2π)`.
    #[inline]
    pub fn normalized(self) -> Radians {
        Radians(self.0.rem_euclid(TAU))
    }

    #[inline]
    pub fn min(self, other: Radians) -> Radians {
        Radians(self.0.min(other.0))
    }
}

impl Add for Radians {
    type Output = Radians;
    fn add(self, rhs: Radians) -> Radians { Radians(self.0 + rhs.0) }
}
impl Sub for Radians {
    type Output = Radians;
    fn sub(self, rhs: Radians) -> Radians { Radians(self.0 - rhs.0) }
}
impl Mul<f64> for Radians {
    type Output = Radians;
    fn mul(self, rhs: f64) -> Radians { Radians(self.0 * rhs) }
}
impl Div<f64> for Radians {
    type Output = Radians;
    fn div(self, rhs: f64) -> Radians { Radians(self.0 / rhs) }
}
impl Neg for Radians {
    type Output = Radians;
    fn neg(self) -> Radians { Radians(-self.0) }
}

impl fmt::Display for Radians {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}rad", self.0)
    }
}

/// Angle in degrees, as consumed by SVG transforms
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Degrees(pub f64);

impl Degrees {
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Same direction, wrapped into `[0, 360)`.
    #[inline]
    pub fn normalized(self) -> Degrees {
        Degrees(self.0.rem_euclid(360.0))
    }

    /// True on the lower half of the circle, strictly past 6 o'clock.
    ///
    /// Exactly 180° counts as the upper hemisphere.
    #[inline]
    pub fn is_lower_hemisphere(self) -> bool {
        self.normalized().0 > 180.0
    }

    /// True when an arc starting here would draw its text upside-down
    /// (strictly between 90° and 270°).
    #[inline]
    pub fn is_bottom_facing(self) -> bool {
        let d = self.normalized().0;
        d > 90.0 && d < 270.0
    }
}

impl Add<f64> for Degrees {
    type Output = Degrees;
    fn add(self, rhs: f64) -> Degrees { Degrees(self.0 + rhs) }
}
impl Sub<f64> for Degrees {
    type Output = Degrees;
    fn sub(self, rhs: f64) -> Degrees { Degrees(self.0 - rhs) }
}
impl Neg for Degrees {
    type Output = Degrees;
    fn neg(self) -> Degrees { Degrees(-self.0) }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
