//! # Unit Types
//!
//! Type-safe wrappers for the two quantities the engine deals in: angles and
//! lengths. They are plain `f64` newtypes, so JSON stays clean (just numbers)
//! and there is no runtime overhead.
//!
//! - Angles: [`Degrees`] at every public boundary, [`Radians`] only where
//!   trigonometry happens.
//! - Lengths: [`Meters`]. Archetype base dimensions are declared in meters at
//!   scale 1 and multiplied by the scale factor.
//!
//! ## Example
//!
//! ```rust
//! use yantra_core::units::{Degrees, Meters, Radians};
//!
//! let lat = Degrees(30.0);
//! let rad: Radians = lat.into();
//! assert!((rad.sin() - 0.5).abs() < 1e-12);
//!
//! let gnomon = Meters(27.4) * 2.0;
//! assert_eq!(gnomon.value(), 54.8);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Angle Units
// ============================================================================

/// Angle in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0.to_radians())
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0.to_degrees())
    }
}

impl Degrees {
    /// Absolute angle, e.g. the gnomon tilt regardless of hemisphere
    pub fn abs(self) -> Self {
        Degrees(self.0.abs())
    }
}

impl Radians {
    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    pub fn cos(self) -> f64 {
        self.0.cos()
    }

    pub fn tan(self) -> f64 {
        self.0.tan()
    }

    /// Inverse sine with the argument clamped to [-1, 1].
    ///
    /// Rounding can push a mathematically valid argument a few ulps past
    /// the domain edge; clamping turns that into the boundary angle instead
    /// of NaN.
    pub fn asin_clamped(x: f64) -> Self {
        Radians(x.clamp(-1.0, 1.0).asin())
    }

    /// Inverse cosine with the argument clamped to [-1, 1].
    pub fn acos_clamped(x: f64) -> Self {
        Radians(x.clamp(-1.0, 1.0).acos())
    }
}

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl Div for Meters {
    type Output = f64;
    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Degrees);
impl_arithmetic!(Radians);
impl_arithmetic!(Meters);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrees_to_radians() {
        let rad: Radians = Degrees(180.0).into();
        assert!((rad.0 - std::f64::consts::PI).abs() < 1e-12);

        let back: Degrees = rad.into();
        assert!((back.0 - 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_arithmetic() {
        let a = Meters(10.0);
        let b = Meters(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
        assert_eq!(a / b, 2.0);
    }

    #[test]
    fn test_clamped_inverse_trig() {
        let above = Radians::asin_clamped(1.0 + 1e-12);
        assert!((Degrees::from(above).0 - 90.0).abs() < 1e-12);

        let below = Radians::asin_clamped(-1.5);
        assert!((Degrees::from(below).0 + 90.0).abs() < 1e-12);

        let zero = Radians::acos_clamped(1.0000001);
        assert_eq!(zero.0, 0.0);
    }

    #[test]
    fn test_serialization() {
        let m = Meters(27.4);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "27.4");

        let roundtrip: Meters = serde_json::from_str(&json).unwrap();
        assert_eq!(m, roundtrip);
    }
}
