//! # Unit Types
//!
//! Type-safe wrappers for the lengths and weights a trailer owner types in,
//! plus the [`UnitSystem`] scale factors that normalize a configuration
//! before it reaches the solver.
//!
//! ## Design Philosophy
//!
//! The solver itself is unit-free: it only needs every length in one unit and
//! every force in one unit. Conversion is a scale factor applied before the
//! solve and undone afterwards. The canonical system is US customary:
//! pounds (lb) for weight and inches (in) for distance from the hitch.
//!
//! ## Example
//!
//! ```rust
//! use tongue_core::units::{Centimeters, Inches, Kilograms, Pounds, UnitSystem};
//!
//! let length: Inches = Centimeters(254.0).into();
//! assert!((length.0 - 100.0).abs() < 1e-9);
//!
//! let weight: Pounds = Kilograms(1.0).into();
//! assert!((weight.0 - 2.204_622_621_848_776).abs() < 1e-12);
//!
//! assert_eq!(UnitSystem::Metric.force_label(), "kg");
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Centimeters per inch (exact)
pub const CM_PER_INCH: f64 = 2.54;

/// Pounds per kilogram (weight on Earth)
pub const LB_PER_KG: f64 = 2.204_622_621_848_776;

// ============================================================================
// Length Units
// ============================================================================

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

impl From<Centimeters> for Inches {
    fn from(cm: Centimeters) -> Self {
        Inches(cm.0 / CM_PER_INCH)
    }
}

impl From<Inches> for Centimeters {
    fn from(inches: Inches) -> Self {
        Centimeters(inches.0 * CM_PER_INCH)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Weight in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

/// Weight in kilograms (kilogram-force)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

impl From<Kilograms> for Pounds {
    fn from(kg: Kilograms) -> Self {
        Pounds(kg.0 * LB_PER_KG)
    }
}

impl From<Pounds> for Kilograms {
    fn from(lb: Pounds) -> Self {
        Kilograms(lb.0 / LB_PER_KG)
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

impl_arithmetic!(Inches);
impl_arithmetic!(Centimeters);
impl_arithmetic!(Pounds);
impl_arithmetic!(Kilograms);

// ============================================================================
// Unit Systems
// ============================================================================

/// Measurement system a trailer configuration is entered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnitSystem {
    /// Pounds and inches (canonical)
    #[default]
    Imperial,
    /// Kilograms and centimeters
    Metric,
}

impl UnitSystem {
    /// Label for weights
    pub fn force_label(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "lbs",
            UnitSystem::Metric => "kg",
        }
    }

    /// Label for distances
    pub fn length_label(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "in",
            UnitSystem::Metric => "cm",
        }
    }

    /// Multiply a weight in this system by this to get pounds
    pub fn force_to_canonical(&self) -> f64 {
        match self {
            UnitSystem::Imperial => 1.0,
            UnitSystem::Metric => LB_PER_KG,
        }
    }

    /// Multiply a distance in this system by this to get inches
    pub fn length_to_canonical(&self) -> f64 {
        match self {
            UnitSystem::Imperial => 1.0,
            UnitSystem::Metric => 1.0 / CM_PER_INCH,
        }
    }
}

/// Round to a number of decimal places for display.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centimeters_to_inches() {
        let inches: Inches = Centimeters(457.2).into();
        assert!((inches.0 - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_kilograms_roundtrip() {
        let lb: Pounds = Kilograms(1000.0).into();
        let kg: Kilograms = lb.into();
        assert!((kg.0 - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_arithmetic() {
        let a = Pounds(2000.0);
        let b = Pounds(500.0);
        assert_eq!((a + b).0, 2500.0);
        assert_eq!((a - b).0, 1500.0);
        assert_eq!((a * 2.0).0, 4000.0);
        assert_eq!((a / 4.0).value(), 500.0);
    }

    #[test]
    fn test_unit_system_labels() {
        assert_eq!(UnitSystem::default(), UnitSystem::Imperial);
        assert_eq!(UnitSystem::Imperial.force_label(), "lbs");
        assert_eq!(UnitSystem::Metric.length_label(), "cm");
        assert_eq!(UnitSystem::Imperial.length_to_canonical(), 1.0);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(888.8888, 2), 888.89);
        assert_eq!(round_to(-0.004, 2), -0.0);
        assert_eq!(round_to(44.444, 0), 44.0);
    }

    #[test]
    fn test_serialization() {
        let inches = Inches(139.5);
        let json = serde_json::to_string(&inches).unwrap();
        assert_eq!(json, "139.5");

        let system: UnitSystem = serde_json::from_str("\"Metric\"").unwrap();
        assert_eq!(system, UnitSystem::Metric);
    }
}
