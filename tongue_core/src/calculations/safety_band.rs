//! Safety Band Classification
//!
//! The tongue weight of a towed trailer is usually expected to fall within
//! 10-15% of the total trailer weight. Below the band the trailer tends to
//! sway; above it the tow vehicle's rear axle is overloaded. The band is a
//! pure post-hoc rule applied to a solved result.
//!
//! ## Example
//!
//! ```rust
//! use tongue_core::calculations::safety_band::{Classification, SafetyBand};
//!
//! let band = SafetyBand::default();
//! assert_eq!(band.classify(Some(0.12)), Classification::WithinBand);
//! assert_eq!(band.classify(Some(0.44)), Classification::AboveBand);
//! assert_eq!(band.classify(None), Classification::Undefined);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Default lower bound of the acceptable overhang fraction
pub const DEFAULT_MIN_FRACTION: f64 = 0.10;

/// Default upper bound of the acceptable overhang fraction
pub const DEFAULT_MAX_FRACTION: f64 = 0.15;

/// Acceptable range for the overhang reaction as a fraction of total load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafetyBand {
    /// Lower bound (inclusive)
    pub min_fraction: f64,
    /// Upper bound (inclusive)
    pub max_fraction: f64,
}

impl Default for SafetyBand {
    fn default() -> Self {
        SafetyBand {
            min_fraction: DEFAULT_MIN_FRACTION,
            max_fraction: DEFAULT_MAX_FRACTION,
        }
    }
}

impl SafetyBand {
    /// Create a validated band.
    pub fn new(min_fraction: f64, max_fraction: f64) -> CalcResult<Self> {
        let band = SafetyBand {
            min_fraction,
            max_fraction,
        };
        band.validate()?;
        Ok(band)
    }

    /// Check that both bounds are finite and ordered.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.min_fraction.is_finite() {
            return Err(CalcError::invalid_input(
                "band.min_fraction",
                self.min_fraction.to_string(),
                "Band bound must be a finite number",
            ));
        }
        if !self.max_fraction.is_finite() {
            return Err(CalcError::invalid_input(
                "band.max_fraction",
                self.max_fraction.to_string(),
                "Band bound must be a finite number",
            ));
        }
        if self.min_fraction > self.max_fraction {
            return Err(CalcError::invalid_input(
                "band",
                format!("[{}, {}]", self.min_fraction, self.max_fraction),
                "min_fraction must not exceed max_fraction",
            ));
        }
        Ok(())
    }

    /// Classify an overhang fraction. `None` (no load) and NaN are `Undefined`.
    pub fn classify(&self, fraction: Option<f64>) -> Classification {
        match fraction {
            None => Classification::Undefined,
            Some(f) if f.is_nan() => Classification::Undefined,
            Some(f) if f < self.min_fraction => Classification::BelowBand,
            Some(f) if f > self.max_fraction => Classification::AboveBand,
            Some(_) => Classification::WithinBand,
        }
    }
}

/// Position of an overhang fraction relative to a [`SafetyBand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// Inside the band (bounds inclusive)
    WithinBand,
    /// Below the band, including negative (hitch-lifting) reactions
    BelowBand,
    /// Above the band
    AboveBand,
    /// Total load is zero; no fraction exists
    Undefined,
}

impl Classification {
    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Classification::WithinBand => "Within band",
            Classification::BelowBand => "Below band",
            Classification::AboveBand => "Above band",
            Classification::Undefined => "Undefined",
        }
    }

    /// One-line explanation suitable for user feedback
    pub fn advice(&self) -> &'static str {
        match self {
            Classification::WithinBand => "Tongue weight is within the recommended range.",
            Classification::BelowBand => "Tongue weight is too low - risk of trailer sway.",
            Classification::AboveBand => "Tongue weight is too high - risk of overloading the tow vehicle.",
            Classification::Undefined => "No load applied - tongue weight percentage is undefined.",
        }
    }

    /// True only for [`Classification::WithinBand`]
    pub fn is_acceptable(&self) -> bool {
        matches!(self, Classification::WithinBand)
    }
}
