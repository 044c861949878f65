//! Point Loads
//!
//! A trailer's cargo, tank, generator, etc. is modelled as a set of vertical
//! point loads, each located by its distance from the hitch.

use serde::{Deserialize, Serialize};

/// A single vertical point load.
///
/// Positive weight acts downward. Zero and negative weights are accepted so
/// that upward forces (e.g. a lifting strap) can be expressed, and loads that
/// share a position simply add. Fields are private: a load is immutable once
/// built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    /// Load magnitude (lb in the canonical unit system)
    weight: f64,

    /// Distance from the hitch (in in the canonical unit system)
    position: f64,

    /// Optional user label for reports
    #[serde(default, skip_serializing_if = "String::is_empty")]
    label: String,
}

impl PointLoad {
    /// Create a point load.
    ///
    /// No validation happens here; the solver rejects non-finite values
    /// before doing any arithmetic.
    pub fn new(weight: f64, position: f64) -> Self {
        Self {
            weight,
            position,
            label: String::new(),
        }
    }

    /// Set label and return self (builder pattern)
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Load magnitude
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Distance from the hitch
    pub fn position(&self) -> f64 {
        self.position
    }

    /// User label (may be empty)
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Moment of this load about the hitch
    pub fn moment(&self) -> f64 {
        self.weight * self.position
    }

    /// Copy of this load with weight and position multiplied by the given factors
    pub fn scaled(&self, weight_factor: f64, length_factor: f64) -> Self {
        Self {
            weight: self.weight * weight_factor,
            position: self.position * length_factor,
            label: self.label.clone(),
        }
    }
}

/// Sum of all load weights.
///
/// Folds from `0.0` so an empty list yields positive zero.
pub fn total_load(loads: &[PointLoad]) -> f64 {
    loads.iter().fold(0.0, |acc, load| acc + load.weight())
}

/// Sum of all load moments about the hitch
pub fn total_moment(loads: &[PointLoad]) -> f64 {
    loads.iter().fold(0.0, |acc, load| acc + load.moment())
}

// ============================================================================
// Tests
// ============================================================================
