//! Support (Axle) Sets
//!
//! A [`SupportSet`] holds the axle positions of a trailer, measured from the
//! hitch. The set is non-empty, every position is finite, and no two axles
//! share a position. These invariants are checked on construction and on
//! deserialization, so a `SupportSet` in hand is always safe to solve with.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Ordered collection of distinct support positions.
///
/// Input order is preserved; per-support reactions are reported in the same
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct SupportSet {
    positions: Vec<f64>,
}

impl SupportSet {
    /// Build a support set, rejecting empty, non-finite or duplicated positions.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tongue_core::loads::SupportSet;
    ///
    /// let axles = SupportSet::new(vec![180.0, 228.0]).unwrap();
    /// assert_eq!(axles.count(), 2);
    ///
    /// assert!(SupportSet::new(vec![100.0, 100.0]).is_err());
    /// ```
    pub fn new(positions: Vec<f64>) -> CalcResult<Self> {
        if positions.is_empty() {
            return Err(CalcError::invalid_input(
                "supports",
                "[]",
                "At least one support is required",
            ));
        }

        if let Some((index, value)) = positions.iter().enumerate().find(|(_, p)| !p.is_finite()) {
            return Err(CalcError::invalid_input(
                format!("supports[{}]", index),
                value.to_string(),
                "Support position must be a finite number",
            ));
        }

        // Exact equality: two supports at one position make the system singular.
        let mut sorted = positions.clone();
        sorted.sort_by(f64::total_cmp);
        if let Some(pair) = sorted.windows(2).find(|w| w[0] == w[1]) {
            return Err(CalcError::invalid_input(
                "supports",
                pair[0].to_string(),
                "Two supports share the same position",
            ));
        }

        Ok(Self { positions })
    }

    /// Support positions in input order
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// Number of supports (always at least one)
    pub fn count(&self) -> usize {
        self.positions.len()
    }

    /// Mean of the support positions
    pub fn centroid(&self) -> f64 {
        let sum = self.positions.iter().fold(0.0, |acc, p| acc + p);
        sum / self.positions.len() as f64
    }

    /// Smallest support position
    pub fn min(&self) -> f64 {
        self.positions.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest support position
    pub fn max(&self) -> f64 {
        self.positions.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Copy of this set with every position multiplied by `factor`.
    ///
    /// Fails if the factor collapses distinct positions (zero or non-finite).
    pub fn scaled(&self, factor: f64) -> CalcResult<Self> {
        Self::new(self.positions.iter().map(|p| p * factor).collect())
    }
}

impl TryFrom<Vec<f64>> for SupportSet {
    type Error = CalcError;

    fn try_from(positions: Vec<f64>) -> CalcResult<Self> {
        SupportSet::new(positions)
    }
}

impl From<SupportSet> for Vec<f64> {
    fn from(set: SupportSet) -> Self {
        set.positions
    }
}
