//! Static Equilibrium Solver
//!
//! Solves for the hitch (overhang) reaction and the axle (support) reactions
//! of a rigid, weightless beam loaded by vertical point loads.
//!
//! ## Equations
//!
//! With `W = Σ weight_j` and `M = Σ weight_j * position_j` (moments about
//! the hitch):
//!
//! ```text
//! overhang + Σ R_i        = W     (vertical forces)
//!            Σ R_i * x_i  = M     (moments about the hitch)
//! ```
//!
//! ## Resolution by axle count
//!
//! - **1 axle** - determined: `R = M / x`, `overhang = W - R`.
//! - **2 axles** - the two equations are solved directly for the two axle
//!   reactions (Cramer's rule on `[[1, 1], [x1, x2]]`) and the overhang is
//!   whatever the axles do not carry.
//! - **3+ axles** - statically indeterminate. Only the total axle reaction is
//!   recoverable, by lumping the axles at their centroid `c`:
//!   `ΣR = M / c`, `overhang = W - ΣR`. Individual axle reactions are not
//!   reported.
//!
//! ## Sign Convention
//! - Positive weight: downward
//! - Positive overhang reaction: load pressing down on the hitch (tongue weight)
//! - Negative overhang reaction: the trailer tries to lift the hitch
//!
//! ## Example
//! ```rust
//! use tongue_core::calculations::equilibrium::solve;
//! use tongue_core::calculations::safety_band::{Classification, SafetyBand};
//! use tongue_core::loads::{PointLoad, SupportSet};
//!
//! let loads = vec![PointLoad::new(2000.0, 100.0)];
//! let axles = SupportSet::new(vec![180.0]).unwrap();
//!
//! let result = solve(&loads, &axles, &SafetyBand::default()).unwrap();
//! assert!((result.overhang_reaction - 888.888).abs() < 1e-2);
//! assert_eq!(result.classification, Classification::AboveBand);
//! ```

use serde::{Deserialize, Serialize};

use super::safety_band::{Classification, SafetyBand};
use crate::errors::{CalcError, CalcResult};
use crate::loads::{total_load, total_moment, PointLoad, SupportSet};

// ============================================================================
// Input Types
// ============================================================================

/// How the axle reactions are resolved when more than one axle is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReactionModel {
    /// One axle and two axles are solved exactly; three or more are lumped
    #[default]
    Statics,
    /// Every multi-axle layout is lumped at the axle centroid
    LumpedAxles,
}

/// JSON-friendly input for [`calculate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquilibriumInput {
    /// Point loads (may be empty)
    pub loads: Vec<PointLoad>,

    /// Axle positions measured from the hitch
    pub supports: Vec<f64>,

    /// Acceptable tongue weight fraction
    #[serde(default)]
    pub band: SafetyBand,

    /// Multi-axle resolution strategy
    #[serde(default)]
    pub model: ReactionModel,
}

// ============================================================================
// Result Types
// ============================================================================

/// Axle reactions, tagged by whether they could be individually determined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SupportReactions {
    /// One reaction per axle, in input order
    Determined { reactions: Vec<f64> },

    /// Only the sum of all axle reactions is known
    LumpedOnly {
        /// Sum of the axle reactions
        total_support_reaction: f64,
        /// Axle centroid the sum acts at
        centroid: f64,
    },
}

impl SupportReactions {
    /// Sum of all axle reactions
    pub fn total(&self) -> f64 {
        match self {
            SupportReactions::Determined { reactions } => {
                reactions.iter().fold(0.0, |acc, r| acc + r)
            }
            SupportReactions::LumpedOnly {
                total_support_reaction,
                ..
            } => *total_support_reaction,
        }
    }

    /// Per-axle reactions when they are determinate
    pub fn per_support(&self) -> Option<&[f64]> {
        match self {
            SupportReactions::Determined { reactions } => Some(reactions),
            SupportReactions::LumpedOnly { .. } => None,
        }
    }
}

/// Solved equilibrium of the trailer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquilibriumResult {
    /// Reaction at the hitch (tongue weight), downward-positive
    pub overhang_reaction: f64,

    /// Axle reactions
    pub support_reactions: SupportReactions,

    /// Sum of all load weights
    pub total_load: f64,

    /// Sum of all load moments about the hitch
    pub total_moment: f64,

    /// `overhang_reaction / total_load`; `None` when the total load is zero
    pub overhang_fraction: Option<f64>,

    /// Fraction relative to `band`
    pub classification: Classification,

    /// Band the result was classified against
    pub band: SafetyBand,
}

impl EquilibriumResult {
    /// Per-axle reactions: `Some` for one or two axles, `None` when indeterminate
    pub fn support_reactions(&self) -> Option<&[f64]> {
        self.support_reactions.per_support()
    }

    /// Sum of all axle reactions (always available)
    pub fn total_support_reaction(&self) -> f64 {
        self.support_reactions.total()
    }

    /// Overhang fraction expressed as a percentage
    pub fn overhang_percent(&self) -> Option<f64> {
        self.overhang_fraction.map(|f| f * 100.0)
    }

    /// True when every axle reaction was individually determined
    pub fn is_determinate(&self) -> bool {
        matches!(self.support_reactions, SupportReactions::Determined { .. })
    }

    /// Residual of the vertical force balance (zero for an exact solution)
    pub fn force_residual(&self) -> f64 {
        self.overhang_reaction + self.total_support_reaction() - self.total_load
    }

    /// Residual of the moment balance about the hitch, when axle reactions are known
    pub fn moment_residual(&self, supports: &SupportSet) -> Option<f64> {
        let reactions = self.support_reactions()?;
        let moment = reactions
            .iter()
            .zip(supports.positions())
            .fold(0.0, |acc, (r, x)| acc + r * x);
        Some(moment - self.total_moment)
    }

    /// Copy with forces multiplied by `force_factor` and lengths by `length_factor`.
    ///
    /// The overhang fraction and classification are scale-invariant and kept as is.
    pub fn scaled(&self, force_factor: f64, length_factor: f64) -> Self {
        let support_reactions = match &self.support_reactions {
            SupportReactions::Determined { reactions } => SupportReactions::Determined {
                reactions: reactions.iter().map(|r| r * force_factor).collect(),
            },
            SupportReactions::LumpedOnly {
                total_support_reaction,
                centroid,
            } => SupportReactions::LumpedOnly {
                total_support_reaction: total_support_reaction * force_factor,
                centroid: centroid * length_factor,
            },
        };

        EquilibriumResult {
            overhang_reaction: self.overhang_reaction * force_factor,
            support_reactions,
            total_load: self.total_load * force_factor,
            total_moment: self.total_moment * force_factor * length_factor,
            overhang_fraction: self.overhang_fraction,
            classification: self.classification,
            band: self.band,
        }
    }
}

// ============================================================================
// Solver
// ============================================================================

/// Solve a JSON-style input.
///
/// Builds the [`SupportSet`] (rejecting empty, non-finite or duplicate axle
/// positions) and delegates to [`solve_with_model`].
pub fn calculate(input: &EquilibriumInput) -> CalcResult<EquilibriumResult> {
    let supports = SupportSet::new(input.supports.clone())?;
    solve_with_model(&input.loads, &supports, &input.band, input.model)
}

/// Solve with the default [`ReactionModel::Statics`] resolution.
pub fn solve(
    loads: &[PointLoad],
    supports: &SupportSet,
    band: &SafetyBand,
) -> CalcResult<EquilibriumResult> {
    solve_with_model(loads, supports, band, ReactionModel::Statics)
}

/// Solve for the hitch and axle reactions.
///
/// All validation happens before any reaction is computed:
/// non-finite loads and invalid bands are `InvalidInput`; an axle layout
/// whose moment arm about the hitch is zero is `DegenerateGeometry`.
/// Totals or reactions that overflow to infinity are `InvalidInput`.
pub fn solve_with_model(
    loads: &[PointLoad],
    supports: &SupportSet,
    band: &SafetyBand,
    model: ReactionModel,
) -> CalcResult<EquilibriumResult> {
    validate_loads(loads)?;
    band.validate()?;

    let total_load = total_load(loads);
    let total_moment = total_moment(loads);

    let (overhang_reaction, support_reactions) = match (model, supports.positions()) {
        (_, [x]) => solve_single(*x, total_load, total_moment)?,
        (ReactionModel::Statics, [x1, x2]) => solve_pair(*x1, *x2, total_load, total_moment),
        _ => solve_lumped(supports.centroid(), total_load, total_moment)?,
    };

    check_finite("total_load", total_load)?;
    check_finite("total_moment", total_moment)?;
    check_finite("overhang_reaction", overhang_reaction)?;
    match &support_reactions {
        SupportReactions::Determined { reactions } => {
            for (i, r) in reactions.iter().enumerate() {
                check_finite(&format!("support_reactions[{}]", i), *r)?;
            }
        }
        SupportReactions::LumpedOnly {
            total_support_reaction,
            ..
        } => check_finite("total_support_reaction", *total_support_reaction)?,
    }

    let overhang_fraction = if total_load == 0.0 {
        None
    } else {
        Some(overhang_reaction / total_load)
    };

    Ok(EquilibriumResult {
        overhang_reaction,
        support_reactions,
        total_load,
        total_moment,
        overhang_fraction,
        classification: band.classify(overhang_fraction),
        band: *band,
    })
}

fn validate_loads(loads: &[PointLoad]) -> CalcResult<()> {
    for (i, load) in loads.iter().enumerate() {
        if !load.weight().is_finite() {
            return Err(CalcError::invalid_input(
                format!("loads[{}].weight", i),
                load.weight().to_string(),
                "Load weight must be a finite number",
            ));
        }
        if !load.position().is_finite() {
            return Err(CalcError::invalid_input(
                format!("loads[{}].position", i),
                load.position().to_string(),
                "Load position must be a finite number",
            ));
        }
    }
    Ok(())
}

/// Finite inputs can still overflow once summed or multiplied.
fn check_finite(field: &str, value: f64) -> CalcResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Loads are too large to solve without overflowing",
        ))
    }
}

/// Single axle: moment balance about the hitch fixes the axle reaction.
fn solve_single(x: f64, w: f64, m: f64) -> CalcResult<(f64, SupportReactions)> {
    if x == 0.0 {
        return Err(CalcError::degenerate_geometry(
            "The only axle sits at the hitch, so the moment balance cannot split the load",
        ));
    }
    let reaction = m / x;
    Ok((
        w - reaction,
        SupportReactions::Determined {
            reactions: vec![reaction],
        },
    ))
}

/// Two axles: Cramer's rule on `[[1, 1], [x1, x2]]`. `x1 != x2` is a
/// `SupportSet` invariant.
fn solve_pair(x1: f64, x2: f64, w: f64, m: f64) -> (f64, SupportReactions) {
    let r2 = (m - w * x1) / (x2 - x1);
    let r1 = w - r2;
    (
        w - (r1 + r2),
        SupportReactions::Determined {
            reactions: vec![r1, r2],
        },
    )
}

/// Axles lumped at their centroid; only the total axle reaction is known.
fn solve_lumped(centroid: f64, w: f64, m: f64) -> CalcResult<(f64, SupportReactions)> {
    if centroid == 0.0 {
        return Err(CalcError::degenerate_geometry(
            "The axle centroid sits at the hitch, so the moment balance cannot split the load",
        ));
    }
    let total = m / centroid;
    Ok((
        w - total,
        SupportReactions::LumpedOnly {
            total_support_reaction: total,
            centroid,
        },
    ))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn supports(positions: &[f64]) -> SupportSet {
        SupportSet::new(positions.to_vec()).unwrap()
    }

    #[test]
    fn test_single_axle() {
        let loads = vec![PointLoad::new(2000.0, 100.0)];
        let result = solve(&loads, &supports(&[180.0]), &SafetyBand::default()).unwrap();

        let reactions = result.support_reactions().unwrap();
        assert_relative_eq!(reactions[0], 2000.0 * 100.0 / 180.0, max_relative = 1e-12);
        assert_relative_eq!(result.overhang_reaction, 2000.0 - 2000.0 * 100.0 / 180.0, max_relative = 1e-12);
        assert_relative_eq!(result.overhang_fraction.unwrap(), 0.4444, epsilon = 1e-4);
        assert_eq!(result.classification, Classification::AboveBand);
    }

    #[test]
    fn test_single_axle_at_hitch_is_degenerate() {
        let loads = vec![PointLoad::new(1000.0, 50.0)];
        let err = solve(&loads, &supports(&[0.0]), &SafetyBand::default()).unwrap_err();
        assert_eq!(err.error_code(), "DEGENERATE_GEOMETRY");
    }

    #[test]
    fn test_two_axles_closed_form() {
        let loads = vec![PointLoad::new(11305.0, 139.0)];
        let result = solve(&loads, &supports(&[134.0, 170.0]), &SafetyBand::default()).unwrap();

        let reactions = result.support_reactions().unwrap();
        assert_relative_eq!(reactions[1], 11305.0 * 5.0 / 36.0, max_relative = 1e-12);
        assert_relative_eq!(reactions[0], 11305.0 - 11305.0 * 5.0 / 36.0, max_relative = 1e-12);
        assert!(result.overhang_reaction.abs() < 1e-9);
    }

    #[test]
    fn test_two_axles_unsorted_keep_input_order() {
        let loads = vec![PointLoad::new(11305.0, 139.0)];
        let result = solve(&loads, &supports(&[170.0, 134.0]), &SafetyBand::default()).unwrap();

        let reactions = result.support_reactions().unwrap();
        assert_relative_eq!(reactions[0], 11305.0 * 5.0 / 36.0, max_relative = 1e-9);
        assert_relative_eq!(reactions[1], 11305.0 * 31.0 / 36.0, max_relative = 1e-9);
    }

    #[test]
    fn test_three_axles_lumped() {
        let loads = vec![PointLoad::new(9000.0, 50.0)];
        let result = solve(&loads, &supports(&[100.0, 140.0, 180.0]), &SafetyBand::default()).unwrap();

        assert!(result.support_reactions().is_none());
        assert!(!result.is_determinate());
        assert_relative_eq!(result.total_support_reaction(), 9000.0 * 50.0 / 140.0, max_relative = 1e-12);
        assert_relative_eq!(result.overhang_reaction, 9000.0 - 9000.0 * 50.0 / 140.0, max_relative = 1e-12);
        match result.support_reactions {
            SupportReactions::LumpedOnly { centroid, .. } => assert_eq!(centroid, 140.0),
            other => panic!("expected lumped reactions, got {:?}", other),
        }
    }

    #[test]
    fn test_three_axles_centroid_at_hitch_is_degenerate() {
        let loads = vec![PointLoad::new(9000.0, 50.0)];
        let err = solve(&loads, &supports(&[-40.0, 0.0, 40.0]), &SafetyBand::default()).unwrap_err();
        assert!(matches!(err, CalcError::DegenerateGeometry { .. }));
    }

    #[test]
    fn test_lumped_model_for_two_axles() {
        let loads = vec![PointLoad::new(2000.0, 100.0)];
        let result = solve_with_model(
            &loads,
            &supports(&[180.0, 228.0]),
            &SafetyBand::default(),
            ReactionModel::LumpedAxles,
        )
        .unwrap();

        assert!(result.support_reactions().is_none());
        assert_relative_eq!(result.overhang_reaction, 2000.0 - 200_000.0 / 204.0, max_relative = 1e-12);
    }

    #[test]
    fn test_lumped_model_single_axle_stays_determined() {
        let loads = vec![PointLoad::new(2000.0, 100.0)];
        let result = solve_with_model(
            &loads,
            &supports(&[180.0]),
            &SafetyBand::default(),
            ReactionModel::LumpedAxles,
        )
        .unwrap();
        assert!(result.is_determinate());
    }

    #[test]
    fn test_no_loads_is_trivial_solution() {
        let result = solve(&[], &supports(&[180.0, 228.0]), &SafetyBand::default()).unwrap();
        assert_eq!(result.total_load, 0.0);
        assert_eq!(result.overhang_reaction, 0.0);
        assert_eq!(result.support_reactions().unwrap(), &[0.0, 0.0]);
        assert_eq!(result.overhang_fraction, None);
        assert_eq!(result.classification, Classification::Undefined);
    }

    #[test]
    fn test_non_finite_load_rejected() {
        let loads = vec![PointLoad::new(100.0, 10.0), PointLoad::new(f64::NAN, 20.0)];
        let err = solve(&loads, &supports(&[180.0]), &SafetyBand::default()).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "loads[1].weight"));

        let loads = vec![PointLoad::new(100.0, f64::NEG_INFINITY)];
        let err = solve(&loads, &supports(&[180.0]), &SafetyBand::default()).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "loads[0].position"));
    }

    #[test]
    fn test_overflowing_loads_rejected() {
        let loads = vec![PointLoad::new(1e308, 100.0), PointLoad::new(1e308, 100.0)];
        let err = solve(&loads, &supports(&[180.0]), &SafetyBand::default()).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "total_load"));

        // Weight fits, moment does not
        let loads = vec![PointLoad::new(1e307, 1e3)];
        let err = solve(&loads, &supports(&[100.0, 140.0, 180.0]), &SafetyBand::default()).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "total_moment"));
    }

    #[test]
    fn test_invalid_band_rejected() {
        let band = SafetyBand {
            min_fraction: 0.3,
            max_fraction: 0.1,
        };
        let err = solve(&[], &supports(&[180.0]), &band).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_negative_tongue_weight_is_below_band() {
        // Load behind the axle lifts the hitch
        let loads = vec![PointLoad::new(1000.0, 240.0)];
        let result = solve(&loads, &supports(&[180.0]), &SafetyBand::default()).unwrap();
        assert!(result.overhang_reaction < 0.0);
        assert_eq!(result.classification, Classification::BelowBand);
    }

    #[test]
    fn test_moment_residual() {
        let set = supports(&[134.0, 170.0]);
        let loads = vec![PointLoad::new(11305.0, 139.0), PointLoad::new(500.0, 150.0)];
        let result = solve(&loads, &set, &SafetyBand::default()).unwrap();
        assert!(result.moment_residual(&set).unwrap().abs() < 1e-6);
        assert!(result.force_residual().abs() < 1e-9);
    }

    #[test]
    fn test_calculate_from_json() {
        let json = r#"{
            "loads": [{"weight": 2000.0, "position": 100.0}],
            "supports": [180.0]
        }"#;
        let input: EquilibriumInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.band, SafetyBand::default());
        assert_eq!(input.model, ReactionModel::Statics);

        let result = calculate(&input).unwrap();
        assert_eq!(result.classification, Classification::AboveBand);
    }

    #[test]
    fn test_calculate_rejects_duplicate_supports() {
        let input = EquilibriumInput {
            loads: vec![PointLoad::new(1000.0, 50.0)],
            supports: vec![100.0, 100.0],
            band: SafetyBand::default(),
            model: ReactionModel::Statics,
        };
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_scaled_keeps_fraction() {
        let loads = vec![PointLoad::new(9000.0, 50.0)];
        let result = solve(&loads, &supports(&[100.0, 140.0, 180.0]), &SafetyBand::default()).unwrap();
        let scaled = result.scaled(0.5, 2.0);

        assert_eq!(scaled.overhang_reaction, result.overhang_reaction * 0.5);
        assert_eq!(scaled.total_moment, result.total_moment);
        assert_eq!(scaled.overhang_fraction, result.overhang_fraction);
        match scaled.support_reactions {
            SupportReactions::LumpedOnly { centroid, .. } => assert_eq!(centroid, 280.0),
            other => panic!("expected lumped reactions, got {:?}", other),
        }
    }

    #[test]
    fn test_result_serialization_tags_reactions() {
        let loads = vec![PointLoad::new(9000.0, 50.0)];
        let result = solve(&loads, &supports(&[100.0, 140.0, 180.0]), &SafetyBand::default()).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"type\":\"LumpedOnly\""));

        let roundtrip: EquilibriumResult = serde_json::from_str(&json).unwrap();
        assert!(!roundtrip.is_determinate());
        assert_eq!(roundtrip.classification, result.classification);
    }
}
