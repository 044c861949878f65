//! # Trailer Configuration
//!
//! [`TrailerConfig`] is the request object a front end builds from user
//! input: the loads, the axle positions, the unit system they were typed in,
//! and the acceptable tongue weight band. It serializes to human-readable
//! JSON so a configuration can be saved and re-run later.
//!
//! ## Structure
//!
//! ```text
//! TrailerConfig
//! ├── meta: TrailerMetadata (schema version, name, timestamps)
//! ├── units: UnitSystem
//! ├── loads: Vec<PointLoad>
//! ├── axles: Vec<f64>
//! ├── band: SafetyBand
//! └── model: ReactionModel
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tongue_core::loads::PointLoad;
//! use tongue_core::trailer::TrailerConfig;
//!
//! let config = TrailerConfig::new("Utility trailer")
//!     .with_load(PointLoad::new(2000.0, 100.0))
//!     .with_axle(180.0);
//!
//! let result = config.solve().unwrap();
//! assert!((result.overhang_reaction - 888.89).abs() < 0.01);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculations::equilibrium::{solve_with_model, EquilibriumResult, ReactionModel};
use crate::calculations::safety_band::SafetyBand;
use crate::errors::CalcResult;
use crate::loads::{PointLoad, SupportSet};
use crate::units::UnitSystem;

/// Current schema version for saved configuration files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Weight of the load in the default layout (lb)
pub const DEFAULT_LOAD_WEIGHT: f64 = 2000.0;

/// Position of the load in the default layout (in)
pub const DEFAULT_LOAD_POSITION: f64 = 100.0;

/// Position of the first axle in the default layout (in)
pub const DEFAULT_FIRST_AXLE: f64 = 180.0;

/// Spacing between axles in the default layout (in)
pub const DEFAULT_AXLE_SPACING: f64 = 48.0;

/// A complete trailer description ready to be solved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrailerConfig {
    /// Configuration metadata
    pub meta: TrailerMetadata,

    /// Unit system the loads and axles are expressed in
    #[serde(default)]
    pub units: UnitSystem,

    /// Point loads on the trailer
    pub loads: Vec<PointLoad>,

    /// Axle positions measured from the hitch
    ///
    /// Kept as raw numbers so a file with a bad axle layout still loads and
    /// the problem is reported by the solver.
    pub axles: Vec<f64>,

    /// Acceptable tongue weight fraction
    #[serde(default)]
    pub band: SafetyBand,

    /// Multi-axle resolution strategy
    #[serde(default)]
    pub model: ReactionModel,
}

impl TrailerConfig {
    /// Create an empty imperial configuration with the default band.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        TrailerConfig {
            meta: TrailerMetadata {
                version: SCHEMA_VERSION.to_string(),
                name: name.into(),
                created: now,
                modified: now,
            },
            units: UnitSystem::Imperial,
            loads: Vec::new(),
            axles: Vec::new(),
            band: SafetyBand::default(),
            model: ReactionModel::Statics,
        }
    }

    /// The classic starting form: one 2000 lb load at 100 in, and
    /// `axle_count` axles starting at 180 in and spaced 48 in apart.
    pub fn default_layout(axle_count: usize) -> Self {
        let mut config = TrailerConfig::new("Default trailer")
            .with_load(PointLoad::new(DEFAULT_LOAD_WEIGHT, DEFAULT_LOAD_POSITION));
        for i in 0..axle_count {
            config.axles.push(default_axle_position(i));
        }
        config
    }

    /// Add a load and return self (builder pattern)
    pub fn with_load(mut self, load: PointLoad) -> Self {
        self.loads.push(load);
        self.touch();
        self
    }

    /// Add an axle and return self (builder pattern)
    pub fn with_axle(mut self, position: f64) -> Self {
        self.axles.push(position);
        self.touch();
        self
    }

    /// Set the unit system and return self (builder pattern)
    pub fn with_units(mut self, units: UnitSystem) -> Self {
        self.units = units;
        self.touch();
        self
    }

    /// Set the safety band and return self (builder pattern)
    pub fn with_band(mut self, band: SafetyBand) -> Self {
        self.band = band;
        self.touch();
        self
    }

    /// Set the reaction model and return self (builder pattern)
    pub fn with_model(mut self, model: ReactionModel) -> Self {
        self.model = model;
        self.touch();
        self
    }

    /// Update the modified timestamp. Every builder method calls this.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Solve the configuration.
    ///
    /// Loads and axles are scaled into pounds and inches, solved, and the
    /// result is scaled back into this configuration's unit system.
    pub fn solve(&self) -> CalcResult<EquilibriumResult> {
        let force_factor = self.units.force_to_canonical();
        let length_factor = self.units.length_to_canonical();

        let loads: Vec<PointLoad> = self
            .loads
            .iter()
            .map(|load| load.scaled(force_factor, length_factor))
            .collect();
        let axles = SupportSet::new(self.axles.iter().map(|x| x * length_factor).collect())?;

        let result = solve_with_model(&loads, &axles, &self.band, self.model)?;
        Ok(result.scaled(1.0 / force_factor, 1.0 / length_factor))
    }
}

impl Default for TrailerConfig {
    fn default() -> Self {
        TrailerConfig::new("")
    }
}

/// Position of the `index`-th axle in the default layout
pub fn default_axle_position(index: usize) -> f64 {
    DEFAULT_FIRST_AXLE + index as f64 * DEFAULT_AXLE_SPACING
}

/// Configuration metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrailerMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// User-facing name of the trailer
    pub name: String,

    /// When the configuration was created
    pub created: DateTime<Utc>,

    /// When the configuration was last modified
    pub modified: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::safety_band::Classification;
    use crate::units::{Centimeters, Inches, Kilograms, Pounds};
    use approx::assert_relative_eq;

    #[test]
    fn test_config_creation() {
        let config = TrailerConfig::new("Boat trailer");
        assert_eq!(config.meta.name, "Boat trailer");
        assert_eq!(config.meta.version, SCHEMA_VERSION);
        assert_eq!(config.units, UnitSystem::Imperial);
        assert_eq!(config.band, SafetyBand::default());
    }

    #[test]
    fn test_default_layout() {
        let config = TrailerConfig::default_layout(3);
        assert_eq!(config.axles, vec![180.0, 228.0, 276.0]);
        assert_eq!(config.loads.len(), 1);
        assert_eq!(config.loads[0].weight(), 2000.0);
        assert_eq!(config.loads[0].position(), 100.0);
    }

    #[test]
    fn test_solve_imperial() {
        let config = TrailerConfig::default_layout(1);
        let result = config.solve().unwrap();
        assert_relative_eq!(result.overhang_reaction, 2000.0 - 200_000.0 / 180.0, max_relative = 1e-12);
        assert_eq!(result.classification, Classification::AboveBand);
    }

    #[test]
    fn test_metric_matches_imperial() {
        let imperial = TrailerConfig::new("Imperial")
            .with_load(PointLoad::new(2000.0, 100.0))
            .with_load(PointLoad::new(350.0, 60.0))
            .with_axle(180.0);

        let kg = |lb: f64| Kilograms::from(Pounds(lb)).0;
        let cm = |inches: f64| Centimeters::from(Inches(inches)).0;
        let metric = TrailerConfig::new("Metric")
            .with_units(UnitSystem::Metric)
            .with_load(PointLoad::new(kg(2000.0), cm(100.0)))
            .with_load(PointLoad::new(kg(350.0), cm(60.0)))
            .with_axle(cm(180.0));

        let a = imperial.solve().unwrap();
        let b = metric.solve().unwrap();
        assert_relative_eq!(a.overhang_fraction.unwrap(), b.overhang_fraction.unwrap(), max_relative = 1e-9);
        assert_relative_eq!(b.overhang_reaction, kg(a.overhang_reaction), max_relative = 1e-9);
        assert_eq!(a.classification, b.classification);
    }

    #[test]
    fn test_with_band_classifies_against_custom_band() {
        let config = TrailerConfig::default_layout(1).with_band(SafetyBand::new(0.40, 0.50).unwrap());
        assert!(config.meta.modified >= config.meta.created);

        let result = config.solve().unwrap();
        assert_eq!(result.band, config.band);
        assert_eq!(result.classification, Classification::WithinBand);
    }

    #[test]
    fn test_touch_advances_modified() {
        let mut config = TrailerConfig::new("Touched");
        let before = config.meta.modified;
        config.touch();
        assert!(config.meta.modified >= before);
        assert_eq!(config.meta.created, before);
    }

    #[test]
    fn test_solve_reports_duplicate_axles() {
        let config = TrailerConfig::default_layout(0).with_axle(180.0).with_axle(180.0);
        assert_eq!(config.solve().unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_solve_without_axles_fails() {
        let config = TrailerConfig::new("Empty");
        assert!(config.solve().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = TrailerConfig::default_layout(2).with_model(ReactionModel::LumpedAxles);
        let json = serde_json::to_string_pretty(&config).unwrap();
        assert!(json.contains("Default trailer"));
        assert!(json.contains("LumpedAxles"));

        let roundtrip: TrailerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.axles, vec![180.0, 228.0]);
        assert_eq!(roundtrip.model, ReactionModel::LumpedAxles);
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let json = r#"{
            "meta": {
                "version": "0.1.0",
                "name": "Minimal",
                "created": "2025-01-01T00:00:00Z",
                "modified": "2025-01-01T00:00:00Z"
            },
            "loads": [],
            "axles": [180.0]
        }"#;
        let config: TrailerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.units, UnitSystem::Imperial);
        assert_eq!(config.band, SafetyBand::default());
        assert_eq!(config.model, ReactionModel::Statics);
    }
}
