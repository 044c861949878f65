//! # tongue_core - Trailer Tongue Weight Engine
//!
//! `tongue_core` computes the hitch (tongue) reaction and the axle reactions
//! of a trailer from its point loads and axle positions by static
//! equilibrium, and classifies the tongue weight against an acceptable band.
//! All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Honest Results**: Axle reactions that statics cannot determine are
//!   reported as unknown, never guessed
//!
//! ## Quick Start
//!
//! ```rust
//! use tongue_core::{solve, PointLoad, SafetyBand, SupportSet};
//!
//! let loads = vec![PointLoad::new(11305.0, 139.0)];
//! let axles = SupportSet::new(vec![134.0, 170.0]).unwrap();
//!
//! let result = solve(&loads, &axles, &SafetyBand::default()).unwrap();
//! let reactions = result.support_reactions().unwrap();
//! assert!((reactions[1] - 1570.14).abs() < 0.01);
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Equilibrium solver and safety band classification
//! - [`loads`] - Point loads and axle sets
//! - [`trailer`] - Saved trailer configurations with unit handling
//! - [`layout`] - Diagram geometry for renderers
//! - [`units`] - Type-safe unit wrappers and unit systems
//! - [`errors`] - Structured error types
//! - [`file_io`] - Atomic configuration saves and loads

pub mod calculations;
pub mod errors;
pub mod file_io;
pub mod layout;
pub mod loads;
pub mod trailer;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    calculate, solve, solve_with_model, Classification, EquilibriumInput, EquilibriumResult,
    ReactionModel, SafetyBand, SupportReactions,
};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_config, save_config};
pub use layout::LoadLayout;
pub use loads::{PointLoad, SupportSet};
pub use trailer::TrailerConfig;
