//! # Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`equilibrium`] - Hitch and axle reactions by static equilibrium
//! - [`safety_band`] - Classification of the tongue weight fraction

pub mod equilibrium;
pub mod safety_band;

// Re-export commonly used types
pub use equilibrium::{
    calculate, solve, solve_with_model, EquilibriumInput, EquilibriumResult, ReactionModel,
    SupportReactions,
};
pub use safety_band::{Classification, SafetyBand};
