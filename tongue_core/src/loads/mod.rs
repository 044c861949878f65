//! Loads and supports along the trailer beam
//!
//! The trailer is idealized as a rigid, weightless beam running back from the
//! hitch. Everything it carries is a vertical [`PointLoad`]; everything that
//! holds it up (other than the hitch) is an axle in a [`SupportSet`].
//!
//! # Example
//!
//! ```
//! use tongue_core::loads::{PointLoad, SupportSet, total_load, total_moment};
//!
//! let loads = vec![
//!     PointLoad::new(2000.0, 100.0).with_label("Cargo"),
//!     PointLoad::new(300.0, 40.0).with_label("Toolbox"),
//! ];
//! let axles = SupportSet::new(vec![180.0]).unwrap();
//!
//! assert_eq!(total_load(&loads), 2300.0);
//! assert_eq!(total_moment(&loads), 212_000.0);
//! assert_eq!(axles.centroid(), 180.0);
//! ```

pub mod point;
pub mod supports;

pub use point::{total_load, total_moment, PointLoad};
pub use supports::SupportSet;
