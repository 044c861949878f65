//! Load Layout
//!
//! Geometry summary for drawing a trailer load diagram. A renderer needs the
//! beam extent, where to put each marker, and where to anchor the tongue
//! weight callout; it should not have to re-derive any of that from the raw
//! inputs.

use serde::{Deserialize, Serialize};

use crate::loads::{PointLoad, SupportSet};

/// Clearance added past the furthest load or axle when sizing the beam
pub const LAYOUT_MARGIN: f64 = 20.0;

/// A labelled point along the beam
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutMarker {
    /// Distance from the hitch
    pub position: f64,
    /// Load weight (loads) or axle position (axles)
    pub value: f64,
    /// Display label, e.g. "Load 1" or "Axle 2"
    pub label: String,
}

/// Everything a diagram renderer needs to lay out the trailer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadLayout {
    /// Beam drawn from the hitch (0) to here
    pub beam_length: f64,
    /// Load markers, in input order
    pub loads: Vec<LayoutMarker>,
    /// Axle markers, in input order
    pub axles: Vec<LayoutMarker>,
    /// Horizontal anchor for the tongue weight callout (half way to the first axle)
    pub annotation_x: f64,
}

impl LoadLayout {
    /// Build a layout from solver inputs.
    ///
    /// Loads without a label get "Load N"; axles are always "Axle N"
    /// (1-based, input order).
    pub fn from_inputs(loads: &[PointLoad], supports: &SupportSet) -> Self {
        let furthest_load = loads
            .iter()
            .map(PointLoad::position)
            .fold(f64::NEG_INFINITY, f64::max);
        let beam_length = (supports.max() + LAYOUT_MARGIN).max(furthest_load + LAYOUT_MARGIN);

        let loads = loads
            .iter()
            .enumerate()
            .map(|(i, load)| LayoutMarker {
                position: load.position(),
                value: load.weight(),
                label: if load.label().is_empty() {
                    format!("Load {}", i + 1)
                } else {
                    load.label().to_string()
                },
            })
            .collect();

        let axles = supports
            .positions()
            .iter()
            .enumerate()
            .map(|(i, x)| LayoutMarker {
                position: *x,
                value: *x,
                label: format!("Axle {}", i + 1),
            })
            .collect();

        LoadLayout {
            beam_length,
            loads,
            axles,
            annotation_x: supports.min() / 2.0,
        }
    }
}
