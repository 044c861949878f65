//! Plain-text summary of a solved trailer.

use std::fmt::{self, Write};

use tongue_core::layout::LoadLayout;
use tongue_core::units::round_to;
use tongue_core::{EquilibriumResult, SupportReactions, TrailerConfig};

const RULE: &str = "═══════════════════════════════════════";

/// Render the results the way the terminal prints them.
pub fn render_summary(config: &TrailerConfig, result: &EquilibriumResult, layout: &LoadLayout) -> String {
    let mut output = String::new();
    // Writing into a String never fails.
    let _ = write_summary(&mut output, config, result, layout);
    output
}

fn write_summary(
    out: &mut String,
    config: &TrailerConfig,
    result: &EquilibriumResult,
    layout: &LoadLayout,
) -> fmt::Result {
    let lb = config.units.force_label();
    let len = config.units.length_label();

    writeln!(out, "{}", RULE)?;
    writeln!(out, "  TONGUE WEIGHT RESULTS")?;
    writeln!(out, "{}", RULE)?;
    writeln!(out)?;

    writeln!(out, "Trailer layout ({} {} long):", round_to(layout.beam_length, 2), len)?;
    for marker in &layout.loads {
        writeln!(out, "  {:<12} {:>10} {} at {} {}", marker.label, round_to(marker.value, 2), lb, round_to(marker.position, 2), len)?;
    }
    for marker in &layout.axles {
        writeln!(out, "  {:<12} at {} {}", marker.label, round_to(marker.position, 2), len)?;
    }
    writeln!(out)?;

    writeln!(out, "Total trailer weight:  {} {}", round_to(result.total_load, 2), lb)?;
    writeln!(out, "Tongue weight:         {} {}", round_to(result.overhang_reaction, 2), lb)?;
    match result.overhang_percent() {
        Some(pct) => writeln!(out, "Tongue % of total:     {}%", round_to(pct, 2))?,
        None => writeln!(out, "Tongue % of total:     undefined (no load)")?,
    }
    writeln!(out)?;

    writeln!(out, "Axle reactions:")?;
    match &result.support_reactions {
        SupportReactions::Determined { reactions } => {
            for (marker, reaction) in layout.axles.iter().zip(reactions) {
                writeln!(out, "  {:<12} {} {}", marker.label, round_to(*reaction, 2), lb)?;
            }
        }
        SupportReactions::LumpedOnly {
            total_support_reaction,
            centroid,
        } => {
            writeln!(
                out,
                "  {} axles share {} {} acting at {} {}",
                layout.axles.len(),
                round_to(*total_support_reaction, 2),
                lb,
                round_to(*centroid, 2),
                len
            )?;
            writeln!(out, "  (individual axle loads are statically indeterminate)")?;
        }
    }
    writeln!(out)?;

    writeln!(out, "{}", RULE)?;
    writeln!(
        out,
        "  {} ({:.0}-{:.0}%): {}",
        result.classification.display_name(),
        result.band.min_fraction * 100.0,
        result.band.max_fraction * 100.0,
        result.classification.advice()
    )?;
    writeln!(out, "{}", RULE)?;
    Ok(())
}
