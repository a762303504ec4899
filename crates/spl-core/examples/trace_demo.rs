//! Walk through a three-source combination and print every merge.
//!
//! Run with:
//!   cargo run -p spl-core --example trace_demo

use spl_core::constants::{DEFAULT_CURVE_MAX_DELTA_DB, DEFAULT_CURVE_SAMPLES};
use spl_core::CombineError;

fn main() -> Result<(), CombineError> {
    println!("=== SPL Combination Trace ===");

    // 1. Fold three sources into one.
    let levels = [90.0, 85.0, 88.0];
    println!("Levels: {levels:?} dB");

    let result = spl_core::combine_all(&levels)?;
    for (i, step) in result.trace.iter().enumerate() {
        println!(
            "  {}: {:.2} + {:.2} -> ΔL={:.2}, L+={:.2}, combined={:.2}",
            i + 1,
            step.louder,
            step.quieter,
            step.delta_l,
            step.l_plus,
            step.combined
        );
    }
    println!("Combined: {:.2} dB", result.combined);

    // 2. A few points of the correction curve.
    let curve = spl_core::sample_curve(DEFAULT_CURVE_MAX_DELTA_DB, DEFAULT_CURVE_SAMPLES);
    for sample in curve.iter().step_by(11) {
        println!("  ΔL={:5.2} dB  L+={:.3} dB", sample.delta_l, sample.l_plus);
    }

    Ok(())
}
