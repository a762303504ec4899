use tracing::debug;

use crate::correction::correction_term;
use crate::{Combination, CombinationStep, CombineError};

/// Merge two levels (dB) into one by energy addition.
///
/// The quieter level only enters through the correction term, so the result
/// never drops below the louder operand and the argument order does not matter.
pub fn combine(level_a: f64, level_b: f64) -> CombinationStep {
    let louder = level_a.max(level_b);
    let quieter = level_a.min(level_b);
    let delta_l = louder - quieter;
    let l_plus = correction_term(delta_l);

    CombinationStep {
        louder,
        quieter,
        delta_l,
        l_plus,
        combined: louder + l_plus,
    }
}

/// Fold `levels` left to right into a single combined level.
///
/// The accumulator starts at the first level; every following level is merged
/// into it with [`combine`] and the step is appended to the trace, so the
/// trace always has `levels.len() - 1` entries in input order.
///
/// Fewer than two levels is refused rather than passed through unchanged.
pub fn combine_all(levels: &[f64]) -> Result<Combination, CombineError> {
    let (&first, rest) = match levels.split_first() {
        Some(split) if !split.1.is_empty() => split,
        _ => {
            return Err(CombineError::TooFewLevels {
                count: levels.len(),
            })
        }
    };

    let mut trace = Vec::with_capacity(rest.len());
    let mut combined = first;
    for &level in rest {
        let step = combine(combined, level);
        debug!(
            accumulated = combined,
            next = level,
            delta_l = step.delta_l,
            l_plus = step.l_plus,
            combined = step.combined,
            "combined level"
        );
        combined = step.combined;
        trace.push(step);
    }

    Ok(Combination { combined, trace })
}
