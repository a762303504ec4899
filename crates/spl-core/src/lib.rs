pub mod combine;
pub mod constants;
pub mod correction;
pub mod curve;

pub use combine::{combine, combine_all};
pub use correction::correction_term;
pub use curve::sample_curve;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Shared interface types, consumed by the presentation layer
// ---------------------------------------------------------------------------

/// One pairwise merge of two levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CombinationStep {
    /// Louder operand in dB.
    pub louder: f64,
    /// Quieter operand in dB.
    pub quieter: f64,
    /// Level difference `louder - quieter` in dB, never negative.
    pub delta_l: f64,
    /// Correction term added to the louder operand, in dB.
    pub l_plus: f64,
    /// Combined level `louder + l_plus` in dB.
    pub combined: f64,
}

impl CombinationStep {
    /// The `(combined, delta_l, l_plus)` triple of this step.
    pub fn triple(&self) -> (f64, f64, f64) {
        (self.combined, self.delta_l, self.l_plus)
    }
}

/// Result of folding a list of levels into one: the final level plus the
/// ordered trace of merges that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Combination {
    /// Combined SPL of all sources in dB.
    pub combined: f64,
    /// One step per merge, in left-to-right input order.
    pub trace: Vec<CombinationStep>,
}

/// One point of the correction-term curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurveSample {
    /// Level difference in dB.
    pub delta_l: f64,
    /// Correction term in dB at `delta_l`.
    pub l_plus: f64,
}

/// Errors from folding levels.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CombineError {
    /// Folding needs at least two levels.
    #[error("at least two SPL values are required, got {count}")]
    TooFewLevels { count: usize },
}
