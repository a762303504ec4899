// Text rendering of a combination and of the correction curve.

use std::fmt;

use spl_core::{Combination, CurveSample};

use crate::config::DEFAULT_DECIMALS;
use crate::input::{parse_levels, InputError};

/// A computed combination ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub combination: Combination,
    /// Tokens dropped from the input line.
    pub ignored: Vec<String>,
    decimals: usize,
}

impl Report {
    pub fn new(combination: Combination, ignored: Vec<String>) -> Self {
        Self {
            combination,
            ignored,
            decimals: DEFAULT_DECIMALS,
        }
    }

    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    /// One line per merge, numbered from 1.
    pub fn step_lines(&self) -> Vec<String> {
        let p = self.decimals;
        self.combination
            .trace
            .iter()
            .enumerate()
            .map(|(i, step)| {
                format!(
                    "Step {}: ΔL = {:.p$} dB, L+ = {:.p$} dB → Combined SPL = {:.p$} dB",
                    i + 1,
                    step.delta_l,
                    step.l_plus,
                    step.combined,
                    p = p
                )
            })
            .collect()
    }

    pub fn final_line(&self) -> String {
        format!(
            "Final Combined SPL: {:.p$} dB",
            self.combination.combined,
            p = self.decimals
        )
    }

    /// Note listing dropped tokens, if any were dropped.
    pub fn ignored_line(&self) -> Option<String> {
        if self.ignored.is_empty() {
            return None;
        }
        Some(format!("Ignored non-numeric input: {}", self.ignored.join(", ")))
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Calculation Steps")?;
        for line in self.step_lines() {
            writeln!(f, "{line}")?;
        }
        if let Some(note) = self.ignored_line() {
            writeln!(f, "{note}")?;
        }
        write!(f, "{}", self.final_line())
    }
}

/// What the user sees for one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Computed(Report),
    /// Too few readings: corrective message, nothing computed.
    Warning(String),
    /// Unparseable input: generic error, nothing computed.
    Error(String),
}

/// Parse and validate `text`, then combine the readings.
pub fn evaluate(text: &str) -> Outcome {
    evaluate_with(text, DEFAULT_DECIMALS)
}

/// [`evaluate`] with an explicit number of decimal places.
pub fn evaluate_with(text: &str, decimals: usize) -> Outcome {
    let parsed = match parse_levels(text) {
        Ok(parsed) => parsed,
        Err(err @ InputError::TooFew { .. }) => return Outcome::Warning(err.to_string()),
        Err(err @ InputError::Invalid { .. }) => return Outcome::Error(err.to_string()),
    };

    match spl_core::combine_all(&parsed.levels) {
        Ok(combination) => {
            Outcome::Computed(Report::new(combination, parsed.ignored).with_decimals(decimals))
        }
        Err(err) => Outcome::Warning(err.to_string()),
    }
}

/// Correction curve as a two-column CSV table with a header row.
pub fn curve_table(samples: &[CurveSample]) -> String {
    let mut out = String::from("delta_l_db,l_plus_db\n");
    for sample in samples {
        out.push_str(&format!("{:.6},{:.6}\n", sample.delta_l, sample.l_plus));
    }
    out
}
