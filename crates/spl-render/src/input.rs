// Free-form text -> list of SPL readings.

use tracing::debug;

/// Readings recovered from a comma-separated input line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLevels {
    /// Usable levels in input order.
    pub levels: Vec<f64>,
    /// Tokens that were not plain decimal numbers and were left out.
    pub ignored: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    /// Fewer than two usable readings; the combination is not attempted.
    #[error("Please enter at least two SPL values.")]
    TooFew { count: usize },
    /// Nothing usable in the text, or a numeric-looking token did not parse.
    #[error("Invalid input. Please enter numeric SPL values separated by commas.")]
    Invalid { token: Option<String> },
}

/// A token counts as a reading when, with at most one `.` removed, it is a
/// non-empty run of numeric characters. Signs and exponents are not accepted.
///
/// Any Unicode numeric character passes here (`²`, `٣`), so tokens that look
/// like numbers but are not `f64` literals fail later as invalid input instead
/// of being dropped.
fn is_plain_decimal(token: &str) -> bool {
    let digits = token.replacen('.', "", 1);
    !digits.is_empty() && digits.chars().all(char::is_numeric)
}

/// Split `text` on commas and keep the tokens that look like plain decimals.
///
/// Anything else is dropped rather than rejected; the dropped tokens come back
/// in [`ParsedLevels::ignored`]. At least two readings must survive.
pub fn parse_levels(text: &str) -> Result<ParsedLevels, InputError> {
    let mut levels = Vec::new();
    let mut ignored = Vec::new();

    for token in text.split(',').map(str::trim) {
        if !is_plain_decimal(token) {
            if !token.is_empty() {
                debug!(token, "ignoring non-numeric token");
                ignored.push(token.to_owned());
            }
            continue;
        }
        let level = token.parse::<f64>().map_err(|_| InputError::Invalid {
            token: Some(token.to_owned()),
        })?;
        levels.push(level);
    }

    match levels.len() {
        0 => Err(InputError::Invalid { token: None }),
        1 => Err(InputError::TooFew { count: 1 }),
        _ => Ok(ParsedLevels { levels, ignored }),
    }
}
