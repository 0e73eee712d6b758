//! Decimal rendering for the calculator display
//!
//! Output is locale-free: `.` separates the fraction and `,` groups the
//! integer digits in threes.

/// Default number of fractional digits shown in Decimal mode
pub const DEFAULT_PRECISION: usize = 6;

/// Largest precision accepted from configuration
pub const MAX_PRECISION: usize = 15;

/// How finite decimal values are turned into display text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySettings {
    /// Maximum fractional digits; trailing zeros are trimmed
    pub precision: usize,
    /// Insert `,` between groups of three integer digits
    pub grouping: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            grouping: true,
        }
    }
}

impl DisplaySettings {
    pub fn new(precision: usize, grouping: bool) -> Self {
        Self {
            precision: precision.min(MAX_PRECISION),
            grouping,
        }
    }

    /// Formats a finite value, rounding to `precision` fractional digits
    ///
    /// Negative zero, including values that round to zero, renders as `0`.
    pub fn format(&self, value: f64) -> String {
        let fixed = format!("{:.*}", self.precision, value);
        let trimmed = if fixed.contains('.') {
            fixed.trim_end_matches('0').trim_end_matches('.')
        } else {
            fixed.as_str()
        };

        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (unsigned, None),
        };

        let is_zero = frac_part.is_none() && int_part.bytes().all(|b| b == b'0');
        let mut result = String::with_capacity(trimmed.len() + int_part.len() / 3);
        if negative && !is_zero {
            result.push('-');
        }
        if self.grouping {
            result.push_str(&group_thousands(int_part));
        } else {
            result.push_str(int_part);
        }
        if let Some(frac) = frac_part {
            result.push('.');
            result.push_str(frac);
        }
        result
    }
}

/// Inserts `,` every three digits counting from the right
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
