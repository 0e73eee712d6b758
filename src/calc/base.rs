use serde::Deserialize;
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use super::error::CalcError;

/// Number system used to parse and render the accumulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum NumberBase {
    #[default]
    #[serde(rename = "dec", alias = "decimal")]
    Decimal,
    #[serde(rename = "bin", alias = "binary")]
    Binary,
    #[serde(rename = "hex", alias = "hexadecimal")]
    Hexadecimal,
}

impl NumberBase {
    pub fn radix(self) -> u32 {
        match self {
            NumberBase::Decimal => 10,
            NumberBase::Binary => 2,
            NumberBase::Hexadecimal => 16,
        }
    }

    /// Short label shown next to the display
    pub fn label(self) -> &'static str {
        match self {
            NumberBase::Decimal => "DEC",
            NumberBase::Binary => "BIN",
            NumberBase::Hexadecimal => "HEX",
        }
    }

    /// Integer bases cannot hold a fractional accumulator
    pub fn is_integral(self) -> bool {
        self != NumberBase::Decimal
    }

    /// Whether `symbol` may be typed while this base is active
    ///
    /// Hex digits are expected in uppercase; `Button` parsing normalizes them.
    pub fn accepts(self, symbol: char) -> bool {
        match self {
            NumberBase::Decimal => symbol.is_ascii_digit() || symbol == '.',
            NumberBase::Binary => matches!(symbol, '0' | '1'),
            NumberBase::Hexadecimal => matches!(symbol, '0'..='9' | 'A'..='F'),
        }
    }

    /// Parses `text` as a signed integer under this radix
    ///
    /// Digits that overflow `i64` give `OutOfRange` with an approximate value.
    pub fn parse_integer(self, text: &str) -> Result<i64, CalcError> {
        i64::from_str_radix(text, self.radix()).map_err(|err| match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                CalcError::OutOfRange(self.approximate(text))
            }
            _ => CalcError::ParseFailure {
                text: text.to_string(),
                radix: self.radix(),
            },
        })
    }

    fn approximate(self, text: &str) -> f64 {
        let (sign, digits) = match text.strip_prefix('-') {
            Some(rest) => (-1.0, rest),
            None => (1.0, text),
        };
        let radix = self.radix();
        let magnitude = digits
            .chars()
            .filter_map(|c| c.to_digit(radix))
            .fold(0.0, |acc, digit| acc * f64::from(radix) + f64::from(digit));
        sign * magnitude
    }

    /// Renders an integer in this radix, uppercase for hex
    pub fn render_integer(self, value: i64) -> String {
        let magnitude = value.unsigned_abs();
        let digits = match self {
            NumberBase::Decimal => magnitude.to_string(),
            NumberBase::Binary => format!("{:b}", magnitude),
            NumberBase::Hexadecimal => format!("{:X}", magnitude),
        };
        if value < 0 {
            format!("-{}", digits)
        } else {
            digits
        }
    }
}

impl fmt::Display for NumberBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for NumberBase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dec" | "decimal" | "10" => Ok(NumberBase::Decimal),
            "bin" | "binary" | "2" => Ok(NumberBase::Binary),
            "hex" | "hexadecimal" | "16" => Ok(NumberBase::Hexadecimal),
            _ => Err(format!(
                "Invalid base '{}'. Valid options are: dec, bin, hex",
                s
            )),
        }
    }
}
