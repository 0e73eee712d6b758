use std::f64::consts;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::error::CalcError;

/// Two-operand operators, split into two priority tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOp::Add => left + right,
            BinaryOp::Subtract => left - right,
            BinaryOp::Multiply => left * right,
            BinaryOp::Divide => left / right,
        }
    }

    /// Exact arithmetic for the integer store; division truncates toward zero
    pub fn apply_integer(self, left: i64, right: i64) -> Result<i64, CalcError> {
        let result = match self {
            BinaryOp::Add => left.checked_add(right),
            BinaryOp::Subtract => left.checked_sub(right),
            BinaryOp::Multiply => left.checked_mul(right),
            BinaryOp::Divide if right == 0 => return Err(CalcError::NonFinite),
            BinaryOp::Divide => left.checked_div(right),
        };
        result.ok_or_else(|| CalcError::OutOfRange(self.apply(left as f64, right as f64)))
    }

    /// Multiply and divide fold before add and subtract
    pub fn is_high_priority(self) -> bool {
        matches!(self, BinaryOp::Multiply | BinaryOp::Divide)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "×",
            BinaryOp::Divide => "÷",
        }
    }
}

/// Functions applied to the accumulator in place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Negate,
    Percent,
    Sin,
    Cos,
}

impl UnaryOp {
    /// Trigonometric functions take radians
    pub fn apply(self, value: f64) -> f64 {
        match self {
            UnaryOp::Negate => -value,
            UnaryOp::Percent => value / 100.0,
            UnaryOp::Sin => value.sin(),
            UnaryOp::Cos => value.cos(),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Negate => "+/-",
            UnaryOp::Percent => "%",
            UnaryOp::Sin => "sin",
            UnaryOp::Cos => "cos",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    Pi,
    E,
}

impl Constant {
    pub fn value(self) -> f64 {
        match self {
            Constant::Pi => consts::PI,
            Constant::E => consts::E,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Constant::Pi => "π",
            Constant::E => "e",
        }
    }
}

/// A single key on the calculator keypad
///
/// `Digit` carries `0`-`9` or `A`-`F`; build it with [`Button::digit`].
/// A lowercase letter is uppercased when pressed. Whether the digit is
/// accepted depends on the active `NumberBase`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Digit(char),
    Decimal,
    Binary(BinaryOp),
    Equals,
    Clear,
    Unary(UnaryOp),
    Constant(Constant),
}

impl Button {
    /// Creates a digit button, normalizing hex letters to uppercase
    pub fn digit(symbol: char) -> Option<Button> {
        let symbol = symbol.to_ascii_uppercase();
        symbol
            .is_ascii_hexdigit()
            .then_some(Button::Digit(symbol))
    }

    /// Same button with a hex letter digit in uppercase
    pub fn normalized(self) -> Button {
        match self {
            Button::Digit(c) => Button::Digit(c.to_ascii_uppercase()),
            other => other,
        }
    }

    /// Digits and the decimal point extend the input buffer
    pub fn is_digit(&self) -> bool {
        matches!(self, Button::Digit(_) | Button::Decimal)
    }

    /// The character this button types, if it is a digit button
    pub fn symbol_char(&self) -> Option<char> {
        match self {
            Button::Digit(c) => Some(*c),
            Button::Decimal => Some('.'),
            _ => None,
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Button::Digit(c) => write!(f, "{}", c),
            Button::Decimal => f.write_str("."),
            Button::Binary(op) => f.write_str(op.symbol()),
            Button::Equals => f.write_str("="),
            Button::Clear => f.write_str("AC"),
            Button::Unary(op) => f.write_str(op.symbol()),
            Button::Constant(c) => f.write_str(c.symbol()),
        }
    }
}

/// Token that does not name any calculator button
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Invalid button '{0}'. Valid buttons: 0-9, A-F, ., +, -, x, /, =, AC, +/-, %, sin, cos, pi, e"
)]
pub struct ButtonParseError(pub String);

impl FromStr for Button {
    type Err = ButtonParseError;

    /// Single letters are case-sensitive only for `e` (Euler's number) versus
    /// `E` (hex digit); every other letter token is case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let button = match token {
            "e" => Button::Constant(Constant::E),
            "." => Button::Decimal,
            "+" => Button::Binary(BinaryOp::Add),
            "-" | "−" => Button::Binary(BinaryOp::Subtract),
            "x" | "X" | "*" | "×" => Button::Binary(BinaryOp::Multiply),
            "/" | "÷" => Button::Binary(BinaryOp::Divide),
            "=" => Button::Equals,
            "+/-" | "±" => Button::Unary(UnaryOp::Negate),
            "%" => Button::Unary(UnaryOp::Percent),
            "π" => Button::Constant(Constant::Pi),
            _ => {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => {
                        Button::digit(c).ok_or_else(|| ButtonParseError(s.to_string()))?
                    }
                    _ => match token.to_ascii_lowercase().as_str() {
                        "ac" | "clear" => Button::Clear,
                        "neg" | "negate" => Button::Unary(UnaryOp::Negate),
                        "sin" => Button::Unary(UnaryOp::Sin),
                        "cos" => Button::Unary(UnaryOp::Cos),
                        "pi" => Button::Constant(Constant::Pi),
                        _ => return Err(ButtonParseError(s.to_string())),
                    },
                }
            }
        };
        Ok(button)
    }
}
