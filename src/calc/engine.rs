//! Button-driven evaluation state machine
//!
//! The engine keeps one pending operation per priority tier instead of an
//! operator stack. A multiply or divide folds into the accumulator before
//! any add or subtract, which gives standard precedence for the two tiers
//! without lookahead.

use tracing::{debug, warn};

use super::base::NumberBase;
use super::button::{BinaryOp, Button, UnaryOp};
use super::error::CalcError;
use super::format::DisplaySettings;
use super::trace::ExpressionTrace;

/// Text shown while the engine is in its error state
pub const ERROR_TEXT: &str = "Error";

/// A binary operator waiting for its right-hand operand
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingOperation {
    pub operator: BinaryOp,
    pub left_operand: Number,
}

impl PendingOperation {
    pub fn new(operator: BinaryOp, left_operand: impl Into<Number>) -> Self {
        Self {
            operator,
            left_operand: left_operand.into(),
        }
    }

    /// Resolves against `right_operand` in the store of `base`
    ///
    /// Integer bases use exact `i64` arithmetic when both operands are
    /// whole; otherwise the result goes through `f64` and is truncated.
    pub fn perform(&self, right_operand: Number, base: NumberBase) -> Result<Number, CalcError> {
        if base.is_integral()
            && let (Some(left), Some(right)) =
                (self.left_operand.as_integer(), right_operand.as_integer())
        {
            return self.operator.apply_integer(left, right).map(Number::Integer);
        }
        let value = self
            .operator
            .apply(self.left_operand.as_f64(), right_operand.as_f64());
        Number::for_base(value, base)
    }
}

/// Accumulator value in the store matching the active base
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Real(f64),
    Integer(i64),
}

impl Number {
    fn zero(base: NumberBase) -> Self {
        if base.is_integral() {
            Number::Integer(0)
        } else {
            Number::Real(0.0)
        }
    }

    /// Integer bases truncate toward zero
    fn for_base(value: f64, base: NumberBase) -> Result<Self, CalcError> {
        if !value.is_finite() {
            return Err(CalcError::NonFinite);
        }
        if !base.is_integral() {
            return Ok(Number::Real(value));
        }

        let truncated = value.trunc();
        if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
            return Err(CalcError::OutOfRange(value));
        }
        Ok(Number::Integer(truncated as i64))
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Number::Real(value) => value,
            Number::Integer(value) => value as f64,
        }
    }

    /// Exact integer, if this value is whole and fits `i64`
    fn as_integer(self) -> Option<i64> {
        match self {
            Number::Integer(value) => Some(value),
            Number::Real(value)
                if value.fract() == 0.0
                    && value >= i64::MIN as f64
                    && value < i64::MAX as f64 =>
            {
                Some(value as i64)
            }
            Number::Real(_) => None,
        }
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Real(value)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

/// What the display is currently backed by
#[derive(Debug, Clone, PartialEq)]
enum Register {
    Value(Number),
    /// Digits typed since the last operator (mid-entry)
    Entry(String),
    Error(CalcError),
}

/// Multi-base calculator driven one button press at a time
///
/// # Example
/// ```
/// use calc_mcp::calc::{Button, BinaryOp, Calculator};
///
/// let mut calc = Calculator::new();
/// calc.press(Button::Digit('3'));
/// calc.press(Button::Binary(BinaryOp::Add));
/// calc.press(Button::Digit('4'));
/// calc.press(Button::Binary(BinaryOp::Multiply));
/// calc.press(Button::Digit('2'));
/// calc.press(Button::Equals);
/// assert_eq!(calc.display_value(), "11");
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    base: NumberBase,
    register: Register,
    high: Option<PendingOperation>,
    low: Option<PendingOperation>,
    trace: ExpressionTrace,
    display: DisplaySettings,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a Decimal calculator with default display settings
    pub fn new() -> Self {
        Self::with_settings(NumberBase::Decimal, DisplaySettings::default())
    }

    /// Creates a calculator starting in `base`
    pub fn with_settings(base: NumberBase, display: DisplaySettings) -> Self {
        Self {
            base,
            register: Register::Value(Number::zero(base)),
            high: None,
            low: None,
            trace: ExpressionTrace::new(),
            display,
        }
    }

    pub fn base(&self) -> NumberBase {
        self.base
    }

    pub fn expression_trace(&self) -> &str {
        self.trace.as_str()
    }

    /// Digits typed so far, while the user is mid-entry
    pub fn input(&self) -> Option<&str> {
        match &self.register {
            Register::Entry(text) => Some(text),
            _ => None,
        }
    }

    pub fn pending_high(&self) -> Option<PendingOperation> {
        self.high
    }

    pub fn pending_low(&self) -> Option<PendingOperation> {
        self.low
    }

    pub fn is_error(&self) -> bool {
        matches!(self.register, Register::Error(_))
    }

    /// Cause of the current error state, if any
    pub fn error(&self) -> Option<&CalcError> {
        match &self.register {
            Register::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Numeric value of the accumulator; unreadable input counts as 0
    pub fn value(&self) -> f64 {
        match &self.register {
            Register::Value(number) => number.as_f64(),
            Register::Entry(text) => self.parse_entry(text).unwrap_or_else(|err| {
                debug!(%err, "unreadable entry treated as 0");
                0.0
            }),
            Register::Error(_) => 0.0,
        }
    }

    /// Text for the main display in the active base
    pub fn display_value(&self) -> String {
        match &self.register {
            Register::Error(_) => ERROR_TEXT.to_string(),
            Register::Entry(text) if !self.base.is_integral() && text.ends_with('.') => {
                text.clone()
            }
            Register::Entry(text) => {
                if self.base.is_integral() {
                    self.base
                        .parse_integer(text)
                        .map(|value| self.base.render_integer(value))
                        .unwrap_or_else(|_| "0".to_string())
                } else {
                    let value = self.parse_entry(text).unwrap_or(0.0);
                    self.render(Number::Real(value))
                }
            }
            Register::Value(number) => self.render(*number),
        }
    }

    /// Applies one button press
    ///
    /// Digits outside the active base's alphabet, and a second decimal point
    /// in the same entry, are ignored entirely.
    pub fn press(&mut self, button: Button) {
        let button = button.normalized();
        if !self.accepts(&button) {
            debug!(%button, base = %self.base, "ignored button");
            return;
        }

        match button {
            Button::Clear => {
                self.clear();
                debug!("cleared");
                return;
            }
            Button::Equals => {
                self.evaluate();
                let shown = self.display_value();
                self.trace.close(&shown);
                debug!(display = %shown, "evaluated");
                return;
            }
            _ => {}
        }

        let shown = self.display_value();
        self.trace.record(&button, &shown);

        match button {
            Button::Digit(symbol) => self.enter(symbol),
            Button::Decimal => self.enter('.'),
            Button::Constant(constant) => {
                self.commit_entry();
                self.store(constant.value());
            }
            Button::Unary(op) => {
                self.commit_entry();
                match (op, self.operand()) {
                    (UnaryOp::Negate, Number::Integer(value)) => {
                        let result = value
                            .checked_neg()
                            .map(Number::Integer)
                            .ok_or(CalcError::OutOfRange(-(value as f64)));
                        self.set_result(result);
                    }
                    (_, number) => self.store(op.apply(number.as_f64())),
                }
            }
            Button::Binary(op) => self.apply_binary(op),
            Button::Equals | Button::Clear => {}
        }

        debug!(%button, display = %self.display_value(), "pressed");
    }

    /// Switches the number system, converting the accumulator
    ///
    /// Pending operations and the expression trace are kept. A fractional
    /// value cannot enter Binary or Hexadecimal and yields the error state;
    /// an unreadable value becomes 0.
    pub fn set_base(&mut self, base: NumberBase) {
        if base == self.base {
            return;
        }

        let old = self.base;
        let converted = if old.is_integral() {
            let value = self.integer_value();
            if base.is_integral() {
                Ok(Number::Integer(value))
            } else {
                Ok(Number::Real(value as f64))
            }
        } else {
            let value = self.value();
            if value.fract() != 0.0 {
                Err(CalcError::NonIntegralConversion(value))
            } else {
                Number::for_base(value, base)
            }
        };

        self.base = base;
        self.register = match converted {
            Ok(number) => Register::Value(number),
            Err(err) => {
                warn!(%err, from = %old, to = %base, "base conversion failed");
                Register::Error(err)
            }
        };
        debug!(from = %old, to = %base, display = %self.display_value(), "base switched");
    }

    fn accepts(&self, button: &Button) -> bool {
        match button.symbol_char() {
            Some('.') => {
                self.base.accepts('.')
                    && !matches!(&self.register, Register::Entry(text) if text.contains('.'))
            }
            Some(symbol) => self.base.accepts(symbol),
            None => true,
        }
    }

    /// Appends mid-entry; otherwise starts a new entry, clearing any error
    ///
    /// An integer entry that no longer fits `i64` becomes the error state.
    fn enter(&mut self, symbol: char) {
        if let Register::Entry(text) = &mut self.register {
            text.push(symbol);
        } else {
            let text = if symbol == '.' {
                "0.".to_string()
            } else {
                symbol.to_string()
            };
            self.register = Register::Entry(text);
        }

        let overflow = match &self.register {
            Register::Entry(text) if self.base.is_integral() => {
                self.base.parse_integer(text).err()
            }
            _ => None,
        };
        if let Some(err @ CalcError::OutOfRange(_)) = overflow {
            self.set_result(Err(err));
        }
    }

    fn apply_binary(&mut self, op: BinaryOp) {
        self.commit_entry();

        if let Some(high) = self.high.take() {
            self.resolve(high);
        }
        if !op.is_high_priority()
            && let Some(low) = self.low.take()
        {
            self.resolve(low);
        }

        let pending = Some(PendingOperation::new(op, self.operand()));
        if op.is_high_priority() {
            self.high = pending;
        } else {
            self.low = pending;
        }
    }

    fn evaluate(&mut self) {
        self.commit_entry();
        if let Some(high) = self.high.take() {
            self.resolve(high);
        }
        if let Some(low) = self.low.take() {
            self.resolve(low);
        }
    }

    /// Applies `pending` with the accumulator as its right-hand operand
    fn resolve(&mut self, pending: PendingOperation) {
        let result = pending.perform(self.operand(), self.base);
        self.set_result(result);
    }

    fn clear(&mut self) {
        self.register = Register::Value(Number::zero(self.base));
        self.high = None;
        self.low = None;
        self.trace.clear();
    }

    /// Ends mid-entry, turning typed digits into a stored value
    fn commit_entry(&mut self) {
        if !matches!(self.register, Register::Entry(_)) {
            return;
        }
        if self.base.is_integral() {
            self.register = Register::Value(Number::Integer(self.integer_value()));
        } else {
            let value = self.value();
            self.store(value);
        }
    }

    fn store(&mut self, value: f64) {
        self.set_result(Number::for_base(value, self.base));
    }

    fn set_result(&mut self, result: Result<Number, CalcError>) {
        self.register = match result {
            Ok(number) => Register::Value(number),
            Err(err) => {
                warn!(%err, "calculator entered error state");
                Register::Error(err)
            }
        };
    }

    fn parse_entry(&self, text: &str) -> Result<f64, CalcError> {
        if self.base.is_integral() {
            return self.base.parse_integer(text).map(|value| value as f64);
        }
        text.parse::<f64>().map_err(|_| CalcError::ParseFailure {
            text: text.to_string(),
            radix: self.base.radix(),
        })
    }

    /// Committed accumulator; the error state reads as 0
    fn operand(&self) -> Number {
        match &self.register {
            Register::Value(number) => *number,
            Register::Entry(_) if self.base.is_integral() => Number::Integer(self.integer_value()),
            Register::Entry(_) => Number::Real(self.value()),
            Register::Error(_) => Number::zero(self.base),
        }
    }

    /// Integer reading of the accumulator under the active integer base
    fn integer_value(&self) -> i64 {
        match &self.register {
            Register::Value(Number::Integer(value)) => *value,
            Register::Value(Number::Real(value)) => value.trunc() as i64,
            Register::Entry(text) => self.base.parse_integer(text).unwrap_or_else(|err| {
                debug!(%err, "unreadable entry converted as 0");
                0
            }),
            Register::Error(_) => 0,
        }
    }

    fn render(&self, number: Number) -> String {
        match number {
            Number::Integer(value) => self.base.render_integer(value),
            Number::Real(value) if value.is_finite() => self.display.format(value),
            Number::Real(_) => ERROR_TEXT.to_string(),
        }
    }
}
