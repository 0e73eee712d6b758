//! Error types for the calculator engine
//!
//! None of these escape `Calculator::press`. They describe why a value
//! degraded to `0` or to the `Error` display state.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Buffer could not be read under the active radix
    #[error("'{text}' is not a valid base-{radix} number")]
    ParseFailure { text: String, radix: u32 },
    /// Fractional value cannot be shown in an integer base
    #[error("{0} has a fractional part and cannot be converted to an integer base")]
    NonIntegralConversion(f64),
    /// Division by zero or a domain error produced infinity or NaN
    #[error("result is not a finite number")]
    NonFinite,
    /// Integral value does not fit the integer store
    #[error("{0} is outside the representable integer range")]
    OutOfRange(f64),
}
