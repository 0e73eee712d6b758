//! Calculator engine
//!
//! This module contains the button-driven evaluation core. It has no I/O
//! and no knowledge of the MCP layer. It is split into submodules:
//! - `base`: number systems and integer parsing/rendering
//! - `button`: keypad buttons and their operators
//! - `engine`: the evaluation state machine
//! - `error`: causes of the `Error` display state
//! - `format`: decimal display formatting
//! - `trace`: the expression trace shown above the display

mod base;
mod button;
mod engine;
mod error;
mod format;
mod trace;

// Re-export all public types
pub use base::NumberBase;
pub use button::{BinaryOp, Button, ButtonParseError, Constant, UnaryOp};
pub use engine::{Calculator, ERROR_TEXT, Number, PendingOperation};
pub use error::CalcError;
pub use format::{DEFAULT_PRECISION, DisplaySettings, MAX_PRECISION};
pub use trace::ExpressionTrace;
