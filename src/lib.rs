//! Calculator MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server around a
//! button-driven, multi-base calculator. Clients press keys one at a time and
//! read back the display, exactly as a keypad UI would.
//!
//! # Architecture
//!
//! The library follows a 2-layer architecture:
//! - **MCP Layer**: `CalcServerHandler` - Parses button tokens and forwards them
//! - **Domain Layer**: `calc` module - The evaluation state machine, no I/O
//!
//! Configuration (`config` module) only decides how the engine starts.
//!
//! # Example
//!
//! ```no_run
//! use calc_mcp::{CalcServerHandler, Config};
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = CalcServerHandler::new(&Config::default());
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod calc;
pub mod config;
pub mod formatting;
mod handlers;
pub mod validation;

use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::sync::Mutex;
use tracing::info;

// Re-export commonly used types
pub use calc::{Button, Calculator, NumberBase};
pub use config::Config;

/// MCP Server handler for the calculator
///
/// Owns a single engine. Every tool call locks it for the duration of the
/// call, so presses from one client are applied strictly in order.
pub struct CalcServerHandler {
    pub(crate) calculator: Mutex<Calculator>,
}

impl CalcServerHandler {
    /// Create a new calculator server handler
    ///
    /// # Arguments
    /// * `config` - Starting base and display settings
    ///
    /// # Example
    /// ```
    /// # use calc_mcp::{CalcServerHandler, Config};
    /// let handler = CalcServerHandler::new(&Config::default());
    /// ```
    pub fn new(config: &Config) -> Self {
        info!(
            base = %config.base,
            precision = config.precision,
            grouping = config.grouping,
            "calculator created"
        );
        Self {
            calculator: Mutex::new(config.build_calculator()),
        }
    }
}

/// Multi-base keypad calculator (decimal, binary, hexadecimal).
///
/// Behaves like a physical calculator: press one key at a time and read the display.
/// Multiply/divide bind tighter than add/subtract, so `3 + 4 x 2 =` shows 11.
///
/// Button tokens:
/// - Digits: 0-9, and A-F in hex mode (binary accepts only 0 and 1)
/// - `.` decimal point (decimal mode only)
/// - `+` `-` `x` `/` binary operators, `=` evaluate, `AC` clear
/// - `+/-` negate, `%` percent, `sin` `cos` (radians), `pi` `e` constants
///
/// Digits not valid in the current base are ignored. Division by zero and
/// converting a fractional value to binary/hex show `Error`; type a digit or AC to recover.
#[mcp_server]
impl McpServer for CalcServerHandler {
    /// **Press**: Press one calculator button and read the display.
    /// **Tokens**: 0-9, A-F, ., +, -, x, /, =, AC, +/-, %, sin, cos, pi, e.
    #[tool]
    async fn press(
        &self,
        /// Button token (e.g., "7", "+", "=", "AC", "pi")
        button: String,
    ) -> McpResult<String> {
        self.handle_press(button).await
    }

    /// **Press keys**: Press several buttons in order, separated by spaces.
    /// **Example**: "1 2 + 3 0 x 2 =" shows 72. Nothing is pressed if any token is invalid.
    #[tool]
    async fn press_keys(
        &self,
        /// Space-separated button tokens (e.g., "3 + 4 x 2 =")
        keys: String,
    ) -> McpResult<String> {
        self.handle_press_keys(keys).await
    }

    /// **Set base**: Switch between decimal, binary and hexadecimal.
    /// The current value is converted; pending operations are kept.
    /// Fractional values cannot be shown in binary/hex and display `Error`.
    #[tool]
    async fn set_base(
        &self,
        /// Base: dec/bin/hex
        base: String,
    ) -> McpResult<String> {
        self.handle_set_base(base).await
    }

    /// **Status**: Read the display, expression and base without pressing anything.
    #[tool]
    async fn status(&self) -> McpResult<String> {
        self.handle_status().await
    }
}
