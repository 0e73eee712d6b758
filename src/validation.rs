//! Validation helper functions for the calculator MCP server
//!
//! This module turns the raw strings sent by MCP clients into engine types.
//! Every failure is reported back to the client with the list of valid inputs.

use crate::calc::{Button, NumberBase};
use mcp_attr::{Result as McpResult, bail_public};

/// Parse a single button token
///
/// # Arguments
/// * `token` - Button token such as "7", "+", "AC" or "pi"
///
/// # Returns
/// Result containing the parsed Button or error
pub fn parse_button(token: &str) -> McpResult<Button> {
    match token.parse::<Button>() {
        Ok(button) => Ok(button),
        Err(e) => {
            bail_public!(_, "{}", e);
        }
    }
}

/// Parse whitespace-separated button tokens
///
/// The whole sequence is rejected if any token is unknown, so a caller can
/// validate before pressing anything.
///
/// # Arguments
/// * `keys` - Tokens separated by spaces (e.g., "3 + 4 x 2 =")
///
/// # Returns
/// Result containing the buttons in order or error
pub fn parse_keys(keys: &str) -> McpResult<Vec<Button>> {
    let buttons = keys
        .split_whitespace()
        .map(parse_button)
        .collect::<McpResult<Vec<_>>>()?;

    if buttons.is_empty() {
        bail_public!(
            _,
            "No buttons given. Separate button tokens with spaces, e.g. '3 + 4 ='"
        );
    }
    Ok(buttons)
}

/// Parse and validate a number base parameter
///
/// # Arguments
/// * `base_str` - "dec", "bin" or "hex"
///
/// # Returns
/// Result containing parsed NumberBase or error
pub fn parse_base(base_str: &str) -> McpResult<NumberBase> {
    match base_str.parse::<NumberBase>() {
        Ok(base) => Ok(base),
        Err(e) => {
            bail_public!(_, "{}", e);
        }
    }
}
