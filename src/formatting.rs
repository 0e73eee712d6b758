//! Formatting helper functions for the calculator MCP server

use crate::calc::Calculator;

/// Format the display block returned by every tool
///
/// # Arguments
/// * `calc` - Calculator to report on
///
/// # Returns
/// Display value, expression trace and base, one per line:
/// ```text
/// Display: 11
/// Expression: 3 + 4 × 2 = 11
/// Base: DEC
/// ```
pub fn format_status(calc: &Calculator) -> String {
    format!(
        "Display: {}\nExpression: {}\nBase: {}",
        calc.display_value(),
        calc.expression_trace(),
        calc.base()
    )
}
