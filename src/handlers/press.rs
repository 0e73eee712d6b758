//! Press handlers for the calculator MCP server

use crate::CalcServerHandler;
use crate::formatting;
use crate::validation;
use mcp_attr::Result as McpResult;

impl CalcServerHandler {
    /// Presses a single button and reports the display.
    pub async fn handle_press(&self, button: String) -> McpResult<String> {
        let button = validation::parse_button(&button)?;

        let mut calc = self.calculator.lock().unwrap();
        calc.press(button);
        Ok(formatting::format_status(&calc))
    }

    /// Presses a space-separated sequence of buttons in order.
    ///
    /// All tokens are validated first; nothing is pressed if any is unknown.
    pub async fn handle_press_keys(&self, keys: String) -> McpResult<String> {
        let buttons = validation::parse_keys(&keys)?;

        let mut calc = self.calculator.lock().unwrap();
        for button in buttons {
            calc.press(button);
        }
        Ok(formatting::format_status(&calc))
    }
}
