//! Set base handler for the calculator MCP server

use crate::CalcServerHandler;
use crate::formatting;
use crate::validation;
use mcp_attr::Result as McpResult;

impl CalcServerHandler {
    /// Switches the number base, converting the current value.
    pub async fn handle_set_base(&self, base: String) -> McpResult<String> {
        let new_base = validation::parse_base(&base)?;

        let mut calc = self.calculator.lock().unwrap();
        calc.set_base(new_base);
        Ok(formatting::format_status(&calc))
    }
}
