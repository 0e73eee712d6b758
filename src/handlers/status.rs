//! Status handler for the calculator MCP server

use crate::CalcServerHandler;
use crate::formatting;
use mcp_attr::Result as McpResult;

impl CalcServerHandler {
    /// Reports the display without changing any state.
    pub async fn handle_status(&self) -> McpResult<String> {
        let calc = self.calculator.lock().unwrap();
        Ok(formatting::format_status(&calc))
    }
}
