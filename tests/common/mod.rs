//! Common test utilities for integration tests
#![allow(dead_code)]

use calc_mcp::{Button, CalcServerHandler, Calculator, Config};

/// Create a test handler with default configuration
pub fn get_test_handler() -> CalcServerHandler {
    CalcServerHandler::new(&Config::default())
}

/// Press whitespace-separated button tokens in order
pub fn press_keys(calc: &mut Calculator, keys: &str) {
    for token in keys.split_whitespace() {
        let button: Button = token
            .parse()
            .unwrap_or_else(|e| panic!("bad token in test: {}", e));
        calc.press(button);
    }
}

/// Fresh Decimal calculator after pressing `keys`
pub fn calc_after(keys: &str) -> Calculator {
    let mut calc = Calculator::new();
    press_keys(&mut calc, keys);
    calc
}

/// Extract the display value from a tool response
/// Response format: "Display: <value>\nExpression: <trace>\nBase: <base>"
pub fn extract_display(response: &str) -> String {
    response
        .lines()
        .find_map(|line| line.strip_prefix("Display: "))
        .unwrap_or("")
        .to_string()
}

/// Extract the expression trace from a tool response
pub fn extract_expression(response: &str) -> String {
    response
        .lines()
        .find_map(|line| line.strip_prefix("Expression: "))
        .unwrap_or("")
        .to_string()
}
