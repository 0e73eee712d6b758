//! Calculator engine behaviour through the public API
mod common;

use calc_mcp::calc::{
    BinaryOp, Button, CalcError, Calculator, Constant, DisplaySettings, ERROR_TEXT, NumberBase,
};
use common::{calc_after, press_keys};

#[test]
fn test_accepted_digits_concatenate_per_base() {
    let cases = [
        (NumberBase::Decimal, "4 0 A 2 . 7 . 1", "402.71"),
        (NumberBase::Binary, "1 0 2 1 9 1", "1011"),
        (NumberBase::Hexadecimal, "F 0 . 9 a", "F09A"),
    ];

    for (base, keys, expected) in cases {
        let mut calc = Calculator::with_settings(base, DisplaySettings::default());
        press_keys(&mut calc, keys);
        assert_eq!(calc.input(), Some(expected), "base {}", base);
    }
}

#[test]
fn test_rejected_digit_leaves_everything_unchanged() {
    let mut calc = Calculator::with_settings(NumberBase::Binary, DisplaySettings::default());
    press_keys(&mut calc, "1 1 +");
    let display = calc.display_value();
    let trace = calc.expression_trace().to_string();

    calc.press(Button::Digit('7'));
    assert_eq!(calc.display_value(), display);
    assert_eq!(calc.expression_trace(), trace);
    assert_eq!(calc.input(), None);
}

#[test]
fn test_clear_from_any_state() {
    let prefixes = ["", "1 2 3", "4 x 5 + 6", "8 / 0 =", "9 =", "2 + pi"];
    for keys in prefixes {
        let mut calc = calc_after(keys);
        calc.press(Button::Clear);
        assert_eq!(calc.display_value(), "0", "after {:?}", keys);
        assert_eq!(calc.expression_trace(), "");
        assert!(calc.pending_high().is_none());
        assert!(calc.pending_low().is_none());
        assert!(!calc.is_error());
    }

    // Error from a base switch clears too, and the base is kept
    let mut calc = calc_after("3 . 5");
    calc.set_base(NumberBase::Hexadecimal);
    calc.press(Button::Clear);
    assert_eq!(calc.display_value(), "0");
    assert_eq!(calc.base(), NumberBase::Hexadecimal);
}

#[test]
fn test_precedence_laws() {
    assert_eq!(calc_after("3 + 4 x 2 =").display_value(), "11");
    assert_eq!(calc_after("5 x 2 + 3 =").display_value(), "13");
    assert_eq!(calc_after("2 + 6 / 3 - 1 =").display_value(), "3");
    assert_eq!(calc_after("1 - 2 x 3 x 4 =").display_value(), "-23");
}

#[test]
fn test_decimal_binary_hex_round_trip() {
    for n in [0u32, 1, 2, 7, 10, 255, 256, 4096, 65535, 123456] {
        let keys: Vec<String> = n.to_string().chars().map(|c| c.to_string()).collect();
        let mut calc = calc_after(&keys.join(" "));

        calc.set_base(NumberBase::Binary);
        assert_eq!(calc.display_value(), format!("{:b}", n));
        calc.set_base(NumberBase::Decimal);
        assert_eq!(calc.value(), n as f64);

        calc.set_base(NumberBase::Hexadecimal);
        assert_eq!(calc.display_value(), format!("{:X}", n));
        calc.set_base(NumberBase::Decimal);
        assert_eq!(calc.value(), n as f64);
    }
}

#[test]
fn test_binary_to_hex_direct() {
    let mut calc = Calculator::with_settings(NumberBase::Binary, DisplaySettings::default());
    press_keys(&mut calc, "1 1 1 1 1 0 1 0");
    calc.set_base(NumberBase::Hexadecimal);
    assert_eq!(calc.display_value(), "FA");
}

#[test]
fn test_non_integral_guard() {
    let mut calc = calc_after("3 . 5");
    calc.set_base(NumberBase::Binary);
    assert_eq!(calc.display_value(), ERROR_TEXT);
    assert!(matches!(
        calc.error(),
        Some(CalcError::NonIntegralConversion(_))
    ));

    calc.press(Button::Digit('1'));
    assert_eq!(calc.input(), Some("1"));
    assert_eq!(calc.display_value(), "1");
}

#[test]
fn test_computed_fraction_also_guarded() {
    let mut calc = calc_after("7 / 2 =");
    calc.set_base(NumberBase::Hexadecimal);
    assert!(calc.is_error());
}

#[test]
fn test_pi_injection() {
    let mut calc = calc_after("7 x 8 +");
    calc.press(Button::Constant(Constant::Pi));
    assert_eq!(calc.display_value(), "3.141593");
    assert!(calc.pending_low().is_some());
}

#[test]
fn test_equals_idempotent() {
    let mut calc = calc_after("1 2 - 5 =");
    let first = calc.display_value();
    calc.press(Button::Equals);
    assert_eq!(calc.display_value(), first);
    assert_eq!(first, "7");
}

#[test]
fn test_non_finite_results_show_error() {
    assert_eq!(calc_after("5 / 0 =").display_value(), ERROR_TEXT);
    assert_eq!(calc_after("0 / 0 =").display_value(), ERROR_TEXT);
    assert_eq!(calc_after("0 / 0 =").error(), Some(&CalcError::NonFinite));
}

#[test]
fn test_new_high_priority_resolves_previous() {
    let mut calc = Calculator::new();
    press_keys(&mut calc, "6 / 3");
    calc.press(Button::Binary(BinaryOp::Multiply));
    assert_eq!(calc.display_value(), "2");
    let pending = calc.pending_high().unwrap();
    assert_eq!(pending.operator, BinaryOp::Multiply);
    assert_eq!(pending.left_operand.as_f64(), 2.0);
}

#[test]
fn test_expression_trace_lifecycle() {
    let mut calc = calc_after("1 2 + 3 =");
    assert_eq!(calc.expression_trace(), "12 + 3 = 15");

    press_keys(&mut calc, "- 5 =");
    assert_eq!(calc.expression_trace(), "15 - 5 = 10");

    calc.press(Button::Clear);
    assert_eq!(calc.expression_trace(), "");
}

#[test]
fn test_large_values_are_grouped() {
    let calc = calc_after("1 2 3 4 5 6 7 x 1 0 =");
    assert_eq!(calc.display_value(), "12,345,670");
}
