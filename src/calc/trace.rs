use super::button::Button;

/// Running record of the keys pressed since the last `=` or clear
///
/// After `=` the trace is closed: the next recorded button starts a new
/// trace seeded with whatever the display showed at that moment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpressionTrace {
    text: String,
    closed: bool,
}

impl ExpressionTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Appends `button`, bare for digits and space-padded for operators
    ///
    /// # Arguments
    /// * `button` - Any button other than `=` and clear
    /// * `shown` - Display value before the button takes effect
    pub fn record(&mut self, button: &Button, shown: &str) {
        if self.closed {
            self.text = shown.to_string();
            self.closed = false;
        }

        if button.is_digit() {
            self.text.push_str(&button.to_string());
        } else {
            self.text.push_str(&format!(" {} ", button));
        }
    }

    /// Appends ` = <result>` and closes the trace
    pub fn close(&mut self, result: &str) {
        self.text.push_str(&format!(" = {}", result));
        self.closed = true;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.closed = false;
    }
}
