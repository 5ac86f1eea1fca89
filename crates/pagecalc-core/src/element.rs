//! Formula element type

/// Copyable handle for a formula element on a [`Page`](crate::Page)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormulaKey(usize);

impl FormulaKey {
    /// Create a key from an element index
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// The element index on the page
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A formula-bearing element
///
/// Carries the expression read from the element's `evaluator` attribute
/// (`None` when the attribute is absent), the displayed text, and the error
/// display state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormulaElement {
    expression: Option<String>,
    text: String,
    error: bool,
}

impl FormulaElement {
    /// Create a new formula element with empty display text
    pub fn new(expression: Option<String>) -> Self {
        Self {
            expression,
            text: String::new(),
            error: false,
        }
    }

    /// Create a formula element with initial display text
    pub fn with_text<S: Into<String>>(expression: Option<String>, text: S) -> Self {
        Self {
            expression,
            text: text.into(),
            error: false,
        }
    }

    /// The expression text, if the element carries one
    pub fn expression(&self) -> Option<&str> {
        self.expression.as_deref()
    }

    /// The displayed text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the element is in the error display state
    pub fn is_error(&self) -> bool {
        self.error
    }

    /// Set the displayed text and clear the error state
    pub fn set_text<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
        self.error = false;
    }

    /// Set the displayed text and enter the error state
    pub fn set_error<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
        self.error = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_state_transitions() {
        let mut element = FormulaElement::new(Some("a+b".into()));
        assert!(!element.is_error());

        element.set_error("Invalid Formula");
        assert!(element.is_error());
        assert_eq!(element.text(), "Invalid Formula");

        // A successful render clears the error state
        element.set_text("42");
        assert!(!element.is_error());
        assert_eq!(element.text(), "42");
    }
}
