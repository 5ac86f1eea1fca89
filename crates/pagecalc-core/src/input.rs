//! Input field type

use crate::value::parse_number;

/// A named input field holding a raw text value
///
/// Field values are text; [`numeric`](InputField::numeric) applies the
/// lenient prefix parse from [`parse_number`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputField {
    id: String,
    value: String,
}

impl InputField {
    /// Create a new input field
    pub fn new<S: Into<String>, V: Into<String>>(id: S, value: V) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }

    /// The field id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The raw text value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the raw text value
    pub fn set_value<V: Into<String>>(&mut self, value: V) {
        self.value = value.into();
    }

    /// The numeric value of the field, if the raw text has a numeric prefix
    pub fn numeric(&self) -> Option<f64> {
        parse_number(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric() {
        let mut field = InputField::new("a", "3");
        assert_eq!(field.numeric(), Some(3.0));

        field.set_value("");
        assert_eq!(field.numeric(), None);

        field.set_value("2.5kg");
        assert_eq!(field.numeric(), Some(2.5));
    }
}
