//! Page type - the main document structure

use ahash::AHashMap;

use crate::element::{FormulaElement, FormulaKey};
use crate::error::{Error, Result};
use crate::input::InputField;

/// A page document
///
/// A page holds the input fields and formula elements found in a document,
/// in document order. Input fields are indexed by id; when a document
/// carries duplicate ids the first occurrence wins, matching how browsers
/// resolve element ids.
#[derive(Debug, Default)]
pub struct Page {
    /// Input fields in document order
    inputs: Vec<InputField>,
    /// Input id → index into `inputs`
    input_index: AHashMap<String, usize>,
    /// Formula elements in document order
    formulas: Vec<FormulaElement>,
}

impl Page {
    /// Create a new empty page
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of input fields
    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    /// Number of formula elements
    pub fn formula_count(&self) -> usize {
        self.formulas.len()
    }

    /// Check if the page has no inputs and no formulas
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty() && self.formulas.is_empty()
    }

    /// Add an input field
    ///
    /// Fails with [`Error::DuplicateInputId`] when a field with this id
    /// already exists.
    pub fn add_input<S: Into<String>, V: Into<String>>(&mut self, id: S, value: V) -> Result<()> {
        let id = id.into();
        if self.input_index.contains_key(&id) {
            return Err(Error::DuplicateInputId(id));
        }

        self.input_index.insert(id.clone(), self.inputs.len());
        self.inputs.push(InputField::new(id, value));
        Ok(())
    }

    /// Add a formula element, returning its key
    pub fn add_formula(&mut self, element: FormulaElement) -> FormulaKey {
        let key = FormulaKey::new(self.formulas.len());
        self.formulas.push(element);
        key
    }

    /// Get an input field by id
    pub fn input(&self, id: &str) -> Option<&InputField> {
        self.input_index.get(id).map(|&idx| &self.inputs[idx])
    }

    /// Get a mutable input field by id
    pub fn input_mut(&mut self, id: &str) -> Option<&mut InputField> {
        match self.input_index.get(id) {
            Some(&idx) => Some(&mut self.inputs[idx]),
            None => None,
        }
    }

    /// Check whether an input field with this id exists
    pub fn has_input(&self, id: &str) -> bool {
        self.input_index.contains_key(id)
    }

    /// Replace the raw value of an input field
    pub fn set_input_value<V: Into<String>>(&mut self, id: &str, value: V) -> Result<()> {
        match self.input_mut(id) {
            Some(field) => {
                field.set_value(value);
                Ok(())
            }
            None => Err(Error::UnknownInput(id.to_string())),
        }
    }

    /// Get a formula element by key
    pub fn formula(&self, key: FormulaKey) -> Option<&FormulaElement> {
        self.formulas.get(key.index())
    }

    /// Get a mutable formula element by key
    pub fn formula_mut(&mut self, key: FormulaKey) -> Option<&mut FormulaElement> {
        self.formulas.get_mut(key.index())
    }

    /// Iterate over all input fields in document order
    pub fn inputs(&self) -> impl Iterator<Item = &InputField> {
        self.inputs.iter()
    }

    /// Iterate over all formula elements with their keys, in document order
    pub fn formulas(&self) -> impl Iterator<Item = (FormulaKey, &FormulaElement)> {
        self.formulas
            .iter()
            .enumerate()
            .map(|(idx, element)| (FormulaKey::new(idx), element))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_and_lookup_input() {
        let mut page = Page::new();
        page.add_input("a", "1").unwrap();
        page.add_input("b", "2").unwrap();

        assert_eq!(page.input_count(), 2);
        assert_eq!(page.input("a").unwrap().value(), "1");
        assert_eq!(page.input("b").unwrap().numeric(), Some(2.0));
        assert!(page.input("c").is_none());
    }

    #[test]
    fn test_duplicate_input_id() {
        let mut page = Page::new();
        page.add_input("a", "1").unwrap();

        let err = page.add_input("a", "2").unwrap_err();
        assert!(matches!(err, Error::DuplicateInputId(_)));

        // First occurrence wins
        assert_eq!(page.input("a").unwrap().value(), "1");
    }

    #[test]
    fn test_set_input_value() {
        let mut page = Page::new();
        page.add_input("a", "1").unwrap();

        page.set_input_value("a", "5").unwrap();
        assert_eq!(page.input("a").unwrap().numeric(), Some(5.0));

        let err = page.set_input_value("missing", "5").unwrap_err();
        assert!(matches!(err, Error::UnknownInput(_)));
    }

    #[test]
    fn test_add_formula() {
        let mut page = Page::new();
        let key = page.add_formula(FormulaElement::new(Some("a+b".into())));

        assert_eq!(page.formula_count(), 1);
        assert_eq!(page.formula(key).unwrap().expression(), Some("a+b"));

        let keys: Vec<_> = page.formulas().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![key]);
    }
}
