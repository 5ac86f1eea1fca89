//! Formula binding engine
//!
//! Binds the formula elements of a page to its input fields and keeps their
//! displayed text up to date as input values change.
//!
//! # Example
//!
//! ```rust
//! use pagecalc::prelude::*;
//!
//! let mut page = Page::new();
//! page.add_input("price", "10").unwrap();
//! page.add_input("qty", "3").unwrap();
//! let key = page.add_formula(FormulaElement::new(Some("price*qty".into())));
//!
//! let (binder, stats) = page.bind();
//! assert_eq!(stats.bound, 1);
//! assert_eq!(page.formula(key).unwrap().text(), "30");
//!
//! binder.set_value(&mut page, "qty", "4").unwrap();
//! assert_eq!(page.formula(key).unwrap().text(), "40");
//! ```

use ahash::{AHashMap, AHashSet};

use pagecalc_core::{format_number, FormulaKey, Page, Result, DEFAULT_PRECISION, ERROR_TEXT};
use pagecalc_expr::{evaluate, parse_expression, variables, EvalContext, Expr};

/// Options for formula binding
#[derive(Debug, Clone)]
pub struct BindOptions {
    /// Text displayed by elements in the error state
    pub error_text: String,
    /// Decimal places for non-integral results
    pub precision: usize,
    /// Evaluate every formula once at bind time
    pub evaluate_on_bind: bool,
}

impl Default for BindOptions {
    fn default() -> Self {
        Self {
            error_text: ERROR_TEXT.to_string(),
            precision: DEFAULT_PRECISION,
            evaluate_on_bind: true,
        }
    }
}

/// Statistics from a bind run
#[derive(Debug, Clone, Default)]
pub struct BindStats {
    /// Total number of formula elements
    pub formula_count: usize,
    /// Elements bound to at least one input field
    pub bound: usize,
    /// Elements with no free variables (evaluated once, never refreshed)
    pub constants: usize,
    /// Elements that failed setup or initial evaluation
    pub errors: usize,
}

/// The binding engine
///
/// Built by scanning a page once. Holds the parsed expression of every
/// element that survived setup and the input → dependents table used for
/// incremental refresh. An element that failed setup (missing attribute,
/// parse failure, unresolvable variable) stays unbound until the page is
/// bound again.
pub struct Binder {
    options: BindOptions,
    /// Parsed expressions, keyed by formula element
    parsed: AHashMap<FormulaKey, Expr>,
    /// Input id → formula elements bound to it
    dependents: AHashMap<String, AHashSet<FormulaKey>>,
}

impl Binder {
    /// Bind a page with default options
    pub fn bind(page: &mut Page) -> (Self, BindStats) {
        Self::bind_with_options(page, BindOptions::default())
    }

    /// Bind a page with custom options
    pub fn bind_with_options(page: &mut Page, options: BindOptions) -> (Self, BindStats) {
        let mut binder = Self {
            options,
            parsed: AHashMap::new(),
            dependents: AHashMap::new(),
        };

        let mut stats = BindStats::default();
        let keys: Vec<FormulaKey> = page.formulas().map(|(key, _)| key).collect();
        stats.formula_count = keys.len();

        for key in keys {
            binder.setup_formula(page, key, &mut stats);
        }

        (binder, stats)
    }

    /// Set up one formula element: parse, resolve variables, register, render
    fn setup_formula(&mut self, page: &mut Page, key: FormulaKey, stats: &mut BindStats) {
        let expression = match page.formula(key).and_then(|f| f.expression()) {
            Some(text) => text.to_string(),
            None => {
                tracing::warn!("Formula element {} has no evaluator attribute", key.index());
                self.render_error(page, key);
                stats.errors += 1;
                return;
            }
        };

        let ast = match parse_expression(&expression) {
            Ok(ast) => ast,
            Err(e) => {
                tracing::warn!("Failed to parse formula '{}': {}", expression, e);
                self.render_error(page, key);
                stats.errors += 1;
                return;
            }
        };

        // Every free variable must resolve to an input field before the
        // element is registered; a miss leaves it unbound for good.
        let vars: Vec<String> = variables(&ast).iter().map(|s| s.to_string()).collect();
        for name in &vars {
            if !page.has_input(name) {
                tracing::warn!("Formula '{}' references unknown input '{}'", expression, name);
                self.render_error(page, key);
                stats.errors += 1;
                return;
            }
        }

        if vars.is_empty() {
            stats.constants += 1;
        } else {
            for name in vars {
                self.dependents.entry(name).or_default().insert(key);
            }
            stats.bound += 1;
        }
        self.parsed.insert(key, ast);
        tracing::debug!("Bound formula element {}: '{}'", key.index(), expression);

        if self.options.evaluate_on_bind && !self.evaluate_formula(page, key) {
            stats.errors += 1;
        }
    }

    /// Replace an input field's value and refresh its dependent elements
    ///
    /// Returns the number of elements refreshed. Fails when no input field
    /// with this id exists. Inputs no formula references refresh nothing.
    pub fn set_value<V: Into<String>>(&self, page: &mut Page, id: &str, value: V) -> Result<usize> {
        page.set_input_value(id, value)?;

        let mut keys: Vec<FormulaKey> = self.dependents(id).collect();
        keys.sort_by_key(|key| key.index());

        for &key in &keys {
            self.evaluate_formula(page, key);
        }

        Ok(keys.len())
    }

    /// Re-evaluate every element that survived setup
    ///
    /// Returns the number of elements refreshed.
    pub fn refresh_all(&self, page: &mut Page) -> usize {
        let mut keys: Vec<FormulaKey> = self.parsed.keys().copied().collect();
        keys.sort_by_key(|key| key.index());

        for &key in &keys {
            self.evaluate_formula(page, key);
        }

        keys.len()
    }

    /// Formula elements bound to the given input field
    pub fn dependents(&self, id: &str) -> impl Iterator<Item = FormulaKey> + '_ {
        self.dependents
            .get(id)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Check whether an element survived setup
    pub fn is_bound(&self, key: FormulaKey) -> bool {
        self.parsed.contains_key(&key)
    }

    /// The options this binder was built with
    pub fn options(&self) -> &BindOptions {
        &self.options
    }

    /// Evaluate one element and render its display text
    ///
    /// Returns false when the element rendered the error state. Non-finite
    /// results (division by zero and friends) never reach the display.
    fn evaluate_formula(&self, page: &mut Page, key: FormulaKey) -> bool {
        let ast = match self.parsed.get(&key) {
            Some(ast) => ast,
            None => return false,
        };

        let result = evaluate(ast, &EvalContext::new(page));
        match result {
            Ok(value) if value.is_finite() => {
                let text = format_number(value, self.options.precision);
                if let Some(formula) = page.formula_mut(key) {
                    formula.set_text(text);
                }
                true
            }
            Ok(value) => {
                tracing::debug!(
                    "Formula element {} produced non-finite result {}",
                    key.index(),
                    value
                );
                self.render_error(page, key);
                false
            }
            Err(e) => {
                tracing::debug!("Formula element {} failed to evaluate: {}", key.index(), e);
                self.render_error(page, key);
                false
            }
        }
    }

    fn render_error(&self, page: &mut Page, key: FormulaKey) {
        if let Some(formula) = page.formula_mut(key) {
            formula.set_error(self.options.error_text.clone());
        }
    }
}

/// Extension trait for Page to add binding methods
pub trait PageBindingExt {
    /// Bind all formula elements with default options
    fn bind(&mut self) -> (Binder, BindStats);

    /// Bind all formula elements with custom options
    fn bind_with_options(&mut self, options: BindOptions) -> (Binder, BindStats);
}

impl PageBindingExt for Page {
    fn bind(&mut self) -> (Binder, BindStats) {
        Binder::bind(self)
    }

    fn bind_with_options(&mut self, options: BindOptions) -> (Binder, BindStats) {
        Binder::bind_with_options(self, options)
    }
}
