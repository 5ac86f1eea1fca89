//! # pagecalc-core
//!
//! Core data structures for the pagecalc formula binding library.
//!
//! This crate provides the fundamental types used throughout pagecalc:
//! - [`Page`] - The document: input fields and formula elements
//! - [`InputField`] - A named input field holding a raw text value
//! - [`FormulaElement`] - A formula-bearing element with display text
//! - [`FormulaKey`] - Copyable handle for a formula element
//!
//! ## Example
//!
//! ```rust
//! use pagecalc_core::{FormulaElement, Page};
//!
//! let mut page = Page::new();
//! page.add_input("price", "12.50").unwrap();
//! page.add_input("qty", "3").unwrap();
//!
//! let key = page.add_formula(FormulaElement::new(Some("price*qty".into())));
//! assert_eq!(page.formula(key).unwrap().expression(), Some("price*qty"));
//! ```

pub mod element;
pub mod error;
pub mod input;
pub mod page;
pub mod value;

// Re-exports for convenience
pub use element::{FormulaElement, FormulaKey};
pub use error::{Error, Result};
pub use input::InputField;
pub use page::Page;
pub use value::{format_number, parse_number};

/// Text displayed by a formula element in the error state
pub const ERROR_TEXT: &str = "Invalid Formula";

/// Color applied to a formula element in the error state
pub const ERROR_COLOR: &str = "#ff4444";

/// Default number of decimal places for non-integral results
pub const DEFAULT_PRECISION: usize = 2;
