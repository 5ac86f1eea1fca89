//! # pagecalc
//!
//! A Rust library for binding live arithmetic formulas to page input fields.
//!
//! Pagecalc reads pages whose `<formula>` elements carry an arithmetic
//! expression in their `evaluator` attribute, binds each expression's free
//! variables to the page's `<input>` fields by id, renders the result as the
//! element's text, and re-renders affected elements whenever a bound input
//! value changes. Elements that cannot be set up or evaluated display
//! "Invalid Formula" in an error state.
//!
//! ## Example
//!
//! ```rust
//! use pagecalc::prelude::*;
//!
//! let mut page = HtmlReader::read_str(
//!     r#"<html><body>
//!         <input id="price" value="10"/>
//!         <input id="qty" value="3"/>
//!         <formula evaluator="price*qty"></formula>
//!     </body></html>"#,
//! ).unwrap();
//!
//! let (binder, _stats) = page.bind();
//! let key = page.formulas().next().unwrap().0;
//! assert_eq!(page.formula(key).unwrap().text(), "30");
//!
//! binder.set_value(&mut page, "qty", "5").unwrap();
//! assert_eq!(page.formula(key).unwrap().text(), "50");
//! ```

pub mod binding;
pub mod prelude;

// Re-export binding types
pub use binding::{BindOptions, BindStats, Binder, PageBindingExt};

// Re-export core types
pub use pagecalc_core::{
    format_number,
    parse_number,
    // Error types
    Error,
    // Element types
    FormulaElement,
    FormulaKey,
    InputField,
    // Main type
    Page,

    Result,

    DEFAULT_PRECISION,
    ERROR_COLOR,
    // Constants
    ERROR_TEXT,
};

// Re-export expression types
pub use pagecalc_expr::{
    evaluate, parse_expression, variables, BinaryOperator, EvalContext, Expr, ExprError,
    ExprResult, UnaryOperator,
};

// Re-export I/O types
pub use pagecalc_html::{HtmlError, HtmlReader, HtmlWriter};

use std::path::Path;

/// Extension trait for Page to add file I/O
pub trait PageExt {
    /// Open a page from a file
    fn open<P: AsRef<Path>>(path: P) -> Result<Page>;

    /// Save the page to a file
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

impl PageExt for Page {
    fn open<P: AsRef<Path>>(path: P) -> Result<Page> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("html") | Some("htm") | Some("xhtml") => {
                HtmlReader::read_file(path).map_err(|e| Error::other(e.to_string()))
            }
            _ => Err(Error::other(format!(
                "Unsupported file format: {}",
                path.display()
            ))),
        }
    }

    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("html") | Some("htm") | Some("xhtml") => {
                HtmlWriter::write_file(self, path).map_err(|e| Error::other(e.to_string()))
            }
            _ => Err(Error::other(format!(
                "Unsupported file format: {}",
                path.display()
            ))),
        }
    }
}
