//! # pagecalc-html
//!
//! Markup reading and writing for pagecalc.
//!
//! Pages are a well-formed XML subset of HTML. The reader collects
//! `<input>` elements carrying an `id` attribute and `<formula>` elements
//! (whose `evaluator` attribute holds the expression) into a
//! [`Page`](pagecalc_core::Page); all other markup is ignored. The writer
//! emits a normalized standalone document with the current display state.
//!
//! ## Example
//!
//! ```rust
//! use pagecalc_html::HtmlReader;
//!
//! let page = HtmlReader::read_str(
//!     r#"<html><body>
//!         <input id="a" value="2"/>
//!         <formula evaluator="a*3"></formula>
//!     </body></html>"#,
//! ).unwrap();
//!
//! assert_eq!(page.input_count(), 1);
//! assert_eq!(page.formula_count(), 1);
//! ```

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{HtmlError, HtmlResult};
pub use reader::HtmlReader;
pub use writer::HtmlWriter;
