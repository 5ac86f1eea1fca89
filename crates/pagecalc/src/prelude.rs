//! Prelude module - common imports for pagecalc users
//!
//! ```rust
//! use pagecalc::prelude::*;
//! ```

pub use crate::{
    // Binding types
    BindOptions,
    BindStats,
    Binder,

    // Error types
    Error,
    // Element types
    FormulaElement,
    FormulaKey,

    // I/O types
    HtmlReader,
    HtmlWriter,

    InputField,
    // Main type
    Page,
    // Extension traits
    PageBindingExt,
    PageExt,

    Result,
};
