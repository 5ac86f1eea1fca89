//! # pagecalc-expr
//!
//! Expression parser and evaluator for pagecalc.
//!
//! This crate provides:
//! - Expression parsing (attribute text → AST)
//! - Expression evaluation (AST → number)
//! - Free-variable extraction for input binding
//!
//! The language is the arithmetic subset formula attributes use: decimal
//! numbers, identifiers, `+ - * / %`, right-associative `^` for power,
//! unary minus, and parentheses. Every identifier is a free variable; there
//! are no function calls.
//!
//! ## Example
//!
//! ```rust
//! use pagecalc_expr::{evaluate, parse_expression, variables, EvalContext};
//!
//! let ast = parse_expression("a + b * 2").unwrap();
//! assert_eq!(variables(&ast), vec!["a", "b"]);
//!
//! let mut page = pagecalc_core::Page::new();
//! page.add_input("a", "1").unwrap();
//! page.add_input("b", "3").unwrap();
//! let result = evaluate(&ast, &EvalContext::new(&page)).unwrap();
//! assert_eq!(result, 7.0);
//! ```

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod parser;
pub mod vars;

pub use ast::{BinaryOperator, Expr, UnaryOperator};
pub use error::{ExprError, ExprResult};
pub use evaluator::{evaluate, EvalContext};
pub use parser::parse_expression;
pub use vars::variables;
