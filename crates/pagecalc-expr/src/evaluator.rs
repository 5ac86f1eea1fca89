//! Expression evaluator
//!
//! Evaluates expression ASTs against the input fields of a page.

use crate::ast::{BinaryOperator, Expr, UnaryOperator};
use crate::error::{ExprError, ExprResult};
use pagecalc_core::Page;

/// Context for expression evaluation
///
/// Variables resolve to the numeric values of the page's input fields.
/// Division and remainder by zero do not fail here; they produce non-finite
/// values that callers reject at render time.
pub struct EvalContext<'a> {
    /// Reference to the page for input field lookups
    pub page: Option<&'a Page>,
}

impl<'a> EvalContext<'a> {
    /// Create a new evaluation context
    pub fn new(page: &'a Page) -> Self {
        Self { page: Some(page) }
    }

    /// Create a context without a page (for testing)
    pub fn simple() -> Self {
        Self { page: None }
    }

    /// Resolve a variable to the numeric value of its input field
    pub fn lookup(&self, name: &str) -> ExprResult<f64> {
        let page = self
            .page
            .ok_or_else(|| ExprError::UnknownVariable(name.to_string()))?;

        let field = page
            .input(name)
            .ok_or_else(|| ExprError::UnknownVariable(name.to_string()))?;

        field
            .numeric()
            .ok_or_else(|| ExprError::NotNumeric(name.to_string()))
    }
}

/// Evaluate an expression
pub fn evaluate(expr: &Expr, ctx: &EvalContext) -> ExprResult<f64> {
    match expr {
        Expr::Number(n) => Ok(*n),

        Expr::Variable(name) => ctx.lookup(name),

        Expr::UnaryOp { op, operand } => {
            let value = evaluate(operand, ctx)?;
            Ok(match op {
                UnaryOperator::Negate => -value,
            })
        }

        Expr::BinaryOp { op, left, right } => {
            let left = evaluate(left, ctx)?;
            let right = evaluate(right, ctx)?;
            Ok(match op {
                BinaryOperator::Add => left + right,
                BinaryOperator::Subtract => left - right,
                BinaryOperator::Multiply => left * right,
                BinaryOperator::Divide => left / right,
                BinaryOperator::Remainder => left % right,
                BinaryOperator::Power => left.powf(right),
            })
        }
    }
}
