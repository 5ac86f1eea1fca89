//! Free-variable extraction for input binding

use crate::ast::Expr;

/// Extract the free variables of an expression
///
/// Returns variable names in first-occurrence order, deduplicated. The
/// binding engine resolves each name to an input field on the page.
pub fn variables(expr: &Expr) -> Vec<&str> {
    let mut names = Vec::new();
    collect_variables(expr, &mut names);
    names
}

fn collect_variables<'a>(expr: &'a Expr, names: &mut Vec<&'a str>) {
    match expr {
        Expr::Variable(name) => {
            if !names.contains(&name.as_str()) {
                names.push(name);
            }
        }
        Expr::UnaryOp { operand, .. } => collect_variables(operand, names),
        Expr::BinaryOp { left, right, .. } => {
            collect_variables(left, names);
            collect_variables(right, names);
        }
        Expr::Number(_) => {}
    }
}
