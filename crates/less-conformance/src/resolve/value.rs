//! Reduction of value-expression subtrees to human-meaningful scalars.
//!
//! This is a documented best-effort algorithm: it surfaces what a value
//! *looks like*, it does not evaluate it. Named references reduce to their
//! name, not their bound value, and operator expressions reduce to an
//! approximation of their source form rather than an arithmetic result.

use crate::ast::ValueExpression;

/// Reduce a single value expression to a scalar string.
///
/// Descends through wrappers until a terminal is reached. Returns `None`
/// when the expression cannot be reduced (an operation with no operands);
/// callers treat that as a non-fatal, diagnosable condition.
pub fn resolve(expr: &ValueExpression) -> Option<String> {
    match expr {
        ValueExpression::Wrapper(inner) => resolve(inner),
        ValueExpression::Literal(text) => Some(text.clone()),
        ValueExpression::NamedReference(name) => Some(name.clone()),
        ValueExpression::Operation { operands, operator } => {
            // Approximation: first operand plus the operator's own source
            // rendering. Intentionally not arithmetic evaluation.
            let first = resolve(operands.first()?)?;
            Some(format!("{first} {operator}"))
        }
    }
}

/// Reduce an ordered sequence of expressions and join the results with
/// `", "`.
///
/// Irreducible entries are dropped with a diagnostic; a dropped entry
/// never fails the whole list.
pub fn resolve_list(exprs: &[ValueExpression]) -> String {
    exprs
        .iter()
        .filter_map(|expr| {
            let resolved = resolve(expr);
            if resolved.is_none() {
                tracing::warn!("cannot find leaf value for expression: {:?}", expr);
            }
            resolved
        })
        .collect::<Vec<_>>()
        .join(", ")
}
