//! Value-expression subtrees.

/// A value-expression subtree attached to a rule, media feature list or
/// mixin argument.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueExpression {
    /// Terminal raw text (also covers anonymous values).
    Literal(String),
    /// A reference to a named binding. Holds the name, never the bound
    /// value; this engine does not perform variable substitution.
    NamedReference(String),
    /// An operator expression over ordered operands.
    Operation {
        operands: Vec<ValueExpression>,
        operator: String,
    },
    /// A grouping wrapper around exactly one nested expression.
    Wrapper(Box<ValueExpression>),
}

impl ValueExpression {
    /// Render this expression back to its defining source form.
    ///
    /// Used for variable bindings, where the defining text is itself
    /// meaningful and must not be reduced.
    pub fn to_source(&self) -> String {
        match self {
            Self::Literal(text) => text.clone(),
            Self::NamedReference(name) => name.clone(),
            Self::Operation { operands, operator } => operands
                .iter()
                .map(ValueExpression::to_source)
                .collect::<Vec<_>>()
                .join(&format!(" {operator} ")),
            Self::Wrapper(inner) => format!("({})", inner.to_source()),
        }
    }
}
