//! Expression nodes - embedded `{{ }}` expressions and their escaped form

/// The raw text of one embedded `{{ }}` expression.
///
/// Immutable once constructed; owned by the surrounding syntax tree and
/// read-only to the resolution engine. The text is the trimmed content
/// between the delimiters, e.g. `order1.response.body.$.id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionNode {
    text: String,
}

impl ExpressionNode {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The expression source text, without delimiters.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The dotted path segments of this expression.
    ///
    /// Splitting is purely positional; segment meaning is assigned by the
    /// path parser in `binding::path`.
    pub fn segments(&self) -> Vec<&str> {
        self.text.split('.').collect()
    }
}

/// An embedded expression that must be emitted literally, never evaluated.
///
/// The wrapped expression is required at construction, so a half-built
/// escape node cannot exist and `resolve` is total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapedExpressionNode {
    expression: ExpressionNode,
}

impl EscapedExpressionNode {
    pub fn new(expression: ExpressionNode) -> Self {
        Self { expression }
    }

    pub fn expression(&self) -> &ExpressionNode {
        &self.expression
    }

    /// Reproduce the literal `{{ ... }}` text of the wrapped expression.
    pub fn resolve(&self) -> String {
        format!("{{{{ {} }}}}", self.expression.text())
    }
}
