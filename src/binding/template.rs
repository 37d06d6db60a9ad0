//! Template Resolution - `{{ }}` substitution over request text
//!
//! Single-pass scan with `Cow<str>`: text without expressions is returned
//! borrowed. Doubled delimiters (`{{{{ ... }}}}`) are the escape form and
//! re-render as literal `{{ ... }}` text via `EscapedExpressionNode`,
//! without evaluating the expression.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use smallvec::SmallVec;
use tracing::trace;

use crate::ast::{EscapedExpressionNode, ExpressionNode};
use crate::error::{ReqwireError, Result};
use crate::store::RequestRegistry;

/// Pre-compiled scanner: escaped `{{{{ ... }}}}` first, then plain `{{ ... }}`.
static EXPRESSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\{\{\s*(?P<escaped>[^{}]+?)\s*\}\}\}\}|\{\{\s*(?P<expr>[^{}]+?)\s*\}\}")
        .unwrap()
});

/// Resolve every embedded expression in `text` against `registry`.
///
/// Returns `Cow::Borrowed` when the text contains no delimiters. The first
/// failing expression aborts the render with its diagnostic; unknown request
/// names are collected across the whole text and reported together.
pub fn render<'a>(text: &'a str, registry: &RequestRegistry) -> Result<Cow<'a, str>> {
    // Early return with borrowed string (zero alloc)
    if !text.contains("{{") {
        return Ok(Cow::Borrowed(text));
    }

    let mut result = String::with_capacity(text.len() + 64);
    let mut last_end = 0;
    let mut unknown: SmallVec<[String; 4]> = SmallVec::new();

    for cap in EXPRESSION_RE.captures_iter(text) {
        let matched = cap.get(0).unwrap();
        result.push_str(&text[last_end..matched.start()]);
        last_end = matched.end();

        if let Some(escaped) = cap.name("escaped") {
            let node = EscapedExpressionNode::new(ExpressionNode::new(escaped.as_str()));
            result.push_str(&node.resolve());
            continue;
        }

        let expression = ExpressionNode::new(cap.name("expr").unwrap().as_str());
        let segments = expression.segments();
        match registry.get(segments[0]) {
            Some(named) => {
                let value = named.resolve_path(&segments, &expression).into_result()?;
                trace!(expression = %expression.text(), "resolved embedded expression");
                result.push_str(&value);
            }
            None => unknown.push(segments[0].to_string()),
        }
    }

    if !unknown.is_empty() {
        return Err(ReqwireError::UnknownNamedRequest {
            name: unknown.join(", "),
        });
    }

    result.push_str(&text[last_end..]);
    Ok(Cow::Owned(result))
}

/// Extract the evaluable expressions from `text` (escaped occurrences are
/// skipped). For static validation before any request has run.
pub fn expressions(text: &str) -> Vec<ExpressionNode> {
    EXPRESSION_RE
        .captures_iter(text)
        .filter_map(|cap| cap.name("expr"))
        .map(|m| ExpressionNode::new(m.as_str()))
        .collect()
}
