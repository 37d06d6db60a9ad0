//! XML sub-resolver - single-node query over a parsed document
//!
//! The `//...` selector carries one leading slash of pure expression syntax;
//! what remains is an absolute element path evaluated from the document
//! root (`//root/id` reads element `root`, child `id`). The query must match
//! exactly one node; its text content is the bound value.

use roxmltree::{Document, Node};

use crate::error::ReqwireError;

use super::result::BindingResult;

/// Evaluate `query` (with its `//` prefix still attached) against `text`.
///
/// `full_path` is the dotted expression path, used for the content
/// diagnostic when the document itself does not parse.
pub(crate) fn resolve_query(text: &str, query: &str, full_path: &str) -> BindingResult<String> {
    let document = match Document::parse(text) {
        Ok(document) => document,
        Err(_) => {
            return BindingResult::failure(ReqwireError::InvalidContentInNamedRequest {
                path: full_path.to_string(),
            });
        }
    };

    let matches = select_nodes(&document, query);
    match matches.as_slice() {
        [node] => BindingResult::success(node.text().unwrap_or_default().to_string()),
        _ => BindingResult::failure(ReqwireError::InvalidXmlNodeInNamedRequest {
            query: query.to_string(),
        }),
    }
}

/// Collect the elements matched by an absolute element path.
fn select_nodes<'a, 'input>(
    document: &'a Document<'input>,
    query: &str,
) -> Vec<Node<'a, 'input>> {
    let mut steps = query.trim_start_matches('/').split('/');

    let root = document.root_element();
    let mut matches: Vec<Node> = match steps.next() {
        Some(step) if !step.is_empty() && root.tag_name().name() == step => vec![root],
        _ => return Vec::new(),
    };

    for step in steps {
        if step.is_empty() {
            return Vec::new();
        }
        let mut next = Vec::new();
        for node in &matches {
            for child in node.children() {
                if child.is_element() && child.tag_name().name() == step {
                    next.push(child);
                }
            }
        }
        matches = next;
    }

    matches
}
