//! JSON sub-resolver - member descent over a parsed document
//!
//! Descent is an explicit loop over (node, segment) pairs, so selector depth
//! never grows the stack. Per-shape behavior:
//! - array: first element whose member at the current segment is present and
//!   non-null
//! - object: single-level member select, with an optional `name[idx]` index
//!   suffix
//! - scalar: the node itself passes through unchanged
//!
//! `None` from this module means "nothing bound here"; the dispatcher maps it
//! onto the content diagnostic for the full path.

use serde_json::Value;

/// Walk `segments` down from `root`, returning the textual representation of
/// the resolved node.
///
/// An empty segment list is the root reference: the whole document.
/// A `null` at the terminal segment counts as absent.
pub(crate) fn resolve_segments(root: &Value, segments: &[String]) -> Option<String> {
    if segments.is_empty() {
        return value_text(root);
    }

    let mut node = root;
    for (index, segment) in segments.iter().enumerate() {
        let child = match node {
            Value::Array(items) => items.iter().find_map(|item| {
                item.get(segment.as_str()).filter(|value| !value.is_null())
            }),
            Value::Object(_) => select_member(node, segment),
            _ => Some(node),
        };

        if index + 1 == segments.len() {
            return child.and_then(value_text);
        }

        node = child?;
    }

    unreachable!("loop returns at the terminal segment")
}

/// Single-level member select: `name` or `name[idx]`.
fn select_member<'a>(node: &'a Value, segment: &str) -> Option<&'a Value> {
    match segment.find('[') {
        Some(bracket) if segment.ends_with(']') => {
            let name = &segment[..bracket];
            let index: usize = segment[bracket + 1..segment.len() - 1].parse().ok()?;
            let member = if name.is_empty() {
                node
            } else {
                node.get(name)?
            };
            member.get(index)
        }
        _ => node.get(segment),
    }
}

/// Textual representation: strings unquoted, containers as compact JSON.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn segs(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn member_select_number() {
        let doc = json!({"id": 42, "tags": ["a", "b"]});
        assert_eq!(resolve_segments(&doc, &segs(&["id"])), Some("42".into()));
    }

    #[test]
    fn member_select_string_is_unquoted() {
        let doc = json!({"status": "shipped"});
        assert_eq!(
            resolve_segments(&doc, &segs(&["status"])),
            Some("shipped".into())
        );
    }

    #[test]
    fn nested_member_select() {
        let doc = json!({"order": {"customer": {"name": "Ada"}}});
        assert_eq!(
            resolve_segments(&doc, &segs(&["order", "customer", "name"])),
            Some("Ada".into())
        );
    }

    #[test]
    fn container_renders_as_compact_json() {
        let doc = json!({"tags": ["a", "b"]});
        assert_eq!(
            resolve_segments(&doc, &segs(&["tags"])),
            Some(r#"["a","b"]"#.into())
        );
    }

    #[test]
    fn array_takes_first_element_containing_member() {
        let doc = json!([{"a": 1}, {"b": 2}, {"b": 3}]);
        assert_eq!(resolve_segments(&doc, &segs(&["b"])), Some("2".into()));
    }

    #[test]
    fn array_skips_elements_with_null_member() {
        let doc = json!([{"b": null}, {"b": 7}]);
        assert_eq!(resolve_segments(&doc, &segs(&["b"])), Some("7".into()));
    }

    #[test]
    fn array_descent_continues_into_match() {
        let doc = json!({"items": [{"sku": {"id": "X1"}}]});
        assert_eq!(
            resolve_segments(&doc, &segs(&["items", "sku", "id"])),
            Some("X1".into())
        );
    }

    #[test]
    fn scalar_passes_through_extra_segments() {
        // A leaf swallows remaining segments; the final step still resolves
        // to the leaf itself.
        let doc = json!({"id": 42});
        assert_eq!(
            resolve_segments(&doc, &segs(&["id", "anything"])),
            Some("42".into())
        );
    }

    #[test]
    fn missing_member_is_absent() {
        let doc = json!({"id": 42});
        assert_eq!(resolve_segments(&doc, &segs(&["missing"])), None);
    }

    #[test]
    fn missing_member_mid_path_is_absent() {
        let doc = json!({"order": {"id": 1}});
        assert_eq!(
            resolve_segments(&doc, &segs(&["missing", "id"])),
            None
        );
    }

    #[test]
    fn null_member_is_absent() {
        let doc = json!({"id": null});
        assert_eq!(resolve_segments(&doc, &segs(&["id"])), None);
    }

    #[test]
    fn empty_segments_return_whole_document() {
        let doc = json!({"id": 42});
        assert_eq!(
            resolve_segments(&doc, &[]),
            Some(r#"{"id":42}"#.into())
        );
    }

    #[test]
    fn index_suffix_selects_array_element() {
        let doc = json!({"tags": ["a", "b"]});
        assert_eq!(
            resolve_segments(&doc, &segs(&["tags[1]"])),
            Some("b".into())
        );
    }

    #[test]
    fn index_suffix_out_of_bounds_is_absent() {
        let doc = json!({"tags": ["a"]});
        assert_eq!(resolve_segments(&doc, &segs(&["tags[5]"])), None);
    }

    #[test]
    fn booleans_render_bare() {
        let doc = json!({"ok": true});
        assert_eq!(resolve_segments(&doc, &segs(&["ok"])), Some("true".into()));
    }
}
