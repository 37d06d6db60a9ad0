//! Path grammar - dotted expression segments -> tagged RequestPath
//!
//! The grammar is positional:
//! ```text
//! <name>.<request|response>.<body|headers>.<selector>[.<value>]
//! ```
//! Parsing produces a tagged structure instead of indexing the raw segment
//! sequence, so downstream dispatch never touches magic offsets.

/// Which side of the exchange the path reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Request,
    Response,
}

/// Selector applied to a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodySelector {
    /// `*` - the raw text, verbatim.
    Raw,
    /// `$` - JSON member segments following the root marker.
    Json(Vec<String>),
    /// `//...` - a single-node XML query.
    Xml(String),
}

/// Selector applied to headers: a name, optionally with a required value.
///
/// The required value only participates on the response side; the request
/// side resolves by name alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSelector {
    pub name: String,
    pub exact_value: Option<String>,
}

/// What the path selects within the chosen source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Body(BodySelector),
    Headers(HeaderSelector),
}

/// A fully parsed named request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestPath {
    pub request_name: String,
    pub source: Source,
    pub target: Target,
}

/// Fixed positions below this count can never form a valid path.
const MIN_SEGMENTS: usize = 4;

impl RequestPath {
    /// Parse a segment sequence into a tagged path.
    ///
    /// Returns `None` for anything outside the grammar: fewer than four
    /// segments, an unrecognized token at a fixed position, or trailing
    /// segments where the grammar has no position for them. Trailing
    /// segments after a `*` or `//...` body selector are ignored.
    pub fn parse(segments: &[&str]) -> Option<Self> {
        if segments.len() < MIN_SEGMENTS {
            return None;
        }

        let source = match segments[1] {
            "request" => Source::Request,
            "response" => Source::Response,
            _ => return None,
        };

        let target = match segments[2] {
            "body" => Target::Body(Self::parse_body_selector(&segments[3..])?),
            "headers" => Target::Headers(Self::parse_header_selector(&segments[3..])?),
            _ => return None,
        };

        Some(RequestPath {
            request_name: segments[0].to_string(),
            source,
            target,
        })
    }

    fn parse_body_selector(selector: &[&str]) -> Option<BodySelector> {
        match selector[0] {
            "*" => Some(BodySelector::Raw),
            "$" => Some(BodySelector::Json(
                selector[1..].iter().map(|s| s.to_string()).collect(),
            )),
            query if query.starts_with("//") => Some(BodySelector::Xml(query.to_string())),
            _ => None,
        }
    }

    fn parse_header_selector(selector: &[&str]) -> Option<HeaderSelector> {
        match selector {
            [name] => Some(HeaderSelector {
                name: name.to_string(),
                exact_value: None,
            }),
            [name, value] => Some(HeaderSelector {
                name: name.to_string(),
                exact_value: Some(value.to_string()),
            }),
            _ => None,
        }
    }
}
