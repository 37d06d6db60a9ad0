//! Request nodes - the request-side parse tree handed over by the parser

/// Body sub-node of a request. Holds the authored body text verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyNode {
    pub text: String,
}

impl BodyNode {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// One header line of a request. A header may be valueless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderNode {
    pub name: String,
    pub value: Option<String>,
}

impl HeaderNode {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    pub fn valueless(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }
}

/// Headers sub-node: ordered header lines, names may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadersNode {
    pub headers: Vec<HeaderNode>,
}

impl HeadersNode {
    pub fn new(headers: Vec<HeaderNode>) -> Self {
        Self { headers }
    }
}

/// Trailing comment that names a request for later reference.
///
/// The parser only attaches one when the comment actually carries a name,
/// so the name here is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentNode {
    pub name: String,
}

impl CommentNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A parsed request: optional body, optional headers, optional name comment.
///
/// Requests without a name comment cannot be referenced by expressions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestNode {
    pub body: Option<BodyNode>,
    pub headers: Option<HeadersNode>,
    pub name_comment: Option<CommentNode>,
}

impl RequestNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, text: impl Into<String>) -> Self {
        self.body = Some(BodyNode::new(text));
        self
    }

    pub fn with_headers(mut self, headers: Vec<HeaderNode>) -> Self {
        self.headers = Some(HeadersNode::new(headers));
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name_comment = Some(CommentNode::new(name));
        self
    }

    /// The name this request can be referenced by, if any.
    pub fn name(&self) -> Option<&str> {
        self.name_comment.as_ref().map(|c| c.name.as_str())
    }
}
