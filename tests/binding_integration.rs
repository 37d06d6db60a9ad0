//! Integration tests for expression binding
//!
//! Tests the full pipeline: captured request/response → RequestRegistry →
//! template rendering of request text.

use pretty_assertions::assert_eq;
use reqwire::{
    render, HeaderNode, NamedRequest, RequestNode, RequestRegistry, Response,
};

fn capture(registry: &mut RequestRegistry, request: RequestNode, response: Response) {
    assert!(registry.insert(NamedRequest::new(request, response)));
}

// ═══════════════════════════════════════════════════════════════
// Full Pipeline Tests
// ═══════════════════════════════════════════════════════════════

#[test]
fn full_pipeline_json_member() {
    // 1. Execute a named request (externally) and capture it
    let request = RequestNode::new()
        .with_name("create_order")
        .with_body(r#"{"sku": "X1", "qty": 2}"#);
    let response = Response::new()
        .with_content(r#"{"id": 42, "status": "created"}"#, Some("application/json"));

    let mut registry = RequestRegistry::new();
    capture(&mut registry, request, response);

    // 2. Render a follow-up request that references it
    let text = "GET /orders/{{ create_order.response.body.$.id }} HTTP/1.1";
    let rendered = render(text, &registry).unwrap();
    assert_eq!(rendered, "GET /orders/42 HTTP/1.1");
}

#[test]
fn full_pipeline_request_side_echo() {
    let request = RequestNode::new()
        .with_name("login")
        .with_body(r#"{"user": "ada"}"#)
        .with_headers(vec![HeaderNode::new("X-Client", "cli/1.0")]);
    let mut registry = RequestRegistry::new();
    capture(&mut registry, request, Response::new());

    let body = render("{{ login.request.body.* }}", &registry).unwrap();
    assert_eq!(body, r#"{"user": "ada"}"#);

    let header = render("{{ login.request.headers.X-Client }}", &registry).unwrap();
    assert_eq!(header, "cli/1.0");
}

#[test]
fn full_pipeline_xml_response() {
    let request = RequestNode::new().with_name("lookup");
    let response = Response::new().with_content(
        "<result><code>A-17</code></result>",
        Some("application/xml"),
    );
    let mut registry = RequestRegistry::new();
    capture(&mut registry, request, response);

    let rendered = render("code={{ lookup.response.body.//result/code }}", &registry).unwrap();
    assert_eq!(rendered, "code=A-17");
}

#[test]
fn full_pipeline_response_headers() {
    let request = RequestNode::new().with_name("create");
    let response = Response::new()
        .with_header("Location", "/items/9")
        .with_header("Set-Cookie", "session=abc")
        .with_header("Set-Cookie", "theme=dark");
    let mut registry = RequestRegistry::new();
    capture(&mut registry, request, response);

    let first = render("{{ create.response.headers.Set-Cookie }}", &registry).unwrap();
    assert_eq!(first, "session=abc");

    let exact = render(
        "{{ create.response.headers.Set-Cookie.theme=dark }}",
        &registry,
    )
    .unwrap();
    assert_eq!(exact, "theme=dark");
}

#[test]
fn multiple_named_requests_in_one_text() {
    let mut registry = RequestRegistry::new();
    capture(
        &mut registry,
        RequestNode::new().with_name("a"),
        Response::new().with_content(r#"{"v": 1}"#, Some("application/json")),
    );
    capture(
        &mut registry,
        RequestNode::new().with_name("b"),
        Response::new().with_content(r#"{"v": 2}"#, Some("application/json")),
    );

    let rendered = render(
        "{{ a.response.body.$.v }}+{{ b.response.body.$.v }}",
        &registry,
    )
    .unwrap();
    assert_eq!(rendered, "1+2");
}

// ═══════════════════════════════════════════════════════════════
// Failure Modes Through The Pipeline
// ═══════════════════════════════════════════════════════════════

#[test]
fn content_type_mismatch_surfaces_from_render() {
    let request = RequestNode::new().with_name("plain");
    let response = Response::new().with_content("just text", Some("text/plain"));
    let mut registry = RequestRegistry::new();
    capture(&mut registry, request, response);

    let result = render("{{ plain.response.body.$.anything }}", &registry);
    assert_eq!(result.unwrap_err().code(), "REQWIRE-046");
}

#[test]
fn ambiguous_xml_query_surfaces_from_render() {
    let request = RequestNode::new().with_name("multi");
    let response = Response::new().with_content(
        "<items><item>1</item><item>2</item></items>",
        Some("application/xml"),
    );
    let mut registry = RequestRegistry::new();
    capture(&mut registry, request, response);

    let result = render("{{ multi.response.body.//items/item }}", &registry);
    assert_eq!(result.unwrap_err().code(), "REQWIRE-047");
}

#[test]
fn unnamed_requests_never_enter_the_registry() {
    let mut registry = RequestRegistry::new();
    let unnamed = NamedRequest::new(
        RequestNode::new().with_body("{}"),
        Response::new().with_content("{}", Some("application/json")),
    );
    assert!(!registry.insert(unnamed));

    let result = render("{{ anything.response.body.* }}", &registry);
    assert_eq!(result.unwrap_err().code(), "REQWIRE-001");
}

// ═══════════════════════════════════════════════════════════════
// Idempotence
// ═══════════════════════════════════════════════════════════════

#[test]
fn resolution_has_no_observable_state() {
    let request = RequestNode::new().with_name("order1");
    let response =
        Response::new().with_content(r#"{"id": 42}"#, Some("application/json"));
    let mut registry = RequestRegistry::new();
    capture(&mut registry, request, response);

    let text = "{{ order1.response.body.$.id }}";
    let first = render(text, &registry).unwrap().into_owned();
    for _ in 0..10 {
        let again = render(text, &registry).unwrap();
        assert_eq!(again, first);
    }
}

#[test]
fn escaped_expression_survives_two_renders_unchanged() {
    // An escaped expression renders to the literal form; rendering the
    // literal form again evaluates it, which is the documented contract:
    // escaping protects exactly one render pass.
    let request = RequestNode::new().with_name("order1");
    let response =
        Response::new().with_content(r#"{"id": 42}"#, Some("application/json"));
    let mut registry = RequestRegistry::new();
    capture(&mut registry, request, response);

    let once = render("{{{{ order1.response.body.$.id }}}}", &registry).unwrap();
    assert_eq!(once, "{{ order1.response.body.$.id }}");

    let twice = render(&once, &registry).unwrap();
    assert_eq!(twice, "42");
}
