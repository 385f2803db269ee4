use labelmark::ast::Node;
use labelmark::markdown_to_styled;
use labelmark::parser::Parser;
use labelmark::styled::{StyleKind, StyleSpan};
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
struct Case {
    markdown: String,
    text: String,
    spans: Vec<StyleSpan>,
}

#[test]
fn conversion_cases() {
    let data = fs::read_to_string("tests/data/cases.json").expect("Failed to read cases.json");

    let cases: Vec<Case> = serde_json::from_str(&data).expect("Failed to parse cases.json");

    let mut failures = Vec::new();

    for case in &cases {
        let result = markdown_to_styled(&case.markdown);

        if result.text != case.text || result.spans != case.spans {
            failures.push(case.markdown.clone());
            eprintln!("\n❌ Case {:?} failed", case.markdown);
            eprintln!("  Expected: {:?} {:?}", case.text, case.spans);
            eprintln!("  Got:      {:?} {:?}", result.text, result.spans);
        }
    }

    assert!(
        failures.is_empty(),
        "{} of {} cases failed: {:?}",
        failures.len(),
        cases.len(),
        failures
    );
}

#[test]
fn spans_stay_in_bounds_and_ordered() {
    let inputs = [
        "Hello **world**!",
        "*a* and _b_ and [c](https://c.example)",
        "**foo*",
        "nested [**bold** link](https://example.com)",
        "é **b** _c_",
        "*** ** * __ _",
        "[x](<https://example.com> \"title\") trailing",
    ];

    for input in inputs {
        let result = markdown_to_styled(input);
        let mut last_start = 0;
        for span in &result.spans {
            assert!(
                span.start + span.length <= result.text.len(),
                "span {:?} out of bounds for {:?}",
                span,
                result.text
            );
            assert!(span.length > 0, "zero-length span {:?} in {:?}", span, input);
            assert!(result.text.is_char_boundary(span.start));
            assert!(result.text.is_char_boundary(span.start + span.length));
            assert!(
                span.start >= last_start,
                "spans out of order for {:?}",
                input
            );
            last_start = span.start;
        }
    }
}

#[test]
fn plain_text_round_trips() {
    let inputs = [
        "no markup at all",
        "punctuation: ; , . ! ? ( )",
        "unicode: héllo wörld ß 日本語",
        "1 + 1 = 2",
    ];

    for input in inputs {
        let result = markdown_to_styled(input);
        assert_eq!(result.text, input);
        assert!(result.spans.is_empty(), "unexpected spans for {:?}", input);
    }
}

#[test]
fn link_ast_keeps_nested_structure() {
    let parser = Parser::new();
    let ast = parser.parse("[**b** x](https://e.example)");

    let Node::Document(children) = &ast else {
        panic!("expected document root");
    };
    assert_eq!(children.len(), 1);
    let Node::Link {
        destination,
        title,
        children,
    } = &children[0]
    else {
        panic!("expected link node, got {:?}", children[0]);
    };
    assert_eq!(destination.as_deref(), Some("https://e.example"));
    assert_eq!(*title, None);
    assert_eq!(
        children,
        &vec![
            Node::Strong(vec![Node::Text("b".to_string())]),
            Node::Text(" x".to_string()),
        ]
    );
    assert_eq!(children[0].plain_text(), "b");
}

#[test]
fn link_title_is_parsed() {
    let parser = Parser::new();
    let ast = parser.parse("[a](https://e.example 'Tip')");

    let Node::Document(children) = &ast else {
        panic!("expected document root");
    };
    let Node::Link {
        destination, title, ..
    } = &children[0]
    else {
        panic!("expected link node, got {:?}", children[0]);
    };
    assert_eq!(destination.as_deref(), Some("https://e.example"));
    assert_eq!(title.as_deref(), Some("Tip"));
}

#[test]
fn invalid_destination_keeps_display_text() {
    let parser = Parser::new();
    let ast = parser.parse("[keep me](/relative/path)");

    let Node::Document(children) = &ast else {
        panic!("expected document root");
    };
    let Node::Link {
        destination,
        children,
        ..
    } = &children[0]
    else {
        panic!("expected link node, got {:?}", children[0]);
    };
    assert_eq!(*destination, None);
    assert_eq!(children, &vec![Node::Text("keep me".to_string())]);

    let result = markdown_to_styled("[keep me](/relative/path)");
    assert_eq!(result.text, "keep me");
    assert!(result.spans.is_empty());
}

#[test]
fn nested_styling_is_flattened() {
    let result = markdown_to_styled("*see [x](https://x.example)*");
    assert_eq!(result.text, "see x");
    // Only the outer span survives; the nested link keeps its text only
    assert_eq!(
        result.spans,
        vec![StyleSpan {
            start: 0,
            length: 5,
            kind: StyleKind::Italic,
        }]
    );
}
