//! Engine integration tests.
//!
//! API-level behavior: mode parsing, dispatch, auto-detection routing, and
//! the cross-cutting properties (idempotence, line-count preservation).

use decomment_engine::{strip, strip_auto, strip_css, strip_html, strip_javascript, strip_with, InvalidModeError, Mode};

// ============================================================================
// Mode handling
// ============================================================================

#[test]
fn test_mode_strings_are_case_insensitive() {
    assert_eq!(strip("a // b", "JavaScript").as_deref(), Ok("a "));
    assert_eq!(strip("a // b", "JAVASCRIPT").as_deref(), Ok("a "));
    assert_eq!(strip("a // b", "Js").as_deref(), Ok("a "));
    assert_eq!(strip("a /* b */", "CSS").as_deref(), Ok("a "));
    assert_eq!(strip("<!-- b -->a", "HTML").as_deref(), Ok("a"));
}

#[test]
fn test_unknown_mode_is_rejected() {
    let err = strip("anything", "xml").unwrap_err();
    assert_eq!(err, InvalidModeError("xml".to_string()));
}

#[test]
fn test_unknown_mode_produces_no_partial_output() {
    // The error carries the offending string; no stripping happened.
    assert!(strip("a // b", "").is_err());
}

#[test]
fn test_strip_with_mode_values() {
    assert_eq!(strip_with("a // b", Mode::JavaScript), "a ");
    assert_eq!(strip_with("a /* b */", Mode::Css), "a ");
    assert_eq!(strip_with("<!-- b -->a", Mode::Html), "a");
    assert_eq!(strip_with("const x = 1; // b\n", Mode::Auto), "const x = 1; \n");
}

#[test]
fn test_named_entry_points_match_dispatch() {
    let js = "let re = /a\\/b/; // c\n";
    let css = ".x { /* c */ }";
    let html = "<p>x</p><!-- c -->";
    assert_eq!(strip_javascript(js), strip(js, "javascript").expect("valid mode"));
    assert_eq!(strip_css(css), strip(css, "css").expect("valid mode"));
    assert_eq!(strip_html(html), strip(html, "html").expect("valid mode"));
}

// ============================================================================
// Auto-detection routing
// ============================================================================

#[test]
fn test_auto_routes_doctype_to_html() {
    let input = "<!DOCTYPE html>\n<!-- gone --><p>kept</p>";
    assert_eq!(strip_auto(input), "<!DOCTYPE html>\n<p>kept</p>");
}

#[test]
fn test_auto_routes_media_query_to_css() {
    let input = "@media print { /* gone */ body { display: none; } }";
    assert_eq!(strip_auto(input), "@media print {  body { display: none; } }");
}

#[test]
fn test_auto_routes_declarations_to_css() {
    let input = "color: red; /* gone */";
    assert_eq!(strip_auto(input), "color: red; ");
}

#[test]
fn test_auto_falls_back_to_javascript() {
    let input = "let total = a / b; // gone\n";
    assert_eq!(strip_auto(input), "let total = a / b; \n");
}

#[test]
fn test_auto_on_mixed_document_uses_html() {
    let input = "<body><script>var x = 1; // js\n</script></body>";
    let expected = "<body><script>var x = 1; \n</script></body>";
    assert_eq!(strip_auto(input), expected);
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_idempotence_across_modes() {
    let cases: &[(&str, &str)] = &[
        ("javascript", "const a = 1; // x\nconst re = /b\\/c/; /* y */\n"),
        ("css", ".a { background: url(\"x.png\"); /* y */ }\n"),
        ("html", "<div><!-- x --></div><script>1; // y\n</script>"),
        ("auto", "body { color: red; /* z */ }"),
    ];
    for (mode, input) in cases {
        let once = strip(input, mode).expect("valid mode");
        let twice = strip(&once, mode).expect("valid mode");
        assert_eq!(twice, once, "mode={mode}");
    }
}

#[test]
fn test_line_count_preserved_in_all_modes() {
    let cases: &[(&str, &str)] = &[
        ("javascript", "a(); /* 1\n2\n3 */ b(); // 4\nc();\n"),
        ("css", ".a {\n/* 1\n2 */\ncolor: red;\n}\n"),
        ("html", "<p>a</p>\n<!-- 1\n2 -->\n<p>b</p>\n"),
    ];
    for (mode, input) in cases {
        let output = strip(input, mode).expect("valid mode");
        assert_eq!(
            output.split('\n').count(),
            input.split('\n').count(),
            "mode={mode}"
        );
    }
}

#[test]
fn test_non_ascii_text_passes_through() {
    let input = "const s = \"héllo ☃\"; // çomment\n";
    let expected = "const s = \"héllo ☃\"; \n";
    assert_eq!(strip(input, "js").as_deref(), Ok(expected));
}
