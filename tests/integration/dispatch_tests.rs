use ultra_minify::{CallOptions, ContentKind, Minifier, MinifyError, ProcessConfig};

#[test]
fn test_absent_text_is_a_no_op() {
    let minifier = Minifier::new(ProcessConfig::default());

    for tag in ["html", "js", "css"] {
        let result = minifier
            .minify_tagged(tag, None, Some(&CallOptions::new().with("compress", "best")))
            .unwrap();
        assert_eq!(result, None, "absent {} input should stay absent", tag);
    }

    for kind in ContentKind::ALL {
        assert!(!minifier.engines().is_constructed(kind));
    }
}

#[test]
fn test_empty_string_stays_empty() {
    let minifier = Minifier::new(ProcessConfig::default());

    for tag in ["html", "js", "css"] {
        assert_eq!(
            minifier.minify_tagged(tag, Some(""), None).unwrap(),
            Some(String::new())
        );
    }
}

#[test]
fn test_unknown_kind_is_reported() {
    let minifier = Minifier::new(ProcessConfig::default());

    let err = minifier
        .minify_tagged("xml", Some("<a/>"), Some(&CallOptions::new()))
        .unwrap_err();

    assert!(matches!(err, MinifyError::UnknownEngine(ref kind) if kind == "xml"));
    assert_eq!(err.to_string(), "unknown engine: xml");
}

#[test]
fn test_css_defaults_to_minify() {
    let minifier = Minifier::new(ProcessConfig::default());

    let result = minifier
        .minify_tagged("css", Some("a { color: red; }"), Some(&CallOptions::new()))
        .unwrap();
    assert_eq!(result.as_deref(), Some("a{color:red}"));
}

#[test]
fn test_html_document() {
    let minifier = Minifier::new(ProcessConfig::default());
    let html = r#"<!DOCTYPE html>
<html>
  <head>
    <title> Demo </title>
    <!-- page styles -->
    <style>
      body { margin: 0; padding: 0; }
    </style>
  </head>
  <body>
    <p>Hello <b>world</b></p>
    <br />
  </body>
</html>
"#;

    let result = minifier
        .minify(ContentKind::Html, Some(html), None)
        .unwrap()
        .unwrap();

    assert!(result.starts_with("<!DOCTYPE html><html><head><title>Demo</title>"));
    assert!(!result.contains("page styles"));
    assert!(result.contains("<style>body{"));
    assert!(result.contains("<p>Hello <b>world</b></p><br>"));
    assert!(!result.contains('\n'));
}

#[test]
fn test_html_keeps_newlines_when_configured() {
    let config = ProcessConfig {
        remove_newlines: Some(false.into()),
        ..Default::default()
    };
    let minifier = Minifier::new(config);

    let result = minifier
        .minify(ContentKind::Html, Some("<div>\n\n   <p>a</p>\n</div>"), None)
        .unwrap()
        .unwrap();
    assert_eq!(result, "<div>\n<p>a</p>\n</div>");
}

#[test]
fn test_javascript_is_compacted() {
    let minifier = Minifier::new(ProcessConfig::default());
    let source = r#"
        /* banner */
        function add(first, second) {
            return first + second;
        }
        console.log(add(1, 2));
    "#;

    let result = minifier
        .minify(ContentKind::JavaScript, Some(source), None)
        .unwrap()
        .unwrap();

    assert!(result.len() < source.len());
    assert!(result.contains("console.log"));
}

#[test]
fn test_engine_errors_propagate() {
    let minifier = Minifier::new(ProcessConfig::default());

    let result = minifier.minify(ContentKind::JavaScript, Some("function (("), None);
    assert!(matches!(result, Err(MinifyError::Script { .. })));
}
