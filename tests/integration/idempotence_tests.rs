use ultra_minify::{CallOptions, ContentKind, Minifier, ProcessConfig};

fn assert_converges(minifier: &Minifier, kind: ContentKind, source: &str, overrides: &CallOptions) {
    let once = minifier
        .minify(kind, Some(source), Some(overrides))
        .unwrap()
        .unwrap();
    let twice = minifier
        .minify(kind, Some(&once), Some(overrides))
        .unwrap()
        .unwrap();

    assert!(once.len() <= source.len());
    assert_eq!(twice.len(), once.len(), "{} output should converge", kind);
}

#[test]
fn test_css_converges() {
    let minifier = Minifier::new(ProcessConfig::default());
    assert_converges(
        &minifier,
        ContentKind::Css,
        ".a { color: #ff0000; }\n.b { margin: 0px 0px 0px 0px; }\n",
        &CallOptions::new(),
    );
}

#[test]
fn test_html_converges() {
    let minifier = Minifier::new(ProcessConfig::default());
    let html = r#"
        <div class="card">
            <!-- header -->
            <h2>  Title  </h2>
            <p>Body   text with <em>emphasis</em>.</p>
            <img src="a.png" alt="a" />
            <style> .card { padding: 4px; } </style>
        </div>
    "#;

    assert_converges(&minifier, ContentKind::Html, html, &CallOptions::new());
    assert_converges(
        &minifier,
        ContentKind::Html,
        html,
        &CallOptions::new().with("remove_newlines", false).with("html5", false),
    );
}

#[test]
fn test_javascript_converges() {
    let minifier = Minifier::new(ProcessConfig::default());
    let source = r#"
        function pick(flag) {
            if (flag) {
                return 1;
            } else {
                return 2;
            }
        }
        console.log(pick(true));
    "#;

    assert_converges(&minifier, ContentKind::JavaScript, source, &CallOptions::new());
    assert_converges(
        &minifier,
        ContentKind::JavaScript,
        source,
        &CallOptions::new().with("compress", "clean"),
    );
}
