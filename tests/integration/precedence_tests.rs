use ultra_minify::{
    CallOptions, CompressLevel, ContentKind, HtmlOptions, Minifier, OptionValue, ProcessConfig,
    ResolvedOptions, ScriptOptions, StyleOptions,
};

fn level(token: &str) -> Option<CompressLevel> {
    Some(CompressLevel::new(token))
}

#[test]
fn test_process_config_beats_call_site() {
    let config = ProcessConfig::from_settings([("js_compress", OptionValue::from("minify"))]);
    let minifier = Minifier::new(config);

    let overrides = CallOptions::new().with("compress", "best");
    assert_eq!(
        minifier.resolve(ContentKind::JavaScript, Some(&overrides)),
        ResolvedOptions::Script(ScriptOptions {
            compress: level("minify")
        })
    );

    // The call still goes through with the process level
    let result = minifier
        .minify(ContentKind::JavaScript, Some("var x=1;"), Some(&overrides))
        .unwrap();
    assert!(result.is_some());
}

#[test]
fn test_call_site_beats_default() {
    let minifier = Minifier::new(ProcessConfig::default());
    let overrides = CallOptions::new().with("compress", "pretty");

    assert_eq!(
        minifier.resolve(ContentKind::Css, Some(&overrides)),
        ResolvedOptions::Style(StyleOptions {
            compress: level("pretty")
        })
    );
}

#[test]
fn test_css_default_level() {
    let minifier = Minifier::new(ProcessConfig::default());

    assert_eq!(
        minifier.resolve(ContentKind::Css, Some(&CallOptions::new())),
        ResolvedOptions::Style(StyleOptions {
            compress: level("minify")
        })
    );
}

#[test]
fn test_one_settings_block_configures_every_engine() {
    let config: ProcessConfig = serde_json::from_str(
        r#"{"js_compress": "clean", "css_compress": "pretty", "remove_comments": false}"#,
    )
    .unwrap();
    let minifier = Minifier::new(config);

    assert_eq!(
        minifier.resolve(ContentKind::JavaScript, None),
        ResolvedOptions::Script(ScriptOptions {
            compress: level("clean")
        })
    );
    assert_eq!(
        minifier.resolve(ContentKind::Css, None),
        ResolvedOptions::Style(StyleOptions {
            compress: level("pretty")
        })
    );
    assert_eq!(
        minifier.resolve(ContentKind::Html, None),
        ResolvedOptions::Html(HtmlOptions {
            remove_comments: false,
            remove_newlines: true,
            js_compress: level("clean"),
            css_compress: level("pretty"),
            html5: true,
        })
    );
}

#[test]
fn test_html_ignores_other_kinds_call_site_keys() {
    let minifier = Minifier::new(ProcessConfig::default());
    let overrides = CallOptions::new()
        .with("compress", "clean")
        .with("html5", false)
        .with("mangle", true);

    match minifier.resolve(ContentKind::Html, Some(&overrides)) {
        ResolvedOptions::Html(options) => {
            assert_eq!(options.js_compress, level("best"));
            assert_eq!(options.css_compress, level("minify"));
            assert!(!options.html5);
        }
        other => panic!("expected html options, got {:?}", other),
    }
}

#[test]
fn test_script_ignores_html_keys() {
    let minifier = Minifier::new(ProcessConfig {
        remove_comments: Some(false.into()),
        css_compress: Some("pretty".into()),
        ..Default::default()
    });
    let overrides = CallOptions::new().with("remove_newlines", false);

    assert_eq!(
        minifier.resolve(ContentKind::JavaScript, Some(&overrides)),
        ResolvedOptions::Script(ScriptOptions {
            compress: level("best")
        })
    );
}

#[test]
fn test_falsy_nested_level_disables_nested_compaction() {
    let minifier = Minifier::new(ProcessConfig::default());
    let overrides = CallOptions::new().with("js_compress", 0i64);
    let html = "<script>  var keep   =  1;  </script>";

    let result = minifier
        .minify(ContentKind::Html, Some(html), Some(&overrides))
        .unwrap();
    assert_eq!(result.as_deref(), Some(html));
}
