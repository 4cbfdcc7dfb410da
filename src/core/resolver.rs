use crate::core::models::*;
use crate::utils::Logger;

pub const DEFAULT_JS_COMPRESS: &str = "best";
pub const DEFAULT_CSS_COMPRESS: &str = "minify";

/// One schema entry: call-site name and process-config name of an option
struct OptionKey {
    call_site: &'static str,
    process: &'static str,
}

const HTML_SCHEMA: [OptionKey; 5] = [
    OptionKey { call_site: "remove_comments", process: "remove_comments" },
    OptionKey { call_site: "remove_newlines", process: "remove_newlines" },
    OptionKey { call_site: "js_compress", process: "js_compress" },
    OptionKey { call_site: "css_compress", process: "css_compress" },
    OptionKey { call_site: "html5", process: "html5" },
];

// Script and stylesheet engines take `compress` at the call site but read a
// namespaced key from the process config.
const SCRIPT_SCHEMA: [OptionKey; 1] = [OptionKey { call_site: "compress", process: "js_compress" }];
const STYLE_SCHEMA: [OptionKey; 1] = [OptionKey { call_site: "compress", process: "css_compress" }];

/// Merges process config, call-site overrides and built-in defaults.
///
/// Precedence per key: process config, then call site, then default.
pub struct OptionResolver<'a> {
    config: &'a ProcessConfig,
}

impl<'a> OptionResolver<'a> {
    pub fn new(config: &'a ProcessConfig) -> Self {
        Self { config }
    }

    pub fn resolve(&self, kind: ContentKind, overrides: &CallOptions) -> ResolvedOptions {
        self.report_ignored(kind, overrides);

        match kind {
            ContentKind::Html => ResolvedOptions::Html(self.resolve_html(overrides)),
            ContentKind::JavaScript => ResolvedOptions::Script(self.resolve_script(overrides)),
            ContentKind::Css => ResolvedOptions::Style(self.resolve_style(overrides)),
        }
    }

    pub fn resolve_html(&self, overrides: &CallOptions) -> HtmlOptions {
        let [remove_comments, remove_newlines, js_compress, css_compress, html5] = &HTML_SCHEMA;

        HtmlOptions {
            remove_comments: self
                .pick(remove_comments, overrides)
                .map_or(true, OptionValue::is_truthy),
            remove_newlines: self
                .pick(remove_newlines, overrides)
                .map_or(true, OptionValue::is_truthy),
            js_compress: self.level(js_compress, overrides, DEFAULT_JS_COMPRESS),
            css_compress: self.level(css_compress, overrides, DEFAULT_CSS_COMPRESS),
            html5: self.pick(html5, overrides).map_or(true, OptionValue::is_truthy),
        }
    }

    pub fn resolve_script(&self, overrides: &CallOptions) -> ScriptOptions {
        ScriptOptions {
            compress: self.level(&SCRIPT_SCHEMA[0], overrides, DEFAULT_JS_COMPRESS),
        }
    }

    pub fn resolve_style(&self, overrides: &CallOptions) -> StyleOptions {
        StyleOptions {
            compress: self.level(&STYLE_SCHEMA[0], overrides, DEFAULT_CSS_COMPRESS),
        }
    }

    fn pick<'o>(&'o self, key: &OptionKey, overrides: &'o CallOptions) -> Option<&'o OptionValue> {
        self.config
            .lookup(key.process)
            .or_else(|| overrides.get(key.call_site))
    }

    fn level(&self, key: &OptionKey, overrides: &CallOptions, default: &str) -> Option<CompressLevel> {
        match self.pick(key, overrides) {
            Some(value) => value.as_level(),
            None => Some(CompressLevel::new(default)),
        }
    }

    fn report_ignored(&self, kind: ContentKind, overrides: &CallOptions) {
        let schema: &[OptionKey] = match kind {
            ContentKind::Html => &HTML_SCHEMA,
            ContentKind::JavaScript => &SCRIPT_SCHEMA,
            ContentKind::Css => &STYLE_SCHEMA,
        };

        for key in overrides.keys() {
            if !schema.iter().any(|entry| entry.call_site == key) {
                Logger::ignored_option(kind, key);
            }
        }
    }
}
