use crate::core::{interfaces::*, models::*};
use crate::utils::{Logger, Result};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::Arc;

// Pre-compiled regex patterns for performance
static SEGMENT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?is)(?P<comment><!--.*?-->)",
        r"|<pre\b[^>]*>.*?</pre\s*>",
        r"|<textarea\b[^>]*>.*?</textarea\s*>",
        r#"|<script\b(?P<script_attrs>(?:"[^"]*"|'[^']*'|[^'">])*)>(?P<script_body>.*?)</script\s*>"#,
        r#"|<style\b(?P<style_attrs>(?:"[^"]*"|'[^']*'|[^'">])*)>(?P<style_body>.*?)</style\s*>"#,
    ))
    .unwrap()
});

static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

// Quoted values are matched as single tokens so whitespace inside them survives
static ATTR_TOKEN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""[^"]*"|'[^']*'|\s+"#).unwrap());

static TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<(?P<name>[a-zA-Z][a-zA-Z0-9-]*)(?P<rest>(?:"[^"]*"|'[^']*'|[^'"<>])*)>"#).unwrap()
});

static BLOCK_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)\s*(</?(?:html|head|body|div|p|ul|ol|li|dl|dt|dd|table|thead|tbody|tfoot|tr|td|th",
        r"|meta|link|title|base|section|header|footer|nav|main|article|aside|h[1-6]|hr|br",
        r#"|form|fieldset|legend|select|option|blockquote|figure|figcaption|!doctype)\b(?:"[^"]*"|'[^']*'|[^'"<>])*>)\s*"#,
    ))
    .unwrap()
});

static TYPE_ATTR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\btype\s*=\s*["']?([^"'\s>]*)"#).unwrap()
});

static SRC_ATTR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bsrc\s*=").unwrap());

const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

const SCRIPT_TYPES: [&str; 6] = [
    "",
    "text/javascript",
    "application/javascript",
    "text/ecmascript",
    "application/ecmascript",
    "module",
];

/// Markup compaction. Embedded `<script>` and `<style>` bodies are handed to
/// the script and stylesheet engines; `<pre>` and `<textarea>` are kept verbatim.
pub struct MarkupEngine {
    script: Arc<ScriptEngine>,
    style: Arc<StyleEngine>,
}

impl MarkupEngine {
    pub fn new(script: Arc<ScriptEngine>, style: Arc<StyleEngine>) -> Self {
        Logger::engine_constructed(ContentKind::Html);
        Self { script, style }
    }

    fn compact_markup(&self, markup: &str, options: &HtmlOptions) -> String {
        let mut compacted = String::with_capacity(markup.len());
        let mut last = 0;

        for caps in TAG_REGEX.captures_iter(markup) {
            let Some(tag) = caps.get(0) else {
                continue;
            };

            compacted.push_str(&collapse_text(&markup[last..tag.start()], options.remove_newlines));
            compacted.push_str(&normalize_tag(&caps["name"], &caps["rest"], options.html5));
            last = tag.end();
        }

        compacted.push_str(&collapse_text(&markup[last..], options.remove_newlines));

        if options.remove_newlines {
            BLOCK_TAG_REGEX.replace_all(&compacted, "$1").into_owned()
        } else {
            compacted
        }
    }

    fn compact_script(&self, attrs: &str, body: &str, options: &HtmlOptions) -> String {
        let attrs = normalize_attrs(attrs);
        let body = match &options.js_compress {
            Some(level) if is_script_type(&attrs) && !SRC_ATTR_REGEX.is_match(&attrs) => {
                let nested = ScriptOptions {
                    compress: Some(level.clone()),
                };
                self.script.compact(body, &nested).unwrap_or_else(|e| {
                    Logger::nested_fallback("script", &e.to_string());
                    body.to_string()
                })
            }
            _ => body.to_string(),
        };

        format!("<script{}>{}</script>", attrs, body)
    }

    fn compact_style(&self, attrs: &str, body: &str, options: &HtmlOptions) -> String {
        let attrs = normalize_attrs(attrs);
        let body = match &options.css_compress {
            Some(level) if is_style_type(&attrs) => {
                let nested = StyleOptions {
                    compress: Some(level.clone()),
                };
                self.style.compact(body, &nested).unwrap_or_else(|e| {
                    Logger::nested_fallback("style", &e.to_string());
                    body.to_string()
                })
            }
            _ => body.to_string(),
        };

        format!("<style{}>{}</style>", attrs, body)
    }
}

impl CompactionEngine for MarkupEngine {
    type Options = HtmlOptions;

    fn kind(&self) -> ContentKind {
        ContentKind::Html
    }

    fn compact(&self, text: &str, options: &HtmlOptions) -> Result<String> {
        // Comments go first so commented-out blocks never reach the nested engines
        let text = if options.remove_comments {
            strip_comments(text)
        } else {
            Cow::Borrowed(text)
        };
        let text: &str = &text;

        let mut output = String::with_capacity(text.len());
        let mut last = 0;

        for caps in SEGMENT_REGEX.captures_iter(text) {
            let Some(segment) = caps.get(0) else {
                continue;
            };

            output.push_str(&self.compact_markup(&text[last..segment.start()], options));

            if caps.name("comment").is_some() {
                output.push_str(segment.as_str());
            } else if let (Some(attrs), Some(body)) = (caps.name("script_attrs"), caps.name("script_body")) {
                output.push_str(&self.compact_script(attrs.as_str(), body.as_str(), options));
            } else if let (Some(attrs), Some(body)) = (caps.name("style_attrs"), caps.name("style_body")) {
                output.push_str(&self.compact_style(attrs.as_str(), body.as_str(), options));
            } else {
                output.push_str(segment.as_str());
            }

            last = segment.end();
        }

        output.push_str(&self.compact_markup(&text[last..], options));

        Ok(output.trim().to_string())
    }
}

fn strip_comments(markup: &str) -> Cow<'_, str> {
    SEGMENT_REGEX.replace_all(markup, |caps: &Captures| {
        let segment = &caps[0];
        match caps.name("comment") {
            // Conditional comments carry markup for legacy browsers
            Some(comment) if !is_conditional(comment.as_str()) => String::new(),
            _ => segment.to_string(),
        }
    })
}

fn is_conditional(comment: &str) -> bool {
    comment.starts_with("<!--[") || comment.starts_with("<!--<![")
}

fn collapse_text(text: &str, remove_newlines: bool) -> Cow<'_, str> {
    WHITESPACE_REGEX.replace_all(text, |caps: &Captures| {
        if !remove_newlines && caps[0].contains('\n') {
            "\n"
        } else {
            " "
        }
    })
}

/// Collapse whitespace between attributes, leaving quoted values as written
fn collapse_attrs(attrs: &str) -> Cow<'_, str> {
    ATTR_TOKEN_REGEX.replace_all(attrs, |caps: &Captures| {
        let token = &caps[0];
        if token.starts_with(['"', '\'']) {
            token.to_string()
        } else {
            " ".to_string()
        }
    })
}

fn normalize_attrs(attrs: &str) -> String {
    let collapsed = collapse_attrs(attrs.trim());
    if collapsed.is_empty() {
        String::new()
    } else {
        format!(" {}", collapsed)
    }
}

fn normalize_tag(name: &str, rest: &str, html5: bool) -> String {
    let rest = rest.trim_end();
    let (rest, self_closing) = match rest.strip_suffix('/') {
        Some(stripped) => (stripped.trim_end(), true),
        None => (rest, false),
    };
    let rest = collapse_attrs(rest);

    let is_void = VOID_ELEMENTS.contains(&name.to_ascii_lowercase().as_str());
    let close = if self_closing && !(html5 && is_void) {
        "/>"
    } else {
        ">"
    };

    format!("<{}{}{}", name, rest, close)
}

fn script_type(attrs: &str) -> Option<String> {
    TYPE_ATTR_REGEX
        .captures(attrs)
        .map(|caps| caps[1].to_ascii_lowercase())
}

fn is_script_type(attrs: &str) -> bool {
    match script_type(attrs) {
        Some(kind) => SCRIPT_TYPES.contains(&kind.as_str()),
        None => true,
    }
}

fn is_style_type(attrs: &str) -> bool {
    match script_type(attrs) {
        Some(kind) => kind.is_empty() || kind == "text/css",
        None => true,
    }
}
