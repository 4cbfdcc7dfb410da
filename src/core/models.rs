use crate::utils::{Logger, MinifyError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The kind of text being minified. Selects the option schema and the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentKind {
    #[serde(rename = "html")]
    Html,
    #[serde(rename = "js")]
    JavaScript,
    #[serde(rename = "css")]
    Css,
}

impl ContentKind {
    pub const ALL: [ContentKind; 3] = [ContentKind::Html, ContentKind::JavaScript, ContentKind::Css];

    /// Boundary tag (`"html"`, `"js"`, `"css"`)
    pub fn tag(&self) -> &'static str {
        match self {
            ContentKind::Html => "html",
            ContentKind::JavaScript => "js",
            ContentKind::Css => "css",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ContentKind {
    type Err = MinifyError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "html" => Ok(ContentKind::Html),
            "js" => Ok(ContentKind::JavaScript),
            "css" => Ok(ContentKind::Css),
            other => Err(MinifyError::UnknownEngine(other.to_string())),
        }
    }
}

/// A loosely-typed option value as handed over by a host application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Flag(bool),
    Number(i64),
    Text(String),
}

impl OptionValue {
    /// Parse a raw `key=value` right-hand side from the command line
    pub fn parse(raw: &str) -> Self {
        match raw {
            "true" => OptionValue::Flag(true),
            "false" => OptionValue::Flag(false),
            _ => raw
                .parse::<i64>()
                .map(OptionValue::Number)
                .unwrap_or_else(|_| OptionValue::Text(raw.to_string())),
        }
    }

    /// `false`, `0`, `""` and `"0"` are false; everything else is true.
    pub fn is_truthy(&self) -> bool {
        match self {
            OptionValue::Flag(flag) => *flag,
            OptionValue::Number(n) => *n != 0,
            OptionValue::Text(text) => !text.is_empty() && text != "0",
        }
    }

    /// The value as an opaque level token; falsy values carry no level.
    pub fn as_level(&self) -> Option<CompressLevel> {
        if !self.is_truthy() {
            return None;
        }
        let token = match self {
            OptionValue::Flag(flag) => flag.to_string(),
            OptionValue::Number(n) => n.to_string(),
            OptionValue::Text(text) => text.clone(),
        };
        Some(CompressLevel::new(token))
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Flag(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Number(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

/// Opaque compression level token, interpreted only by the engine receiving it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompressLevel(String);

impl CompressLevel {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CompressLevel {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

/// Per-call option overrides keyed by call-site option name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallOptions(BTreeMap<String, OptionValue>);

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<OptionValue>> FromIterator<(K, V)> for CallOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = CallOptions::new();
        for (key, value) in iter {
            options.set(key, value);
        }
        options
    }
}

/// Process-wide option overrides, fixed at startup.
///
/// Keys for the script and stylesheet engines are namespaced
/// (`js_compress`, `css_compress`) so one settings block configures all
/// three engines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessConfig {
    #[serde(default, alias = "removeComments", skip_serializing_if = "Option::is_none")]
    pub remove_comments: Option<OptionValue>,

    #[serde(default, alias = "removeNewlines", skip_serializing_if = "Option::is_none")]
    pub remove_newlines: Option<OptionValue>,

    #[serde(default, alias = "jsCompress", skip_serializing_if = "Option::is_none")]
    pub js_compress: Option<OptionValue>,

    #[serde(default, alias = "cssCompress", skip_serializing_if = "Option::is_none")]
    pub css_compress: Option<OptionValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html5: Option<OptionValue>,
}

impl ProcessConfig {
    /// Build from an opaque host settings mapping; unrecognized keys are skipped.
    pub fn from_settings<'a, I>(settings: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, OptionValue)>,
    {
        let mut config = ProcessConfig::default();
        for (key, value) in settings {
            match config.slot_mut(key) {
                Some(slot) => *slot = Some(value),
                None => Logger::debug(&format!("Ignoring unrecognized process setting: {}", key)),
            }
        }
        config
    }

    /// Look up a value by its process-config key
    pub fn lookup(&self, key: &str) -> Option<&OptionValue> {
        match key {
            "remove_comments" => self.remove_comments.as_ref(),
            "remove_newlines" => self.remove_newlines.as_ref(),
            "js_compress" => self.js_compress.as_ref(),
            "css_compress" => self.css_compress.as_ref(),
            "html5" => self.html5.as_ref(),
            _ => None,
        }
    }

    fn slot_mut(&mut self, key: &str) -> Option<&mut Option<OptionValue>> {
        match key {
            "remove_comments" => Some(&mut self.remove_comments),
            "remove_newlines" => Some(&mut self.remove_newlines),
            "js_compress" => Some(&mut self.js_compress),
            "css_compress" => Some(&mut self.css_compress),
            "html5" => Some(&mut self.html5),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    pub remove_comments: bool,
    pub remove_newlines: bool,
    /// Level for embedded `<script>` bodies; `None` leaves them untouched
    pub js_compress: Option<CompressLevel>,
    /// Level for embedded `<style>` bodies; `None` leaves them untouched
    pub css_compress: Option<CompressLevel>,
    pub html5: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptOptions {
    pub compress: Option<CompressLevel>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleOptions {
    pub compress: Option<CompressLevel>,
}

/// Fully resolved options for a single call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedOptions {
    Html(HtmlOptions),
    Script(ScriptOptions),
    Style(StyleOptions),
}

impl ResolvedOptions {
    pub fn kind(&self) -> ContentKind {
        match self {
            ResolvedOptions::Html(_) => ContentKind::Html,
            ResolvedOptions::Script(_) => ContentKind::JavaScript,
            ResolvedOptions::Style(_) => ContentKind::Css,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MinificationStats {
    pub original_size: usize,
    pub minified_size: usize,
    pub reduction_percentage: f64,
    pub saved_bytes: usize,
}

impl MinificationStats {
    pub fn between(original: &str, minified: &str) -> Self {
        let original_size = original.len();
        let minified_size = minified.len();
        let reduction_percentage = if original_size == 0 {
            0.0
        } else {
            (original_size as f64 - minified_size as f64) / original_size as f64 * 100.0
        };

        Self {
            original_size,
            minified_size,
            reduction_percentage,
            saved_bytes: original_size.saturating_sub(minified_size),
        }
    }
}

impl fmt::Display for MinificationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Minification: {:.1}% reduction ({} → {} bytes, saved {})",
            self.reduction_percentage, self.original_size, self.minified_size, self.saved_bytes
        )
    }
}
