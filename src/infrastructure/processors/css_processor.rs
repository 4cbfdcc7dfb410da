use crate::core::{interfaces::CompactionEngine, models::*};
use crate::utils::{ErrorContext, Logger, MinifyError, Result};
use lightningcss::{
    error::Error as CssError,
    printer::PrinterOptions,
    stylesheet::{MinifyOptions, ParserOptions, StyleSheet},
};
use std::fmt::Display;

// Larger sources are reported without a snippet.
const MAX_SNIPPET_LINES: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleLevel {
    /// Merge rules and print without whitespace
    Minify,
    /// Normalized, indented output
    Pretty,
}

impl StyleLevel {
    pub const BASELINE: StyleLevel = StyleLevel::Pretty;

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "minify" => Some(StyleLevel::Minify),
            "pretty" => Some(StyleLevel::Pretty),
            _ => None,
        }
    }
}

/// CSS compaction using Lightning CSS
pub struct LightningCssEngine;

impl LightningCssEngine {
    pub fn new() -> Self {
        Logger::engine_constructed(ContentKind::Css);
        Self
    }

    fn level_for(&self, compress: Option<&CompressLevel>) -> StyleLevel {
        match compress {
            None => StyleLevel::BASELINE,
            Some(level) => StyleLevel::from_token(level.as_str()).unwrap_or_else(|| {
                Logger::unsupported_level(ContentKind::Css, level.as_str(), "pretty");
                StyleLevel::BASELINE
            }),
        }
    }

    pub fn minify(&self, content: &str, level: StyleLevel) -> Result<String> {
        let mut stylesheet = StyleSheet::parse(content, ParserOptions::default())
            .map_err(|e| css_failure(content, e))?;

        if level == StyleLevel::Minify {
            stylesheet
                .minify(MinifyOptions::default())
                .map_err(|e| css_failure(content, e))?;
        }

        let result = stylesheet
            .to_css(PrinterOptions {
                minify: level == StyleLevel::Minify,
                ..Default::default()
            })
            .map_err(|e| css_failure(content, e))?;

        Ok(result.code)
    }
}

fn css_failure<T: Display>(source: &str, err: CssError<T>) -> MinifyError {
    let message = err.kind.to_string();

    match err.loc {
        Some(loc) => {
            // Lightning CSS reports zero-based lines
            let mut context = ErrorContext::new().with_location(loc.line as usize + 1, loc.column as usize);
            if source.lines().count() <= MAX_SNIPPET_LINES {
                context = context.with_snippet(source.to_string());
            }
            MinifyError::stylesheet_with_context(message, context)
        }
        None => MinifyError::stylesheet(message),
    }
}

impl Default for LightningCssEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CompactionEngine for LightningCssEngine {
    type Options = StyleOptions;

    fn kind(&self) -> ContentKind {
        ContentKind::Css
    }

    fn compact(&self, text: &str, options: &StyleOptions) -> Result<String> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }

        let level = self.level_for(options.compress.as_ref());
        self.minify(text, level)
    }
}
