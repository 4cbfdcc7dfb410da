use crate::core::{interfaces::CompactionEngine, models::*};
use crate::utils::{Logger, MinifyError, Result};
use oxc_allocator::Allocator;
use oxc_codegen::{Codegen, CodegenOptions};
use oxc_minifier::{CompressOptions, MangleOptions, Minifier, MinifierOptions};
use oxc_parser::Parser;
use oxc_span::SourceType;

/// Levels understood by the oxc engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptLevel {
    /// Strip comments and whitespace only
    Clean,
    /// Also mangle local names
    Shrink,
    /// Mangle and apply the full compressor
    Obfuscate,
    Best,
}

impl ScriptLevel {
    pub const BASELINE: ScriptLevel = ScriptLevel::Clean;

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "clean" => Some(ScriptLevel::Clean),
            "shrink" => Some(ScriptLevel::Shrink),
            "obfuscate" => Some(ScriptLevel::Obfuscate),
            "best" => Some(ScriptLevel::Best),
            _ => None,
        }
    }

    fn minifier_options(self) -> MinifierOptions {
        match self {
            ScriptLevel::Clean => MinifierOptions {
                mangle: None,
                compress: None,
                ..MinifierOptions::default()
            },
            ScriptLevel::Shrink => MinifierOptions {
                mangle: Some(MangleOptions::default()),
                compress: None,
                ..MinifierOptions::default()
            },
            ScriptLevel::Obfuscate | ScriptLevel::Best => MinifierOptions {
                mangle: Some(MangleOptions::default()),
                compress: Some(CompressOptions::default()),
                ..MinifierOptions::default()
            },
        }
    }
}

/// JavaScript compaction using oxc
pub struct OxcScriptEngine;

impl OxcScriptEngine {
    pub fn new() -> Self {
        Logger::engine_constructed(ContentKind::JavaScript);
        Self
    }

    fn level_for(&self, compress: Option<&CompressLevel>) -> ScriptLevel {
        match compress {
            None => ScriptLevel::BASELINE,
            Some(level) => ScriptLevel::from_token(level.as_str()).unwrap_or_else(|| {
                Logger::unsupported_level(ContentKind::JavaScript, level.as_str(), "clean");
                ScriptLevel::BASELINE
            }),
        }
    }

    pub fn minify(&self, source_code: &str, level: ScriptLevel) -> Result<String> {
        let allocator = Allocator::default();
        let source_type = SourceType::default();

        let parse_result = Parser::new(&allocator, source_code, source_type).parse();

        if !parse_result.errors.is_empty() {
            let errors: Vec<String> = parse_result
                .errors
                .iter()
                .map(|e| e.to_string())
                .collect();
            return Err(MinifyError::script(errors.join("\n")));
        }

        let mut program = parse_result.program;
        let minified = Minifier::new(level.minifier_options()).minify(&allocator, &mut program);

        let code = Codegen::new()
            .with_options(CodegenOptions::minify())
            .with_scoping(minified.scoping)
            .build(&program)
            .code;

        Ok(code.trim_end().to_string())
    }
}

impl Default for OxcScriptEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CompactionEngine for OxcScriptEngine {
    type Options = ScriptOptions;

    fn kind(&self) -> ContentKind {
        ContentKind::JavaScript
    }

    fn compact(&self, text: &str, options: &ScriptOptions) -> Result<String> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }

        let level = self.level_for(options.compress.as_ref());
        self.minify(text, level)
    }
}
