use crate::core::models::*;
use crate::utils::Result;

/// A compaction engine for one content kind.
///
/// Engines are shared across threads once constructed and keep no per-call
/// state. Empty input must yield empty output.
pub trait CompactionEngine: Send + Sync {
    type Options;

    fn kind(&self) -> ContentKind;

    fn compact(&self, text: &str, options: &Self::Options) -> Result<String>;
}

pub type ScriptEngine = dyn CompactionEngine<Options = ScriptOptions>;
pub type StyleEngine = dyn CompactionEngine<Options = StyleOptions>;
