use crate::core::{interfaces::CompactionEngine, models::*, resolver::OptionResolver};
use crate::infrastructure::EngineRegistry;
use crate::utils::{MinifyError, Result, Timer};
use std::sync::Arc;

/// Entry point: routes text to the engine for its kind with resolved options.
pub struct Minifier {
    config: ProcessConfig,
    engines: EngineRegistry,
}

impl Minifier {
    /// Engines are built lazily on first use
    pub fn new(config: ProcessConfig) -> Self {
        Self {
            config,
            engines: EngineRegistry::new(),
        }
    }

    /// Build all engines now instead of on first use
    pub fn eager(config: ProcessConfig) -> Self {
        let minifier = Self::new(config);
        minifier.engines.warm_up();
        minifier
    }

    pub fn config(&self) -> &ProcessConfig {
        &self.config
    }

    pub fn engines(&self) -> &EngineRegistry {
        &self.engines
    }

    pub fn resolve(&self, kind: ContentKind, overrides: Option<&CallOptions>) -> ResolvedOptions {
        let empty = CallOptions::new();
        OptionResolver::new(&self.config).resolve(kind, overrides.unwrap_or(&empty))
    }

    /// Minify `text` as `kind`. Absent text yields `Ok(None)` without
    /// touching any engine; an empty string is minified normally.
    pub fn minify(
        &self,
        kind: ContentKind,
        text: Option<&str>,
        overrides: Option<&CallOptions>,
    ) -> Result<Option<String>> {
        let Some(text) = text else {
            return Ok(None);
        };

        let _timer = Timer::start(&format!("Minifying {} ({} bytes)", kind, text.len()));

        let minified = match self.resolve(kind, overrides) {
            ResolvedOptions::Html(options) => self.engines.markup().compact(text, &options)?,
            ResolvedOptions::Script(options) => self.engines.script().compact(text, &options)?,
            ResolvedOptions::Style(options) => self.engines.style().compact(text, &options)?,
        };

        Ok(Some(minified))
    }

    /// Same as [`Minifier::minify`] with the kind given as its tag (`"html"`, `"js"`, `"css"`)
    pub fn minify_tagged(
        &self,
        kind: &str,
        text: Option<&str>,
        overrides: Option<&CallOptions>,
    ) -> Result<Option<String>> {
        let kind: ContentKind = kind.parse()?;
        self.minify(kind, text, overrides)
    }
}

impl Default for Minifier {
    fn default() -> Self {
        Self::new(ProcessConfig::default())
    }
}

/// Async wrapper that runs minification on the blocking pool
#[derive(Clone)]
pub struct AsyncMinifier {
    minifier: Arc<Minifier>,
}

impl AsyncMinifier {
    pub fn new(minifier: Minifier) -> Self {
        Self::from_shared(Arc::new(minifier))
    }

    pub fn from_shared(minifier: Arc<Minifier>) -> Self {
        Self { minifier }
    }

    pub fn inner(&self) -> &Arc<Minifier> {
        &self.minifier
    }

    pub async fn minify(
        &self,
        kind: ContentKind,
        text: Option<String>,
        overrides: Option<CallOptions>,
    ) -> Result<Option<String>> {
        let Some(text) = text else {
            return Ok(None);
        };

        let minifier = Arc::clone(&self.minifier);

        // CPU-bound work stays off the async workers
        tokio::task::spawn_blocking(move || minifier.minify(kind, Some(&text), overrides.as_ref()))
            .await
            .map_err(|e| MinifyError::Other(format!("Minification task failed: {}", e)))?
    }
}
