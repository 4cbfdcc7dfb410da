use crate::core::models::ContentKind;
use crate::infrastructure::processors::{LightningCssEngine, MarkupEngine, OxcScriptEngine};
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// One engine per content kind, each built at most once.
///
/// The markup engine shares the script and stylesheet engines for embedded
/// `<script>`/`<style>` content, so building it builds those too.
#[derive(Default)]
pub struct EngineRegistry {
    script: OnceCell<Arc<OxcScriptEngine>>,
    style: OnceCell<Arc<LightningCssEngine>>,
    markup: OnceCell<MarkupEngine>,
}

impl EngineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script(&self) -> &Arc<OxcScriptEngine> {
        self.script.get_or_init(|| Arc::new(OxcScriptEngine::new()))
    }

    pub fn style(&self) -> &Arc<LightningCssEngine> {
        self.style.get_or_init(|| Arc::new(LightningCssEngine::new()))
    }

    pub fn markup(&self) -> &MarkupEngine {
        self.markup
            .get_or_init(|| MarkupEngine::new(self.script().clone(), self.style().clone()))
    }

    pub fn is_constructed(&self, kind: ContentKind) -> bool {
        match kind {
            ContentKind::Html => self.markup.get().is_some(),
            ContentKind::JavaScript => self.script.get().is_some(),
            ContentKind::Css => self.style.get().is_some(),
        }
    }

    /// Build every engine up front
    pub fn warm_up(&self) {
        for kind in ContentKind::ALL {
            match kind {
                ContentKind::Html => {
                    self.markup();
                }
                ContentKind::JavaScript => {
                    self.script();
                }
                ContentKind::Css => {
                    self.style();
                }
            }
        }
    }
}
