//! Configuration-driven minification of HTML, JavaScript and CSS fragments.
//!
//! A [`Minifier`] owns an immutable [`ProcessConfig`] and one lazily built
//! engine per [`ContentKind`]. Each call resolves its options with the
//! precedence process config, then call-site overrides, then built-in
//! defaults.
//!
//! ```no_run
//! use ultra_minify::{CallOptions, ContentKind, Minifier, ProcessConfig};
//!
//! let minifier = Minifier::new(ProcessConfig::default());
//! let css = minifier.minify(ContentKind::Css, Some("a { color: red; }"), None)?;
//! assert_eq!(css.as_deref(), Some("a{color:red}"));
//!
//! let overrides = CallOptions::new().with("compress", "clean");
//! let _js = minifier.minify_tagged("js", Some("var x = 1;"), Some(&overrides))?;
//! # Ok::<(), ultra_minify::MinifyError>(())
//! ```

pub mod core;
pub mod infrastructure;
pub mod utils;

pub use crate::core::{
    AsyncMinifier, CallOptions, CompactionEngine, CompressLevel, ContentKind, HtmlOptions,
    MinificationStats, Minifier, OptionResolver, OptionValue, ProcessConfig, ResolvedOptions,
    ScriptOptions, StyleOptions,
};
pub use crate::utils::{ConfigLoader, MinifyError, Result};
