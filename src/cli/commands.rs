use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use ultra_minify::core::resolver::{DEFAULT_CSS_COMPRESS, DEFAULT_JS_COMPRESS};
use ultra_minify::utils::{Logger, Timer};
use ultra_minify::{
    AsyncMinifier, CallOptions, ConfigLoader, ContentKind, MinificationStats, Minifier,
    OptionValue, ProcessConfig, Result,
};

#[derive(Parser)]
#[command(name = "ultra-minify")]
#[command(about = "Ultra Minify - HTML, JavaScript and CSS minification")]
pub struct Cli {
    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "ultra_minify=info")]
    pub log: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Minify a file or standard input
    Minify {
        /// Content kind: html, js or css
        kind: String,
        /// Input file (reads stdin when omitted)
        input: Option<PathBuf>,
        /// Output file (writes stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Config file (defaults to ./ultra-minify.config.json when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Call-site option as key=value, repeatable
        #[arg(long = "opt", value_parser = parse_assignment)]
        opts: Vec<(String, OptionValue)>,
        /// Process-wide JavaScript level
        #[arg(long)]
        js_compress: Option<String>,
        /// Process-wide CSS level
        #[arg(long)]
        css_compress: Option<String>,
        #[arg(long)]
        remove_comments: Option<bool>,
        #[arg(long)]
        remove_newlines: Option<bool>,
        #[arg(long)]
        html5: Option<bool>,
        /// Build all engines before minifying
        #[arg(long)]
        eager: bool,
        /// Print size statistics to stderr
        #[arg(long)]
        stats: bool,
    },
    /// Print an example config file
    Init,
    /// Show engine information
    Info,
}

/// Split a `key=value` argument
pub fn parse_assignment(raw: &str) -> std::result::Result<(String, OptionValue), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), OptionValue::parse(value.trim())))
        }
        _ => Err(format!("expected key=value, got '{}'", raw)),
    }
}

pub struct CliHandler;

impl CliHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn run(&self) -> Result<()> {
        let cli = Cli::parse();

        Logger::init(&cli.log);

        match cli.command {
            Commands::Minify {
                kind,
                input,
                output,
                config,
                opts,
                js_compress,
                css_compress,
                remove_comments,
                remove_newlines,
                html5,
                eager,
                stats,
            } => {
                let cli_config = ProcessConfig {
                    remove_comments: remove_comments.map(OptionValue::Flag),
                    remove_newlines: remove_newlines.map(OptionValue::Flag),
                    js_compress: js_compress.map(OptionValue::Text),
                    css_compress: css_compress.map(OptionValue::Text),
                    html5: html5.map(OptionValue::Flag),
                };
                let process_config = self.load_config(config.as_deref(), cli_config)?;
                let overrides: CallOptions = opts.into_iter().collect();

                self.handle_minify_command(
                    &kind,
                    input.as_deref(),
                    output.as_deref(),
                    process_config,
                    overrides,
                    eager,
                    stats,
                )
                .await
            }
            Commands::Init => {
                println!("{}", ConfigLoader::generate_example());
                Ok(())
            }
            Commands::Info => {
                self.handle_info_command();
                Ok(())
            }
        }
    }

    fn load_config(&self, path: Option<&Path>, cli_config: ProcessConfig) -> Result<ProcessConfig> {
        let file_config = match path {
            Some(path) => Some(ConfigLoader::load_from_path(path)?),
            None => ConfigLoader::load_from_file(&std::env::current_dir()?)?,
        };

        Ok(ConfigLoader::merge_with_cli(file_config, cli_config))
    }

    #[allow(clippy::too_many_arguments)]
    async fn handle_minify_command(
        &self,
        kind: &str,
        input: Option<&Path>,
        output: Option<&Path>,
        config: ProcessConfig,
        overrides: CallOptions,
        eager: bool,
        stats: bool,
    ) -> Result<()> {
        let kind: ContentKind = kind.parse()?;

        let source = match input {
            Some(path) => tokio::fs::read_to_string(path).await?,
            None => {
                let mut buffer = String::new();
                tokio::io::stdin().read_to_string(&mut buffer).await?;
                buffer
            }
        };

        let minifier = if eager {
            Minifier::eager(config)
        } else {
            Minifier::new(config)
        };
        let minifier = AsyncMinifier::new(minifier);
        let overrides = (!overrides.is_empty()).then_some(overrides);

        let _timer = Timer::start(&format!("Minifying {} input", kind));
        let minified = minifier
            .minify(kind, Some(source.clone()), overrides)
            .await?
            .unwrap_or_default();

        match output {
            Some(path) => tokio::fs::write(path, &minified).await?,
            None => println!("{}", minified),
        }

        if stats {
            self.show_stats(&MinificationStats::between(&source, &minified));
        }

        Ok(())
    }

    fn show_stats(&self, stats: &MinificationStats) {
        eprintln!(
            "  {} {} {}",
            "✓".bright_green(),
            format!("{:.1}%", stats.reduction_percentage).bright_white().bold(),
            format!(
                "({} → {} bytes, saved {})",
                stats.original_size, stats.minified_size, stats.saved_bytes
            )
            .bright_black()
        );
    }

    fn handle_info_command(&self) {
        println!("\n  {} {}", "ULTRA MINIFY".bright_cyan().bold(), env!("CARGO_PKG_VERSION").bright_white());
        println!();
        println!("  {} html  regex markup compactor (nested script/style delegated)", "•".bright_black());
        println!("  {} js    oxc (levels: clean, shrink, obfuscate, best)", "•".bright_black());
        println!("  {} css   Lightning CSS (levels: minify, pretty)", "•".bright_black());
        println!();
        println!("  Defaults: js_compress={}, css_compress={}", DEFAULT_JS_COMPRESS, DEFAULT_CSS_COMPRESS);
        println!("            remove_comments=true, remove_newlines=true, html5=true");
    }
}

impl Default for CliHandler {
    fn default() -> Self {
        Self::new()
    }
}
