use thiserror::Error;

/// Source location attached to engine failures
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    pub line: Option<usize>,
    pub column: Option<usize>,
    pub code_snippet: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    pub fn with_snippet(mut self, snippet: String) -> Self {
        self.code_snippet = Some(snippet);
        self
    }
}

#[derive(Error, Debug)]
pub enum MinifyError {
    #[error("unknown engine: {0}")]
    UnknownEngine(String),

    #[error("JavaScript error: {message}")]
    Script {
        message: String,
        context: Option<ErrorContext>,
    },

    #[error("CSS error: {message}")]
    Stylesheet {
        message: String,
        context: Option<ErrorContext>,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl MinifyError {
    pub fn script(message: String) -> Self {
        Self::Script {
            message,
            context: None,
        }
    }

    pub fn stylesheet(message: String) -> Self {
        Self::Stylesheet {
            message,
            context: None,
        }
    }

    pub fn stylesheet_with_context(message: String, context: ErrorContext) -> Self {
        Self::Stylesheet {
            message,
            context: Some(context),
        }
    }

    pub fn config(message: String) -> Self {
        Self::Config(message)
    }

    /// Format error with location and snippet when available
    pub fn format_detailed(&self) -> String {
        match self {
            MinifyError::Script { message, context } => {
                self.format_error_with_context("JavaScript Error", message, context)
            }
            MinifyError::Stylesheet { message, context } => {
                self.format_error_with_context("CSS Error", message, context)
            }
            _ => format!("❌ Error: {}", self),
        }
    }

    fn format_error_with_context(
        &self,
        error_type: &str,
        message: &str,
        context: &Option<ErrorContext>,
    ) -> String {
        let mut output = format!("❌ {}: {}", error_type, message);

        if let Some(ctx) = context {
            if let (Some(line), Some(column)) = (ctx.line, ctx.column) {
                output.push_str(&format!("\n📍 Location: line {}, column {}", line, column));
            }

            if let Some(ref snippet) = ctx.code_snippet {
                output.push_str(&format!(
                    "\n📝 Code:\n{}",
                    format_code_snippet(snippet, ctx.line)
                ));
            }
        }

        output
    }
}

fn format_code_snippet(snippet: &str, error_line: Option<usize>) -> String {
    let mut output = String::new();

    for (i, line) in snippet.lines().enumerate() {
        let line_num = i + 1;

        if error_line == Some(line_num) {
            output.push_str(&format!("→ {:3} │ {}\n", line_num, line));
            output.push_str(&format!("     │ {}\n", "^^^".repeat(line.len().min(20))));
        } else {
            output.push_str(&format!("  {:3} │ {}\n", line_num, line));
        }
    }

    output
}

pub type Result<T> = std::result::Result<T, MinifyError>;

impl From<serde_json::Error> for MinifyError {
    fn from(err: serde_json::Error) -> Self {
        MinifyError::config(err.to_string())
    }
}

impl From<anyhow::Error> for MinifyError {
    fn from(err: anyhow::Error) -> Self {
        MinifyError::Other(err.to_string())
    }
}
