//! Error types and handling infrastructure for portfolio-term.
//!
//! Library code reports failures through [`PortfolioError`]; section renderers and the binary
//! use `anyhow` at the edges. Every variant here is recoverable by the navigation layer except
//! that `Interrupted` is deliberately carried upward until the application shuts down cleanly.

use thiserror::Error;

/// The main error type for portfolio-term operations.
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// Raw-mode configuration or a raw keystroke read failed.
    ///
    /// Readers fall back to line-based input when they see this variant.
    #[error("Terminal interaction unavailable: {message}")]
    Terminal {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing to the output stream failed
    #[error("I/O operation failed: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The user asked to leave the whole program (Ctrl+C, or quit from inside a section)
    #[error("Interrupted by user")]
    Interrupted,

    /// A menu was declared without any items
    #[error("Menu '{title}' has no items")]
    EmptyMenu { title: String },

    /// A section renderer failed while drawing its content
    #[error("Section '{section}' failed to render: {message}")]
    Render { section: String, message: String },

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Standard Result type for portfolio-term operations.
pub type Result<T> = std::result::Result<T, PortfolioError>;

impl PortfolioError {
    /// Create a Terminal error from an io::Error with additional context
    pub fn terminal(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Terminal {
            message: message.into(),
            source,
        }
    }

    /// Create a Render error for the named section
    pub fn render(section: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Render {
            section: section.into(),
            message: message.into(),
        }
    }

    /// Create a Config error with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// True when this error is the user's cancellation signal
    pub fn is_interrupt(&self) -> bool {
        matches!(self, Self::Interrupted)
    }

    /// True when the failure means raw keystroke capture is not possible right now
    pub fn is_terminal_unavailable(&self) -> bool {
        matches!(self, Self::Terminal { .. })
    }
}

impl From<std::io::Error> for PortfolioError {
    fn from(err: std::io::Error) -> Self {
        let message = match err.kind() {
            std::io::ErrorKind::BrokenPipe => "Output stream closed",
            std::io::ErrorKind::WriteZero => "Output stream refused data",
            _ => "IO operation failed",
        };
        Self::Io {
            message: message.to_string(),
            source: err,
        }
    }
}
