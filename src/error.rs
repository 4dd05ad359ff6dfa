use miette::Diagnostic;
use thiserror::Error;

/// Main error type for glex operations
#[derive(Error, Diagnostic, Debug)]
pub enum GlexError {
    #[error("IO error: {0}")]
    #[diagnostic(code(glex::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(glex::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Unable to read \"{name}\": {message}")]
    #[diagnostic(code(glex::resource))]
    Resource { name: String, message: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(glex::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(glex::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, GlexError>;
