use miette::Diagnostic;
use thiserror::Error;

/// Main error type for lootgen operations.
///
/// Only structural failures surface as `LootError`. Problems with individual
/// records or files are collected as [`crate::diagnostics::Diagnostic`]s
/// instead, so one bad file never aborts a run.
#[derive(Error, Diagnostic, Debug)]
pub enum LootError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(lootgen::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(lootgen::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Source error: {message}")]
    #[diagnostic(code(lootgen::source))]
    Source {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Export error: {message}")]
    #[diagnostic(code(lootgen::export))]
    Export {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl LootError {
    /// Parse error without help text.
    pub(crate) fn parse(message: impl Into<String>) -> Self {
        LootError::Parse {
            message: message.into(),
            help: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LootError>;
