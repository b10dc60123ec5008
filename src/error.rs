use std::path::PathBuf;

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Error during file I/O operations
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Error during JSON serialization
    #[error("json error: {0}")]
    SerdeJson(#[from] serde_json::Error),
    /// Error when user input fails.
    #[error("inquire error: {0}")]
    Inquire(#[from] inquire::InquireError),
    /// Error when executing Git commands
    #[error("git command failed: {0}")]
    GitCommand(String),
    /// Home directory could not be resolved
    #[error("failed to find the home directory")]
    HomeDirNotFound,
    /// Shell startup file to receive the PATH export does not exist
    #[error("shell config file not found: {}", .0.display())]
    ShellConfigMissing(PathBuf),
    /// Command invoked with missing or empty arguments
    #[error("usage: {0}")]
    Usage(String),
    /// Error during input validation.
    #[error("validation error: {0}")]
    Validation(String),
    /// Stored line for a key could not be parsed into a profile
    #[error("invalid configuration for key: '{0}'")]
    InvalidProfile(String),
    /// Error during UTF-8 conversion.
    #[error("UTF-8 error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
}
