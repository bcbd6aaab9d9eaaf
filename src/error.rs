//! Error handling for the hummingbird application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for hummingbird operations.
///
/// Every command aborts on the first error it meets; nothing is retried.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Represents errors that occur during template parsing or rendering
    #[error("Template error: {0}")]
    TemplateError(String),

    /// A path was requested that is not part of the bundled template set
    #[error("Template '{path}' not found in the bundled template set")]
    NotFound { path: String },

    /// An external tool could not be started
    #[error("Failed to start '{program}': {source}")]
    LaunchError {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The project directory exists and `--force` was not given
    #[error("Output directory '{output_dir}' already exists. Use --force to overwrite it")]
    OutputDirectoryExistsError { output_dir: String },

    /// Represents validation failures in user input
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
