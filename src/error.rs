//! Error handling for plugin-init.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use thiserror::Error as ThisError;

/// Errors raised while scaffolding a plugin.
///
/// Every variant is terminal for the process: the binaries hand it to
/// [`default_error_handler`]. A missing manifest file is not an error; the
/// loader reports it as a warning and moves on.
#[derive(ThisError, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The plugin name contains characters other than alphanumerics and underscores
    #[error("Plugin name '{name}' is invalid: it must be alphanumeric (underscores allowed).")]
    InvalidPluginName { name: String },

    /// The plugin directory already exists and will not be overwritten
    #[error("Plugin directory '{output_dir}' already exists.")]
    OutputDirectoryExistsError { output_dir: String },

    /// The on-disk template directory could not be found
    #[error("Template directory not found at '{template_dir}'.")]
    TemplateDoesNotExistsError { template_dir: String },

    /// Represents errors that occur during template processing
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents errors raised by the embedded template engine
    #[error("MiniJinja error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors compiling a substitution pattern
    #[error("Pattern error: {0}.")]
    RegexError(#[from] regex::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("Error: {err}");
    std::process::exit(1);
}
