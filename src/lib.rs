//! plugin-init scaffolds new audio plugins for the Jonssonic repository.
//! It copies the template plugin (or the built-in templates), renames every
//! placeholder after the new plugin and writes the result to a fresh directory.

/// Command-line interface for the `plugin-init` and `plugin-gen` binaries
pub mod cli;

/// Repository layout: template directory and output roots
pub mod config;

/// Common constants
pub mod constants;

/// Templates compiled into the binary
pub mod embedded;

/// Error types and handling
pub mod error;

/// Template loading from disk or from the binary
pub mod loader;

/// Logger setup shared by both binaries
pub mod logger;

/// Plugin name validation and derived identifiers
pub mod naming;

/// In-memory rendering and writing of the plugin directory
pub mod processor;

/// Template rendering engines
pub mod renderer;

/// Summary printed after a successful run
pub mod report;

/// End-to-end orchestration of a run
pub mod scaffold;
