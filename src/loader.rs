//! Template loading for plugin-init.
//! Templates come either from the repository's template directory or from the
//! copies compiled into the binary.
use crate::constants::TEMPLATE_MANIFEST;
use crate::embedded::EMBEDDED_TEMPLATES;
use crate::error::{Error, Result};
use log::{debug, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A single template: its path relative to the plugin directory and its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub path: PathBuf,
    pub content: String,
}

/// Result of loading a template set.
#[derive(Debug, Default)]
pub struct LoadedTemplates {
    pub files: Vec<TemplateFile>,
    /// Manifest entries that were absent from the template directory.
    pub skipped: Vec<PathBuf>,
}

/// Trait for loading templates from different sources.
pub trait TemplateLoader {
    /// Loads every template of the set.
    fn load(&self) -> Result<LoadedTemplates>;
}

/// Loader for the template directory on the local filesystem.
pub struct LocalLoader<P: AsRef<Path>> {
    path: P,
    manifest: Vec<PathBuf>,
}

impl<P: AsRef<Path>> LocalLoader<P> {
    /// Creates a loader reading the standard manifest from `path`.
    pub fn new(path: P) -> Self {
        Self::with_manifest(path, TEMPLATE_MANIFEST.iter().map(PathBuf::from).collect())
    }

    pub fn with_manifest(path: P, manifest: Vec<PathBuf>) -> Self {
        Self { path, manifest }
    }
}

impl<P: AsRef<Path>> TemplateLoader for LocalLoader<P> {
    /// Reads the manifest files from the template directory.
    ///
    /// # Errors
    /// * `Error::TemplateDoesNotExistsError` if the template directory is missing
    /// * `Error::IoError` if a manifest file exists but cannot be read
    fn load(&self) -> Result<LoadedTemplates> {
        let root = self.path.as_ref();
        if !root.is_dir() {
            return Err(Error::TemplateDoesNotExistsError {
                template_dir: root.display().to_string(),
            });
        }

        let mut loaded = LoadedTemplates::default();
        for relative in &self.manifest {
            let source = root.join(relative);
            match fs::read_to_string(&source) {
                Ok(content) => {
                    debug!("Loaded template file '{}'.", source.display());
                    loaded.files.push(TemplateFile { path: relative.clone(), content });
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    warn!("Template file '{}' not found, skipping.", relative.display());
                    loaded.skipped.push(relative.clone());
                }
                Err(e) => return Err(Error::IoError(e)),
            }
        }
        Ok(loaded)
    }
}

/// Loader for the templates compiled into the binary.
#[derive(Debug, Default)]
pub struct EmbeddedLoader;

impl EmbeddedLoader {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateLoader for EmbeddedLoader {
    fn load(&self) -> Result<LoadedTemplates> {
        let files = EMBEDDED_TEMPLATES
            .iter()
            .map(|(path, content)| TemplateFile {
                path: PathBuf::from(path),
                content: content.to_string(),
            })
            .collect();
        Ok(LoadedTemplates { files, skipped: Vec::new() })
    }
}
