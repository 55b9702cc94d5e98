//! Turns loaded templates into the files of a new plugin directory.
//! Rendering is done entirely in memory; nothing touches the disk until
//! [`write_plugin`] runs.

use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};
use crate::loader::TemplateFile;
use crate::naming::PluginContext;
use crate::renderer::TemplateRenderer;

/// A rendered file ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedFile {
    /// Path relative to the plugin directory
    pub relative: PathBuf,
    /// Absolute or root-relative destination
    pub target: PathBuf,
    pub content: String,
}

/// Ensures the plugin directory does not exist yet.
///
/// # Errors
/// * `Error::OutputDirectoryExistsError` if `output_dir` already exists
pub fn ensure_output_dir<P: AsRef<Path>>(output_dir: P) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if output_dir.exists() {
        return Err(Error::OutputDirectoryExistsError {
            output_dir: output_dir.display().to_string(),
        });
    }
    Ok(output_dir.to_path_buf())
}

/// Checks that a template path stays inside the plugin directory.
pub fn is_relative_path_valid<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    !path.as_os_str().is_empty()
        && path.components().all(|component| matches!(component, Component::Normal(_)))
}

pub struct Processor<'a> {
    renderer: &'a dyn TemplateRenderer,
    context: &'a PluginContext,
    plugin_dir: &'a Path,
}

impl<'a> Processor<'a> {
    pub fn new(
        renderer: &'a dyn TemplateRenderer,
        context: &'a PluginContext,
        plugin_dir: &'a Path,
    ) -> Self {
        Self { renderer, context, plugin_dir }
    }

    /// Renders one template and resolves its destination.
    ///
    /// # Errors
    /// * `Error::TemplateError` if the template path would leave the plugin directory
    /// * Any error raised by the renderer
    pub fn process(&self, file: &TemplateFile) -> Result<ProcessedFile> {
        if !is_relative_path_valid(&file.path) {
            return Err(Error::TemplateError(format!(
                "template path '{}' is not a plain relative path",
                file.path.display()
            )));
        }

        let content = self.renderer.render(&file.content, self.context)?;
        let target = self.plugin_dir.join(&file.path);
        debug!("Rendered '{}' -> '{}'", file.path.display(), target.display());

        Ok(ProcessedFile { relative: file.path.clone(), target, content })
    }

    pub fn process_all(&self, files: &[TemplateFile]) -> Result<Vec<ProcessedFile>> {
        files.iter().map(|file| self.process(file)).collect()
    }
}

/// Creates `plugin_dir` and writes every processed file into it.
///
/// The plugin directory itself is created with a non-recursive call, so if
/// another run created it in the meantime this fails instead of writing into it.
///
/// # Errors
/// * `Error::OutputDirectoryExistsError` if `plugin_dir` appeared before creation
/// * `Error::IoError` for any other filesystem failure
pub fn write_plugin(plugin_dir: &Path, files: &[ProcessedFile]) -> Result<()> {
    if let Some(parent) = plugin_dir.parent() {
        fs::create_dir_all(parent)?;
    }
    match fs::create_dir(plugin_dir) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(Error::OutputDirectoryExistsError {
                output_dir: plugin_dir.display().to_string(),
            });
        }
        Err(e) => return Err(Error::IoError(e)),
    }

    for file in files {
        if let Some(parent) = file.target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&file.target, &file.content)?;
        debug!("Wrote '{}'", file.target.display());
    }
    Ok(())
}
