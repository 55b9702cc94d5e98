//! Plugin scaffolding orchestration.
//! Both binaries run the same pipeline: validate the name, load the templates,
//! check the destination, render in memory, then write.

use log::debug;
use std::path::PathBuf;

use crate::config::{Category, Layout};
use crate::error::Result;
use crate::loader::{EmbeddedLoader, LocalLoader, TemplateLoader};
use crate::naming::{CodePolicy, PluginContext, PluginName};
use crate::processor::{ensure_output_dir, write_plugin, Processor};
use crate::renderer::{MiniJinjaRenderer, TemplateRenderer, TokenRenderer};

/// Where templates come from and how they are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// Templates read from the repository's template directory, token substitution
    Copier,
    /// Templates compiled into the binary, MiniJinja interpolation
    Generator,
}

impl Flavor {
    pub fn code_policy(&self) -> CodePolicy {
        match self {
            Flavor::Copier => CodePolicy::Padded,
            Flavor::Generator => CodePolicy::Truncated,
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug)]
pub struct Report {
    pub flavor: Flavor,
    pub name: PluginName,
    pub category: Category,
    pub plugin_dir: PathBuf,
    /// Files written, relative to `plugin_dir`, in manifest order
    pub created: Vec<PathBuf>,
    /// Manifest entries missing from the template directory
    pub skipped: Vec<PathBuf>,
}

/// Generates the plugin `name` under `layout`.
///
/// # Errors
/// * `Error::InvalidPluginName` before anything is read or written
/// * `Error::TemplateDoesNotExistsError` if the template directory is missing (copier only)
/// * `Error::OutputDirectoryExistsError` if the plugin directory already exists
/// * Rendering and IO errors
pub fn scaffold(flavor: Flavor, name: &str, category: Category, layout: &Layout) -> Result<Report> {
    let name = PluginName::parse(name)?;
    let context = PluginContext::new(&name, flavor.code_policy());

    let loader: Box<dyn TemplateLoader> = match flavor {
        Flavor::Copier => {
            debug!("Using template directory '{}'", layout.template_dir().display());
            Box::new(LocalLoader::new(layout.template_dir()))
        }
        Flavor::Generator => Box::new(EmbeddedLoader::new()),
    };
    let renderer: Box<dyn TemplateRenderer> = match flavor {
        Flavor::Copier => Box::new(TokenRenderer::new()?),
        Flavor::Generator => Box::new(MiniJinjaRenderer::new()),
    };

    let loaded = loader.load()?;
    let plugin_dir = ensure_output_dir(layout.plugin_dir(category, name.as_str()))?;

    let processor = Processor::new(&*renderer, &context, &plugin_dir);
    let files = processor.process_all(&loaded.files)?;

    write_plugin(&plugin_dir, &files)?;
    debug!("Created {} file(s) in '{}'", files.len(), plugin_dir.display());

    Ok(Report {
        flavor,
        name,
        category,
        plugin_dir,
        created: files.into_iter().map(|f| f.relative).collect(),
        skipped: loaded.skipped,
    })
}
