//! Filesystem layout of the plugin repository.
//! Resolves where templates are read from and where new plugins are written.

use std::path::{Path, PathBuf};

use crate::constants::{DEMOS_DIR, PLUGINS_DIR, TEMPLATE_DIR};

/// Which top-level directory receives the new plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Plugin,
    Demo,
}

impl Category {
    pub fn from_demo_flag(demo: bool) -> Self {
        if demo {
            Category::Demo
        } else {
            Category::Plugin
        }
    }

    /// Directory name relative to the repository root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Plugin => PLUGINS_DIR,
            Category::Demo => DEMOS_DIR,
        }
    }
}

/// Repository layout rooted at a single directory.
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    /// Layout rooted at `root`, or at the current directory when `None`.
    pub fn from_root(root: Option<PathBuf>) -> Self {
        Self::new(root.unwrap_or_else(|| PathBuf::from(".")))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the on-disk template.
    pub fn template_dir(&self) -> PathBuf {
        TEMPLATE_DIR.iter().fold(self.root.clone(), |path, part| path.join(part))
    }

    /// Top-level output directory for `category`.
    pub fn output_root(&self, category: Category) -> PathBuf {
        self.root.join(category.dir_name())
    }

    /// Directory the plugin named `name` is generated into.
    pub fn plugin_dir(&self, category: Category, name: &str) -> PathBuf {
        self.output_root(category).join(name)
    }
}
