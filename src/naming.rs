//! Plugin name validation and the identifiers derived from it.

use cruet::Inflector;
use serde::Serialize;
use std::fmt;

use crate::error::{Error, Result};

/// Number of characters in a product code.
pub const PRODUCT_CODE_LEN: usize = 4;

/// Filler used by [`CodePolicy::Padded`] for names shorter than a product code.
pub const PRODUCT_CODE_PAD: char = 'X';

/// A validated plugin name.
///
/// Only alphanumeric characters and underscores are accepted, and at least one
/// character must be alphanumeric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginName(String);

impl PluginName {
    /// Validates `name` and wraps it.
    ///
    /// # Errors
    /// * `Error::InvalidPluginName` if the name is empty, made only of
    ///   underscores, or contains any other character
    pub fn parse<S: Into<String>>(name: S) -> Result<Self> {
        let name = name.into();
        let has_alphanumeric = name.chars().any(char::is_alphanumeric);
        let only_allowed = name.chars().all(|c| c.is_alphanumeric() || c == '_');

        if !has_alphanumeric || !only_allowed {
            return Err(Error::InvalidPluginName { name });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PluginName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PluginName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// How a product code is derived from names shorter than four characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodePolicy {
    /// Right-pad with `X` to exactly four characters (`Vb` -> `VBXX`).
    Padded,
    /// Keep whatever is there (`Vb` -> `VB`).
    Truncated,
}

/// Derives the product code: the first four characters, upper-cased.
///
/// Upper-casing happens after truncation, so characters whose upper-case form
/// expands (e.g. `ß`) may yield more than four characters.
pub fn product_code(name: &str, policy: CodePolicy) -> String {
    let head: String = name.chars().take(PRODUCT_CODE_LEN).collect();
    let mut code = head.to_uppercase();

    if policy == CodePolicy::Padded {
        let len = code.chars().count();
        if len < PRODUCT_CODE_LEN {
            code.extend(std::iter::repeat(PRODUCT_CODE_PAD).take(PRODUCT_CODE_LEN - len));
        }
    }
    code
}

/// Every identifier the templates need, derived once from the plugin name.
///
/// Serialized as the rendering context of the embedded templates.
#[derive(Debug, Clone, Serialize)]
pub struct PluginContext {
    pub name: String,
    pub upper: String,
    pub title: String,
    pub processor: String,
    pub editor: String,
    pub params: String,
    pub look_and_feel: String,
    pub resources: String,
    pub binary_data: String,
    pub code: String,
}

impl PluginContext {
    pub fn new(name: &PluginName, policy: CodePolicy) -> Self {
        let name = name.as_str();
        Self {
            name: name.to_string(),
            upper: name.to_uppercase(),
            title: name.to_title_case(),
            processor: format!("{name}AudioProcessor"),
            editor: format!("{name}AudioProcessorEditor"),
            params: format!("{name}Params"),
            look_and_feel: format!("{name}LookAndFeel"),
            resources: format!("{name}Resources"),
            binary_data: format!("{name}BinaryData"),
            code: product_code(name, policy),
        }
    }
}
