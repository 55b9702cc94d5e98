//! Template renderers for plugin-init.
//! On-disk templates are rewritten by literal token substitution, embedded
//! templates are rendered with MiniJinja.
use crate::error::{Error, Result};
use crate::naming::PluginContext;
use log::trace;
use minijinja::Environment;
use regex::Regex;

/// Placeholder word used throughout the on-disk template.
pub const PLACEHOLDER: &str = "Template";

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Identifiers derived from the plugin name
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &PluginContext) -> Result<String>;
}

/// Rewrites the placeholder identifiers of the on-disk template.
///
/// Substitutions run in a fixed order over the whole content. Longer
/// identifiers go first, and a final word-bounded pass renames any remaining
/// standalone `Template`.
pub struct TokenRenderer {
    standalone: Regex,
}

impl TokenRenderer {
    pub fn new() -> Result<Self> {
        let standalone = Regex::new(&format!(r"\b{PLACEHOLDER}\b"))?;
        Ok(Self { standalone })
    }

    /// Ordered literal substitutions for `context`.
    pub fn substitutions(context: &PluginContext) -> Vec<(String, String)> {
        vec![
            ("TemplateAudioProcessor".into(), context.processor.clone()),
            ("TemplateAudioProcessorEditor".into(), context.editor.clone()),
            ("TemplateParams".into(), context.params.clone()),
            ("TemplateLookAndFeel".into(), context.look_and_feel.clone()),
            ("PROD_CODE TEMP".into(), format!("PROD_CODE {}", context.code)),
            (
                r#"c.subtitle = "TEMPLATE";"#.into(),
                format!(r#"c.subtitle = "{}";"#, context.upper),
            ),
            ("TemplateResources".into(), context.resources.clone()),
            ("TemplateBinaryData".into(), context.binary_data.clone()),
            (
                "target_link_libraries(Template".into(),
                format!("target_link_libraries({}", context.name),
            ),
        ]
    }
}

impl TemplateRenderer for TokenRenderer {
    fn render(&self, template: &str, context: &PluginContext) -> Result<String> {
        let mut content = template.to_string();
        for (from, to) in Self::substitutions(context) {
            if content.contains(&from) {
                trace!("Replacing '{from}' with '{to}'");
                content = content.replace(&from, &to);
            }
        }
        Ok(self.standalone.replace_all(&content, context.name.as_str()).into_owned())
    }
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer that preserves trailing newlines.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if the template fails to parse or render
    fn render(&self, template: &str, context: &PluginContext) -> Result<String> {
        self.env.render_str(template, context).map_err(Error::MinijinjaError)
    }
}
