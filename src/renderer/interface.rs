use crate::error::Result;
use std::path::Path;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    /// * `template_name` - Optional name for the template (used in error messages)
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    ///
    /// # Errors
    /// * `Error::UndefinedVariable` when the renderer is strict and the
    ///   template uses a variable missing from `context`
    fn render(
        &self,
        template: &str,
        context: &serde_json::Value,
        template_name: Option<&str>,
    ) -> Result<String>;

    /// Reads a template file and renders its content, naming the template
    /// after the file path.
    fn render_file(
        &self,
        template_path: &Path,
        context: &serde_json::Value,
    ) -> Result<String> {
        let content = std::fs::read_to_string(template_path)?;
        let name = template_path.display().to_string();
        self.render(&content, context, Some(&name))
    }
}
