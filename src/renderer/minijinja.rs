use super::filters::*;
use crate::{error::Result, renderer::interface::TemplateRenderer};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer that fails on undefined variables.
    pub fn new() -> Self {
        Self::with_undefined_behavior(UndefinedBehavior::Strict)
    }

    /// Creates a renderer that prints undefined variables as empty strings.
    ///
    /// Only meant for fixtures written against partial contexts; generation
    /// always uses [`MiniJinjaRenderer::new`].
    pub fn lenient() -> Self {
        Self::with_undefined_behavior(UndefinedBehavior::Lenient)
    }

    fn with_undefined_behavior(behavior: UndefinedBehavior) -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(behavior);
        env.set_keep_trailing_newline(true);
        // Output is source code and config files, never escaped markup.
        env.set_auto_escape_callback(|_| AutoEscape::None);

        env.add_filter("camel_case", to_camel_case);
        env.add_filter("kebab_case", to_kebab_case);
        env.add_filter("pascal_case", to_pascal_case);
        env.add_filter("screaming_snake_case", to_screaming_snake_case);
        env.add_filter("snake_case", to_snake_case);
        env.add_filter("table_case", to_table_case);
        env.add_filter("train_case", to_train_case);
        env.add_filter("plural", to_plural);
        env.add_filter("singular", to_singular);
        env.add_filter("foreign_key", to_foreign_key);
        env.add_filter("regex", regex_filter);
        env.add_filter("date", date_filter);

        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(
        &self,
        template: &str,
        context: &serde_json::Value,
        template_name: Option<&str>,
    ) -> Result<String> {
        let name = template_name.unwrap_or("<string>");
        Ok(self.env.render_named_str(name, template, context)?)
    }
}
