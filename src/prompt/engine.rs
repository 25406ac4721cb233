use crate::error::PromptError;
use tera::{Context, Tera};

fn render_error(error: tera::Error) -> PromptError {
    if let tera::ErrorKind::TemplateNotFound(name) = &error.kind {
        return PromptError::NotFound(name.clone());
    }
    let mut message = error.to_string();
    let mut source = std::error::Error::source(&error);
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    PromptError::Render(message)
}

/// Tera-backed template engine with inline templates only. Autoescaping is
/// off for the names used here, so article text is inserted verbatim.
pub struct TeraEngine {
    tera: Tera,
}

impl TeraEngine {
    pub fn new() -> Self {
        Self {
            tera: Tera::default(),
        }
    }

    /// Register a template from a string.
    pub fn add_template(&mut self, name: &str, content: &str) -> Result<(), PromptError> {
        self.tera
            .add_raw_template(name, content)
            .map_err(render_error)
    }

    /// Render a named template with the given context.
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String, PromptError> {
        self.tera.render(template_name, context).map_err(render_error)
    }
}

impl Default for TeraEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_template_is_not_found() {
        let engine = TeraEngine::new();
        let err = engine.render("nonexistent", &Context::new()).unwrap_err();
        assert!(matches!(err, PromptError::NotFound(name) if name == "nonexistent"));
    }

    #[test]
    fn add_template_and_render() {
        let mut engine = TeraEngine::new();
        engine.add_template("greeting", "Привет, {{ name }}!").unwrap();

        let mut ctx = Context::new();
        ctx.insert("name", "мир");
        assert_eq!(engine.render("greeting", &ctx).unwrap(), "Привет, мир!");
    }

    #[test]
    fn missing_variable_fails_to_render() {
        let mut engine = TeraEngine::new();
        engine.add_template("greeting", "Hello, {{ name }}!").unwrap();

        let err = engine.render("greeting", &Context::new()).unwrap_err();
        assert!(matches!(err, PromptError::Render(_)));
    }

    #[test]
    fn values_are_not_escaped_or_reinterpreted() {
        let mut engine = TeraEngine::new();
        engine.add_template("about", "{{ content }}").unwrap();

        let mut ctx = Context::new();
        ctx.insert("content", "<b>a & b</b> {{ not_a_var }} {% raw %}");
        assert_eq!(
            engine.render("about", &ctx).unwrap(),
            "<b>a & b</b> {{ not_a_var }} {% raw %}"
        );
    }

    #[test]
    fn bad_template_syntax_is_rejected() {
        let mut engine = TeraEngine::new();
        assert!(engine.add_template("broken", "{{ unclosed").is_err());
    }
}
