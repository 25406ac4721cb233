use super::catalog::ActionId;
use super::engine::TeraEngine;
use crate::error::PromptError;
use crate::utils::text::truncate_chars;
use strum::IntoEnumIterator;
use tera::Context;

/// System and user messages ready for the inference endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedPrompt {
    pub system_prompt: &'static str,
    pub user_prompt: String,
}

/// Renders the per-action user templates. Templates are registered once at
/// construction under the action's wire name.
pub struct PromptBuilder {
    engine: TeraEngine,
}

impl PromptBuilder {
    pub fn new() -> Result<Self, PromptError> {
        let mut engine = TeraEngine::new();
        for action in ActionId::iter() {
            engine.add_template(action.as_str(), action.config().user_template)?;
        }
        Ok(Self { engine })
    }

    /// Cut `content` to the action's input budget, then render its template.
    pub fn build(
        &self,
        action: ActionId,
        title: &str,
        content: &str,
    ) -> Result<PreparedPrompt, PromptError> {
        let config = action.config();
        let content = truncate_chars(content, config.max_input_chars);

        let mut ctx = Context::new();
        ctx.insert("title", title);
        ctx.insert("content", &content);

        Ok(PreparedPrompt {
            system_prompt: config.system_prompt,
            user_prompt: self.engine.render(action.as_str(), &ctx)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> PromptBuilder {
        PromptBuilder::new().unwrap()
    }

    #[test]
    fn renders_title_and_content_into_template() {
        let prompt = builder()
            .build(ActionId::About, "Новости", "Короткий текст")
            .unwrap();

        assert_eq!(prompt.system_prompt, ActionId::About.config().system_prompt);
        assert_eq!(
            prompt.user_prompt,
            "О чем эта статья?\n\nЗаголовок: Новости\n\nСодержание:\nКороткий текст\n\nДай краткое объяснение (2-3 предложения) о чем эта статья."
        );
    }

    #[test]
    fn content_within_budget_is_untouched() {
        let content = "a".repeat(12_000);
        let prompt = builder().build(ActionId::Thesis, "T", &content).unwrap();
        assert!(prompt.user_prompt.contains(&content));
        assert!(!prompt.user_prompt.contains(&format!("{content}...")));
    }

    #[test]
    fn content_over_budget_keeps_exact_prefix_then_ellipsis() {
        let content = format!("{}{}", "а".repeat(12_000), "Ω".repeat(500));
        let prompt = builder().build(ActionId::Telegram, "T", &content).unwrap();

        let expected = format!("{}...", "а".repeat(12_000));
        assert!(prompt.user_prompt.contains(&expected));
        assert!(!prompt.user_prompt.contains('Ω'));
    }

    #[test]
    fn translate_allows_longer_input() {
        let content = "x".repeat(15_000);
        let prompt = builder().build(ActionId::Translate, "T", &content).unwrap();
        assert!(prompt.user_prompt.contains(&content));

        let prompt = builder().build(ActionId::About, "T", &content).unwrap();
        assert!(!prompt.user_prompt.contains(&content));
    }

    #[test]
    fn each_action_has_its_own_system_prompt() {
        let builder = builder();
        let mut seen = std::collections::HashSet::new();
        for action in ActionId::iter() {
            let prompt = builder.build(action, "T", "C").unwrap();
            assert!(seen.insert(prompt.system_prompt), "{action}");
        }
    }
}
