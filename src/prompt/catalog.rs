use serde::{Deserialize, Serialize};

/// The four processing actions. Parsing is case-sensitive and accepts only
/// the lowercase wire names.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ActionId {
    /// Two or three sentences on what the article is about.
    About,
    /// Bullet list of the main theses.
    Thesis,
    /// Emoji-rich Telegram post.
    Telegram,
    /// Full translation into Russian.
    Translate,
}

/// Model, budgets and prompts for one action. Immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionConfig {
    pub model_id: &'static str,
    pub max_output_tokens: u32,
    /// Content longer than this is cut before templating.
    pub max_input_chars: usize,
    pub system_prompt: &'static str,
    /// Tera template; receives `title` and `content`.
    pub user_template: &'static str,
}

const SUMMARY_MODEL: &str = "openai/gpt-4o-mini";
const TRANSLATION_MODEL: &str = "deepseek/deepseek-chat";

const SUMMARY_MAX_OUTPUT_TOKENS: u32 = 1000;
const SUMMARY_MAX_INPUT_CHARS: usize = 12_000;
const TRANSLATION_MAX_OUTPUT_TOKENS: u32 = 4000;
const TRANSLATION_MAX_INPUT_CHARS: usize = 16_000;

const ABOUT: ActionConfig = ActionConfig {
    model_id: SUMMARY_MODEL,
    max_output_tokens: SUMMARY_MAX_OUTPUT_TOKENS,
    max_input_chars: SUMMARY_MAX_INPUT_CHARS,
    system_prompt: "Ты помощник, который кратко объясняет содержание статей. Отвечай на русском языке в дружелюбном тоне.",
    user_template: "О чем эта статья?\n\nЗаголовок: {{ title }}\n\nСодержание:\n{{ content }}\n\nДай краткое объяснение (2-3 предложения) о чем эта статья.",
};

const THESIS: ActionConfig = ActionConfig {
    model_id: SUMMARY_MODEL,
    max_output_tokens: SUMMARY_MAX_OUTPUT_TOKENS,
    max_input_chars: SUMMARY_MAX_INPUT_CHARS,
    system_prompt: "Ты помощник, который создает тезисы из статей. Отвечай на русском языке. Форматируй тезисы в виде списка с четкими пунктами.",
    user_template: "Создай тезисы на основе этой статьи:\n\nЗаголовок: {{ title }}\n\nСодержание:\n{{ content }}\n\nСоздай список основных тезисов (5-7 пунктов).",
};

const TELEGRAM: ActionConfig = ActionConfig {
    model_id: SUMMARY_MODEL,
    max_output_tokens: SUMMARY_MAX_OUTPUT_TOKENS,
    max_input_chars: SUMMARY_MAX_INPUT_CHARS,
    system_prompt: "Ты помощник, который создает посты для Telegram на основе статей. Отвечай на русском языке. Используй эмодзи, короткие абзацы и привлекательный стиль для социальных сетей.",
    user_template: "Создай пост для Telegram на основе этой статьи:\n\nЗаголовок: {{ title }}\n\nСодержание:\n{{ content }}\n\nСоздай интересный пост для Telegram с эмодзи, который кратко рассказывает о статье и привлекает внимание.",
};

const TRANSLATE: ActionConfig = ActionConfig {
    model_id: TRANSLATION_MODEL,
    max_output_tokens: TRANSLATION_MAX_OUTPUT_TOKENS,
    max_input_chars: TRANSLATION_MAX_INPUT_CHARS,
    system_prompt: "Ты профессиональный переводчик. Переводи статьи с английского языка на русский язык. Сохраняй структуру текста, форматирование и смысл оригинала. Переводи точно и естественно.",
    user_template: "Переведи эту статью на русский язык:\n\nЗаголовок: {{ title }}\n\nСодержание:\n{{ content }}\n\nПереведи весь текст статьи, включая заголовок, на русский язык. Сохрани структуру и форматирование.",
};

impl ActionId {
    pub fn config(self) -> &'static ActionConfig {
        match self {
            Self::About => &ABOUT,
            Self::Thesis => &THESIS,
            Self::Telegram => &TELEGRAM,
            Self::Translate => &TRANSLATE,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Short English description for listings.
    pub fn description(self) -> &'static str {
        match self {
            Self::About => "what the article is about, in 2-3 sentences",
            Self::Thesis => "5-7 key theses as a list",
            Self::Telegram => "a Telegram post with emoji",
            Self::Translate => "full translation into Russian",
        }
    }
}
