use super::Config;

const DEFAULT_LOCALE: &str = "ru";

/// Resolve locale: `REFERENT_LANG` env -> config value -> `"ru"`.
fn detect_locale(config_locale: &str) -> String {
    if let Ok(lang) = std::env::var("REFERENT_LANG") {
        let lang = lang.trim().to_lowercase();
        if !lang.is_empty() {
            return normalise_locale(&lang);
        }
    }

    let config_locale = config_locale.trim().to_lowercase();
    if !config_locale.is_empty() {
        return normalise_locale(&config_locale);
    }

    DEFAULT_LOCALE.into()
}

/// Normalise `"ru_RU.UTF-8"` -> `"ru"`, `"en-US"` -> `"en"`, passthrough `"ru"`.
fn normalise_locale(raw: &str) -> String {
    let base = raw.split('.').next().unwrap_or(raw);
    let lang = base.split(['_', '-']).next().unwrap_or(base);
    lang.to_string()
}

impl Config {
    /// Locale used for user-facing error messages. Passed explicitly to
    /// `t!` rather than set process-wide.
    pub fn resolved_locale(&self) -> String {
        detect_locale(&self.locale)
    }
}
