use crate::article::{
    ArticleFetcher, ContentExtractor, ExtractionResult, NOT_FOUND, normalize_url,
};
use crate::config::Config;
use crate::error::{ExtractionError, InputError, PromptError, Result};
use crate::llm::{OpenRouterProvider, Provider};
use crate::prompt::{ActionId, PromptBuilder};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

/// Input of the generate operation. Fields arrive untrusted and are checked
/// in [`Pipeline::generate`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub action: String,
}

/// Result of [`Pipeline::extract_and_generate`].
#[derive(Debug, Clone, Serialize)]
pub struct ArticleDigest {
    pub article: ExtractionResult,
    pub action: ActionId,
    pub result: String,
}

/// The extract and generate operations with their collaborators. Holds no
/// per-request state; share it behind an `Arc`.
pub struct Pipeline {
    fetcher: ArticleFetcher,
    extractor: ContentExtractor,
    prompts: PromptBuilder,
    provider: Arc<dyn Provider>,
    temperature: f64,
}

impl Pipeline {
    pub fn new(
        fetcher: ArticleFetcher,
        extractor: ContentExtractor,
        provider: Arc<dyn Provider>,
        temperature: f64,
    ) -> std::result::Result<Self, PromptError> {
        Ok(Self {
            fetcher,
            extractor,
            prompts: PromptBuilder::new()?,
            provider,
            temperature,
        })
    }

    /// Wire the production collaborators from configuration.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let provider: Arc<dyn Provider> = Arc::new(OpenRouterProvider::new(
            config.api_key.as_deref(),
            &config.llm,
        ));
        let pipeline = Self::new(
            ArticleFetcher::new(&config.fetch)?,
            ContentExtractor::new(config.extract.min_content_chars),
            provider,
            config.llm.temperature,
        )?;
        Ok(pipeline)
    }

    pub fn provider(&self) -> &dyn Provider {
        self.provider.as_ref()
    }

    /// Fetch the page at `url` and pull out title, date and content.
    pub async fn extract(&self, url: &str) -> Result<ExtractionResult> {
        if url.trim().is_empty() {
            return Err(InputError::MissingUrl.into());
        }
        let url = normalize_url(url)?;

        tracing::info!(url = %url, "extract request");

        let page = self.fetcher.fetch(&url).await?;
        let result = self.extractor.extract(&page.body);

        tracing::info!(
            url = %page.final_url,
            title_found = result.title != NOT_FOUND,
            date_found = result.date != NOT_FOUND,
            content_chars = result.content.chars().count(),
            "article extracted"
        );

        Ok(result)
    }

    /// Run one action over already extracted text and return the model output.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        tracing::info!(
            has_title = !request.title.trim().is_empty(),
            has_content = !request.content.trim().is_empty(),
            action = %request.action,
            content_chars = request.content.chars().count(),
            "generate request"
        );

        let missing: Vec<&str> = [
            ("title", &request.title),
            ("content", &request.content),
            ("action", &request.action),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();
        if !missing.is_empty() {
            return Err(InputError::MissingFields(missing.join(", ")).into());
        }

        let action = ActionId::from_str(request.action.trim())
            .map_err(|_| InputError::InvalidAction(request.action.clone()))?;

        self.run_action(action, &request.title, &request.content)
            .await
    }

    /// Extract the article at `url`, then run `action` on it. The action is
    /// validated before anything is fetched.
    pub async fn extract_and_generate(&self, url: &str, action: &str) -> Result<ArticleDigest> {
        let action = ActionId::from_str(action.trim())
            .map_err(|_| InputError::InvalidAction(action.to_string()))?;

        let article = self.extract(url).await?;
        let result = self
            .run_action(action, &article.title, &article.content)
            .await?;

        Ok(ArticleDigest {
            article,
            action,
            result,
        })
    }

    async fn run_action(&self, action: ActionId, title: &str, content: &str) -> Result<String> {
        if content == NOT_FOUND {
            return Err(ExtractionError::Empty.into());
        }

        let config = action.config();
        let prompt = self.prompts.build(action, title, content)?;

        tracing::debug!(
            action = %action,
            model = config.model_id,
            max_tokens = config.max_output_tokens,
            prompt_chars = prompt.user_prompt.chars().count(),
            "sending generation request"
        );

        let text = self
            .provider
            .chat_with_system(
                Some(prompt.system_prompt),
                &prompt.user_prompt,
                config.model_id,
                config.max_output_tokens,
                self.temperature,
            )
            .await?;

        tracing::info!(action = %action, result_chars = text.chars().count(), "generation complete");
        Ok(text)
    }
}
