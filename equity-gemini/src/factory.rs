use async_trait::async_trait;

use equity_core::{AdvisorConfig, AdvisorError, AdvisorFactory, MarketAdvisor};

use crate::client::GeminiAdvisor;

/// Environment variables consulted, in order, when the config has no key.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Picks the API key: an explicit non-blank config value wins, then the
/// first non-blank variable in [`API_KEY_VARS`] as reported by `lookup`.
fn resolve_api_key(
    configured: Option<&str>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Option<String> {
    configured
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .or_else(|| {
            API_KEY_VARS
                .iter()
                .filter_map(|var| lookup(var))
                .map(|key| key.trim().to_string())
                .find(|key| !key.is_empty())
        })
}

/// [`AdvisorFactory`] for Gemini.
///
/// Register this with an [`equity_core::AdvisorRegistry`] to make the
/// `"gemini"` backend available:
///
/// ```rust,no_run
/// use equity_core::AdvisorRegistry;
/// use equity_gemini::GeminiAdvisorFactory;
///
/// let mut registry = AdvisorRegistry::new();
/// registry.register(Box::new(GeminiAdvisorFactory));
/// ```
pub struct GeminiAdvisorFactory;

#[async_trait]
impl AdvisorFactory for GeminiAdvisorFactory {
    fn backend_name(&self) -> &'static str {
        "gemini"
    }

    /// Build a [`GeminiAdvisor`].
    ///
    /// `config.base_url` overrides the public endpoint (useful for proxies).
    async fn create(
        &self,
        config: &AdvisorConfig,
    ) -> Result<Box<dyn MarketAdvisor>, AdvisorError> {
        let api_key = resolve_api_key(config.api_key.as_deref(), |var| std::env::var(var).ok())
            .ok_or_else(|| {
                AdvisorError::Configuration(format!(
                    "no API key for the gemini backend; set advisor.api_key or one of {}",
                    API_KEY_VARS.join(", ")
                ))
            })?;
        Ok(Box::new(GeminiAdvisor::new(api_key, config.base_url.clone())))
    }
}
