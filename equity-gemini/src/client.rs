use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use equity_core::parse::parse_number;
use equity_core::{AdvisorError, ImageRef, MarketAdvisor, PropertyAddress};

use crate::prompts;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const TEXT_MODEL: &str = "gemini-2.5-flash";
pub const IMAGE_MODEL: &str = "gemini-2.5-flash-image";

// ── wire types ──────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    fn prompt(text: String) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(text),
                    inline_data: None,
                }],
            }],
            tools: Vec::new(),
            generation_config: None,
        }
    }

    fn with_search(mut self) -> Self {
        self.tools.push(Tool {
            google_search: GoogleSearch {},
        });
        self
    }

    fn image_only(mut self) -> Self {
        self.generation_config = Some(GenerationConfig {
            response_modalities: vec!["IMAGE"],
        });
        self
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default)]
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
struct GoogleSearch {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: Vec<&'static str>,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    fn parts(&self) -> impl Iterator<Item = &Part> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .into_iter()
            .flat_map(|content| content.parts.iter())
    }

    /// Concatenated text of the first candidate.
    fn text(&self) -> Result<String, AdvisorError> {
        let text: String = self.parts().filter_map(|p| p.text.as_deref()).collect();
        if text.trim().is_empty() {
            return Err(AdvisorError::InvalidReply(
                "reply contained no text".to_string(),
            ));
        }
        Ok(text)
    }

    /// First inline image of the first candidate.
    fn image(&self) -> Result<ImageRef, AdvisorError> {
        self.parts()
            .find_map(|p| p.inline_data.as_ref())
            .map(|inline| ImageRef {
                mime_type: if inline.mime_type.is_empty() {
                    "image/png".to_string()
                } else {
                    inline.mime_type.clone()
                },
                data: inline.data.clone(),
            })
            .ok_or_else(|| AdvisorError::InvalidReply("No image data found in response.".to_string()))
    }
}

/// Reads a dollar amount out of a model reply such as `"$525,000"`.
///
/// Everything except digits and `.` is dropped before parsing. A reply that
/// leaves nothing usable, or a value that is not positive, is rejected.
pub fn parse_estimated_value(reply: &str) -> Result<f64, AdvisorError> {
    let numeric: String = reply
        .trim()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let value = parse_number(&numeric);
    if value <= 0.0 {
        return Err(AdvisorError::InvalidReply(format!(
            "no positive value in '{}'",
            reply.trim()
        )));
    }
    Ok(value)
}

// ── advisor ─────────────────────────────────────────────────────────────────

/// [`MarketAdvisor`] backed by the Gemini `generateContent` REST endpoint.
pub struct GeminiAdvisor {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiAdvisor {
    pub fn new(
        api_key: impl Into<String>,
        base_url: Option<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        }
    }

    fn endpoint(
        &self,
        model: &str,
    ) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, AdvisorError> {
        debug!(model, "Sending generateContent request");

        let response = self
            .http
            .post(self.endpoint(model))
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| AdvisorError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!(model, status, "generateContent request rejected");
            return Err(AdvisorError::Api { status, body });
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| AdvisorError::InvalidReply(format!("malformed response: {e}")))
    }
}

#[async_trait]
impl MarketAdvisor for GeminiAdvisor {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn estimate_value(
        &self,
        address: &PropertyAddress,
    ) -> Result<f64, AdvisorError> {
        address.validate()?;
        let request = GenerateContentRequest::prompt(prompts::home_value(address)).with_search();
        let reply = self.generate(TEXT_MODEL, &request).await?.text()?;
        parse_estimated_value(&reply)
    }

    async fn get_insight(
        &self,
        new_home_price: f64,
        new_monthly_payment: f64,
    ) -> Result<String, AdvisorError> {
        let request = GenerateContentRequest::prompt(prompts::market_insight(
            new_home_price,
            new_monthly_payment,
        ));
        self.generate(TEXT_MODEL, &request).await?.text()
    }

    async fn get_image(
        &self,
        new_home_price: f64,
    ) -> Result<ImageRef, AdvisorError> {
        let request = GenerateContentRequest::prompt(prompts::house_image(new_home_price)).image_only();
        self.generate(IMAGE_MODEL, &request).await?.image()
    }
}
