use async_trait::async_trait;
use thiserror::Error;

use super::address::PropertyAddress;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AdvisorError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("{0}")]
    InvalidAddress(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Unusable reply: {0}")]
    InvalidReply(String),

    #[error("Gave up after {attempts} attempts: {last}")]
    RetriesExhausted {
        attempts: u32,
        last: Box<AdvisorError>,
    },
}

/// A generated image, carried inline as base64.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub mime_type: String,
    /// Base64-encoded image bytes.
    pub data: String,
}

impl ImageRef {
    /// Renders the image as a `data:` URL suitable for an `<img src>`.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// The generative-AI collaborator behind the calculator.
///
/// Each operation is independent, so an implementation can be swapped out
/// (or decorated, see [`RetryingAdvisor`](super::RetryingAdvisor)) without
/// touching the calculation engine.
#[async_trait]
pub trait MarketAdvisor: Send + Sync {
    /// Short identifier used in log records.
    fn name(&self) -> &str;

    /// Estimates the market value of the property at `address`, in dollars.
    async fn estimate_value(
        &self,
        address: &PropertyAddress,
    ) -> Result<f64, AdvisorError>;

    /// Writes a short, encouraging market commentary for a prospective
    /// purchase at `new_home_price` with a total monthly payment of
    /// `new_monthly_payment`.
    async fn get_insight(
        &self,
        new_home_price: f64,
        new_monthly_payment: f64,
    ) -> Result<String, AdvisorError>;

    /// Produces an illustrative picture of a home at `new_home_price`.
    async fn get_image(
        &self,
        new_home_price: f64,
    ) -> Result<ImageRef, AdvisorError>;
}
