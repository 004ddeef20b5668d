use async_trait::async_trait;

use super::address::PropertyAddress;
use super::factory::{AdvisorConfig, AdvisorFactory};
use super::market::{AdvisorError, ImageRef, MarketAdvisor};
use crate::calculations::common::format_currency;

/// A transparent 1×1 PNG.
const PLACEHOLDER_PNG: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

/// Offline advisor that answers instantly with fixed data.
#[derive(Debug, Clone)]
pub struct StubAdvisor {
    /// Value returned by every `estimate_value` call.
    pub estimated_value: f64,
}

impl Default for StubAdvisor {
    fn default() -> Self {
        Self {
            estimated_value: 350000.0,
        }
    }
}

#[async_trait]
impl MarketAdvisor for StubAdvisor {
    fn name(&self) -> &str {
        "stub"
    }

    async fn estimate_value(
        &self,
        address: &PropertyAddress,
    ) -> Result<f64, AdvisorError> {
        address.validate()?;
        Ok(self.estimated_value)
    }

    async fn get_insight(
        &self,
        new_home_price: f64,
        new_monthly_payment: f64,
    ) -> Result<String, AdvisorError> {
        Ok(format!(
            "A home around **{}** with a monthly payment near **{}** is an investment \
             in your future. Talk to a local agent to see what is available in your \
             price range.",
            format_currency(new_home_price),
            format_currency(new_monthly_payment)
        ))
    }

    async fn get_image(
        &self,
        _new_home_price: f64,
    ) -> Result<ImageRef, AdvisorError> {
        Ok(ImageRef {
            mime_type: "image/png".to_string(),
            data: PLACEHOLDER_PNG.to_string(),
        })
    }
}

/// [`AdvisorFactory`] for the `"stub"` backend.
pub struct StubAdvisorFactory;

#[async_trait]
impl AdvisorFactory for StubAdvisorFactory {
    fn backend_name(&self) -> &'static str {
        "stub"
    }

    async fn create(
        &self,
        _config: &AdvisorConfig,
    ) -> Result<Box<dyn MarketAdvisor>, AdvisorError> {
        Ok(Box::new(StubAdvisor::default()))
    }
}
