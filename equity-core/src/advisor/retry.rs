use std::time::Duration;

use async_trait::async_trait;
use tracing::{error, info, warn};

use super::address::PropertyAddress;
use super::market::{AdvisorError, ImageRef, MarketAdvisor};

/// How many times a value estimate is attempted and how long to wait
/// between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(1),
        }
    }
}

/// Decorates a [`MarketAdvisor`] so that `estimate_value` is retried.
///
/// A reply only counts as a success when it is a finite, positive number.
/// Address and configuration errors are returned immediately because
/// repeating the request cannot change them. `get_insight` and `get_image`
/// pass straight through.
pub struct RetryingAdvisor {
    inner: Box<dyn MarketAdvisor>,
    policy: RetryPolicy,
}

impl RetryingAdvisor {
    pub fn new(
        inner: Box<dyn MarketAdvisor>,
        policy: RetryPolicy,
    ) -> Self {
        Self { inner, policy }
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }
}

fn is_permanent(err: &AdvisorError) -> bool {
    matches!(
        err,
        AdvisorError::Configuration(_) | AdvisorError::InvalidAddress(_)
    )
}

#[async_trait]
impl MarketAdvisor for RetryingAdvisor {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn estimate_value(
        &self,
        address: &PropertyAddress,
    ) -> Result<f64, AdvisorError> {
        address.validate()?;

        let attempts = self.policy.max_attempts.max(1);
        let mut last = AdvisorError::InvalidReply("no attempt was made".to_string());

        for attempt in 1..=attempts {
            match self.inner.estimate_value(address).await {
                Ok(value) if value.is_finite() && value > 0.0 => {
                    info!(
                        advisor = self.inner.name(),
                        attempt,
                        value,
                        "Property value estimated"
                    );
                    return Ok(value);
                }
                Ok(value) => {
                    last = AdvisorError::InvalidReply(format!("'{value}' is not a usable value"));
                }
                Err(err) if is_permanent(&err) => return Err(err),
                Err(err) => last = err,
            }

            warn!(
                advisor = self.inner.name(),
                attempt,
                max_attempts = attempts,
                error = %last,
                "Value estimate attempt failed"
            );

            if attempt < attempts && !self.policy.delay.is_zero() {
                tokio::time::sleep(self.policy.delay).await;
            }
        }

        error!(
            advisor = self.inner.name(),
            attempts,
            error = %last,
            "Value estimate failed after all attempts"
        );
        Err(AdvisorError::RetriesExhausted {
            attempts,
            last: Box::new(last),
        })
    }

    async fn get_insight(
        &self,
        new_home_price: f64,
        new_monthly_payment: f64,
    ) -> Result<String, AdvisorError> {
        self.inner
            .get_insight(new_home_price, new_monthly_payment)
            .await
    }

    async fn get_image(
        &self,
        new_home_price: f64,
    ) -> Result<ImageRef, AdvisorError> {
        self.inner.get_image(new_home_price).await
    }
}
