pub mod advisor;
pub mod calculations;
pub mod models;
pub mod parse;
pub mod validation;

pub use advisor::{
    AdvisorConfig, AdvisorError, AdvisorFactory, AdvisorRegistry, ImageRef, MarketAdvisor,
    PropertyAddress, RetryPolicy, RetryingAdvisor,
};
pub use calculations::{compute, evaluate, monthly_payment};
pub use models::*;
pub use validation::{validate, validate_parsed};
