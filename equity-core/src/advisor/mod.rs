//! Market advisor abstraction: property valuation, market commentary and
//! illustrative imagery.
//!
//! Backends implement [`MarketAdvisor`] and are built through an
//! [`AdvisorFactory`] registered with an [`AdvisorRegistry`]. The offline
//! [`StubAdvisor`] lives here; network backends live in their own crates.

mod address;
mod factory;
mod market;
mod retry;
mod stub;

pub use address::PropertyAddress;
pub use factory::{AdvisorConfig, AdvisorFactory, AdvisorRegistry};
pub use market::{AdvisorError, ImageRef, MarketAdvisor};
pub use retry::{RetryPolicy, RetryingAdvisor};
pub use stub::{StubAdvisor, StubAdvisorFactory};
