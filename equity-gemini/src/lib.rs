//! Gemini backend for the [`equity_core::MarketAdvisor`] capability.

pub mod client;
pub mod factory;
pub mod prompts;

pub use client::{GeminiAdvisor, parse_estimated_value};
pub use factory::GeminiAdvisorFactory;
