use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::market::{AdvisorError, MarketAdvisor};

/// Backend-agnostic advisor configuration.
///
/// `backend` must match the [`AdvisorFactory::backend_name`] of a registered
/// factory. `api_key` and `base_url` are passed through to that factory
/// unchanged; each backend decides whether it needs them.
///
/// | backend  | api_key                 | base_url                         |
/// |----------|-------------------------|----------------------------------|
/// | `stub`   | ignored                 | ignored                          |
/// | `gemini` | falls back to env vars  | defaults to the public endpoint  |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// Lowercase identifier matching a registered factory (e.g. `"gemini"`).
    pub backend: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            backend: "stub".to_string(),
            api_key: None,
            base_url: None,
        }
    }
}

/// One implementation per advisor backend. Each backend exports a unit
/// struct implementing this trait, registered with an [`AdvisorRegistry`] at
/// startup.
#[async_trait]
pub trait AdvisorFactory: Send + Sync {
    /// Unique, lowercase identifier for this backend.
    fn backend_name(&self) -> &'static str;

    /// Build a ready-to-use advisor from `config`.
    async fn create(
        &self,
        config: &AdvisorConfig,
    ) -> Result<Box<dyn MarketAdvisor>, AdvisorError>;
}

/// Registry of [`AdvisorFactory`] instances, keyed by backend name.
pub struct AdvisorRegistry {
    factories: HashMap<&'static str, Box<dyn AdvisorFactory>>,
}

impl AdvisorRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a backend factory, replacing any factory of the same name.
    pub fn register(
        &mut self,
        factory: Box<dyn AdvisorFactory>,
    ) {
        self.factories.insert(factory.backend_name(), factory);
    }

    /// Names of every registered backend, sorted alphabetically.
    pub fn available_backends(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Dispatch to the factory matching `config.backend`.
    ///
    /// # Errors
    /// * [`AdvisorError::Configuration`] when no factory is registered for
    ///   the requested backend name.
    /// * Any error the chosen factory itself returns.
    pub async fn create(
        &self,
        config: &AdvisorConfig,
    ) -> Result<Box<dyn MarketAdvisor>, AdvisorError> {
        let factory = self
            .factories
            .get(config.backend.as_str())
            .ok_or_else(|| {
                AdvisorError::Configuration(format!(
                    "unknown advisor backend '{}'; available: {:?}",
                    config.backend,
                    self.available_backends()
                ))
            })?;

        factory.create(config).await
    }
}

impl Default for AdvisorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// tests
// ─────────────────────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use super::{AdvisorConfig, AdvisorError, AdvisorFactory, AdvisorRegistry, MarketAdvisor};
    use crate::advisor::StubAdvisor;

    // ── stub factory ─────────────────────────────────────────────────────
    /// A factory whose `create` flips an `AtomicBool` and returns a
    /// [`StubAdvisor`], so tests can prove that `create` was reached.
    struct FlaggingFactory {
        name: &'static str,
        called: Arc<AtomicBool>,
    }

    #[async_trait]
    impl AdvisorFactory for FlaggingFactory {
        fn backend_name(&self) -> &'static str {
            self.name
        }
        async fn create(
            &self,
            _config: &AdvisorConfig,
        ) -> Result<Box<dyn MarketAdvisor>, AdvisorError> {
            self.called.store(true, Ordering::SeqCst);
            Ok(Box::new(StubAdvisor::default()))
        }
    }

    /// A factory that always fails, to check the registry passes errors on.
    struct FailingFactory;

    #[async_trait]
    impl AdvisorFactory for FailingFactory {
        fn backend_name(&self) -> &'static str {
            "failing"
        }
        async fn create(
            &self,
            _config: &AdvisorConfig,
        ) -> Result<Box<dyn MarketAdvisor>, AdvisorError> {
            Err(AdvisorError::Configuration("missing key".to_string()))
        }
    }

    fn flagging_factory(name: &'static str) -> (Box<dyn AdvisorFactory>, Arc<AtomicBool>) {
        let flag = Arc::new(AtomicBool::new(false));
        (
            Box::new(FlaggingFactory {
                name,
                called: flag.clone(),
            }),
            flag,
        )
    }

    fn config_for(backend: &str) -> AdvisorConfig {
        AdvisorConfig {
            backend: backend.to_string(),
            ..Default::default()
        }
    }

    // ── AdvisorConfig ────────────────────────────────────────────────────
    #[test]
    fn config_default_is_stub_without_credentials() {
        let cfg = AdvisorConfig::default();
        assert_eq!(cfg.backend, "stub");
        assert_eq!(cfg.api_key, None);
        assert_eq!(cfg.base_url, None);
    }

    // ── registration ─────────────────────────────────────────────────────
    #[test]
    fn new_registry_has_no_backends() {
        assert!(AdvisorRegistry::new().available_backends().is_empty());
    }

    #[test]
    fn available_backends_is_sorted() {
        let mut reg = AdvisorRegistry::new();
        let (f1, _) = flagging_factory("stub");
        let (f2, _) = flagging_factory("gemini");
        reg.register(f1);
        reg.register(f2);
        assert_eq!(reg.available_backends(), vec!["gemini", "stub"]);
    }

    #[test]
    fn duplicate_registration_replaces_previous() {
        let mut reg = AdvisorRegistry::new();
        let (old, _) = flagging_factory("stub");
        let (new, _) = flagging_factory("stub");
        reg.register(old);
        reg.register(new);
        assert_eq!(reg.available_backends(), vec!["stub"]);
    }

    // ── dispatch ─────────────────────────────────────────────────────────
    #[tokio::test]
    async fn create_calls_only_the_matching_factory() {
        let mut reg = AdvisorRegistry::new();
        let (stub, stub_called) = flagging_factory("stub");
        let (gemini, gemini_called) = flagging_factory("gemini");
        reg.register(stub);
        reg.register(gemini);

        let result = reg.create(&config_for("stub")).await;

        assert!(result.is_ok(), "expected Ok, got {:#?}", result.err());
        assert!(stub_called.load(Ordering::SeqCst));
        assert!(!gemini_called.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn unknown_backend_names_requested_and_available() {
        let mut reg = AdvisorRegistry::new();
        let (f, _) = flagging_factory("stub");
        reg.register(f);

        match reg.create(&config_for("openai")).await {
            Err(AdvisorError::Configuration(msg)) => {
                assert!(msg.contains("openai"), "should name the requested backend");
                assert!(msg.contains("stub"), "should list available backends");
            }
            Err(other) => panic!("expected Configuration error, got {other:#?}"),
            Ok(_) => panic!("expected Configuration error, got an advisor"),
        }
    }

    #[tokio::test]
    async fn create_propagates_factory_error() {
        let mut reg = AdvisorRegistry::new();
        reg.register(Box::new(FailingFactory));

        match reg.create(&config_for("failing")).await {
            Err(err) => assert_eq!(
                err,
                AdvisorError::Configuration("missing key".to_string())
            ),
            Ok(_) => panic!("expected the factory error"),
        }
    }
}
