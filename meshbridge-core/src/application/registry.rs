// meshbridge-core/src/application/registry.rs
//
// Engine-type tag -> translator. Lookups are exact and case-sensitive on the
// canonical lowercase tag; an unknown tag is the caller's problem.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use crate::application::engines::MysqlTranslator;
use crate::application::secrets::SecretResolver;
use crate::infrastructure::config::ConnectorSettings;
use crate::infrastructure::error::SecretError;
use crate::ports::translator::EngineTranslator;

#[derive(Clone, Default)]
pub struct EngineRegistry {
    translators: HashMap<&'static str, Arc<dyn EngineTranslator>>,
}

impl EngineRegistry {
    /// Registers every supported engine, sharing one secret resolver when
    /// the settings carry a vault section.
    pub fn from_settings(settings: &ConnectorSettings) -> Result<Self, SecretError> {
        let resolver = settings
            .vault
            .as_ref()
            .map(SecretResolver::from_settings)
            .transpose()?;
        info!(vault = resolver.is_some(), "Building engine registry");

        Ok(Self::default().with_translator(Arc::new(MysqlTranslator::new(resolver))))
    }

    pub fn with_translator(mut self, translator: Arc<dyn EngineTranslator>) -> Self {
        self.translators.insert(translator.tag(), translator);
        self
    }

    pub fn get(&self, tag: &str) -> Option<Arc<dyn EngineTranslator>> {
        self.translators.get(tag).cloned()
    }

    pub fn is_supported(&self, tag: &str) -> bool {
        self.translators.contains_key(tag)
    }

    /// Registered tags, sorted.
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags: Vec<_> = self.translators.keys().copied().collect();
        tags.sort_unstable();
        tags
    }
}
