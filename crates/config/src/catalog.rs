//! Scam pattern catalog
//!
//! Immutable registry of named scam-indicator definitions. Loaded once
//! at process start; a missing catalog file yields an empty catalog
//! and a warning, never a fatal error. There is no reload path.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;

use cupidsecure_core::PatternDefinition;

use crate::ConfigError;

/// Ordered, validated set of pattern definitions
#[derive(Debug, Clone, Default)]
pub struct PatternCatalog {
    patterns: Vec<PatternDefinition>,
}

impl PatternCatalog {
    /// Empty catalog; scoring then relies on the financial flag
    /// detector alone.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from raw definitions.
    ///
    /// Triggers are lower-cased for substring matching. Definitions
    /// with a duplicate name or no triggers are dropped with a warning;
    /// the first definition of a name wins.
    pub fn new(definitions: Vec<PatternDefinition>) -> Self {
        let mut patterns: Vec<PatternDefinition> = Vec::with_capacity(definitions.len());

        for mut definition in definitions {
            if definition.triggers.is_empty() {
                tracing::warn!(pattern = %definition.name, "Dropping pattern with no triggers");
                continue;
            }
            if patterns.iter().any(|p| p.name == definition.name) {
                tracing::warn!(pattern = %definition.name, "Dropping duplicate pattern name");
                continue;
            }
            for trigger in &mut definition.triggers {
                *trigger = trigger.to_lowercase();
            }
            patterns.push(definition);
        }

        Self { patterns }
    }

    /// Load from a JSON file containing an array of definitions.
    ///
    /// A missing file is not an error: it yields an empty catalog.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Pattern catalog file not found, using empty catalog");
            return Ok(Self::empty());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        let definitions: Vec<PatternDefinition> = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        Ok(Self::new(definitions))
    }

    /// Iterate definitions in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &PatternDefinition> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Catalog holder; written once at startup, read concurrently after
pub struct CatalogManager {
    catalog: RwLock<Arc<PatternCatalog>>,
}

impl CatalogManager {
    pub fn new() -> Self {
        Self {
            catalog: RwLock::new(Arc::new(PatternCatalog::empty())),
        }
    }

    /// Get a shared handle to the current catalog
    pub fn get(&self) -> Arc<PatternCatalog> {
        Arc::clone(&self.catalog.read())
    }

    /// Replace the catalog (startup only)
    pub fn set(&self, catalog: PatternCatalog) {
        *self.catalog.write() = Arc::new(catalog);
    }
}

impl Default for CatalogManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Global pattern catalog instance
static CATALOG: once_cell::sync::Lazy<CatalogManager> =
    once_cell::sync::Lazy::new(CatalogManager::new);

/// Get the global catalog
pub fn catalog() -> Arc<PatternCatalog> {
    CATALOG.get()
}

/// Initialize the global catalog from a JSON file
pub fn init_catalog(path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let loaded = PatternCatalog::from_json_file(path)?;
    tracing::info!(patterns = loaded.len(), "Pattern catalog loaded");
    CATALOG.set(loaded);
    Ok(())
}
