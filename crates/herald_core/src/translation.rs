//! Lookup of human-readable message templates by namespace and key.

use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("bundle is not a flat JSON object of strings: {0}")]
    InvalidBundle(#[from] serde_json::Error),
}

/// Namespaced message templates.
///
/// Lookups never fail: a missing entry renders as `"namespace.key"`, which
/// keeps a reply visible to the user even when a bundle is incomplete.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    bundles: HashMap<String, HashMap<String, String>>,
}

impl Translator {
    /// An empty translator with no bundles.
    pub fn new() -> Self {
        Self::default()
    }

    /// A translator preloaded with the built-in `core` messages used to
    /// render dispatch failures.
    pub fn with_defaults() -> Self {
        let mut translator = Self::new();
        translator.insert("core", "missing_arguments", "Missing arguments: {arguments}");
        translator.insert(
            "core",
            "parse_failure",
            "Failed to parse argument {position}: {message}",
        );
        translator.insert("core", "invalid_syntax", "Invalid syntax or unknown subcommand.");
        translator
    }

    /// Inserts one template, overwriting any existing entry.
    pub fn insert(
        &mut self,
        namespace: impl Into<String>,
        key: impl Into<String>,
        template: impl Into<String>,
    ) {
        self.bundles
            .entry(namespace.into())
            .or_default()
            .insert(key.into(), template.into());
    }

    /// Loads a flat JSON object (`{"key": "template", ...}`) into
    /// `namespace`, overwriting existing keys.
    pub fn load_json(&mut self, namespace: &str, json: &str) -> Result<(), TranslationError> {
        let entries: HashMap<String, String> = serde_json::from_str(json)?;
        self.bundles
            .entry(namespace.to_owned())
            .or_default()
            .extend(entries);
        Ok(())
    }

    /// The template registered under `namespace`/`key`, or `"namespace.key"`
    /// when there is none.
    pub fn translate(&self, namespace: &str, key: &str) -> String {
        self.bundles
            .get(namespace)
            .and_then(|bundle| bundle.get(key))
            .cloned()
            .unwrap_or_else(|| format!("{namespace}.{key}"))
    }
}
