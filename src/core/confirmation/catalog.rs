#![allow(clippy::result_large_err)] // Catalog loading returns AppError for consistent diagnostics.

use crate::core::confirmation::{TranslationParams, Translator};
use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

const DEFAULT_ENTRIES: &[(&str, &str)] = &[
    ("_REMOVE_MODEL_CONFIRM_TITLE_", "Remove model"),
    (
        "_REMOVE_MODEL_MESSAGE_",
        "The following cubes use outputs of this model and will be deleted too: {{modelList}}",
    ),
];

fn placeholder() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").unwrap())
}

/// Key-to-template translator with `{{param}}` interpolation.
///
/// Unknown keys translate to themselves; unknown parameters render empty.
#[derive(Debug, Clone, Default)]
pub struct CatalogTranslator {
    entries: HashMap<String, String>,
}

impl CatalogTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog preloaded with the wizard's English strings.
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        for (key, value) in DEFAULT_ENTRIES {
            catalog.insert(*key, *value);
        }
        catalog
    }

    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.entries.insert(key.into(), value.into());
    }

    /// Overlay entries from a flat JSON object of `key: string` pairs.
    pub fn merge_file(&mut self, path: &Path) -> Result<(), AppError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::new(
                ErrorCategory::IoError,
                format!("Failed to read translations {}: {}", path.display(), e),
            )
        })?;
        let entries: HashMap<String, String> = serde_json::from_str(&content).map_err(|e| {
            AppError::new(
                ErrorCategory::SerializationError,
                format!("Failed to parse translations {}: {}", path.display(), e),
            )
        })?;
        self.entries.extend(entries);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translator for CatalogTranslator {
    fn instant(&self, key: &str, params: &TranslationParams) -> String {
        let Some(template) = self.entries.get(key) else {
            tracing::debug!(key, "missing translation, falling back to key");
            return key.to_string();
        };
        placeholder()
            .replace_all(template, |caps: &Captures| {
                params.get(&caps[1]).cloned().unwrap_or_default()
            })
            .into_owned()
    }
}
