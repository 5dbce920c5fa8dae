#![allow(clippy::result_large_err)]

use super::WizardConfig;
use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use std::env;
use std::path::{Path, PathBuf};

/// File name looked up at the workspace root.
pub const CONFIG_FILE_NAME: &str = "policy-wizard.toml";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from workspace root (workspace/policy-wizard.toml)
    /// Environment variables override config file values
    pub fn load_from_workspace(workspace_path: &Path) -> Result<WizardConfig, AppError> {
        let config_path = workspace_path.join(CONFIG_FILE_NAME);
        let mut config = Self::load_from_file(&config_path)?.unwrap_or_default();

        Self::apply_env_overrides(&mut config);

        Ok(config)
    }

    /// Load config from specific file path
    /// Returns Ok(None) if file doesn't exist
    pub fn load_from_file(path: &Path) -> Result<Option<WizardConfig>, AppError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::new(
                ErrorCategory::IoError,
                format!("Failed to read config file {}: {}", path.display(), e),
            )
        })?;

        let config: WizardConfig = toml::from_str(&content).map_err(|e| {
            AppError::new(
                ErrorCategory::ConfigError,
                format!("Failed to parse config file {}: {}", path.display(), e),
            )
        })?;

        Ok(Some(config))
    }

    /// Environment variables take precedence over config file values
    fn apply_env_overrides(config: &mut WizardConfig) {
        if let Ok(template) = env::var("POLICY_WIZARD_CONFIRM_TEMPLATE") {
            config.confirmation.template = template;
        }

        if let Ok(title) = env::var("POLICY_WIZARD_CONFIRM_TITLE") {
            config.confirmation.title = title;
        }

        if let Ok(message_key) = env::var("POLICY_WIZARD_REMOVE_MESSAGE_KEY") {
            config.confirmation.message_key = message_key;
        }

        if let Ok(separator) = env::var("POLICY_WIZARD_CUBE_SEPARATOR") {
            config.confirmation.separator = separator;
        }

        if let Ok(file) = env::var("POLICY_WIZARD_TRANSLATIONS") {
            if !file.trim().is_empty() {
                config.translations.file = Some(PathBuf::from(file));
            }
        }
    }

    /// Get documentation for supported environment variables
    pub fn env_var_documentation() -> &'static [&'static str] {
        &[
            "POLICY_WIZARD_CONFIRM_TEMPLATE - Override the confirm modal template id",
            "POLICY_WIZARD_CONFIRM_TITLE - Override the confirm modal title key",
            "POLICY_WIZARD_REMOVE_MESSAGE_KEY - Override the remove-model message key",
            "POLICY_WIZARD_CUBE_SEPARATOR - Override the separator between cube names (default: ,)",
            "POLICY_WIZARD_TRANSLATIONS - Path to a JSON translation catalog",
        ]
    }
}
