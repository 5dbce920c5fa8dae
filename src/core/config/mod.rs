pub mod loader;
pub mod validation;

pub use loader::{ConfigLoader, CONFIG_FILE_NAME};
pub use validation::ConfigValidator;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Wizard configuration loaded from policy-wizard.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WizardConfig {
    /// Remove-model confirmation dialog
    #[serde(default)]
    pub confirmation: ConfirmationSettings,

    /// Translation catalog
    #[serde(default)]
    pub translations: TranslationsConfig,
}

/// Confirmation dialog settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfirmationSettings {
    /// Modal template identifier
    #[serde(default = "default_template")]
    pub template: String,

    /// Title translation key
    #[serde(default = "default_title")]
    pub title: String,

    /// Message translation key used when dependent cubes exist
    #[serde(default = "default_message_key")]
    pub message_key: String,

    /// Name of the substitution parameter carrying the cube list
    #[serde(default = "default_list_param")]
    pub list_param: String,

    /// Separator placed between cube names
    #[serde(default = "default_separator")]
    pub separator: String,
}

/// Translation catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TranslationsConfig {
    /// JSON file of `key: text` pairs layered over the built-in strings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_template() -> String {
    "templates/modal/confirm-modal.tpl.html".to_string()
}

fn default_title() -> String {
    "_REMOVE_MODEL_CONFIRM_TITLE_".to_string()
}

fn default_message_key() -> String {
    "_REMOVE_MODEL_MESSAGE_".to_string()
}

fn default_list_param() -> String {
    "modelList".to_string()
}

fn default_separator() -> String {
    ",".to_string()
}

impl Default for ConfirmationSettings {
    fn default() -> Self {
        ConfirmationSettings {
            template: default_template(),
            title: default_title(),
            message_key: default_message_key(),
            list_param: default_list_param(),
            separator: default_separator(),
        }
    }
}
