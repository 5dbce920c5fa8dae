#![allow(clippy::result_large_err)]

use super::WizardConfig;
use crate::core::error::AppError;
use crate::core::types::ErrorCategory;

pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate configuration rules
    pub fn validate(config: &WizardConfig) -> Result<(), AppError> {
        let confirmation = &config.confirmation;
        let required = [
            ("confirmation.template", &confirmation.template),
            ("confirmation.title", &confirmation.title),
            ("confirmation.message_key", &confirmation.message_key),
            ("confirmation.list_param", &confirmation.list_param),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(AppError::new(
                    ErrorCategory::ConfigError,
                    format!("{} cannot be empty", name),
                )
                .with_code("WIZ-CONFIG-001"));
            }
        }

        if let Some(file) = &config.translations.file {
            if file.as_os_str().is_empty() {
                return Err(AppError::new(
                    ErrorCategory::ConfigError,
                    "translations.file cannot be an empty path",
                )
                .with_code("WIZ-CONFIG-002"));
            }
        }

        Ok(())
    }
}
