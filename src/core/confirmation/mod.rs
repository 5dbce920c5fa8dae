//! Confirmation gate shown before a model removal commits.

use crate::core::config::ConfirmationSettings;
use crate::core::error::AppError;
use crate::core::types::ConfirmationOutcome;
use async_trait::async_trait;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

pub mod auto;
pub mod catalog;
pub mod console;

pub use auto::AutoConfirmModal;
pub use catalog::CatalogTranslator;
pub use console::ConsoleModal;

/// Substitution parameters handed to the translator.
pub type TranslationParams = BTreeMap<String, String>;

/// Payload for the modal collaborator.
///
/// `title` is a translation key; the modal renders it. `message` is already
/// localized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmRequest {
    pub template_id: String,
    pub title: String,
    pub message: String,
}

/// Dialog framework able to ask the user for assent.
///
/// A modal that never answers keeps the returned future pending; dropping
/// that future is how a caller abandons the removal.
#[async_trait]
pub trait ConfirmationModal: Send + Sync + 'static {
    async fn open_modal(&self, request: &ConfirmRequest) -> Result<ConfirmationOutcome, AppError>;
}

/// Localization lookup.
pub trait Translator: Send + Sync {
    fn instant(&self, key: &str, params: &TranslationParams) -> String;
}

/// Builds and shows the remove-model confirmation.
#[derive(Clone)]
pub struct ConfirmationWorkflow {
    modal: Arc<dyn ConfirmationModal>,
    translator: Arc<dyn Translator>,
    settings: ConfirmationSettings,
}

impl ConfirmationWorkflow {
    pub fn new(
        modal: Arc<dyn ConfirmationModal>,
        translator: Arc<dyn Translator>,
        settings: ConfirmationSettings,
    ) -> Self {
        Self {
            modal,
            translator,
            settings,
        }
    }

    pub fn settings(&self) -> &ConfirmationSettings {
        &self.settings
    }

    /// Request listing `cube_names`; the translator is skipped when there are none.
    pub fn build_remove_request(&self, cube_names: &[String]) -> ConfirmRequest {
        let message = if cube_names.is_empty() {
            String::new()
        } else {
            let mut params = TranslationParams::new();
            params.insert(
                self.settings.list_param.clone(),
                cube_names.join(&self.settings.separator),
            );
            self.translator.instant(&self.settings.message_key, &params)
        };
        ConfirmRequest {
            template_id: self.settings.template.clone(),
            title: self.settings.title.clone(),
            message,
        }
    }

    pub async fn show_confirm_remove_model(
        &self,
        cube_names: &[String],
    ) -> Result<ConfirmationOutcome, AppError> {
        let request = self.build_remove_request(cube_names);
        tracing::debug!(
            template = %request.template_id,
            dependent_cubes = cube_names.len(),
            "opening remove-model confirmation"
        );
        let outcome = self.modal.open_modal(&request).await?;
        tracing::info!(outcome = %outcome, "remove-model confirmation answered");
        Ok(outcome)
    }
}
