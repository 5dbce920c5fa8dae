use crate::core::confirmation::{ConfirmRequest, ConfirmationModal};
use crate::core::error::AppError;
use crate::core::types::ConfirmationOutcome;
use async_trait::async_trait;

/// Modal that answers every request with a fixed outcome, for non-interactive runs.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirmModal {
    outcome: ConfirmationOutcome,
}

impl AutoConfirmModal {
    pub fn new(outcome: ConfirmationOutcome) -> Self {
        Self { outcome }
    }

    pub fn confirming() -> Self {
        Self::new(ConfirmationOutcome::Confirmed)
    }

    pub fn cancelling() -> Self {
        Self::new(ConfirmationOutcome::Cancelled)
    }
}

#[async_trait]
impl ConfirmationModal for AutoConfirmModal {
    async fn open_modal(&self, request: &ConfirmRequest) -> Result<ConfirmationOutcome, AppError> {
        tracing::debug!(
            template = %request.template_id,
            outcome = %self.outcome,
            "auto-answering confirmation"
        );
        Ok(self.outcome)
    }
}
