use crate::core::policy::Model;
use serde::{Deserialize, Serialize};

/// Slot of the transformation list the wizard is currently editing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelContext {
    pub position: usize,
}

/// Source of candidate transformations for the model step.
pub trait ModelFactory: Send + Sync {
    /// Current candidate; the coordinator appends a copy, never the original.
    fn get_model(&self) -> Model;

    fn is_valid_model(&self) -> bool;

    fn is_auto_generated_date_time(&self) -> bool;

    fn get_context(&self) -> ModelContext;
}

/// Factory holding a single caller-supplied candidate.
///
/// The default factory holds an empty, hence invalid, candidate.
#[derive(Debug, Clone, Default)]
pub struct CandidateModelFactory {
    model: Model,
    context: ModelContext,
}

impl CandidateModelFactory {
    pub fn new(model: Model) -> Self {
        Self {
            model,
            context: ModelContext::default(),
        }
    }

    pub fn with_context(mut self, context: ModelContext) -> Self {
        self.context = context;
        self
    }
}

impl ModelFactory for CandidateModelFactory {
    fn get_model(&self) -> Model {
        self.model.clone()
    }

    fn is_valid_model(&self) -> bool {
        !self.model.name.trim().is_empty()
            && !self.model.output_fields.is_empty()
            && self
                .model
                .output_fields
                .iter()
                .all(|field| !field.trim().is_empty())
    }

    // A DateTime transformation without an input field stamps events itself.
    fn is_auto_generated_date_time(&self) -> bool {
        self.model
            .model_type
            .as_deref()
            .is_some_and(|kind| kind.eq_ignore_ascii_case("datetime"))
            && self.model.input_field.is_none()
    }

    fn get_context(&self) -> ModelContext {
        self.context
    }
}
