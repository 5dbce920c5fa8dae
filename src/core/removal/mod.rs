//! Two-phase model removal: resolve dependents, confirm, then commit.
//!
//! A [`RemovalPlan`] moves `Resolving -> AwaitingConfirmation`, then either
//! `Aborted` or `Confirmed -> Committed`. Only a confirmed plan whose revision
//! still matches the policy may be committed.

use crate::core::dependency::{find_dependent_cubes, CubePruner, DependentCubes};
use crate::core::error::AppError;
use crate::core::policy::{Model, Policy};
use crate::core::types::{ConfirmationOutcome, ErrorCategory};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RemovalStage {
    Resolving,
    AwaitingConfirmation,
    Confirmed,
    Committed,
    Aborted,
}

#[derive(Debug, thiserror::Error)]
pub enum RemovalError {
    #[error("no transformation at position {position} (policy holds {len})")]
    OutOfRange { position: usize, len: usize },
    #[error("removal plan computed at revision {planned} but policy is at revision {current}")]
    StalePlan { planned: u64, current: u64 },
    #[error("removal plan is {stage:?}, expected {expected:?}")]
    UnexpectedStage {
        stage: RemovalStage,
        expected: RemovalStage,
    },
}

impl RemovalError {
    pub fn code(&self) -> &'static str {
        match self {
            RemovalError::OutOfRange { .. } => "WIZ-REMOVE-001",
            RemovalError::StalePlan { .. } => "WIZ-REMOVE-002",
            RemovalError::UnexpectedStage { .. } => "WIZ-REMOVE-003",
        }
    }
}

impl From<RemovalError> for AppError {
    fn from(err: RemovalError) -> Self {
        let mut error =
            AppError::new(ErrorCategory::ValidationError, err.to_string()).with_code(err.code());
        if let RemovalError::OutOfRange { position, len } = err {
            error.add_context("position", &position.to_string());
            error.add_context("len", &len.to_string());
        }
        error
    }
}

/// Target and dependents of a pending removal.
#[derive(Debug, Clone, Serialize)]
pub struct RemovalPlan {
    position: usize,
    model_name: String,
    dependents: DependentCubes,
    stage: RemovalStage,
}

impl RemovalPlan {
    /// Resolve the dependents of the transformation at `position`.
    pub fn resolve(policy: &Policy, position: usize) -> Result<Self, RemovalError> {
        let model = policy
            .transformation(position)
            .ok_or(RemovalError::OutOfRange {
                position,
                len: policy.transformations().len(),
            })?;
        let mut plan = RemovalPlan {
            position,
            model_name: model.name.clone(),
            dependents: DependentCubes::default(),
            stage: RemovalStage::Resolving,
        };
        let mut dependents = find_dependent_cubes(policy.cubes(), model);
        dependents.revision = policy.revision();
        plan.dependents = dependents;
        plan.stage = RemovalStage::AwaitingConfirmation;
        Ok(plan)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn dependents(&self) -> &DependentCubes {
        &self.dependents
    }

    pub fn stage(&self) -> RemovalStage {
        self.stage
    }

    /// Apply the user's answer. Has no effect outside `AwaitingConfirmation`.
    pub fn record(&mut self, outcome: ConfirmationOutcome) -> RemovalStage {
        if self.stage == RemovalStage::AwaitingConfirmation {
            self.stage = match outcome {
                ConfirmationOutcome::Confirmed => RemovalStage::Confirmed,
                ConfirmationOutcome::Cancelled => RemovalStage::Aborted,
            };
        }
        self.stage
    }

    /// Detach the model and prune its dependent cubes.
    pub(crate) fn commit(
        mut self,
        policy: &mut Policy,
        pruner: &dyn CubePruner,
    ) -> Result<RemovalReport, RemovalError> {
        if self.stage != RemovalStage::Confirmed {
            return Err(RemovalError::UnexpectedStage {
                stage: self.stage,
                expected: RemovalStage::Confirmed,
            });
        }
        if policy.revision() != self.dependents.revision {
            return Err(RemovalError::StalePlan {
                planned: self.dependents.revision,
                current: policy.revision(),
            });
        }
        let removed = policy
            .remove_transformation(self.position)
            .ok_or(RemovalError::OutOfRange {
                position: self.position,
                len: policy.transformations().len(),
            })?;
        policy.prune_cubes(pruner, &self.dependents.positions);
        self.stage = RemovalStage::Committed;
        Ok(RemovalReport {
            position: self.position,
            removed,
            pruned_cubes: self.dependents.names,
            pruned_positions: self.dependents.positions,
        })
    }
}

/// What a committed removal changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovalReport {
    pub position: usize,
    pub removed: Model,
    pub pruned_cubes: Vec<String>,
    pub pruned_positions: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RemovalOutcome {
    Removed(RemovalReport),
    Cancelled,
}

impl RemovalOutcome {
    pub fn is_removed(&self) -> bool {
        matches!(self, RemovalOutcome::Removed(_))
    }
}
