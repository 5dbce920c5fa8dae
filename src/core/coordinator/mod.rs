#![allow(clippy::result_large_err)] // Coordinator operations return AppError for consistent diagnostics.

use crate::core::confirmation::ConfirmationWorkflow;
use crate::core::dependency::{find_dependent_cubes, CubePruner, DependentCubes};
use crate::core::error::AppError;
use crate::core::factory::{ModelContext, ModelFactory};
use crate::core::policy::{Model, Policy};
use crate::core::removal::{
    RemovalError, RemovalOutcome, RemovalPlan, RemovalReport, RemovalStage,
};
use crate::core::types::{AddOutcome, ConfirmationOutcome};
use std::sync::Arc;

/// Owns the policy edited by the model step and sequences every change to it.
pub struct ModelCoordinator {
    policy: Policy,
    factory: Arc<dyn ModelFactory>,
    confirmation: ConfirmationWorkflow,
    pruner: Arc<dyn CubePruner>,
    creation_panel_active: bool,
}

impl ModelCoordinator {
    pub fn new(
        policy: Policy,
        factory: Arc<dyn ModelFactory>,
        confirmation: ConfirmationWorkflow,
        pruner: Arc<dyn CubePruner>,
    ) -> Self {
        ModelCoordinator {
            policy,
            factory,
            confirmation,
            pruner,
            creation_panel_active: false,
        }
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn into_policy(self) -> Policy {
        self.policy
    }

    /// Append the factory's candidate if it validates.
    ///
    /// Invalid candidates are dropped silently; the policy is untouched.
    pub fn add_model(&mut self) -> AddOutcome {
        let mut candidate = self.factory.get_model();
        if !self.factory.is_valid_model() {
            tracing::debug!(model = %candidate.name, "candidate model rejected");
            return AddOutcome::Rejected;
        }
        candidate.order = self.policy.transformations().len();
        let auto_generated = self.factory.is_auto_generated_date_time();
        let name = candidate.name.clone();
        let order = candidate.order;
        let position = self.policy.push_transformation(candidate);
        tracing::info!(
            model = %name,
            order,
            auto_generated_date_time = auto_generated,
            "model added to policy"
        );
        AddOutcome::Added { position }
    }

    /// `true` only for the final transformation; false on an empty policy.
    pub fn is_last_model(&self, position: usize) -> bool {
        self.policy.transformations().len().checked_sub(1) == Some(position)
    }

    /// `true` only for the slot one past the last transformation.
    pub fn is_new_model(&self, position: usize) -> bool {
        position == self.policy.transformations().len()
    }

    pub fn activate_model_creation_panel(&mut self) {
        self.creation_panel_active = true;
    }

    pub fn deactivate_model_creation_panel(&mut self) {
        self.creation_panel_active = false;
    }

    pub fn is_active_model_creation_panel(&self) -> bool {
        self.creation_panel_active
    }

    pub fn model_context(&self) -> ModelContext {
        self.factory.get_context()
    }

    pub fn find_dependent_cubes(&self, model: &Model) -> DependentCubes {
        let mut dependents = find_dependent_cubes(self.policy.cubes(), model);
        dependents.revision = self.policy.revision();
        dependents
    }

    pub async fn show_confirm_remove_model(
        &self,
        cube_names: &[String],
    ) -> Result<ConfirmationOutcome, AppError> {
        self.confirmation.show_confirm_remove_model(cube_names).await
    }

    pub fn resolve_removal(&self, position: usize) -> Result<RemovalPlan, AppError> {
        let plan = RemovalPlan::resolve(&self.policy, position)?;
        tracing::debug!(
            model = %plan.model_name(),
            position,
            dependent_cubes = ?plan.dependents().names,
            "removal dependents resolved"
        );
        Ok(plan)
    }

    /// Ask the user to approve `plan`. Modal errors leave the plan awaiting.
    pub async fn confirm_removal(
        &self,
        plan: &mut RemovalPlan,
    ) -> Result<ConfirmationOutcome, AppError> {
        if plan.stage() != RemovalStage::AwaitingConfirmation {
            return Err(RemovalError::UnexpectedStage {
                stage: plan.stage(),
                expected: RemovalStage::AwaitingConfirmation,
            }
            .into());
        }
        let outcome = self
            .confirmation
            .show_confirm_remove_model(&plan.dependents().names)
            .await?;
        plan.record(outcome);
        Ok(outcome)
    }

    pub fn commit_removal(&mut self, plan: RemovalPlan) -> Result<RemovalReport, AppError> {
        let report = plan.commit(&mut self.policy, self.pruner.as_ref())?;
        tracing::info!(
            model = %report.removed.name,
            position = report.position,
            pruned_cubes = ?report.pruned_cubes,
            "model removed from policy"
        );
        Ok(report)
    }

    /// Resolve, confirm and commit the removal of the model at `position`.
    ///
    /// Nothing is mutated until the confirmation resolves positively; dropping
    /// the returned future while the modal is open leaves the policy intact.
    pub async fn remove_model(&mut self, position: usize) -> Result<RemovalOutcome, AppError> {
        let mut plan = self.resolve_removal(position)?;
        match self.confirm_removal(&mut plan).await? {
            ConfirmationOutcome::Confirmed => {
                let report = self.commit_removal(plan)?;
                Ok(RemovalOutcome::Removed(report))
            }
            ConfirmationOutcome::Cancelled => {
                tracing::info!(model = %plan.model_name(), "model removal cancelled");
                Ok(RemovalOutcome::Cancelled)
            }
        }
    }
}
