pub mod config;
pub mod confirmation;
pub mod coordinator;
pub mod dependency;
pub mod error;
pub mod factory;
pub mod policy;
pub mod removal;
pub mod types;

pub use config::{ConfigLoader, ConfigValidator, ConfirmationSettings, WizardConfig};
pub use confirmation::{
    AutoConfirmModal, CatalogTranslator, ConfirmRequest, ConfirmationModal, ConfirmationWorkflow,
    ConsoleModal, TranslationParams, Translator,
};
pub use coordinator::ModelCoordinator;
pub use dependency::{find_dependent_cubes, CubePruner, DependentCubes, IndexPruner};
pub use error::{AppError, DefaultErrorReporter, ErrorReporter};
pub use factory::{CandidateModelFactory, ModelContext, ModelFactory};
pub use policy::{Cube, Dimension, Model, Policy};
pub use removal::{RemovalError, RemovalOutcome, RemovalPlan, RemovalReport, RemovalStage};
pub use types::*;
