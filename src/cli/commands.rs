use crate::{
    cli::args::{AddArgs, InspectArgs, RemoveArgs},
    core::{
        AutoConfirmModal, CandidateModelFactory, CatalogTranslator, ConfigLoader,
        ConfigValidator, ConfirmationModal, ConfirmationWorkflow, ConsoleModal,
        DefaultErrorReporter, ErrorReporter, IndexPruner, Model, ModelCoordinator,
        ModelFactory, Policy, RemovalOutcome, WizardConfig,
    },
    Result,
};
use anyhow::{anyhow, Context};
use std::fmt::{self, Write as _};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Configuration and translator shared by every command.
struct CommandContext {
    config: WizardConfig,
    translator: Arc<CatalogTranslator>,
}

impl CommandContext {
    fn load(workspace: &Path) -> Result<Self> {
        let config = ConfigLoader::load_from_workspace(workspace)?;
        ConfigValidator::validate(&config)?;

        let mut translator = CatalogTranslator::with_defaults();
        if let Some(file) = &config.translations.file {
            translator
                .merge_file(&resolve_in_workspace(workspace, file))
                .map_err(|err| err.with_context("translations.file in policy-wizard.toml"))?;
        }

        Ok(Self {
            config,
            translator: Arc::new(translator),
        })
    }

    fn coordinator(
        &self,
        policy: Policy,
        factory: Arc<dyn ModelFactory>,
        modal: Arc<dyn ConfirmationModal>,
    ) -> ModelCoordinator {
        let confirmation = ConfirmationWorkflow::new(
            modal,
            self.translator.clone(),
            self.config.confirmation.clone(),
        );
        ModelCoordinator::new(policy, factory, confirmation, Arc::new(IndexPruner))
    }
}

fn resolve_in_workspace(workspace: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        workspace.join(path)
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {} {}", what, path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {} {}", what, path.display()))
}

fn emit_policy(policy: &Policy, output: Option<&Path>) -> Result<()> {
    let rendered = serde_json::to_string_pretty(policy).context("failed to serialize policy")?;
    match output {
        Some(path) => fs::write(path, format!("{}\n", rendered))
            .with_context(|| format!("failed to write policy {}", path.display())),
        None => {
            println!("{}", rendered);
            Ok(())
        }
    }
}

/// Human-readable listing of transformations with their dependent cubes.
pub fn render_inspection(coordinator: &ModelCoordinator) -> Result<String> {
    let mut out = String::new();
    write_inspection(&mut out, coordinator).context("failed to render policy listing")?;
    Ok(out)
}

fn write_inspection(out: &mut impl fmt::Write, coordinator: &ModelCoordinator) -> fmt::Result {
    let policy = coordinator.policy();
    writeln!(out, "transformations: {}", policy.transformations().len())?;
    for (position, model) in policy.transformations().iter().enumerate() {
        let marker = if coordinator.is_last_model(position) {
            ", last"
        } else {
            ""
        };
        writeln!(
            out,
            "  [{}] {} (order {}{}) outputs: {}",
            position,
            model.name,
            model.order,
            marker,
            model.output_fields.join(", ")
        )?;
        let dependents = coordinator.find_dependent_cubes(model);
        let names = if dependents.is_empty() {
            "-".to_string()
        } else {
            dependents.names.join(", ")
        };
        writeln!(out, "      dependent cubes: {}", names)?;
    }
    writeln!(out, "cubes: {}", policy.cubes().len())?;
    for (position, cube) in policy.cubes().iter().enumerate() {
        let fields: Vec<&str> = cube.dimensions.iter().map(|d| d.field.as_str()).collect();
        writeln!(
            out,
            "  [{}] {} dimensions: {}",
            position,
            cube.name,
            fields.join(", ")
        )?;
    }
    Ok(())
}

pub async fn inspect(args: InspectArgs, workspace: &Path) -> Result<()> {
    let ctx = CommandContext::load(workspace)?;
    let policy: Policy = read_json(&args.policy, "policy")?;
    let coordinator = ctx.coordinator(
        policy,
        Arc::new(CandidateModelFactory::default()),
        Arc::new(AutoConfirmModal::cancelling()),
    );
    print!("{}", render_inspection(&coordinator)?);
    Ok(())
}

pub async fn add(args: AddArgs, workspace: &Path) -> Result<()> {
    let ctx = CommandContext::load(workspace)?;
    let policy: Policy = read_json(&args.policy, "policy")?;
    let candidate: Model = read_json(&args.model, "model")?;
    let name = candidate.name.clone();

    let mut coordinator = ctx.coordinator(
        policy,
        Arc::new(CandidateModelFactory::new(candidate)),
        Arc::new(AutoConfirmModal::cancelling()),
    );
    if !coordinator.add_model().is_added() {
        return Err(anyhow!(
            "model '{}' is not valid: it needs a name and at least one non-empty output field",
            name
        ));
    }
    emit_policy(coordinator.policy(), args.output.as_deref())
}

pub async fn remove(args: RemoveArgs, workspace: &Path) -> Result<()> {
    let ctx = CommandContext::load(workspace)?;
    let policy: Policy = read_json(&args.policy, "policy")?;
    let modal: Arc<dyn ConfirmationModal> = if args.yes {
        Arc::new(AutoConfirmModal::confirming())
    } else {
        Arc::new(ConsoleModal::new(ctx.translator.clone()))
    };

    let mut coordinator = ctx.coordinator(
        policy,
        Arc::new(CandidateModelFactory::default()),
        modal,
    );
    let reporter = DefaultErrorReporter::new();
    match coordinator.remove_model(args.position).await? {
        RemovalOutcome::Removed(report) => {
            if !report.pruned_cubes.is_empty() {
                reporter.report_info(&format!(
                    "removed cubes: {}",
                    report.pruned_cubes.join(", ")
                ));
            }
        }
        RemovalOutcome::Cancelled => reporter.report_warning(
            "removal cancelled; policy unchanged",
            Some(format!("position {}", args.position)),
        ),
    }
    emit_policy(coordinator.policy(), args.output.as_deref())
}
