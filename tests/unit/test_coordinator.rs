use async_trait::async_trait;
use policy_wizard::core::{
    AddOutcome, AppError, ConfirmRequest, ConfirmationModal, ConfirmationOutcome,
    ConfirmationSettings, ConfirmationWorkflow, Cube, Dimension, IndexPruner, Model,
    ModelContext, ModelCoordinator, ModelFactory, Policy, TranslationParams, Translator,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

struct FakeModelFactory {
    model: Model,
    valid: bool,
    auto_generated_consulted: AtomicBool,
}

impl FakeModelFactory {
    fn new(model: Model, valid: bool) -> Self {
        Self {
            model,
            valid,
            auto_generated_consulted: AtomicBool::new(false),
        }
    }
}

impl ModelFactory for FakeModelFactory {
    fn get_model(&self) -> Model {
        self.model.clone()
    }

    fn is_valid_model(&self) -> bool {
        self.valid
    }

    fn is_auto_generated_date_time(&self) -> bool {
        self.auto_generated_consulted.store(true, Ordering::SeqCst);
        false
    }

    fn get_context(&self) -> ModelContext {
        ModelContext { position: 0 }
    }
}

#[derive(Default)]
struct RecordingModal {
    requests: Mutex<Vec<ConfirmRequest>>,
}

#[async_trait]
impl ConfirmationModal for RecordingModal {
    async fn open_modal(&self, request: &ConfirmRequest) -> Result<ConfirmationOutcome, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(ConfirmationOutcome::Confirmed)
    }
}

#[derive(Default)]
struct RecordingTranslator {
    calls: Mutex<Vec<(String, TranslationParams)>>,
}

impl Translator for RecordingTranslator {
    fn instant(&self, key: &str, params: &TranslationParams) -> String {
        self.calls
            .lock()
            .unwrap()
            .push((key.to_string(), params.clone()));
        key.to_string()
    }
}

struct Harness {
    coordinator: ModelCoordinator,
    factory: Arc<FakeModelFactory>,
    modal: Arc<RecordingModal>,
    translator: Arc<RecordingTranslator>,
}

fn fake_model() -> Model {
    Model::new("fake model", ["fake output", "other output"])
        .with_type("Morphlines")
        .with_input_field("raw")
}

fn harness(policy: Policy, valid: bool) -> Harness {
    let factory = Arc::new(FakeModelFactory::new(fake_model(), valid));
    let modal = Arc::new(RecordingModal::default());
    let translator = Arc::new(RecordingTranslator::default());
    let confirmation = ConfirmationWorkflow::new(
        modal.clone(),
        translator.clone(),
        ConfirmationSettings::default(),
    );
    let coordinator =
        ModelCoordinator::new(policy, factory.clone(), confirmation, Arc::new(IndexPruner));
    Harness {
        coordinator,
        factory,
        modal,
        translator,
    }
}

fn policy_with_models(count: usize) -> Policy {
    Policy::new(vec![fake_model(); count], Vec::new())
}

#[test]
fn invalid_model_is_not_added() {
    let mut h = harness(Policy::default(), false);
    assert_eq!(h.coordinator.add_model(), AddOutcome::Rejected);
    assert!(h.coordinator.policy().transformations().is_empty());
    assert_eq!(h.coordinator.policy().revision(), 0);
}

#[test]
fn valid_model_is_added_with_its_order() {
    let mut h = harness(Policy::default(), true);
    let outcome = h.coordinator.add_model();
    assert_eq!(outcome, AddOutcome::Added { position: 0 });
    assert!(outcome.is_added());

    let transformations = h.coordinator.policy().transformations();
    assert_eq!(transformations.len(), 1);
    assert_eq!(transformations[0].name, "fake model");
    assert_eq!(transformations[0].order, 0);
    assert_eq!(transformations[0].model_type.as_deref(), Some("Morphlines"));
    assert!(h.factory.auto_generated_consulted.load(Ordering::SeqCst));
}

#[test]
fn order_equals_length_before_insertion() {
    let mut h = harness(policy_with_models(2), true);
    assert_eq!(h.coordinator.add_model(), AddOutcome::Added { position: 2 });
    assert_eq!(h.coordinator.add_model(), AddOutcome::Added { position: 3 });

    let orders: Vec<usize> = h
        .coordinator
        .policy()
        .transformations()
        .iter()
        .map(|m| m.order)
        .collect();
    assert_eq!(orders, vec![0, 0, 2, 3]);
}

#[test]
fn last_model_by_position() {
    let h = harness(policy_with_models(3), true);
    assert!(!h.coordinator.is_last_model(0));
    assert!(!h.coordinator.is_last_model(1));
    assert!(h.coordinator.is_last_model(2));
    assert!(!h.coordinator.is_last_model(3));
}

#[test]
fn last_model_is_false_past_the_end() {
    let h = harness(policy_with_models(1), true);
    assert!(h.coordinator.is_last_model(0));
    assert!(!h.coordinator.is_last_model(1));
    assert!(!h.coordinator.is_last_model(usize::MAX));
}

#[test]
fn last_model_is_false_on_empty_policy() {
    let h = harness(Policy::default(), true);
    assert!(!h.coordinator.is_last_model(0));
    assert!(!h.coordinator.is_last_model(usize::MAX));
}

#[test]
fn new_model_by_position() {
    let h = harness(policy_with_models(3), true);
    assert!(!h.coordinator.is_new_model(0));
    assert!(!h.coordinator.is_new_model(2));
    assert!(h.coordinator.is_new_model(3));
    assert!(!h.coordinator.is_new_model(4));
}

#[test]
fn model_creation_panel_activation() {
    let mut h = harness(Policy::default(), true);
    assert!(!h.coordinator.is_active_model_creation_panel());

    h.coordinator.activate_model_creation_panel();
    assert!(h.coordinator.is_active_model_creation_panel());
    h.coordinator.add_model();
    assert!(h.coordinator.is_active_model_creation_panel());

    h.coordinator.deactivate_model_creation_panel();
    assert!(!h.coordinator.is_active_model_creation_panel());
}

#[test]
fn model_context_comes_from_factory() {
    let h = harness(Policy::default(), true);
    assert_eq!(h.coordinator.model_context(), ModelContext { position: 0 });
}

#[test]
fn finds_cubes_using_model_outputs() {
    let model = fake_model();
    let policy = Policy::new(
        vec![model.clone()],
        vec![
            Cube::new("cube1", [Dimension::new("any"), Dimension::new("another")]),
            Cube::new("cube2", [Dimension::new("fake output"), Dimension::new("any")]),
        ],
    );
    let h = harness(policy, true);

    let found = h.coordinator.find_dependent_cubes(&model);
    assert_eq!(found.names, vec!["cube2".to_string()]);
    assert_eq!(found.positions, vec![1]);
    assert_eq!(found.revision, h.coordinator.policy().revision());
}

#[tokio::test]
async fn confirmation_renders_confirm_modal_template() {
    let h = harness(Policy::default(), true);
    h.coordinator.show_confirm_remove_model(&[]).await.unwrap();

    let requests = h.modal.requests.lock().unwrap();
    assert_eq!(
        requests.last().map(|r| r.template_id.as_str()),
        Some("templates/modal/confirm-modal.tpl.html")
    );
}

#[tokio::test]
async fn empty_cube_list_gives_empty_message() {
    let h = harness(Policy::default(), true);
    let outcome = h.coordinator.show_confirm_remove_model(&[]).await.unwrap();
    assert_eq!(outcome, ConfirmationOutcome::Confirmed);

    let requests = h.modal.requests.lock().unwrap();
    let request = requests.last().unwrap();
    assert_eq!(request.title, "_REMOVE_MODEL_CONFIRM_TITLE_");
    assert_eq!(request.message, "");
    assert!(h.translator.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn cube_names_are_passed_to_translation_separated_by_comma() {
    let h = harness(Policy::default(), true);
    let names = vec![
        "fake cube 1".to_string(),
        "fake cube 2".to_string(),
        "fake cube 3".to_string(),
    ];
    h.coordinator.show_confirm_remove_model(&names).await.unwrap();

    let requests = h.modal.requests.lock().unwrap();
    let request = requests.last().unwrap();
    assert_eq!(request.title, "_REMOVE_MODEL_CONFIRM_TITLE_");
    assert_eq!(request.message, "_REMOVE_MODEL_MESSAGE_");

    let calls = h.translator.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let (key, params) = &calls[0];
    assert_eq!(key, "_REMOVE_MODEL_MESSAGE_");
    assert_eq!(
        params.get("modelList").map(String::as_str),
        Some("fake cube 1,fake cube 2,fake cube 3")
    );
}
