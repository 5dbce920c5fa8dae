//! Policy aggregate edited by the model step of the wizard.
//!
//! Callers can read both sequences freely. Mutation is crate-private and only
//! reachable through [`crate::core::ModelCoordinator`], which bumps the
//! policy revision on every change so that stale removal plans are detected.

use crate::core::dependency::CubePruner;
use serde::{Deserialize, Serialize};

/// A transformation attached to the policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub name: String,
    #[serde(default)]
    pub order: usize,
    #[serde(default)]
    pub output_fields: Vec<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub model_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_field: Option<String>,
}

impl Model {
    pub fn new<N, I, F>(name: N, output_fields: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        Self {
            name: name.into(),
            order: 0,
            output_fields: output_fields.into_iter().map(Into::into).collect(),
            model_type: None,
            input_field: None,
        }
    }

    pub fn with_type<T: Into<String>>(mut self, model_type: T) -> Self {
        self.model_type = Some(model_type.into());
        self
    }

    pub fn with_input_field<T: Into<String>>(mut self, input_field: T) -> Self {
        self.input_field = Some(input_field.into());
        self
    }

    /// Returns `true` when `field` is one of this model's outputs.
    pub fn produces(&self, field: &str) -> bool {
        self.output_fields.iter().any(|output| output == field)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Dimension {
    pub fn new<T: Into<String>>(field: T) -> Self {
        Self {
            field: field.into(),
            name: None,
        }
    }
}

/// Aggregation that consumes fields by name through its dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cube {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub dimensions: Vec<Dimension>,
}

impl Cube {
    pub fn new<N, I>(name: N, dimensions: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = Dimension>,
    {
        Self {
            name: name.into(),
            dimensions: dimensions.into_iter().collect(),
        }
    }

    /// Returns `true` if any dimension reads a field produced by `model`.
    pub fn depends_on(&self, model: &Model) -> bool {
        self.dimensions
            .iter()
            .any(|dimension| model.produces(&dimension.field))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    #[serde(default)]
    transformations: Vec<Model>,
    #[serde(default)]
    cubes: Vec<Cube>,
    #[serde(skip)]
    revision: u64,
}

impl Policy {
    pub fn new(transformations: Vec<Model>, cubes: Vec<Cube>) -> Self {
        Self {
            transformations,
            cubes,
            revision: 0,
        }
    }

    pub fn transformations(&self) -> &[Model] {
        &self.transformations
    }

    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    pub fn transformation(&self, position: usize) -> Option<&Model> {
        self.transformations.get(position)
    }

    /// Monotonic counter bumped by every mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn push_transformation(&mut self, model: Model) -> usize {
        self.transformations.push(model);
        self.revision += 1;
        self.transformations.len() - 1
    }

    pub(crate) fn remove_transformation(&mut self, position: usize) -> Option<Model> {
        if position >= self.transformations.len() {
            return None;
        }
        let removed = self.transformations.remove(position);
        self.revision += 1;
        Some(removed)
    }

    pub(crate) fn prune_cubes(&mut self, pruner: &dyn CubePruner, positions: &[usize]) {
        pruner.remove_items(&mut self.cubes, positions);
        self.revision += 1;
    }
}
