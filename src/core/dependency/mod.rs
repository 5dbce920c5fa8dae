use crate::core::policy::{Cube, Model};
use serde::Serialize;
use std::collections::BTreeSet;

/// Cubes that consume at least one output field of a model.
///
/// `names` and `positions` are parallel and ascending by cube index. The
/// positions refer to the cube list at `revision`; any later mutation of the
/// policy invalidates them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependentCubes {
    pub names: Vec<String>,
    pub positions: Vec<usize>,
    pub revision: u64,
}

impl DependentCubes {
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }
}

/// Scan `cubes` for the ones reading any of `model`'s output fields.
pub fn find_dependent_cubes(cubes: &[Cube], model: &Model) -> DependentCubes {
    let mut dependents = DependentCubes::default();
    for (position, cube) in cubes.iter().enumerate() {
        if cube.depends_on(model) {
            dependents.names.push(cube.name.clone());
            dependents.positions.push(position);
        }
    }
    dependents
}

/// Removes cubes from a list by index.
pub trait CubePruner: Send + Sync {
    fn remove_items(&self, items: &mut Vec<Cube>, positions: &[usize]);
}

/// Default pruner: drops every listed index, ignoring duplicates and indices
/// past the end, and keeps the survivors in order.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexPruner;

impl CubePruner for IndexPruner {
    fn remove_items(&self, items: &mut Vec<Cube>, positions: &[usize]) {
        if positions.is_empty() {
            return;
        }
        let doomed: BTreeSet<usize> = positions.iter().copied().collect();
        let mut index = 0;
        items.retain(|_| {
            let keep = !doomed.contains(&index);
            index += 1;
            keep
        });
    }
}
