//! The finalized model handed to renderers.

use indexmap::IndexMap;
use serde::Serialize;

use crate::semantic::Entity;

/// A compiled model: every entity, keyed by unqualified name.
///
/// Entities appear in the order they were first referenced. Two entities
/// with the same name in different namespaces share one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Model {
    entities: IndexMap<String, Entity>,
}

impl Model {
    pub fn new(entities: IndexMap<String, Entity>) -> Self {
        Self { entities }
    }

    /// Looks up an entity by unqualified name.
    pub fn get(&self, name: &str) -> Option<&Entity> {
        self.entities.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entities.contains_key(name)
    }

    /// Iterates over entities in discovery order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
