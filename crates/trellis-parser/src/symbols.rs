//! The symbol table shared by every source folded into one model.

use indexmap::IndexMap;
use log::debug;

use trellis_core::semantic::{Entity, EntityKind, Model};

/// Entities keyed by unqualified name, in first-reference order.
///
/// Entities are created on first reference and never replaced. Names are
/// not qualified, so equally named entities from different namespaces
/// share a record.
#[derive(Debug, Default)]
pub struct SymbolTable {
    entities: IndexMap<String, Entity>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entity called `name`, creating it if absent.
    ///
    /// A new entity takes `kind` and `namespaces`. An existing entity keeps
    /// the kind and namespaces it was created with. In both cases `source`
    /// is recorded as a contributing source if it is not already.
    ///
    /// # Arguments
    ///
    /// * `name` - Unqualified entity name.
    /// * `kind` - Kind used only when the entity is created.
    /// * `namespaces` - Namespace path used only when the entity is created.
    /// * `source` - Identifier of the source being parsed.
    pub fn ensure(
        &mut self,
        name: &str,
        kind: EntityKind,
        namespaces: &[String],
        source: &str,
    ) -> &mut Entity {
        let entity = self.entities.entry(name.to_string()).or_insert_with(|| {
            debug!(name, kind = kind.as_str(), source; "Created entity");
            Entity::new(name, kind, namespaces.to_vec())
        });
        entity.record_source(source);
        entity
    }

    pub fn get(&self, name: &str) -> Option<&Entity> {
        self.entities.get(name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Entity> {
        self.entities.get_mut(name)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Finalizes the table into a read-only [`Model`].
    pub fn into_model(self) -> Model {
        Model::new(self.entities)
    }
}
