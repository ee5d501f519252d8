//! Model export for rendering collaborators.
//!
//! Renderers consume the model read-only. The JSON form is an object keyed
//! by entity name, in discovery order; each entity carries its kind,
//! namespaces, include guard, relations, and members and methods grouped
//! by visibility.

use log::debug;

use trellis_core::semantic::Model;

use crate::TrellisError;

/// Serializes a model as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`TrellisError::Export`] if serialization fails.
pub fn to_json(model: &Model) -> Result<String, TrellisError> {
    let json = serde_json::to_string_pretty(model)?;
    debug!(entities = model.len(), bytes = json.len(); "Model exported as JSON");
    Ok(json)
}
