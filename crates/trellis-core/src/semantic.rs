//! Semantic model types.
//!
//! This module contains the symbolic model produced by compiling diagram
//! sources. The model is keyed by unqualified entity name and records, for
//! every class or interface, its namespace path, hierarchy relations, and
//! its members and methods grouped by visibility.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Files
//!     ↓ scanner (one line at a time)
//! Line Events
//!     ↓ scope tracking + resolution + extraction
//! Semantic Model (these types)
//!     ↓ export
//! JSON / templates
//! ```
//!
//! # Organization
//!
//! - [`entity`] - [`Entity`], [`EntityKind`], [`RelationKind`], [`include_guard`]
//! - [`feature`] - Members and methods: [`Member`], [`Method`], [`Visibility`], [`Stereotypes`]
//! - [`model`] - The finalized [`Model`]

pub mod entity;
pub mod feature;
pub mod model;

pub use entity::*;
pub use feature::*;
pub use model::*;
