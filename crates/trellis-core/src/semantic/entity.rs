//! Classes, interfaces, and the hierarchy relations between them.

use std::fmt;

use serde::Serialize;

use crate::semantic::{ByVisibility, Member, Method, Visibility};

/// Whether an entity is a class or an interface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Entities first seen through a relation are classes.
    #[default]
    Class,
    Interface,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Class => "class",
            EntityKind::Interface => "interface",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of a hierarchy relation from one entity to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    Inherits,
    Implements,
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationKind::Inherits => write!(f, "inherits"),
            RelationKind::Implements => write!(f, "implements"),
        }
    }
}

/// Derives the include guard for an entity.
///
/// The guard is the namespace path followed by the entity name and `H`,
/// joined with `_` and upper-cased.
///
/// # Examples
///
/// ```
/// use trellis_core::semantic::include_guard;
///
/// let namespaces = vec!["app".to_string(), "geo".to_string()];
/// assert_eq!(include_guard(&namespaces, "Shape"), "APP_GEO_SHAPE_H");
/// assert_eq!(include_guard(&[], "Point"), "POINT_H");
/// ```
pub fn include_guard(namespaces: &[String], name: &str) -> String {
    namespaces
        .iter()
        .map(String::as_str)
        .chain([name, "H"])
        .collect::<Vec<_>>()
        .join("_")
        .to_uppercase()
}

/// A modeled class or interface.
///
/// Entities are created once and only ever enriched afterwards: relation,
/// member and method lists grow by appending, and contributing source files
/// are recorded once each. Kind, namespaces and include guard are fixed at
/// creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    name: String,
    kind: EntityKind,
    namespaces: Vec<String>,
    include_guard: String,
    inherits: Vec<String>,
    implements: Vec<String>,
    members: ByVisibility<Member>,
    methods: ByVisibility<Method>,
    source_files: Vec<String>,
}

impl Entity {
    /// Creates an entity with no relations, features or source files.
    ///
    /// # Arguments
    ///
    /// * `name` - Unqualified entity name.
    /// * `kind` - Class or interface.
    /// * `namespaces` - Enclosing namespace path, outermost first.
    pub fn new(name: impl Into<String>, kind: EntityKind, namespaces: Vec<String>) -> Self {
        let name = name.into();
        let include_guard = include_guard(&namespaces, &name);
        Self {
            name,
            kind,
            namespaces,
            include_guard,
            inherits: Vec::new(),
            implements: Vec::new(),
            members: ByVisibility::default(),
            methods: ByVisibility::default(),
            source_files: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn is_interface(&self) -> bool {
        self.kind == EntityKind::Interface
    }

    /// Returns the namespace path, outermost first.
    pub fn namespaces(&self) -> &[String] {
        &self.namespaces
    }

    pub fn include_guard(&self) -> &str {
        &self.include_guard
    }

    /// Returns the inherited entity references, in discovery order.
    pub fn inherits(&self) -> &[String] {
        &self.inherits
    }

    /// Returns the implemented entity references, in discovery order.
    pub fn implements(&self) -> &[String] {
        &self.implements
    }

    /// Returns the relation targets of the given kind.
    pub fn relations(&self, kind: RelationKind) -> &[String] {
        match kind {
            RelationKind::Inherits => &self.inherits,
            RelationKind::Implements => &self.implements,
        }
    }

    pub fn members(&self) -> &ByVisibility<Member> {
        &self.members
    }

    pub fn methods(&self) -> &ByVisibility<Method> {
        &self.methods
    }

    /// Returns the identifiers of every source that referenced this entity.
    pub fn source_files(&self) -> &[String] {
        &self.source_files
    }

    /// Appends a relation target. Duplicates are kept.
    pub fn add_relation(&mut self, kind: RelationKind, target: impl Into<String>) {
        match kind {
            RelationKind::Inherits => self.inherits.push(target.into()),
            RelationKind::Implements => self.implements.push(target.into()),
        }
    }

    pub fn add_member(&mut self, visibility: Visibility, member: Member) {
        self.members.push(visibility, member);
    }

    pub fn add_method(&mut self, visibility: Visibility, method: Method) {
        self.methods.push(visibility, method);
    }

    /// Records a contributing source.
    ///
    /// Returns `false` if the source was already recorded.
    pub fn record_source(&mut self, source: &str) -> bool {
        if self.source_files.iter().any(|s| s == source) {
            return false;
        }
        self.source_files.push(source.to_string());
        true
    }
}
