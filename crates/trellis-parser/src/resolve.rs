//! Relation kind resolution for arrow tokens and inline clauses.

use trellis_core::semantic::{EntityKind, RelationKind};

/// Arrow tokens with a fixed meaning. Every other arrow inherits.
const ARROW_TABLE: [(&str, RelationKind); 4] = [
    ("--|>", RelationKind::Inherits),
    ("<|--", RelationKind::Inherits),
    ("..|>", RelationKind::Implements),
    ("<|..", RelationKind::Implements),
];

/// Classifies an arrow token on its own.
pub(crate) fn arrow_relation(arrow: &str) -> RelationKind {
    ARROW_TABLE
        .iter()
        .find(|(token, _)| *token == arrow)
        .map_or(RelationKind::Inherits, |(_, kind)| *kind)
}

/// Resolves the relation an arrow denotes towards a target of the given kind.
///
/// A target that is an interface is always implemented, whatever the arrow
/// says.
pub(crate) fn resolve_relation(arrow: &str, target_kind: EntityKind) -> RelationKind {
    match target_kind {
        EntityKind::Interface => RelationKind::Implements,
        EntityKind::Class => arrow_relation(arrow),
    }
}

/// Rewrites a dotted qualified name to use `separator` between segments.
pub(crate) fn normalize_qualified(name: &str, separator: &str) -> String {
    name.replace('.', separator)
}
