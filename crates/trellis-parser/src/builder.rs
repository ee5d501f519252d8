//! Folding diagram sources into a model.

use log::{debug, trace};

use trellis_core::semantic::{EntityKind, Model, RelationKind};

use crate::{
    config::ParseConfig,
    extract::{Feature, extract_feature},
    resolve::{normalize_qualified, resolve_relation},
    scanner::{LineEvent, TypeOpen, scan_line},
    scope::{FrameKind, ScopeStack},
    symbols::SymbolTable,
};

/// Counts of what happened to the lines of one source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceStats {
    /// Lines that produced an event.
    pub recognized: usize,
    /// Blank, comment, and unrecognized lines.
    pub skipped: usize,
    /// Feature lines that appeared outside any type.
    pub orphaned: usize,
    /// Blocks still open when the source ended.
    pub unclosed: usize,
}

/// Builds a [`Model`] from one or more diagram sources.
///
/// The builder owns the symbol table shared by every source. Each call to
/// [`parse_source`](Self::parse_source) scans one source from a fresh
/// scope, so blocks never leak between sources. Sources are folded in call
/// order, and that order is visible in the model: entities appear in
/// first-reference order and every list keeps discovery order.
///
/// Parsing is not idempotent. Feeding the same source twice appends its
/// relations, members and methods a second time.
///
/// # Examples
///
/// ```
/// use trellis_parser::{ModelBuilder, ParseConfig};
///
/// let mut builder = ModelBuilder::new(ParseConfig::default());
/// builder.parse_source("shapes.puml", "interface Shape {\n+area(): float\n}");
/// builder.parse_source("circle.puml", "Circle ..|> Shape");
///
/// let model = builder.finish();
/// assert_eq!(model.get("Circle").unwrap().implements(), ["Shape"]);
/// ```
#[derive(Debug, Default)]
pub struct ModelBuilder {
    config: ParseConfig,
    symbols: SymbolTable,
}

impl ModelBuilder {
    /// Create a new builder with an empty symbol table.
    pub fn new(config: ParseConfig) -> Self {
        Self {
            config,
            symbols: SymbolTable::new(),
        }
    }

    /// Scans one source and folds it into the symbol table.
    ///
    /// # Arguments
    ///
    /// * `source_id` - Identifier recorded in each touched entity's source files.
    /// * `text` - The source contents.
    pub fn parse_source(&mut self, source_id: &str, text: &str) -> SourceStats {
        let mut scope = ScopeStack::default();
        let mut stats = SourceStats::default();

        for (index, line) in text.lines().enumerate() {
            let line_no = index + 1;
            match scan_line(line) {
                Some(event) => {
                    trace!(source = source_id, line = line_no, event:?; "Classified line");
                    stats.recognized += 1;
                    self.apply(source_id, &mut scope, event, &mut stats);
                }
                None => {
                    trace!(source = source_id, line = line_no; "Skipped line");
                    stats.skipped += 1;
                }
            }
        }

        stats.unclosed = scope.depth();
        if !scope.is_empty() {
            debug!(source = source_id, open_blocks = scope.depth(); "Source ended with open blocks");
        }
        debug!(
            source = source_id,
            recognized = stats.recognized,
            skipped = stats.skipped,
            entities = self.symbols.len();
            "Source parsed"
        );

        stats
    }

    /// Returns the symbol table built so far.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Finalizes the builder into a read-only [`Model`].
    pub fn finish(self) -> Model {
        self.symbols.into_model()
    }

    fn apply(
        &mut self,
        source_id: &str,
        scope: &mut ScopeStack,
        event: LineEvent<'_>,
        stats: &mut SourceStats,
    ) {
        match event {
            LineEvent::NamespaceOpen { name, closed } => {
                scope.push(FrameKind::Namespace, name);
                if closed {
                    scope.pop();
                }
            }
            LineEvent::TypeOpen(open) => self.open_type(source_id, scope, open),
            LineEvent::Relation {
                source,
                arrow,
                target,
            } => self.add_relation(source_id, source, arrow, target),
            LineEvent::Feature { visibility, text } => {
                let Some(owner) = scope.current_type() else {
                    trace!(source = source_id, text; "Feature outside of a type");
                    stats.orphaned += 1;
                    return;
                };
                let Some(entity) = self.symbols.get_mut(owner) else {
                    return;
                };
                match extract_feature(text) {
                    Feature::Member(member) => entity.add_member(visibility, member),
                    Feature::Method(method) => entity.add_method(visibility, method),
                }
            }
            LineEvent::BlockClose => match scope.pop() {
                Some(frame) => {
                    trace!(kind:? = frame.kind(), name = frame.name(); "Closed block");
                }
                None => debug!(source = source_id; "Ignoring `}}` with no open block"),
            },
        }
    }

    fn open_type(&mut self, source_id: &str, scope: &mut ScopeStack, open: TypeOpen<'_>) {
        let namespaces = scope.namespace_path();
        let separator = self.config.namespace_separator();
        let entity = self
            .symbols
            .ensure(open.name, open.kind, &namespaces, source_id);

        if let Some(base) = open.extends {
            entity.add_relation(RelationKind::Inherits, normalize_qualified(base, separator));
        }
        for interface in open.implements {
            entity.add_relation(
                RelationKind::Implements,
                normalize_qualified(interface, separator),
            );
        }

        scope.push(FrameKind::Type, open.name);
        if open.closed {
            scope.pop();
        }
    }

    fn add_relation(&mut self, source_id: &str, source: &str, arrow: &str, target: &str) {
        self.symbols
            .ensure(source, EntityKind::Class, &[], source_id);
        let target_kind = self
            .symbols
            .ensure(target, EntityKind::Class, &[], source_id)
            .kind();

        let kind = resolve_relation(arrow, target_kind);
        trace!(source, arrow, target, kind:% = kind; "Resolved relation");

        self.symbols
            .ensure(source, EntityKind::Class, &[], source_id)
            .add_relation(kind, target);
    }
}
