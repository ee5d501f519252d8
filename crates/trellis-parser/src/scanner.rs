//! Line scanner for class diagram sources.
//!
//! The scanner classifies one physical line at a time into a [`LineEvent`].
//! It is a pure function of the line: scope and model state live in the
//! [`ModelBuilder`](crate::ModelBuilder). Lines that match no construct
//! produce no event and are skipped by the caller.
//!
//! Constructs are tried in priority order, each matching a prefix of the
//! trimmed line:
//!
//! 1. comments (`'`) and blank lines
//! 2. `namespace NAME {`
//! 3. `class|interface NAME [extends Q] [implements Q, ...] [{]`
//! 4. `SRC ARROW DST` where `ARROW` is 3+ of `-.<|>`
//! 5. `+|#|- REST` feature lines
//! 6. a lone `}`

use winnow::{
    ModalResult, Parser,
    ascii::{space0, space1},
    combinator::{alt, delimited, not, opt, peek, preceded, separated, terminated},
    error::{ContextError, ErrMode},
    token::{literal, one_of, take_while},
};

use trellis_core::semantic::{EntityKind, Visibility};

/// Marker that starts a comment line.
pub const COMMENT_MARKER: char = '\'';

/// Characters an arrow token is built from.
const ARROW_CHARS: [char; 5] = ['-', '.', '<', '|', '>'];

/// Minimum length of an arrow token.
const MIN_ARROW_LEN: usize = 3;

/// A recognized construct on a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent<'a> {
    /// `namespace NAME {`
    NamespaceOpen {
        name: &'a str,
        /// The block was closed on the same line (`namespace a { }`).
        closed: bool,
    },
    /// A class or interface declaration.
    TypeOpen(TypeOpen<'a>),
    /// `SRC ARROW DST`
    Relation {
        source: &'a str,
        arrow: &'a str,
        target: &'a str,
    },
    /// A visibility-marked member or method line.
    Feature {
        visibility: Visibility,
        text: &'a str,
    },
    /// A lone `}`.
    BlockClose,
}

/// A class or interface declaration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeOpen<'a> {
    pub kind: EntityKind,
    pub name: &'a str,
    /// Qualified base named by an inline `extends` clause, as written.
    pub extends: Option<&'a str>,
    /// Qualified names from an inline `implements` clause, as written.
    pub implements: Vec<&'a str>,
    /// The body was closed on the same line (`class A { }`).
    pub closed: bool,
}

/// Classifies a single line.
///
/// Leading and trailing whitespace is ignored. Returns `None` for blank
/// lines, comments, and anything that is not a recognized construct.
///
/// # Examples
///
/// ```
/// use trellis_parser::{LineEvent, scan_line};
///
/// assert_eq!(scan_line("  }  "), Some(LineEvent::BlockClose));
/// assert_eq!(scan_line("' a comment"), None);
/// assert!(matches!(
///     scan_line("A --|> B"),
///     Some(LineEvent::Relation { source: "A", arrow: "--|>", target: "B" })
/// ));
/// ```
pub fn scan_line(line: &str) -> Option<LineEvent<'_>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT_MARKER) {
        return None;
    }

    let mut input = line;
    alt((namespace_open, type_open, relation, feature))
        .parse_next(&mut input)
        .ok()
        .or_else(|| (line == "}").then_some(LineEvent::BlockClose))
}

pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Parse optional spaces or tabs.
pub(crate) fn ws0<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    space0.parse_next(input)
}

/// Parse an identifier: one or more word characters.
pub(crate) fn identifier<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    take_while(1.., is_word_char).parse_next(input)
}

/// Parse a dotted or `::`-separated name.
fn qualified_name<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    take_while(1.., |c: char| is_word_char(c) || c == ':' || c == '.').parse_next(input)
}

/// Parse a keyword that is not followed by a word character.
fn keyword<'a>(word: &'static str) -> impl Parser<&'a str, &'a str, ErrMode<ContextError>> {
    terminated(literal(word), peek(not(one_of(is_word_char))))
}

/// Returns `true` if what remains after an opening `{` closes it again.
fn closes_inline(rest: &str) -> bool {
    rest.trim_start().starts_with('}')
}

fn namespace_open<'a>(input: &mut &'a str) -> ModalResult<LineEvent<'a>> {
    let name = preceded((keyword("namespace"), space1), identifier).parse_next(input)?;
    (ws0, '{').parse_next(input)?;

    Ok(LineEvent::NamespaceOpen {
        name,
        closed: closes_inline(input),
    })
}

/// Parse the declaration keyword of a type.
///
/// `abstract` and `abstract class` both declare classes.
fn entity_keyword(input: &mut &str) -> ModalResult<EntityKind> {
    alt((
        keyword("class").value(EntityKind::Class),
        keyword("interface").value(EntityKind::Interface),
        (keyword("abstract"), opt((space1, keyword("class")))).value(EntityKind::Class),
    ))
    .parse_next(input)
}

fn type_open<'a>(input: &mut &'a str) -> ModalResult<LineEvent<'a>> {
    let kind = terminated(entity_keyword, space1).parse_next(input)?;
    let name = identifier.parse_next(input)?;

    let extends =
        opt(preceded((space1, keyword("extends"), space1), qualified_name)).parse_next(input)?;

    let implements: Option<Vec<&str>> = opt(preceded(
        (space1, keyword("implements"), space1),
        separated(1.., qualified_name, (ws0, ',', ws0)),
    ))
    .parse_next(input)?;

    let (_, brace) = (ws0, opt('{')).parse_next(input)?;
    let opened = brace.is_some();

    Ok(LineEvent::TypeOpen(TypeOpen {
        kind,
        name,
        extends,
        implements: implements.unwrap_or_default(),
        closed: opened && closes_inline(input),
    }))
}

fn relation<'a>(input: &mut &'a str) -> ModalResult<LineEvent<'a>> {
    let source = identifier.parse_next(input)?;
    let arrow = delimited(ws0, take_while(MIN_ARROW_LEN.., ARROW_CHARS), ws0).parse_next(input)?;
    let target = identifier.parse_next(input)?;

    Ok(LineEvent::Relation {
        source,
        arrow,
        target,
    })
}

fn feature<'a>(input: &mut &'a str) -> ModalResult<LineEvent<'a>> {
    let (visibility, _, text) = (
        one_of(['+', '-', '#']).verify_map(Visibility::from_mark),
        ws0,
        take_while(1.., |_: char| true),
    )
        .parse_next(input)?;

    Ok(LineEvent::Feature { visibility, text })
}

/// Parse a `<<word>>` stereotype annotation.
pub(crate) fn stereotype<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    delimited("<<", identifier, ">>").parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_open_of(line: &str) -> TypeOpen<'_> {
        match scan_line(line) {
            Some(LineEvent::TypeOpen(open)) => open,
            other => panic!("Expected TypeOpen for `{line}`, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_and_comment_lines_are_skipped() {
        assert_eq!(scan_line(""), None);
        assert_eq!(scan_line("    "), None);
        assert_eq!(scan_line("' class Hidden {"), None);
    }

    #[test]
    fn test_namespace_open() {
        assert_eq!(
            scan_line("namespace app {"),
            Some(LineEvent::NamespaceOpen {
                name: "app",
                closed: false
            })
        );
        assert_eq!(
            scan_line("namespace app{ }"),
            Some(LineEvent::NamespaceOpen {
                name: "app",
                closed: true
            })
        );
    }

    #[test]
    fn test_namespace_without_brace_is_dropped() {
        assert_eq!(scan_line("namespace app"), None);
    }

    #[test]
    fn test_class_with_body() {
        let open = type_open_of("class Circle {");
        assert_eq!(open.kind, EntityKind::Class);
        assert_eq!(open.name, "Circle");
        assert_eq!(open.extends, None);
        assert!(open.implements.is_empty());
        assert!(!open.closed);
    }

    #[test]
    fn test_forward_declaration_without_brace() {
        let open = type_open_of("interface Shape");
        assert_eq!(open.kind, EntityKind::Interface);
        assert_eq!(open.name, "Shape");
        assert!(!open.closed);
    }

    #[test]
    fn test_inline_extends_and_implements() {
        let open = type_open_of("class Circle extends geo.Base implements api.Shape, Drawable {");
        assert_eq!(open.extends, Some("geo.Base"));
        assert_eq!(open.implements, vec!["api.Shape", "Drawable"]);
    }

    #[test]
    fn test_implements_without_extends() {
        let open = type_open_of("class Square implements Shape{");
        assert_eq!(open.extends, None);
        assert_eq!(open.implements, vec!["Shape"]);
    }

    #[test]
    fn test_empty_body_on_one_line_is_closed() {
        assert!(type_open_of("interface B { }").closed);
        assert!(type_open_of("class A {}").closed);
    }

    #[test]
    fn test_abstract_class() {
        assert_eq!(type_open_of("abstract class Base {").kind, EntityKind::Class);
        assert_eq!(type_open_of("abstract Base").name, "Base");
    }

    #[test]
    fn test_keyword_prefix_is_not_a_type() {
        // `classic` is an identifier, not the `class` keyword
        assert_eq!(scan_line("classic Foo {"), None);
    }

    #[test]
    fn test_relation_arrows() {
        for arrow in ["--|>", "<|--", "..|>", "<|..", "-->", "..>", "---", "<.."] {
            let line = format!("A {arrow} B");
            assert_eq!(
                scan_line(&line),
                Some(LineEvent::Relation {
                    source: "A",
                    arrow,
                    target: "B"
                }),
                "arrow `{arrow}`"
            );
        }
    }

    #[test]
    fn test_relation_without_spaces_and_with_label() {
        assert_eq!(
            scan_line("Circle--|>Shape : is a"),
            Some(LineEvent::Relation {
                source: "Circle",
                arrow: "--|>",
                target: "Shape"
            })
        );
    }

    #[test]
    fn test_short_arrow_is_not_a_relation() {
        assert_eq!(scan_line("A -> B"), None);
    }

    #[test]
    fn test_type_open_wins_over_relation() {
        assert!(matches!(
            scan_line("class A --|> B"),
            Some(LineEvent::TypeOpen(_))
        ));
    }

    #[test]
    fn test_feature_lines() {
        assert_eq!(
            scan_line("+radius: float"),
            Some(LineEvent::Feature {
                visibility: Visibility::Public,
                text: "radius: float"
            })
        );
        assert_eq!(
            scan_line("#  area(): float"),
            Some(LineEvent::Feature {
                visibility: Visibility::Protected,
                text: "area(): float"
            })
        );
        assert_eq!(
            scan_line("-id: int"),
            Some(LineEvent::Feature {
                visibility: Visibility::Private,
                text: "id: int"
            })
        );
    }

    #[test]
    fn test_unknown_visibility_mark_is_dropped() {
        assert_eq!(scan_line("~helper(): void"), None);
        assert_eq!(scan_line("+"), None);
    }

    #[test]
    fn test_block_close_must_be_alone() {
        assert_eq!(scan_line("}"), Some(LineEvent::BlockClose));
        assert_eq!(scan_line("} trailing"), None);
    }

    #[test]
    fn test_unrecognized_lines() {
        assert_eq!(scan_line("@startuml"), None);
        assert_eq!(scan_line("skinparam monochrome true"), None);
    }

    #[test]
    fn test_stereotype_parser() {
        let mut input = "<<virtual_0>> rest";
        assert_eq!(stereotype(&mut input).unwrap(), "virtual_0");
        assert_eq!(input, " rest");

        let mut input = "<<not closed";
        assert!(stereotype(&mut input).is_err());
    }

    mod proptest_tests {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #[test]
            fn scanning_never_panics(line in "\\PC{0,80}") {
                let _ = scan_line(&line);
            }

            #[test]
            fn marked_lines_are_features(
                mark in "[+#-]",
                body in "[a-z][a-z0-9_]{0,10}: [a-z]{1,8}",
            ) {
                let line = format!("{mark}{body}");
                let is_feature = matches!(scan_line(&line), Some(LineEvent::Feature { .. }));
                prop_assert!(is_feature, "`{}` was not classified as a feature", line);
            }
        }
    }
}
