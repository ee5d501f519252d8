//! Member and method extraction from feature lines.
//!
//! A feature body is the text after its visibility mark. Stereotype
//! annotations (`<<word>>`) are removed first; the remaining text is a
//! method if it holds a `(...)` pair and a member otherwise.

use winnow::{
    Parser as _,
    combinator::{not, terminated},
};

use trellis_core::semantic::{Member, Method, Stereotypes};

use crate::scanner::{identifier, stereotype, ws0};

/// A member or method parsed from a feature line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Feature {
    Member(Member),
    Method(Method),
}

/// Parses a feature body into a member or a method.
pub(crate) fn extract_feature(text: &str) -> Feature {
    let (text, stereotype_names) = strip_stereotypes(text);

    match parse_method(&text, &stereotype_names) {
        Some(method) => Feature::Method(method),
        None => Feature::Member(parse_member(&text)),
    }
}

/// Removes every `<<word>>` annotation, returning the trimmed remainder and
/// the annotation words in order.
fn strip_stereotypes(text: &str) -> (String, Vec<&str>) {
    let mut names = Vec::new();
    let mut stripped = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find("<<") {
        stripped.push_str(&rest[..start]);
        let mut candidate = &rest[start..];
        match stereotype.parse_next(&mut candidate) {
            Ok(name) => {
                names.push(name);
                rest = candidate;
            }
            Err(_) => {
                stripped.push('<');
                rest = &rest[start + 1..];
            }
        }
    }
    stripped.push_str(rest);

    (stripped.trim().to_string(), names)
}

/// Parses `[ret] name(params) [: ret]`.
///
/// Returns `None` if the text has no `(` followed by a `)`, or no name
/// before the `(`.
fn parse_method(text: &str, stereotype_names: &[&str]) -> Option<Method> {
    let (head, tail) = text.split_once('(')?;
    let (params, after) = tail.split_once(')')?;

    let mut tokens: Vec<&str> = head.split_whitespace().collect();
    let name = tokens.pop()?;

    let return_type = after
        .trim()
        .strip_prefix(':')
        .map(str::trim)
        .filter(|ret| !ret.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| {
            if tokens.is_empty() {
                Method::DEFAULT_RETURN_TYPE.to_string()
            } else {
                tokens.join(" ")
            }
        });

    let params = params
        .split(',')
        .map(str::trim)
        .filter(|param| !param.is_empty())
        .map(str::to_string)
        .collect();

    Some(Method::new(
        return_type,
        name,
        params,
        Stereotypes::from_names(stereotype_names.iter().copied()),
    ))
}

/// Parses `name: type`, `type name`, or a bare `name`.
///
/// The `name: type` form needs a lone `:` right after the name, so
/// qualified C-style types such as `std::string name` split on whitespace.
fn parse_member(text: &str) -> Member {
    let mut rest = text;
    if let Ok(name) = terminated(identifier, (ws0, ':', not(':'))).parse_next(&mut rest) {
        let type_name = rest.trim();
        return Member::new(
            text,
            name,
            (!type_name.is_empty()).then(|| type_name.to_string()),
        );
    }

    let mut tokens: Vec<&str> = text.split_whitespace().collect();
    match tokens.pop() {
        Some(name) if !tokens.is_empty() => Member::new(text, name, Some(tokens.join(" "))),
        Some(name) => Member::new(text, name, None),
        None => Member::new(text, "", None),
    }
}
