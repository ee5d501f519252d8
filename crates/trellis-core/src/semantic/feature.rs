//! Members, methods, and the closed vocabularies attached to them.

use std::fmt;

use serde::{Serialize, Serializer, ser::SerializeMap};

/// Access level of a member or method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

impl Visibility {
    /// All visibilities, in the order renderers emit them.
    pub const ALL: [Visibility; 3] = [
        Visibility::Public,
        Visibility::Protected,
        Visibility::Private,
    ];

    /// Maps a feature mark to its visibility.
    ///
    /// `+` is public, `#` is protected and `-` is private. Any other
    /// character has no visibility.
    ///
    /// # Examples
    ///
    /// ```
    /// use trellis_core::semantic::Visibility;
    ///
    /// assert_eq!(Visibility::from_mark('#'), Some(Visibility::Protected));
    /// assert_eq!(Visibility::from_mark('~'), None);
    /// ```
    pub fn from_mark(mark: char) -> Option<Self> {
        match mark {
            '+' => Some(Visibility::Public),
            '#' => Some(Visibility::Protected),
            '-' => Some(Visibility::Private),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered lists of features, one list per [`Visibility`].
///
/// Lists are append-only and keep discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ByVisibility<T> {
    public: Vec<T>,
    protected: Vec<T>,
    private: Vec<T>,
}

impl<T> Default for ByVisibility<T> {
    fn default() -> Self {
        Self {
            public: Vec::new(),
            protected: Vec::new(),
            private: Vec::new(),
        }
    }
}

impl<T> ByVisibility<T> {
    /// Returns the features declared with `visibility`.
    pub fn get(&self, visibility: Visibility) -> &[T] {
        match visibility {
            Visibility::Public => &self.public,
            Visibility::Protected => &self.protected,
            Visibility::Private => &self.private,
        }
    }

    /// Appends a feature to the list for `visibility`.
    pub fn push(&mut self, visibility: Visibility, item: T) {
        match visibility {
            Visibility::Public => self.public.push(item),
            Visibility::Protected => self.protected.push(item),
            Visibility::Private => self.private.push(item),
        }
    }

    /// Iterates over every visibility together with its features.
    pub fn iter(&self) -> impl Iterator<Item = (Visibility, &[T])> {
        Visibility::ALL.into_iter().map(|v| (v, self.get(v)))
    }

    /// Total number of features across all visibilities.
    pub fn len(&self) -> usize {
        self.public.len() + self.protected.len() + self.private.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A method stereotype from the closed vocabulary understood by renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stereotype {
    Virtual,
    /// Pure virtual (`= 0`).
    Virtual0,
    Override,
    Const,
    Noexcept,
}

impl Stereotype {
    pub const ALL: [Stereotype; 5] = [
        Stereotype::Virtual,
        Stereotype::Virtual0,
        Stereotype::Override,
        Stereotype::Const,
        Stereotype::Noexcept,
    ];

    /// Looks up a stereotype by the word used inside `<<...>>`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "virtual" => Some(Stereotype::Virtual),
            "virtual_0" => Some(Stereotype::Virtual0),
            "override" => Some(Stereotype::Override),
            "const" => Some(Stereotype::Const),
            "noexcept" => Some(Stereotype::Noexcept),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stereotype::Virtual => "virtual",
            Stereotype::Virtual0 => "virtual_0",
            Stereotype::Override => "override",
            Stereotype::Const => "const",
            Stereotype::Noexcept => "noexcept",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Stereotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presence flags for every [`Stereotype`].
///
/// Serializes as a map from stereotype word to boolean, always containing
/// all five words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stereotypes([bool; Stereotype::ALL.len()]);

impl Stereotypes {
    /// Builds the flag set from stereotype words, ignoring words outside
    /// the vocabulary.
    ///
    /// # Examples
    ///
    /// ```
    /// use trellis_core::semantic::{Stereotype, Stereotypes};
    ///
    /// let flags = Stereotypes::from_names(["const", "inline"]);
    /// assert!(flags.is_set(Stereotype::Const));
    /// assert!(!flags.is_set(Stereotype::Override));
    /// ```
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut flags = Self::default();
        for stereotype in names.into_iter().filter_map(Stereotype::from_name) {
            flags.set(stereotype);
        }
        flags
    }

    pub fn set(&mut self, stereotype: Stereotype) {
        self.0[stereotype.index()] = true;
    }

    pub fn is_set(&self, stereotype: Stereotype) -> bool {
        self.0[stereotype.index()]
    }

    /// Returns `true` if at least one stereotype is present.
    pub fn any(&self) -> bool {
        self.0.iter().any(|flag| *flag)
    }

    /// Iterates over the full vocabulary with each word's presence.
    pub fn iter(&self) -> impl Iterator<Item = (Stereotype, bool)> + '_ {
        Stereotype::ALL.into_iter().map(|s| (s, self.is_set(s)))
    }
}

impl Serialize for Stereotypes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Stereotype::ALL.len()))?;
        for (stereotype, present) in self.iter() {
            map.serialize_entry(stereotype.as_str(), &present)?;
        }
        map.end()
    }
}

/// A data member of a class or interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    /// The declaration text with stereotypes removed.
    declaration: String,
    name: String,
    #[serde(rename = "type")]
    type_name: Option<String>,
}

impl Member {
    /// Creates a member from its raw declaration and structured parts.
    pub fn new(
        declaration: impl Into<String>,
        name: impl Into<String>,
        type_name: Option<String>,
    ) -> Self {
        Self {
            declaration: declaration.into(),
            name: name.into(),
            type_name,
        }
    }

    /// Returns the declaration text as written.
    pub fn declaration(&self) -> &str {
        &self.declaration
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared type, if the declaration named one.
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }
}

/// A method of a class or interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Method {
    return_type: String,
    name: String,
    /// Raw parameter declarations, in order.
    params: Vec<String>,
    stereotypes: Stereotypes,
}

impl Method {
    /// Return type used when a declaration names none.
    pub const DEFAULT_RETURN_TYPE: &'static str = "void";

    pub fn new(
        return_type: impl Into<String>,
        name: impl Into<String>,
        params: Vec<String>,
        stereotypes: Stereotypes,
    ) -> Self {
        Self {
            return_type: return_type.into(),
            name: name.into(),
            params,
            stereotypes,
        }
    }

    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn stereotypes(&self) -> Stereotypes {
        self.stereotypes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_from_mark() {
        assert_eq!(Visibility::from_mark('+'), Some(Visibility::Public));
        assert_eq!(Visibility::from_mark('#'), Some(Visibility::Protected));
        assert_eq!(Visibility::from_mark('-'), Some(Visibility::Private));
        assert_eq!(Visibility::from_mark('~'), None);
    }

    #[test]
    fn test_by_visibility_keeps_order_per_list() {
        let mut lists = ByVisibility::default();
        lists.push(Visibility::Private, "a");
        lists.push(Visibility::Public, "b");
        lists.push(Visibility::Private, "c");

        assert_eq!(lists.get(Visibility::Private), ["a", "c"]);
        assert_eq!(lists.get(Visibility::Public), ["b"]);
        assert!(lists.get(Visibility::Protected).is_empty());
        assert_eq!(lists.len(), 3);
    }

    #[test]
    fn test_stereotype_names_round_trip() {
        for stereotype in Stereotype::ALL {
            assert_eq!(Stereotype::from_name(stereotype.as_str()), Some(stereotype));
        }
        assert_eq!(Stereotype::from_name("static"), None);
    }

    #[test]
    fn test_stereotypes_serialize_full_vocabulary() {
        let flags = Stereotypes::from_names(["override"]);
        let json = serde_json::to_value(flags).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "virtual": false,
                "virtual_0": false,
                "override": true,
                "const": false,
                "noexcept": false,
            })
        );
    }

    #[test]
    fn test_member_serializes_type_key() {
        let member = Member::new("std::string name", "name", Some("std::string".to_string()));
        let json = serde_json::to_value(&member).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "declaration": "std::string name",
                "name": "name",
                "type": "std::string",
            })
        );
    }

    #[test]
    fn test_default_stereotypes_are_all_false() {
        let flags = Stereotypes::default();
        assert!(!flags.any());
        assert!(flags.iter().all(|(_, present)| !present));
    }
}
