//! Recognized ngdoc vocabulary: tag kinds, documentation markers, entity kinds.
//!
//! Every string comparison the extractors make against tag titles or
//! `@ngdoc` values goes through the tables in this module.

use crate::annotation::Tag;
use std::fmt;

/// Tag kinds the mapper reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// `@ngdoc <kind>`, the documentation-kind tag
    Ngdoc,
    Name,
    /// `@module <name>`, the owning module of an entity
    Module,
    /// `@methodOf <entity>`
    MethodOf,
    Param,
    Returns,
    Requires,
    Deprecated,
    Description,
}

impl TagKind {
    pub const ALL: [TagKind; 9] = [
        TagKind::Ngdoc,
        TagKind::Name,
        TagKind::Module,
        TagKind::MethodOf,
        TagKind::Param,
        TagKind::Returns,
        TagKind::Requires,
        TagKind::Deprecated,
        TagKind::Description,
    ];

    /// Tag titles recognized as this kind. The first entry is canonical.
    pub fn titles(self) -> &'static [&'static str] {
        match self {
            TagKind::Ngdoc => &["ngdoc"],
            TagKind::Name => &["name"],
            TagKind::Module => &["module"],
            TagKind::MethodOf => &["methodOf"],
            TagKind::Param => &["param"],
            TagKind::Returns => &["returns", "return"],
            TagKind::Requires => &["requires"],
            TagKind::Deprecated => &["deprecated"],
            TagKind::Description => &["description"],
        }
    }

    pub fn as_str(self) -> &'static str {
        self.titles()[0]
    }

    pub fn matches(self, tag: &Tag) -> bool {
        self.titles().contains(&tag.title.as_str())
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.as_str())
    }
}

/// Non-entity values of the `@ngdoc` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocMarker {
    Module,
    Method,
}

impl DocMarker {
    pub fn as_str(self) -> &'static str {
        match self {
            DocMarker::Module => "module",
            DocMarker::Method => "method",
        }
    }

    /// `@ngdoc module` / `@ngdoc method`, compared exactly.
    pub fn matches(self, tag: &Tag) -> bool {
        TagKind::Ngdoc.matches(tag) && tag.description.as_deref() == Some(self.as_str())
    }
}

impl fmt::Display for DocMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entity kinds an `@ngdoc` tag may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Service,
    Directive,
    Controller,
    Filter,
    Provider,
    Object,
    Function,
    Type,
    Input,
}

// Keys are uppercase; lookups uppercase the candidate first.
const ENTITY_KINDS: &[(&str, EntityKind)] = &[
    ("SERVICE", EntityKind::Service),
    ("DIRECTIVE", EntityKind::Directive),
    ("CONTROLLER", EntityKind::Controller),
    ("FILTER", EntityKind::Filter),
    ("PROVIDER", EntityKind::Provider),
    ("OBJECT", EntityKind::Object),
    ("FUNCTION", EntityKind::Function),
    ("TYPE", EntityKind::Type),
    ("INPUT", EntityKind::Input),
];

impl EntityKind {
    /// Case-insensitive lookup of an `@ngdoc` value.
    pub fn from_marker(marker: &str) -> Option<Self> {
        let upper = marker.to_uppercase();
        ENTITY_KINDS
            .iter()
            .find(|(key, _)| *key == upper)
            .map(|(_, kind)| *kind)
    }

    /// Entity kind declared by an `@ngdoc` tag, if any.
    pub fn of_tag(tag: &Tag) -> Option<Self> {
        if !TagKind::Ngdoc.matches(tag) {
            return None;
        }
        tag.description.as_deref().and_then(Self::from_marker)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Service => "service",
            EntityKind::Directive => "directive",
            EntityKind::Controller => "controller",
            EntityKind::Filter => "filter",
            EntityKind::Provider => "provider",
            EntityKind::Object => "object",
            EntityKind::Function => "function",
            EntityKind::Type => "type",
            EntityKind::Input => "input",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_accepts_alias() {
        assert!(TagKind::Returns.matches(&Tag::new("returns")));
        assert!(TagKind::Returns.matches(&Tag::new("return")));
        assert!(!TagKind::Returns.matches(&Tag::new("param")));
    }

    #[test]
    fn tag_titles_are_case_sensitive() {
        assert!(TagKind::MethodOf.matches(&Tag::new("methodOf")));
        assert!(!TagKind::MethodOf.matches(&Tag::new("methodof")));
    }

    #[test]
    fn canonical_titles_are_distinct() {
        let mut titles: Vec<_> = TagKind::ALL.iter().map(|k| k.as_str()).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), TagKind::ALL.len());
    }

    #[test]
    fn marker_requires_ngdoc_tag() {
        let ngdoc = Tag::new("ngdoc").with_description("module");
        let other = Tag::new("kind").with_description("module");
        assert!(DocMarker::Module.matches(&ngdoc));
        assert!(!DocMarker::Method.matches(&ngdoc));
        assert!(!DocMarker::Module.matches(&other));
    }

    #[test]
    fn entity_kind_lookup_ignores_case() {
        assert_eq!(EntityKind::from_marker("service"), Some(EntityKind::Service));
        assert_eq!(EntityKind::from_marker("Directive"), Some(EntityKind::Directive));
        assert_eq!(EntityKind::from_marker("method"), None);
        assert_eq!(EntityKind::from_marker("module"), None);
    }

    #[test]
    fn entity_kind_table_round_trips() {
        for (key, kind) in ENTITY_KINDS {
            assert_eq!(kind.as_str().to_uppercase(), *key);
        }
    }

    #[test]
    fn entity_kind_of_non_ngdoc_tag() {
        assert_eq!(
            EntityKind::of_tag(&Tag::new("description").with_description("service")),
            None
        );
        assert_eq!(
            EntityKind::of_tag(&Tag::new("ngdoc").with_description("FILTER")),
            Some(EntityKind::Filter)
        );
    }
}
