//! Module, entity and method extraction.
//!
//! Each stage selects the comments that satisfy all of its predicates, then
//! converts every selected comment, in input order. Comments that match no
//! stage are dropped silently; a selected comment that cannot be converted
//! fails the stage.

use crate::annotation::{ParsedComment, Tag};
use crate::error::{MapError, Result};
use crate::model::{Entity, Method, Module, ParamType};
use crate::normalize;
use crate::vocabulary::{DocMarker, EntityKind, TagKind};

/// Comment predicate for one extraction stage.
type Predicate<'a> = &'a dyn Fn(&ParsedComment) -> bool;

/// Filter-then-convert over the comment set, preserving order.
fn select<'c, T>(
    comments: &'c [ParsedComment],
    predicates: &[Predicate<'_>],
    convert: impl Fn(&'c ParsedComment) -> Result<T>,
) -> Result<Vec<T>> {
    comments
        .iter()
        .filter(|comment| predicates.iter().all(|pred| pred(*comment)))
        .map(convert)
        .collect()
}

fn has_tag(comment: &ParsedComment, pred: impl Fn(&Tag) -> bool) -> bool {
    comment.find(pred).is_some()
}

/// Comments declaring `@ngdoc module`, converted to modules without entities.
pub fn modules(comments: &[ParsedComment]) -> Result<Vec<Module>> {
    let declares_module: Predicate = &|c| has_tag(c, |t| DocMarker::Module.matches(t));

    select(comments, &[declares_module], |comment| {
        Ok(Module {
            name: required_name(comment, "module")?,
            entities: Vec::new(),
        })
    })
}

/// Entities whose `@module` tag names `module`, without methods.
pub fn entities(comments: &[ParsedComment], module: &Module) -> Result<Vec<Entity>> {
    let in_module: Predicate = &|c| {
        has_tag(c, |t| {
            TagKind::Module.matches(t) && t.name.as_deref() == Some(module.name.as_str())
        })
    };
    let declares_entity: Predicate = &|c| has_tag(c, |t| EntityKind::of_tag(t).is_some());

    select(comments, &[in_module, declares_entity], to_entity)
}

/// Methods whose `@methodOf` tag names `entity` exactly.
pub fn methods(comments: &[ParsedComment], entity: &Entity) -> Result<Vec<Method>> {
    let method_of: Predicate = &|c| {
        has_tag(c, |t| {
            TagKind::MethodOf.matches(t)
                && t.description.as_deref() == Some(entity.name.as_str())
        })
    };
    let declares_method: Predicate = &|c| has_tag(c, |t| DocMarker::Method.matches(t));

    select(comments, &[method_of, declares_method], to_method)
}

fn to_entity(comment: &ParsedComment) -> Result<Entity> {
    let name = required_name(comment, "entity")?;
    let kind = comment
        .find(|t| EntityKind::of_tag(t).is_some())
        .and_then(|t| t.description.clone())
        .ok_or(MapError::MissingTag {
            tag: TagKind::Ngdoc,
            declaring: "entity",
        })?;

    Ok(Entity {
        name,
        kind,
        attributes: comment
            .filter(|t| TagKind::Param.matches(t))
            .map(normalize::attribute)
            .collect(),
        // A subjectless @requires names nothing and is skipped.
        requires: comment
            .filter(|t| TagKind::Requires.matches(t))
            .filter_map(|t| t.name.clone())
            .collect(),
        deprecated: first_text(comment, TagKind::Deprecated),
        description: first_text(comment, TagKind::Description),
        methods: Vec::new(),
    })
}

fn to_method(comment: &ParsedComment) -> Result<Method> {
    let raw = raw_name(comment, "method")?;
    let name = method_name(raw);
    if name.is_empty() {
        return Err(MapError::EmptyName {
            declaring: "method",
            raw: raw.to_string(),
        });
    }

    let description = comment
        .find(|t| TagKind::Description.matches(t))
        .ok_or(MapError::MissingTag {
            tag: TagKind::Description,
            declaring: "method",
        })?
        .description
        .clone()
        .unwrap_or_default();

    let params: Vec<ParamType> = comment
        .filter(|t| TagKind::Param.matches(t))
        .map(|t| normalize::attribute(t).into())
        .collect();

    Ok(Method {
        name: name.to_string(),
        description,
        params: (!params.is_empty()).then_some(params),
        returns: comment
            .find(|t| TagKind::Returns.matches(t))
            .map(normalize::return_type),
        deprecated: first_text(comment, TagKind::Deprecated),
    })
}

/// `Widget#render` → `render`; names without `#` are kept whole.
fn method_name(raw: &str) -> &str {
    raw.split_once('#').map_or(raw, |(_, member)| member)
}

/// Subject of the `@name` tag, which must be present.
fn raw_name<'c>(comment: &'c ParsedComment, declaring: &'static str) -> Result<&'c str> {
    comment
        .find(|t| TagKind::Name.matches(t))
        .map(|t| t.name.as_deref().unwrap_or_default())
        .ok_or(MapError::MissingTag {
            tag: TagKind::Name,
            declaring,
        })
}

fn required_name(comment: &ParsedComment, declaring: &'static str) -> Result<String> {
    let raw = raw_name(comment, declaring)?;
    if raw.is_empty() {
        return Err(MapError::EmptyName {
            declaring,
            raw: raw.to_string(),
        });
    }
    Ok(raw.to_string())
}

fn first_text(comment: &ParsedComment, kind: TagKind) -> Option<String> {
    comment
        .find(|t| kind.matches(t))
        .and_then(|t| t.description.clone())
}
