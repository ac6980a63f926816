//! ngdoc annotation mapper.
//!
//! Reshapes doc comments that an upstream parser has already split into tags
//! into a nested documentation tree:
//!
//! - `@ngdoc module` comments become [`Module`]s
//! - `@ngdoc service|directive|...` comments with a matching `@module` tag
//!   become that module's [`Entity`]s
//! - `@ngdoc method` comments with a matching `@methodOf` tag become that
//!   entity's [`Method`]s
//!
//! Mapping is pure: the same comments always produce an equal tree.

pub mod annotation;
pub mod error;
pub mod extract;
pub mod model;
pub mod normalize;
pub mod vocabulary;

pub use annotation::{ParsedComment, Tag, TypeExpr};
pub use error::{MapError, Result};
pub use model::{AttributeType, Entity, Method, Module, ParamType, ReturnType};
pub use vocabulary::{DocMarker, EntityKind, TagKind};

/// Build the module → entity → method tree from a comment set.
///
/// Comments that match no module, entity or method are ignored. The first
/// malformed comment (e.g. a module without `@name`) aborts the mapping.
pub fn map(comments: &[ParsedComment]) -> Result<Vec<Module>> {
    let mut modules = extract::modules(comments)?;
    for module in &mut modules {
        let mut entities = extract::entities(comments, module)?;
        for entity in &mut entities {
            entity.methods = extract::methods(comments, entity)?;
        }
        module.entities = entities;
    }
    Ok(modules)
}
