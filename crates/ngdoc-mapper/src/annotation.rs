//! Input model: doc comments already split into tags by an upstream parser.
//!
//! The serde shape follows the doctrine tag format, so the JSON a comment
//! parser emits can be deserialized directly:
//!
//! ```json
//! { "tags": [
//!     { "title": "param", "name": "id", "description": "Record id",
//!       "type": { "type": "OptionalType",
//!                 "expression": { "type": "NameExpression", "name": "string" } } }
//! ] }
//! ```

use serde::{Deserialize, Serialize};

/// One documentation comment, as an ordered list of tags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedComment {
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// A single `@title name {type} description` directive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_expr: Option<TypeExpr>,
}

/// Parsed type expression attached to a tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TypeExpr {
    /// `string`, `Array`, `MyType`
    #[serde(rename = "NameExpression")]
    Name { name: String },
    /// `string=` or `[name]` style optionality
    #[serde(rename = "OptionalType")]
    Optional { expression: Box<TypeExpr> },
    /// `Array.<string>`, `Object.<string, number>`
    #[serde(rename = "TypeApplication")]
    Application {
        expression: Box<TypeExpr>,
        #[serde(default)]
        applications: Vec<TypeExpr>,
    },
    /// Union, record, function and other shapes the mapper does not model.
    #[serde(other)]
    Other,
}

impl ParsedComment {
    pub fn new(tags: Vec<Tag>) -> Self {
        Self { tags }
    }

    /// First tag satisfying `pred`, in comment order.
    pub fn find(&self, pred: impl Fn(&Tag) -> bool) -> Option<&Tag> {
        self.tags.iter().find(|t| pred(*t))
    }

    /// All tags satisfying `pred`, in comment order.
    pub fn filter<'a>(
        &'a self,
        pred: impl Fn(&Tag) -> bool + 'a,
    ) -> impl Iterator<Item = &'a Tag> {
        self.tags.iter().filter(move |t| pred(*t))
    }
}

impl Tag {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_type(mut self, type_expr: TypeExpr) -> Self {
        self.type_expr = Some(type_expr);
        self
    }
}

impl TypeExpr {
    pub fn name(name: impl Into<String>) -> Self {
        TypeExpr::Name { name: name.into() }
    }

    pub fn optional(inner: TypeExpr) -> Self {
        TypeExpr::Optional {
            expression: Box::new(inner),
        }
    }

    pub fn application(base: TypeExpr, args: Vec<TypeExpr>) -> Self {
        TypeExpr::Application {
            expression: Box::new(base),
            applications: args,
        }
    }

    /// The plain name, only for `Name` expressions.
    pub fn plain_name(&self) -> Option<&str> {
        match self {
            TypeExpr::Name { name } => Some(name),
            _ => None,
        }
    }
}
