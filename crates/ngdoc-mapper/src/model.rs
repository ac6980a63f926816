//! Output model: modules, their entities, and the entities' methods.

use serde::{Deserialize, Serialize};

/// A documented module (`@ngdoc module`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub name: String,
    #[serde(default)]
    pub entities: Vec<Entity>,
}

/// A service, directive, controller or other entity of a module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    /// `@ngdoc` value as written, e.g. `service`
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub attributes: Vec<AttributeType>,
    /// `@requires` names, duplicates kept
    #[serde(default)]
    pub requires: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub methods: Vec<Method>,
}

/// A method of an entity (`@ngdoc method` + `@methodOf`).
///
/// `params` and `returns` are `None` when nothing is documented, which is
/// not the same as an empty parameter list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<ParamType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<ReturnType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamType {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeType {
    pub name: String,
    pub optional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnType {
    pub name: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
}

impl From<AttributeType> for ParamType {
    fn from(attr: AttributeType) -> Self {
        ParamType {
            name: attr.name,
            description: attr.description,
            type_name: attr.type_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_omits_undocumented_fields() {
        let method = Method {
            name: "render".to_string(),
            description: "Draw it".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&method).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "render", "description": "Draw it" })
        );
    }

    #[test]
    fn method_keeps_empty_params() {
        let method = Method {
            name: "noop".to_string(),
            params: Some(vec![]),
            ..Default::default()
        };
        let json = serde_json::to_value(&method).unwrap();
        assert_eq!(json["params"], serde_json::json!([]));
    }

    #[test]
    fn entity_always_has_lists() {
        let entity = Entity {
            name: "$http".to_string(),
            kind: "service".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&entity).unwrap();
        assert_eq!(json["type"], "service");
        assert_eq!(json["attributes"], serde_json::json!([]));
        assert_eq!(json["requires"], serde_json::json!([]));
        assert!(json.get("deprecated").is_none());
    }

    #[test]
    fn param_drops_optional_flag() {
        let param = ParamType::from(AttributeType {
            name: "id".to_string(),
            optional: true,
            description: None,
            type_name: Some("string".to_string()),
        });
        assert_eq!(param.name, "id");
        assert_eq!(param.type_name.as_deref(), Some("string"));
    }
}
