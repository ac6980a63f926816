//! Type-expression normalizer shared by entity attributes and method params.

use crate::annotation::{Tag, TypeExpr};
use crate::model::{AttributeType, ReturnType};

/// Base name of the only generic application that gets a type name.
const ARRAY_BASE: &str = "Array";

/// Normalize a `@param` tag into an attribute record.
///
/// - `[name]` / `T=` optional wrappers set `optional` and are unwrapped once.
/// - `Array<T>` becomes `T[]`; other generic applications get no type.
/// - Plain names pass through.
pub fn attribute(tag: &Tag) -> AttributeType {
    let (optional, type_name) = match &tag.type_expr {
        Some(TypeExpr::Optional { expression }) => (true, type_name(expression)),
        Some(expr) => (false, type_name(expr)),
        None => (false, None),
    };

    AttributeType {
        name: tag.name.clone().unwrap_or_default(),
        optional,
        description: tag.description.clone(),
        type_name,
    }
}

/// Normalize a `@returns` tag. Only a plain-name type is kept.
pub fn return_type(tag: &Tag) -> ReturnType {
    ReturnType {
        name: tag.description.clone().unwrap_or_default(),
        type_name: tag
            .type_expr
            .as_ref()
            .and_then(TypeExpr::plain_name)
            .map(str::to_string),
    }
}

/// Flat type name of an already-unwrapped expression.
fn type_name(expr: &TypeExpr) -> Option<String> {
    match expr {
        TypeExpr::Name { name } => Some(name.clone()),
        TypeExpr::Application {
            expression,
            applications,
        } if expression.plain_name() == Some(ARRAY_BASE) => {
            // Multiple arguments join as "A,B[]"; kept for output compatibility.
            let args: Vec<String> = applications
                .iter()
                .map(|arg| type_name(arg).unwrap_or_default())
                .collect();
            Some(format!("{}[]", args.join(",")))
        }
        // Non-Array generics are not supported yet.
        TypeExpr::Application { .. } => None,
        TypeExpr::Optional { .. } | TypeExpr::Other => None,
    }
}
