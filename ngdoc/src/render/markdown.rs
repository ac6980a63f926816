//! GitHub-flavored markdown renderer.
//!
//! One page per module: an entity index, then for each entity its kind,
//! notices, requires list, attribute table and methods.

use crate::render::Renderer;
use crate::toc;
use anyhow::Result;
use ngdoc_mapper::{AttributeType, Entity, Method, Module, ParamType, ReturnType};

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render_module(&self, module: &Module) -> Result<String> {
        let mut output = format!("# {}\n\n", module.name);

        if !module.entities.is_empty() {
            output.push_str("## Index\n\n");
            for entity in &module.entities {
                output.push_str(&toc::render_toc_item(&entity.name));
                output.push('\n');
            }
            output.push('\n');
        }

        for entity in &module.entities {
            output.push_str(&render_entity(entity));
            output.push('\n');
        }

        Ok(output)
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

/// Render a single entity's documentation block.
fn render_entity(entity: &Entity) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("### {}\n", entity.name));
    lines.push(format!("_{}_", entity.kind));
    lines.push(String::new());

    if let Some(ref notice) = entity.deprecated {
        lines.push(render_deprecated(notice));
        lines.push(String::new());
    }

    if let Some(ref desc) = entity.description {
        lines.push(desc.clone());
        lines.push(String::new());
    }

    if !entity.requires.is_empty() {
        lines.push("#### Requires\n".to_string());
        for dep in &entity.requires {
            lines.push(format!("* `{}`", dep));
        }
        lines.push(String::new());
    }

    if !entity.attributes.is_empty() {
        lines.push("#### Attributes\n".to_string());
        lines.push("| Name | Type | Description |".to_string());
        lines.push("| --- | --- | --- |".to_string());
        for attr in &entity.attributes {
            lines.push(render_attribute_row(attr));
        }
        lines.push(String::new());
    }

    if !entity.methods.is_empty() {
        lines.push("#### Methods\n".to_string());
        for method in &entity.methods {
            render_method(&mut lines, method);
        }
    }

    lines.join("\n")
}

fn render_method(lines: &mut Vec<String>, method: &Method) {
    lines.push(format!("##### {}\n", method.name));

    if let Some(ref notice) = method.deprecated {
        lines.push(render_deprecated(notice));
        lines.push(String::new());
    }

    if !method.description.is_empty() {
        lines.push(method.description.clone());
        lines.push(String::new());
    }

    if let Some(ref params) = method.params {
        lines.push("**Parameters**\n".to_string());
        for param in params {
            lines.push(render_param(param));
        }
        lines.push(String::new());
    }

    if let Some(ref returns) = method.returns {
        lines.push(render_returns(returns));
        lines.push(String::new());
    }
}

fn render_deprecated(notice: &str) -> String {
    format!("> **Deprecated:** {}", notice)
}

/// `| `name` _(optional)_ | `type` | description |`
fn render_attribute_row(attr: &AttributeType) -> String {
    let mut name = format!("`{}`", attr.name);
    if attr.optional {
        name.push_str(" _(optional)_");
    }
    let type_cell = attr
        .type_name
        .as_deref()
        .map(|t| format!("`{}`", table_escape(t)))
        .unwrap_or_default();
    let desc = attr
        .description
        .as_deref()
        .map(table_escape)
        .unwrap_or_default();
    format!("| {} | {} | {} |", name, type_cell, desc)
}

/// `* `name` (`type`): description`
fn render_param(param: &ParamType) -> String {
    let mut line = format!("* `{}`", param.name);
    if let Some(ref t) = param.type_name {
        line.push_str(&format!(" (`{}`)", t));
    }
    if let Some(ref desc) = param.description {
        line.push_str(&format!(": {}", desc.replace('\n', "\n  ")));
    }
    line
}

/// `**Returns** `type`: description`
fn render_returns(returns: &ReturnType) -> String {
    let mut line = "**Returns**".to_string();
    if let Some(ref t) = returns.type_name {
        line.push_str(&format!(" `{}`", t));
    }
    if !returns.name.is_empty() {
        line.push_str(&format!(": {}", returns.name));
    }
    line
}

/// Keep a value inside one table cell.
fn table_escape(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}
