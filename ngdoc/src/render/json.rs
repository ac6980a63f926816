//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the module tree directly. Optional fields are omitted when the
//! comments did not document them.

use crate::render::Renderer;
use anyhow::Result;
use ngdoc_mapper::Module;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render_module(&self, module: &Module) -> Result<String> {
        let mut out = serde_json::to_string_pretty(module)?;
        out.push('\n');
        Ok(out)
    }

    fn render_tree(&self, modules: &[Module]) -> Result<String> {
        let mut out = serde_json::to_string_pretty(modules)?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
