//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod markdown;

use anyhow::{anyhow, Result};
use ngdoc_mapper::Module;

/// Trait for rendering the documentation tree into a specific output format.
pub trait Renderer {
    /// Render one module as a standalone document.
    fn render_module(&self, module: &Module) -> Result<String>;

    /// Render every module into a single document.
    fn render_tree(&self, modules: &[Module]) -> Result<String> {
        let pages = modules
            .iter()
            .map(|m| self.render_module(m))
            .collect::<Result<Vec<_>>>()?;
        Ok(pages.join("\n"))
    }

    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use markdown or json", format)),
    }
}
