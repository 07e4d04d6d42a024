//! Entry → Markdown.

mod markdown;
mod template;

pub use markdown::render_markdown;
pub use template::Template;

use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use std::fs;
use std::path::Path;

/// Template name that selects the built-in renderer instead of a file.
pub const BUILTIN_TEMPLATE: &str = "builtin";

enum Strategy {
    Builtin,
    File(Template),
}

/// Renders entries with one template, loaded once.
pub struct EntryRenderer {
    strategy: Strategy,
}

impl EntryRenderer {
    /// Resolve `name` in `templates_dir`, or the built-in renderer.
    pub fn new(templates_dir: &Path, name: &str) -> AppResult<Self> {
        if name == BUILTIN_TEMPLATE {
            return Ok(Self {
                strategy: Strategy::Builtin,
            });
        }

        let path = templates_dir.join(name);
        let source = fs::read_to_string(&path).map_err(|e| {
            AppError::Template(format!("cannot load template {}: {e}", path.display()))
        })?;
        log::debug!("Loaded template {}", path.display());

        Ok(Self {
            strategy: Strategy::File(Template::new(source)),
        })
    }

    pub fn render(&self, entry: &Entry) -> AppResult<String> {
        match &self.strategy {
            Strategy::Builtin => Ok(render_markdown(entry)),
            Strategy::File(t) => t.render(entry),
        }
    }
}

/// One-shot rendering of a single entry.
pub fn render(entry: &Entry, template_name: &str, templates_dir: &Path) -> AppResult<String> {
    EntryRenderer::new(templates_dir, template_name)?.render(entry)
}
