//! HTML views rendered with Tera.
//!
//! Templates live in `crates/api/templates/` and are embedded into the
//! binary. They are parsed once, on first use, into a process-wide
//! registry; `main` calls [`preload`] so a broken template fails startup
//! instead of the first request.

use std::sync::LazyLock;

use axum::response::Html;
use rust_embed::Embed;
use tera::{Context, Tera};

#[derive(Embed)]
#[folder = "templates/"]
struct EmbeddedTemplates;

/// Parsed template registry.
pub struct Views {
    tera: Tera,
}

#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    /// The embedded templates did not parse. The cause is kept as the
    /// error source.
    #[error("Templates failed to load")]
    Load(#[source] &'static tera::Error),

    #[error("Template rendering error: {0}")]
    Render(#[from] tera::Error),
}

static VIEWS: LazyLock<Result<Views, tera::Error>> = LazyLock::new(Views::load);

impl Views {
    /// Parse every embedded template.
    ///
    /// All templates are registered in one batch so `{% extends %}`
    /// resolves regardless of file order.
    pub fn load() -> Result<Self, tera::Error> {
        let mut templates = Vec::new();
        for file in EmbeddedTemplates::iter() {
            let name = file.as_ref();
            if let Some(content) = EmbeddedTemplates::get(name) {
                let source = String::from_utf8_lossy(&content.data).into_owned();
                templates.push((name.to_string(), source));
            }
        }

        let mut tera = Tera::default();
        tera.add_raw_templates(templates)?;
        Ok(Self { tera })
    }

    /// Names of the registered templates.
    pub fn template_names(&self) -> impl Iterator<Item = &str> {
        self.tera.get_template_names()
    }

    pub fn render(&self, name: &str, context: &Context) -> Result<Html<String>, tera::Error> {
        self.tera.render(name, context).map(Html)
    }
}

/// Force template parsing, surfacing any error.
pub fn preload() -> Result<&'static Views, ViewError> {
    VIEWS.as_ref().map_err(ViewError::Load)
}

/// Render `name` with the shared registry.
pub fn render(name: &str, context: &Context) -> Result<Html<String>, ViewError> {
    Ok(preload()?.render(name, context)?)
}
