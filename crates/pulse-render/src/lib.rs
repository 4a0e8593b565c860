//! # pulse-render
//!
//! The minijinja-backed implementation of [`pulse_core::render::Renderer`].
//!
//! Templates are loaded from the views directory (production) or from
//! inline sources (tests). The template set is read-only after
//! construction, so a [`TemplateRenderer`] is shared across all streaming
//! sessions behind an `Arc` with no locking.
//!
//! Auto-escaping follows minijinja's extension rules: `.html` templates
//! HTML-escape payload values.

#![deny(unsafe_code)]

use std::io;
use std::path::PathBuf;

use minijinja::{Environment, path_loader};
use pulse_core::event::EventPayload;
use pulse_core::render::{RenderError, Renderer};

/// Template renderer over a fixed set of minijinja templates.
#[derive(Debug)]
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    /// Load templates lazily from a directory on disk.
    ///
    /// The directory must exist; individual templates are resolved at
    /// render time, so a missing template surfaces as
    /// [`RenderError::NotFound`] from [`Renderer::render`].
    pub fn from_dir(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("views directory not found: {}", dir.display()),
            ));
        }
        let mut env = Environment::new();
        env.set_debug(cfg!(debug_assertions));
        env.set_loader(path_loader(dir));
        Ok(Self { env })
    }

    /// Build a renderer from inline `(name, source)` pairs.
    ///
    /// Used by tests and anywhere a views directory is overkill.
    pub fn from_sources<'a>(
        sources: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.set_debug(cfg!(debug_assertions));
        for (name, source) in sources {
            env.add_template_owned(name.to_string(), source.to_string())
                .map_err(engine_error)?;
        }
        Ok(Self { env })
    }
}

impl Renderer for TemplateRenderer {
    fn render(&self, template: &str, payload: &EventPayload) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(template).map_err(|e| {
            if e.kind() == minijinja::ErrorKind::TemplateNotFound {
                RenderError::NotFound(template.to_string())
            } else {
                engine_error(e)
            }
        })?;
        tmpl.render(payload).map_err(engine_error)
    }
}

fn engine_error(e: minijinja::Error) -> RenderError {
    RenderError::Engine(Box::new(e))
}
