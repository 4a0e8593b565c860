//! The rendering seam.
//!
//! The session loop and the landing page depend on [`Renderer`] rather than
//! a concrete template engine; `pulse-render` supplies the minijinja-backed
//! implementation and tests can substitute trivial ones.

use crate::errors::BoxError;
use crate::event::EventPayload;

/// Renders a named template against a string-map payload.
///
/// The template set behind an implementation is read-only after
/// construction and shared across all sessions (`Arc<dyn Renderer>`).
pub trait Renderer: Send + Sync {
    /// Render `template` with `payload`, returning the finished body.
    fn render(&self, template: &str, payload: &EventPayload) -> Result<String, RenderError>;
}

/// Why a render call failed.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// No template with the given name is loaded.
    #[error("template not found: {0}")]
    NotFound(String),

    /// The template engine rejected the template or payload.
    #[error("template engine failed")]
    Engine(#[source] BoxError),
}

#[cfg(test)]
mod tests {
    use super::*;

    struct UpperRenderer;

    impl Renderer for UpperRenderer {
        fn render(&self, template: &str, payload: &EventPayload) -> Result<String, RenderError> {
            let data = payload
                .get("data")
                .ok_or_else(|| RenderError::NotFound(template.to_string()))?;
            Ok(data.to_uppercase())
        }
    }

    #[test]
    fn trait_object_is_usable() {
        let renderer: &dyn Renderer = &UpperRenderer;
        let mut payload = EventPayload::new();
        let _ = payload.insert("data".into(), "tick".into());
        assert_eq!(renderer.render("event.html", &payload).unwrap(), "TICK");
    }

    #[test]
    fn error_messages_name_the_template() {
        let err = RenderError::NotFound("missing.html".into());
        assert_eq!(err.to_string(), "template not found: missing.html");
    }
}
