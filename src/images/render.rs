//! Proxy image generation.

use std::path::Path;

use crate::cards::FieldMapping;
use crate::core::Container;

/// Draws a proxy image for a card and saves it to disk.
///
/// The container identifies the game whose proxy definition applies.
/// Implementations choose their layout (typically through a
/// `TemplateManager`) from `fields`. The resolver does not check that a
/// file was written.
pub trait ProxyRenderer: Send + Sync {
    fn render_proxy(&self, container: &Container, fields: &FieldMapping, target: &Path);
}

impl<F> ProxyRenderer for F
where
    F: Fn(&Container, &FieldMapping, &Path) + Send + Sync,
{
    fn render_proxy(&self, container: &Container, fields: &FieldMapping, target: &Path) {
        self(container, fields, target)
    }
}
