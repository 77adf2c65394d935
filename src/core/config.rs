//! Resolver and template configuration.
//!
//! Callers configure the crate at startup by providing:
//! - `ResolverConfig`: picture lookup and proxy generation behaviour
//! - `TemplateConfig`: template selection mode and default template
//!
//! Both are plain data; loading them from disk is the caller's concern.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Scheme prefix for images embedded in the client's own resources.
pub const INTERNAL_SCHEME: &str = "pack://";

/// Renders slower than this are reported as lagging in diagnostic mode.
pub const SLOW_RENDER_THRESHOLD_MS: u64 = 200;

/// Configuration for `ImageResolver`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Time proxy generation and log the result.
    /// Off in normal runs; on for debug and release-test builds.
    pub diagnostics: bool,

    /// Lag threshold for the diagnostic timing warning, in milliseconds.
    pub slow_render_threshold_ms: u64,

    /// Image references starting with this prefix (case-insensitive)
    /// are returned unchanged.
    pub internal_scheme: String,

    /// File extension of proxy images, without the dot.
    pub proxy_extension: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            diagnostics: false,
            slow_render_threshold_ms: SLOW_RENDER_THRESHOLD_MS,
            internal_scheme: INTERNAL_SCHEME.to_string(),
            proxy_extension: "png".to_string(),
        }
    }
}

impl ResolverConfig {
    /// Enable or disable diagnostic timing.
    #[must_use]
    pub fn with_diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics = enabled;
        self
    }

    /// Set the slow render threshold.
    #[must_use]
    pub fn with_slow_render_threshold(mut self, millis: u64) -> Self {
        self.slow_render_threshold_ms = millis;
        self
    }

    #[must_use]
    pub fn slow_render_threshold(&self) -> Duration {
        Duration::from_millis(self.slow_render_threshold_ms)
    }

    /// Check whether an image reference points into internal resources.
    #[must_use]
    pub fn is_internal(&self, image_uri: &str) -> bool {
        let scheme = self.internal_scheme.as_str();
        if image_uri.trim().is_empty() || scheme.is_empty() {
            return false;
        }
        image_uri
            .get(..scheme.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(scheme))
    }
}

/// Configuration for `TemplateManager`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Identifier of the fallback template.
    pub default_id: Option<String>,

    /// Score templates across several fields instead of mapping one field.
    pub use_multi_field_matching: bool,
}

impl TemplateConfig {
    /// Set the default template identifier.
    #[must_use]
    pub fn with_default(mut self, id: impl Into<String>) -> Self {
        self.default_id = Some(id.into());
        self
    }

    /// Enable or disable multi-field matching.
    #[must_use]
    pub fn with_multi_field_matching(mut self, enabled: bool) -> Self {
        self.use_multi_field_matching = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolver_defaults() {
        let config = ResolverConfig::default();
        assert!(!config.diagnostics);
        assert_eq!(config.slow_render_threshold(), Duration::from_millis(200));
        assert_eq!(config.proxy_extension, "png");
    }

    #[test]
    fn test_internal_scheme_case_insensitive() {
        let config = ResolverConfig::default();
        assert!(config.is_internal("pack://application:,,,/Resources/Back.jpg"));
        assert!(config.is_internal("PACK://siteoforigin:,,,/front.png"));
        assert!(!config.is_internal("cards/pack.png"));
        assert!(!config.is_internal("pack:"));
        assert!(!config.is_internal("   "));
    }

    #[test]
    fn test_internal_scheme_multibyte_reference() {
        let config = ResolverConfig::default();
        // Slicing must not split a character.
        assert!(!config.is_internal("páck://x"));
    }

    #[test]
    fn test_template_config_builder() {
        let config = TemplateConfig::default()
            .with_default("generic")
            .with_multi_field_matching(true);
        assert_eq!(config.default_id.as_deref(), Some("generic"));
        assert!(config.use_multi_field_matching);
    }

    #[test]
    fn test_config_partial_json() {
        let config: ResolverConfig =
            serde_json::from_str(r#"{"diagnostics": true}"#).unwrap();
        assert!(config.diagnostics);
        assert_eq!(config.internal_scheme, INTERNAL_SCHEME);

        let templates: TemplateConfig =
            serde_json::from_str(r#"{"default_id": "generic"}"#).unwrap();
        assert_eq!(templates.default_id.as_deref(), Some("generic"));
        assert!(!templates.use_multi_field_matching);
    }
}
