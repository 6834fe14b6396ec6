//! Rendering options, loadable from the environment.

use serde::Deserialize;

/// Tunable parameters for the rendition pipelines.
///
/// The quote-recursion depth and the title similarity threshold are
/// deliberate knobs rather than hardcoded constants; the defaults match
/// the behavior of existing ecosystem tooling.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Base URL prepended to generated identifier links (no trailing
    /// slash). Empty means root-relative links.
    pub base_url: String,

    /// Maximum quote-embedding recursion depth. Quotes past this depth
    /// render as plain links.
    pub max_quote_depth: usize,

    /// Edit-distance threshold at or under which a feed title is
    /// considered redundant with the feed content and suppressed.
    pub title_similarity_threshold: usize,

    /// Character budget for feed titles, separating spaces included.
    pub title_max_chars: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            max_quote_depth: 3,
            title_similarity_threshold: 5,
            title_max_chars: 65,
        }
    }
}

impl RenderOptions {
    /// Load options from environment variables, falling back to
    /// defaults.
    ///
    /// Optional:
    /// - `GLINT_BASE_URL`: link base URL (default: "", root-relative)
    /// - `GLINT_QUOTE_DEPTH`: max quote recursion depth (default: 3)
    /// - `GLINT_TITLE_THRESHOLD`: title similarity threshold (default: 5)
    /// - `GLINT_TITLE_MAX_CHARS`: title character budget (default: 65)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let base_url = std::env::var("GLINT_BASE_URL")
            .unwrap_or_default()
            .trim_end_matches('/')
            .to_string();

        let max_quote_depth = env_usize("GLINT_QUOTE_DEPTH", defaults.max_quote_depth);
        let title_similarity_threshold =
            env_usize("GLINT_TITLE_THRESHOLD", defaults.title_similarity_threshold);
        let title_max_chars = env_usize("GLINT_TITLE_MAX_CHARS", defaults.title_max_chars);

        tracing::info!(
            base_url = %base_url,
            max_quote_depth,
            title_similarity_threshold,
            title_max_chars,
            "render options loaded"
        );

        Self {
            base_url,
            max_quote_depth,
            title_similarity_threshold,
            title_max_chars,
        }
    }
}

fn env_usize(key: &str, default: usize) -> usize {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
