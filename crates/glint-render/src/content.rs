//! Content parsing and reflow for event text.
//!
//! Handles:
//! - HTML escaping (through maud, so the rules match page templates)
//! - Line reflow: blank lines are dropped, survivors join on `<br/>`
//! - Shortening of inline NIP-19 identifiers into display links
//! - URL linking (feed pipeline only)
//! - Best-effort thumbnail URL extraction

use std::sync::LazyLock;

use glint_core::nip19;
use maud::{Markup, PreEscaped, html};
use regex::Regex;

use crate::options::RenderOptions;

/// Regex for inline NIP-19 identifiers, bare or `nostr:`-prefixed.
/// The length floor keeps prose like "note1" from matching; real
/// identifiers carry at least 58 data characters after the prefix.
/// Group 1 is the boundary before the reference and must be re-emitted
/// by replacements; it excludes `/` and word characters so identifiers
/// inside URL paths (or already-generated href attributes) stay intact.
pub(crate) static NOSTR_REF_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[^\w/])(?:nostr:)?((?:npub|note|nevent|naddr)1[a-z0-9]{58,})")
        .expect("nostr ref regex should compile")
});

/// Regex for matching URLs in text content.
static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s<>\)\]]+").expect("URL regex should compile"));

/// Regex for the first image URL in raw content. Best-effort: extension
/// allow-list only, no content-type validation.
static IMAGE_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)https?://[^\s]+\.(?:png|jpe?g|gif|bmp|svg)(?:/[^\s]*)?")
        .expect("image URL regex should compile")
});

/// Escape raw text for safe markup embedding.
pub fn escape(text: &str) -> String {
    html! { (text) }.into_string()
}

/// Render event content as preview markup: escape, drop blank lines,
/// shorten inline identifiers into links, join on `<br/>`.
pub fn preview(content: &str, opts: &RenderOptions) -> Markup {
    let escaped = escape(content);
    let lines: Vec<String> = escaped
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| shorten_refs(line, opts))
        .collect();
    PreEscaped(lines.join("<br/>"))
}

/// Replace inline NIP-19 identifiers with short-display links.
pub fn shorten_refs(line: &str, opts: &RenderOptions) -> String {
    NOSTR_REF_REGEX
        .replace_all(line, |caps: &regex::Captures| {
            format!("{}{}", &caps[1], identifier_link(&caps[2], &opts.base_url))
        })
        .into_owned()
}

/// Wrap plain http(s) URLs in anchors. Used by the feed pipeline; the
/// display preview leaves plain URLs as text.
pub fn linkify_urls(line: &str) -> String {
    URL_REGEX
        .replace_all(line, |caps: &regex::Captures| {
            let url = &caps[0];
            format!("<a href=\"{url}\">{url}</a>")
        })
        .into_owned()
}

/// First URL in raw content whose path ends in a known image extension.
pub fn thumbnail(content: &str) -> Option<String> {
    IMAGE_URL_REGEX
        .find(content)
        .map(|m| m.as_str().to_string())
}

/// A short-display anchor for an encoded identifier.
pub(crate) fn identifier_link(id: &str, base_url: &str) -> String {
    format!("<a href=\"{base_url}/{id}\">{}</a>", nip19::short(id))
}
