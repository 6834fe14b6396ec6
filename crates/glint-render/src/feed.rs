//! Feed (RSS) content rendering and title deduplication.
//!
//! The feed pipeline runs the same escape/reflow steps as the preview,
//! then additionally links plain URLs, recursively embeds quoted events
//! through an [`EventSource`], and prepends an "In reply to" banner
//! when the event has a parent pointer.
//!
//! Quote recursion is bounded twice over: a configurable depth cap and
//! a visited-id set seeded with the rendered event's own id. Either
//! breach, like a plain lookup miss, degrades the quote to a fallback
//! link — embedding never fails a render and never runs unbounded.

use std::collections::HashSet;
use std::sync::LazyLock;

use glint_core::nip19::{self, Pointer};
use glint_core::{Error, Event, Result, thread};
use regex::Regex;

use crate::content;
use crate::options::RenderOptions;
use crate::source::EventSource;

/// Regex for line-break markers produced by the preview pipeline.
static BR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s?/?>").expect("br regex should compile"));

/// Visual separator between the reply banner and the body.
const REPLY_SEPARATOR: &str = "_________________________";

/// Render an event's content for feed consumption.
pub fn feed_content(event: &Event, source: &dyn EventSource, opts: &RenderOptions) -> String {
    let mut visited = HashSet::new();
    if !event.id.is_empty() {
        visited.insert(event.id.clone());
    }
    let body = render_fragment(&event.content, source, opts, 0, &mut visited);

    match thread::parent_pointer(event.kind, &event.tags) {
        Some(parent) => format!(
            "In reply to <a href=\"{}/{parent}\">{}</a><br/>{REPLY_SEPARATOR}<br/><br/>{body}",
            opts.base_url,
            nip19::short(&parent),
        ),
        None => body,
    }
}

/// Derive the feed title from the preview, suppressing it when it is a
/// near-duplicate of the feed content.
///
/// Words accumulate while the running character length (separating
/// spaces included) stays within the budget. Truncation after at least
/// two words appends a ` ...` marker; a first word that alone busts the
/// budget yields an empty candidate.
pub fn feed_title(event: &Event, source: &dyn EventSource, opts: &RenderOptions) -> String {
    let preview = content::preview(&event.content, opts).into_string();
    let text = BR_REGEX.replace_all(&preview, " ");

    let mut title = String::new();
    let mut length = 0usize;
    for (i, word) in text.split_whitespace().enumerate() {
        let sep = usize::from(!title.is_empty());
        let word_len = word.chars().count();
        if length + sep + word_len <= opts.title_max_chars {
            if sep == 1 {
                title.push(' ');
            }
            title.push_str(word);
            length += sep + word_len;
        } else {
            if i > 1 {
                title.push_str(" ...");
            } else {
                title.clear();
            }
            break;
        }
    }

    let full = feed_content(event, source, opts);
    if strsim::levenshtein(&title, &full) <= opts.title_similarity_threshold {
        String::new()
    } else {
        title
    }
}

/// Escape, reflow and link one content fragment, then embed its quotes.
fn render_fragment(
    text: &str,
    source: &dyn EventSource,
    opts: &RenderOptions,
    depth: usize,
    visited: &mut HashSet<String>,
) -> String {
    let escaped = content::escape(text);
    let lines: Vec<String> = escaped
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(content::linkify_urls)
        .collect();
    embed_refs(&lines.join("<br/>"), source, opts, depth, visited)
}

/// Replace inline NIP-19 references: event-shaped pointers become
/// block-quoted embeds (or fallback links), everything else becomes a
/// short-display link.
fn embed_refs(
    text: &str,
    source: &dyn EventSource,
    opts: &RenderOptions,
    depth: usize,
    visited: &mut HashSet<String>,
) -> String {
    content::NOSTR_REF_REGEX
        .replace_all(text, |caps: &regex::Captures| {
            let boundary = &caps[1];
            let id = &caps[2];
            let pointer = match nip19::decode(id) {
                Ok(pointer) => pointer,
                // Matched the shape but not the checksum; leave the text.
                Err(_) => return caps[0].to_string(),
            };
            match pointer {
                Pointer::Note(_) | Pointer::Event { .. } => {
                    match resolve_quote(&pointer, source, opts, depth, visited) {
                        Ok(inner) => format!(
                            "{boundary}<blockquote><a href=\"{}/{id}\">{}</a><br/>{inner}</blockquote>",
                            opts.base_url,
                            nip19::short(id),
                        ),
                        Err(err) => {
                            tracing::debug!(identifier = %id, error = %err, "quote rendered as plain link");
                            format!("{boundary}{}", content::identifier_link(id, &opts.base_url))
                        }
                    }
                }
                _ => format!("{boundary}{}", content::identifier_link(id, &opts.base_url)),
            }
        })
        .into_owned()
}

/// Resolve a quoted event and render its fragment one level deeper.
fn resolve_quote(
    pointer: &Pointer,
    source: &dyn EventSource,
    opts: &RenderOptions,
    depth: usize,
    visited: &mut HashSet<String>,
) -> Result<String> {
    if depth >= opts.max_quote_depth {
        return Err(Error::QuoteUnresolvable(format!(
            "depth limit {} reached",
            opts.max_quote_depth
        )));
    }

    let hex = pointer
        .event_id_hex()
        .ok_or_else(|| Error::QuoteUnresolvable("pointer has no event id".to_string()))?;
    if !visited.insert(hex.clone()) {
        return Err(Error::QuoteUnresolvable(format!(
            "event {hex} already embedded"
        )));
    }

    let event = source
        .lookup(pointer)
        .ok_or_else(|| Error::QuoteUnresolvable(format!("event {hex} not found")))?;
    Ok(render_fragment(
        &event.content,
        source,
        opts,
        depth + 1,
        visited,
    ))
}
