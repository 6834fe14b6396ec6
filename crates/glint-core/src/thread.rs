//! Reply-thread resolution from event tags.
//!
//! Derives an event's immediate parent reference, kind-dependent:
//! note-like kinds follow NIP-10 e-tag conventions, community chat
//! posts follow the first `a` address tag. Malformed tags are treated
//! as absent — resolution never fails, it just finds no parent.

use crate::event::Tag;
use crate::nip19;
use crate::{KIND_FILE, KIND_LIVE_CHAT, KIND_NOTE};

/// Locate the NIP-10 immediate-reply e-tag.
///
/// Precedence: an e-tag marked `reply` wins, then one marked `root`,
/// then the legacy positional fallback (last unmarked e-tag). Tags
/// marked `mention` and tags with fewer than 2 positions are skipped.
pub fn immediate_reply(tags: &[Tag]) -> Option<&Tag> {
    let mut root = None;
    let mut last = None;

    for tag in tags {
        if tag.len() < 2 || tag[0] != "e" {
            continue;
        }
        match tag.get(3).map(String::as_str) {
            Some("reply") => return Some(tag),
            Some("root") => root = Some(tag),
            Some("mention") => {}
            _ => last = Some(tag),
        }
    }

    root.or(last)
}

/// True iff an immediate-reply tag is present, independent of kind.
pub fn is_reply(tags: &[Tag]) -> bool {
    immediate_reply(tags).is_some()
}

/// Derive the encoded parent pointer for an event, if any.
///
/// - Note-like kinds (1, 1063): the immediate-reply e-tag becomes an
///   nevent (relay hint from position 2, no author).
/// - Community chat (1311): the first `a` tag's `kind:pubkey:d-tag`
///   value becomes an naddr (relay hint from position 2).
/// - Everything else has no parent.
pub fn parent_pointer(kind: u16, tags: &[Tag]) -> Option<String> {
    match kind {
        KIND_NOTE | KIND_FILE => {
            let tag = immediate_reply(tags)?;
            nip19::encode_event(&tag[1], &tag_relay_hint(tag), None).ok()
        }
        KIND_LIVE_CHAT => {
            let tag = tags.iter().find(|t| t.len() >= 2 && t[0] == "a")?;
            let mut parts = tag[1].splitn(3, ':');
            let kind: u16 = parts.next()?.parse().ok()?;
            let pubkey = parts.next()?;
            let d_tag = parts.next()?;
            nip19::encode_entity(d_tag, kind, pubkey, &tag_relay_hint(tag)).ok()
        }
        _ => None,
    }
}

/// Relay hint list from a tag's position 2: one entry when present and
/// non-empty, otherwise empty.
fn tag_relay_hint(tag: &Tag) -> Vec<String> {
    match tag.get(2) {
        Some(relay) if !relay.is_empty() => vec![relay.clone()],
        _ => Vec::new(),
    }
}
