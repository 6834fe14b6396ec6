//! Protocol-level primitives for rendering Nostr events.
//!
//! This crate provides:
//! - The event data model (NIP-01 JSON shape) and tag helpers
//! - NIP-19 identifier encoding/decoding (npub, note, nevent, naddr)
//! - Reply-thread resolution from event tags (NIP-10 and address tags)
//! - Shared error types
//!
//! Everything here is pure and stateless: no I/O, no shared mutable
//! state. Display/HTML concerns live in `glint-render`.

mod error;
mod event;
pub mod nip19;
pub mod thread;

// ═══════════════════════════════════════════════════════════════════════════
// Event kinds
// ═══════════════════════════════════════════════════════════════════════════

/// Kind 0: profile metadata (JSON content).
pub const KIND_PROFILE: u16 = 0;

/// Kind 1: short text note.
pub const KIND_NOTE: u16 = 1;

/// Kind 1063: file metadata (NIP-94).
pub const KIND_FILE: u16 = 1063;

/// Kind 1311: community/live-activity chat post. Parents are referenced
/// via an `a` address tag rather than NIP-10 e-tags.
pub const KIND_LIVE_CHAT: u16 = 1311;

/// Kind 30311: live event (NIP-53).
pub const KIND_LIVE_EVENT: u16 = 30311;

/// Kind 31922: date-based calendar event (NIP-52).
pub const KIND_DATE_CALENDAR: u16 = 31922;

/// Kind 31923: time-based calendar event (NIP-52).
pub const KIND_TIME_CALENDAR: u16 = 31923;

pub use error::{Error, Result};
pub use event::{Event, Tag};
