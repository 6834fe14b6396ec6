//! Human-consumable renditions of Nostr events.
//!
//! This crate turns already-resolved event data into display output:
//!
//! - **Preview**: escaped, reflowed, link-ified HTML for pages
//! - **Feed**: RSS-safe content with recursive quote embedding and a
//!   reply banner, plus a deduplicated short title
//! - **Metadata adapters**: typed views over kind-specific payloads
//!   (profile, file, calendar, live event)
//! - **[`EnhancedEvent`]**: the per-render adapter exposing all derived
//!   fields over a borrowed [`glint_core::Event`]
//!
//! The crate is pure and stateless. Quote embedding needs an external
//! [`EventSource`]; how lookups execute (blocking, async, cached) is
//! the caller's business — the only contract here is that a miss, a
//! revisited id, or a depth-limit breach renders a plain fallback link.

pub mod content;
pub mod feed;
pub mod meta;
pub mod options;
pub mod source;
pub mod view;

pub use meta::{CalendarEvent, FileMetadata, KindMetadata, LiveEvent, Profile, ProfileMetadata};
pub use options::RenderOptions;
pub use source::{EventSource, NoSource, ProfileSource};
pub use view::EnhancedEvent;
