//! External lookup capabilities consumed by the renderer.
//!
//! The core performs no I/O of its own. Quote embedding and host
//! attribution delegate to these traits; whether an implementation
//! blocks on a database, fronts a cache, or bridges into an async
//! runtime is entirely the caller's concern. Any timeout must be
//! enforced inside the implementation — a timed-out lookup should
//! simply return `None`, which renders the same as a miss.

use glint_core::Event;
use glint_core::nip19::Pointer;

use crate::meta::ProfileMetadata;

/// Resolves event pointers to full events, for parent previews and
/// quote embedding.
pub trait EventSource {
    /// Look up the event a pointer refers to. `None` means
    /// unresolvable and renders as a plain fallback link.
    fn lookup(&self, pointer: &Pointer) -> Option<Event>;
}

/// Resolves public keys to profile metadata, for host-attributed
/// live-event titles.
pub trait ProfileSource {
    /// Look up the latest profile metadata for a hex public key.
    fn lookup(&self, pubkey: &str) -> Option<ProfileMetadata>;
}

/// The null source: resolves nothing. Every quote renders as a plain
/// link and no host attribution happens.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSource;

impl EventSource for NoSource {
    fn lookup(&self, _pointer: &Pointer) -> Option<Event> {
        None
    }
}

impl ProfileSource for NoSource {
    fn lookup(&self, _pubkey: &str) -> Option<ProfileMetadata> {
        None
    }
}
