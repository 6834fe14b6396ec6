//! NIP-19 identifier encoding and decoding.
//!
//! Wraps the nostr crate's bech32 machinery behind the small surface the
//! renderer needs: hex-in/bech32-out encoders for npub, note, nevent and
//! naddr, a [`Pointer`] decode for the inverse direction, and the
//! uniform short-display convention.
//!
//! Failure policy: every malformed input maps to
//! [`Error::InvalidIdentifier`]; callers degrade to an empty display
//! string rather than aborting a render.

use nostr::nips::nip01::Coordinate;
use nostr::nips::nip19::{FromBech32, Nip19, Nip19Coordinate, Nip19Event};
use nostr::{EventId, Kind, PublicKey, RelayUrl, ToBech32};

use crate::error::{Error, Result};

/// A decoded shareable identifier.
///
/// Closed set: npub, note, nevent, naddr. An nprofile decodes to
/// [`Pointer::Pubkey`] with its relay hints dropped; secret keys are
/// rejected outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pointer {
    /// A public key (npub).
    Pubkey(PublicKey),
    /// A bare event id (note).
    Note(EventId),
    /// An event id with relay hints and optional author (nevent).
    Event {
        /// The event id.
        id: EventId,
        /// Relay hints; empty when the encoding carried none.
        relays: Vec<RelayUrl>,
        /// Author public key, when bundled into the pointer.
        author: Option<PublicKey>,
    },
    /// A parameterized-replaceable address (naddr).
    Address {
        /// Event kind number.
        kind: u16,
        /// Author public key.
        pubkey: PublicKey,
        /// The d-tag identifier.
        d_tag: String,
        /// Relay hints; empty when the encoding carried none.
        relays: Vec<RelayUrl>,
    },
}

impl Pointer {
    /// Hex event id for event-shaped pointers, None otherwise.
    pub fn event_id_hex(&self) -> Option<String> {
        match self {
            Self::Note(id) => Some(id.to_hex()),
            Self::Event { id, .. } => Some(id.to_hex()),
            _ => None,
        }
    }
}

/// Encode a hex public key as an npub.
pub fn encode_public_key(pubkey: &str) -> Result<String> {
    let pk = PublicKey::from_hex(pubkey).map_err(invalid)?;
    pk.to_bech32().map_err(invalid)
}

/// Encode a hex event id as a bare note identifier.
pub fn encode_note(id: &str) -> Result<String> {
    let event_id = EventId::from_hex(id).map_err(invalid)?;
    event_id.to_bech32().map_err(invalid)
}

/// Encode a hex event id as an nevent with relay hints and an optional
/// author public key.
///
/// Unparseable or empty relay hints are skipped, not errors.
pub fn encode_event(id: &str, relay_hints: &[String], author: Option<&str>) -> Result<String> {
    let event_id = EventId::from_hex(id).map_err(invalid)?;
    let mut nevent = Nip19Event::new(event_id);
    nevent.relays = parse_relays(relay_hints);
    if let Some(author) = author {
        nevent.author = Some(PublicKey::from_hex(author).map_err(invalid)?);
    }
    nevent.to_bech32().map_err(invalid)
}

/// Encode a (d-tag, kind, author) address as an naddr with relay hints.
pub fn encode_entity(
    d_tag: &str,
    kind: u16,
    pubkey: &str,
    relay_hints: &[String],
) -> Result<String> {
    let pk = PublicKey::from_hex(pubkey).map_err(invalid)?;
    let coordinate = Coordinate::new(Kind::from(kind), pk).identifier(d_tag);
    let naddr = Nip19Coordinate {
        coordinate,
        relays: parse_relays(relay_hints),
    };
    naddr.to_bech32().map_err(invalid)
}

/// Decode a bech32 identifier, with or without a `nostr:` prefix.
pub fn decode(input: &str) -> Result<Pointer> {
    let bech32 = input.strip_prefix("nostr:").unwrap_or(input);
    match Nip19::from_bech32(bech32).map_err(invalid)? {
        Nip19::Pubkey(pk) => Ok(Pointer::Pubkey(pk)),
        // Relay hints on profiles are irrelevant to rendering.
        Nip19::Profile(profile) => Ok(Pointer::Pubkey(profile.public_key)),
        Nip19::EventId(id) => Ok(Pointer::Note(id)),
        Nip19::Event(event) => Ok(Pointer::Event {
            id: event.event_id,
            author: event.author,
            relays: event.relays,
        }),
        Nip19::Coordinate(coord) => Ok(Pointer::Address {
            kind: coord.coordinate.kind.as_u16(),
            pubkey: coord.coordinate.public_key,
            d_tag: coord.coordinate.identifier.clone(),
            relays: coord.relays,
        }),
        _ => Err(Error::InvalidIdentifier(
            "identifier cannot be rendered".to_string(),
        )),
    }
}

/// Short-display convention used uniformly across the renderer:
/// first 8 characters, an ellipsis, then the last 4. Inputs too short
/// to abbreviate are returned unchanged.
pub fn short(id: &str) -> String {
    let chars: Vec<char> = id.chars().collect();
    if chars.len() < 13 {
        return id.to_string();
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}

fn parse_relays(relay_hints: &[String]) -> Vec<RelayUrl> {
    relay_hints
        .iter()
        .filter(|url| !url.is_empty())
        .filter_map(|url| RelayUrl::parse(url).ok())
        .collect()
}

fn invalid(err: impl std::fmt::Display) -> Error {
    Error::InvalidIdentifier(err.to_string())
}
