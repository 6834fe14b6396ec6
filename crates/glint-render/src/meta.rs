//! Typed views over kind-specific event payloads.
//!
//! Kind dispatch is a closed set keyed by numeric kind — profile (0),
//! file metadata (1063, NIP-94), calendar events (31922/31923, NIP-52)
//! and live events (30311, NIP-53). Adapters decode tags or JSON
//! content into display-ready fields without modifying the base record;
//! unknown kinds simply have no metadata view.

use glint_core::{
    Event, KIND_DATE_CALENDAR, KIND_FILE, KIND_LIVE_EVENT, KIND_PROFILE, KIND_TIME_CALENDAR,
    Tag, nip19,
};
use serde::{Deserialize, Serialize};

use crate::source::ProfileSource;

/// Parsed profile metadata from kind 0 JSON content.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProfileMetadata {
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// User-facing display name (takes priority over name).
    #[serde(default)]
    pub display_name: Option<String>,
    /// Short biography/description.
    #[serde(default)]
    pub about: Option<String>,
    /// Profile picture URL.
    #[serde(default)]
    pub picture: Option<String>,
    /// Banner image URL.
    #[serde(default)]
    pub banner: Option<String>,
    /// NIP-05 identifier (e.g., "user@domain.com").
    #[serde(default)]
    pub nip05: Option<String>,
    /// Lightning address for zaps.
    #[serde(default)]
    pub lud16: Option<String>,
    /// Website URL.
    #[serde(default)]
    pub website: Option<String>,
}

impl ProfileMetadata {
    /// Parse from kind 0 JSON content. Unparseable content yields the
    /// empty default rather than an error.
    pub fn from_json(content: &str) -> Self {
        serde_json::from_str(content).unwrap_or_default()
    }

    /// Best display name available, falling back through options.
    pub fn display_name(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("Anonymous")
    }
}

/// A profile with its author key, adding identifier-derived fields.
#[derive(Debug, Clone)]
pub struct Profile {
    /// Author public key (hex).
    pub pubkey: String,
    /// Decoded kind 0 metadata.
    pub metadata: ProfileMetadata,
}

impl Profile {
    /// Build a profile view from a hex pubkey and decoded metadata.
    pub fn new(pubkey: impl Into<String>, metadata: ProfileMetadata) -> Self {
        Self {
            pubkey: pubkey.into(),
            metadata,
        }
    }

    /// The npub encoding of the pubkey, empty when the key is malformed.
    pub fn npub(&self) -> String {
        nip19::encode_public_key(&self.pubkey).unwrap_or_default()
    }

    /// Short-display form of the npub.
    pub fn npub_short(&self) -> String {
        nip19::short(&self.npub())
    }
}

/// File metadata decoded from kind 1063 tags (NIP-94). Pass-through
/// typed view; no derived fields.
#[derive(Debug, Clone, Default)]
pub struct FileMetadata {
    /// Download URL.
    pub url: String,
    /// MIME type ("m" tag).
    pub mime_type: String,
    /// SHA-256 of the file ("x" tag).
    pub hash: String,
    /// File size in bytes ("size" tag).
    pub size: Option<u64>,
    /// Pixel dimensions as "<w>x<h>" ("dim" tag).
    pub dimensions: Option<String>,
    /// Blurhash placeholder.
    pub blurhash: Option<String>,
    /// Thumbnail URL ("thumb" tag).
    pub thumbnail: Option<String>,
    /// Alt text for accessibility.
    pub alt: Option<String>,
    /// Summary/caption.
    pub summary: Option<String>,
}

impl FileMetadata {
    /// Decode from event tags; missing tags leave fields empty.
    pub fn from_tags(tags: &[Tag]) -> Self {
        Self {
            url: tag_value(tags, "url").unwrap_or_default().to_string(),
            mime_type: tag_value(tags, "m").unwrap_or_default().to_string(),
            hash: tag_value(tags, "x").unwrap_or_default().to_string(),
            size: tag_value(tags, "size").and_then(|v| v.parse().ok()),
            dimensions: tag_value(tags, "dim").map(str::to_string),
            blurhash: tag_value(tags, "blurhash").map(str::to_string),
            thumbnail: tag_value(tags, "thumb").map(str::to_string),
            alt: tag_value(tags, "alt").map(str::to_string),
            summary: tag_value(tags, "summary").map(str::to_string),
        }
    }
}

/// Calendar event decoded from kind 31922/31923 tags (NIP-52).
/// Pass-through typed view; no derived fields.
#[derive(Debug, Clone, Default)]
pub struct CalendarEvent {
    /// The d-tag identifier.
    pub d_tag: String,
    /// Event title.
    pub title: String,
    /// Start: a date (31922) or unix timestamp (31923), as tagged.
    pub start: Option<String>,
    /// End, same format as start.
    pub end: Option<String>,
    /// Locations, in tag order.
    pub locations: Vec<String>,
    /// Geohash of the location.
    pub geohash: Option<String>,
    /// Cover image URL.
    pub image: Option<String>,
}

impl CalendarEvent {
    /// Decode from event tags; missing tags leave fields empty.
    pub fn from_tags(tags: &[Tag]) -> Self {
        Self {
            d_tag: tag_value(tags, "d").unwrap_or_default().to_string(),
            title: tag_value(tags, "title").unwrap_or_default().to_string(),
            start: tag_value(tags, "start").map(str::to_string),
            end: tag_value(tags, "end").map(str::to_string),
            locations: tag_values(tags, "location"),
            geohash: tag_value(tags, "g").map(str::to_string),
            image: tag_value(tags, "image").map(str::to_string),
        }
    }
}

/// Live event decoded from kind 30311 tags (NIP-53), plus an optional
/// host profile attached by an external resolution step.
#[derive(Debug, Clone, Default)]
pub struct LiveEvent {
    /// The d-tag identifier.
    pub d_tag: String,
    /// Stream title.
    pub title: String,
    /// Stream summary.
    pub summary: Option<String>,
    /// Preview image URL.
    pub image: Option<String>,
    /// Status: "planned", "live" or "ended".
    pub status: Option<String>,
    /// Streaming URL.
    pub streaming: Option<String>,
    /// Scheduled start (unix timestamp).
    pub starts: Option<i64>,
    /// Scheduled end (unix timestamp).
    pub ends: Option<i64>,
    /// Current viewer count.
    pub current_participants: Option<u32>,
    /// Total viewer count.
    pub total_participants: Option<u32>,
    /// Pubkey (hex) of the first participant tagged with the host role.
    pub host_pubkey: Option<String>,
    /// Host profile metadata, once resolved.
    pub host: Option<ProfileMetadata>,
}

impl LiveEvent {
    /// Decode from event tags; missing tags leave fields empty. The
    /// host profile stays unresolved until [`LiveEvent::resolve_host`].
    pub fn from_tags(tags: &[Tag]) -> Self {
        let host_pubkey = tags
            .iter()
            .find(|t| {
                t.len() >= 2
                    && t[0] == "p"
                    && t.get(3).is_some_and(|role| role.eq_ignore_ascii_case("host"))
            })
            .map(|t| t[1].clone());

        Self {
            d_tag: tag_value(tags, "d").unwrap_or_default().to_string(),
            title: tag_value(tags, "title").unwrap_or_default().to_string(),
            summary: tag_value(tags, "summary").map(str::to_string),
            image: tag_value(tags, "image").map(str::to_string),
            status: tag_value(tags, "status").map(str::to_string),
            streaming: tag_value(tags, "streaming").map(str::to_string),
            starts: tag_value(tags, "starts").and_then(|v| v.parse().ok()),
            ends: tag_value(tags, "ends").and_then(|v| v.parse().ok()),
            current_participants: tag_value(tags, "current_participants")
                .and_then(|v| v.parse().ok()),
            total_participants: tag_value(tags, "total_participants")
                .and_then(|v| v.parse().ok()),
            host_pubkey,
            host: None,
        }
    }

    /// Attach the host profile via an external lookup, when a host was
    /// tagged and the source knows them.
    pub fn resolve_host(&mut self, profiles: &dyn ProfileSource) {
        if let Some(pubkey) = &self.host_pubkey {
            self.host = profiles.lookup(pubkey);
        }
    }

    /// Display title: the raw title, host-attributed when the host
    /// profile has been resolved.
    pub fn display_title(&self) -> String {
        match &self.host {
            Some(host) => format!("{} by {}", self.title, host.display_name()),
            None => self.title.clone(),
        }
    }
}

/// Kind-specific metadata, a closed tagged-variant selection.
#[derive(Debug, Clone)]
pub enum KindMetadata {
    /// Kind 0.
    Profile(Profile),
    /// Kind 1063.
    File(FileMetadata),
    /// Kinds 31922/31923.
    Calendar(CalendarEvent),
    /// Kind 30311.
    Live(LiveEvent),
}

impl KindMetadata {
    /// Select and decode the metadata variant for an event's kind.
    /// Kinds outside the closed set have no metadata view.
    pub fn from_event(event: &Event) -> Option<Self> {
        match event.kind {
            KIND_PROFILE => Some(Self::Profile(Profile::new(
                event.pubkey.clone(),
                ProfileMetadata::from_json(&event.content),
            ))),
            KIND_FILE => Some(Self::File(FileMetadata::from_tags(&event.tags))),
            KIND_DATE_CALENDAR | KIND_TIME_CALENDAR => {
                Some(Self::Calendar(CalendarEvent::from_tags(&event.tags)))
            }
            KIND_LIVE_EVENT => Some(Self::Live(LiveEvent::from_tags(&event.tags))),
            _ => None,
        }
    }
}

/// Value of the first well-formed tag with the given discriminator.
fn tag_value<'a>(tags: &'a [Tag], name: &str) -> Option<&'a str> {
    tags.iter()
        .find(|t| t.len() >= 2 && t[0] == name)
        .map(|t| t[1].as_str())
}

/// Values of every well-formed tag with the given discriminator.
fn tag_values(tags: &[Tag], name: &str) -> Vec<String> {
    tags.iter()
        .filter(|t| t.len() >= 2 && t[0] == name)
        .map(|t| t[1].clone())
        .collect()
}
