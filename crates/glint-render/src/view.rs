//! The enhanced event: a borrowed event plus relay hints, exposing
//! every derived rendition field templates consume.

use chrono::{DateTime, SecondsFormat};
use glint_core::{Event, nip19, thread};
use maud::{Markup, html};

use crate::content;
use crate::feed;
use crate::meta::KindMetadata;
use crate::options::RenderOptions;
use crate::source::EventSource;

/// An event decorated with the relays it was seen on. All derived
/// fields are computed on demand from the borrowed record; nothing is
/// cached or mutated.
#[derive(Debug, Clone)]
pub struct EnhancedEvent<'a> {
    event: &'a Event,
    relays: Vec<String>,
}

impl<'a> EnhancedEvent<'a> {
    /// Wrap an event with the relay URLs it was seen on.
    pub fn new(event: &'a Event, relays: Vec<String>) -> Self {
        Self { event, relays }
    }

    /// The underlying event record.
    pub fn event(&self) -> &Event {
        self.event
    }

    /// Relay hints carried into nevent encoding.
    pub fn relays(&self) -> &[String] {
        &self.relays
    }

    /// The author's npub, empty when the pubkey is malformed.
    pub fn npub(&self) -> String {
        nip19::encode_public_key(&self.event.pubkey).unwrap_or_default()
    }

    /// Short-display form of the author's npub.
    pub fn npub_short(&self) -> String {
        nip19::short(&self.npub())
    }

    /// The event's nevent encoding, carrying relay hints and the
    /// author key. Empty when the id or pubkey is malformed.
    pub fn nevent(&self) -> String {
        nip19::encode_event(&self.event.id, &self.relays, Some(&self.event.pubkey))
            .unwrap_or_default()
    }

    /// Encoded pointer to the parent this event replies to, when the
    /// kind threads and a well-formed parent tag exists.
    pub fn parent_pointer(&self) -> Option<String> {
        thread::parent_pointer(self.event.kind, &self.event.tags)
    }

    /// Whether the event carries a well-formed reply tag.
    pub fn is_reply(&self) -> bool {
        thread::is_reply(&self.event.tags)
    }

    /// Display preview of the content.
    pub fn preview(&self, opts: &RenderOptions) -> Markup {
        content::preview(&self.event.content, opts)
    }

    /// Feed rendition of the content, with reply banner and embedded
    /// quotes.
    pub fn feed_content(&self, source: &dyn EventSource, opts: &RenderOptions) -> String {
        feed::feed_content(self.event, source, opts)
    }

    /// Derived feed title, empty when redundant with the content.
    pub fn feed_title(&self, source: &dyn EventSource, opts: &RenderOptions) -> String {
        feed::feed_title(self.event, source, opts)
    }

    /// First image URL in the raw content, empty when there is none.
    pub fn thumbnail(&self) -> String {
        content::thumbnail(&self.event.content).unwrap_or_default()
    }

    /// Creation time as "YYYY-MM-DD HH:MM:SS" UTC. Out-of-range
    /// timestamps render empty.
    pub fn created_at_str(&self) -> String {
        DateTime::from_timestamp(self.event.created_at, 0)
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default()
    }

    /// Creation time as RFC 3339, for feed timestamps.
    pub fn modified_at_str(&self) -> String {
        DateTime::from_timestamp(self.event.created_at, 0)
            .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
            .unwrap_or_default()
    }

    /// Kind-specific metadata view, when the kind has one.
    pub fn metadata(&self) -> Option<KindMetadata> {
        KindMetadata::from_event(self.event)
    }

    /// The raw event as syntax-classed JSON markup for inspection
    /// views. String values go through JSON escaping and then markup
    /// escaping, so arbitrary content stays inert.
    pub fn json_view(&self) -> Markup {
        let event = self.event;
        html! {
            "{" br;
            "  " span class="json-key" { "\"id\": " }
            span class="json-string" { (json_str(&event.id)) } "," br;
            "  " span class="json-key" { "\"pubkey\": " }
            span class="json-string" { (json_str(&event.pubkey)) } "," br;
            "  " span class="json-key" { "\"created_at\": " }
            span class="json-number" { (event.created_at) } "," br;
            "  " span class="json-key" { "\"kind\": " }
            span class="json-number" { (event.kind) } "," br;
            "  " span class="json-key" { "\"tags\": " }
            (self.tags_json()) "," br;
            "  " span class="json-key" { "\"content\": " }
            span class="json-string" { (json_str(&event.content)) } "," br;
            "  " span class="json-key" { "\"sig\": " }
            span class="json-string" { (json_str(&event.sig)) } br;
            "}"
        }
    }

    fn tags_json(&self) -> Markup {
        let tags = &self.event.tags;
        html! {
            @if tags.is_empty() {
                "[]"
            } @else {
                "["
                @for (t, tag) in tags.iter().enumerate() {
                    br;
                    "    ["
                    @for (i, item) in tag.iter().enumerate() {
                        @let class = if i == 0 { "json-tag-name" } else { "json-string" };
                        span class=(class) { (json_str(item)) }
                        @if i + 1 < tag.len() { ", " }
                    }
                    "]"
                    @if t + 1 < tags.len() { "," }
                }
                br;
                "  ]"
            }
        }
    }
}

/// A string as its JSON literal, quotes included.
fn json_str(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::nip19::Pointer;
    use glint_core::nip19::decode;
    use crate::source::NoSource;

    const PK_HEX: &str = "82341f882b6eabcd2ba7f1ef90aad961cf074af15b9ef44a09f9d2a8fbfbe6a2";
    const ID_HEX: &str = "a84c5de86efc2ec2cff7bad077c4171e09146b633b7ad117fffe088d9579ac33";

    fn event() -> Event {
        Event {
            id: ID_HEX.to_string(),
            pubkey: PK_HEX.to_string(),
            created_at: 1_700_000_000,
            kind: 1,
            tags: vec![vec!["t".to_string(), "nostr".to_string()]],
            content: "hello world".to_string(),
            sig: "00".to_string(),
        }
    }

    #[test]
    fn test_npub_and_short() {
        let ev = event();
        let view = EnhancedEvent::new(&ev, vec![]);
        let npub = view.npub();
        assert!(npub.starts_with("npub1"));
        assert_eq!(view.npub_short().chars().count(), 13);
    }

    #[test]
    fn test_npub_degrades_on_bad_pubkey() {
        let mut ev = event();
        ev.pubkey = "zz".to_string();
        let view = EnhancedEvent::new(&ev, vec![]);
        assert_eq!(view.npub(), "");
        assert_eq!(view.npub_short(), "");
    }

    #[test]
    fn test_nevent_carries_relays_and_author() {
        let ev = event();
        let view = EnhancedEvent::new(&ev, vec!["wss://relay.example.com".to_string()]);
        let nevent = view.nevent();
        assert!(nevent.starts_with("nevent1"));

        match decode(&nevent).unwrap() {
            Pointer::Event { id, relays, author } => {
                assert_eq!(id.to_hex(), ID_HEX);
                assert_eq!(relays.len(), 1);
                assert_eq!(author.unwrap().to_hex(), PK_HEX);
            }
            other => panic!("unexpected pointer: {other:?}"),
        }
    }

    #[test]
    fn test_nevent_degrades_on_bad_id() {
        let mut ev = event();
        ev.id = "nope".to_string();
        let view = EnhancedEvent::new(&ev, vec![]);
        assert_eq!(view.nevent(), "");
    }

    #[test]
    fn test_parent_pointer_for_reply() {
        let mut ev = event();
        ev.tags = vec![vec![
            "e".to_string(),
            ID_HEX.to_string(),
            String::new(),
            "reply".to_string(),
        ]];
        let view = EnhancedEvent::new(&ev, vec![]);
        assert!(view.is_reply());
        let parent = view.parent_pointer().unwrap();
        assert!(parent.starts_with("nevent1"));
    }

    #[test]
    fn test_no_parent_for_plain_note() {
        let ev = event();
        let view = EnhancedEvent::new(&ev, vec![]);
        assert!(!view.is_reply());
        assert!(view.parent_pointer().is_none());
    }

    #[test]
    fn test_thumbnail_empty_without_image() {
        let ev = event();
        assert_eq!(EnhancedEvent::new(&ev, vec![]).thumbnail(), "");
    }

    #[test]
    fn test_thumbnail_finds_image() {
        let mut ev = event();
        ev.content = "pic https://example.com/a.png here".to_string();
        assert_eq!(
            EnhancedEvent::new(&ev, vec![]).thumbnail(),
            "https://example.com/a.png"
        );
    }

    #[test]
    fn test_timestamps_format() {
        let ev = event();
        let view = EnhancedEvent::new(&ev, vec![]);
        assert_eq!(view.created_at_str(), "2023-11-14 22:13:20");
        assert_eq!(view.modified_at_str(), "2023-11-14T22:13:20Z");
    }

    #[test]
    fn test_preview_and_feed_content_delegate() {
        let mut ev = event();
        ev.content = "one\n\ntwo".to_string();
        let view = EnhancedEvent::new(&ev, vec![]);
        let opts = RenderOptions::default();
        assert_eq!(view.preview(&opts).into_string(), "one<br/>two");
        assert_eq!(view.feed_content(&NoSource, &opts), "one<br/>two");
    }

    #[test]
    fn test_feed_title_delegates() {
        let mut ev = event();
        ev.content = "a completely different much longer body of text than the title \
                      would ever be on its own because it keeps going"
            .to_string();
        let view = EnhancedEvent::new(&ev, vec![]);
        let title = view.feed_title(&NoSource, &RenderOptions::default());
        assert!(title.ends_with(" ..."));
    }

    #[test]
    fn test_metadata_dispatches_by_kind() {
        let ev = event();
        assert!(EnhancedEvent::new(&ev, vec![]).metadata().is_none());

        let mut profile = event();
        profile.kind = 0;
        profile.content = r#"{"name":"alice"}"#.to_string();
        assert!(matches!(
            EnhancedEvent::new(&profile, vec![]).metadata(),
            Some(KindMetadata::Profile(_))
        ));
    }

    #[test]
    fn test_json_view_escapes_content() {
        let mut ev = event();
        ev.content = "a \"quote\" and <tag>".to_string();
        let out = EnhancedEvent::new(&ev, vec![]).json_view().into_string();
        assert!(out.contains("json-key"));
        assert!(out.contains("json-tag-name"));
        // Key quotes are themselves markup-escaped.
        assert!(out.contains("&quot;content&quot;: "));
        assert!(!out.contains("<tag>"));
        assert!(out.contains("&lt;tag&gt;"));
    }

    #[test]
    fn test_json_view_empty_tags() {
        let mut ev = event();
        ev.tags = vec![];
        let out = EnhancedEvent::new(&ev, vec![]).json_view().into_string();
        assert!(out.contains("&quot;tags&quot;: "));
        assert!(out.contains("[]"));
    }
}
