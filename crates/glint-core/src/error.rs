//! Error types shared across the rendition core.
//!
//! All failures here are local and non-fatal by design: callers degrade
//! to an empty display string or a plain fallback link instead of
//! aborting the surrounding render. Malformed tags never become errors
//! at all — they are treated as absent fields.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while encoding identifiers or embedding quotes.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed key/id bytes or an undecodable bech32 identifier.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// A quoted event could not be inlined: lookup miss, revisited id,
    /// or recursion depth exceeded. Rendered as a plain link.
    #[error("unresolvable quote: {0}")]
    QuoteUnresolvable(String),
}
