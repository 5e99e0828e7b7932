//! Content negotiation for HTTP `Accept`-family headers.
//!
//! Given a client header value (a weighted, comma-separated list of
//! acceptable descriptors) and the server's ordered list of supported
//! descriptors, the [`Negotiator`] selects the single best match per HTTP
//! semantics: quality values first, then specificity (a literal match beats a
//! wildcard), then server declaration order.
//!
//! One engine serves all four header flavors; each flavor only contributes a
//! token parser:
//!
//! | Header            | Negotiator                              | Descriptor    |
//! |-------------------|-----------------------------------------|---------------|
//! | `Accept`          | [`MediaTypeNegotiator`]                 | [`MediaType`] |
//! | `Accept-Language` | [`LanguageNegotiator`]                  | [`Language`]  |
//! | `Accept-Charset`  | [`CharsetNegotiator`]                   | [`Charset`]   |
//! | `Accept-Encoding` | [`EncodingNegotiator`]                  | [`Encoding`]  |
//!
//! # Quick start
//!
//! ```
//! use conneg::{Descriptor, MediaTypeNegotiator};
//!
//! let negotiator = MediaTypeNegotiator::new();
//! let priorities = ["text/html", "application/json"];
//!
//! let best = negotiator
//!     .get_best("text/html;q=0.8, application/json", &priorities)
//!     .unwrap()
//!     .unwrap();
//!
//! // The winner is the server's own declared value.
//! assert_eq!(best.value(), "application/json");
//! ```
//!
//! A custom flavor plugs in as a plain function; see [`DescriptorParser`].
//!
//! # Modules
//!
//! - [`negotiator`]: The shared negotiation engine
//! - [`descriptor`]: Descriptor and parser (factory) contracts
//! - [`header`]: Quote-aware header tokenization
//! - [`media_type`], [`language`], [`charset`], [`encoding`]: Header flavors
//! - [`error`]: Error types and result alias
//!
//! Negotiation is a pure, synchronous computation over immutable inputs:
//! no I/O, no shared state, safe to call concurrently on independent inputs.

pub mod charset;
pub mod descriptor;
pub mod encoding;
pub mod error;
pub mod header;
pub mod language;
mod matching;
pub mod media_type;
pub mod negotiator;

pub use charset::{Charset, CharsetNegotiator, CharsetParser};
pub use descriptor::{Descriptor, DescriptorParser};
pub use encoding::{Encoding, EncodingNegotiator, EncodingParser};
pub use error::{NegotiationError, Result};
pub use language::{Language, LanguageNegotiator, LanguageParser};
pub use media_type::{MediaType, MediaTypeNegotiator, MediaTypeParser};
pub use negotiator::Negotiator;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
