//! Content negotiation error types.
//!
//! Negotiation is a pure computation, so every error here is terminal for the
//! call: either the caller violated the input contract (`EmptyPriorities`,
//! `EmptyHeader`) or the supplied data was malformed. Nothing is retried.

use thiserror::Error;

/// Content negotiation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NegotiationError {
    /// The server priority list was empty.
    #[error("a set of server priorities should be given")]
    EmptyPriorities,

    /// The accept header string was empty.
    #[error("the header string should not be empty")]
    EmptyHeader,

    /// The accept header could not be segmented into tokens.
    #[error("failed to parse accept header: {header:?}")]
    InvalidHeader {
        /// The raw header that could not be segmented.
        header: String,
    },

    /// A media type token was malformed (missing `type/subtype` shape,
    /// empty tag, or unparsable `q` value).
    #[error("invalid media type: {0:?}")]
    InvalidMediaType(String),

    /// A language tag was malformed.
    #[error("invalid language tag: {0:?}")]
    InvalidLanguage(String),

    /// A charset or encoding token was malformed.
    #[error("invalid accept token: {0:?}")]
    InvalidToken(String),
}

/// Result type alias for content negotiation.
pub type Result<T> = std::result::Result<T, NegotiationError>;
