//! `Accept-Encoding` header tokens.

use crate::descriptor::{split_token, Descriptor, DescriptorParser};
use crate::error::{NegotiationError, Result};
use crate::negotiator::Negotiator;

/// One content coding from an `Accept-Encoding` header or a priority list.
///
/// `identity` is an ordinary token here; a server wanting to offer it lists
/// it as a priority like any other coding.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Encoding {
    value: String,
    tag: String,
    quality: f32,
}

impl Encoding {
    /// Parse one content-coding token, e.g. `gzip;q=0.8` or `*`.
    ///
    /// # Errors
    ///
    /// [`NegotiationError::InvalidToken`] on an empty tag or an unparsable
    /// `q` value.
    pub fn parse(token: &str) -> Result<Self> {
        let parts =
            split_token(token).ok_or_else(|| NegotiationError::InvalidToken(token.to_owned()))?;

        Ok(Self {
            value: token.to_owned(),
            tag: parts.tag,
            quality: parts.quality,
        })
    }
}

impl Descriptor for Encoding {
    fn value(&self) -> &str {
        &self.value
    }

    fn tag(&self) -> &str {
        &self.tag
    }

    fn quality(&self) -> f32 {
        self.quality
    }
}

/// Token parser for the `Accept-Encoding` flavor.
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodingParser;

impl DescriptorParser for EncodingParser {
    type Output = Encoding;

    fn parse(&self, token: &str) -> Result<Encoding> {
        Encoding::parse(token)
    }
}

/// Negotiator for `Accept-Encoding` headers.
pub type EncodingNegotiator = Negotiator<EncodingParser>;

impl EncodingNegotiator {
    /// Engine preconfigured for content codings.
    pub fn new() -> Self {
        Negotiator::with_parser(EncodingParser)
    }
}
