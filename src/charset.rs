//! `Accept-Charset` header tokens.

use crate::descriptor::{split_token, Descriptor, DescriptorParser};
use crate::error::{NegotiationError, Result};
use crate::negotiator::Negotiator;

/// One charset name from an `Accept-Charset` header or a priority list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Charset {
    value: String,
    tag: String,
    quality: f32,
}

impl Charset {
    /// Parse one charset token, e.g. `utf-8;q=0.9` or `*`.
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

impl Descriptor for Charset {
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

/// Token parser for the `Accept-Charset` flavor.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharsetParser;

impl DescriptorParser for CharsetParser {
    type Output = Charset;

    fn parse(&self, token: &str) -> Result<Charset> {
        Charset::parse(token)
    }
}

/// Negotiator for `Accept-Charset` headers.
pub type CharsetNegotiator = Negotiator<CharsetParser>;

impl CharsetNegotiator {
    /// Engine preconfigured for charset names.
    pub fn new() -> Self {
        Negotiator::with_parser(CharsetParser)
    }
}
