//! `Accept` header media types.

use std::collections::BTreeMap;

use crate::descriptor::{split_token, Descriptor, DescriptorParser};
use crate::error::{NegotiationError, Result};
use crate::negotiator::Negotiator;

/// One media type from an `Accept` header or a server priority list.
///
/// Parameters other than `q` are parsed and kept for inspection but do not
/// take part in matching; `*` and `*/*` both parse to the wildcard tag.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MediaType {
    value: String,
    tag: String,
    quality: f32,
    parameters: BTreeMap<String, String>,
}

impl MediaType {
    /// Parse one media type token, e.g. `text/html;level=1;q=0.8`.
    ///
    /// # Errors
    ///
    /// [`NegotiationError::InvalidMediaType`] when the tag is empty, lacks
    /// the `type/subtype` shape (and is not the `*` wildcard), or carries an
    /// unparsable `q` value.
    pub fn parse(token: &str) -> Result<Self> {
        let parts = split_token(token)
            .ok_or_else(|| NegotiationError::InvalidMediaType(token.to_owned()))?;

        let tag = if parts.tag == "*" || parts.tag == "*/*" {
            "*".to_owned()
        } else if parts.tag.contains('/') {
            parts.tag
        } else {
            return Err(NegotiationError::InvalidMediaType(token.to_owned()));
        };

        Ok(Self {
            value: token.to_owned(),
            tag,
            quality: parts.quality,
            parameters: parts.parameters,
        })
    }

    /// Main type, `text` for `text/html`; `*` for the wildcard.
    pub fn main_type(&self) -> &str {
        self.tag.split('/').next().unwrap_or(&self.tag)
    }

    /// Subtype, `html` for `text/html`; `*` for the wildcard.
    pub fn subtype(&self) -> &str {
        self.tag.split('/').nth(1).unwrap_or("*")
    }

    /// Parameters other than `q`, keys lowercased and values unquoted.
    pub fn parameters(&self) -> &BTreeMap<String, String> {
        &self.parameters
    }
}

impl Descriptor for MediaType {
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

/// Token parser for the `Accept` flavor.
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaTypeParser;

impl DescriptorParser for MediaTypeParser {
    type Output = MediaType;

    fn parse(&self, token: &str) -> Result<MediaType> {
        MediaType::parse(token)
    }
}

/// Negotiator for `Accept` headers.
pub type MediaTypeNegotiator = Negotiator<MediaTypeParser>;

impl MediaTypeNegotiator {
    /// Engine preconfigured for media types.
    pub fn new() -> Self {
        Negotiator::with_parser(MediaTypeParser)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        let media = MediaType::parse("application/json").unwrap();
        assert_eq!(media.main_type(), "application");
        assert_eq!(media.subtype(), "json");
        assert_eq!(media.quality(), 1.0);
    }

    #[test]
    fn test_parse_with_quality_and_parameters() {
        let media = MediaType::parse("text/html;level=2;q=0.4").unwrap();
        assert_eq!(media.tag(), "text/html");
        assert_eq!(media.quality(), 0.4);
        assert_eq!(media.parameters().get("level").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_parse_wildcard_forms() {
        assert_eq!(MediaType::parse("*/*").unwrap().tag(), "*");
        assert_eq!(MediaType::parse("*").unwrap().tag(), "*");
        assert_eq!(MediaType::parse("*/*;q=0.1").unwrap().quality(), 0.1);
    }

    #[test]
    fn test_parse_rejects_missing_subtype() {
        assert_eq!(
            MediaType::parse("html"),
            Err(NegotiationError::InvalidMediaType("html".to_owned()))
        );
        assert!(MediaType::parse(";q=0.5").is_err());
        assert!(MediaType::parse("text/html;q=abc").is_err());
    }

    #[test]
    fn test_value_keeps_the_raw_token() {
        let media = MediaType::parse("Text/HTML;q=0.8").unwrap();
        assert_eq!(media.value(), "Text/HTML;q=0.8");
    }
}
