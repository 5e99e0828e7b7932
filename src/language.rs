//! `Accept-Language` header tags.

use crate::descriptor::{split_token, Descriptor, DescriptorParser};
use crate::error::{NegotiationError, Result};
use crate::negotiator::Negotiator;

/// One language tag from an `Accept-Language` header or a priority list.
///
/// Matching uses the full tag, so `en-US` only matches an `en-US` priority;
/// the split `code`/`region` accessors are for callers inspecting the
/// winner.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Language {
    value: String,
    tag: String,
    code: String,
    region: Option<String>,
    quality: f32,
}

impl Language {
    /// Parse one language token, e.g. `en-US;q=0.7` or `*`.
    ///
    /// Tags of one to three subtags parse; the first subtag is the language
    /// code and the last of the remainder the region (`zh-Hans-CN` gives
    /// `zh` / `CN`).
    ///
    /// # Errors
    ///
    /// [`NegotiationError::InvalidLanguage`] on an empty tag, empty subtags,
    /// more than three subtags or an unparsable `q` value.
    pub fn parse(token: &str) -> Result<Self> {
        let parts = split_token(token)
            .ok_or_else(|| NegotiationError::InvalidLanguage(token.to_owned()))?;

        let (code, region) = if parts.tag == "*" {
            ("*".to_owned(), None)
        } else {
            let pieces: Vec<&str> = parts.tag.split('-').collect();
            if pieces.len() > 3 || pieces.iter().any(|piece| piece.is_empty()) {
                return Err(NegotiationError::InvalidLanguage(token.to_owned()));
            }
            let code = pieces[0].to_ascii_lowercase();
            let region = pieces
                .last()
                .filter(|_| pieces.len() > 1)
                .map(|piece| piece.to_ascii_uppercase());
            (code, region)
        };

        Ok(Self {
            value: token.to_owned(),
            tag: parts.tag,
            code,
            region,
            quality: parts.quality,
        })
    }

    /// Primary language subtag, lowercased (`en` for `en-US`).
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Region subtag, uppercased (`US` for `en-US`).
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

impl Descriptor for Language {
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

/// Token parser for the `Accept-Language` flavor.
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageParser;

impl DescriptorParser for LanguageParser {
    type Output = Language;

    fn parse(&self, token: &str) -> Result<Language> {
        Language::parse(token)
    }
}

/// Negotiator for `Accept-Language` headers.
pub type LanguageNegotiator = Negotiator<LanguageParser>;

impl LanguageNegotiator {
    /// Engine preconfigured for language tags.
    pub fn new() -> Self {
        Negotiator::with_parser(LanguageParser)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_code() {
        let lang = Language::parse("en").unwrap();
        assert_eq!(lang.code(), "en");
        assert_eq!(lang.region(), None);
        assert_eq!(lang.quality(), 1.0);
    }

    #[test]
    fn test_parse_code_and_region() {
        let lang = Language::parse("en-US;q=0.8").unwrap();
        assert_eq!(lang.code(), "en");
        assert_eq!(lang.region(), Some("US"));
        assert_eq!(lang.quality(), 0.8);
        assert_eq!(lang.tag(), "en-US");
    }

    #[test]
    fn test_parse_three_subtags_keeps_last_as_region() {
        let lang = Language::parse("zh-Hans-CN").unwrap();
        assert_eq!(lang.code(), "zh");
        assert_eq!(lang.region(), Some("CN"));
    }

    #[test]
    fn test_parse_normalizes_casing_of_accessors() {
        let lang = Language::parse("EN-us").unwrap();
        assert_eq!(lang.code(), "en");
        assert_eq!(lang.region(), Some("US"));
        // The raw tag is preserved for case-insensitive matching.
        assert_eq!(lang.tag(), "EN-us");
    }

    #[test]
    fn test_parse_wildcard() {
        let lang = Language::parse("*;q=0.5").unwrap();
        assert_eq!(lang.tag(), "*");
        assert_eq!(lang.region(), None);
    }

    #[test]
    fn test_parse_rejects_malformed_tags() {
        assert!(Language::parse("a-b-c-d").is_err());
        assert!(Language::parse("en-").is_err());
        assert!(Language::parse(";q=1").is_err());
        assert!(Language::parse("en;q=high").is_err());
    }
}
