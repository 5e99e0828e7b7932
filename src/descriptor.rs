//! Descriptor and factory contracts shared by every negotiation flavor.
//!
//! The engine never looks inside a media type, language tag or charset name.
//! It sees each candidate through the [`Descriptor`] trait (a matchable tag
//! plus a quality weight) and obtains descriptors through a
//! [`DescriptorParser`], the single pluggable boundary between the shared
//! matching machinery and the per-header-flavor syntax.

use std::collections::BTreeMap;

use crate::error::Result;

/// One parsed accept token or server priority.
///
/// Descriptors are built once by a parser, are immutable afterwards and live
/// only for the duration of a negotiation call.
pub trait Descriptor {
    /// The original trimmed token exactly as supplied by the caller.
    fn value(&self) -> &str;

    /// The matchable type tag; `"*"` matches any supported type.
    ///
    /// Tags are compared case-insensitively, so implementations may preserve
    /// the caller's casing.
    fn tag(&self) -> &str;

    /// Preference weight in `[0, 1]`, `1.0` when the token carried no `q`.
    fn quality(&self) -> f32;
}

/// Factory turning one raw token into a descriptor.
///
/// One parser exists per negotiation flavor (media type, language, charset,
/// encoding). The trait is also implemented for any
/// `Fn(&str) -> Result<D>`, so a custom flavor is a function, not a subtype:
///
/// ```
/// use conneg::{Charset, Descriptor, Negotiator, Result};
///
/// let negotiator = Negotiator::with_parser(|token: &str| -> Result<Charset> {
///     Charset::parse(token)
/// });
/// let best = negotiator.get_best("utf-8", &["utf-8"]).unwrap();
/// assert_eq!(best.unwrap().value(), "utf-8");
/// ```
pub trait DescriptorParser {
    /// Descriptor type this parser produces.
    type Output: Descriptor;

    /// Parse one trimmed token (header fragment or server priority).
    ///
    /// Parse failures belong to the parser's own error contract; the engine
    /// propagates them untouched.
    fn parse(&self, token: &str) -> Result<Self::Output>;
}

impl<D, F> DescriptorParser for F
where
    D: Descriptor,
    F: Fn(&str) -> Result<D>,
{
    type Output = D;

    fn parse(&self, token: &str) -> Result<D> {
        self(token)
    }
}

/// Tag, quality and parameters split out of one raw token.
pub(crate) struct TokenParts {
    pub tag: String,
    pub quality: f32,
    pub parameters: BTreeMap<String, String>,
}

/// Shared `token[;key=value]*` splitter used by the flavor parsers.
///
/// The first `;`-segment is the tag. Parameter keys are lowercased and values
/// unquoted; `q` is pulled out as the quality, clamped to `[0, 1]`. Returns
/// `None` when the tag is empty or a `q` value does not parse as a float, and
/// the caller maps that to its flavor-specific error.
pub(crate) fn split_token(token: &str) -> Option<TokenParts> {
    let mut segments = token.split(';');

    let tag = segments.next().unwrap_or("").trim();
    if tag.is_empty() {
        return None;
    }

    let mut quality = 1.0_f32;
    let mut parameters = BTreeMap::new();
    for segment in segments {
        let Some((key, value)) = segment.split_once('=') else {
            continue;
        };
        let key = key.trim().to_ascii_lowercase();
        let value = unquote(value.trim());
        if key == "q" {
            quality = value.parse::<f32>().ok()?.clamp(0.0, 1.0);
        } else {
            parameters.insert(key, value.to_owned());
        }
    }

    Some(TokenParts {
        tag: tag.to_owned(),
        quality,
        parameters,
    })
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
