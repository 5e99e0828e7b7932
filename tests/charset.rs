//! End-to-end `Accept-Charset` negotiation.

use conneg::{CharsetNegotiator, Descriptor};

/// Charset names match case-insensitively
#[test]
fn test_charset_matching_ignores_case() {
    let negotiator = CharsetNegotiator::new();
    let best = negotiator
        .get_best("UTF-8;q=0.9, ISO-8859-1;q=0.3", &["iso-8859-1", "utf-8"])
        .unwrap()
        .unwrap();
    assert_eq!(best.value(), "utf-8");
}

/// A wildcard makes otherwise-unlisted charsets eligible at its quality
#[test]
fn test_wildcard_fills_in_for_unlisted_charsets() {
    let negotiator = CharsetNegotiator::new();
    let best = negotiator
        .get_best("utf-8;q=0.4, *;q=0.6", &["shift-jis", "utf-8"])
        .unwrap()
        .unwrap();
    // shift-jis matches the wildcard at 0.6, beating utf-8 at 0.4.
    assert_eq!(best.value(), "shift-jis");
}

/// Duplicate compatibility against one priority is reduced before ranking
#[test]
fn test_exact_and_wildcard_reduce_to_the_exact_match() {
    let negotiator = CharsetNegotiator::new();
    let best = negotiator
        .get_best("utf-8, *", &["iso-8859-1", "utf-8"])
        .unwrap()
        .unwrap();
    // Both priorities match at q=1.0; utf-8 keeps its exact score and wins
    // over iso-8859-1's wildcard-only match.
    assert_eq!(best.value(), "utf-8");
}
