//! The shared negotiation engine.
//!
//! One engine serves every `Accept`-family flavor; only the
//! [`DescriptorParser`] differs. The pipeline is tokenize, parse both sides,
//! match every (priority, token) pair, reduce to one match per priority and
//! pick the winner.

use tracing::{debug, trace};

use crate::descriptor::{Descriptor, DescriptorParser};
use crate::error::{NegotiationError, Result};
use crate::header;
use crate::matching;

/// Content negotiation engine, generic over the per-flavor token parser.
///
/// Pure and stateless: identical inputs always produce identical output, and
/// independent calls may run concurrently without coordination.
#[derive(Debug, Clone, Default)]
pub struct Negotiator<P> {
    parser: P,
}

impl<P: DescriptorParser> Negotiator<P> {
    /// Build an engine around the given token parser.
    pub fn with_parser(parser: P) -> Self {
        Self { parser }
    }

    /// Select the server priority best matching the accept header.
    ///
    /// Returns `Ok(None)` when no priority is acceptable; the descriptor
    /// returned otherwise is parsed from the winning entry of `priorities`,
    /// so its `value()` is exactly the caller's declared string.
    ///
    /// # Errors
    ///
    /// [`NegotiationError::EmptyPriorities`] / [`NegotiationError::EmptyHeader`]
    /// on empty inputs, [`NegotiationError::InvalidHeader`] when the header
    /// cannot be tokenized, and any parse error of the flavor's parser.
    pub fn get_best<S: AsRef<str>>(
        &self,
        header: &str,
        priorities: &[S],
    ) -> Result<Option<P::Output>> {
        if priorities.is_empty() {
            return Err(NegotiationError::EmptyPriorities);
        }
        if header.is_empty() {
            return Err(NegotiationError::EmptyHeader);
        }

        let accepts = self.parse_tokens(header)?;
        let mut parsed = priorities
            .iter()
            .map(|priority| self.parser.parse(priority.as_ref().trim()))
            .collect::<Result<Vec<_>>>()?;
        trace!(
            tokens = accepts.len(),
            priorities = parsed.len(),
            "negotiation inputs parsed"
        );

        let mut matches = Vec::new();
        for (index, priority) in parsed.iter().enumerate() {
            for accept in &accepts {
                if let Some(found) = matching::match_pair(accept, priority, index) {
                    matches.push(found);
                }
            }
        }

        let reduced = matching::reduce(matches, parsed.len());
        let winner = matching::select(reduced);
        debug!(?winner, "negotiation complete");

        // swap_remove is fine here, the rest of the list is discarded.
        Ok(winner.map(|index| parsed.swap_remove(index)))
    }

    /// Parse all header tokens and order them by descending quality.
    ///
    /// The sort is stable, so tokens of equal quality keep their header
    /// order.
    ///
    /// # Errors
    ///
    /// Same contract as [`Negotiator::get_best`], minus the priority checks.
    pub fn ordered_elements(&self, header: &str) -> Result<Vec<P::Output>> {
        if header.is_empty() {
            return Err(NegotiationError::EmptyHeader);
        }

        let mut elements = self.parse_tokens(header)?;
        elements.sort_by(|a, b| b.quality().total_cmp(&a.quality()));
        Ok(elements)
    }

    fn parse_tokens(&self, header: &str) -> Result<Vec<P::Output>> {
        header::split_header(header)?
            .into_iter()
            .map(|token| self.parser.parse(token))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::CharsetNegotiator;
    use crate::descriptor::Descriptor;

    #[test]
    fn test_empty_priorities_is_an_error() {
        let negotiator = CharsetNegotiator::new();
        let priorities: [&str; 0] = [];
        assert_eq!(
            negotiator.get_best("utf-8", &priorities),
            Err(NegotiationError::EmptyPriorities)
        );
    }

    #[test]
    fn test_empty_header_is_an_error() {
        let negotiator = CharsetNegotiator::new();
        assert_eq!(
            negotiator.get_best("", &["utf-8"]),
            Err(NegotiationError::EmptyHeader)
        );
    }

    #[test]
    fn test_whitespace_header_yields_no_match() {
        let negotiator = CharsetNegotiator::new();
        let best = negotiator.get_best("   ", &["utf-8"]).unwrap();
        assert!(best.is_none());
    }

    #[test]
    fn test_best_returns_the_declared_priority_value() {
        let negotiator = CharsetNegotiator::new();
        let best = negotiator.get_best("UTF-8;q=0.9", &["utf-8"]).unwrap().unwrap();
        assert_eq!(best.value(), "utf-8");
    }

    #[test]
    fn test_determinism() {
        let negotiator = CharsetNegotiator::new();
        let header = "utf-8;q=0.4, iso-8859-1;q=0.4, *;q=0.1";
        let priorities = ["iso-8859-1", "utf-8", "shift-jis"];
        let first = negotiator.get_best(header, &priorities).unwrap();
        let second = negotiator.get_best(header, &priorities).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_ordered_elements_sorts_stably_by_quality() {
        let negotiator = CharsetNegotiator::new();
        let ordered = negotiator
            .ordered_elements("a;q=0.5, b, c;q=0.5, d")
            .unwrap();
        let tags: Vec<&str> = ordered.iter().map(Descriptor::tag).collect();
        assert_eq!(tags, vec!["b", "d", "a", "c"]);
    }
}
