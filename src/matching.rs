//! Match scoring, reduction and selection.
//!
//! Implements the HTTP preference rules: quality first, then specificity (a
//! literal tag match is strictly more specific than a wildcard match), then
//! declaration order on the server priority list.

use std::cmp::Ordering;

use crate::descriptor::Descriptor;

/// Compatibility record between one accept token and one server priority.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Match {
    /// Client quality; drives preference ordering.
    pub quality: f32,
    /// 1 for an exact tag match, 0 for a wildcard-only match.
    pub score: u32,
    /// Position of the priority in the caller's list.
    pub index: usize,
}

/// Test one (accept, priority) pair.
///
/// Compatible iff the tags are equal case-insensitively or the accept tag is
/// the wildcard `*`. The match carries the client's quality, so the server
/// side never influences preference, only eligibility.
pub(crate) fn match_pair<D: Descriptor>(accept: &D, priority: &D, index: usize) -> Option<Match> {
    let equal = accept.tag().eq_ignore_ascii_case(priority.tag());
    if !equal && accept.tag() != "*" {
        return None;
    }

    Some(Match {
        quality: accept.quality(),
        score: u32::from(equal),
        index,
    })
}

/// Collapse matches to at most one per priority index.
///
/// A priority may be matched by several header tokens (an exact token and a
/// wildcard, say); only its strongest match may compete in the final ranking.
/// Best quality wins, equal quality keeps the higher score, and the incumbent
/// survives full ties, so earlier header tokens prevail.
pub(crate) fn reduce(matches: Vec<Match>, priority_count: usize) -> Vec<Match> {
    let mut best: Vec<Option<Match>> = vec![None; priority_count];
    for candidate in matches {
        match best[candidate.index] {
            Some(incumbent) if !wins_over(&candidate, &incumbent) => {}
            _ => best[candidate.index] = Some(candidate),
        }
    }

    // Flattening in index order keeps the priority-list order for the
    // stable sort in `select`.
    best.into_iter().flatten().collect()
}

fn wins_over(candidate: &Match, incumbent: &Match) -> bool {
    match candidate.quality.total_cmp(&incumbent.quality) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => candidate.score > incumbent.score,
    }
}

/// Index of the winning priority, if any.
///
/// Descending (quality, score); the sort is stable, so when both tie the
/// first-declared priority wins.
pub(crate) fn select(mut reduced: Vec<Match>) -> Option<usize> {
    reduced.sort_by(|a, b| {
        b.quality
            .total_cmp(&a.quality)
            .then_with(|| b.score.cmp(&a.score))
    });
    reduced.first().map(|best| best.index)
}
