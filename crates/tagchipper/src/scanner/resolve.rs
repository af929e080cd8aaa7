//! # Overlap Resolution

use core::cmp::Reverse;

use crate::{entities::EntityKind, scanner::Candidate};

/// Merge per-kind candidate lists into one non-overlapping, ordered list.
///
/// 1. Any non-URL candidate overlapping a URL is dropped.
/// 2. Candidates are ordered by start; then longest first; then by
///    [`EntityKind::precedence`].
/// 3. A candidate overlapping an already kept candidate is dropped.
///
/// ## Returns
/// The kept candidates, sorted by start.
pub fn resolve_overlaps(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let (urls, others): (Vec<Candidate>, Vec<Candidate>) = candidates
        .into_iter()
        .partition(|c| c.kind == EntityKind::Url);

    let mut merged: Vec<Candidate> = others
        .into_iter()
        .filter(|c| {
            let inside_url = urls.iter().any(|url| url.overlaps(c));
            if inside_url {
                log::trace!("{} at {}: overlaps a url", c.kind, c.start());
            }
            !inside_url
        })
        .collect();
    merged.extend(urls);

    merged.sort_by_key(|c| (c.start(), Reverse(c.len()), c.kind.precedence()));

    let mut kept: Vec<Candidate> = Vec::with_capacity(merged.len());
    for candidate in merged {
        if kept.last().is_some_and(|last| last.end() > candidate.start()) {
            log::trace!(
                "{} at {}: overlaps an earlier entity",
                candidate.kind,
                candidate.start()
            );
            continue;
        }
        kept.push(candidate);
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::RawMatch;

    fn c(
        kind: EntityKind,
        start: usize,
        end: usize,
    ) -> Candidate {
        Candidate::new(kind, RawMatch::new(start..end))
    }

    fn spans(candidates: &[Candidate]) -> Vec<(EntityKind, usize, usize)> {
        candidates
            .iter()
            .map(|c| (c.kind, c.start(), c.end()))
            .collect()
    }

    #[test]
    fn test_url_wins() {
        use EntityKind::*;
        let resolved = resolve_overlaps(vec![
            c(Mention, 20, 25),
            c(Hashtag, 0, 4),
            c(Url, 10, 30),
            c(Hashtag, 28, 33),
        ]);
        assert_eq!(spans(&resolved), vec![(Hashtag, 0, 4), (Url, 10, 30)]);
    }

    #[test]
    fn test_earlier_then_longer() {
        use EntityKind::*;
        let resolved = resolve_overlaps(vec![
            c(Cashtag, 3, 6),
            c(Hashtag, 2, 5),
            c(Mention, 8, 10),
            c(Hashtag, 8, 12),
        ]);
        assert_eq!(spans(&resolved), vec![(Hashtag, 2, 5), (Hashtag, 8, 12)]);
    }

    #[test]
    fn test_precedence_tie_break() {
        use EntityKind::*;
        let resolved = resolve_overlaps(vec![
            c(Cashtag, 0, 4),
            c(Hashtag, 0, 4),
            c(Mention, 0, 4),
        ]);
        assert_eq!(spans(&resolved), vec![(Mention, 0, 4)]);
    }

    #[test]
    fn test_adjacent_kept() {
        use EntityKind::*;
        let resolved = resolve_overlaps(vec![c(Hashtag, 5, 9), c(Url, 0, 5)]);
        assert_eq!(spans(&resolved), vec![(Url, 0, 5), (Hashtag, 5, 9)]);
    }
}
