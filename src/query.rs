//! Backward search and SA-interval narrowing.

use crate::FmIndex;
use crate::config::LOOKUP_K;

/// A half-open SA interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

impl Range {
    fn full(total_len: u32) -> Self {
        Range {
            start: 0,
            end: total_len,
        }
    }

    /// Number of SA rows covered by this interval.
    pub fn count(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

impl FmIndex {
    /// LF-mapping step: `C[c] + rank(c, i)`.
    pub(crate) fn lf_mapping_step(&self, symbol: u8, i: u32) -> u32 {
        self.count[symbol as usize] + self.occ.rank(&self.bwt, symbol, i, self.pri)
    }

    /// One backward-search step: narrows `range` by prepending `symbol`.
    pub(crate) fn narrow(&self, range: Range, symbol: u8) -> Range {
        if range.is_empty() {
            return range;
        }
        Range {
            start: self.lf_mapping_step(symbol, range.start),
            end: self.lf_mapping_step(symbol, range.end),
        }
    }

    /// The number of SA rows, `n + 1` where `n` is the reference length: one
    /// row per reference position plus the empty-suffix sentinel row. This
    /// is the row count the BWT/OCC/SA and lookup table are built over, not
    /// the reference length reported by [`Self::len`].
    pub(crate) fn total_len(&self) -> u32 {
        self.len + 1
    }
}

/// Narrows `range` backward by every symbol in `seed`, consumed from the
/// last symbol to the first. Stops early once the interval shrinks to
/// `stop_upper` occurrences or fewer — *unless* `stop_upper` is `0`, which
/// means "never stop early" (the mode lookup-table construction needs,
/// since it must always consume the full k-mer).
///
/// Returns the narrowed range and the number of symbols of `seed` (from its
/// front) that were *not* consumed before the search stopped: `0` on a full,
/// uninterrupted search, `seed.len()` if the range was already empty before
/// the first step.
pub(crate) fn compute_range(
    index: &FmIndex,
    seed: &[u8],
    mut range: Range,
    stop_upper: u32,
) -> (Range, usize) {
    let mut consumed = 0;

    for &symbol in seed.iter().rev() {
        if range.is_empty() || (stop_upper > 0 && range.count() <= stop_upper) {
            break;
        }

        range = index.narrow(range, symbol);
        consumed += 1;
    }

    (range, seed.len() - consumed)
}

/// [`compute_range`] with the public API's off-by-one convention: a caller
/// asking to stop once `stop_cnt` matches remain should keep narrowing past
/// `stop_cnt + 1` occurrences, not `stop_cnt`.
pub(crate) fn range_from(
    index: &FmIndex,
    seed: &[u8],
    range: Range,
    stop_cnt: u32,
) -> (Range, usize) {
    compute_range(index, seed, range, stop_cnt.saturating_add(1))
}

impl FmIndex {
    /// Backward-searches `seed` (dense symbols, `< 4`), stopping early once
    /// at most `stop_cnt` occurrences remain. When `seed.len() >= LOOKUP_K`
    /// the trailing `LOOKUP_K` symbols are resolved with a single lookup
    /// instead of `LOOKUP_K` backward-search steps.
    ///
    /// Returns the narrowed SA interval and how many symbols at the *front*
    /// of `seed` remain unconsumed because the search stopped early; `0`
    /// means `seed` matched in full.
    pub fn range(&self, seed: &[u8], stop_cnt: u32) -> (Range, usize) {
        if seed.len() >= LOOKUP_K {
            let split = seed.len() - LOOKUP_K;
            let key = crate::codec::hash(&seed[split..]) as usize;
            let looked_up = Range {
                start: self.lookup[key],
                end: self.lookup[key + 1],
            };

            range_from(self, &seed[..split], looked_up, stop_cnt)
        } else {
            range_from(self, seed, Range::full(self.total_len()), stop_cnt)
        }
    }

    /// Number of occurrences of `seed` as an exact match (`0` if the search
    /// stopped before consuming the whole seed).
    pub fn count(&self, seed: &[u8]) -> u32 {
        let (range, remaining) = self.range(seed, 0);
        if remaining == 0 {
            range.count()
        } else {
            0
        }
    }

    /// The caller-supplied-interval form of [`Self::range`]: narrows `range`
    /// backward by `seed` instead of starting over from the full SA
    /// interval or the lookup table. Used for incremental extension of a
    /// previously matched seed.
    ///
    /// If `seed` is empty, returns `range` unchanged with `0` remaining. If
    /// `range` is already empty, returns it unchanged with `seed.len()`
    /// remaining, since no symbol could be consumed.
    pub fn range_from(&self, seed: &[u8], range: Range, stop_cnt: u32) -> (Range, usize) {
        range_from(self, seed, range, stop_cnt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_empty_for_an_absent_seed() {
        let index = crate::FmIndex::build(&[0, 1, 2, 3, 0, 1, 2, 3]).unwrap();

        assert_eq!(index.count(&[3, 3, 3, 3]), 0);
    }

    #[test]
    fn range_counts_every_occurrence_of_a_repeated_seed() {
        let index = crate::FmIndex::build(&[1, 1, 1, 1, 1, 1, 1, 1]).unwrap();

        assert_eq!(index.count(&[1, 1, 1]), 6);
    }

    #[test]
    fn range_from_splits_match_a_single_full_search() {
        // range(s1 . s2) == range_from(s1, range(s2)): splitting a search
        let symbols = [0u8, 1, 2, 3, 0, 1, 2, 3];
        let index = crate::FmIndex::build(&symbols).unwrap();

        let whole = [0u8, 1, 2, 3];
        let (s1, s2) = whole.split_at(2);

        let (whole_range, whole_remaining) = index.range(&whole, 0);
        assert_eq!(whole_remaining, 0);

        let (s2_range, s2_remaining) = index.range(s2, 0);
        assert_eq!(s2_remaining, 0);

        let (split_range, split_remaining) = index.range_from(s1, s2_range, 0);

        assert_eq!(split_range, whole_range);
        assert_eq!(split_remaining, 0);
    }

    #[test]
    fn range_from_is_identity_on_an_empty_seed_or_empty_range() {
        let index = crate::FmIndex::build(&[0, 1, 2, 3, 0, 1, 2, 3]).unwrap();

        let some_range = Range { start: 2, end: 5 };
        let (range, remaining) = index.range_from(&[], some_range, 0);
        assert_eq!((range, remaining), (some_range, 0));

        let empty_range = Range { start: 3, end: 3 };
        let (range, remaining) = index.range_from(&[1, 2], empty_range, 0);
        assert_eq!((range, remaining), (empty_range, 2));
    }
}
