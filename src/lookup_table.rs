//! Precomputed k-mer lookup table.
//!
//! Enumerates every `LOOKUP_K`-mer over the DNA alphabet in hash order
//! (`codec::hash` preserves lexicographic order, so this
//! is also SA order) and records the boundary of its SA interval. Built by
//! a single recursive descent that narrows the SA range incrementally one
//! symbol at a time, rather than `4^LOOKUP_K` independent backward searches
//! from scratch — the same total work the construction-time-only, always
//! full-depth `stop_upper = 0` mode of [`crate::query::compute_range`]
//! performs, done with shared prefixes instead of repeated from the root.

use crate::FmIndex;
use crate::config::LOOKUP_K;
use crate::query::Range;

/// Builds the lookup table for `index`. The result has `4^LOOKUP_K + 1`
/// entries: `result[key]..result[key + 1]` is the SA interval of the
/// `LOOKUP_K`-mer with [`crate::codec::hash`] value `key`.
pub(crate) fn build(index: &FmIndex) -> Vec<u32> {
    let total_keys = 4usize.pow(LOOKUP_K as u32);
    let mut boundaries = vec![0u32; total_keys + 1];

    let full = Range {
        start: 0,
        end: index.total_len(),
    };
    descend(index, full, 0, 0, &mut boundaries);

    boundaries[total_keys] = index.total_len();
    boundaries
}

/// Narrowing is a backward search: the symbol chosen at `depth == 0` becomes
/// the *last* symbol of the matched k-mer, and the symbol chosen at the
/// deepest level becomes its first. So a descent step folds its symbol into
/// `key` at bit position `2 * depth` (least-significant first), not by
/// shifting the accumulated key left — that would build the bit-reversed
/// k-mer instead of `rhash(key, LOOKUP_K)`.
fn descend(index: &FmIndex, range: Range, depth: usize, key: usize, boundaries: &mut [u32]) {
    if depth == LOOKUP_K {
        boundaries[key] = range.start;
        return;
    }

    for symbol in 0..4u8 {
        let next_key = key | ((symbol as usize) << (2 * depth));
        let next_range = index.narrow(range, symbol);
        descend(index, next_range, depth + 1, next_key, boundaries);
    }
}
