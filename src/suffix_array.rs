//! Full suffix array construction.
//!
//! Deliberately a comparator-based parallel sort, not a linear-time SACA: a
//! true linear-time suffix array construction algorithm is overkill for a
//! fixed, small DNA alphabet at the scale this index targets, where a
//! `rayon`-parallel sort over clipped suffix comparisons is simpler and
//! fast enough in practice.

use rayon::prelude::*;

use crate::config::SORT_LEN;
use crate::packed_text::PackedText;

/// Builds the full (unsampled) suffix array of `reference` by sorting every
/// rotation's starting offset under clipped suffix order, comparing at
/// most [`SORT_LEN`] symbols per pair. Includes one row per position `0..n`
/// plus the empty suffix at position `n` (the implicit sentinel row), so the
/// result has `n + 1` entries, not `n`.
pub(crate) fn build(reference: &PackedText) -> Vec<u32> {
    let n = reference.len();
    tracing::info!(len = n, "sorting suffix array");

    let mut sa: Vec<u32> = (0..=n as u32).collect();

    sa.par_sort_unstable_by(|&a, &b| {
        reference
            .substr(a as usize, SORT_LEN)
            .cmp(&reference.substr(b as usize, SORT_LEN))
    });

    tracing::info!("suffix array sorted");
    sa
}
