//! The sampled suffix array and offset resolution.
//!
//! At `sampling_rate == 1` (the frozen [`crate::config::SA_INTV`]) every row
//! is retained, so resolving a whole SA interval is just borrowing a slice —
//! the "fast path". At a coarser rate, unsampled rows are resolved by
//! walking LF-mappings until a sampled row (or the primary index, whose
//! offset is always `0`) is reached — the "slow path". [`FmIndex::offsets`]
//! documents an intentional asymmetry between the two: the fast path
//! returns offsets in SA order, which is *not* numerically sorted (rows in
//! one SA interval share a matched prefix but diverge arbitrarily after it);
//! the slow path sorts its resolved offsets ascending before returning them,
//! since nothing about the LF-walk order is meaningful to a caller. A
//! sampling rate other than `1` only exists in this crate to exercise the
//! slow path in tests — [`FmIndex::build`] always uses the fast path.

use crate::FmIndex;
use crate::query::Range;

/// The suffix array, retained every `sampling_rate` rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SampledSuffixArray {
    sampled: Vec<u32>,
    sampling_rate: u32,
}

impl SampledSuffixArray {
    /// Subsamples `full` (the complete suffix array, indexed by SA row),
    /// keeping every `sampling_rate`-th row.
    pub(crate) fn sample(full: &[u32], sampling_rate: u32) -> Self {
        let sampled = full
            .iter()
            .step_by(sampling_rate as usize)
            .copied()
            .collect();

        Self {
            sampled,
            sampling_rate,
        }
    }

    pub(crate) fn from_parts(sampled: Vec<u32>, sampling_rate: u32) -> Self {
        Self {
            sampled,
            sampling_rate,
        }
    }

    pub(crate) fn sampled(&self) -> &[u32] {
        &self.sampled
    }

    pub(crate) fn sampling_rate(&self) -> u32 {
        self.sampling_rate
    }

    /// Resolves the text offset of SA row `i`, walking LF-mappings from `i`
    /// until a sampled row (or the primary index) is reached.
    fn resolve_one(&self, index: &FmIndex, mut i: u32) -> u32 {
        let mut steps = 0u32;
        loop {
            if i % self.sampling_rate == 0 {
                return self.sampled[(i / self.sampling_rate) as usize] + steps;
            }
            if i == index.pri {
                return steps;
            }

            let symbol = index.bwt.get(i as usize);
            i = index.lf_mapping_step(symbol, i);
            steps += 1;
        }
    }
}

/// Text offsets for the rows of a matched SA interval.
pub enum Offsets<'a> {
    /// Fast path: borrowed directly from the fully sampled suffix array, in
    /// SA-interval order.
    Direct(&'a [u32]),
    /// Slow path: resolved row by row via LF-mapping walks, then sorted
    /// ascending.
    Resolved(Vec<u32>),
}

impl Offsets<'_> {
    pub fn as_slice(&self) -> &[u32] {
        match self {
            Offsets::Direct(slice) => slice,
            Offsets::Resolved(values) => values,
        }
    }

    /// Consumes `self` into an owned `Vec<u32>`. On the `Resolved` (slow)
    /// path the values are already sorted ascending; on the `Direct` (fast,
    /// `SA_INTV = 1`) path they are in SA-interval order, *not* necessarily
    /// ascending text-position order — callers that need ascending order
    /// from the fast path must sort the result themselves (see the
    /// crate-level note on this asymmetry).
    pub fn into_vec(self) -> Vec<u32> {
        match self {
            Offsets::Direct(slice) => slice.to_vec(),
            Offsets::Resolved(values) => values,
        }
    }
}

impl FmIndex {
    /// Resolves the text offsets of every row in `range`. See [`Offsets`]
    /// for the ordering guarantees of each path.
    pub fn offsets(&self, range: Range) -> Offsets<'_> {
        if self.sa.sampling_rate() == 1 {
            Offsets::Direct(&self.sa.sampled()[range.start as usize..range.end as usize])
        } else {
            let mut resolved: Vec<u32> = (range.start..range.end)
                .map(|i| self.sa.resolve_one(self, i))
                .collect();
            resolved.sort_unstable();
            Offsets::Resolved(resolved)
        }
    }
}
