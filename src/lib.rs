/*! An FM-Index over the fixed 4-symbol DNA alphabet `{A, C, G, T} = {0, 1, 2, 3}`.
 *
 * [`FmIndex`] is a succinct full-text self-index built from the
 * Burrows-Wheeler transform of a reference sequence. It supports exact
 * backward search ([`FmIndex::range`], [`FmIndex::count`]) and resolving a
 * matched SA interval back to text offsets ([`FmIndex::offsets`]), the two
 * operations a short-read aligner needs to turn a seed into candidate
 * mapping positions.
 *
 * Unlike a general-purpose FM-Index crate, every tunable here — the `OCC`
 * checkpoint periods, the suffix array sampling rate, the lookup-table
 * k-mer length, the suffix sort comparator clip length — is frozen at
 * compile time (see [`config`]). That rules out a generic, multi-alphabet,
 * multi-text API in exchange for a much smaller, single-reference,
 * single-alphabet implementation tuned for short DNA seeds.
 *
 * ## Usage
 *
 * ```
 * use dnaseedex::FmIndex;
 *
 * // A, C, G, T encoded as 0, 1, 2, 3.
 * let reference = [0u8, 1, 2, 3, 0, 1, 2, 3, 1, 1, 2, 3];
 * let index = FmIndex::build(&reference).unwrap();
 *
 * let seed = [1u8, 2, 3]; // "CGT"
 * assert_eq!(index.count(&seed), 3);
 *
 * let (range, remaining) = index.range(&seed, 0);
 * assert_eq!(remaining, 0);
 *
 * let mut offsets = index.offsets(range).as_slice().to_vec();
 * offsets.sort_unstable();
 * assert_eq!(offsets, vec![1, 5, 9]);
 * ```
 */

mod bwt;
pub mod codec;
mod config;
pub mod error;
mod index_io;
mod lookup_table;
mod occurrence_table;
pub mod packed_text;
mod query;
mod sampled_suffix_array;
mod serializer;
mod suffix_array;

#[doc(inline)]
pub use error::{BuildError, LoadError};
#[doc(inline)]
pub use packed_text::PackedText;
#[doc(inline)]
pub use query::Range;
#[doc(inline)]
pub use sampled_suffix_array::Offsets;

use occurrence_table::OccTable;
use sampled_suffix_array::SampledSuffixArray;

/// The FM-Index data structure.
///
/// See the [crate-level documentation](self) for an overview and usage
/// example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FmIndex {
    len: u32,
    bwt: PackedText,
    occ: OccTable,
    count: [u32; 4],
    pri: u32,
    sa: SampledSuffixArray,
    lookup: Vec<u32>,
}

impl FmIndex {
    /// Inner `OCC₂` checkpoint period.
    pub const OCC_INTV: u32 = config::OCC_INTV;
    /// Outer `OCC₁` checkpoint period.
    pub const OCC1_INTV: u32 = config::OCC1_INTV;
    /// Suffix array sampling rate used by [`Self::build`].
    pub const SA_INTV: u32 = config::SA_INTV;
    /// k-mer length of the precomputed lookup table.
    pub const LOOKUP_K: usize = config::LOOKUP_K;

    /// Builds an index over `reference`, a slice of dense DNA symbols each
    /// `< 4`. Returns [`BuildError::InvalidSymbol`] naming the first
    /// out-of-range position, if any.
    pub fn build(reference: &[u8]) -> Result<Self, BuildError> {
        Self::build_with_sampling_rate(reference, config::SA_INTV)
    }

    /// As [`Self::build`], but samples the suffix array every
    /// `sampling_rate` rows instead of the frozen [`config::SA_INTV`].
    /// Exists to let this crate's own tests exercise the slow
    /// (LF-mapping-walk) path of [`Self::offsets`]; [`Self::build`] is the
    /// only constructor a caller outside this crate can reach, since a
    /// sampling rate other than `1` is never persisted by [`Self::save`].
    pub(crate) fn build_with_sampling_rate(
        reference: &[u8],
        sampling_rate: u32,
    ) -> Result<Self, BuildError> {
        let mut packed = PackedText::with_capacity(reference.len());
        for (pos, &symbol) in reference.iter().enumerate() {
            if symbol >= 4 {
                return Err(BuildError::InvalidSymbol(pos));
            }
            packed.push_back(symbol);
        }

        tracing::info!(len = packed.len(), "building FM-index");

        let full_sa = suffix_array::build(&packed);
        let bwt::Assembled {
            bwt,
            occ,
            count,
            pri,
        } = bwt::assemble(&full_sa, &packed);
        let sa = SampledSuffixArray::sample(&full_sa, sampling_rate);

        let mut index = FmIndex {
            len: packed.len() as u32,
            bwt,
            occ,
            count,
            pri,
            sa,
            lookup: Vec::new(),
        };
        index.lookup = lookup_table::build(&index);

        tracing::info!("FM-index built");
        Ok(index)
    }

    /// The length of the indexed reference.
    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
