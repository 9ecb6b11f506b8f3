//! Builds the Burrows–Wheeler transform and its occurrence table from a full
//! suffix array.
//!
//! No sentinel symbol is ever stored: the row whose suffix-array entry is
//! `0` (the row that would be preceded by the implicit, lexicographically
//! smallest terminator) gets an arbitrary filler symbol in the packed BWT
//! and is excluded from the occurrence counts; [`crate::occurrence_table::OccTable::rank`]'s
//! `pass` correction accounts for it at query time.

use crate::occurrence_table::{OccTable, OccTableBuilder};
use crate::packed_text::PackedText;

/// The assembled BWT, its occurrence table, the cumulative symbol counts
/// `C`, and the primary index.
pub(crate) struct Assembled {
    pub(crate) bwt: PackedText,
    pub(crate) occ: OccTable,
    pub(crate) count: [u32; 4],
    pub(crate) pri: u32,
}

/// Consumes the full suffix array `sa` (as produced by [`crate::suffix_array::build`])
/// and `reference`, producing the BWT and its occurrence table.
pub(crate) fn assemble(sa: &[u32], reference: &PackedText) -> Assembled {
    let n = sa.len() as u32;

    let mut bwt = PackedText::with_capacity(sa.len());
    let mut builder = OccTableBuilder::new();
    let mut pri = 0u32;

    for (i, &start) in sa.iter().enumerate() {
        if start == 0 {
            pri = i as u32;
            bwt.push_back(0);
        } else {
            let symbol = reference.get(start as usize - 1);
            bwt.push_back(symbol);
            builder.record(symbol);
        }

        builder.after_row((i + 1) as u32);
    }

    let (occ, cnt) = builder.finish();

    // C[c] = cumulative count of rows lexicographically preceding the block
    // for symbol c, computed top-down: the sentinel row is the single
    // smallest row, so C[0] == 1 and each subsequent C[c] follows by
    // subtracting cnt[c] from the running total starting at S == n.
    let mut count = [0u32; 4];
    let mut running = n;
    for symbol in (0..4).rev() {
        running -= cnt[symbol];
        count[symbol] = running;
    }

    Assembled {
        bwt,
        occ,
        count,
        pri,
    }
}
