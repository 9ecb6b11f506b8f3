//! The `AlphabetCodec` contract: a bijection between short DNA k-mers and
//! dense integers, chosen so that the numeric order of [`hash`] matches the
//! lexicographic order of its input — this is what keeps the lookup table
//! built in [`crate::lookup_table`] non-decreasing.
//!
//! Operates on plain dense-symbol slices (`&[u8]`, each entry `< 4`), the
//! same representation used for query seeds, rather than on [`PackedText`](crate::packed_text::PackedText):
//! seeds are short and transient, so there is no reason to pay for 2-bit
//! packing on them.

/// Packs a k-mer of dense symbols into an integer key, most significant
/// symbol first. `symbols.len()` must be `<= 16` so that `2 * symbols.len()`
/// bits fit in a `u32`.
pub fn hash(symbols: &[u8]) -> u32 {
    debug_assert!(symbols.len() <= 16);

    let mut key = 0u32;
    for &symbol in symbols {
        debug_assert!(symbol < 4);
        key = (key << 2) | symbol as u32;
    }
    key
}

/// The inverse of [`hash`]: decodes `value` into a k-mer of length `k`.
pub fn rhash(value: u32, k: usize) -> Vec<u8> {
    (0..k)
        .rev()
        .map(|shift| ((value >> (shift * 2)) & 0b11) as u8)
        .collect()
}
