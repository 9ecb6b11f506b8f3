//! Small, literal end-to-end scenarios over short DNA references.
//!
//! Symbols follow the A=0, C=1, G=2, T=3 mapping used throughout.

use dnaseedex::FmIndex;

/// Surfaces the crate's construction-phase tracing spans/events on stderr
/// when a test is run with `RUST_LOG` set; harmless, idempotent no-op
/// otherwise.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn offsets_sorted(index: &FmIndex, seed: &[u8]) -> Vec<u32> {
    let (range, remaining) = index.range(seed, 0);
    assert_eq!(remaining, 0);
    let mut offsets = index.offsets(range).as_slice().to_vec();
    offsets.sort_unstable();
    offsets
}

#[test]
fn acgt_has_a_single_occurrence_of_the_whole_text() {
    let reference = [0u8, 1, 2, 3]; // "ACGT"
    let index = FmIndex::build(&reference).unwrap();

    let (range, remaining) = index.range(&reference, 0);
    assert_eq!(remaining, 0);
    assert_eq!(range.count(), 1);
    assert_eq!(offsets_sorted(&index, &reference), vec![0]);
}

#[test]
fn aaaa_has_four_occurrences_of_a_single_a() {
    let reference = [0u8, 0, 0, 0]; // "AAAA"
    let index = FmIndex::build(&reference).unwrap();

    let (range, remaining) = index.range(&[0u8], 0);
    assert_eq!(remaining, 0);
    assert_eq!(range.count(), 4);
    assert_eq!(offsets_sorted(&index, &[0u8]), vec![0, 1, 2, 3]);
}

#[test]
fn acacac_has_three_occurrences_of_ac() {
    let reference = [0u8, 1, 0, 1, 0, 1]; // "ACACAC"
    let index = FmIndex::build(&reference).unwrap();

    assert_eq!(offsets_sorted(&index, &[0u8, 1]), vec![0, 2, 4]);
}

#[test]
fn nonexistent_seed_yields_an_empty_range() {
    let reference = [0u8, 1, 2, 3]; // "ACGT"
    let index = FmIndex::build(&reference).unwrap();

    let (range, _) = index.range(&[3u8, 3, 3], 0);
    assert!(range.is_empty());
}

#[test]
fn split_search_matches_a_single_full_search() {
    let reference = [0u8, 1, 2, 3, 0, 1, 2, 3]; // "ACGTACGT"
    let index = FmIndex::build(&reference).unwrap();

    let whole = [0u8, 1, 2, 3];
    let (whole_range, whole_remaining) = index.range(&whole, 0);
    assert_eq!(whole_remaining, 0);

    let (ac_range, ac_remaining) = index.range(&[0u8, 1], 0);
    assert_eq!(ac_remaining, 0);

    let (split_range, split_remaining) = index.range_from(&[2u8, 3], ac_range, 0);
    assert_eq!(split_remaining, 0);
    assert_eq!(split_range, whole_range);

    let mut whole_offsets = index.offsets(whole_range).as_slice().to_vec();
    whole_offsets.sort_unstable();
    let mut split_offsets = index.offsets(split_range).as_slice().to_vec();
    split_offsets.sort_unstable();
    assert_eq!(whole_offsets, split_offsets);
}

#[test]
fn save_load_round_trip_preserves_every_range_answer() {
    init_tracing();

    let reference = [0u8, 1, 2, 3, 0, 1, 0, 1, 2, 3, 2, 1, 0, 3];
    let index = FmIndex::build(&reference).unwrap();

    let mut buf = Vec::new();
    index.save(&mut buf).unwrap();
    let loaded = FmIndex::load(&mut std::io::Cursor::new(buf)).unwrap();

    assert_eq!(index, loaded);

    for seed in [
        &[0u8, 1][..],
        &[2, 3][..],
        &[0, 1, 2, 3][..],
        &[3, 3, 3][..],
    ] {
        let (range_a, remaining_a) = index.range(seed, 0);
        let (range_b, remaining_b) = loaded.range(seed, 0);
        assert_eq!(remaining_a, remaining_b);
        assert_eq!(range_a, range_b);
    }
}

#[test]
fn empty_seed_is_the_identity_range_not_an_error() {
    let reference = [0u8, 1, 2, 3];
    let index = FmIndex::build(&reference).unwrap();

    let (range, remaining) = index.range(&[], 0);
    assert_eq!(remaining, 0);
    // One row per reference position plus the empty-suffix sentinel row.
    assert_eq!(range.count(), index.len() + 1);
}

#[test]
fn build_rejects_a_symbol_outside_the_dna_alphabet() {
    let err = FmIndex::build(&[0u8, 1, 4, 2]).unwrap_err();
    assert_eq!(err, dnaseedex::BuildError::InvalidSymbol(2));
}
