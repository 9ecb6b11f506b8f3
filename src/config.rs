//! Names the crate's build-time tunables.
//!
//! The trade-off between freezing these as compile-time constants and
//! exposing them as runtime/build-time configuration is an explicit open
//! design point: this crate freezes them, the option its design notes call
//! "simplest". They are re-exported as public associated constants on
//! [`FmIndex`](crate::FmIndex) so callers can refer to them by name instead
//! of duplicating the literals.

/// Inner OCC period: `OCC₂` stores a checkpoint every this many BWT rows.
pub(crate) const OCC_INTV: u32 = 16;
/// Outer OCC period: `OCC₁` stores a checkpoint every this many BWT rows.
/// Must be a multiple of [`OCC_INTV`].
pub(crate) const OCC1_INTV: u32 = 256;
/// Sampled suffix array period. `1` retains the full suffix array.
pub(crate) const SA_INTV: u32 = 1;
/// Length of the k-mers enumerated into the lookup table.
pub(crate) const LOOKUP_K: usize = 13;
/// Suffix-array sort comparator clip length.
pub(crate) const SORT_LEN: usize = 256;

const _: () = assert!(OCC1_INTV % OCC_INTV == 0, "OCC1_INTV must be a multiple of OCC_INTV");
const _: () = assert!(OCC1_INTV <= u8::MAX as u32 + 1, "OCC2 counts must fit in 8 bits");
