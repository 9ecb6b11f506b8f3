//! The `Serializer` contract: length-prefixed binary dump/load of sequences
//! of plain-old-data, used by [`crate::index_io`] for every fixed-width array
//! in the index (OCC records, the suffix-array sample, the lookup table).
//! The packed BWT has its own bespoke length prefix
//! ([`PackedText::save`](crate::packed_text::PackedText::save)), since its
//! length prefix counts symbols rather than bytes.

use std::io::{Read, Write};

use bytemuck::Pod;

use crate::error::LoadError;

/// Writes `values.len()` as a little bit of fixed overhead (a `u64` count),
/// then the raw bytes of `values`.
pub(crate) fn save_seq<T: Pod>(sink: &mut impl Write, values: &[T]) -> std::io::Result<()> {
    sink.write_all(&(values.len() as u64).to_ne_bytes())?;
    sink.write_all(bytemuck::cast_slice(values))
}

/// Reads back a sequence written by [`save_seq`]. `what` names the section,
/// used only to make a truncated-stream error more useful.
pub(crate) fn load_seq<T: Pod>(
    source: &mut impl Read,
    what: &'static str,
) -> Result<Vec<T>, LoadError> {
    let mut len_bytes = [0u8; 8];
    source
        .read_exact(&mut len_bytes)
        .map_err(|_| LoadError::Truncated(what))?;
    let len = u64::from_ne_bytes(len_bytes);

    let len_usize: usize = len
        .try_into()
        .map_err(|_| LoadError::LengthMismatch { declared: len })?;

    let mut values = vec![T::zeroed(); len_usize];
    source
        .read_exact(bytemuck::cast_slice_mut(&mut values))
        .map_err(|_| LoadError::Truncated(what))?;

    Ok(values)
}
