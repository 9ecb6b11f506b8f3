//! Binary serialization of an [`FmIndex`].
//!
//! Fields are written in a fixed order with no format version or magic
//! number: the reference length, the packed BWT, the `OCC₁` table, the `OCC₂` table,
//! the cumulative symbol counts `C`, the primary index, the sampled suffix
//! array, and the lookup table. [`crate::config::SA_INTV`] is never
//! persisted — loading always reconstructs a fully sampled suffix array
//! under the crate's current frozen sampling rate, so a saved index only
//! round-trips correctly within a single build of this crate.

use std::io::{Read, Write};

use crate::FmIndex;
use crate::error::LoadError;
use crate::occurrence_table::OccTable;
use crate::sampled_suffix_array::SampledSuffixArray;
use crate::serializer::{load_seq, save_seq};

impl FmIndex {
    pub fn save(&self, sink: &mut impl Write) -> std::io::Result<()> {
        sink.write_all(&self.len.to_ne_bytes())?;
        self.bwt.save(sink)?;
        save_seq(sink, self.occ.occ1())?;
        save_seq(sink, self.occ.occ2())?;
        sink.write_all(bytemuck::bytes_of(&self.count))?;
        sink.write_all(&self.pri.to_ne_bytes())?;
        save_seq(sink, self.sa.sampled())?;
        save_seq(sink, &self.lookup)?;
        Ok(())
    }

    pub fn load(source: &mut impl Read) -> Result<Self, LoadError> {
        let mut len_bytes = [0u8; 4];
        source
            .read_exact(&mut len_bytes)
            .map_err(|_| LoadError::Truncated("total length"))?;
        let len = u32::from_ne_bytes(len_bytes);

        let bwt = crate::packed_text::PackedText::load(source)?;

        let occ1 = load_seq(source, "occ1")?;
        let occ2 = load_seq(source, "occ2")?;
        let occ = OccTable::from_parts(occ1, occ2);

        let mut count_bytes = [0u8; 16];
        source
            .read_exact(&mut count_bytes)
            .map_err(|_| LoadError::Truncated("count"))?;
        let count: [u32; 4] = *bytemuck::from_bytes(&count_bytes);

        let mut pri_bytes = [0u8; 4];
        source
            .read_exact(&mut pri_bytes)
            .map_err(|_| LoadError::Truncated("pri"))?;
        let pri = u32::from_ne_bytes(pri_bytes);

        let sampled: Vec<u32> = load_seq(source, "sampled suffix array")?;
        let sa = SampledSuffixArray::from_parts(sampled, crate::config::SA_INTV);

        let lookup = load_seq(source, "lookup table")?;

        let mut trailing = [0u8; 1];
        if source.read(&mut trailing).map_err(LoadError::Io)? != 0 {
            return Err(LoadError::TrailingData);
        }

        Ok(FmIndex {
            len,
            bwt,
            occ,
            count,
            pri,
            sa,
            lookup,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::FmIndex;

    #[test]
    fn save_load_round_trip_preserves_query_results() {
        let symbols: Vec<u8> = (0..500).map(|i| ((i * 7) % 4) as u8).collect();
        let index = FmIndex::build(&symbols).unwrap();

        let mut buf = Vec::new();
        index.save(&mut buf).unwrap();

        let mut cursor = std::io::Cursor::new(buf);
        let loaded = FmIndex::load(&mut cursor).unwrap();

        assert_eq!(index, loaded);

        let seed = &symbols[100..115];
        assert_eq!(index.count(seed), loaded.count(seed));
    }

    #[test]
    fn load_rejects_truncated_stream() {
        let index = FmIndex::build(&[0u8, 1, 2, 3, 1, 1, 2, 3]).unwrap();

        let mut buf = Vec::new();
        index.save(&mut buf).unwrap();
        buf.truncate(buf.len() - 4);

        let mut cursor = std::io::Cursor::new(buf);
        assert!(FmIndex::load(&mut cursor).is_err());
    }

    #[test]
    fn load_rejects_trailing_data() {
        let index = FmIndex::build(&[0u8, 1, 2, 3, 1, 1, 2, 3]).unwrap();

        let mut buf = Vec::new();
        index.save(&mut buf).unwrap();
        buf.push(0xff);

        let mut cursor = std::io::Cursor::new(buf);
        assert!(matches!(
            FmIndex::load(&mut cursor),
            Err(crate::error::LoadError::TrailingData)
        ));
    }
}
