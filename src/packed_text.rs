//! A 2-bit-per-symbol packed sequence over the DNA alphabet `{0,1,2,3}`.
//!
//! This is the minimal concrete stand-in for the `PackedText` contract
//! described in the crate's external interfaces. A real deployment is
//! expected to bring its own packed-sequence type (shared with whatever
//! reference-loading pipeline feeds this index); this implementation exists
//! so the crate compiles and is testable on its own, not as the object of
//! this crate's core algorithmic work.

use std::cmp::Ordering;

use crate::error::LoadError;

/// A 2-bit-per-symbol sequence. Symbols live in bits `2*(p mod 4)..2*(p mod 4)+1`
/// of byte `p / 4`, low-bits-first, per the packed-byte layout the rank kernel
/// relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackedText {
    bytes: Vec<u8>,
    len: usize,
}

impl PackedText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        let mut text = Self::default();
        text.reserve(n);
        text
    }

    /// Builds a packed text from plain dense symbols (each `< 4`). Mostly
    /// useful for tests and small literal references.
    pub fn from_symbols(symbols: &[u8]) -> Self {
        let mut text = Self::with_capacity(symbols.len());
        for &symbol in symbols {
            text.push_back(symbol);
        }
        text
    }

    pub fn reserve(&mut self, additional: usize) {
        self.bytes.reserve(additional.div_ceil(4));
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push_back(&mut self, symbol: u8) {
        debug_assert!(symbol < 4, "symbol {symbol} outside the DNA alphabet");

        let bit_offset = (self.len % 4) * 2;
        if bit_offset == 0 {
            self.bytes.push(0);
        }

        *self.bytes.last_mut().unwrap() |= symbol << bit_offset;
        self.len += 1;
    }

    pub fn get(&self, pos: usize) -> u8 {
        debug_assert!(pos < self.len);
        let byte = self.bytes[pos / 4];
        (byte >> ((pos % 4) * 2)) & 0b11
    }

    pub fn to_symbols(&self) -> Vec<u8> {
        (0..self.len).map(|pos| self.get(pos)).collect()
    }

    /// Exposes the underlying packed bytes, four symbols per byte, low-bits-first.
    pub fn as_packed_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// A comparable view of `self[pos..pos+len)`, clipped at the end of the
    /// sequence (shorter residues compare less). Used by the suffix array
    /// sorter's comparator.
    pub fn substr(&self, pos: usize, len: usize) -> ClippedView<'_> {
        let len = len.min(self.len.saturating_sub(pos));
        ClippedView { text: self, pos, len }
    }

    pub(crate) fn save(&self, sink: &mut impl std::io::Write) -> std::io::Result<()> {
        sink.write_all(&(self.len as u64).to_ne_bytes())?;
        sink.write_all(&self.bytes)
    }

    pub(crate) fn load(source: &mut impl std::io::Read) -> Result<Self, LoadError> {
        let mut len_bytes = [0u8; 8];
        source
            .read_exact(&mut len_bytes)
            .map_err(|_| LoadError::Truncated("bwt length"))?;
        let len = u64::from_ne_bytes(len_bytes);

        let len_usize: usize = len
            .try_into()
            .map_err(|_| LoadError::LengthMismatch { declared: len })?;

        let mut bytes = vec![0u8; len_usize.div_ceil(4)];
        source
            .read_exact(&mut bytes)
            .map_err(|_| LoadError::Truncated("bwt data"))?;

        Ok(Self { bytes, len: len_usize })
    }
}

/// A clipped, comparable view into a [`PackedText`].
#[derive(Clone, Copy)]
pub struct ClippedView<'a> {
    text: &'a PackedText,
    pos: usize,
    len: usize,
}

impl PartialEq for ClippedView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ClippedView<'_> {}

impl PartialOrd for ClippedView<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ClippedView<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        for i in 0..self.len.max(other.len) {
            let lhs = (i < self.len).then(|| self.text.get(self.pos + i));
            let rhs = (i < other.len).then(|| other.text.get(other.pos + i));

            match (lhs, rhs) {
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (Some(a), Some(b)) if a != b => return a.cmp(&b),
                (Some(_), Some(_)) => continue,
            }
        }

        Ordering::Equal
    }
}
