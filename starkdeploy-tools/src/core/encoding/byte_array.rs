// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Cairo `ByteArray` serialization.
//!
//! A `ByteArray` is laid out in calldata as
//! `[data.len(), data[0], ..., data[n - 1], pending_word, pending_word_len]` where every entry of
//! `data` is a `bytes31` holding exactly [`BYTES_PER_WORD`] bytes, and `pending_word` holds the
//! remaining `0..=30` bytes, right-aligned.

use super::{EncodingError, FieldElement};

/// Bytes stored in each full word (`bytes31`).
pub const BYTES_PER_WORD: usize = 31;

/// Encoded form of a Cairo `ByteArray`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ByteArray {
    data: Vec<FieldElement>,
    pending_word: FieldElement,
    pending_word_len: usize,
}

impl ByteArray {
    /// Encodes `bytes` without truncation.
    pub fn encode(bytes: impl AsRef<[u8]>) -> Result<Self, EncodingError> {
        let bytes = bytes.as_ref();
        let chunks = bytes.chunks_exact(BYTES_PER_WORD);
        let pending = chunks.remainder();

        let data = chunks.map(word).collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            data,
            pending_word: word(pending)?,
            pending_word_len: pending.len(),
        })
    }

    /// Decodes a `ByteArray` from the front of `felts`.
    ///
    /// Returns the raw bytes and the number of field elements consumed.
    pub fn decode(felts: &[FieldElement]) -> Result<(Vec<u8>, usize), EncodingError> {
        let malformed = |reason: &str| EncodingError::MalformedByteArray(reason.to_string());

        let len = felts
            .first()
            .and_then(FieldElement::to_u64)
            .ok_or_else(|| malformed("missing or invalid word count"))? as usize;
        let consumed = len
            .checked_add(3)
            .filter(|total| *total <= felts.len())
            .ok_or_else(|| malformed("truncated input"))?;

        let mut bytes = Vec::with_capacity(len * BYTES_PER_WORD + BYTES_PER_WORD);
        for word in &felts[1..=len] {
            let word = word_bytes(word, BYTES_PER_WORD)
                .ok_or_else(|| malformed("full word exceeds 31 bytes"))?;
            bytes.extend_from_slice(&word);
        }

        let pending_word = &felts[len + 1];
        let pending_len = felts[len + 2]
            .to_u64()
            .map(|n| n as usize)
            .filter(|n| *n < BYTES_PER_WORD)
            .ok_or_else(|| malformed("pending word length out of range"))?;
        let pending = word_bytes(pending_word, pending_len)
            .ok_or_else(|| malformed("pending word exceeds its declared length"))?;
        bytes.extend_from_slice(&pending);

        Ok((bytes, consumed))
    }

    pub fn data(&self) -> &[FieldElement] {
        &self.data
    }

    pub fn pending_word(&self) -> FieldElement {
        self.pending_word
    }

    pub fn pending_word_len(&self) -> usize {
        self.pending_word_len
    }

    /// Number of field elements in the serialized form.
    pub fn calldata_len(&self) -> usize {
        self.data.len() + 3
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty() && self.pending_word_len == 0
    }

    /// Appends the serialized form to `out`.
    pub fn write_to(&self, out: &mut Vec<FieldElement>) {
        out.reserve(self.calldata_len());
        out.push(FieldElement::from_u64(self.data.len() as u64));
        out.extend_from_slice(&self.data);
        out.push(self.pending_word);
        out.push(FieldElement::from_u64(self.pending_word_len as u64));
    }

    pub fn to_calldata(&self) -> Vec<FieldElement> {
        let mut out = Vec::new();
        self.write_to(&mut out);
        out
    }
}

/// Packs at most one word of bytes into a felt.
fn word(chunk: &[u8]) -> Result<FieldElement, EncodingError> {
    if chunk.len() > BYTES_PER_WORD {
        return Err(EncodingError::WordOverflow(chunk.len()));
    }
    FieldElement::from_bytes_be(chunk)
}

/// The low `len` bytes of `word`, if nothing is set above them.
fn word_bytes(word: &FieldElement, len: usize) -> Option<Vec<u8>> {
    let bytes = word.to_bytes_be();
    let (high, low) = bytes.split_at(bytes.len() - len);
    high.iter().all(|b| *b == 0).then(|| low.to_vec())
}
