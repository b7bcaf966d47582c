//! crates/checksums/src/md4/block.rs
//!
//! Splits a padded message into 512-bit blocks of sixteen little-endian words.

use super::error::MalformedInputError;
use super::pad::BLOCK_LEN;

/// Number of 32-bit words in one block.
pub const WORDS_PER_BLOCK: usize = BLOCK_LEN / 4;

/// One 64-byte block viewed as sixteen little-endian `u32` words.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Block {
    words: [u32; WORDS_PER_BLOCK],
}

impl Block {
    /// Interprets 64 bytes as a block; word `j` is bytes `4j..4j+4` read
    /// little-endian.
    #[must_use]
    pub fn from_bytes(bytes: &[u8; BLOCK_LEN]) -> Self {
        Self::from_chunk(bytes)
    }

    /// Builds a block from a slice known to be exactly [`BLOCK_LEN`] bytes.
    pub(crate) fn from_chunk(chunk: &[u8]) -> Self {
        debug_assert_eq!(chunk.len(), BLOCK_LEN);

        let mut words = [0_u32; WORDS_PER_BLOCK];
        for (word, bytes) in words.iter_mut().zip(chunk.chunks_exact(4)) {
            *word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        }
        Self { words }
    }

    /// The sixteen message words of this block.
    #[must_use]
    pub const fn words(&self) -> &[u32; WORDS_PER_BLOCK] {
        &self.words
    }
}

/// Partitions `padded` into consecutive blocks, in order.
///
/// # Errors
///
/// Returns [`MalformedInputError`] when `padded.len()` is not a multiple of
/// [`BLOCK_LEN`].
///
/// # Examples
///
/// ```
/// use checksums::md4::{pad, split};
///
/// let blocks = split(&pad(&[0_u8; 100])).unwrap();
/// assert_eq!(blocks.len(), 2);
/// assert!(split(&[0_u8; 65]).is_err());
/// ```
pub fn split(padded: &[u8]) -> Result<Vec<Block>, MalformedInputError> {
    if padded.len() % BLOCK_LEN != 0 {
        return Err(MalformedInputError::new(padded.len()));
    }
    Ok(blocks(padded).collect())
}

/// Iterates over the whole blocks in `data`, ignoring any trailing partial block.
pub(crate) fn blocks(data: &[u8]) -> impl Iterator<Item = Block> + '_ {
    data.chunks_exact(BLOCK_LEN).map(Block::from_chunk)
}
