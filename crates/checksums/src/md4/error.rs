//! crates/checksums/src/md4/error.rs

use super::pad::BLOCK_LEN;

/// Raised when a buffer handed to [`split`](super::split) is not a whole
/// number of 64-byte blocks.
///
/// [`pad`](super::pad) always produces whole blocks, so seeing this error
/// means the padded buffer was built or truncated incorrectly.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[error("padded message of {len} bytes is not a multiple of the {block}-byte block size", block = BLOCK_LEN)]
pub struct MalformedInputError {
    len: usize,
}

impl MalformedInputError {
    pub(crate) const fn new(len: usize) -> Self {
        Self { len }
    }

    /// Length of the rejected buffer in bytes.
    #[must_use]
    pub const fn len(self) -> usize {
        self.len
    }

    /// Bytes left over after the last complete block.
    #[must_use]
    pub const fn trailing_bytes(self) -> usize {
        self.len % BLOCK_LEN
    }
}
