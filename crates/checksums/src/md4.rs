//! crates/checksums/src/md4.rs
//!
//! From-scratch MD4 message digest (RFC 1320).
//!
//! The computation runs as four stages:
//!
//! 1. [`pad`] appends the marker byte, zero fill, and the little-endian bit
//!    length so the message becomes a whole number of 64-byte blocks.
//! 2. [`split`] views the padded bytes as [`Block`]s of sixteen little-endian
//!    words.
//! 3. [`compress`] folds every block into the running [`State`], starting
//!    from [`State::INITIAL`].
//! 4. [`emit`] serialises the final state into an [`Md4Digest`].
//!
//! [`md4`] chains the stages for a complete message. Use
//! [`strong::Md4`](crate::strong::Md4) when the message arrives in pieces.
//!
//! MD4 is cryptographically broken; it is provided for interoperability with
//! formats that still use it.
//!
//! # Examples
//!
//! ```
//! use checksums::md4::{State, emit, md4, pad, split};
//!
//! let message = b"message digest";
//! let blocks = split(&pad(message)).unwrap();
//! let state = blocks
//!     .iter()
//!     .fold(State::INITIAL, |state, block| state.compress(block));
//!
//! assert_eq!(emit(state), md4(message));
//! assert_eq!(md4(message).to_hex(), "d9130a8164549fe818874806e1c7014b");
//! ```

mod block;
mod compress;
mod digest;
mod error;
mod pad;

pub(crate) use block::blocks;
pub use block::{Block, WORDS_PER_BLOCK, split};
pub use compress::{State, compress};
pub use digest::{DIGEST_LEN, Md4Digest, emit};
pub use error::MalformedInputError;
pub(crate) use pad::pad_tail;
pub use pad::{BLOCK_LEN, block_count, pad, padded_len};

/// Computes the MD4 digest of `message`.
///
/// Deterministic and free of shared state; independent calls may run on
/// different threads.
///
/// # Examples
///
/// ```
/// use checksums::md4;
///
/// assert_eq!(md4(b"").to_hex(), "31d6cfe0d16ae931b73c59d7e0c089c0");
/// ```
#[must_use]
pub fn md4(message: &[u8]) -> Md4Digest {
    let padded = pad(message);
    match split(&padded) {
        Ok(blocks) => emit(
            blocks
                .iter()
                .fold(State::INITIAL, |state, block| state.compress(block)),
        ),
        Err(error) => unreachable!("padding produced a malformed buffer: {error}"),
    }
}
