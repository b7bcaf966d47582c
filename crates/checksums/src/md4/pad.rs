//! crates/checksums/src/md4/pad.rs
//!
//! Length normalisation: the `0x80` marker byte, zero fill, and the 64-bit
//! little-endian bit count that closes every MD4 message.

/// Size of one MD4 block in bytes (512 bits).
pub const BLOCK_LEN: usize = 64;

/// Width of the trailing bit-length field in bytes.
const LENGTH_FIELD_LEN: usize = 8;

/// Marker appended directly after the message (a single `1` bit).
const MARKER: u8 = 0x80;

/// Returns the length of the padded form of a `message_len`-byte message.
///
/// The result is the smallest positive multiple of [`BLOCK_LEN`] that leaves
/// room for the marker byte and the length field, i.e.
/// `ceil((message_len + 9) / 64) * 64`.
///
/// # Examples
///
/// ```
/// use checksums::md4::padded_len;
///
/// assert_eq!(padded_len(0), 64);
/// assert_eq!(padded_len(55), 64);
/// assert_eq!(padded_len(56), 128);
/// ```
#[must_use]
pub const fn padded_len(message_len: usize) -> usize {
    (message_len + 1 + LENGTH_FIELD_LEN).div_ceil(BLOCK_LEN) * BLOCK_LEN
}

/// Number of blocks the compressor runs over for a `message_len`-byte message.
#[must_use]
pub const fn block_count(message_len: u64) -> u64 {
    let tail = message_len % BLOCK_LEN as u64;
    let tail_blocks = if tail + 1 + LENGTH_FIELD_LEN as u64 > BLOCK_LEN as u64 {
        2
    } else {
        1
    };
    message_len / BLOCK_LEN as u64 + tail_blocks
}

/// Pads `message` to a whole number of blocks.
///
/// Appends `0x80`, then the fewest zero bytes that bring the length to 56
/// modulo 64, then `8 * message.len()` (mod 2^64) as eight little-endian
/// bytes.
///
/// # Examples
///
/// ```
/// use checksums::md4::pad;
///
/// let padded = pad(b"abc");
/// assert_eq!(padded.len(), 64);
/// assert_eq!(padded[3], 0x80);
/// assert_eq!(&padded[56..], &24_u64.to_le_bytes());
/// ```
#[must_use]
pub fn pad(message: &[u8]) -> Vec<u8> {
    let whole = message.len() - message.len() % BLOCK_LEN;
    let (tail, used) = pad_tail(&message[whole..], message.len() as u64);

    let mut padded = Vec::with_capacity(padded_len(message.len()));
    padded.extend_from_slice(&message[..whole]);
    padded.extend_from_slice(&tail[..used]);
    padded
}

/// Pads the final partial block of a message.
///
/// `tail` holds the trailing `message_len % 64` bytes; `message_len` is the
/// length of the whole message, which may have been streamed in pieces. The
/// returned buffer holds one or two blocks; the second element says how many
/// of its bytes are meaningful.
pub(crate) fn pad_tail(tail: &[u8], message_len: u64) -> ([u8; 2 * BLOCK_LEN], usize) {
    debug_assert!(tail.len() < BLOCK_LEN);

    let mut buffer = [0_u8; 2 * BLOCK_LEN];
    buffer[..tail.len()].copy_from_slice(tail);
    buffer[tail.len()] = MARKER;

    let used = padded_len(tail.len());
    let length_field = bit_length(message_len).to_le_bytes();
    buffer[used - LENGTH_FIELD_LEN..used].copy_from_slice(&length_field);
    (buffer, used)
}

/// Message length in bits, reduced modulo 2^64.
const fn bit_length(message_len: u64) -> u64 {
    message_len.wrapping_mul(8)
}
