//! crates/checksums/src/reader.rs
//!
//! Chunked hashing of [`Read`] sources.

use std::io::{self, Read};
use std::num::NonZeroUsize;

use logging::{trace_io, trace_io_chunk};

use crate::md4::Md4Digest;
use crate::strong::Md4;

/// Chunk size used when callers have no preference (8 KiB).
pub const DEFAULT_CHUNK_SIZE: NonZeroUsize = match NonZeroUsize::new(8 * 1024) {
    Some(size) => size,
    None => unreachable!(),
};

/// Hashes everything `reader` yields, reading `chunk_size` bytes at a time.
///
/// Returns the digest together with the number of bytes consumed. Reads
/// interrupted by a signal are retried.
///
/// # Errors
///
/// Propagates the first I/O error other than [`io::ErrorKind::Interrupted`];
/// no digest is produced in that case.
///
/// # Examples
///
/// ```
/// use checksums::{DEFAULT_CHUNK_SIZE, digest_reader, md4};
///
/// let data = vec![7_u8; 20_000];
/// let (digest, len) = digest_reader(data.as_slice(), DEFAULT_CHUNK_SIZE)?;
/// assert_eq!(len, 20_000);
/// assert_eq!(digest, md4(&data));
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn digest_reader<R: Read>(
    mut reader: R,
    chunk_size: NonZeroUsize,
) -> io::Result<(Md4Digest, u64)> {
    let mut hasher = Md4::new();
    let mut buffer = vec![0_u8; chunk_size.get()];
    let mut chunks = 0_u64;

    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(read) => read,
            Err(error) if error.kind() == io::ErrorKind::Interrupted => continue,
            Err(error) => return Err(error),
        };
        hasher.update(&buffer[..read]);
        chunks += 1;
        trace_io_chunk!(chunk = chunks, bytes = read, "read chunk");
    }

    let total = hasher.len();
    trace_io!(bytes = total, chunks, "read {total} bytes in {chunks} chunks");
    Ok((hasher.finalize(), total))
}
