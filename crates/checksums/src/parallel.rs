//! crates/checksums/src/parallel.rs
//!
//! Parallel MD4 hashing of independent inputs on the rayon thread pool.
//!
//! Every input gets its own hasher; nothing is shared between tasks, and
//! results come back in input order.
//!
//! # Example
//!
//! ```
//! use checksums::md4;
//! use checksums::parallel::digest_batch;
//!
//! let inputs = [b"input1".as_slice(), b"input2", b"input3"];
//! let digests = digest_batch(&inputs);
//! assert_eq!(digests[1], md4(b"input2"));
//! ```

use rayon::prelude::*;
use std::fs::File;
use std::io;
use std::num::NonZeroUsize;
use std::path::Path;

use crate::md4::{Md4Digest, md4};
use crate::reader::digest_reader;

/// Computes the MD4 digest of every input in parallel.
pub fn digest_batch<T: AsRef<[u8]> + Sync>(inputs: &[T]) -> Vec<Md4Digest> {
    inputs.par_iter().map(|input| md4(input.as_ref())).collect()
}

/// Hashes multiple files in parallel, reading each in `chunk_size` pieces.
///
/// The result for each path is independent: one unreadable file does not
/// affect the others.
///
/// # Example
///
/// ```no_run
/// use checksums::DEFAULT_CHUNK_SIZE;
/// use checksums::parallel::digest_files;
///
/// let paths = ["file1.txt", "file2.txt"];
/// for (path, result) in paths.iter().zip(digest_files(&paths, DEFAULT_CHUNK_SIZE)) {
///     match result {
///         Ok(digest) => println!("{digest}  {path}"),
///         Err(e) => eprintln!("{path}: {e}"),
///     }
/// }
/// ```
pub fn digest_files<P: AsRef<Path> + Sync>(
    paths: &[P],
    chunk_size: NonZeroUsize,
) -> Vec<io::Result<Md4Digest>> {
    paths
        .par_iter()
        .map(|path| {
            let file = File::open(path.as_ref())?;
            digest_reader(file, chunk_size).map(|(digest, _)| digest)
        })
        .collect()
}

/// Extension trait for hashing the items of a parallel iterator.
///
/// # Example
///
/// ```
/// use rayon::prelude::*;
/// use checksums::parallel::ParallelMd4;
///
/// let data = vec![b"hello".to_vec(), b"world".to_vec()];
/// let digests = data.par_iter().md4_digest();
/// assert_eq!(digests.len(), 2);
/// ```
pub trait ParallelMd4 {
    /// Computes the MD4 digest of every item, preserving iteration order.
    fn md4_digest(self) -> Vec<Md4Digest>;
}

impl<I, T> ParallelMd4 for I
where
    I: ParallelIterator<Item = T>,
    T: AsRef<[u8]> + Send,
{
    fn md4_digest(self) -> Vec<Md4Digest> {
        self.map(|item| md4(item.as_ref())).collect()
    }
}
