//! crates/checksums/src/strong.rs
//!
//! Streaming strong digests.
//!
//! [`StrongDigest`] is the seam callers use to stay generic over the digest
//! they compute: construct from a seed, feed bytes with
//! [`update`](StrongDigest::update), and read the result with
//! [`finalize`](StrongDigest::finalize).

mod md4;

#[cfg(test)]
mod md4_tests;

pub use md4::Md4;

/// Incremental digest that can be fed data in arbitrary pieces.
///
/// Implementations must produce the same digest regardless of how the input
/// is split across [`update`](Self::update) calls.
pub trait StrongDigest: Sized {
    /// Value that parameterises a fresh hasher (`()` for unseeded digests).
    type Seed: Default;
    /// Finished digest type.
    type Digest: AsRef<[u8]> + Copy;
    /// Length of [`Self::Digest`] in bytes.
    const DIGEST_LEN: usize;

    /// Creates a hasher with an empty message and the supplied seed.
    fn with_seed(seed: Self::Seed) -> Self;

    /// Appends `data` to the message.
    fn update(&mut self, data: &[u8]);

    /// Consumes the hasher and returns the digest of everything fed so far.
    fn finalize(self) -> Self::Digest;

    /// Hashes `data` in one call using the default seed.
    fn digest(data: &[u8]) -> Self::Digest {
        let mut hasher = Self::with_seed(Self::Seed::default());
        hasher.update(data);
        hasher.finalize()
    }
}
