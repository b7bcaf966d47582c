//! crates/checksums/src/md4/digest.rs

use std::fmt;

use super::compress::State;

/// Length of an MD4 digest in bytes.
pub const DIGEST_LEN: usize = 16;

/// A finished 128-bit MD4 digest.
///
/// Formats as 32 lowercase hexadecimal characters through [`Display`](fmt::Display)
/// and [`LowerHex`](fmt::LowerHex).
///
/// # Examples
///
/// ```
/// use checksums::md4;
///
/// let digest = md4(b"abc");
/// assert_eq!(digest.to_string(), "a448017aaf21d8525fc10ae87aa6729d");
/// assert_eq!(digest.as_bytes()[0], 0xa4);
/// ```
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Md4Digest([u8; DIGEST_LEN]);

impl Md4Digest {
    /// Wraps raw digest bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Borrows the digest bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Returns the digest bytes by value.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; DIGEST_LEN] {
        self.0
    }

    /// Renders the digest as lowercase hexadecimal.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("{self:x}")
    }
}

/// Serialises the final state as `A, B, C, D`, each little-endian.
#[must_use]
pub fn emit(state: State) -> Md4Digest {
    let mut bytes = [0_u8; DIGEST_LEN];
    for (out, word) in bytes.chunks_exact_mut(4).zip(state.to_words()) {
        out.copy_from_slice(&word.to_le_bytes());
    }
    Md4Digest(bytes)
}

impl fmt::LowerHex for Md4Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Md4Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Md4Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Md4Digest({self:x})")
    }
}

impl AsRef<[u8]> for Md4Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; DIGEST_LEN]> for Md4Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Md4Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Md4Digest) -> Self {
        digest.0
    }
}

impl PartialEq<[u8; DIGEST_LEN]> for Md4Digest {
    fn eq(&self, other: &[u8; DIGEST_LEN]) -> bool {
        &self.0 == other
    }
}
