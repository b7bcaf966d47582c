use std::fmt;

use logging::trace_hash;

use super::StrongDigest;
use crate::md4::{
    BLOCK_LEN, Block, DIGEST_LEN, Md4Digest, State, block_count, blocks, emit, pad_tail,
};

/// Streaming MD4 hasher.
///
/// Whole blocks are compressed as soon as they are available; at most one
/// partial block is buffered between [`update`](Self::update) calls. The
/// digest is identical to [`md4`](crate::md4::md4) over the concatenation of
/// every update.
///
/// # Examples
///
/// ```
/// use checksums::strong::Md4;
///
/// let mut hasher = Md4::new();
/// hasher.update(b"message ");
/// hasher.update(b"digest");
/// assert_eq!(hasher.finalize().to_hex(), "d9130a8164549fe818874806e1c7014b");
/// ```
#[derive(Clone)]
pub struct Md4 {
    state: State,
    buffer: [u8; BLOCK_LEN],
    buffered: usize,
    len: u64,
}

impl fmt::Debug for Md4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Md4")
            .field("len", &self.len)
            .field("buffered", &self.buffered)
            .finish_non_exhaustive()
    }
}

impl Default for Md4 {
    fn default() -> Self {
        Self::new()
    }
}

impl Md4 {
    /// Creates a hasher with an empty message.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: State::INITIAL,
            buffer: [0_u8; BLOCK_LEN],
            buffered: 0,
            len: 0,
        }
    }

    /// Number of message bytes fed so far, modulo 2^64.
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.len
    }

    /// Reports whether no message bytes have been fed yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Feeds additional bytes into the digest state.
    pub fn update(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }
        self.len = self.len.wrapping_add(data.len() as u64);

        let mut data = data;
        if self.buffered > 0 {
            let take = (BLOCK_LEN - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];

            if self.buffered < BLOCK_LEN {
                return;
            }
            self.state = self.state.compress(&Block::from_bytes(&self.buffer));
            self.buffered = 0;
        }

        let whole = data.len() - data.len() % BLOCK_LEN;
        self.state = blocks(&data[..whole]).fold(self.state, |state, block| state.compress(&block));

        let rest = &data[whole..];
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffered = rest.len();
    }

    /// Pads the buffered tail and returns the 128-bit digest.
    #[must_use]
    pub fn finalize(self) -> Md4Digest {
        let (tail, used) = pad_tail(&self.buffer[..self.buffered], self.len);
        let state = blocks(&tail[..used]).fold(self.state, |state, block| state.compress(&block));
        let digest = emit(state);

        trace_hash!(
            bytes = self.len,
            blocks = block_count(self.len),
            "md4 {digest} over {} bytes",
            self.len
        );
        digest
    }

    /// Computes the MD4 digest for `data` in one shot.
    #[must_use]
    pub fn digest(data: &[u8]) -> Md4Digest {
        <Self as StrongDigest>::digest(data)
    }
}

impl StrongDigest for Md4 {
    type Seed = ();
    type Digest = Md4Digest;
    const DIGEST_LEN: usize = DIGEST_LEN;

    fn with_seed((): Self::Seed) -> Self {
        Self::new()
    }

    fn update(&mut self, data: &[u8]) {
        self.update(data);
    }

    fn finalize(self) -> Self::Digest {
        self.finalize()
    }
}
