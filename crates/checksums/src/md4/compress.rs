//! crates/checksums/src/md4/compress.rs
//!
//! The three-round MD4 compression function (RFC 1320 section 3.4).
//!
//! Every addition wraps modulo 2^32. The round 3 word order (`0, 2, 1, 3`
//! through offsets `i, i+8, i+4, i+12`) is fixed by the RFC; any other order
//! yields a different digest.

use super::block::Block;

/// Additive constant for round 2 (`sqrt(2) * 2^30`).
const ROUND2_CONSTANT: u32 = 0x5A82_7999;

/// Additive constant for round 3 (`sqrt(3) * 2^30`).
const ROUND3_CONSTANT: u32 = 0x6ED9_EBA1;

/// The 128-bit chaining state `(A, B, C, D)`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct State {
    /// Word A.
    pub a: u32,
    /// Word B.
    pub b: u32,
    /// Word C.
    pub c: u32,
    /// Word D.
    pub d: u32,
}

impl State {
    /// Canonical RFC 1320 initial values.
    pub const INITIAL: Self = Self {
        a: 0x6745_2301,
        b: 0xEFCD_AB89,
        c: 0x98BA_DCFE,
        d: 0x1032_5476,
    };

    /// Runs the compression function over `block` and returns the next state.
    #[must_use]
    pub fn compress(self, block: &Block) -> Self {
        compress(self, block)
    }

    /// The state words in `A, B, C, D` order.
    #[must_use]
    pub const fn to_words(self) -> [u32; 4] {
        [self.a, self.b, self.c, self.d]
    }
}

impl Default for State {
    fn default() -> Self {
        Self::INITIAL
    }
}

#[inline(always)]
const fn f(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

#[inline(always)]
const fn g(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (x & z) | (y & z)
}

#[inline(always)]
const fn h(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

#[inline(always)]
const fn ff(a: u32, b: u32, c: u32, d: u32, x: u32, s: u32) -> u32 {
    a.wrapping_add(f(b, c, d)).wrapping_add(x).rotate_left(s)
}

#[inline(always)]
const fn gg(a: u32, b: u32, c: u32, d: u32, x: u32, s: u32) -> u32 {
    a.wrapping_add(g(b, c, d))
        .wrapping_add(x)
        .wrapping_add(ROUND2_CONSTANT)
        .rotate_left(s)
}

#[inline(always)]
const fn hh(a: u32, b: u32, c: u32, d: u32, x: u32, s: u32) -> u32 {
    a.wrapping_add(h(b, c, d))
        .wrapping_add(x)
        .wrapping_add(ROUND3_CONSTANT)
        .rotate_left(s)
}

/// Advances `state` by one block.
///
/// Pure: the incoming state is not modified; the caller threads the returned
/// state into the next block.
#[must_use]
pub fn compress(state: State, block: &Block) -> State {
    let x = block.words();
    let State {
        mut a,
        mut b,
        mut c,
        mut d,
    } = state;

    for i in [0, 4, 8, 12] {
        a = ff(a, b, c, d, x[i], 3);
        d = ff(d, a, b, c, x[i + 1], 7);
        c = ff(c, d, a, b, x[i + 2], 11);
        b = ff(b, c, d, a, x[i + 3], 19);
    }

    for i in [0, 1, 2, 3] {
        a = gg(a, b, c, d, x[i], 3);
        d = gg(d, a, b, c, x[i + 4], 5);
        c = gg(c, d, a, b, x[i + 8], 9);
        b = gg(b, c, d, a, x[i + 12], 13);
    }

    for i in [0, 2, 1, 3] {
        a = hh(a, b, c, d, x[i], 3);
        d = hh(d, a, b, c, x[i + 8], 9);
        c = hh(c, d, a, b, x[i + 4], 11);
        b = hh(b, c, d, a, x[i + 12], 15);
    }

    State {
        a: state.a.wrapping_add(a),
        b: state.b.wrapping_add(b),
        c: state.c.wrapping_add(c),
        d: state.d.wrapping_add(d),
    }
}
