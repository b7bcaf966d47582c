//! Tests for the streaming MD4 hasher.
//!
//! Covers:
//! - RFC 1320 test vectors
//! - Empty input handling
//! - Block boundary sizes
//! - Streaming with arbitrary chunkings
//! - Comparison with the RustCrypto `md4` crate

#[cfg(test)]
mod tests {
    use crate::md4::{BLOCK_LEN, md4};
    use crate::strong::{Md4, StrongDigest};
    use md4_ref::Digest;

    fn reference(data: &[u8]) -> [u8; 16] {
        md4_ref::Md4::digest(data).into()
    }

    // ========================================================================
    // RFC 1320 Test Vectors
    // ========================================================================

    #[test]
    fn md4_rfc1320_suite() {
        let vectors: [(&[u8], &str); 7] = [
            (b"", "31d6cfe0d16ae931b73c59d7e0c089c0"),
            (b"a", "bde52cb31de33e46245e05fbdbd6fb24"),
            (b"abc", "a448017aaf21d8525fc10ae87aa6729d"),
            (b"message digest", "d9130a8164549fe818874806e1c7014b"),
            (
                b"abcdefghijklmnopqrstuvwxyz",
                "d79e1c308aa5bbcdeea8ed63df412da9",
            ),
            (
                b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
                "043f8582f241db351ce627e153e7f0e4",
            ),
            (
                b"12345678901234567890123456789012345678901234567890123456789012345678901234567890",
                "e33b4ddc9c38f2199c3e7b164fcc0536",
            ),
        ];

        for (input, expected) in vectors {
            assert_eq!(Md4::digest(input).to_hex(), expected);
            assert_eq!(md4(input).to_hex(), expected);
        }
    }

    // ========================================================================
    // Empty Input Tests
    // ========================================================================

    #[test]
    fn md4_empty_input_with_empty_updates() {
        let mut hasher = Md4::new();
        hasher.update(b"");
        hasher.update(b"");
        assert!(hasher.is_empty());
        assert_eq!(hasher.finalize().to_hex(), "31d6cfe0d16ae931b73c59d7e0c089c0");
    }

    // ========================================================================
    // Block Boundary Tests
    // ========================================================================

    #[test]
    fn md4_block_boundary_sizes_match_reference() {
        for size in [55, 56, 57, 63, 64, 65, 119, 120, 127, 128, 129, 191, 192, 193] {
            let data: Vec<u8> = (0..size).map(|i| (i % 251) as u8).collect();
            assert_eq!(md4(&data), reference(&data), "size {size}");
            assert_eq!(Md4::digest(&data), reference(&data), "size {size}");
        }
    }

    #[test]
    fn md4_multi_block_pattern_matches_reference() {
        let data: Vec<u8> = b"0123456789abcdef".iter().copied().cycle().take(200).collect();
        assert!(data.len() > 3 * BLOCK_LEN);
        assert_eq!(md4(&data), reference(&data));
    }

    #[test]
    fn md4_1mb_incremental_equals_oneshot() {
        let data = vec![0x56_u8; 1024 * 1024];
        let oneshot = md4(&data);

        let mut hasher = Md4::new();
        for chunk in data.chunks(64 * 1024 + 3) {
            hasher.update(chunk);
        }

        assert_eq!(hasher.finalize(), oneshot);
        assert_eq!(oneshot, reference(&data));
    }

    // ========================================================================
    // Streaming API Tests
    // ========================================================================

    #[test]
    fn md4_streaming_byte_by_byte() {
        let data = b"The quick brown fox jumps over the lazy dog";

        let mut hasher = Md4::new();
        for &byte in data {
            hasher.update(&[byte]);
        }

        assert_eq!(hasher.finalize().to_hex(), "1bee69a46ba811185c194762abaeae90");
    }

    #[test]
    fn md4_streaming_various_chunk_sizes() {
        let data: Vec<u8> = (0..1000).map(|i| (i % 256) as u8).collect();
        let expected = md4(&data);

        for chunk_size in [1, 2, 3, 5, 7, 13, 17, 31, 63, 64, 65, 100, 256, 500] {
            let mut hasher = Md4::new();
            for chunk in data.chunks(chunk_size) {
                hasher.update(chunk);
            }
            assert_eq!(
                hasher.finalize(),
                expected,
                "chunk size {chunk_size} should produce same result"
            );
        }
    }

    #[test]
    fn md4_streaming_split_at_every_position() {
        let data: Vec<u8> = (0..150_u8).collect();
        let expected = md4(&data);

        for split_pos in 0..=data.len() {
            let mut hasher = Md4::new();
            hasher.update(&data[..split_pos]);
            hasher.update(&data[split_pos..]);
            assert_eq!(hasher.finalize(), expected, "split at {split_pos}");
        }
    }

    #[test]
    fn md4_clone_during_streaming() {
        let mut hasher = Md4::new();
        hasher.update(b"first part");
        let mut cloned = hasher.clone();

        hasher.update(b" second part");
        cloned.update(b" different");

        assert_eq!(hasher.finalize(), md4(b"first part second part"));
        assert_eq!(cloned.finalize(), md4(b"first part different"));
    }

    // ========================================================================
    // StrongDigest Trait
    // ========================================================================

    fn digest_generic<D: StrongDigest>(parts: &[&[u8]]) -> D::Digest {
        let mut hasher = D::with_seed(D::Seed::default());
        for part in parts {
            hasher.update(part);
        }
        hasher.finalize()
    }

    #[test]
    fn md4_through_strong_digest_trait() {
        let digest = digest_generic::<Md4>(&[b"ab", b"c"]);
        assert_eq!(digest.as_ref().len(), <Md4 as StrongDigest>::DIGEST_LEN);
        assert_eq!(digest, <Md4 as StrongDigest>::digest(b"abc"));
        assert_eq!(digest.to_hex(), "a448017aaf21d8525fc10ae87aa6729d");
    }
}
