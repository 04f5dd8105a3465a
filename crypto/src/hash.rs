//! Blake2b hashing used for address derivation.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};

type Blake2b256 = Blake2b<U32>;

/// Compute a 256-bit Blake2b hash of arbitrary data.
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn blake2b_256_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    for part in parts {
        hasher.update(part);
    }
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        let h1 = blake2b_256(b"membership proof");
        let h2 = blake2b_256(b"membership proof");
        assert_eq!(h1, h2);
    }

    #[test]
    fn distinct_inputs_distinct_digests() {
        assert_ne!(blake2b_256(b"group 7"), blake2b_256(b"group 8"));
    }

    #[test]
    fn empty_input_hashes() {
        assert_ne!(blake2b_256(b""), [0u8; 32]);
    }

    #[test]
    fn multi_matches_concatenation() {
        let single = blake2b_256(b"keybytes\x00");
        let multi = blake2b_256_multi(&[b"keybytes", &[0x00]]);
        assert_eq!(single, multi);
    }
}
