//! Hash function primitives for seed-based key derivation.
//!
//! Provides SHA-512 and SHA-512 half (the first 256 bits of a SHA-512
//! digest), plus a streaming hasher that accumulates byte strings and
//! big-endian `u32` values before truncating the digest.

use sha2::{Digest, Sha512};

/// Length in bytes of a SHA-512 half digest.
pub const HALF_DIGEST_LEN: usize = 32;

/// A streaming hash whose output is consumed as a 256-bit big-endian integer.
///
/// Key derivation only needs to feed bytes and counters into the hash and read
/// back the first 256 bits, so any digest of at least that width can sit behind
/// this trait.
pub trait HalfDigest: Default {
    /// Feed a byte string into the hash.
    fn add(&mut self, data: &[u8]);

    /// Feed a `u32` into the hash as four big-endian bytes.
    fn add_u32(&mut self, value: u32) {
        self.add(&value.to_be_bytes());
    }

    /// Finalize and return the first 256 bits of the digest.
    fn first_256(self) -> [u8; HALF_DIGEST_LEN];
}

/// Streaming SHA-512 hasher truncated to 256 bits.
#[derive(Clone, Default)]
pub struct Sha512Half {
    inner: Sha512,
}

impl Sha512Half {
    /// Create an empty hasher.
    pub fn new() -> Self {
        Self::default()
    }
}

impl HalfDigest for Sha512Half {
    fn add(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    fn first_256(self) -> [u8; HALF_DIGEST_LEN] {
        let digest = self.inner.finalize();
        let mut output = [0u8; HALF_DIGEST_LEN];
        output.copy_from_slice(&digest[..HALF_DIGEST_LEN]);
        output
    }
}

/// Compute SHA-512 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 64-byte SHA-512 digest.
pub fn sha512(data: &[u8]) -> [u8; 64] {
    let mut hasher = Sha512::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 64];
    output.copy_from_slice(&result);
    output
}

/// Compute SHA-512 half: the first 32 bytes of SHA-512(data).
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte truncated SHA-512 digest.
pub fn sha512_half(data: &[u8]) -> [u8; HALF_DIGEST_LEN] {
    let mut hasher = Sha512Half::new();
    hasher.add(data);
    hasher.first_256()
}
