//! Hash-to-scalar search.
//!
//! A scalar is found by hashing `bytes ++ [discriminator] ++ counter` and
//! reading the first 256 bits of the digest as a big-endian integer. The first
//! counter whose candidate lies in `(0, n)` wins. The counter range is bounded,
//! so the search either returns a scalar or reports exhaustion.

use std::fmt;
use std::marker::PhantomData;

use k256::NonZeroScalar;
use keypairs_primitives::ec::curve::{Curve, SECP256K1};
use keypairs_primitives::hash::{HalfDigest, Sha512Half};
use tracing::{error, trace};

use crate::error::DeriveError;

/// Derives scalars below the curve order from arbitrary bytes.
pub struct ScalarDeriver<'c, H = Sha512Half> {
    curve: &'c Curve,
    max_counter: u32,
    hasher: PhantomData<fn() -> H>,
}

impl<'c> ScalarDeriver<'c> {
    /// A deriver over `curve` hashing with SHA-512 half and searching the full
    /// `u32` counter range.
    pub fn new(curve: &'c Curve) -> Self {
        Self::with_hasher(curve)
    }
}

impl Default for ScalarDeriver<'static> {
    fn default() -> Self {
        Self::new(&SECP256K1)
    }
}

impl<'c, H: HalfDigest> ScalarDeriver<'c, H> {
    /// A deriver over `curve` using the hash `H`.
    pub fn with_hasher(curve: &'c Curve) -> Self {
        ScalarDeriver {
            curve,
            max_counter: u32::MAX,
            hasher: PhantomData,
        }
    }

    /// Limit the search to counters `0..=max_counter`.
    pub fn with_max_counter(mut self, max_counter: u32) -> Self {
        self.max_counter = max_counter;
        self
    }

    /// The curve whose order bounds the derived scalars.
    pub fn curve(&self) -> &'c Curve {
        self.curve
    }

    /// Derive a scalar in `(0, n)` from `bytes`.
    ///
    /// When present, `discriminator` is hashed between the bytes and the
    /// counter, giving an independent scalar stream for the same input.
    ///
    /// # Returns
    /// The first in-range candidate, or `ExhaustedSearchSpace` when every
    /// counter value was rejected.
    pub fn derive(
        &self,
        bytes: &[u8],
        discriminator: Option<u32>,
    ) -> Result<NonZeroScalar, DeriveError> {
        for counter in 0..=self.max_counter {
            let mut hasher = H::default();
            hasher.add(bytes);
            if let Some(discriminator) = discriminator {
                hasher.add_u32(discriminator);
            }
            hasher.add_u32(counter);

            if let Some(scalar) = self.curve.scalar_in_range(&hasher.first_256()) {
                return Ok(scalar);
            }
            trace!(counter, "hash candidate outside (0, n), retrying");
        }

        let attempts = u64::from(self.max_counter) + 1;
        error!(attempts, "scalar search space exhausted");
        Err(DeriveError::ExhaustedSearchSpace { attempts })
    }
}

impl<H> Clone for ScalarDeriver<'_, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H> Copy for ScalarDeriver<'_, H> {}

impl<H> fmt::Debug for ScalarDeriver<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarDeriver")
            .field("max_counter", &self.max_counter)
            .finish_non_exhaustive()
    }
}

/// Derive a scalar on secp256k1 with SHA-512 half.
///
/// See [`ScalarDeriver::derive`].
pub fn derive_scalar(
    bytes: &[u8],
    discriminator: Option<u32>,
) -> Result<NonZeroScalar, DeriveError> {
    ScalarDeriver::new(&SECP256K1).derive(bytes, discriminator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use keypairs_primitives::ec::private_key::PrivateKey;
    use keypairs_primitives::hash::sha512_half;

    /// Always returns the largest 256-bit value, which is never below the order.
    #[derive(Default)]
    struct SaturatedHasher;

    impl HalfDigest for SaturatedHasher {
        fn add(&mut self, _data: &[u8]) {}

        fn first_256(self) -> [u8; 32] {
            [0xff; 32]
        }
    }

    /// Returns the last fed chunk right-aligned in a zeroed digest, so the
    /// candidate equals the counter.
    #[derive(Default)]
    struct CounterEchoHasher {
        last: Vec<u8>,
    }

    impl HalfDigest for CounterEchoHasher {
        fn add(&mut self, data: &[u8]) {
            self.last = data.to_vec();
        }

        fn first_256(self) -> [u8; 32] {
            let mut out = [0u8; 32];
            let n = self.last.len().min(32);
            out[32 - n..].copy_from_slice(&self.last[self.last.len() - n..]);
            out
        }
    }

    fn scalar_bytes(scalar: &NonZeroScalar) -> [u8; 32] {
        scalar.to_bytes().into()
    }

    #[test]
    fn test_matches_direct_hash() {
        let seed = b"scalar deriver seed";
        let scalar = derive_scalar(seed, None).unwrap();

        let mut preimage = seed.to_vec();
        preimage.extend_from_slice(&0u32.to_be_bytes());
        let candidate = sha512_half(&preimage);
        // A first-round miss has probability ~2^-128.
        assert_eq!(scalar_bytes(&scalar), candidate);
    }

    #[test]
    fn test_discriminator_is_hashed_before_counter() {
        let seed = b"scalar deriver seed";
        let scalar = derive_scalar(seed, Some(7)).unwrap();

        let mut preimage = seed.to_vec();
        preimage.extend_from_slice(&7u32.to_be_bytes());
        preimage.extend_from_slice(&0u32.to_be_bytes());
        assert_eq!(scalar_bytes(&scalar), sha512_half(&preimage));
    }

    #[test]
    fn test_deterministic() {
        let seed = [0x5au8; 16];
        for discriminator in [None, Some(0), Some(1), Some(u32::MAX)] {
            let a = derive_scalar(&seed, discriminator).unwrap();
            let b = derive_scalar(&seed, discriminator).unwrap();
            assert_eq!(scalar_bytes(&a), scalar_bytes(&b));
        }
    }

    #[test]
    fn test_result_is_valid_private_key() {
        for len in 0..32usize {
            let seed: Vec<u8> = (0..len as u8).collect();
            let scalar = derive_scalar(&seed, None).unwrap();
            assert!(PrivateKey::from_bytes(&scalar_bytes(&scalar)).is_ok());
        }
    }

    #[test]
    fn test_discriminator_streams_differ() {
        for fill in [0x00u8, 0x01, 0x7f, 0xff] {
            let seed = [fill; 16];
            let none = scalar_bytes(&derive_scalar(&seed, None).unwrap());
            let zero = scalar_bytes(&derive_scalar(&seed, Some(0)).unwrap());
            let one = scalar_bytes(&derive_scalar(&seed, Some(1)).unwrap());
            assert_ne!(none, zero);
            assert_ne!(none, one);
            assert_ne!(zero, one);
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(derive_scalar(&[], None).is_ok());
        assert!(derive_scalar(&[], Some(0)).is_ok());
    }

    #[test]
    fn test_zero_candidate_rejected() {
        let deriver = ScalarDeriver::<CounterEchoHasher>::with_hasher(&SECP256K1);
        // Counter 0 yields candidate 0, counter 1 yields candidate 1.
        let scalar = deriver.derive(b"seed", None).unwrap();
        assert_eq!(*scalar, k256::Scalar::ONE);

        let scalar = deriver.derive(b"seed", Some(9)).unwrap();
        assert_eq!(*scalar, k256::Scalar::ONE);
    }

    #[test]
    fn test_exhausted_search_space() {
        let deriver =
            ScalarDeriver::<SaturatedHasher>::with_hasher(&SECP256K1).with_max_counter(15);
        match deriver.derive(b"seed", None) {
            Err(DeriveError::ExhaustedSearchSpace { attempts }) => assert_eq!(attempts, 16),
            Err(e) => panic!("expected ExhaustedSearchSpace, got {:?}", e),
            Ok(_) => panic!("expected ExhaustedSearchSpace, got a scalar"),
        }
    }

    #[test]
    fn test_counter_bound_is_inclusive() {
        let deriver = ScalarDeriver::<CounterEchoHasher>::with_hasher(&SECP256K1);
        // Only counter 0 is tried, and its candidate is zero.
        assert!(matches!(
            deriver.with_max_counter(0).derive(b"seed", None),
            Err(DeriveError::ExhaustedSearchSpace { attempts: 1 })
        ));
        // Counter 1 is inside the bound.
        assert!(deriver.with_max_counter(1).derive(b"seed", None).is_ok());
    }

    #[test]
    fn test_full_range_attempt_count() {
        let deriver: ScalarDeriver = ScalarDeriver::default();
        assert_eq!(deriver.max_counter, u32::MAX);
        assert!(format!("{:?}", deriver).contains("4294967295"));
    }
}
