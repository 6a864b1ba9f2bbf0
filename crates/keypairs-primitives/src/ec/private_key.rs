//! secp256k1 private key produced by seed derivation.
//!
//! Wraps a k256 signing key so the scalar is always non-zero and below the
//! curve order, and exposes the scalar for the modular arithmetic that account
//! derivation performs.

use k256::ecdsa::SigningKey;
use k256::elliptic_curve::zeroize::ZeroizeOnDrop;
use k256::{NonZeroScalar, Scalar};

use crate::ec::public_key::PublicKey;
use crate::PrimitivesError;

/// A secp256k1 private key.
///
/// The wrapped scalar always satisfies `0 < scalar < n`. The signing key wipes
/// its scalar when dropped.
#[derive(Clone, Debug)]
pub struct PrivateKey {
    /// The underlying k256 signing key.
    inner: SigningKey,
}

/// Length of a serialized private key in bytes.
pub const PRIVATE_KEY_BYTES_LEN: usize = 32;

impl PrivateKey {
    /// Create a private key from raw 32-byte scalar.
    ///
    /// # Arguments
    /// * `bytes` - A 32-byte big-endian slice representing the private key scalar.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` if the bytes represent a valid scalar on secp256k1,
    /// or an error if the scalar is zero or out of range.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != PRIVATE_KEY_BYTES_LEN {
            return Err(PrimitivesError::InvalidKeyLength {
                expected: PRIVATE_KEY_BYTES_LEN,
                got: bytes.len(),
            });
        }
        let signing_key = SigningKey::from_bytes(bytes.into())
            .map_err(|e| PrimitivesError::InvalidPrivateKey(e.to_string()))?;
        Ok(PrivateKey { inner: signing_key })
    }

    /// Create a private key from a scalar that is already known to be non-zero.
    pub fn from_nonzero_scalar(scalar: NonZeroScalar) -> Self {
        PrivateKey {
            inner: SigningKey::from(scalar),
        }
    }

    /// Create a private key from an arbitrary scalar.
    ///
    /// # Returns
    /// An error if the scalar is zero, which is not a usable key.
    pub fn from_scalar(scalar: Scalar) -> Result<Self, PrimitivesError> {
        Option::<NonZeroScalar>::from(NonZeroScalar::new(scalar))
            .map(Self::from_nonzero_scalar)
            .ok_or_else(|| PrimitivesError::InvalidPrivateKey("scalar is zero".to_string()))
    }

    /// Serialize the private key as a 32-byte big-endian array.
    pub fn to_bytes(&self) -> [u8; PRIVATE_KEY_BYTES_LEN] {
        let mut out = [0u8; PRIVATE_KEY_BYTES_LEN];
        out.copy_from_slice(&self.inner.to_bytes());
        out
    }

    /// Derive the corresponding public key for this private key.
    pub fn pub_key(&self) -> PublicKey {
        let verifying_key = self.inner.verifying_key();
        PublicKey::from_k256_verifying_key(verifying_key)
    }

    /// The private key as a k256 `Scalar` for arithmetic operations.
    pub fn to_scalar(&self) -> Scalar {
        *self.inner.as_nonzero_scalar().as_ref()
    }
}

impl ZeroizeOnDrop for PrivateKey {}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for PrivateKey {}
