//! Seed to account key derivation.
//!
//! A seed hashes to a root scalar, the private generator. Validator keys use
//! it directly. Account keys add an offset hashed from the compressed public
//! generator and the account index, so the account-0 public key can be
//! rebuilt from the public generator alone.

use std::fmt;

use k256::NonZeroScalar;
use keypairs_primitives::ec::curve::{Curve, COMPRESSED_LEN, SECP256K1};
use keypairs_primitives::ec::private_key::PrivateKey;
use keypairs_primitives::ec::public_key::PublicKey;
use keypairs_primitives::hash::{HalfDigest, Sha512Half};
use tracing::{debug, instrument};

use crate::error::DeriveError;
use crate::keypair::KeyPair;
use crate::options::DerivationOptions;
use crate::scalar_deriver::ScalarDeriver;

/// Account index whose public key can be reconstructed from the public generator.
const PUBLIC_ACCOUNT_INDEX: u32 = 0;

/// Derives private keys, public generators and account public keys from seeds.
pub struct KeyDeriver<'c, H = Sha512Half> {
    scalars: ScalarDeriver<'c, H>,
}

impl<'c> KeyDeriver<'c> {
    /// Create a KeyDeriver over `curve` hashing with SHA-512 half.
    pub fn new(curve: &'c Curve) -> Self {
        KeyDeriver {
            scalars: ScalarDeriver::new(curve),
        }
    }
}

impl Default for KeyDeriver<'static> {
    fn default() -> Self {
        Self::new(&SECP256K1)
    }
}

impl<'c, H: HalfDigest> KeyDeriver<'c, H> {
    /// Create a KeyDeriver around an existing scalar deriver.
    pub fn from_scalar_deriver(scalars: ScalarDeriver<'c, H>) -> Self {
        KeyDeriver { scalars }
    }

    /// The curve this deriver works on.
    pub fn curve(&self) -> &'c Curve {
        self.scalars.curve()
    }

    /// The root scalar of a seed, hashed without a discriminator.
    fn private_generator(&self, seed: &[u8]) -> Result<NonZeroScalar, DeriveError> {
        self.scalars.derive(seed, None)
    }

    /// Derive the public generator of a seed: `G * private_generator`.
    pub fn derive_public_generator(&self, seed: &[u8]) -> Result<PublicKey, DeriveError> {
        let private_gen = self.private_generator(seed)?;
        let point = self.curve().mul_base(&private_gen);
        Ok(PublicKey::from_point(&point)?)
    }

    /// Derive the private key selected by `options` from `seed`.
    ///
    /// With `options.validator` set the private generator is returned as is
    /// and `account_index` is ignored. Otherwise the result is
    /// `(offset + private_generator) mod n`, where `offset` is hashed from the
    /// compressed public generator with the account index as discriminator.
    ///
    /// # Returns
    /// The private key, `ExhaustedSearchSpace` if no scalar could be found, or
    /// a primitives error if the sum is zero.
    #[instrument(
        level = "debug",
        skip_all,
        fields(validator = options.validator, account_index = options.account_index)
    )]
    pub fn derive_private_key(
        &self,
        seed: &[u8],
        options: &DerivationOptions,
    ) -> Result<PrivateKey, DeriveError> {
        let private_gen = self.private_generator(seed)?;
        if options.validator {
            debug!("returning root generator");
            return Ok(PrivateKey::from_nonzero_scalar(private_gen));
        }

        let public_gen = self
            .curve()
            .encode_point(&self.curve().mul_base(&private_gen))?;
        let offset = self
            .scalars
            .derive(&public_gen, Some(options.account_index))?;

        Ok(PrivateKey::from_scalar(*offset + *private_gen)?)
    }

    /// Derive a private key and its public key.
    pub fn derive_keypair(
        &self,
        seed: &[u8],
        options: &DerivationOptions,
    ) -> Result<KeyPair, DeriveError> {
        let private_key = self.derive_private_key(seed, options)?;
        Ok(KeyPair::from_private_key(private_key))
    }

    /// Rebuild the account-0 public key from a compressed public generator.
    ///
    /// Computes `P + G * offset` where `P` is the decoded generator and
    /// `offset` is hashed from the same bytes with discriminator 0. Only
    /// account index 0 is reachable this way.
    ///
    /// # Returns
    /// The compressed account public key, or `InvalidEncoding` if the bytes
    /// are not a compressed point on the curve.
    #[instrument(level = "debug", skip_all)]
    pub fn account_public_from_public_generator(
        &self,
        public_gen_bytes: &[u8],
    ) -> Result<[u8; COMPRESSED_LEN], DeriveError> {
        let root_pub_point = self
            .curve()
            .decode_point(public_gen_bytes)
            .map_err(|e| DeriveError::InvalidEncoding(e.to_string()))?;

        let scalar = self
            .scalars
            .derive(public_gen_bytes, Some(PUBLIC_ACCOUNT_INDEX))?;
        let offset = root_pub_point + self.curve().mul_base(&scalar);

        Ok(self.curve().encode_point(&offset)?)
    }
}

impl<H> Clone for KeyDeriver<'_, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H> Copy for KeyDeriver<'_, H> {}

impl<H> fmt::Debug for KeyDeriver<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyDeriver")
            .field("scalars", &self.scalars)
            .finish()
    }
}

/// Derive the private key selected by `options` from `seed` on secp256k1.
///
/// See [`KeyDeriver::derive_private_key`].
pub fn derive_private_key(
    seed: &[u8],
    options: &DerivationOptions,
) -> Result<PrivateKey, DeriveError> {
    KeyDeriver::new(&SECP256K1).derive_private_key(seed, options)
}

/// Derive the public generator of `seed` on secp256k1.
pub fn derive_public_generator(seed: &[u8]) -> Result<PublicKey, DeriveError> {
    KeyDeriver::new(&SECP256K1).derive_public_generator(seed)
}

/// Derive a key pair from `seed` on secp256k1.
pub fn derive_keypair(seed: &[u8], options: &DerivationOptions) -> Result<KeyPair, DeriveError> {
    KeyDeriver::new(&SECP256K1).derive_keypair(seed, options)
}

/// Rebuild the account-0 public key from a compressed public generator on secp256k1.
///
/// See [`KeyDeriver::account_public_from_public_generator`].
pub fn account_public_from_public_generator(
    public_gen_bytes: &[u8],
) -> Result<[u8; COMPRESSED_LEN], DeriveError> {
    KeyDeriver::new(&SECP256K1).account_public_from_public_generator(public_gen_bytes)
}
