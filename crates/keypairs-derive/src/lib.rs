/// Seed key derivation - account keys from seeds.
///
/// Hashes a seed into a root scalar (the private generator), derives
/// per-account private keys by adding hashed offsets, and rebuilds the
/// account-0 public key from the public generator alone.

mod error;
pub use error::DeriveError;

pub mod options;
pub mod scalar_deriver;
pub mod key_deriver;
pub mod keypair;

pub use key_deriver::{
    account_public_from_public_generator, derive_keypair, derive_private_key,
    derive_public_generator, KeyDeriver,
};
pub use keypair::KeyPair;
pub use options::DerivationOptions;
pub use scalar_deriver::{derive_scalar, ScalarDeriver};
