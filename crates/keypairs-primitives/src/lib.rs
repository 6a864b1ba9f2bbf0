/// Seed key derivation - cryptographic primitives.
///
/// This crate provides the foundational building blocks for deriving
/// secp256k1 account keys from seeds:
/// - Hash functions (SHA-512, SHA-512 half, streaming half-digest)
/// - secp256k1 curve parameters and point encoding
/// - Private and public key value types

pub mod hash;
pub mod ec;

mod error;
pub use error::PrimitivesError;
