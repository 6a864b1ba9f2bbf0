#![deny(missing_docs)]

//! Seed key derivation - Complete SDK.
//!
//! Re-exports the primitives and derivation crates for convenient single-crate usage.

pub use keypairs_derive as derive;
pub use keypairs_primitives as primitives;

pub use keypairs_derive::{
    account_public_from_public_generator, derive_keypair, derive_private_key,
    derive_public_generator, derive_scalar, DerivationOptions, DeriveError, KeyPair,
};
