/// Elliptic curve primitives on secp256k1.
///
/// Provides the curve parameters used for derivation plus the private and
/// public key value types produced from them.

pub mod curve;
pub mod private_key;
pub mod public_key;

pub use curve::{Curve, COMPRESSED_LEN, SECP256K1};
pub use private_key::PrivateKey;
pub use public_key::PublicKey;
