//! A derived private key together with its public key.

use keypairs_primitives::ec::private_key::PrivateKey;
use keypairs_primitives::ec::public_key::PublicKey;

/// Prefix that pads a 32-byte private key to the 33-byte width of a
/// compressed public key in text form.
const PRIVATE_KEY_HEX_PREFIX: &str = "00";

/// A private key and the public key it maps to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPair {
    private_key: PrivateKey,
    public_key: PublicKey,
}

impl KeyPair {
    /// Build a key pair by computing the public key of `private_key`.
    pub fn from_private_key(private_key: PrivateKey) -> Self {
        let public_key = private_key.pub_key();
        KeyPair {
            private_key,
            public_key,
        }
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Uppercase hex of the private key, prefixed with `00` (66 characters).
    pub fn private_key_hex(&self) -> String {
        format!(
            "{}{}",
            PRIVATE_KEY_HEX_PREFIX,
            hex::encode_upper(self.private_key.to_bytes())
        )
    }

    /// Uppercase hex of the compressed public key (66 characters).
    pub fn public_key_hex(&self) -> String {
        hex::encode_upper(self.public_key.to_compressed())
    }
}
