//! Options selecting which key a seed derives.

use serde::{Deserialize, Serialize};

/// Selects the key derived from a seed.
///
/// Deserializes from camelCase fields; missing fields keep their defaults so
/// `{}` means account 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DerivationOptions {
    /// Return the root generator itself, as used by validator identities.
    pub validator: bool,
    /// Which account to derive when `validator` is false.
    pub account_index: u32,
}

impl DerivationOptions {
    /// Options for the root (validator) key of a seed.
    pub fn validator() -> Self {
        DerivationOptions {
            validator: true,
            account_index: 0,
        }
    }

    /// Options for the account at `account_index`.
    pub fn account(account_index: u32) -> Self {
        DerivationOptions {
            validator: false,
            account_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_account_zero() {
        let opts = DerivationOptions::default();
        assert!(!opts.validator);
        assert_eq!(opts.account_index, 0);
        assert_eq!(opts, DerivationOptions::account(0));
    }

    #[test]
    fn test_deserialize_empty_object() {
        let opts: DerivationOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, DerivationOptions::default());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let opts: DerivationOptions =
            serde_json::from_str(r#"{"accountIndex": 7}"#).unwrap();
        assert_eq!(opts, DerivationOptions::account(7));

        let opts: DerivationOptions = serde_json::from_str(r#"{"validator": true}"#).unwrap();
        assert_eq!(opts, DerivationOptions::validator());
    }

    #[test]
    fn test_account_index_out_of_range_rejected() {
        let result: Result<DerivationOptions, _> =
            serde_json::from_str(r#"{"accountIndex": 4294967296}"#);
        assert!(result.is_err());

        let result: Result<DerivationOptions, _> =
            serde_json::from_str(r#"{"accountIndex": -1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let opts = DerivationOptions::account(u32::MAX);
        let json = serde_json::to_string(&opts).unwrap();
        assert_eq!(json, r#"{"validator":false,"accountIndex":4294967295}"#);
        let back: DerivationOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, opts);
    }
}
