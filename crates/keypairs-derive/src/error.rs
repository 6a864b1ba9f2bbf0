/// Error types for seed key derivation.
#[derive(Debug, thiserror::Error)]
pub enum DeriveError {
    /// No candidate below the curve order was found in the whole counter range.
    #[error("no valid scalar found after {attempts} hash attempts")]
    ExhaustedSearchSpace { attempts: u64 },
    /// The supplied bytes are not a compressed point on the curve.
    #[error("invalid point encoding: {0}")]
    InvalidEncoding(String),
    #[error("primitives error: {0}")]
    Primitives(#[from] keypairs_primitives::PrimitivesError),
}
