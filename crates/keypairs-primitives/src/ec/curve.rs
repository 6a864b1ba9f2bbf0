//! secp256k1 group parameters and the few group operations key derivation needs.
//!
//! `Curve` is an immutable value: the order and base point are fixed at
//! compile time and every derivation borrows the same `SECP256K1` constant.

use k256::elliptic_curve::ops::Reduce;
use k256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use k256::elliptic_curve::Curve as CurveParams;
use k256::{AffinePoint, EncodedPoint, NonZeroScalar, ProjectivePoint, Scalar, Secp256k1, U256};

use crate::PrimitivesError;

/// Length of a SEC1 compressed point (prefix + 32 byte x-coordinate).
pub const COMPRESSED_LEN: usize = 33;

/// The secp256k1 curve parameters used by every derivation in this workspace.
pub const SECP256K1: Curve = Curve {
    order: <Secp256k1 as CurveParams>::ORDER,
    generator: ProjectivePoint::GENERATOR,
};

/// Group order and base point of a prime-order curve.
#[derive(Clone, Copy, Debug)]
pub struct Curve {
    order: U256,
    generator: ProjectivePoint,
}

impl Curve {
    /// The number of elements in the base point's subgroup.
    pub fn order(&self) -> &U256 {
        &self.order
    }

    /// The fixed base point `G`.
    pub fn generator(&self) -> ProjectivePoint {
        self.generator
    }

    /// Multiply the base point by `scalar`.
    pub fn mul_base(&self, scalar: &Scalar) -> ProjectivePoint {
        self.generator * scalar
    }

    /// Interpret 32 bytes as a big-endian integer and accept it only when it
    /// lies strictly between zero and the group order.
    ///
    /// No reduction takes place: out-of-range candidates return `None`.
    pub fn scalar_in_range(&self, candidate: &[u8; 32]) -> Option<NonZeroScalar> {
        let uint = U256::from_be_slice(candidate);
        if uint == U256::ZERO || uint >= self.order {
            return None;
        }
        // `uint` is already below the order, so the reduction is the identity.
        let scalar = <Scalar as Reduce<U256>>::reduce(uint);
        Option::from(NonZeroScalar::new(scalar))
    }

    /// Decode a 33-byte SEC1 compressed point.
    ///
    /// # Returns
    /// The point, or an error if the bytes are not a compressed encoding of a
    /// point on the curve.
    pub fn decode_point(&self, bytes: &[u8]) -> Result<ProjectivePoint, PrimitivesError> {
        if bytes.len() != COMPRESSED_LEN {
            return Err(PrimitivesError::InvalidKeyLength {
                expected: COMPRESSED_LEN,
                got: bytes.len(),
            });
        }
        let encoded = EncodedPoint::from_bytes(bytes)
            .map_err(|e| PrimitivesError::InvalidPublicKey(e.to_string()))?;
        if !encoded.is_compressed() {
            return Err(PrimitivesError::InvalidPublicKey(format!(
                "expected compressed point prefix 0x02 or 0x03, got 0x{:02x}",
                bytes[0]
            )));
        }
        Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded))
            .map(ProjectivePoint::from)
            .ok_or(PrimitivesError::PointNotOnCurve)
    }

    /// Encode a point in SEC1 compressed form.
    ///
    /// # Returns
    /// The 33-byte encoding, or an error for the point at infinity, which has
    /// no compressed form.
    pub fn encode_point(
        &self,
        point: &ProjectivePoint,
    ) -> Result<[u8; COMPRESSED_LEN], PrimitivesError> {
        let encoded = point.to_affine().to_encoded_point(true);
        let bytes = encoded.as_bytes();
        if bytes.len() != COMPRESSED_LEN {
            return Err(PrimitivesError::InvalidPublicKey(
                "point at infinity has no compressed encoding".to_string(),
            ));
        }
        let mut out = [0u8; COMPRESSED_LEN];
        out.copy_from_slice(bytes);
        Ok(out)
    }
}
