//! Typed curve implementations backing each [`Group`].
//!
//! Every supported curve is a RustCrypto curve type (e.g. [`p256::NistP256`])
//! implementing [`NamedCurve`], which ties it to its runtime [`Group`] and
//! converts between its typed points and the raw [`Point`] representation.

use crate::{CurveParams, Error, Group, Point, Result};
use alloc::vec::Vec;
use elliptic_curve::{
    group::{Curve as _, Group as _},
    sec1::{Coordinates, EncodedPoint, FromEncodedPoint, ModulusSize, ToEncodedPoint},
    AffinePoint, Curve, CurveArithmetic, FieldBytes, FieldBytesSize, PrimeCurve, ProjectivePoint,
};
use num_bigint::BigUint;

/// Dispatch on a [`Group`], binding the matching curve type to `$curve` for
/// the evaluation of `$body`.
macro_rules! with_curve {
    ($group:expr, $curve:ident => $body:expr) => {
        match $group {
            #[cfg(feature = "p256")]
            $crate::Group::NistP256 => {
                type $curve = ::p256::NistP256;
                $body
            }
            #[cfg(feature = "p384")]
            $crate::Group::NistP384 => {
                type $curve = ::p384::NistP384;
                $body
            }
            #[cfg(feature = "p521")]
            $crate::Group::NistP521 => {
                type $curve = ::p521::NistP521;
                $body
            }
            #[cfg(feature = "k256")]
            $crate::Group::Secp256k1 => {
                type $curve = ::k256::Secp256k1;
                $body
            }
        }
    };
}

pub(crate) use with_curve;

/// Implement [`NamedCurve`] for a RustCrypto curve type.
macro_rules! impl_named_curve {
    ($curve:ty, $group:expr, $params:expr) => {
        impl $crate::curve::NamedCurve for $curve {
            const GROUP: $crate::Group = $group;
            const PARAMS: &'static $crate::CurveParams = $params;

            fn decode_affine(
                point: &$crate::Point,
            ) -> $crate::Result<elliptic_curve::AffinePoint<Self>> {
                $crate::curve::decode_affine::<Self>(point)
            }

            fn encode_affine(point: &elliptic_curve::AffinePoint<Self>) -> $crate::Point {
                $crate::curve::encode_affine::<Self>(point)
            }

            fn from_sec1_bytes(bytes: &[u8]) -> $crate::Result<elliptic_curve::AffinePoint<Self>> {
                $crate::curve::from_sec1_bytes::<Self>(bytes)
            }

            fn to_sec1_bytes(
                point: &elliptic_curve::AffinePoint<Self>,
                compress: bool,
            ) -> alloc::vec::Vec<u8> {
                $crate::curve::to_sec1_bytes::<Self>(point, compress)
            }
        }
    };
}

#[cfg(feature = "k256")]
mod secp256k1;

#[cfg(feature = "p256")]
mod nistp256;

#[cfg(feature = "p384")]
mod nistp384;

#[cfg(feature = "p521")]
mod nistp521;

/// Elliptic curve with a runtime [`Group`] identity.
pub trait NamedCurve: CurveArithmetic + PrimeCurve {
    /// Runtime identity of this curve.
    const GROUP: Group;

    /// Domain parameters of this curve.
    const PARAMS: &'static CurveParams;

    /// Validate raw coordinates, returning the typed affine point.
    ///
    /// Fails with [`Error::InvalidPoint`] if a coordinate is not a reduced
    /// field element or the point is not on the curve.
    fn decode_affine(point: &Point) -> Result<AffinePoint<Self>>;

    /// Raw coordinates of a typed affine point.
    fn encode_affine(point: &AffinePoint<Self>) -> Point;

    /// Parse a SEC1-encoded point.
    fn from_sec1_bytes(bytes: &[u8]) -> Result<AffinePoint<Self>>;

    /// SEC1-encode a point, optionally compressed.
    fn to_sec1_bytes(point: &AffinePoint<Self>, compress: bool) -> Vec<u8>;
}

/// Left-pad an integer to the curve's field width.
///
/// Returns `None` if the integer does not fit.
pub(crate) fn field_bytes<C: Curve>(n: &BigUint) -> Option<FieldBytes<C>> {
    let bytes = n.to_bytes_be();
    let mut repr = FieldBytes::<C>::default();

    if bytes.len() > repr.len() {
        return None;
    }

    let offset = repr.len() - bytes.len();
    repr[offset..].copy_from_slice(&bytes);
    Some(repr)
}

pub(crate) fn decode_affine<C>(point: &Point) -> Result<AffinePoint<C>>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let (x, y) = match point {
        Point::Identity => return Ok(<ProjectivePoint<C>>::identity().to_affine()),
        Point::Affine { x, y } => (x, y),
    };

    let x = field_bytes::<C>(x).ok_or(Error::InvalidPoint)?;
    let y = field_bytes::<C>(y).ok_or(Error::InvalidPoint)?;
    let encoded = <EncodedPoint<C>>::from_affine_coordinates(&x, &y, false);

    Option::from(<AffinePoint<C>>::from_encoded_point(&encoded)).ok_or(Error::InvalidPoint)
}

pub(crate) fn encode_affine<C>(point: &AffinePoint<C>) -> Point
where
    C: CurveArithmetic,
    AffinePoint<C>: ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    match point.to_encoded_point(false).coordinates() {
        Coordinates::Identity => Point::Identity,
        Coordinates::Uncompressed { x, y } => Point::Affine {
            x: BigUint::from_bytes_be(x),
            y: BigUint::from_bytes_be(y),
        },
        Coordinates::Compact { .. } | Coordinates::Compressed { .. } => {
            unreachable!("uncompressed encoding requested")
        }
    }
}

pub(crate) fn from_sec1_bytes<C>(bytes: &[u8]) -> Result<AffinePoint<C>>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let encoded = <EncodedPoint<C>>::from_bytes(bytes).map_err(|_| Error::InvalidPoint)?;

    if encoded.is_identity() {
        return Ok(<ProjectivePoint<C>>::identity().to_affine());
    }

    Option::from(<AffinePoint<C>>::from_encoded_point(&encoded)).ok_or(Error::InvalidPoint)
}

pub(crate) fn to_sec1_bytes<C>(point: &AffinePoint<C>, compress: bool) -> Vec<u8>
where
    C: CurveArithmetic,
    AffinePoint<C>: ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    point.to_encoded_point(compress).as_bytes().to_vec()
}
