//! Keypair-shaped operands and results.

use crate::{curve::NamedCurve, engine, Error, Group, Point, Result};
use alloc::vec::Vec;
use core::fmt;
use elliptic_curve::{PublicKey, SecretKey};
use num_bigint::BigUint;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Private scalar as fixed-width big-endian bytes.
type SecretBytes = Zeroizing<Vec<u8>>;

/// Capability set of a keypair-shaped value.
///
/// Anything that carries a [`Group`] together with a private scalar, a public
/// point, or both can be fed to the operations in [`ops`](crate::ops).
pub trait KeyMaterial {
    /// Group the key belongs to.
    fn group(&self) -> Group;

    /// Does the key carry a private scalar?
    fn has_private(&self) -> bool;

    /// Does the key carry a public point?
    fn has_public(&self) -> bool;

    /// Raw private scalar, if present.
    ///
    /// The returned [`BigUint`] is a copy which is not wiped on drop.
    fn to_scalar(&self) -> Option<BigUint>;

    /// Raw public point, if present.
    fn to_point(&self) -> Option<Point>;
}

/// Which components a [`Keypair`] carries.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum KeyKind {
    /// Private scalar only.
    Private,

    /// Public point only.
    Public,

    /// Private scalar and its public point `scalar · G`.
    Full,
}

/// Keypair-shaped value: a [`Group`] with a private scalar, a public point,
/// or both.
///
/// Unlike [`SecretKey`] and [`PublicKey`], a `Keypair` admits the zero scalar
/// and the point at infinity, since both are legitimate arithmetic results.
/// Every constructor still enforces that scalars are reduced modulo the group
/// order and points lie on the curve.
///
/// The private scalar is held as [`field_size`](Group::field_size) big-endian
/// bytes which are zeroized on drop, and is redacted from [`Debug`] output.
/// [`BigUint`] values passed in or handed out are plain copies and are not
/// wiped.
#[derive(Clone, Eq, PartialEq)]
pub struct Keypair {
    group: Group,
    parts: Parts,
}

#[derive(Clone, Eq, PartialEq)]
enum Parts {
    Private(SecretBytes),
    Public(Point),
    Full { scalar: SecretBytes, point: Point },
}

impl Keypair {
    /// Private-only keypair.
    ///
    /// Fails with [`Error::InvalidOperand`] unless `scalar` is less than the
    /// group order.
    pub fn private(group: Group, scalar: BigUint) -> Result<Self> {
        Ok(Self {
            group,
            parts: Parts::Private(secret_bytes(group, &scalar)?),
        })
    }

    /// Public-only keypair.
    ///
    /// Fails with [`Error::InvalidPoint`] unless `point` is on the curve.
    pub fn public(group: Group, point: Point) -> Result<Self> {
        engine::validate_point(group, &point)?;

        Ok(Self {
            group,
            parts: Parts::Public(point),
        })
    }

    /// Full keypair, deriving the public point `scalar · G`.
    ///
    /// Fails with [`Error::InvalidOperand`] unless `scalar` is less than the
    /// group order.
    pub fn from_scalar(group: Group, scalar: BigUint) -> Result<Self> {
        let secret = secret_bytes(group, &scalar)?;
        let point =
            engine::derive_public(group, &scalar).map_err(|_| Error::DerivationError)?;

        Ok(Self {
            group,
            parts: Parts::Full {
                scalar: secret,
                point,
            },
        })
    }

    /// Group this keypair belongs to.
    pub fn group(&self) -> Group {
        self.group
    }

    /// Which components this keypair carries.
    pub fn kind(&self) -> KeyKind {
        match self.parts {
            Parts::Private(_) => KeyKind::Private,
            Parts::Public(_) => KeyKind::Public,
            Parts::Full { .. } => KeyKind::Full,
        }
    }

    /// Private scalar, if present.
    pub fn scalar(&self) -> Option<BigUint> {
        self.scalar_bytes().map(BigUint::from_bytes_be)
    }

    /// Private scalar as [`field_size`](Group::field_size) big-endian bytes,
    /// if present.
    pub fn scalar_bytes(&self) -> Option<&[u8]> {
        match &self.parts {
            Parts::Private(scalar) | Parts::Full { scalar, .. } => Some(scalar.as_slice()),
            Parts::Public(_) => None,
        }
    }

    /// Public point, if present.
    pub fn point(&self) -> Option<&Point> {
        match &self.parts {
            Parts::Public(point) | Parts::Full { point, .. } => Some(point),
            Parts::Private(_) => None,
        }
    }

    /// Public-only view of this keypair, deriving the point of a
    /// private-only keypair.
    pub fn to_public(&self) -> Result<Self> {
        let point = match &self.parts {
            Parts::Public(point) | Parts::Full { point, .. } => point.clone(),
            Parts::Private(scalar) => {
                let scalar = BigUint::from_bytes_be(scalar);
                engine::derive_public(self.group, &scalar).map_err(|_| Error::DerivationError)?
            }
        };

        Ok(Self {
            group: self.group,
            parts: Parts::Public(point),
        })
    }

    /// Convert to a [`SecretKey`] of curve `C`.
    ///
    /// Fails with [`Error::GroupMismatch`] if this keypair is on another
    /// curve, and with [`Error::InvalidOperand`] if it carries no scalar or
    /// the scalar is zero.
    pub fn to_secret_key<C: NamedCurve>(&self) -> Result<SecretKey<C>> {
        self.expect_group(C::GROUP)?;

        let bytes = self.scalar_bytes().ok_or(Error::InvalidOperand)?;
        SecretKey::from_slice(bytes).map_err(|_| Error::InvalidOperand)
    }

    /// Convert to a [`PublicKey`] of curve `C`.
    ///
    /// Fails with [`Error::GroupMismatch`] if this keypair is on another
    /// curve, with [`Error::InvalidOperand`] if it carries no point, and with
    /// [`Error::InvalidPoint`] if the point is the identity.
    pub fn to_public_key<C: NamedCurve>(&self) -> Result<PublicKey<C>> {
        self.expect_group(C::GROUP)?;

        let point = self.point().ok_or(Error::InvalidOperand)?;
        let affine = C::decode_affine(point)?;
        PublicKey::from_affine(affine).map_err(|_| Error::InvalidPoint)
    }

    fn expect_group(&self, group: Group) -> Result<()> {
        if self.group == group {
            Ok(())
        } else {
            Err(Error::GroupMismatch {
                left: self.group,
                right: group,
            })
        }
    }
}

impl KeyMaterial for Keypair {
    fn group(&self) -> Group {
        self.group
    }

    fn has_private(&self) -> bool {
        self.scalar_bytes().is_some()
    }

    fn has_public(&self) -> bool {
        self.point().is_some()
    }

    fn to_scalar(&self) -> Option<BigUint> {
        self.scalar()
    }

    fn to_point(&self) -> Option<Point> {
        self.point().cloned()
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("group", &self.group)
            .field("kind", &self.kind())
            .field("point", &self.point())
            .finish_non_exhaustive()
    }
}

impl ZeroizeOnDrop for Keypair {}

impl<C: NamedCurve> KeyMaterial for SecretKey<C> {
    fn group(&self) -> Group {
        C::GROUP
    }

    fn has_private(&self) -> bool {
        true
    }

    fn has_public(&self) -> bool {
        true
    }

    fn to_scalar(&self) -> Option<BigUint> {
        let mut bytes = self.to_bytes();
        let scalar = BigUint::from_bytes_be(&bytes);
        bytes.zeroize();
        Some(scalar)
    }

    fn to_point(&self) -> Option<Point> {
        Some(C::encode_affine(self.public_key().as_affine()))
    }
}

impl<C: NamedCurve> KeyMaterial for PublicKey<C> {
    fn group(&self) -> Group {
        C::GROUP
    }

    fn has_private(&self) -> bool {
        false
    }

    fn has_public(&self) -> bool {
        true
    }

    fn to_scalar(&self) -> Option<BigUint> {
        None
    }

    fn to_point(&self) -> Option<Point> {
        Some(C::encode_affine(self.as_affine()))
    }
}

impl<C: NamedCurve> From<SecretKey<C>> for Keypair {
    fn from(secret_key: SecretKey<C>) -> Keypair {
        Keypair::from(&secret_key)
    }
}

impl<C: NamedCurve> From<&SecretKey<C>> for Keypair {
    fn from(secret_key: &SecretKey<C>) -> Keypair {
        let mut bytes = secret_key.to_bytes();
        let scalar = Zeroizing::new(bytes.to_vec());
        bytes.zeroize();

        Keypair {
            group: C::GROUP,
            parts: Parts::Full {
                scalar,
                point: C::encode_affine(secret_key.public_key().as_affine()),
            },
        }
    }
}

impl<C: NamedCurve> From<PublicKey<C>> for Keypair {
    fn from(public_key: PublicKey<C>) -> Keypair {
        Keypair::from(&public_key)
    }
}

impl<C: NamedCurve> From<&PublicKey<C>> for Keypair {
    fn from(public_key: &PublicKey<C>) -> Keypair {
        Keypair {
            group: C::GROUP,
            parts: Parts::Public(C::encode_affine(public_key.as_affine())),
        }
    }
}

/// Fixed-width encoding of a scalar reduced modulo the group order.
fn secret_bytes(group: Group, scalar: &BigUint) -> Result<SecretBytes> {
    if scalar >= &group.order() {
        return Err(Error::InvalidOperand);
    }

    let digits = Zeroizing::new(scalar.to_bytes_be());
    let mut bytes = Zeroizing::new(alloc::vec![0u8; group.field_size()]);
    let offset = bytes.len() - digits.len();
    bytes[offset..].copy_from_slice(&digits);
    Ok(bytes)
}
