//! Named elliptic curve groups and their domain parameters.

use crate::{
    curve::{self, with_curve},
    engine, Error, Point, Result,
};
use alloc::vec::Vec;
use core::{
    fmt::{self, Display},
    str::FromStr,
};
use elliptic_curve::generic_array::typenum::Unsigned;
use num_bigint::BigUint;

/// Elliptic curve group descriptor.
///
/// Identifies one of the supported named curves. All scalars belonging to a
/// group are interpreted modulo its [order](Group::order) and all points must
/// lie on its curve. Resolve one by name with [`Group::from_name`] (or
/// [`str::parse`]).
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Group {
    /// NIST P-256 (a.k.a. secp256r1, prime256v1).
    #[cfg(feature = "p256")]
    NistP256,

    /// NIST P-384 (a.k.a. secp384r1).
    #[cfg(feature = "p384")]
    NistP384,

    /// NIST P-521 (a.k.a. secp521r1).
    #[cfg(feature = "p521")]
    NistP521,

    /// secp256k1.
    #[cfg(feature = "k256")]
    Secp256k1,
}

impl Group {
    /// Every group compiled into this build.
    pub fn all() -> Vec<Group> {
        let mut groups = Vec::new();

        #[cfg(feature = "p256")]
        groups.push(Group::NistP256);
        #[cfg(feature = "p384")]
        groups.push(Group::NistP384);
        #[cfg(feature = "p521")]
        groups.push(Group::NistP521);
        #[cfg(feature = "k256")]
        groups.push(Group::Secp256k1);

        groups
    }

    /// Resolve a named curve.
    ///
    /// Accepts the canonical name, any SEC/ANSI alias, or the dotted OID.
    /// Names are matched case-insensitively.
    pub fn from_name(name: &str) -> Result<Self> {
        let name = name.trim();

        Self::all()
            .into_iter()
            .find(|group| group.params().matches(name))
            .ok_or(Error::UnknownCurve)
    }

    /// Static domain parameters of this group.
    pub fn params(self) -> &'static CurveParams {
        with_curve!(self, C => <C as curve::NamedCurve>::PARAMS)
    }

    /// Canonical curve name, e.g. `P-256`.
    pub fn name(self) -> &'static str {
        self.params().name
    }

    /// Group order `n`: the modulus of all scalar arithmetic.
    ///
    /// This is the raw integer. It is not itself a valid scalar and can never
    /// be wrapped in a [`Keypair`](crate::Keypair).
    pub fn order(self) -> BigUint {
        self.params().order()
    }

    /// Prime `p` of the base field.
    pub fn field_modulus(self) -> BigUint {
        self.params().field_modulus()
    }

    /// Curve equation coefficients `(a, b)` of `y² = x³ + ax + b`.
    pub fn coefficients(self) -> (BigUint, BigUint) {
        self.params().coefficients()
    }

    /// Standard base point of the curve.
    pub fn generator(self) -> Point {
        engine::generator(self)
    }

    /// Bit length of the group order.
    pub fn bits(self) -> u64 {
        self.order().bits()
    }

    /// Size in bytes of a serialized scalar or field element.
    pub fn field_size(self) -> usize {
        with_curve!(self, C => <elliptic_curve::FieldBytesSize<C> as Unsigned>::USIZE)
    }

    /// Does `point` lie on this group's curve?
    pub fn contains(self, point: &Point) -> bool {
        engine::validate_point(self, point).is_ok()
    }

    /// Serialize a scalar as a fixed-width big-endian integer of
    /// [`field_size`](Group::field_size) bytes.
    pub fn encode_scalar(self, scalar: &BigUint) -> Result<Vec<u8>> {
        if scalar >= &self.order() {
            return Err(Error::InvalidOperand);
        }

        let bytes = scalar.to_bytes_be();
        let mut encoded = alloc::vec![0u8; self.field_size() - bytes.len()];
        encoded.extend_from_slice(&bytes);
        Ok(encoded)
    }

    /// Parse a big-endian scalar of at most
    /// [`field_size`](Group::field_size) bytes.
    ///
    /// The value must be reduced, i.e. less than the group order.
    pub fn decode_scalar(self, bytes: &[u8]) -> Result<BigUint> {
        if bytes.len() > self.field_size() {
            return Err(Error::InvalidOperand);
        }

        let scalar = BigUint::from_bytes_be(bytes);

        if scalar >= self.order() {
            return Err(Error::InvalidOperand);
        }

        Ok(scalar)
    }

    /// Serialize a point with the SEC1 `Elliptic-Curve-Point-to-Octet-String`
    /// encoding. The identity encodes as the single byte `0x00`.
    pub fn encode_point(self, point: &Point, compress: bool) -> Result<Vec<u8>> {
        with_curve!(self, C => {
            let affine = <C as curve::NamedCurve>::decode_affine(point)?;
            Ok(<C as curve::NamedCurve>::to_sec1_bytes(&affine, compress))
        })
    }

    /// Parse a compressed, uncompressed or identity SEC1-encoded point.
    pub fn decode_point(self, bytes: &[u8]) -> Result<Point> {
        with_curve!(self, C => {
            let affine = <C as curve::NamedCurve>::from_sec1_bytes(bytes)?;
            Ok(<C as curve::NamedCurve>::encode_affine(&affine))
        })
    }
}

impl Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Group {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Self::from_name(name)
    }
}

/// Domain parameters of a short Weierstrass curve `y² = x³ + ax + b` over
/// the prime field `GF(p)`, serialized as big-endian integers.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CurveParams {
    /// Canonical name.
    pub name: &'static str,

    /// Alternative names (SEC 2, ANSI X9.62, ...).
    pub aliases: &'static [&'static str],

    /// Dotted object identifier.
    pub oid: &'static str,

    /// Base field prime `p`.
    pub p: &'static [u8],

    /// Coefficient `a`.
    pub a: &'static [u8],

    /// Coefficient `b`.
    pub b: &'static [u8],

    /// Generator x-coordinate.
    pub gx: &'static [u8],

    /// Generator y-coordinate.
    pub gy: &'static [u8],

    /// Group order `n`.
    pub n: &'static [u8],
}

impl CurveParams {
    /// Base field prime `p`.
    pub fn field_modulus(&self) -> BigUint {
        BigUint::from_bytes_be(self.p)
    }

    /// Coefficients `(a, b)`.
    pub fn coefficients(&self) -> (BigUint, BigUint) {
        (BigUint::from_bytes_be(self.a), BigUint::from_bytes_be(self.b))
    }

    /// Group order `n`.
    pub fn order(&self) -> BigUint {
        BigUint::from_bytes_be(self.n)
    }

    /// Generator point from the tabulated coordinates.
    pub fn generator(&self) -> Point {
        Point::Affine {
            x: BigUint::from_bytes_be(self.gx),
            y: BigUint::from_bytes_be(self.gy),
        }
    }

    /// Check `y² ≡ x³ + ax + b (mod p)` with plain big-integer arithmetic.
    ///
    /// Coordinates must already be reduced modulo `p`.
    pub fn satisfies_equation(&self, x: &BigUint, y: &BigUint) -> bool {
        let p = self.field_modulus();

        if x >= &p || y >= &p {
            return false;
        }

        let (a, b) = self.coefficients();
        let lhs = (y * y) % &p;
        let rhs = (x * x * x + a * x + b) % &p;
        lhs == rhs
    }

    fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.oid == name
            || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    }
}
