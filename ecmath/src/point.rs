//! Raw curve points.

use core::fmt::{self, Display};
use num_bigint::BigUint;

/// Point on a short Weierstrass curve in affine coordinates, or the point at
/// infinity.
///
/// A `Point` carries no curve identity of its own; it is only meaningful
/// together with a [`Group`](crate::Group), and is validated against that
/// group's curve whenever it enters or leaves the arithmetic engine.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum Point {
    /// Point at infinity, the identity element of the group.
    #[default]
    Identity,

    /// Affine point `(x, y)`.
    Affine {
        /// x-coordinate.
        x: BigUint,
        /// y-coordinate.
        y: BigUint,
    },
}

impl Point {
    /// Build an affine point from its coordinates.
    pub fn affine(x: impl Into<BigUint>, y: impl Into<BigUint>) -> Self {
        Point::Affine {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Is this the point at infinity?
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    /// Affine x-coordinate, if this isn't the identity.
    pub fn x(&self) -> Option<&BigUint> {
        self.coordinates().map(|(x, _)| x)
    }

    /// Affine y-coordinate, if this isn't the identity.
    pub fn y(&self) -> Option<&BigUint> {
        self.coordinates().map(|(_, y)| y)
    }

    /// Affine coordinates, if this isn't the identity.
    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint)> {
        match self {
            Point::Identity => None,
            Point::Affine { x, y } => Some((x, y)),
        }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Identity => f.write_str("identity"),
            Point::Affine { x, y } => write!(f, "({x:x}, {y:x})"),
        }
    }
}
