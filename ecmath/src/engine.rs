//! Raw scalar and point arithmetic.
//!
//! <div class="warning">
//! <b>Hazmat!</b>
//!
//! These functions operate on bare integers and coordinates. They validate
//! every operand against the given [`Group`], but carry no notion of which
//! group a value came from: mixing values of different groups is caught by
//! the keypair-level operations in [`ops`](crate::ops), not here.
//! </div>
//!
//! Scalar operands must be reduced, i.e. in `[0, n)` where `n` is the group
//! order, and fail with [`Error::InvalidOperand`] otherwise. Point operands
//! must lie on the curve and fail with [`Error::InvalidPoint`] otherwise.
//! Every scalar result is reduced and every point result is on the curve.

use crate::{
    curve::{field_bytes, with_curve, NamedCurve},
    Error, Group, Point, Result,
};
use elliptic_curve::{
    ff::{Field, PrimeField},
    group::{Curve as _, Group as CurveGroup},
    ProjectivePoint, Scalar,
};
use num_bigint::BigUint;
use num_traits::Zero;

/// Compute `a · b mod n`.
pub fn scalar_mul(group: Group, a: &BigUint, b: &BigUint) -> Result<BigUint> {
    with_curve!(group, C => {
        let product = to_scalar::<C>(a)? * to_scalar::<C>(b)?;
        Ok(from_scalar::<C>(&product))
    })
}

/// Truncating division `⌊a / b⌋` of the raw integers.
///
/// <div class="warning">
///
/// This is **not** division modulo the group order. The remainder is
/// discarded, so `scalar_div(g, 7, 2)` is `3`. For modular division compute
/// `scalar_mul(g, a, &scalar_inverse(g, b)?)` instead.
///
/// </div>
///
/// Fails with [`Error::DivisionByZero`] if `b` is zero. Both operands must
/// still be reduced, and so is the quotient.
pub fn scalar_div(group: Group, a: &BigUint, b: &BigUint) -> Result<BigUint> {
    let order = group.order();

    if a >= &order || b >= &order {
        return Err(Error::InvalidOperand);
    }

    if b.is_zero() {
        return Err(Error::DivisionByZero);
    }

    Ok(a / b)
}

/// Compute `a⁻¹ mod n`.
///
/// Fails with [`Error::NotInvertible`] if `a` is zero, the only non-invertible
/// residue of a prime order group.
pub fn scalar_inverse(group: Group, a: &BigUint) -> Result<BigUint> {
    with_curve!(group, C => {
        let a = to_scalar::<C>(a)?;

        if bool::from(a.is_zero()) {
            return Err(Error::NotInvertible);
        }

        let inverse = Option::from(<Scalar<C> as Field>::invert(&a))
            .ok_or(Error::NotInvertible)?;
        Ok(from_scalar::<C>(&inverse))
    })
}

/// Compute `(a + b) mod n`.
pub fn scalar_add(group: Group, a: &BigUint, b: &BigUint) -> Result<BigUint> {
    with_curve!(group, C => {
        let sum = to_scalar::<C>(a)? + to_scalar::<C>(b)?;
        Ok(from_scalar::<C>(&sum))
    })
}

/// Compute `(a − b) mod n`, normalized to `[0, n)`.
pub fn scalar_sub(group: Group, a: &BigUint, b: &BigUint) -> Result<BigUint> {
    with_curve!(group, C => {
        let difference = to_scalar::<C>(a)? - to_scalar::<C>(b)?;
        Ok(from_scalar::<C>(&difference))
    })
}

/// Compute `k · P`.
///
/// `k` may be any non-negative integer and is reduced modulo the group order
/// first, so any multiple of `n` yields the identity.
pub fn point_mul(group: Group, point: &Point, k: &BigUint) -> Result<Point> {
    with_curve!(group, C => {
        let point = to_projective::<C>(point)?;
        let k = to_scalar::<C>(&(k % group.order()))?;
        Ok(from_projective::<C>(&(point * k)))
    })
}

/// Compute `−P`. The identity is its own negation.
pub fn point_negate(group: Group, point: &Point) -> Result<Point> {
    with_curve!(group, C => {
        let point = to_projective::<C>(point)?;
        Ok(from_projective::<C>(&-point))
    })
}

/// Compute `P + Q` with the complete addition law, so doubling and the
/// identity need no special casing.
pub fn point_add(group: Group, p: &Point, q: &Point) -> Result<Point> {
    with_curve!(group, C => {
        let sum = to_projective::<C>(p)? + to_projective::<C>(q)?;
        Ok(from_projective::<C>(&sum))
    })
}

/// Compute `P − Q` as `P + (−Q)`.
pub fn point_sub(group: Group, p: &Point, q: &Point) -> Result<Point> {
    let negated = point_negate(group, q)?;
    point_add(group, p, &negated)
}

/// Standard base point `G` of the group.
pub fn generator(group: Group) -> Point {
    with_curve!(group, C => {
        from_projective::<C>(&<ProjectivePoint<C> as CurveGroup>::generator())
    })
}

/// Group order `n`, as a raw integer.
///
/// This is the modulus of scalar arithmetic, not a scalar: it is not a valid
/// operand to any function in this module.
pub fn order(group: Group) -> BigUint {
    group.order()
}

/// Compute the public point `s · G` of a private scalar.
pub fn derive_public(group: Group, scalar: &BigUint) -> Result<Point> {
    with_curve!(group, C => {
        let scalar = to_scalar::<C>(scalar)?;
        let point = <ProjectivePoint<C> as CurveGroup>::generator() * scalar;
        Ok(from_projective::<C>(&point))
    })
}

/// Check that `point` lies on the group's curve.
///
/// The identity is always valid.
pub fn validate_point(group: Group, point: &Point) -> Result<()> {
    with_curve!(group, C => C::decode_affine(point).map(|_| ()))
}

fn to_scalar<C: NamedCurve>(scalar: &BigUint) -> Result<Scalar<C>> {
    let repr = field_bytes::<C>(scalar).ok_or(Error::InvalidOperand)?;
    Option::from(<Scalar<C> as PrimeField>::from_repr(repr)).ok_or(Error::InvalidOperand)
}

fn from_scalar<C: NamedCurve>(scalar: &Scalar<C>) -> BigUint {
    BigUint::from_bytes_be(&scalar.to_repr())
}

fn to_projective<C: NamedCurve>(point: &Point) -> Result<ProjectivePoint<C>> {
    C::decode_affine(point).map(<ProjectivePoint<C>>::from)
}

fn from_projective<C: NamedCurve>(point: &ProjectivePoint<C>) -> Point {
    C::encode_affine(&point.to_affine())
}
