//! Keypair-level arithmetic.
//!
//! Every binary operation first checks that both operands belong to the same
//! [`Group`], failing with [`Error::GroupMismatch`] before anything else is
//! looked at. Operands are then unpacked with the [`adapter`] extractors, the
//! [`engine`] computes the result, and it is wrapped back up:
//!
//! - scalar results as full keypairs, with the public point re-derived, so
//!   they can be fed straight into point operations;
//! - point results as public-only keypairs.

use crate::{
    adapter::{extract_point, extract_scalar, wrap_point, wrap_scalar},
    engine, Error, Group, KeyMaterial, Keypair, Result,
};
use num_bigint::BigUint;

/// Compute `a · b mod n`.
pub fn scalar_mul(a: &impl KeyMaterial, b: &impl KeyMaterial) -> Result<Keypair> {
    let group = same_group(a, b)?;
    let (_, a) = extract_scalar(a)?;
    let (_, b) = extract_scalar(b)?;
    wrap_scalar(group, engine::scalar_mul(group, &a, &b)?)
}

/// Truncating division of the raw scalars.
///
/// <div class="warning">
///
/// Not modular division: see [`engine::scalar_div`]. Use
/// `scalar_mul(a, &scalar_inverse(b)?)` to divide modulo the group order.
///
/// </div>
pub fn scalar_div(a: &impl KeyMaterial, b: &impl KeyMaterial) -> Result<Keypair> {
    let group = same_group(a, b)?;
    let (_, a) = extract_scalar(a)?;
    let (_, b) = extract_scalar(b)?;
    wrap_scalar(group, engine::scalar_div(group, &a, &b)?)
}

/// Compute `a⁻¹ mod n`.
pub fn scalar_inverse(a: &impl KeyMaterial) -> Result<Keypair> {
    let (group, a) = extract_scalar(a)?;
    wrap_scalar(group, engine::scalar_inverse(group, &a)?)
}

/// Compute `(a + b) mod n`.
pub fn scalar_add(a: &impl KeyMaterial, b: &impl KeyMaterial) -> Result<Keypair> {
    let group = same_group(a, b)?;
    let (_, a) = extract_scalar(a)?;
    let (_, b) = extract_scalar(b)?;
    wrap_scalar(group, engine::scalar_add(group, &a, &b)?)
}

/// Compute `(a − b) mod n`.
pub fn scalar_sub(a: &impl KeyMaterial, b: &impl KeyMaterial) -> Result<Keypair> {
    let group = same_group(a, b)?;
    let (_, a) = extract_scalar(a)?;
    let (_, b) = extract_scalar(b)?;
    wrap_scalar(group, engine::scalar_sub(group, &a, &b)?)
}

/// Compute `k · P`, taking `P` from the public component of `point` and `k`
/// from the private component of `k`.
pub fn point_mul(point: &impl KeyMaterial, k: &impl KeyMaterial) -> Result<Keypair> {
    let group = same_group(point, k)?;
    let (_, point) = extract_point(point)?;
    let (_, k) = extract_scalar(k)?;
    wrap_point(group, engine::point_mul(group, &point, &k)?)
}

/// Compute `−P`.
pub fn point_negate(point: &impl KeyMaterial) -> Result<Keypair> {
    let (group, point) = extract_point(point)?;
    wrap_point(group, engine::point_negate(group, &point)?)
}

/// Compute `P + Q`.
pub fn point_add(p: &impl KeyMaterial, q: &impl KeyMaterial) -> Result<Keypair> {
    let group = same_group(p, q)?;
    let (_, p) = extract_point(p)?;
    let (_, q) = extract_point(q)?;
    wrap_point(group, engine::point_add(group, &p, &q)?)
}

/// Compute `P − Q`.
pub fn point_sub(p: &impl KeyMaterial, q: &impl KeyMaterial) -> Result<Keypair> {
    let group = same_group(p, q)?;
    let (_, p) = extract_point(p)?;
    let (_, q) = extract_point(q)?;
    wrap_point(group, engine::point_sub(group, &p, &q)?)
}

/// Full keypair with scalar `1` and public point `G`.
///
/// Resolves straight from a [`Group`], with no operand involved; combine with
/// [`Group::from_name`] to go from a curve name to its generator.
pub fn generator(group: Group) -> Result<Keypair> {
    wrap_scalar(group, BigUint::from(1u8))
}

/// Group order `n`, as a raw integer.
///
/// `n` is not a valid scalar, so unlike every other operation here the result
/// is not a [`Keypair`].
pub fn order(group: Group) -> BigUint {
    engine::order(group)
}

fn same_group(a: &impl KeyMaterial, b: &impl KeyMaterial) -> Result<Group> {
    let (left, right) = (a.group(), b.group());

    if left == right {
        Ok(left)
    } else {
        Err(Error::GroupMismatch { left, right })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{KeyKind, Point};

    fn key(group: Group, scalar: u32) -> Keypair {
        Keypair::from_scalar(group, BigUint::from(scalar)).unwrap()
    }

    #[test]
    fn scalar_results_are_full_keypairs() {
        for group in Group::all() {
            let result = scalar_add(&key(group, 3), &key(group, 5)).unwrap();
            assert_eq!(result.kind(), KeyKind::Full);
            assert_eq!(result, key(group, 8));
        }
    }

    #[test]
    fn point_results_are_public_only() {
        for group in Group::all() {
            let result = point_negate(&key(group, 3)).unwrap();
            assert_eq!(result.kind(), KeyKind::Public);
        }
    }

    #[test]
    fn generator_keypair() {
        for group in Group::all() {
            let g = generator(group).unwrap();
            assert_eq!(g.scalar(), Some(BigUint::from(1u8)));
            assert_eq!(g.point(), Some(&group.generator()));
            assert_eq!(order(group), group.order());
        }
    }

    #[test]
    fn private_only_operand_for_point_operation() {
        for group in Group::all() {
            let private = Keypair::private(group, BigUint::from(3u8)).unwrap();
            assert_eq!(point_negate(&private), Err(Error::InvalidOperand));
            assert_eq!(
                point_mul(&generator(group).unwrap(), &private),
                Ok(key(group, 3).to_public().unwrap())
            );
        }
    }

    #[test]
    fn public_only_operand_for_scalar_operation() {
        for group in Group::all() {
            let public = Keypair::public(group, Point::Identity).unwrap();
            assert_eq!(scalar_inverse(&public), Err(Error::InvalidOperand));
            assert_eq!(
                scalar_mul(&public, &key(group, 2)),
                Err(Error::InvalidOperand)
            );
        }
    }
}
