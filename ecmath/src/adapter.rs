//! Conversion between keypair-shaped values and raw operands.
//!
//! The extractors accept anything implementing [`KeyMaterial`], including
//! foreign key types, and re-validate what they pull out. The wrappers always
//! produce a [`Keypair`].

use crate::{engine, Error, Group, KeyMaterial, Keypair, Point, Result};
use num_bigint::BigUint;

/// Pull the private scalar out of a key.
///
/// Fails with [`Error::InvalidOperand`] if the key has no private component
/// or its scalar is not reduced modulo the group order.
pub fn extract_scalar(key: &impl KeyMaterial) -> Result<(Group, BigUint)> {
    let group = key.group();
    let scalar = key.to_scalar().ok_or(Error::InvalidOperand)?;

    if scalar >= group.order() {
        return Err(Error::InvalidOperand);
    }

    Ok((group, scalar))
}

/// Pull the public point out of a key.
///
/// Fails with [`Error::InvalidOperand`] if the key has no public component
/// or its point is not on the curve.
pub fn extract_point(key: &impl KeyMaterial) -> Result<(Group, Point)> {
    let group = key.group();
    let point = key.to_point().ok_or(Error::InvalidOperand)?;

    engine::validate_point(group, &point).map_err(|_| Error::InvalidOperand)?;
    Ok((group, point))
}

/// Wrap a scalar as a full keypair, re-deriving its public point.
///
/// See [`Keypair::from_scalar`].
pub fn wrap_scalar(group: Group, scalar: BigUint) -> Result<Keypair> {
    Keypair::from_scalar(group, scalar)
}

/// Wrap a point as a public-only keypair.
///
/// See [`Keypair::public`].
pub fn wrap_point(group: Group, point: Point) -> Result<Keypair> {
    Keypair::public(group, point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KeyKind;

    /// Key whose components bypass validation.
    struct Forged {
        group: Group,
        scalar: Option<BigUint>,
        point: Option<Point>,
    }

    impl KeyMaterial for Forged {
        fn group(&self) -> Group {
            self.group
        }

        fn has_private(&self) -> bool {
            self.scalar.is_some()
        }

        fn has_public(&self) -> bool {
            self.point.is_some()
        }

        fn to_scalar(&self) -> Option<BigUint> {
            self.scalar.clone()
        }

        fn to_point(&self) -> Option<Point> {
            self.point.clone()
        }
    }

    #[test]
    fn missing_components() {
        for group in Group::all() {
            let public = wrap_point(group, group.generator()).unwrap();
            assert_eq!(extract_scalar(&public), Err(Error::InvalidOperand));

            let private = Keypair::private(group, BigUint::from(5u8)).unwrap();
            assert_eq!(extract_point(&private), Err(Error::InvalidOperand));
        }
    }

    #[test]
    fn forged_components_are_rejected() {
        for group in Group::all() {
            let forged = Forged {
                group,
                scalar: Some(group.order()),
                point: Some(Point::affine(1u8, 1u8)),
            };

            assert_eq!(extract_scalar(&forged), Err(Error::InvalidOperand));
            assert_eq!(extract_point(&forged), Err(Error::InvalidOperand));
        }
    }

    #[test]
    fn wrapped_scalar_is_a_full_keypair() {
        for group in Group::all() {
            let keypair = wrap_scalar(group, BigUint::from(1u8)).unwrap();
            assert_eq!(keypair.kind(), KeyKind::Full);
            assert_eq!(keypair.point(), Some(&group.generator()));
            assert_eq!(extract_point(&keypair), Ok((group, group.generator())));
        }
    }

    #[test]
    fn wrapping_identity() {
        for group in Group::all() {
            let keypair = wrap_point(group, Point::Identity).unwrap();
            assert_eq!(keypair.kind(), KeyKind::Public);
            assert_eq!(extract_point(&keypair), Ok((group, Point::Identity)));
        }
    }
}
