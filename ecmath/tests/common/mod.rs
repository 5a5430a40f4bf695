//! Helpers shared by the integration tests.

#![allow(dead_code, unused_macros)]

use ecmath::{BigUint, Group, Keypair, Point};
use proptest::prelude::*;

/// `k · G` test vector: scalar, x-coordinate, y-coordinate.
pub type MulVector = (u32, &'static [u8], &'static [u8]);

prop_compose! {
    /// Uniform-ish scalar in `[0, n)`.
    pub fn scalar(group: Group)(
        bytes in proptest::collection::vec(any::<u8>(), group.field_size() + 8)
    ) -> BigUint {
        BigUint::from_bytes_be(&bytes) % group.order()
    }
}

prop_compose! {
    /// Scalar in `[1, n)`.
    pub fn nonzero_scalar(group: Group)(scalar in scalar(group)) -> BigUint {
        if scalar == BigUint::default() {
            BigUint::from(1u8)
        } else {
            scalar
        }
    }
}

prop_compose! {
    /// Full keypair with a random scalar.
    pub fn keypair(group: Group)(scalar in scalar(group)) -> Keypair {
        Keypair::from_scalar(group, scalar).unwrap()
    }
}

/// Full keypair for a small scalar.
pub fn key(group: Group, scalar: u32) -> Keypair {
    Keypair::from_scalar(group, BigUint::from(scalar)).unwrap()
}

/// Affine point from big-endian coordinates.
pub fn point(x: &[u8], y: &[u8]) -> Point {
    Point::affine(BigUint::from_bytes_be(x), BigUint::from_bytes_be(y))
}

/// Implement the arithmetic test suite for a group.
macro_rules! impl_group_arithmetic_tests {
    ($group:expr, $mul_vectors:expr) => {
        use crate::common::{self, MulVector};
        use ecmath::{
            adapter, engine, point_add, point_mul, point_negate, point_sub, scalar_add,
            scalar_div, scalar_inverse, scalar_mul, scalar_sub, BigUint, Group, KeyKind, Point,
        };
        use proptest::prelude::*;

        const GROUP: Group = $group;
        const MUL_VECTORS: &[MulVector] = $mul_vectors;

        #[test]
        fn test_vector_point_mul() {
            let g = ecmath::generator(GROUP).unwrap();

            for &(k, x, y) in MUL_VECTORS {
                let expected = common::point(x, y);
                let result = point_mul(&g, &common::key(GROUP, k)).unwrap();
                assert_eq!(result.point(), Some(&expected), "k = {k}");

                let derived = common::key(GROUP, k);
                assert_eq!(derived.point(), Some(&expected), "k = {k}");
            }
        }

        #[test]
        fn test_vectors_satisfy_curve_equation() {
            for &(k, x, y) in MUL_VECTORS {
                let x = BigUint::from_bytes_be(x);
                let y = BigUint::from_bytes_be(y);
                assert!(GROUP.params().satisfies_equation(&x, &y), "k = {k}");
            }
        }

        #[test]
        fn repeated_add_matches_mul() {
            let g = ecmath::generator(GROUP).unwrap();
            let mut p = g.to_public().unwrap();

            for k in 2..=16u32 {
                p = point_add(&p, &g).unwrap();
                assert_eq!(p, point_mul(&g, &common::key(GROUP, k)).unwrap());
            }
        }

        #[test]
        fn doubling() {
            let g = ecmath::generator(GROUP).unwrap();
            let doubled = point_add(&g, &g).unwrap();
            assert_eq!(doubled.point(), common::key(GROUP, 2).point());
        }

        #[test]
        fn identity_is_neutral() {
            let g = ecmath::generator(GROUP).unwrap();
            let identity = adapter::wrap_point(GROUP, Point::Identity).unwrap();

            assert_eq!(point_add(&g, &identity).unwrap().point(), g.point());
            assert_eq!(point_add(&identity, &g).unwrap().point(), g.point());
            assert_eq!(point_sub(&g, &identity).unwrap().point(), g.point());
            assert_eq!(point_negate(&identity).unwrap(), identity);
        }

        #[test]
        fn mul_by_zero_is_identity() {
            let zero = common::key(GROUP, 0);

            for &(k, _, _) in MUL_VECTORS {
                let p = common::key(GROUP, k);
                let result = point_mul(&p, &zero).unwrap();
                assert_eq!(result.point(), Some(&Point::Identity));
            }
        }

        #[test]
        fn scalar_div_truncates() {
            let (seven, two) = (common::key(GROUP, 7), common::key(GROUP, 2));
            let quotient = scalar_div(&seven, &two).unwrap();
            assert_eq!(quotient.scalar(), Some(BigUint::from(3u8)));

            // modular division lands somewhere else entirely
            let modular = scalar_mul(&seven, &scalar_inverse(&two).unwrap()).unwrap();
            let expected = (GROUP.order() + 7u8) / 2u8;
            assert_eq!(modular.scalar(), Some(expected));
            assert_ne!(modular, quotient);
        }

        #[test]
        fn largest_scalar() {
            let minus_one = scalar_sub(&common::key(GROUP, 0), &common::key(GROUP, 1)).unwrap();
            assert_eq!(minus_one.scalar(), Some(GROUP.order() - 1u8));

            let g = ecmath::generator(GROUP).unwrap();
            assert_eq!(minus_one.point(), point_negate(&g).unwrap().point());
            assert_eq!(
                scalar_add(&minus_one, &common::key(GROUP, 1)).unwrap(),
                common::key(GROUP, 0)
            );
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(64))]

            #[test]
            fn scalar_add_is_modular(a in common::scalar(GROUP), b in common::scalar(GROUP)) {
                let sum = engine::scalar_add(GROUP, &a, &b).unwrap();
                prop_assert_eq!(sum, (&a + &b) % GROUP.order());
            }

            #[test]
            fn scalar_mul_is_modular(a in common::scalar(GROUP), b in common::scalar(GROUP)) {
                let product = engine::scalar_mul(GROUP, &a, &b).unwrap();
                prop_assert_eq!(product, (&a * &b) % GROUP.order());
            }

            #[test]
            fn scalar_sub_undoes_add(a in common::keypair(GROUP), b in common::keypair(GROUP)) {
                let sum = scalar_add(&a, &b).unwrap();
                prop_assert_eq!(scalar_sub(&sum, &b).unwrap(), a);
            }

            #[test]
            fn scalar_inverse_is_inverse(a in common::nonzero_scalar(GROUP)) {
                let a = adapter::wrap_scalar(GROUP, a).unwrap();
                let product = scalar_mul(&a, &scalar_inverse(&a).unwrap()).unwrap();
                prop_assert_eq!(product, common::key(GROUP, 1));
            }

            #[test]
            fn scalar_div_is_integer_division(
                a in common::scalar(GROUP),
                b in common::nonzero_scalar(GROUP)
            ) {
                let quotient = engine::scalar_div(GROUP, &a, &b).unwrap();
                prop_assert_eq!(&quotient * &b + &a % &b, a);
            }

            #[test]
            fn point_add_negate_is_identity(p in common::keypair(GROUP)) {
                let negated = point_negate(&p).unwrap();
                let sum = point_add(&p, &negated).unwrap();
                prop_assert_eq!(sum.point(), Some(&Point::Identity));
                prop_assert_eq!(point_sub(&p, &p).unwrap(), sum);
            }

            #[test]
            fn point_mul_distributes(
                p in common::keypair(GROUP),
                k1 in common::keypair(GROUP),
                k2 in common::keypair(GROUP)
            ) {
                let lhs = point_add(&point_mul(&p, &k1).unwrap(), &point_mul(&p, &k2).unwrap());
                let rhs = point_mul(&p, &scalar_add(&k1, &k2).unwrap());
                prop_assert_eq!(lhs.unwrap(), rhs.unwrap());
            }

            #[test]
            fn point_mul_matches_derivation(k in common::keypair(GROUP)) {
                let g = ecmath::generator(GROUP).unwrap();
                let product = point_mul(&g, &k).unwrap();
                prop_assert_eq!(product.point(), k.point());
            }

            #[test]
            fn point_sub_is_add_of_negation(p in common::keypair(GROUP), q in common::keypair(GROUP)) {
                let difference = point_sub(&p, &q).unwrap();
                let expected = point_add(&p, &point_negate(&q).unwrap()).unwrap();
                prop_assert_eq!(difference, expected);
            }

            #[test]
            fn scalar_round_trip(s in common::scalar(GROUP)) {
                let wrapped = adapter::wrap_scalar(GROUP, s.clone()).unwrap();
                prop_assert_eq!(wrapped.kind(), KeyKind::Full);

                let (group, extracted) = adapter::extract_scalar(&wrapped).unwrap();
                prop_assert_eq!(group, GROUP);
                prop_assert_eq!(&extracted, &s);
                prop_assert_eq!(adapter::wrap_scalar(group, extracted).unwrap(), wrapped);
            }

            #[test]
            fn point_round_trip(k in common::keypair(GROUP)) {
                let point = k.point().unwrap().clone();
                let wrapped = adapter::wrap_point(GROUP, point.clone()).unwrap();
                prop_assert_eq!(adapter::extract_point(&wrapped).unwrap(), (GROUP, point));
            }

            #[test]
            fn sec1_round_trip(k in common::keypair(GROUP), compress in any::<bool>()) {
                let point = k.point().unwrap();
                let encoded = GROUP.encode_point(point, compress).unwrap();
                prop_assert_eq!(&GROUP.decode_point(&encoded).unwrap(), point);
            }
        }
    };
}
