//! NIST P-384 elliptic curve (a.k.a. secp384r1)
//!
//! Its equation is `y² = x³ - 3x + b` over a ~384-bit prime field.

use crate::{CurveParams, Group};
use hex_literal::hex;

/// Field prime `p = 2^384 − 2^128 − 2^96 + 2^32 − 1`.
const P: [u8; 48] = hex!(
    "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe"
    "ffffffff0000000000000000ffffffff"
);

const A: [u8; 48] = hex!(
    "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe"
    "ffffffff0000000000000000fffffffc"
);

const B: [u8; 48] = hex!(
    "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875a"
    "c656398d8a2ed19d2a85c8edd3ec2aef"
);

const GX: [u8; 48] = hex!(
    "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a38"
    "5502f25dbf55296c3a545e3872760ab7"
);

const GY: [u8; 48] = hex!(
    "3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c0"
    "0a60b1ce1d7e819d7a431d7c90ea0e5f"
);

const N: [u8; 48] = hex!(
    "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf"
    "581a0db248b0a77aecec196accc52973"
);

/// NIST P-384 domain parameters.
pub(crate) const PARAMS: CurveParams = CurveParams {
    name: "P-384",
    aliases: &["secp384r1", "nistp384"],
    oid: "1.3.132.0.34",
    p: &P,
    a: &A,
    b: &B,
    gx: &GX,
    gy: &GY,
    n: &N,
};

impl_named_curve!(p384::NistP384, Group::NistP384, &PARAMS);
