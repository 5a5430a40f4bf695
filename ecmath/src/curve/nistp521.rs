//! NIST P-521 elliptic curve (a.k.a. secp521r1)
//!
//! Defined over the Mersenne prime field `2^521 − 1`. Serialized field
//! elements and scalars are 66 bytes wide, with only the low bit of the
//! leading byte in use.

use crate::{CurveParams, Group};
use hex_literal::hex;

const P: [u8; 66] = hex!(
    "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
    "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
    "ffff"
);

const A: [u8; 66] = hex!(
    "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
    "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
    "fffc"
);

const B: [u8; 66] = hex!(
    "0051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef1"
    "09e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b50"
    "3f00"
);

const GX: [u8; 66] = hex!(
    "00c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d"
    "3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5"
    "bd66"
);

const GY: [u8; 66] = hex!(
    "011839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e"
    "662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd1"
    "6650"
);

const N: [u8; 66] = hex!(
    "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
    "fffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e9138"
    "6409"
);

/// NIST P-521 domain parameters.
pub(crate) const PARAMS: CurveParams = CurveParams {
    name: "P-521",
    aliases: &["secp521r1", "nistp521"],
    oid: "1.3.132.0.35",
    p: &P,
    a: &A,
    b: &B,
    gx: &GX,
    gy: &GY,
    n: &N,
};

impl_named_curve!(p521::NistP521, Group::NistP521, &PARAMS);
