//! secp256k1 elliptic curve (a.k.a. K-256)
//!
//! Specified in SEC 2: Recommended Elliptic Curve Domain Parameters:
//!
//! <https://www.secg.org/sec2-v2.pdf>
//!
//! Its equation is `y² = x³ + 7` over a ~256-bit prime field.

use crate::{CurveParams, Group};
use hex_literal::hex;

/// Field prime `p = 2^256 − 2^32 − 977`.
const P: [u8; 32] = hex!("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f");

const A: [u8; 1] = [0];

const B: [u8; 1] = [7];

const GX: [u8; 32] = hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798");

const GY: [u8; 32] = hex!("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8");

const N: [u8; 32] = hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");

/// secp256k1 domain parameters.
pub(crate) const PARAMS: CurveParams = CurveParams {
    name: "secp256k1",
    aliases: &["K-256"],
    oid: "1.3.132.0.10",
    p: &P,
    a: &A,
    b: &B,
    gx: &GX,
    gy: &GY,
    n: &N,
};

impl_named_curve!(k256::Secp256k1, Group::Secp256k1, &PARAMS);
