//! NIST P-256 elliptic curve (a.k.a. prime256v1, secp256r1)
//!
//! Specified in FIPS 186-4: Digital Signature Standard (DSS):
//!
//! <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.186-4.pdf>
//!
//! Its equation is `y² = x³ - 3x + b` over a ~256-bit prime field where `b` is
//! the "verifiably random" constant below.

use crate::{CurveParams, Group};
use hex_literal::hex;

/// Field prime `p = 2^224 (2^32 − 1) + 2^192 + 2^96 − 1`.
const P: [u8; 32] = hex!("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff");

/// `a = −3 mod p`.
const A: [u8; 32] = hex!("ffffffff00000001000000000000000000000000fffffffffffffffffffffffc");

const B: [u8; 32] = hex!("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b");

const GX: [u8; 32] = hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296");

const GY: [u8; 32] = hex!("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5");

const N: [u8; 32] = hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551");

/// NIST P-256 domain parameters.
pub(crate) const PARAMS: CurveParams = CurveParams {
    name: "P-256",
    aliases: &["secp256r1", "prime256v1", "nistp256"],
    oid: "1.2.840.10045.3.1.7",
    p: &P,
    a: &A,
    b: &B,
    gx: &GX,
    gy: &GY,
    n: &N,
};

impl_named_curve!(p256::NistP256, Group::NistP256, &PARAMS);
