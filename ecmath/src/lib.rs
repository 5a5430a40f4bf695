#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## Layers
//!
//! - [`ops`]: keypair-level entry points. Operands are anything implementing
//!   [`KeyMaterial`], results are always [`Keypair`]s.
//! - [`adapter`]: conversion between keypair-shaped values and raw
//!   `(Group, BigUint)` / `(Group, Point)` pairs.
//! - [`engine`]: raw scalar and point arithmetic for a given [`Group`].
//!
//! ## ⚠️ `scalar_div` is not modular division
//!
//! [`scalar_div`] is truncating division of the underlying integers. To divide
//! modulo the group order, multiply by the inverse:
//! `scalar_mul(a, &scalar_inverse(b)?)`.

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod adapter;
pub mod curve;
pub mod engine;
pub mod ops;

mod error;
mod group;
mod keypair;
mod point;

pub use crate::{
    curve::NamedCurve,
    error::{Error, Result},
    group::{CurveParams, Group},
    keypair::{KeyKind, KeyMaterial, Keypair},
    ops::{
        generator, order, point_add, point_mul, point_negate, point_sub, scalar_add, scalar_div,
        scalar_inverse, scalar_mul, scalar_sub,
    },
    point::Point,
};
pub use num_bigint::{self, BigUint};

pub use elliptic_curve;

#[cfg(feature = "k256")]
pub use k256;
#[cfg(feature = "p256")]
pub use p256;
#[cfg(feature = "p384")]
pub use p384;
#[cfg(feature = "p521")]
pub use p521;
