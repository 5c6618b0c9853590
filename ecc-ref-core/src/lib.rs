//! Reference elliptic-curve arithmetic on secp256k1.
//!
//! Point addition and scalar multiplication are written out explicitly in
//! affine coordinates so that results can be audited line by line and used
//! to validate other implementations.
#![deny(clippy::dbg_macro)]
#![deny(clippy::all)]

pub mod arithmetic;
pub mod curve;
pub mod parse;
pub mod signer;
pub mod summation;

pub use arithmetic::{add_reference, AffinePoint, FieldElement, Modular, Scalar};
pub use bigint::U256;
pub use curve::{Curve, Secp256k1};
pub use summation::{sum_points, PointSum};
