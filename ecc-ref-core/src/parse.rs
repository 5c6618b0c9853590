//! Conversions between textual integers and curve values.
//!
//! Input is read as base-10 (scalars, coordinates, private keys) or base-16
//! (message hashes). Output is either verbose decimal or compact
//! fixed-width hex, where every 256-bit integer takes exactly 64 lower-case
//! hex characters so that on-chain `uint256` decoders can read it directly.

use crate::arithmetic::{AffinePoint, FieldElement};
use crate::curve::Curve;
use crate::U256;

use bigint::Encoding;
use num_bigint::BigUint;
use num_traits::Zero;
use thiserror::Error;

/// Length of one encoded 256-bit word in hex characters.
pub const WORD_HEX_LEN: usize = 64;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid base-10 integer: {0}")]
    InvalidDecimal(String),
    #[error("invalid base-16 integer: {0}")]
    InvalidHex(String),
    #[error("odd number of coordinates: {0}")]
    OddCoordinateCount(usize),
    #[error("expected 64 hex characters, got {0}")]
    InvalidWordLength(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    /// Concatenated 64-character hex words without separators.
    Compact,
    /// Labeled decimal values, one per line.
    Verbose,
}

impl OutputMode {
    pub fn from_debug(debug: bool) -> Self {
        if debug {
            Self::Verbose
        } else {
            Self::Compact
        }
    }
}

pub fn parse_decimal(literal: &str) -> Result<BigUint, ParseError> {
    if literal.is_empty() || !literal.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidDecimal(literal.to_string()));
    }
    BigUint::parse_bytes(literal.as_bytes(), 10)
        .ok_or_else(|| ParseError::InvalidDecimal(literal.to_string()))
}

/// Parses a base-16 integer with an optional `0x` prefix.
pub fn parse_hex(literal: &str) -> Result<BigUint, ParseError> {
    let digits = literal
        .strip_prefix("0x")
        .or_else(|| literal.strip_prefix("0X"))
        .unwrap_or(literal);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseError::InvalidHex(literal.to_string()));
    }
    BigUint::parse_bytes(digits.as_bytes(), 16)
        .ok_or_else(|| ParseError::InvalidHex(literal.to_string()))
}

/// Builds a point from raw integer coordinates.
///
/// `(0, 0)` is the zero-point sentinel for the identity. Anything else is
/// reduced modulo p and kept without checking the curve equation.
pub fn decode_point<C: Curve>(x: &BigUint, y: &BigUint) -> AffinePoint<C> {
    if x.is_zero() && y.is_zero() {
        AffinePoint::Identity
    } else {
        AffinePoint::new(FieldElement::from_biguint(x), FieldElement::from_biguint(y))
    }
}

/// Pairs up a flat `[x0, y0, x1, y1, ...]` list into points.
pub fn points_from_coordinates<C: Curve>(
    coordinates: &[BigUint],
) -> Result<Vec<AffinePoint<C>>, ParseError> {
    if coordinates.len() % 2 != 0 {
        return Err(ParseError::OddCoordinateCount(coordinates.len()));
    }
    Ok(coordinates
        .chunks_exact(2)
        .map(|pair| decode_point(&pair[0], &pair[1]))
        .collect())
}

/// Parses a flat list of base-10 coordinate literals into points.
///
/// The pair count is checked before any literal is parsed, so an odd list
/// is reported as such even when it also holds a malformed literal.
pub fn parse_points<C: Curve, S: AsRef<str>>(
    literals: &[S],
) -> Result<Vec<AffinePoint<C>>, ParseError> {
    if literals.len() % 2 != 0 {
        return Err(ParseError::OddCoordinateCount(literals.len()));
    }
    let coordinates = literals
        .iter()
        .map(|literal| parse_decimal(literal.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    points_from_coordinates(&coordinates)
}

pub fn encode_word(word: &U256) -> String {
    hex::encode(word.to_be_bytes())
}

pub fn decode_word(encoded: &str) -> Result<U256, ParseError> {
    if encoded.len() != WORD_HEX_LEN {
        return Err(ParseError::InvalidWordLength(encoded.len()));
    }
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(encoded, &mut bytes)
        .map_err(|_| ParseError::InvalidHex(encoded.to_string()))?;
    Ok(U256::from_be_bytes(bytes))
}

/// Affine coordinates of `point`, with the identity mapped to `(0, 0)`.
pub fn point_coordinates<C: Curve>(point: &AffinePoint<C>) -> (FieldElement<C>, FieldElement<C>) {
    match point {
        AffinePoint::Identity => (FieldElement::ZERO, FieldElement::ZERO),
        AffinePoint::Coordinates { x, y } => (*x, *y),
    }
}

pub fn encode_point<C: Curve>(point: &AffinePoint<C>, mode: OutputMode) -> String {
    let (x, y) = point_coordinates(point);
    match mode {
        OutputMode::Compact => {
            let mut out = encode_word(&x.0);
            out.push_str(&encode_word(&y.0));
            out
        }
        OutputMode::Verbose => format!("x: {}\ny: {}", x, y),
    }
}

/// Encodes a 64-byte signature as its two 32-byte halves `r` and `s`.
pub fn encode_signature(signature: &[u8; 64], mode: OutputMode) -> String {
    let (r, s) = signature.split_at(32);
    match mode {
        OutputMode::Compact => hex::encode(signature),
        OutputMode::Verbose => format!(
            "r: {}\ns: {}",
            BigUint::from_bytes_be(r),
            BigUint::from_bytes_be(s)
        ),
    }
}
