use super::point::{add_reference, AffinePoint};
use crate::Curve;

use num_bigint::BigUint;
use num_traits::Zero;

use std::fmt;

/// Non-negative multiplier of arbitrary width.
///
/// The value is taken literally and is never reduced modulo the group order.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Scalar(BigUint);

impl Scalar {
    pub fn new(number: BigUint) -> Self {
        Self(number)
    }

    pub fn inner(&self) -> &BigUint {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn bits(&self) -> u64 {
        self.0.bits()
    }
}

impl From<BigUint> for Scalar {
    fn from(number: BigUint) -> Self {
        Self(number)
    }
}

impl From<u64> for Scalar {
    fn from(number: u64) -> Self {
        Self(BigUint::from(number))
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<C: Curve> std::ops::Mul<&Scalar> for &AffinePoint<C> {
    type Output = AffinePoint<C>;
    fn mul(self, rhs: &Scalar) -> Self::Output {
        self.scalar_mul(rhs)
    }
}

impl<C: Curve> std::ops::Mul<Scalar> for AffinePoint<C> {
    type Output = AffinePoint<C>;
    fn mul(self, rhs: Scalar) -> Self::Output {
        self.scalar_mul(&rhs)
    }
}

impl<C: Curve> AffinePoint<C> {
    /// Double-and-add over the bits of `scalar`, most significant first.
    /// Both steps go through [`add_reference`].
    pub fn scalar_mul(&self, scalar: &Scalar) -> Self {
        let mut q = Self::IDENTITY;
        for i in (0..scalar.bits()).rev() {
            q = add_reference(&q, &q);
            if scalar.0.bit(i) {
                q = add_reference(&q, self);
            }
        }
        q
    }

    /// `[scalar]G`, i.e. the public key belonging to a private scalar.
    pub fn mul_generator(scalar: &Scalar) -> Self {
        Self::GENERATOR.scalar_mul(scalar)
    }
}
