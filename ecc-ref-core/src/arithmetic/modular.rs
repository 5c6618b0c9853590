use bigint::{Encoding, NonZero, Split, U256, U512};

/// Arithmetic over the integers modulo `MODULUS`.
///
/// Implementors hold a value that is always fully reduced, so every provided
/// operation can rely on its operands being in `[0, MODULUS)`.
pub trait Modular: Sized {
    const MODULUS: U256;

    fn new(number: U256) -> Self;

    fn inner(&self) -> &U256;

    fn add(&self, other: &Self) -> Self {
        Self::new(self.inner().add_mod(other.inner(), &Self::MODULUS))
    }

    fn neg(&self) -> Self {
        Self::new(self.inner().neg_mod(&Self::MODULUS))
    }

    fn sub(&self, other: &Self) -> Self {
        Self::new(self.inner().sub_mod(other.inner(), &Self::MODULUS))
    }

    fn mul(&self, other: &Self) -> Self {
        Self::new(mul_mod_u256(self.inner(), other.inner(), &Self::MODULUS))
    }

    /// Left-to-right square-and-multiply.
    fn pow(&self, exponent: &U256) -> Self {
        let mut result = Self::new(U256::ONE);
        for byte in exponent.to_be_bytes() {
            for shift in (0..8).rev() {
                result = result.mul(&result);
                if (byte >> shift) & 1 == 1 {
                    result = result.mul(self);
                }
            }
        }
        result
    }

    /// Multiplicative inverse through Fermat's little theorem, so `MODULUS`
    /// must be prime. Zero has no inverse.
    fn inverse(&self) -> Option<Self> {
        if self.inner() == &U256::ZERO {
            return None;
        }
        let exponent = Self::MODULUS.wrapping_sub(&U256::from_u8(2));
        Some(self.pow(&exponent))
    }
}

pub fn mul_mod_u256(lhs: &U256, rhs: &U256, modulus: &U256) -> U256 {
    // NOTE modulus is never zero, so unwrap is fine here
    let mod512 = NonZero::new(U512::from((*modulus, U256::ZERO))).unwrap();
    // mul_wide yields (lo, hi), which is what U512::from expects
    let product = U512::from(lhs.mul_wide(rhs));
    // the high half of the remainder is always zero because the modulus
    // fits into 256 bits
    let (rem, _) = (product % mod512).split();
    rem
}
