use super::field::FieldElement;
use super::modular::Modular;
use crate::Curve;

use std::fmt;
use std::marker::PhantomData;

/// A point of the curve in affine coordinates.
///
/// Coordinates are trusted as given: [`AffinePoint::new`] does not check the
/// curve equation, so points that are not on the curve can be pushed through
/// the arithmetic on purpose. Use [`AffinePoint::new_checked`] when the
/// invariant should be enforced.
#[derive(Debug, Clone, Copy)]
pub enum AffinePoint<C: Curve> {
    /// The point at infinity, i.e. the additive identity.
    Identity,
    Coordinates {
        x: FieldElement<C>,
        y: FieldElement<C>,
    },
}

impl<C: Curve> fmt::Display for AffinePoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Identity => write!(f, "identity"),
            Self::Coordinates { x, y } => {
                writeln!(f)?;
                writeln!(f, "x: {}", x)?;
                writeln!(f, "y: {}", y)
            }
        }
    }
}

impl<C: Curve> PartialEq for AffinePoint<C> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Identity, Self::Identity) => true,
            (Self::Coordinates { x: x0, y: y0 }, Self::Coordinates { x: x1, y: y1 }) => {
                x0 == x1 && y0 == y1
            }
            _ => false,
        }
    }
}

impl<C: Curve> Eq for AffinePoint<C> {}

impl<C: Curve> std::ops::Neg for AffinePoint<C> {
    type Output = Self;
    fn neg(self) -> Self {
        -&self
    }
}

impl<C: Curve> std::ops::Neg for &AffinePoint<C> {
    type Output = AffinePoint<C>;
    fn neg(self) -> Self::Output {
        match self {
            AffinePoint::Identity => AffinePoint::Identity,
            AffinePoint::Coordinates { x, y } => AffinePoint::Coordinates { x: *x, y: -*y },
        }
    }
}

impl<C: Curve> std::ops::Add for AffinePoint<C> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        add_reference(&self, &rhs)
    }
}

impl<'a, 'b, C: Curve> std::ops::Add<&'b AffinePoint<C>> for &'a AffinePoint<C> {
    type Output = AffinePoint<C>;
    fn add(self, rhs: &'b AffinePoint<C>) -> Self::Output {
        add_reference(self, rhs)
    }
}

impl<C: Curve> std::ops::AddAssign<&AffinePoint<C>> for AffinePoint<C> {
    fn add_assign(&mut self, rhs: &Self) {
        *self = add_reference(self, rhs)
    }
}

impl<C: Curve> std::ops::Sub for AffinePoint<C> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl<'a, 'b, C: Curve> std::ops::Sub<&'b AffinePoint<C>> for &'a AffinePoint<C> {
    type Output = AffinePoint<C>;
    fn sub(self, rhs: &'b AffinePoint<C>) -> Self::Output {
        self + &(-rhs)
    }
}

impl<C: Curve> AffinePoint<C> {
    pub const GENERATOR: Self = Self::Coordinates {
        x: FieldElement(C::GENERATOR_X, PhantomData),
        y: FieldElement(C::GENERATOR_Y, PhantomData),
    };

    pub const IDENTITY: Self = Self::Identity;

    pub fn new(x: FieldElement<C>, y: FieldElement<C>) -> Self {
        Self::Coordinates { x, y }
    }

    pub fn new_checked(x: FieldElement<C>, y: FieldElement<C>) -> Option<Self> {
        let point = Self::new(x, y);
        point.is_on_curve().then(|| point)
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }

    pub fn is_on_curve(&self) -> bool {
        match self {
            Self::Identity => true,
            Self::Coordinates { x, y } => {
                let a = FieldElement::new(C::COEFF_A);
                let b = FieldElement::new(C::COEFF_B);

                let y2 = *y * *y;
                let x3 = *x * *x * *x;
                let ax = a * *x;
                let t5 = y2 - (x3 + ax + b);

                t5.is_zero()
            }
        }
    }

    pub fn double(&self) -> Self {
        add_reference(self, self)
    }

    pub fn x(&self) -> Option<&FieldElement<C>> {
        match self {
            Self::Identity => None,
            Self::Coordinates { x, .. } => Some(x),
        }
    }

    pub fn y(&self) -> Option<&FieldElement<C>> {
        match self {
            Self::Identity => None,
            Self::Coordinates { y, .. } => Some(y),
        }
    }
}

/// Reference chord-and-tangent addition in affine coordinates.
///
/// Every division goes through [`Modular::inverse`], and the slope
/// denominator is never zero on the paths that reach it: whenever
/// `x1 == x2`, the result is a doubling only if `y1 == y2 != 0` and the
/// identity otherwise. For points on the curve the identity branch is
/// exactly `P + (-P)`; for off-curve pairs sharing an x coordinate the
/// vertical line is taken as meeting the curve at infinity.
pub fn add_reference<C: Curve>(lhs: &AffinePoint<C>, rhs: &AffinePoint<C>) -> AffinePoint<C> {
    let ((x1, y1), (x2, y2)) = match (lhs, rhs) {
        (AffinePoint::Identity, _) => return *rhs,
        (_, AffinePoint::Identity) => return *lhs,
        (
            AffinePoint::Coordinates { x: x1, y: y1 },
            AffinePoint::Coordinates { x: x2, y: y2 },
        ) => ((x1, y1), (x2, y2)),
    };

    let lambda = if x1 == x2 {
        if y1 != y2 || y1.is_zero() {
            return AffinePoint::Identity;
        }
        // tangent: (3x^2 + a) / 2y
        let a = FieldElement::new(C::COEFF_A);
        let three = FieldElement::new(bigint::U256::from_u8(3));
        let numerator = three * *x1 * *x1 + a;
        let denominator = *y1 + *y1;
        // NOTE unwrap is fine because y1 is nonzero and the modulus is odd
        numerator * denominator.inverse().unwrap()
    } else {
        // chord: (y2 - y1) / (x2 - x1)
        let numerator = *y2 - *y1;
        let denominator = *x2 - *x1;
        // NOTE unwrap is fine because x1 != x2 in this branch
        numerator * denominator.inverse().unwrap()
    };

    let x3 = lambda * lambda - *x1 - *x2;
    let y3 = lambda * (*x1 - x3) - *y1;

    AffinePoint::Coordinates { x: x3, y: y3 }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::curve::test_curves::TestCurveSmallMod;
    use crate::Secp256k1;

    use bigint::U256;

    type SecPoint = AffinePoint<Secp256k1>;
    type SmallPoint = AffinePoint<TestCurveSmallMod>;

    fn small(x: u32, y: u32) -> SmallPoint {
        SmallPoint::new(
            FieldElement::new(U256::from_u32(x)),
            FieldElement::new(U256::from_u32(y)),
        )
    }

    fn sec(x: &str, y: &str) -> SecPoint {
        SecPoint::new(
            FieldElement::new(U256::from_be_hex(x)),
            FieldElement::new(U256::from_be_hex(y)),
        )
    }

    fn g2() -> SecPoint {
        sec(
            "c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5",
            "1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a",
        )
    }

    fn g3() -> SecPoint {
        sec(
            "f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9",
            "388f7b0f632de8140fe337e62a37f3566500a99934c2231b6cb9fd7584b8e672",
        )
    }

    #[test]
    fn on_curve_check() {
        assert!(SecPoint::GENERATOR.is_on_curve());
        assert!(SecPoint::IDENTITY.is_on_curve());
        assert!(g2().is_on_curve());
        assert!(g3().is_on_curve());
        assert!(SmallPoint::GENERATOR.is_on_curve());
        assert!(small(3, 0).is_on_curve());

        let off_curve = sec(
            "0000000000000000000000000000000000000000000000000000000000000001",
            "0000000000000000000000000000000000000000000000000000000000000001",
        );
        assert!(!off_curve.is_on_curve());
        assert!(!small(0, 0).is_on_curve());
    }

    #[test]
    fn checked_constructor() {
        let one = FieldElement::<Secp256k1>::ONE;
        assert!(SecPoint::new_checked(one, one).is_none());
        assert_eq!(
            SecPoint::new_checked(
                FieldElement::new(Secp256k1::GENERATOR_X),
                FieldElement::new(Secp256k1::GENERATOR_Y)
            ),
            Some(SecPoint::GENERATOR)
        );
    }

    #[test]
    fn equality() {
        assert_eq!(SecPoint::IDENTITY, SecPoint::Identity);
        assert_ne!(SecPoint::IDENTITY, SecPoint::GENERATOR);
        assert_ne!(SecPoint::GENERATOR, g2());
        // the zero pair is an ordinary (off-curve) affine pair, not the identity
        let zero = FieldElement::<Secp256k1>::ZERO;
        assert_ne!(SecPoint::new(zero, zero), SecPoint::IDENTITY);
        assert!(!SecPoint::new(zero, zero).is_identity());
    }

    #[test]
    fn small_curve_multiples() {
        let g = SmallPoint::GENERATOR;
        let expected = [
            small(1, 5),
            small(2, 10),
            small(5, 9),
            small(12, 1),
            small(12, 16),
            small(5, 8),
            small(2, 7),
            small(1, 12),
        ];
        let mut acc = SmallPoint::IDENTITY;
        for point in expected.iter() {
            acc = acc + g;
            assert_eq!(&acc, point);
            assert!(acc.is_on_curve());
        }
        // 9G
        assert_eq!(acc + g, SmallPoint::IDENTITY);
        assert_eq!(g.double(), small(2, 10));
        assert_eq!(small(5, 9).double(), small(5, 8));
    }

    #[test]
    fn identity_law() {
        for point in [SecPoint::GENERATOR, g2(), g3(), SecPoint::IDENTITY] {
            assert_eq!(add_reference(&point, &SecPoint::IDENTITY), point);
            assert_eq!(add_reference(&SecPoint::IDENTITY, &point), point);
        }
    }

    #[test]
    fn inverse_law() {
        for point in [SecPoint::GENERATOR, g2(), g3()] {
            let negated = -point;
            assert!(negated.is_on_curve());
            assert_eq!(add_reference(&point, &negated), SecPoint::IDENTITY);
            assert_eq!(&point - &point, SecPoint::IDENTITY);
        }
        assert_eq!(-SecPoint::IDENTITY, SecPoint::IDENTITY);
    }

    #[test]
    fn two_torsion_doubles_to_identity() {
        assert_eq!(small(3, 0).double(), SmallPoint::IDENTITY);
    }

    #[test]
    fn off_curve_vertical_line() {
        let a = sec(
            "0000000000000000000000000000000000000000000000000000000000000001",
            "0000000000000000000000000000000000000000000000000000000000000002",
        );
        let b = sec(
            "0000000000000000000000000000000000000000000000000000000000000001",
            "0000000000000000000000000000000000000000000000000000000000000003",
        );
        assert_eq!(a + b, SecPoint::IDENTITY);
    }

    #[test]
    fn commutativity() {
        let points = [SecPoint::GENERATOR, g2(), g3(), SecPoint::IDENTITY];
        for p in points.iter() {
            for q in points.iter() {
                assert_eq!(p + q, q + p);
            }
        }
    }

    #[test]
    fn point_addition() {
        let g = SecPoint::GENERATOR;
        assert_eq!(g.double(), g2());
        assert_eq!(g + g, g2());
        assert_eq!(g2() + g, g3());
        assert_eq!(g3() - g, g2());

        let mut acc = g;
        acc += &g2();
        assert_eq!(acc, g3());

        let random_double = sec(
            "b8f0170e293fcc9291bee2665e9ca9b25d3b11810ed68d9ea0cb440d7064e4da",
            "0691aa44502212591132aa6f27582b78f9976998de355c4ee5960db05ac0a2a3",
        )
        .double();
        assert!(random_double.is_on_curve());
        assert_eq!(
            random_double,
            sec(
                "d99bdf80fe99540ed7c33669cc43ac72fa2fa2c14b731ae6758c1c17eaf7b26e",
                "cac2c38a379655150567315c7cf7f596585b577b28e03108b0d2df2b9c83af52",
            )
        );
    }

    #[test]
    fn associativity() {
        let g = SecPoint::GENERATOR;
        assert_eq!((g + g2()) + g3(), g + (g2() + g3()));
        assert_eq!((g3() + g3()) + g, g + (g3() + g3()));
    }
}
