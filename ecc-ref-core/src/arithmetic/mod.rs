mod field;
mod modular;
mod point;
mod scalar;

pub use field::FieldElement;
pub use modular::{mul_mod_u256, Modular};
pub use point::{add_reference, AffinePoint};
pub use scalar::Scalar;
