//! Exact arithmetic used by the expectation and variance formulas.
//!
//! Arbitrary precision comes from the `num` stack; the library never
//! inspects the representation.

pub use num_bigint::BigInt as Integer;
pub use num_rational::BigRational as Rational;

use num_traits::ToPrimitive;

/// An exact rational from a numerator/denominator pair.
pub fn rational(num: i64, den: i64) -> Rational {
    Rational::new(Integer::from(num), Integer::from(den))
}

/// An exact rational from an unsigned integer.
pub fn rational_from(num: u64) -> Rational {
    Rational::from(Integer::from(num))
}

/// Lossy conversion to `f64`.
pub fn to_f64(r: &Rational) -> f64 {
    r.to_f64().unwrap_or(f64::NAN)
}
