use core::fmt;

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use super::{BigDecimal, Scientific};

/// A JSON number stored in the narrowest representation that holds it exactly.
///
/// Integers escalate `i8 -> i16 -> i32 -> i64 -> BigInt`, non-integers escalate
/// `f32 -> f64 -> BigDecimal`. The `From` conversions and the parser both produce the canonical
/// width, and equality is per variant: `I8(1)` and `I16(1)` are different values.
#[derive(Debug, Clone)]
pub enum Number {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    BigInt(BigInt),
    F32(f32),
    F64(f64),
    BigDecimal(BigDecimal),
}

impl Number {
    /// Picks the narrowest integer width that holds `value`.
    #[must_use]
    pub fn from_integer(value: BigInt) -> Self {
        match value.to_i64() {
            Some(value) => Number::from_i64(value),
            None => Number::BigInt(value),
        }
    }

    fn from_i64(value: i64) -> Self {
        if let Ok(value) = i8::try_from(value) {
            Number::I8(value)
        } else if let Ok(value) = i16::try_from(value) {
            Number::I16(value)
        } else if let Ok(value) = i32::try_from(value) {
            Number::I32(value)
        } else {
            Number::I64(value)
        }
    }

    /// Picks the narrowest float width whose shortest decimal form equals `value`, falling back
    /// to keeping the decimal itself.
    ///
    /// The decimal is read up to its precision. NaN and infinities become the matching `F64`.
    #[must_use]
    pub fn from_decimal(value: BigDecimal) -> Self {
        match Scientific::from_decimal(&value) {
            Some(digits) => {
                let nearest = digits.to_f64();
                Number::from_scientific(&digits, nearest)
            }
            None => Number::F64(value.to_f64().unwrap_or(f64::NAN)),
        }
    }

    /// `nearest` must be the `f64` closest to `digits`.
    pub(crate) fn from_scientific(digits: &Scientific, nearest: f64) -> Self {
        if Scientific::from_f64(nearest).as_ref() == Some(digits) {
            Number::from_exact_f64(nearest)
        } else {
            Number::BigDecimal(digits.to_decimal())
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
    fn from_exact_f64(value: f64) -> Self {
        let single = value as f32;
        if f64::from(single) == value {
            Number::F32(single)
        } else {
            Number::F64(value)
        }
    }

    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Number::I8(_) | Number::I16(_) | Number::I32(_) | Number::I64(_) | Number::BigInt(_)
        )
    }

    #[must_use]
    pub fn is_float(&self) -> bool {
        !self.is_integer()
    }

    /// Returns the value as `i64` if it is an integer within range.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::I8(value) => Some(i64::from(*value)),
            Number::I16(value) => Some(i64::from(*value)),
            Number::I32(value) => Some(i64::from(*value)),
            Number::I64(value) => Some(*value),
            Number::BigInt(value) => value.to_i64(),
            Number::F32(_) | Number::F64(_) | Number::BigDecimal(_) => None,
        }
    }

    /// Returns the nearest `f64`. Lossy for `BigInt`, `BigDecimal` and large `I64` values.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::I8(value) => f64::from(*value),
            Number::I16(value) => f64::from(*value),
            Number::I32(value) => f64::from(*value),
            #[allow(clippy::cast_precision_loss)]
            Number::I64(value) => *value as f64,
            Number::BigInt(value) => value.to_f64().unwrap_or(f64::NAN),
            Number::F32(value) => f64::from(*value),
            Number::F64(value) => *value,
            Number::BigDecimal(value) => Scientific::from_decimal(value).map_or_else(
                || value.to_f64().unwrap_or(f64::NAN),
                |digits| digits.to_f64(),
            ),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::I8(a), Number::I8(b)) => a == b,
            (Number::I16(a), Number::I16(b)) => a == b,
            (Number::I32(a), Number::I32(b)) => a == b,
            (Number::I64(a), Number::I64(b)) => a == b,
            (Number::BigInt(a), Number::BigInt(b)) => a == b,
            (Number::F32(a), Number::F32(b)) => a == b,
            (Number::F64(a), Number::F64(b)) => a == b,
            (Number::BigDecimal(a), Number::BigDecimal(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I8(value) => write!(f, "{value}"),
            Number::I16(value) => write!(f, "{value}"),
            Number::I32(value) => write!(f, "{value}"),
            Number::I64(value) => write!(f, "{value}"),
            Number::BigInt(value) => write!(f, "{value}"),
            // Widened so the digits match what the parser narrowed from
            Number::F32(value) => write_float(f, f64::from(*value)),
            Number::F64(value) => write_float(f, *value),
            Number::BigDecimal(value) => match Scientific::from_decimal(value) {
                Some(digits) => write!(f, "{digits}"),
                None => f.write_str("null"),
            },
        }
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_finite() {
        // `Debug` keeps a fraction or exponent, so the text reads back as a float
        write!(f, "{value:?}")
    } else {
        f.write_str("null")
    }
}

macro_rules! impl_from_small_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::from_i64(i64::from(value))
                }
            }
        )*
    };
}

impl_from_small_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_from_wide_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::from_integer(BigInt::from(value))
                }
            }
        )*
    };
}

impl_from_wide_int!(u64, i128, u128, isize, usize);

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Number::from_integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        if value.is_finite() {
            Number::from_exact_f64(value)
        } else {
            Number::F64(value)
        }
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::from(f64::from(value))
    }
}

impl From<BigDecimal> for Number {
    fn from(value: BigDecimal) -> Self {
        Number::from_decimal(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fraction::GenericFraction;
    use test_case::test_case;

    #[test_case(0, Number::I8(0))]
    #[test_case(127, Number::I8(127))]
    #[test_case(-128, Number::I8(-128))]
    #[test_case(128, Number::I16(128))]
    #[test_case(-129, Number::I16(-129))]
    #[test_case(32_768, Number::I32(32_768))]
    #[test_case(2_147_483_648, Number::I64(2_147_483_648))]
    #[test_case(i64::MIN, Number::I64(i64::MIN))]
    fn narrowest_integer(value: i64, expected: Number) {
        assert_eq!(Number::from(value), expected);
        assert_eq!(Number::from_integer(BigInt::from(value)), expected);
    }

    #[test]
    fn wide_integers() {
        let big = BigInt::from(u64::MAX);
        assert_eq!(Number::from(u64::MAX), Number::BigInt(big));
        assert_eq!(Number::from(300_usize), Number::I16(300));
        assert_eq!(Number::from(u64::from(u32::MAX)), Number::I64(4_294_967_295));
    }

    #[test_case(1.5, Number::F32(1.5))]
    #[test_case(0.1, Number::F64(0.1))]
    #[test_case(-0.25, Number::F32(-0.25))]
    #[test_case(1e300, Number::F64(1e300))]
    fn narrowest_float(value: f64, expected: Number) {
        assert_eq!(Number::from(value), expected);
    }

    fn decimal(text: &str) -> BigDecimal {
        text.parse().expect("valid decimal")
    }

    #[test]
    fn decimal_without_float_equivalent() {
        // Rounds to the same `f64` as 0.1, whose shortest form is shorter
        let precise = decimal("0.10000000000000000000000001");
        assert_eq!(
            Number::from_decimal(precise.clone()),
            Number::BigDecimal(precise)
        );
    }

    #[test_case("1.50", Number::F32(1.5))]
    #[test_case("0.1", Number::F64(0.1))]
    #[test_case("-7", Number::F32(-7.0))]
    fn decimal_with_float_equivalent(text: &str, expected: Number) {
        assert_eq!(Number::from(decimal(text)), expected);
    }

    #[test]
    fn decimal_is_read_up_to_its_precision() {
        let third = BigDecimal::from_fraction(GenericFraction::new(1_u8, 3_u8)).set_precision(30);
        let Number::BigDecimal(stored) = Number::from(third) else {
            panic!("thirty digits do not fit a float");
        };
        assert_eq!(stored, decimal("0.333333333333333333333333333333"));
        assert_eq!(stored.get_precision(), 30);
    }

    #[test]
    fn non_finite_decimal() {
        assert!(matches!(Number::from(BigDecimal::nan()), Number::F64(value) if value.is_nan()));
        assert_eq!(
            Number::from(BigDecimal::neg_infinity()),
            Number::F64(f64::NEG_INFINITY)
        );
        assert_eq!(Number::BigDecimal(BigDecimal::infinity()).to_string(), "null");
    }

    #[test]
    fn widths_are_distinct() {
        assert_ne!(Number::I8(1), Number::I16(1));
        assert_ne!(Number::F32(1.5), Number::F64(1.5));
        assert_ne!(Number::I8(1), Number::F32(1.0));
    }

    #[test_case(Number::I8(-5), "-5")]
    #[test_case(Number::I64(9_000_000_000), "9000000000")]
    #[test_case(Number::F32(1.5), "1.5")]
    #[test_case(Number::F32(1.0), "1.0")]
    #[test_case(Number::F64(0.1), "0.1")]
    #[test_case(Number::F64(1e300), "1e300")]
    #[test_case(Number::F64(f64::NAN), "null")]
    #[test_case(Number::from_decimal(decimal("0.10000000000000000000000001")), "0.10000000000000000000000001"; "decimal")]
    #[test_case(Number::from_decimal(decimal("-12345678901234567890.5")), "-12345678901234567890.5"; "negative decimal")]
    fn display(number: Number, expected: &str) {
        assert_eq!(number.to_string(), expected);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn accessors() {
        assert_eq!(Number::I16(300).as_i64(), Some(300));
        assert_eq!(Number::F32(1.5).as_i64(), None);
        assert_eq!(Number::F32(1.5).as_f64(), 1.5);
        assert!(Number::BigInt(BigInt::from(1)).is_integer());
        assert!(Number::F64(0.1).is_float());
    }
}
