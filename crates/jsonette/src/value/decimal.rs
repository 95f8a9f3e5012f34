//! Exact decimals.
//!
//! Values are stored as [`fraction::BigDecimal`]. `Scientific` is the normalized digit form
//! that the parser builds and the serializer writes.
use core::fmt;

use fraction::GenericFraction;
use num_bigint::BigUint;

pub use fraction::BigDecimal;

/// Largest exponent magnitude accepted in a number literal.
///
/// Literals with a larger exponent and a non-zero mantissa fail with `NumberOutOfRange`.
/// Decimals beyond it are still rendered, without an exponent.
pub const MAX_EXPONENT: u64 = 4096;

/// Negative exponents up to this magnitude are rendered as plain fractions.
const MAX_PLAIN_SCALE: u64 = 64;

/// A finite decimal `digits * 10^exponent`.
///
/// `digits` has no leading or trailing zeros. Zero has no digits, exponent `0` and no sign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Scientific {
    negative: bool,
    digits: String,
    exponent: i64,
}

impl Scientific {
    fn zero() -> Self {
        Scientific {
            negative: false,
            digits: String::new(),
            exponent: 0,
        }
    }

    /// Builds the digit form of `whole.fraction * 10^exponent`.
    ///
    /// `whole` and `fraction` must consist of ASCII digits only. Returns `None` if the resulting
    /// exponent does not fit into `u32` in magnitude.
    pub(crate) fn from_parts(
        negative: bool,
        whole: &str,
        fraction: &str,
        exponent: i64,
    ) -> Option<Self> {
        let mut digits = String::with_capacity(whole.len() + fraction.len());
        digits.push_str(whole);
        digits.push_str(fraction);
        let significant = digits.trim_start_matches('0');
        if significant.is_empty() {
            return Some(Scientific::zero());
        }
        let trimmed = significant.trim_end_matches('0');
        let trailing_zeros = i64::try_from(significant.len() - trimmed.len()).ok()?;
        let exponent = exponent
            .checked_sub(i64::try_from(fraction.len()).ok()?)?
            .checked_add(trailing_zeros)?;
        u32::try_from(exponent.unsigned_abs()).ok()?;
        Some(Scientific {
            negative,
            digits: trimmed.to_string(),
            exponent,
        })
    }

    /// The shortest digits that read back as `value`, or `None` for NaN and infinities.
    pub(crate) fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        // `LowerExp` produces the shortest round-tripping digits, e.g. `-1.25e-7`
        let text = format!("{value:e}");
        let (mantissa, exponent) = text.split_once('e')?;
        let (negative, mantissa) = split_sign(mantissa);
        let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        Scientific::from_parts(negative, whole, fraction, exponent.parse().ok()?)
    }

    /// The digits of `value` up to its precision, or `None` for NaN and infinities.
    pub(crate) fn from_decimal(value: &BigDecimal) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        // Plain digits with a `.` only when the precision keeps a non-zero fraction digit
        let text = value.to_string();
        let (negative, text) = split_sign(&text);
        let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
        Scientific::from_parts(negative, whole, fraction, 0)
    }

    /// The nearest `f64`. Out-of-range magnitudes become infinities or zero.
    pub(crate) fn to_f64(&self) -> f64 {
        if self.digits.is_empty() {
            return 0.0;
        }
        let sign = if self.negative { "-" } else { "" };
        format!("{sign}{}e{}", self.digits, self.exponent)
            .parse()
            .unwrap_or(f64::NAN)
    }

    /// The exact decimal, with its precision set to the number of fraction digits.
    pub(crate) fn to_decimal(&self) -> BigDecimal {
        let Some(digits) = BigUint::parse_bytes(self.digits.as_bytes(), 10) else {
            return BigDecimal::from(0_u8);
        };
        // Bounded by `from_parts`
        let shift = u32::try_from(self.exponent.unsigned_abs()).unwrap_or(u32::MAX);
        let power = BigUint::from(10_u8).pow(shift);
        let (numerator, denominator, precision) = if self.exponent < 0 {
            (digits, power, usize::try_from(shift).unwrap_or(usize::MAX))
        } else {
            (digits * power, BigUint::from(1_u8), 0)
        };
        let fraction = if self.negative {
            GenericFraction::new_neg(numerator, denominator)
        } else {
            GenericFraction::new(numerator, denominator)
        };
        BigDecimal::from_fraction(fraction).set_precision(precision)
    }
}

fn split_sign(text: &str) -> (bool, &str) {
    match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    }
}

impl fmt::Display for Scientific {
    /// Always keeps a `.` or an `e`, and never writes an exponent beyond [`MAX_EXPONENT`], so
    /// the text parses back to an equal decimal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.digits.is_empty() {
            return f.write_str("0.0");
        }
        if self.negative {
            f.write_str("-")?;
        }
        let digits = &self.digits;
        let exponent = self.exponent;
        let magnitude = exponent.unsigned_abs();
        let zeros = usize::try_from(magnitude).map_err(|_| fmt::Error)?;
        if exponent == 0 {
            write!(f, "{digits}.0")
        } else if (exponent > 0 || magnitude > MAX_PLAIN_SCALE) && magnitude <= MAX_EXPONENT {
            write!(f, "{digits}e{exponent}")
        } else if exponent > 0 {
            write!(f, "{digits}{}.0", "0".repeat(zeros))
        } else if zeros < digits.len() {
            let (whole, fraction) = digits.split_at(digits.len() - zeros);
            write!(f, "{whole}.{fraction}")
        } else {
            write!(f, "0.{digits:0>zeros$}")
        }
    }
}
