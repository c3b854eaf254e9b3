//! Decimal arithmetic helpers.
//!
//! Addition, subtraction and multiplication are exact on `BigDecimal`.
//! Division rounds to [`DIVISION_PRECISION`] significant digits, half-up,
//! then strips trailing zeros down to the preferred scale (the dividend's
//! scale minus the divisor's, never below zero).

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

/// Significant digits kept by division.
pub const DIVISION_PRECISION: usize = 34;

fn pow10(exp: usize) -> BigUint {
    num_traits::pow(BigUint::from(10u8), exp)
}

fn digit_count(n: &BigUint) -> usize {
    if n.is_zero() { 1 } else { n.to_str_radix(10).len() }
}

/// Divide `a` by `b`. Returns `None` when `b` is zero.
pub fn divide(a: &BigDecimal, b: &BigDecimal) -> Option<BigDecimal> {
    if b.is_zero() {
        return None;
    }

    let (ia, sa) = a.as_bigint_and_exponent();
    let (ib, sb) = b.as_bigint_and_exponent();
    let preferred = (sa - sb).max(0);

    if ia.is_zero() {
        return Some(BigDecimal::new(BigInt::zero(), preferred));
    }

    let negative = (ia.sign() == Sign::Minus) != (ib.sign() == Sign::Minus);
    let num = ia.magnitude();
    let den = ib.magnitude();

    // Scale the dividend so the integer quotient has more digits than we keep
    let shift = (DIVISION_PRECISION + 1 + digit_count(den)).saturating_sub(digit_count(num));
    let scaled = num * pow10(shift);

    let whole = &scaled / den;
    let drop = digit_count(&whole).saturating_sub(DIVISION_PRECISION);

    let divisor = den * pow10(drop);
    let mut quotient = &scaled / &divisor;
    let remainder = &scaled % &divisor;
    if remainder * 2u8 >= divisor {
        quotient += 1u8;
    }

    // value = quotient * 10^-(shift - drop + sa - sb)
    let mut scale = shift as i64 - drop as i64 + sa - sb;
    let ten = BigUint::from(10u8);
    while scale > preferred && (&quotient % &ten).is_zero() {
        quotient /= &ten;
        scale -= 1;
    }

    let sign = if negative { Sign::Minus } else { Sign::Plus };
    let result = BigDecimal::new(BigInt::from_biguint(sign, quotient), scale);
    Some(if scale < 0 { result.with_scale(0) } else { result })
}

/// Render a number in plain positional notation, keeping its scale.
pub fn render(n: &BigDecimal) -> String {
    let (int, scale) = n.as_bigint_and_exponent();
    let digits = int.magnitude().to_str_radix(10);
    let sign = if int.sign() == Sign::Minus { "-" } else { "" };

    if scale <= 0 {
        let zeros = if int.is_zero() { 0 } else { (-scale) as usize };
        return format!("{}{}{}", sign, digits, "0".repeat(zeros));
    }

    let scale = scale as usize;
    let padded = if digits.len() <= scale {
        format!("{}{}", "0".repeat(scale + 1 - digits.len()), digits)
    } else {
        digits
    };
    let (whole, frac) = padded.split_at(padded.len() - scale);
    format!("{}{}.{}", sign, whole, frac)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    fn div(a: &str, b: &str) -> String {
        render(&divide(&dec(a), &dec(b)).unwrap())
    }

    #[test]
    fn repeating_quotient_keeps_34_digits() {
        assert_eq!(div("20", "6"), "3.333333333333333333333333333333333");
        assert_eq!(div("1", "3"), "0.3333333333333333333333333333333333");
    }

    #[test]
    fn rounds_half_up() {
        assert_eq!(div("2", "3"), "0.6666666666666666666666666666666667");
        assert_eq!(div("-2", "3"), "-0.6666666666666666666666666666666667");
    }

    #[test]
    fn exact_quotients_strip_to_preferred_scale() {
        assert_eq!(div("20", "6.0"), "3.333333333333333333333333333333333");
        assert_eq!(div("4", "2.0"), "2");
        assert_eq!(div("10", "2"), "5");
        assert_eq!(div("1", "4"), "0.25");
        assert_eq!(div("3.0", "1"), "3.0");
        assert_eq!(div("100", "2.0"), "50");
    }

    #[test]
    fn zero_divisor() {
        assert!(divide(&dec("1"), &dec("0")).is_none());
        assert!(divide(&dec("1"), &dec("0.0")).is_none());
    }

    #[test]
    fn zero_dividend() {
        assert_eq!(div("0", "7"), "0");
        assert_eq!(div("-0.0", "7"), "0.0");
    }

    #[test]
    fn render_small_fractions_without_exponent() {
        assert_eq!(div("1", "10000000"), "0.0000001");
        assert_eq!(render(&dec("-1.5")), "-1.5");
    }
}
