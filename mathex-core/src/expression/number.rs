//! 数字 token 到精确有理数的转换
//!
//! 接受词法分析器产出的 `Number` 文本：可带符号、符号后的空白、
//! 小数部分与指数部分。指数必须是整数。

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};
use tracing::trace;

use super::error::EvalError;
use super::TARGET;

/// 指数绝对值上限
pub const MAX_EXPONENT: u32 = 4096;

/// 把 `Number` token 的文本转换为有理数
pub fn parse_number(text: &str) -> Result<BigRational, EvalError> {
    let invalid = |reason| EvalError::InvalidNumber {
        text: text.to_owned(),
        reason,
    };
    let compact: String = text.chars().filter(|c| !matches!(c, ' ' | '\t')).collect();

    let (mantissa, exponent) = match compact.find(['e', 'E']) {
        Some(at) => (&compact[..at], Some(&compact[at + 1..])),
        None => (compact.as_str(), None),
    };

    let mut value = parse_decimal(mantissa).map_err(invalid)?;
    if let Some(exponent) = exponent {
        let exponent = parse_decimal(exponent).map_err(invalid)?;
        if !exponent.is_integer() {
            return Err(invalid("fractional exponent"));
        }
        let exponent = exponent
            .to_integer()
            .to_i64()
            .filter(|e| e.unsigned_abs() <= u64::from(MAX_EXPONENT))
            .ok_or_else(|| invalid("exponent out of range"))?;
        value = scale(value, exponent);
    }

    trace!(target: TARGET, text, value = %value, "Parsed number");
    Ok(value)
}

/// `[sign] digits [. digits]` 或 `[sign] . digits`
fn parse_decimal(text: &str) -> Result<BigRational, &'static str> {
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let (integral, fraction) = match unsigned.split_once('.') {
        Some((integral, fraction)) if !fraction.is_empty() => (integral, fraction),
        Some(_) => return Err("missing digits after decimal point"),
        None => (unsigned, ""),
    };
    if integral.is_empty() && fraction.is_empty() {
        return Err("missing digits");
    }
    if !integral.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
        return Err("unsupported digit");
    }

    let digits = format!("{integral}{fraction}");
    let numer: BigInt = digits.parse().map_err(|_| "unsupported digit")?;
    let denom = num_traits::pow(BigInt::from(10), fraction.len());
    let value = BigRational::new(numer, denom);
    Ok(if negative { -value } else { value })
}

fn scale(value: BigRational, exponent: i64) -> BigRational {
    if value.is_zero() || exponent == 0 {
        return value;
    }
    // exponent 已被限制在 MAX_EXPONENT 以内
    let factor = num_traits::pow(BigInt::from(10), exponent.unsigned_abs() as usize);
    if exponent.is_positive() {
        value * BigRational::from_integer(factor)
    } else {
        value / BigRational::from_integer(factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(numer: i64, denom: i64) -> BigRational {
        BigRational::new(BigInt::from(numer), BigInt::from(denom))
    }

    #[test]
    fn test_integers() {
        assert_eq!(parse_number("53").unwrap(), ratio(53, 1));
        assert_eq!(parse_number("-53").unwrap(), ratio(-53, 1));
        assert_eq!(parse_number("+  5").unwrap(), ratio(5, 1));
    }

    #[test]
    fn test_fractions() {
        assert_eq!(parse_number("-.9").unwrap(), ratio(-9, 10));
        assert_eq!(parse_number("2.50").unwrap(), ratio(5, 2));
        assert_eq!(parse_number("0.1").unwrap(), ratio(1, 10));
    }

    #[test]
    fn test_exponents() {
        assert_eq!(parse_number("-2e+1").unwrap(), ratio(-20, 1));
        assert_eq!(parse_number("1.5 E- 2").unwrap(), ratio(3, 200));
        assert_eq!(parse_number("0e4096").unwrap(), ratio(0, 1));
        assert_eq!(parse_number("3e2.0").unwrap(), ratio(300, 1));
    }

    #[test]
    fn test_fractional_exponent_rejected() {
        let err = parse_number("1e.5").unwrap_err();
        assert_eq!(
            err,
            EvalError::InvalidNumber {
                text: "1e.5".into(),
                reason: "fractional exponent",
            }
        );
    }

    #[test]
    fn test_exponent_out_of_range() {
        assert!(matches!(
            parse_number("1e99999"),
            Err(EvalError::InvalidNumber {
                reason: "exponent out of range",
                ..
            })
        ));
    }

    #[test]
    fn test_malformed() {
        for text in ["", "-", ".", "1.", "1e", "abc", "٣"] {
            assert!(parse_number(text).is_err(), "text {text:?}");
        }
    }
}
