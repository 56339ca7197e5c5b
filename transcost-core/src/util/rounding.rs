/// digits after the decimal point in the exact expansion of the smallest
/// subnormal f64. every f64 is exactly representable with this many.
const MAX_F64_DECIMALS: usize = 1074;

/// rounds to the nearest integer, resolving exact halves to the even neighbor
/// so that 0.5 and 1.5 go to 0 and 2. survey outputs are published with this
/// convention.
pub fn round_half_even(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// rounds to a fixed number of decimal places, halves to even.
///
/// rounding is decided on the exact decimal value of `value`, not on
/// `value * 10^decimals`, whose binary product can land on the other side of a
/// half. the result is the f64 nearest to the rounded decimal.
pub fn round_to_decimals(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() || decimals >= MAX_F64_DECIMALS {
        return value;
    }
    let exact = format!("{:.*}", MAX_F64_DECIMALS, value.abs());
    let (whole, fraction) = match exact.split_once('.') {
        Some(parts) => parts,
        None => return value,
    };
    let fraction = fraction.as_bytes();

    let mut digits = whole
        .bytes()
        .chain(fraction[..decimals].iter().copied())
        .collect::<Vec<u8>>();
    let next = fraction[decimals];
    let rest_nonzero = fraction[decimals + 1..].iter().any(|d| *d != b'0');
    let last_odd = digits.last().is_some_and(|d| (d - b'0') % 2 == 1);
    let round_up = next > b'5' || (next == b'5' && (rest_nonzero || last_odd));

    let mut whole_len = whole.len();
    if round_up {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
            whole_len += 1;
        }
    }

    let (whole, fraction) = digits.split_at(whole_len);
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let whole = String::from_utf8_lossy(whole);
    let rounded = if fraction.is_empty() {
        format!("{sign}{whole}")
    } else {
        format!("{sign}{whole}.{}", String::from_utf8_lossy(fraction))
    };
    rounded.parse::<f64>().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_even() {
        assert_eq!(round_half_even(0.5), 0);
        assert_eq!(round_half_even(1.5), 2);
        assert_eq!(round_half_even(2.5), 2);
        assert_eq!(round_half_even(376.4583), 376);
        assert_eq!(round_half_even(11.29375), 11);
        assert_eq!(round_half_even(-0.7), -1);
    }

    #[test]
    fn test_round_to_decimals() {
        assert_eq!(round_to_decimals(-113.4938271, 5), -113.49383);
        assert_eq!(round_to_decimals(53.5461234, 5), 53.54612);
        assert_eq!(round_to_decimals(9.999996, 5), 10.0);
        assert_eq!(round_to_decimals(-0.000001, 5), -0.0);
        assert_eq!(round_to_decimals(7.0, 0), 7.0);
    }

    #[test]
    fn test_exact_halves_go_to_even() {
        // these are exactly representable, so they are true ties
        assert_eq!(round_to_decimals(0.125, 2), 0.12);
        assert_eq!(round_to_decimals(0.375, 2), 0.38);
        assert_eq!(round_to_decimals(0.015625, 5), 0.01562);
        assert_eq!(round_to_decimals(2.5, 0), 2.0);
    }

    #[test]
    fn test_rounds_the_decimal_value_not_the_scaled_product() {
        // the stored value of -113.197145 is just past the half, while the
        // product -113.197145 * 1e5 rounds the other way
        assert_eq!(round_to_decimals(-113.197145, 5), -113.19715);
        assert_eq!(round_to_decimals(-114.653985, 5), -114.65399);
        // the stored value of 2.675 is just below the half
        assert_eq!(round_to_decimals(2.675, 2), 2.67);
    }
}
