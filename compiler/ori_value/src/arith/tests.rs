use super::*;

#[test]
fn divide_int_basic() {
    assert_eq!(divide_int(10, 3), 3);
    assert_eq!(divide_int(-7, 2), -3);
    assert_eq!(divide_int(7, -2), -3);
}

#[test]
fn remainder_follows_dividend_sign() {
    assert_eq!(remainder_int(7, 3), 1);
    assert_eq!(remainder_int(-7, 3), -1);
    assert_eq!(remainder_int(7, -3), 1);
}

#[test]
fn zero_divisor_yields_zero() {
    for a in [0, 1, -1, 42, i64::MAX, i64::MIN] {
        assert_eq!(divide_int(a, 0), 0);
        assert_eq!(remainder_int(a, 0), 0);
    }
}

#[test]
fn min_over_minus_one_wraps() {
    assert_eq!(divide_int(i64::MIN, -1), i64::MIN);
    assert_eq!(remainder_int(i64::MIN, -1), 0);
}

#[test]
fn divide_float_basic() {
    assert_eq!(divide_float(1.0, 4.0), 0.25);
    assert_eq!(divide_float(-9.0, 3.0), -3.0);
}

#[test]
fn divide_float_by_either_zero_is_zero() {
    for a in [1.0, -1.0, 0.0, f64::MAX, f64::INFINITY] {
        assert_eq!(divide_float(a, 0.0).to_bits(), 0.0_f64.to_bits());
        assert_eq!(divide_float(a, -0.0).to_bits(), 0.0_f64.to_bits());
    }
}

#[test]
fn division_is_usable_in_const_context() {
    const Q: i64 = divide_int(9, 0);
    const R: i64 = remainder_int(9, 4);
    assert_eq!((Q, R), (0, 1));
}
