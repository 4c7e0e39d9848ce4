//! Total division.
//!
//! The language defines division by zero to produce zero instead of
//! trapping, so these never fail:
//!
//! - `divide_int(a, 0) == 0`
//! - `remainder_int(a, 0) == 0`
//! - `divide_float(a, 0.0) == 0.0` (also for a `-0.0` divisor)
//!
//! Otherwise integer division truncates toward zero and the remainder takes
//! the sign of the dividend. `i64::MIN / -1` wraps to `i64::MIN` with
//! remainder 0.

/// Truncating integer division; 0 when `b == 0`.
#[inline]
pub const fn divide_int(a: i64, b: i64) -> i64 {
    if b == 0 {
        0
    } else {
        a.wrapping_div(b)
    }
}

/// Integer remainder (sign of `a`); 0 when `b == 0`.
#[inline]
pub const fn remainder_int(a: i64, b: i64) -> i64 {
    if b == 0 {
        0
    } else {
        a.wrapping_rem(b)
    }
}

/// IEEE division; 0.0 when `b` is zero of either sign.
#[inline]
pub fn divide_float(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        0.0
    } else {
        a / b
    }
}

#[cfg(test)]
mod tests;
