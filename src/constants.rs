/// Limit used when callers don't pick one.
pub const DEFAULT_LIMIT: u64 = 1_000_000;

/// 2 * 3 * 5 * 7
pub const DEFAULT_WHEEL_SIZE: u64 = 210;

/// A wheel needs at least one prime factor to exclude anything.
pub const MIN_WHEEL_SIZE: u64 = 2;

/// Floor of the square root of n, exact for every u64.
///
/// The f64 estimate can be off by one for large n, so nudge it until x^2 <= n < (x + 1)^2.
pub fn isqrt(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    let mut x = (n as f64).sqrt() as u64;
    while x > 0 && x.checked_mul(x).map_or(true, |square| square > n) {
        x -= 1;
    }
    while (x + 1).checked_mul(x + 1).map_or(false, |square| square <= n) {
        x += 1;
    }
    x
}

/// Ceiling of the square root of n.
pub fn ceil_sqrt(n: u64) -> u64 {
    let root = isqrt(n);
    if root * root < n {
        root + 1
    } else {
        root
    }
}

// Every composite at or below limit has a prime factor below root_bound, so striking stops here.
pub fn root_bound(limit: u64) -> u64 {
    ceil_sqrt(limit) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isqrt_correct() {
        assert_eq!(0, isqrt(0));
        assert_eq!(1, isqrt(1));
        assert_eq!(1, isqrt(3));
        assert_eq!(2, isqrt(4));
        assert_eq!(9, isqrt(99));
        assert_eq!(10, isqrt(100));
        assert_eq!(4_294_967_295, isqrt(u64::MAX));
        assert_eq!(3_037_000_499, isqrt(9_223_372_030_926_249_001));
        assert_eq!(3_037_000_498, isqrt(9_223_372_030_926_249_000));
    }

    #[test]
    fn ceil_sqrt_correct() {
        assert_eq!(0, ceil_sqrt(0));
        assert_eq!(1, ceil_sqrt(1));
        assert_eq!(2, ceil_sqrt(2));
        assert_eq!(2, ceil_sqrt(4));
        assert_eq!(3, ceil_sqrt(5));
        assert_eq!(1_000, ceil_sqrt(1_000_000));
        assert_eq!(1_001, ceil_sqrt(1_000_001));
    }

    #[test]
    fn root_bound_correct() {
        assert_eq!(1, root_bound(0));
        assert_eq!(5, root_bound(10));
        assert_eq!(1_001, root_bound(DEFAULT_LIMIT));
    }
}
