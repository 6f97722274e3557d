use tracing::warn;

use crate::error::{Result, SieveError};

/// Euclidean algorithm
pub fn gcd(a: u64, b: u64) -> u64 {
    let mut a = a;
    let mut b = b;
    while b > 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Decompose n into ascending primes, with multiplicity, whose product is n.
///
/// Factors of 2 are shifted out first, then odd trial divisors 3, 5, 7, ... are divided out
/// exactly. Once a divisor's square exceeds what remains, the remainder must itself be prime.
pub fn prime_factors(n: u64) -> Result<Vec<u64>> {
    if n == 0 {
        warn!(n, "rejecting factorization input");
        return Err(SieveError::InvalidFactorizationInput { n });
    }

    let mut factors = Vec::new();
    let mut remainder = n;
    while remainder & 1 == 0 {
        factors.push(2);
        remainder >>= 1;
    }

    let mut divisor: u64 = 3;
    while remainder != 1 {
        if divisor
            .checked_mul(divisor)
            .map_or(true, |square| square > remainder)
        {
            factors.push(remainder);
            break;
        }
        if remainder % divisor == 0 {
            remainder /= divisor;
            factors.push(divisor);
        } else {
            divisor += 2;
        }
    }

    Ok(factors)
}

/// The distinct primes dividing n, ascending.
pub fn distinct_prime_factors(n: u64) -> Result<Vec<u64>> {
    let mut factors = prime_factors(n)?;
    factors.dedup();
    Ok(factors)
}
