//! Sieves of Eratosthenes for all primes up to a limit
//!
//! The classical sieve strikes multiples of each prime from a table of [0, limit]. The first
//! unstruck number after a prime is the next prime, and once we pass sqrt(limit) every remaining
//! unstruck number must be prime too.
//!
//! A wheel sieve first rules out every number sharing a factor with a fixed wheel size, usually a
//! primorial like 2 * 3 * 5 * 7 = 210. The residues coprime to the wheel repeat every wheel_size
//! numbers, so one precomputed pattern tiled across the table removes 1 - 48/210 of the candidates
//! before any prime is struck.
//!
//! Usage:
//!
//!     use prime_sieve::{eratosthenes_sieve, prime_factors, wheel_sieve, Sieve};
//!
//!     assert_eq!(vec![2, 3, 5, 7], eratosthenes_sieve(10).unwrap());
//!     assert_eq!(vec![2, 3, 5, 7], wheel_sieve(10, 210).unwrap());
//!     assert_eq!(vec![2, 3, 5, 7], prime_factors(210).unwrap());
//!     assert_eq!(vec![83, 89, 97], Sieve::wheel(100, 30).unwrap().skip(22).collect::<Vec<_>>());

// External crates
#![cfg_attr(feature = "nightly", feature(test))]
#[cfg(all(test, feature = "nightly"))]
extern crate test;

// Internal modules
mod config;
mod constants;
mod eratosthenes;
mod error;
mod factor;
mod sieve;
mod table;
mod wheel;

use tracing::debug;

pub use config::{SieveConfig, Strategy};
pub use constants::{DEFAULT_LIMIT, DEFAULT_WHEEL_SIZE};
pub use error::{Result, SieveError};
pub use factor::{gcd, prime_factors};
pub use sieve::Sieve;
pub use wheel::WheelPattern;

/// All primes in [0, limit], ascending, by the classical sieve of Eratosthenes.
pub fn eratosthenes_sieve(limit: u64) -> Result<Vec<u64>> {
    let primes = Sieve::eratosthenes(limit)?.collect::<Vec<_>>();
    debug!(limit, count = primes.len(), "sieved primes");
    Ok(primes)
}

/// All primes in [0, limit], ascending, by a sieve pre-filtered with a wheel of wheel_size.
///
/// Fails with SieveError::InvalidWheelSize if wheel_size < 2.
pub fn wheel_sieve(limit: u64, wheel_size: u64) -> Result<Vec<u64>> {
    let primes = Sieve::wheel(limit, wheel_size)?.collect::<Vec<_>>();
    debug!(limit, wheel_size, count = primes.len(), "sieved primes");
    Ok(primes)
}
