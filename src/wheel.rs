use tracing::{debug, warn};

use crate::constants::{root_bound, MIN_WHEEL_SIZE};
use crate::error::{Result, SieveError};
use crate::factor::distinct_prime_factors;
use crate::table::Table;

/// Residues 1..=wheel_size that may still be prime once the wheel's own primes are ruled out.
///
/// Cell k represents the number k + 1, and is set iff k + 1 is coprime to wheel_size. For
/// wheel_size = 2 * 3 = 6 that leaves 1 and 5:
///     1  2  3  4  5  6
///    [T, F, F, F, T, F]
/// Since n and n + wheel_size share the same residue, repeating the pattern rules out the same
/// fraction of candidates across any range.
pub struct WheelPattern {
    wheel_size: u64,
    primes: Vec<u64>,
    cells: Table,
}

impl WheelPattern {
    pub fn new(wheel_size: u64) -> Result<WheelPattern> {
        if wheel_size < MIN_WHEEL_SIZE {
            warn!(wheel_size, "rejecting wheel size");
            return Err(SieveError::InvalidWheelSize { wheel_size });
        }
        let primes = distinct_prime_factors(wheel_size)?;

        let mut cells = Table::filled(wheel_size, true)?;
        let end = cells.len();
        for &p in &primes {
            let p = p as usize;
            cells.strike(p - 1, end, p);
        }

        Ok(WheelPattern {
            wheel_size,
            primes,
            cells,
        })
    }

    pub fn len(&self) -> u64 {
        self.wheel_size
    }

    /// The distinct primes dividing the wheel size, ascending.
    pub fn primes(&self) -> &[u64] {
        &self.primes
    }

    /// Could n be prime as far as this wheel can tell? 0 never is.
    pub fn is_candidate(&self, n: u64) -> bool {
        n != 0 && self.cells.get(((n - 1) % self.wheel_size) as usize)
    }

    fn cells(&self) -> &[bool] {
        self.cells.as_slice()
    }
}

/// Sieve [1, limit] over a table pre-filtered by a wheel of wheel_size. Cell k of the returned
/// table is set iff k + 1 is prime.
///
/// The wheel pattern is tiled across enough copies to cover limit, so the marking pass only has
/// to strike composites coprime to the wheel. Multiples of an even wheel are all gone already,
/// which lets each odd prime skip its even multiples just like the plain sieve. An odd wheel
/// leaves even numbers in play, so there every multiple has to be struck.
pub fn sieve(limit: u64, wheel_size: u64) -> Result<Table> {
    let pattern = WheelPattern::new(wheel_size)?;
    let copies = limit / wheel_size + 1;
    let mut table = Table::tiled(pattern.cells(), copies)?;
    debug!(limit, wheel_size, copies, "wheel sieve");

    // The table covers at least [1, limit], so limit fits as an index.
    let end = limit as usize;
    let step_factor = if pattern.primes().contains(&2) { 2 } else { 1 };
    let root = (root_bound(limit) as usize).min(table.len());
    for index in 1..root {
        if table.get(index) {
            let number = index + 1;
            table.strike(number * number - 1, end, number * step_factor);
        }
    }

    table.unset(0);
    // The wheel struck its own primes along with their multiples.
    for &p in pattern.primes() {
        table.set((p - 1) as usize);
    }
    table.truncate(end);

    Ok(table)
}
