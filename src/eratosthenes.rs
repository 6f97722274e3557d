use tracing::debug;

use crate::constants::root_bound;
use crate::error::{Result, SieveError};
use crate::table::Table;

/// Sieve [0, limit] with the classical sieve of Eratosthenes. Cell n of the returned table is set
/// iff n is prime.
///
/// Even numbers are struck in a single pass up front, so each odd prime p only needs to strike its
/// odd multiples p^2, p^2 + 2p, p^2 + 4p, ... Composites above p^2 with a smaller prime factor
/// have already been struck by that factor, and any composite at or below limit has a prime factor
/// below root_bound(limit).
pub fn sieve(limit: u64) -> Result<Table> {
    let cells = limit
        .checked_add(1)
        .ok_or_else(|| SieveError::exhausted(limit))?;
    let mut table = Table::filled(cells, true)?;
    let end = table.len();
    debug!(limit, cells, "eratosthenes sieve");

    table.unset(0);
    table.unset(1);
    table.strike(2, end, 2);

    let root = (root_bound(limit) as usize).min(end);
    for p in 2..root {
        if table.get(p) {
            table.strike(p * p, end, 2 * p);
        }
    }
    // 2 went out with the rest of the even numbers.
    table.set(2);

    Ok(table)
}
