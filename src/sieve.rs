use crate::config::{SieveConfig, Strategy};
use crate::eratosthenes;
use crate::table::Table;
use crate::wheel;

/// Iterate through the primes of a fully sieved table in ascending order.
///
/// All the striking happens when the Sieve is built, so any error surfaces before the first prime
/// does. Each Sieve owns its table outright, which makes independent sieves safe to run on
/// separate threads.
pub struct Sieve {
    table: Table,
    // Number represented by table cell 0.
    offset: u64,
}

impl Iterator for Sieve {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let index = self.table.next()?;
        Some(index as u64 + self.offset)
    }
}

impl Sieve {
    /// Primes in [0, limit] by the classical sieve of Eratosthenes.
    pub fn eratosthenes(limit: u64) -> crate::Result<Sieve> {
        let table = eratosthenes::sieve(limit)?;
        Ok(Sieve { table, offset: 0 })
    }

    /// Primes in [1, limit] by a sieve pre-filtered with a wheel of wheel_size.
    pub fn wheel(limit: u64, wheel_size: u64) -> crate::Result<Sieve> {
        let table = wheel::sieve(limit, wheel_size)?;
        Ok(Sieve { table, offset: 1 })
    }

    pub fn from_config(config: &SieveConfig) -> crate::Result<Sieve> {
        config.validate()?;
        match config.strategy {
            Strategy::Eratosthenes => Sieve::eratosthenes(config.limit),
            Strategy::Wheel => Sieve::wheel(config.limit, config.wheel_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sieve_offsets() {
        assert_eq!(
            vec![2, 3, 5, 7, 11, 13, 17, 19],
            Sieve::eratosthenes(20).unwrap().collect::<Vec<_>>()
        );
        assert_eq!(
            vec![2, 3, 5, 7, 11, 13, 17, 19],
            Sieve::wheel(20, 6).unwrap().collect::<Vec<_>>()
        );
    }

    #[test]
    fn sieve_from_config() {
        let config = SieveConfig::default().with_limit(30);
        let expected = vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29];
        assert_eq!(
            expected,
            Sieve::from_config(&config).unwrap().collect::<Vec<_>>()
        );

        let config = config.with_strategy(Strategy::Eratosthenes);
        assert_eq!(
            expected,
            Sieve::from_config(&config).unwrap().collect::<Vec<_>>()
        );

        let config = config.with_strategy(Strategy::Wheel).with_wheel_size(0);
        assert!(Sieve::from_config(&config).is_err());
    }

    #[test]
    fn sieve_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<Sieve>();
    }
}
