use crate::constants::{DEFAULT_LIMIT, DEFAULT_WHEEL_SIZE, MIN_WHEEL_SIZE};
use crate::error::{Result, SieveError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Eratosthenes,
    Wheel,
}

/// Parameters for a single sieve run. wheel_size is ignored by the Eratosthenes strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SieveConfig {
    pub limit: u64,
    pub wheel_size: u64,
    pub strategy: Strategy,
}

impl Default for SieveConfig {
    fn default() -> SieveConfig {
        SieveConfig {
            limit: DEFAULT_LIMIT,
            wheel_size: DEFAULT_WHEEL_SIZE,
            strategy: Strategy::Wheel,
        }
    }
}

impl SieveConfig {
    pub fn with_limit(mut self, limit: u64) -> SieveConfig {
        self.limit = limit;
        self
    }

    pub fn with_wheel_size(mut self, wheel_size: u64) -> SieveConfig {
        self.wheel_size = wheel_size;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> SieveConfig {
        self.strategy = strategy;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.strategy == Strategy::Wheel && self.wheel_size < MIN_WHEEL_SIZE {
            return Err(SieveError::InvalidWheelSize {
                wheel_size: self.wheel_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default() {
        let config = SieveConfig::default();
        assert_eq!(1_000_000, config.limit);
        assert_eq!(210, config.wheel_size);
        assert_eq!(Strategy::Wheel, config.strategy);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_validate() {
        let config = SieveConfig::default().with_wheel_size(1);
        assert!(config.validate().unwrap_err().is_invalid_argument());

        // Only the wheel cares about wheel_size.
        let config = config.with_strategy(Strategy::Eratosthenes).with_limit(0);
        assert!(config.validate().is_ok());
    }
}
