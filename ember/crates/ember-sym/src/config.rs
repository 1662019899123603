//! Interner configuration.

use crate::error::{SymbolError, SymbolResult};

/// Hard upper bound on name length; names must be strictly shorter
pub const NAME_LEN_LIMIT: usize = u16::MAX as usize;

/// Interner configuration
///
/// # Examples
///
/// ```
/// use ember_sym::{Interner, InternerConfig};
///
/// let config = InternerConfig {
///     initial_capacity: 16,
///     ..InternerConfig::default()
/// };
/// let interner = Interner::with_config(config).unwrap();
/// assert_eq!(interner.capacity(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternerConfig {
    /// Dynamic table capacity allocated on the first insertion
    pub initial_capacity: usize,

    /// Growth factor numerator
    pub growth_numerator: usize,

    /// Growth factor denominator
    pub growth_denominator: usize,

    /// Exclusive limit on name length, at most [`NAME_LEN_LIMIT`]
    pub max_name_len: usize,
}

impl Default for InternerConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 100,
            growth_numerator: 6,
            growth_denominator: 5,
            max_name_len: NAME_LEN_LIMIT,
        }
    }
}

impl InternerConfig {
    /// Validate configuration
    pub fn validate(&self) -> SymbolResult<()> {
        if self.initial_capacity == 0 {
            return Err(SymbolError::InvalidConfig(
                "initial_capacity must be > 0".to_string(),
            ));
        }

        if self.growth_denominator == 0 {
            return Err(SymbolError::InvalidConfig(
                "growth_denominator must be > 0".to_string(),
            ));
        }

        if self.growth_numerator <= self.growth_denominator {
            return Err(SymbolError::InvalidConfig(format!(
                "growth factor {}/{} must be greater than 1",
                self.growth_numerator, self.growth_denominator
            )));
        }

        if self.max_name_len == 0 || self.max_name_len > NAME_LEN_LIMIT {
            return Err(SymbolError::InvalidConfig(format!(
                "max_name_len must be in 1..={}",
                NAME_LEN_LIMIT
            )));
        }

        Ok(())
    }

    /// Capacity to grow to from `current`
    ///
    /// Zero jumps straight to `initial_capacity`. Otherwise the capacity is
    /// scaled by the growth factor and always increases by at least one.
    pub fn next_capacity(&self, current: usize) -> usize {
        if current == 0 {
            return self.initial_capacity;
        }
        let scaled = current.saturating_mul(self.growth_numerator) / self.growth_denominator;
        scaled.max(current.saturating_add(1))
    }
}
