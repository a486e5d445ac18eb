use crate::error::SkipListError;

/// Level cap used when none is configured.
pub const DEFAULT_MAX_LEVEL: usize = 16;

/// Largest accepted level cap.
pub const MAX_SUPPORTED_LEVEL: usize = 64;

/// Construction options for a skip list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipListConfig {
    /// Highest level index any node may participate in. Nodes use levels `0..=max_level`.
    pub max_level: usize,
    /// Seed for the level generator. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SkipListConfig {
    fn default() -> Self {
        Self {
            max_level: DEFAULT_MAX_LEVEL,
            seed: None,
        }
    }
}

impl SkipListConfig {
    /// Picks a level cap suited to roughly `capacity` keys: `ceil(log2(n)) - 1`,
    /// never below 1.
    pub fn for_capacity(capacity: usize) -> Self {
        let bits = if capacity <= 1 {
            0
        } else {
            (usize::BITS - (capacity - 1).leading_zeros()) as usize
        };
        Self {
            max_level: bits.saturating_sub(1).clamp(1, MAX_SUPPORTED_LEVEL),
            ..Self::default()
        }
    }

    pub fn with_max_level(mut self, max_level: usize) -> Self {
        self.max_level = max_level;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), SkipListError> {
        if self.max_level == 0 || self.max_level > MAX_SUPPORTED_LEVEL {
            return Err(SkipListError::InvalidMaxLevel {
                max_level: self.max_level,
                max: MAX_SUPPORTED_LEVEL,
            });
        }
        Ok(())
    }
}
