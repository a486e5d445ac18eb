use thiserror::Error;

/// Errors raised while building a skip list.
///
/// Operations on a constructed list never fail; a missing key is reported
/// through `Option`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkipListError {
    #[error("max level {max_level} is out of range (expected 1..={max})")]
    InvalidMaxLevel { max_level: usize, max: usize },
}
