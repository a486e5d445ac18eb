//! An ordered `i32 -> i32` map built on a skip list.
//!
//! Level 0 holds every key in ascending order; each higher level holds a random
//! subset of the level below it, so a lookup can skip over long runs of nodes
//! before dropping down. Node participation is drawn by a fair-coin level
//! generator capped at the configured maximum level.
//!
//! ```
//! use skipmap::ArenaSkipList;
//!
//! let mut list = ArenaSkipList::new();
//! list.insert(3, 30);
//! list.insert(1, 10);
//! list.insert(2, 20);
//! assert_eq!(list.find(2), Some(&20));
//!
//! list.remove(2);
//! assert_eq!(list.find(2), None);
//! assert_eq!(list.dump(), vec![(1, 10), (3, 30)]);
//! assert_eq!(list.len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod skiplist;

pub use config::{SkipListConfig, DEFAULT_MAX_LEVEL, MAX_SUPPORTED_LEVEL};
pub use error::SkipListError;
pub use skiplist::arena_skiplist::ArenaSkipList;
pub use skiplist::iter::LevelIter;
pub use skiplist::level::LevelGenerator;
pub use skiplist::SkipList;

/// Key type stored in the list.
pub type Key = i32;

/// Value type associated with each key.
pub type Value = i32;
