pub mod arena_skiplist;
pub mod iter;
pub mod level;

use crate::{Key, Value};

pub trait SkipList {
    /// Inserts `key` with `value`.
    /// If an entry with `key` already exists its value is overwritten and its
    /// levels are left untouched.
    fn insert(&mut self, key: Key, value: Value);

    /// Returns the value stored under `key`, if any.
    fn find(&self, key: Key) -> Option<&Value>;

    /// Unlinks the entry for `key` and returns its value.
    /// Does nothing when `key` is absent.
    fn remove(&mut self, key: Key) -> Option<Value>;

    /// Returns the number of stored entries.
    fn len(&self) -> usize;

    /// Returns the highest level index that holds at least one entry.
    fn level(&self) -> usize;

    /// Returns true if an entry equal to `key` is in the list.
    fn contains(&self, key: Key) -> bool {
        self.find(key).is_some()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
