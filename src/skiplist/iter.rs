use crate::skiplist::arena_skiplist::{ArenaSkipList, NodeId};
use crate::{Key, Value};

/// Walks a single level of an [`ArenaSkipList`] in ascending key order.
///
/// Level 0 yields every entry; higher levels yield the subset of entries
/// that participate in them.
pub struct LevelIter<'a> {
    list: &'a ArenaSkipList,
    level: usize,
    next: Option<NodeId>,
}

impl<'a> LevelIter<'a> {
    pub(crate) fn new(list: &'a ArenaSkipList, level: usize, first: Option<NodeId>) -> Self {
        Self {
            list,
            level,
            next: first,
        }
    }

    /// The level this iterator walks.
    pub fn level(&self) -> usize {
        self.level
    }
}

impl<'a> Iterator for LevelIter<'a> {
    type Item = (Key, Value);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = self.list.node(id);
        self.next = node.next(self.level);
        Some((node.key, node.value))
    }
}

impl<'a> std::iter::FusedIterator for LevelIter<'a> {}
