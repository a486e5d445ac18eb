use std::fmt;

use log::{debug, trace};

use crate::config::SkipListConfig;
use crate::error::SkipListError;
use crate::skiplist::iter::LevelIter;
use crate::skiplist::level::LevelGenerator;
use crate::skiplist::SkipList;
use crate::{Key, Value};

/// Index of a node slot in the arena.
pub(crate) type NodeId = usize;

type Link = Option<NodeId>;

/// A place a descent can stand on: the header sentinel or a stored node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Header,
    Node(NodeId),
}

/// Skip list whose nodes live in an index arena.
///
/// The arena owns every node. Forward links at all levels are plain indices,
/// so unlinking a node at several levels never touches its storage; the slot
/// is released once, after the last level has been redirected.
#[derive(Debug, Clone)]
pub struct ArenaSkipList {
    /// Successors of the header, one per level `0..=max_level`.
    head: Vec<Link>,
    nodes: Vec<Slot>,
    free: Link,
    level: usize,
    len: usize,
    levels: LevelGenerator,
}

impl ArenaSkipList {
    pub fn new() -> Self {
        Self::build(SkipListConfig::default())
    }

    pub fn with_config(config: SkipListConfig) -> Result<Self, SkipListError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Shorthand for a list capped at `max_level` with an entropy seed.
    pub fn with_max_level(max_level: usize) -> Result<Self, SkipListError> {
        Self::with_config(SkipListConfig::default().with_max_level(max_level))
    }

    fn build(config: SkipListConfig) -> Self {
        debug!(
            "creating skip list: max_level={}, seeded={}",
            config.max_level,
            config.seed.is_some()
        );
        Self {
            head: vec![None; config.max_level + 1],
            nodes: Vec::new(),
            free: None,
            level: 0,
            len: 0,
            levels: LevelGenerator::new(config.max_level, config.seed),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Highest level index currently holding an entry. `0` when empty.
    #[inline]
    pub fn level(&self) -> usize {
        self.level
    }

    #[inline]
    pub fn max_level(&self) -> usize {
        self.levels.max_level()
    }

    pub fn contains(&self, key: Key) -> bool {
        self.find(key).is_some()
    }

    pub fn find(&self, key: Key) -> Option<&Value> {
        let mut current = Position::Header;
        for level in (0..=self.level).rev() {
            current = self.advance(current, level, key);
        }
        let node = self.node(self.next(current, 0)?);
        (node.key == key).then_some(&node.value)
    }

    pub fn insert(&mut self, key: Key, value: Value) {
        let (found, previous) = self.find_equal_or_less_than(key);
        if let Some(id) = found {
            self.node_mut(id).value = value;
            return;
        }

        let height = self.levels.random_level();
        if height > self.level {
            // `previous` already holds the header for every level above the old top.
            trace!("top level raised from {} to {}", self.level, height);
            self.level = height;
        }

        let forward = (0..=height)
            .map(|level| self.next(previous[level], level))
            .collect();
        let id = self.alloc(Node {
            key,
            value,
            forward,
        });
        for (level, &prev) in previous.iter().enumerate().take(height + 1) {
            self.set_next(prev, level, Some(id));
        }
        self.len += 1;
    }

    pub fn remove(&mut self, key: Key) -> Option<Value> {
        let (found, previous) = self.find_equal_or_less_than(key);
        let target = found?;

        for level in 0..=self.level {
            if self.next(previous[level], level) != Some(target) {
                break;
            }
            let successor = self.node(target).next(level);
            self.set_next(previous[level], level, successor);
        }
        let node = self.release(target);

        while self.level > 0 && self.head[self.level].is_none() {
            self.level -= 1;
            trace!("top level lowered to {}", self.level);
        }
        self.len -= 1;
        Some(node.value)
    }

    /// Returns the highest level `key` participates in, if it is stored.
    pub fn level_of(&self, key: Key) -> Option<usize> {
        let (found, _) = self.find_equal_or_less_than(key);
        found.map(|id| self.node(id).height())
    }

    pub fn clear(&mut self) {
        trace!("clearing {} entries", self.len);
        self.head.iter_mut().for_each(|link| *link = None);
        self.nodes.clear();
        self.free = None;
        self.level = 0;
        self.len = 0;
    }

    /// Iterates over all entries in ascending key order.
    pub fn iter(&self) -> LevelIter<'_> {
        self.iter_level(0)
    }

    /// Iterates over the entries participating in `level`, in ascending key order.
    /// Levels above the current top yield nothing.
    pub fn iter_level(&self, level: usize) -> LevelIter<'_> {
        let first = self.head.get(level).copied().flatten();
        LevelIter::new(self, level, first)
    }

    pub fn dump(&self) -> Vec<(Key, Value)> {
        self.iter().collect()
    }

    // Walk right along `level` while the next key is below `key`.
    fn advance(&self, mut current: Position, level: usize, key: Key) -> Position {
        while let Some(next) = self.next(current, level) {
            if self.node(next).key >= key {
                break;
            }
            current = Position::Node(next);
        }
        current
    }

    // Finds the node holding `key` along with the last position visited on every
    // level before dropping down. Levels above the current top report the header.
    fn find_equal_or_less_than(&self, key: Key) -> (Link, Vec<Position>) {
        let mut previous = vec![Position::Header; self.head.len()];
        let mut current = Position::Header;
        for level in (0..=self.level).rev() {
            current = self.advance(current, level, key);
            previous[level] = current;
        }
        let found = self
            .next(current, 0)
            .filter(|&id| self.node(id).key == key);
        (found, previous)
    }

    #[inline(always)]
    fn next(&self, position: Position, level: usize) -> Link {
        match position {
            Position::Header => self.head[level],
            Position::Node(id) => self.node(id).next(level),
        }
    }

    #[inline(always)]
    fn set_next(&mut self, position: Position, level: usize, link: Link) {
        match position {
            Position::Header => self.head[level] = link,
            Position::Node(id) => self.node_mut(id).set_next(level, link),
        }
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        match &self.nodes[id] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link to vacant slot {id}"),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        match &mut self.nodes[id] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link to vacant slot {id}"),
        }
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        match self.free {
            Some(id) => {
                self.free = match self.nodes[id] {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied(_) => unreachable!("free list points at occupied slot {id}"),
                };
                self.nodes[id] = Slot::Occupied(node);
                id
            }
            None => {
                self.nodes.push(Slot::Occupied(node));
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, id: NodeId) -> Node {
        let slot = std::mem::replace(
            &mut self.nodes[id],
            Slot::Vacant {
                next_free: self.free,
            },
        );
        self.free = Some(id);
        match slot {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("released vacant slot {id}"),
        }
    }
}

impl Default for ArenaSkipList {
    fn default() -> Self {
        Self::new()
    }
}

impl SkipList for ArenaSkipList {
    fn insert(&mut self, key: Key, value: Value) {
        ArenaSkipList::insert(self, key, value)
    }

    fn find(&self, key: Key) -> Option<&Value> {
        ArenaSkipList::find(self, key)
    }

    fn remove(&mut self, key: Key) -> Option<Value> {
        ArenaSkipList::remove(self, key)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn level(&self) -> usize {
        self.level
    }
}

impl<'a> IntoIterator for &'a ArenaSkipList {
    type Item = (Key, Value);
    type IntoIter = LevelIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<(Key, Value)> for ArenaSkipList {
    fn extend<I: IntoIterator<Item = (Key, Value)>>(&mut self, entries: I) {
        for (key, value) in entries {
            self.insert(key, value);
        }
    }
}

impl fmt::Display for ArenaSkipList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for level in 0..=self.level {
            write!(f, "Level {level}: ")?;
            for (key, value) in self.iter_level(level) {
                write!(f, "({key}, {value}) ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
enum Slot {
    Occupied(Node),
    Vacant { next_free: Link },
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) key: Key,
    pub(crate) value: Value,
    forward: Vec<Link>,
}

impl Node {
    #[inline(always)]
    fn height(&self) -> usize {
        self.forward.len() - 1
    }

    #[inline(always)]
    pub(crate) fn next(&self, level: usize) -> Link {
        debug_assert!(level < self.forward.len());
        self.forward[level]
    }

    #[inline(always)]
    fn set_next(&mut self, level: usize, link: Link) {
        self.forward[level] = link;
    }
}
