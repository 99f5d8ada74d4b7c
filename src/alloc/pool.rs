//! `NodePool` - a generational slot arena for linked node records.
//!
//! Every list, set, queue and ownership ledger stores its nodes here instead of
//! in individually boxed allocations. Links between nodes are [`NodeKey`]s.
//!
//! Implementation details:
//! - Vacant slots form an intrusive free list and are reused before the
//!   backing `Vec` grows.
//! - Generation counters prevent ABA problems when slots are reused: a key to
//!   a removed node never resolves again.
//! - Each pool draws a process-unique id, and keys remember it. A key minted by
//!   one container is rejected by every other container in O(1), which is how
//!   "does this node belong to this list" is answered.

use core::sync::atomic::{AtomicU32, Ordering};

static NEXT_POOL_ID: AtomicU32 = AtomicU32::new(1);

/// A handle to a node stored in a [`NodePool`].
///
/// Keys are `Copy` and cheap to compare. They stay valid until the node they
/// name is removed; afterwards every lookup with them returns `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeKey {
    pool: u32,
    index: u32,
    generation: u32,
}

impl NodeKey {
    /// Slot index inside the owning pool.
    #[inline]
    pub fn index(self) -> usize {
        self.index as usize
    }
}

enum Entry<T> {
    Occupied { generation: u32, value: T },
    Vacant { generation: u32, next_free: Option<u32> },
}

/// A generational arena of node records.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `insert` | \(O(1)\) amortized | Reuses the most recently freed slot |
/// | `get` / `get_mut` | \(O(1)\) | Pool id + generation check |
/// | `remove` | \(O(1)\) | Pushes the slot onto the free list |
pub struct NodePool<T> {
    id: u32,
    entries: Vec<Entry<T>>,
    free_head: Option<u32>,
    len: usize,
}

impl<T> NodePool<T> {
    /// Creates an empty pool with a fresh id.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty pool with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: NEXT_POOL_ID.fetch_add(1, Ordering::Relaxed),
            entries: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    /// Number of live nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the pool holds no live nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Stores `value`, returning its key.
    pub fn insert(&mut self, value: T) -> NodeKey {
        self.len += 1;

        if let Some(idx) = self.free_head {
            let entry = &mut self.entries[idx as usize];
            let (generation, next_free) = match *entry {
                Entry::Vacant { generation, next_free } => (generation.wrapping_add(1), next_free),
                Entry::Occupied { .. } => unreachable!("free list points at an occupied slot"),
            };
            *entry = Entry::Occupied { generation, value };
            self.free_head = next_free;
            return self.key(idx, generation);
        }

        let idx = u32::try_from(self.entries.len()).expect("node pool exceeded u32::MAX slots");
        self.entries.push(Entry::Occupied { generation: 0, value });
        self.key(idx, 0)
    }

    /// Returns `true` if `key` names a live node of this pool.
    #[inline]
    pub fn contains(&self, key: NodeKey) -> bool {
        self.get(key).is_some()
    }

    /// Shared access to the node named by `key`.
    pub fn get(&self, key: NodeKey) -> Option<&T> {
        if key.pool != self.id {
            return None;
        }
        match self.entries.get(key.index as usize)? {
            Entry::Occupied { generation, value } if *generation == key.generation => Some(value),
            _ => None,
        }
    }

    /// Mutable access to the node named by `key`.
    pub fn get_mut(&mut self, key: NodeKey) -> Option<&mut T> {
        if key.pool != self.id {
            return None;
        }
        match self.entries.get_mut(key.index as usize)? {
            Entry::Occupied { generation, value } if *generation == key.generation => Some(value),
            _ => None,
        }
    }

    /// Removes the node named by `key`, returning its value.
    pub fn remove(&mut self, key: NodeKey) -> Option<T> {
        if !self.contains(key) {
            return None;
        }
        let vacant = Entry::Vacant {
            generation: key.generation,
            next_free: self.free_head,
        };
        let entry = core::mem::replace(&mut self.entries[key.index as usize], vacant);
        self.free_head = Some(key.index);
        self.len -= 1;
        match entry {
            Entry::Occupied { value, .. } => Some(value),
            Entry::Vacant { .. } => None,
        }
    }

    /// Drops every node. Outstanding keys become invalid.
    pub fn clear(&mut self) {
        // Bump generations so stale keys cannot alias reused slots.
        let mut free_head = None;
        for (idx, entry) in self.entries.iter_mut().enumerate().rev() {
            let generation = match entry {
                Entry::Occupied { generation, .. } => *generation,
                Entry::Vacant { generation, .. } => generation.wrapping_sub(1),
            };
            *entry = Entry::Vacant {
                generation: generation.wrapping_add(1),
                next_free: free_head,
            };
            free_head = Some(idx as u32);
        }
        self.free_head = free_head;
        self.len = 0;
    }

    #[inline]
    fn key(&self, index: u32, generation: u32) -> NodeKey {
        NodeKey {
            pool: self.id,
            index,
            generation,
        }
    }
}

impl<T> Default for NodePool<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::NodePool;

    #[test]
    fn insert_get_remove() {
        let mut pool = NodePool::new();
        let a = pool.insert("a");
        let b = pool.insert("b");
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.get(a), Some(&"a"));
        assert_eq!(pool.remove(a), Some("a"));
        assert_eq!(pool.get(a), None);
        assert_eq!(pool.remove(a), None);
        assert_eq!(pool.get(b), Some(&"b"));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn reused_slot_rejects_stale_key() {
        let mut pool = NodePool::new();
        let a = pool.insert(1);
        pool.remove(a);
        let c = pool.insert(3);
        assert_eq!(a.index(), c.index());
        assert_ne!(a, c);
        assert_eq!(pool.get(a), None);
        assert_eq!(pool.get(c), Some(&3));
    }

    #[test]
    fn keys_do_not_cross_pools() {
        let mut left = NodePool::new();
        let mut right = NodePool::new();
        let l = left.insert(10);
        let r = right.insert(20);
        assert_eq!(l.index(), r.index());
        assert_eq!(left.get(r), None);
        assert_eq!(right.get_mut(l), None);
        assert_eq!(right.remove(l), None);
    }

    #[test]
    fn clear_invalidates_keys() {
        let mut pool = NodePool::with_capacity(4);
        let keys: Vec<_> = (0..4).map(|i| pool.insert(i)).collect();
        pool.clear();
        assert!(pool.is_empty());
        for key in keys {
            assert!(!pool.contains(key));
        }
        let fresh = pool.insert(99);
        assert_eq!(pool.get(fresh), Some(&99));
    }
}
