//! LRU Recency List Module
//!
//! Tracks access order for LRU eviction as a doubly linked list whose nodes
//! live in a slot arena and link to each other by slot index.
//!
//! - Head = Most recently used
//! - Tail = Least recently used
//!
//! Freed slots are recycled through a free list, so a `SlotId` stays valid
//! until its node is removed.

use crate::error::{CacheError, Result};

// == Slot Id ==
/// Stable handle to a node in the recency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(usize);

impl SlotId {
    /// Position of the slot in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

// == Recency List ==
/// Doubly linked recency order backed by a vector of slots.
#[derive(Debug)]
pub struct RecencyList<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
    len: usize,
}

impl<T> RecencyList<T> {
    // == Constructor ==
    /// Creates a new empty recency list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    // == Push Front ==
    /// Inserts a value as the most recently used node and returns its handle.
    pub fn push_front(&mut self, value: T) -> SlotId {
        let node = Node {
            value,
            prev: None,
            next: self.head,
        };
        let id = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                SlotId(idx)
            }
            None => {
                self.slots.push(Some(node));
                SlotId(self.slots.len() - 1)
            }
        };

        match self.head {
            Some(old_head) => {
                if let Some(node) = self.node_mut(old_head) {
                    node.prev = Some(id);
                }
            }
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        self.len += 1;
        id
    }

    // == Move To Front ==
    /// Marks a node as most recently used.
    ///
    /// Unknown handles are ignored.
    pub fn move_to_front(&mut self, id: SlotId) {
        if self.head == Some(id) || self.node(id).is_none() {
            return;
        }
        self.unlink(id);

        let old_head = self.head;
        if let Some(node) = self.node_mut(id) {
            node.prev = None;
            node.next = old_head;
        }
        match old_head {
            Some(h) => {
                if let Some(node) = self.node_mut(h) {
                    node.prev = Some(id);
                }
            }
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }

    // == Remove ==
    /// Detaches a node and frees its slot, returning the stored value.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        self.node(id)?;
        self.unlink(id);
        let node = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id.0);
        self.len -= 1;
        Some(node.value)
    }

    // == Pop Back ==
    /// Removes and returns the least recently used value.
    ///
    /// Returns None if the list is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        self.remove(tail)
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.node(id).map(|node| &node.value)
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.node_mut(id).map(|node| &mut node.value)
    }

    // == Length ==
    /// Returns the number of linked nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Clear ==
    /// Drops every node and releases the free list.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // == Iter ==
    /// Iterates values from most to least recently used.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    // == Validate ==
    /// Walks the list checking link symmetry, slot accounting and length.
    ///
    /// Returns the handles in order from head to tail.
    pub fn validate(&self) -> Result<Vec<SlotId>> {
        let mut order = Vec::with_capacity(self.len);
        let mut prev = None;
        let mut cursor = self.head;

        while let Some(id) = cursor {
            if order.len() >= self.len {
                return Err(CacheError::Corrupted(format!(
                    "recency list longer than its length {} (cycle?)",
                    self.len
                )));
            }
            let node = self.node(id).ok_or_else(|| {
                CacheError::Corrupted(format!("link to vacant slot {}", id.0))
            })?;
            if node.prev != prev {
                return Err(CacheError::Corrupted(format!(
                    "slot {} has prev {:?}, expected {:?}",
                    id.0, node.prev, prev
                )));
            }
            order.push(id);
            prev = Some(id);
            cursor = node.next;
        }

        if order.len() != self.len {
            return Err(CacheError::Corrupted(format!(
                "walked {} nodes but length is {}",
                order.len(),
                self.len
            )));
        }
        if self.tail != prev {
            return Err(CacheError::Corrupted(format!(
                "tail is {:?} but walk ended at {:?}",
                self.tail, prev
            )));
        }
        let occupied = self.slots.iter().filter(|slot| slot.is_some()).count();
        if occupied != self.len || occupied + self.free.len() != self.slots.len() {
            return Err(CacheError::Corrupted(format!(
                "{} occupied and {} free slots out of {}",
                occupied,
                self.free.len(),
                self.slots.len()
            )));
        }
        Ok(order)
    }

    fn node(&self, id: SlotId) -> Option<&Node<T>> {
        self.slots.get(id.0).and_then(|slot| slot.as_ref())
    }

    fn node_mut(&mut self, id: SlotId) -> Option<&mut Node<T>> {
        self.slots.get_mut(id.0).and_then(|slot| slot.as_mut())
    }

    /// Splices a node out of the chain, leaving its own links stale.
    fn unlink(&mut self, id: SlotId) {
        let (prev, next) = match self.node(id) {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(p) => {
                if let Some(node) = self.node_mut(p) {
                    node.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(n) => {
                if let Some(node) = self.node_mut(n) {
                    node.prev = prev;
                }
            }
            None => self.tail = prev,
        }
    }
}

impl<T> Default for RecencyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// == Iterator ==
/// Iterator over list values, most recently used first.
pub struct Iter<'a, T> {
    list: &'a RecencyList<T>,
    cursor: Option<SlotId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.cursor?)?;
        self.cursor = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }
}
