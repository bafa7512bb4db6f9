//! Binary min-heap over the items `0..n` with position tracking, so that the
//! key of an item still in the heap can be decreased in `O(log n)`.
//!
//! Entries compare as `(key, item)`: equal keys resolve to the smaller item.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeapError {
    #[error("item {item} is not in the heap")]
    Missing { item: usize },

    #[error("new key for item {item} is greater than its current key")]
    KeyIncreased { item: usize },
}

#[derive(Debug, Clone)]
pub struct IndexedMinHeap<K> {
    entries: Vec<(K, usize)>,
    positions: Vec<Option<usize>>,
}

fn parent(i: usize) -> usize {
    (i - 1) / 2
}

fn left(i: usize) -> usize {
    2 * i + 1
}

fn right(i: usize) -> usize {
    2 * (i + 1)
}

impl<K: Ord + Copy> IndexedMinHeap<K> {
    /// Builds a heap holding item `i` with key `keys[i]`.
    pub fn from_keys(keys: Vec<K>) -> Self {
        let positions = (0..keys.len()).map(Some).collect();
        let entries = keys.into_iter().enumerate().map(|(i, k)| (k, i)).collect();
        let mut heap = Self { entries, positions };

        for i in (0..heap.entries.len() / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, item: usize) -> bool {
        self.position(item).is_some()
    }

    pub fn key_of(&self, item: usize) -> Option<K> {
        self.position(item).map(|pos| self.entries[pos].0)
    }

    pub fn pop_min(&mut self) -> Option<(K, usize)> {
        if self.entries.is_empty() {
            return None;
        }

        let last = self.entries.len() - 1;
        self.swap(0, last);
        let top = self.entries.pop()?;
        self.positions[top.1] = None;
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some(top)
    }

    pub fn decrease_key(&mut self, item: usize, key: K) -> Result<(), HeapError> {
        let mut i = self.position(item).ok_or(HeapError::Missing { item })?;
        if key > self.entries[i].0 {
            return Err(HeapError::KeyIncreased { item });
        }

        self.entries[i].0 = key;
        while i > 0 && self.entries[i] < self.entries[parent(i)] {
            let p = parent(i);
            self.swap(i, p);
            i = p;
        }
        Ok(())
    }

    fn position(&self, item: usize) -> Option<usize> {
        self.positions.get(item).copied().flatten()
    }

    fn sift_down(&mut self, mut i: usize) {
        loop {
            let l = left(i);
            let r = right(i);
            let mut smallest = i;
            if l < self.entries.len() && self.entries[l] < self.entries[smallest] {
                smallest = l;
            }
            if r < self.entries.len() && self.entries[r] < self.entries[smallest] {
                smallest = r;
            }
            if smallest == i {
                return;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.positions[self.entries[a].1] = Some(a);
        self.positions[self.entries[b].1] = Some(b);
    }
}
