//! Priority frontier for shortest-path traversal
//!
//! The traversal engine only needs insert, extract-min, decrease-key and a
//! size query. [`PriorityFrontier`] captures that contract; [`BinaryFrontier`]
//! is the default implementation: an array binary heap with a position index
//! so a queued item's key can be lowered in place.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

/// Mutable min-priority queue over graph vertices keyed by cost
pub trait PriorityFrontier<T> {
    /// Queue `item` with priority `key`
    fn insert(&mut self, item: T, key: f64);

    /// Remove and return the entry with the smallest key
    fn pop(&mut self) -> Option<(T, f64)>;

    /// Change the key of an already-queued item (decrease-key).
    /// Items that are not queued are ignored.
    fn update_key(&mut self, item: T, key: f64);

    /// Number of queued items
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone)]
struct FrontierEntry<T> {
    item: T,
    key: f64,
    /// Insertion sequence, breaks key ties in FIFO order
    seq: u64,
}

impl<T> FrontierEntry<T> {
    fn cmp_priority(&self, other: &Self) -> Ordering {
        self.key
            .total_cmp(&other.key)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Binary min-heap with an item → slot index for O(log n) decrease-key
#[derive(Debug, Clone)]
pub struct BinaryFrontier<T> {
    heap: Vec<FrontierEntry<T>>,
    positions: HashMap<T, usize>,
    next_seq: u64,
}

impl<T> Default for BinaryFrontier<T> {
    fn default() -> Self {
        Self {
            heap: Vec::new(),
            positions: HashMap::new(),
            next_seq: 0,
        }
    }
}

impl<T: Copy + Eq + Hash> BinaryFrontier<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current key of a queued item
    pub fn key_of(&self, item: &T) -> Option<f64> {
        self.positions.get(item).map(|&slot| self.heap[slot].key)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.positions.contains_key(item)
    }

    /// Smallest queued entry without removing it
    pub fn peek(&self) -> Option<(T, f64)> {
        self.heap.first().map(|entry| (entry.item, entry.key))
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.positions.clear();
        self.next_seq = 0;
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.heap[a].cmp_priority(&self.heap[b]) == Ordering::Less
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions.insert(self.heap[a].item, a);
        self.positions.insert(self.heap[b].item, b);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.less(slot, parent) {
                break;
            }
            self.swap_slots(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;

            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap_slots(slot, smallest);
            slot = smallest;
        }
    }
}

impl<T: Copy + Eq + Hash> PriorityFrontier<T> for BinaryFrontier<T> {
    fn insert(&mut self, item: T, key: f64) {
        if self.positions.contains_key(&item) {
            self.update_key(item, key);
            return;
        }

        let slot = self.heap.len();
        self.heap.push(FrontierEntry {
            item,
            key,
            seq: self.next_seq,
        });
        self.next_seq += 1;
        self.positions.insert(item, slot);
        self.sift_up(slot);
    }

    fn pop(&mut self) -> Option<(T, f64)> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.swap_slots(0, last);
        let entry = self.heap.pop()?;
        self.positions.remove(&entry.item);

        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        Some((entry.item, entry.key))
    }

    fn update_key(&mut self, item: T, key: f64) {
        let Some(&slot) = self.positions.get(&item) else {
            return;
        };

        let previous = self.heap[slot].key;
        self.heap[slot].key = key;

        match key.total_cmp(&previous) {
            Ordering::Less => self.sift_up(slot),
            Ordering::Greater => self.sift_down(slot),
            Ordering::Equal => {}
        }
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(frontier: &mut BinaryFrontier<u32>) -> Vec<(u32, f64)> {
        std::iter::from_fn(|| frontier.pop()).collect()
    }

    #[test]
    fn test_pop_returns_minimum_first() {
        let mut frontier = BinaryFrontier::new();
        frontier.insert(1, 5.0);
        frontier.insert(2, 1.0);
        frontier.insert(3, 3.0);
        frontier.insert(4, 0.5);

        assert_eq!(frontier.len(), 4);
        assert_eq!(
            drain(&mut frontier),
            vec![(4, 0.5), (2, 1.0), (3, 3.0), (1, 5.0)]
        );
        assert!(frontier.is_empty());
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn test_equal_keys_pop_in_insertion_order() {
        let mut frontier = BinaryFrontier::new();
        for item in [7, 3, 9, 1] {
            frontier.insert(item, 2.0);
        }

        let order: Vec<u32> = drain(&mut frontier).into_iter().map(|(i, _)| i).collect();
        assert_eq!(order, vec![7, 3, 9, 1]);
    }

    #[test]
    fn test_decrease_key_moves_item_forward() {
        let mut frontier = BinaryFrontier::new();
        frontier.insert(1, 1.0);
        frontier.insert(2, 4.0);
        frontier.insert(3, 6.0);

        frontier.update_key(3, 0.5);

        assert_eq!(frontier.key_of(&3), Some(0.5));
        assert_eq!(frontier.peek(), Some((3, 0.5)));
        assert_eq!(drain(&mut frontier), vec![(3, 0.5), (1, 1.0), (2, 4.0)]);
    }

    #[test]
    fn test_increase_key_moves_item_back() {
        let mut frontier = BinaryFrontier::new();
        frontier.insert(1, 1.0);
        frontier.insert(2, 2.0);
        frontier.insert(3, 3.0);

        frontier.update_key(1, 10.0);

        assert_eq!(drain(&mut frontier), vec![(2, 2.0), (3, 3.0), (1, 10.0)]);
    }

    #[test]
    fn test_update_key_of_absent_item_is_ignored() {
        let mut frontier = BinaryFrontier::new();
        frontier.insert(1, 1.0);
        frontier.update_key(42, 0.0);

        assert_eq!(frontier.len(), 1);
        assert!(!frontier.contains(&42));
        assert_eq!(frontier.pop(), Some((1, 1.0)));
    }

    #[test]
    fn test_insert_of_queued_item_updates_its_key() {
        let mut frontier = BinaryFrontier::new();
        frontier.insert(1, 3.0);
        frontier.insert(2, 2.0);
        frontier.insert(1, 1.0);

        assert_eq!(frontier.len(), 2);
        assert_eq!(drain(&mut frontier), vec![(1, 1.0), (2, 2.0)]);
    }

    #[test]
    fn test_heap_order_survives_many_updates() {
        let mut frontier = BinaryFrontier::new();
        for item in 0..50u32 {
            frontier.insert(item, f64::from(100 - item));
        }
        for item in (0..50u32).step_by(3) {
            frontier.update_key(item, f64::from(item) / 10.0);
        }

        let keys: Vec<f64> = drain(&mut frontier).into_iter().map(|(_, k)| k).collect();
        assert_eq!(keys.len(), 50);
        assert!(keys.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_clear_resets_sequence_and_index() {
        let mut frontier = BinaryFrontier::new();
        frontier.insert(1, 1.0);
        frontier.insert(2, 1.0);
        frontier.clear();

        assert!(frontier.is_empty());
        assert!(!frontier.contains(&1));
        frontier.insert(5, 0.0);
        assert_eq!(frontier.pop(), Some((5, 0.0)));
    }
}
