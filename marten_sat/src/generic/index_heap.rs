//! A max heap over a subset of elements with fixed indicies.
//!
//! The backing store of values is dense and stays put, while a companion vector
//! tracks where (if anywhere) an index currently sits on the heap.
//! So, the heap acts both as a store of values and as a priority queue over
//! whichever indicies are active.
//!
//! This suits activity heuristics: every atom keeps an activity, atoms leave the
//! heap as they are valued, and return (with their activity intact) when a
//! backjump clears the value.
//!
//! On ties the sift procedures prefer whichever element was placed first, so with
//! equal values indicies surface in activation order.

use std::cmp::Ordering;

#[derive(Debug)]
pub struct IndexHeap<V: PartialOrd + Default> {
    values: Vec<V>,
    position_in_heap: Vec<Option<usize>>,
    heap: Vec<usize>,
    limit: usize,
}

impl<V: PartialOrd + Default> Default for IndexHeap<V> {
    fn default() -> Self {
        IndexHeap {
            values: Vec::default(),
            position_in_heap: Vec::default(),
            heap: Vec::default(),
            limit: 0,
        }
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    /// Ensure the backing store covers `index` and record the given value.
    ///
    /// Returns true when fresh space was made.
    /// The value is stored regardless, though the index is not activated.
    pub fn add(&mut self, index: usize, value: V) -> bool {
        if self.heap.is_empty() || index > self.heap.len() - 1 {
            let required = (index - self.heap.len()) + 1;
            self.position_in_heap.append(&mut vec![None; required]);

            let mut value_vec = Vec::with_capacity(required);
            for _ in 0..required {
                value_vec.push(V::default())
            }

            self.values.append(&mut value_vec);
            self.heap.append(&mut vec![0; required]);
            self.revalue(index, value);
            true
        } else {
            self.revalue(index, value);
            false
        }
    }

    /// Remove an index from the heap, if active. The stored value remains.
    pub fn remove(&mut self, index: usize) -> bool {
        unsafe {
            if let Some(heap_position) = self.position(index) {
                if heap_position == self.limit - 1 {
                    self.limit -= 1;
                    self.reposition(index, None);
                } else if heap_position < self.limit {
                    self.limit -= 1;
                    self.reposition(self.heap_index(self.limit), Some(heap_position));
                    self.heap.swap(heap_position, self.limit);
                    self.reposition(index, None);
                    self.heapify_down(heap_position);
                }
                true
            } else {
                false
            }
        }
    }

    /// Place an index on the heap, or restore the heap property around it if already present.
    pub fn activate(&mut self, index: usize) -> bool {
        unsafe {
            match self.position(index) {
                None => {
                    self.reposition(index, Some(self.limit));
                    *self.heap.get_unchecked_mut(self.limit) = index;
                    self.heapify_up(self.limit);
                    self.limit += 1;
                    true
                }
                Some(heap_index) => {
                    self.heapify_up(heap_index);
                    self.heapify_down(heap_index);
                    false
                }
            }
        }
    }

    pub fn heapify_if_active(&mut self, index: usize) {
        unsafe {
            if let Some(heap_index) = self.position(index) {
                self.heapify_down(heap_index);
                self.heapify_up(heap_index);
            }
        }
    }

    pub fn peek_max(&self) -> Option<usize> {
        match self.limit {
            0 => None,
            _ => Some(unsafe { *self.heap.get_unchecked(0) }),
        }
    }

    pub fn pop_max(&mut self) -> Option<usize> {
        match self.limit {
            0 => None,
            _ => unsafe {
                let max_index = self.heap_index(0);
                self.remove(max_index);
                Some(max_index)
            },
        }
    }

    /// Restore the heap property over every active index.
    pub fn reheap(&mut self) {
        for index in (0..self.limit / 2).rev() {
            unsafe { self.heapify_down(index) }
        }
    }

    pub fn value_at(&self, index: usize) -> &V {
        unsafe { self.values.get_unchecked(index) }
    }

    pub fn apply_to_index(&mut self, index: usize, f: impl Fn(&V) -> V) {
        unsafe { *self.values.get_unchecked_mut(index) = f(self.values.get_unchecked(index)) }
    }

    pub fn apply_to_all(&mut self, f: impl Fn(&V) -> V) {
        for value in &mut self.values {
            *value = f(value)
        }
    }

    pub fn revalue(&mut self, index: usize, value: V) {
        unsafe { *self.values.get_unchecked_mut(index) = value }
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    unsafe fn heap_index(&self, index: usize) -> usize {
        *self.heap.get_unchecked(index)
    }

    unsafe fn position(&self, index: usize) -> Option<usize> {
        *self.position_in_heap.get_unchecked(index)
    }

    unsafe fn reposition(&mut self, from: usize, to: Option<usize>) {
        *self.position_in_heap.get_unchecked_mut(from) = to;
    }

    fn heap_left(&self, index: usize) -> usize {
        (2 * index) + 1
    }

    fn heap_right(&self, index: usize) -> usize {
        (2 * index) + 2
    }

    fn heap_parent(&self, index: usize) -> usize {
        index.saturating_sub(1) / 2
    }

    unsafe fn heapify_down(&mut self, mut index: usize) {
        loop {
            let left_index = self.heap_left(index);
            if left_index >= self.limit {
                break;
            }
            let mut largest = index;
            let mut largest_value = self.values.get_unchecked(self.heap_index(largest));

            let left_value = self.values.get_unchecked(self.heap_index(left_index));
            if let Some(Ordering::Greater) = left_value.partial_cmp(largest_value) {
                largest = left_index;
                largest_value = left_value;
            }

            let right_index = self.heap_right(index);
            if right_index < self.limit {
                let right_value = self.values.get_unchecked(self.heap_index(right_index));
                if let Some(Ordering::Greater) = right_value.partial_cmp(largest_value) {
                    largest = right_index;
                }
            }

            if largest != index {
                self.reposition(self.heap_index(largest), Some(index));
                self.reposition(self.heap_index(index), Some(largest));
                self.heap.swap(index, largest);
                index = largest;
            } else {
                break;
            }
        }
    }

    unsafe fn heapify_up(&mut self, mut index: usize) {
        loop {
            if index == 0 {
                break;
            }
            let parent_heap = self.heap_parent(index);

            let index_value = self.values.get_unchecked(self.heap_index(index));
            let parent_value = self.values.get_unchecked(self.heap_index(parent_heap));
            match parent_value.partial_cmp(index_value) {
                Some(Ordering::Greater) | Some(Ordering::Equal) => break,
                _ => {
                    let parent_heap_index = self.heap_index(parent_heap);

                    self.reposition(parent_heap_index, Some(index));
                    let heap_index = self.heap_index(index);
                    self.reposition(heap_index, Some(parent_heap));
                    self.heap.swap(index, parent_heap);
                    index = parent_heap;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_order() {
        let mut the_heap = IndexHeap::default();
        the_heap.add(6, 10);
        the_heap.add(5, 20);
        the_heap.add(4, 30);
        the_heap.add(1, 60);
        the_heap.add(0, 70);
        for index in [6, 5, 4, 1, 0] {
            the_heap.activate(index);
        }

        assert_eq!(the_heap.pop_max(), Some(0));
        assert_eq!(the_heap.pop_max(), Some(1));
        assert_eq!(the_heap.pop_max(), Some(4));
        assert_eq!(the_heap.pop_max(), Some(5));
        assert_eq!(the_heap.pop_max(), Some(6));
        assert_eq!(the_heap.pop_max(), None);
    }

    #[test]
    fn equal_values_surface_in_activation_order() {
        let mut the_heap = IndexHeap::default();
        for index in 0..4 {
            the_heap.add(index, 1);
            the_heap.activate(index);
        }

        assert_eq!(the_heap.pop_max(), Some(0));
    }

    #[test]
    fn revalue_and_reheap() {
        let mut the_heap = IndexHeap::default();
        the_heap.add(6, 10);
        the_heap.add(4, 30);
        the_heap.add(1, 60);
        the_heap.add(0, 70);
        for index in [6, 4, 1, 0] {
            the_heap.activate(index);
        }

        the_heap.revalue(0, 0);
        the_heap.revalue(1, 1);
        the_heap.revalue(4, 4);
        the_heap.revalue(6, 6);
        the_heap.reheap();

        assert_eq!(the_heap.pop_max(), Some(6));
        assert_eq!(the_heap.pop_max(), Some(4));
        assert_eq!(the_heap.pop_max(), Some(1));
        assert_eq!(the_heap.pop_max(), Some(0));
    }

    #[test]
    fn sparse_indicies() {
        let mut the_heap = IndexHeap::default();
        the_heap.add(600, 10);
        the_heap.add(0, 70);
        the_heap.activate(600);
        the_heap.activate(0);

        assert_eq!(the_heap.values.len(), 601);
        assert_eq!(the_heap.values[5], i32::default());
        assert_eq!(the_heap.pop_max(), Some(0));
        assert_eq!(the_heap.pop_max(), Some(600));
        assert_eq!(the_heap.pop_max(), None);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut the_heap = IndexHeap::default();
        for index in 0..7 {
            the_heap.add(index, index);
            the_heap.activate(index);
        }

        assert!(the_heap.remove(4));
        assert!(!the_heap.remove(4));
        assert!(the_heap.remove(6));

        assert_eq!(the_heap.pop_max(), Some(5));
        assert_eq!(the_heap.pop_max(), Some(3));
    }
}
