use log::{debug, trace};

use crate::error::HeapError;

/// Binary max-heap over an implicit array tree.
///
/// The node at index `i` has its children at `2i + 1` and `2i + 2` and its
/// parent at `(i - 1) / 2`. A position is only meaningful while it is below
/// `len()`, so every geometry query answers `None` for positions that fall
/// off the end of the store.
#[derive(Clone)]
pub struct MaxHeap<T: std::cmp::PartialOrd> {
    data: Vec<T>,
}

impl<T> MaxHeap<T>
where
    T: std::cmp::PartialOrd,
{
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// The capacity is only a hint; the heap keeps growing past it.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The current maximum.
    pub fn peek_root(&self) -> Option<&T> {
        self.data.first()
    }

    /// The element at the highest occupied index.
    pub fn peek_last(&self) -> Option<&T> {
        self.data.last()
    }

    pub fn exists(&self, index: usize) -> bool {
        index < self.data.len()
    }

    /// Raw positional access. Unlike the geometry queries this is an error
    /// outside `[0, len)`.
    pub fn get(&self, index: usize) -> Result<&T, HeapError> {
        self.data
            .get(index)
            .ok_or(HeapError::InvalidIndex(index, self.data.len()))
    }

    pub fn left_child_index(&self, index: usize) -> Option<usize> {
        Self::left_child(self.data.len(), index)
    }

    pub fn right_child_index(&self, index: usize) -> Option<usize> {
        Self::right_child(self.data.len(), index)
    }

    /// `None` for the root, and for any position whose parent slot is not
    /// occupied.
    pub fn parent_index(&self, index: usize) -> Option<usize> {
        Self::parent(self.data.len(), index)
    }

    pub fn has_greater_child(&self, index: usize) -> bool {
        Self::has_greater_child_in(&self.data, index)
    }

    /// Index of the larger child. On a tie between the two children the right
    /// one wins; a node with only a left child answers with that child.
    pub fn larger_child_index(&self, index: usize) -> Option<usize> {
        Self::larger_child_in(&self.data, index)
    }

    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        let last = self.data.len() - 1;
        Self::sift_up(&mut self.data, last);
    }

    /// Removes and returns the maximum, or `None` when the heap is empty.
    pub fn extract_max(&mut self) -> Option<T> {
        let last = self.data.pop()?;
        if self.data.is_empty() {
            return Some(last);
        }
        let max = std::mem::replace(&mut self.data[0], last);
        Self::sift_down(&mut self.data, 0);
        Some(max)
    }

    /// Hands back the backing store in heap order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Heapsorts the backing store in place, smallest first.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let l = self.data.len();
        debug!("into_sorted_vec: sorting {} elements", l);
        for end in (1..l).rev() {
            self.data.swap(0, end);
            Self::sift_down(&mut self.data[..end], 0);
        }
        self.data
    }

    #[cfg(test)]
    pub(crate) fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn left_child(len: usize, index: usize) -> Option<usize> {
        let idx = index.checked_mul(2)?.checked_add(1)?;
        (idx < len).then_some(idx)
    }

    fn right_child(len: usize, index: usize) -> Option<usize> {
        let idx = index.checked_mul(2)?.checked_add(2)?;
        (idx < len).then_some(idx)
    }

    fn parent(len: usize, index: usize) -> Option<usize> {
        // root has no parent; checked_sub keeps 0 from mapping onto itself
        let idx = index.checked_sub(1)? / 2;
        (idx < len).then_some(idx)
    }

    fn has_greater_child_in(data: &[T], index: usize) -> bool {
        let Some(value) = data.get(index) else {
            return false;
        };
        [
            Self::left_child(data.len(), index),
            Self::right_child(data.len(), index),
        ]
        .into_iter()
        .flatten()
        .any(|child| data[child] > *value)
    }

    fn larger_child_in(data: &[T], index: usize) -> Option<usize> {
        if index >= data.len() {
            return None;
        }
        let left = Self::left_child(data.len(), index)?;
        match Self::right_child(data.len(), index) {
            Some(right) if data[left] > data[right] => Some(left),
            Some(right) => Some(right),
            None => Some(left),
        }
    }

    fn sift_up(data: &mut [T], start: usize) {
        let mut i = start;
        while let Some(parent) = Self::parent(data.len(), i) {
            if data[i] > data[parent] {
                trace!("sift_up: swap {} <-> {}", i, parent);
                data.swap(i, parent);
                i = parent;
            } else {
                return;
            }
        }
    }

    fn sift_down(data: &mut [T], start: usize) {
        let mut i = start;
        while Self::has_greater_child_in(data, i) {
            let Some(child) = Self::larger_child_in(data, i) else {
                return;
            };
            trace!("sift_down: swap {} <-> {}", i, child);
            data.swap(i, child);
            i = child;
        }
    }
}

impl<T: std::cmp::PartialOrd> Default for MaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::cmp::PartialOrd> From<Vec<T>> for MaxHeap<T> {
    /// Bottom-up heapify: sift every internal node down, last one first.
    fn from(mut data: Vec<T>) -> Self {
        let l = data.len();
        debug!("heapify: {} elements", l);
        for i in (0..l / 2).rev() {
            Self::sift_down(&mut data, i);
        }
        Self { data }
    }
}

impl<T: std::cmp::PartialOrd> FromIterator<T> for MaxHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> std::fmt::Debug for MaxHeap<T>
where
    T: std::fmt::Debug + std::cmp::PartialOrd,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for cur in self.data.iter() {
            write!(f, "{:?} ", cur)?;
        }
        Ok(())
    }
}
