//! Fixed-capacity singly linked list
//!
//! Nodes live in a fixed array and link to each other by index. Unused slots
//! form a free list, so removal returns a slot for reuse and no allocator is
//! involved.

use core::fmt;

use crate::error::{TimeError, TimeResult};
use crate::logging::log_warn;

/// Index marking the end of a chain
const NIL: usize = usize::MAX;

/// Ordered singly linked list with static capacity
///
/// # Type Parameters
/// - `T`: Element type
/// - `CAPACITY`: Maximum number of elements (defaults to 16)
///
/// # Memory Usage
/// - `CAPACITY * (size_of::<Option<T>>() + size_of::<usize>()) + 4 * size_of::<usize>()`
/// - Completely predictable at compile time
///
/// # Example
/// ```rust
/// use timesphere::list::List;
///
/// let mut list = List::<u32>::new();
/// list.append(2)?;
/// list.append(3)?;
/// list.prepend(1)?;
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(*list.get(0)?, 1);
/// assert!(list.remove(&2));
/// assert!(!list.contains(&2));
/// # Ok::<(), timesphere::error::TimeError>(())
/// ```
#[derive(Clone)]
pub struct List<T, const CAPACITY: usize = 16> {
    /// Node payloads, `None` for free slots
    values: [Option<T>; CAPACITY],

    /// Successor index of each node, `NIL` at the end of a chain
    next: [usize; CAPACITY],

    head: usize,
    tail: usize,

    /// First free slot
    free: usize,

    len: usize,
}

impl<T, const CAPACITY: usize> List<T, CAPACITY> {
    /// Creates an empty list
    pub fn new() -> Self {
        Self {
            values: [const { None }; CAPACITY],
            next: core::array::from_fn(|i| if i + 1 < CAPACITY { i + 1 } else { NIL }),
            head: NIL,
            tail: NIL,
            free: if CAPACITY > 0 { 0 } else { NIL },
            len: 0,
        }
    }

    /// Adds an element at the end
    ///
    /// # Errors
    /// `TimeError::CapacityExceeded` when every slot is in use.
    pub fn append(&mut self, value: T) -> TimeResult<()> {
        let index = self.allocate(value)?;

        if self.tail == NIL {
            self.head = index;
        } else {
            self.next[self.tail] = index;
        }
        self.tail = index;

        Ok(())
    }

    /// Adds an element at the beginning
    ///
    /// # Errors
    /// `TimeError::CapacityExceeded` when every slot is in use.
    pub fn prepend(&mut self, value: T) -> TimeResult<()> {
        let index = self.allocate(value)?;

        self.next[index] = self.head;
        self.head = index;
        if self.tail == NIL {
            self.tail = index;
        }

        Ok(())
    }

    /// Returns the element at `index`
    ///
    /// # Errors
    /// `TimeError::IndexOutOfBounds` when `index >= len()`.
    pub fn get(&self, index: usize) -> TimeResult<&T> {
        match self.iter().nth(index) {
            Some(value) => Ok(value),
            None => {
                log_warn!("list index {} out of bounds (len {})", index, self.len);
                Err(TimeError::IndexOutOfBounds)
            }
        }
    }

    /// Returns the number of elements
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list holds no elements
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if no further element fits
    pub fn is_full(&self) -> bool {
        self.len == CAPACITY
    }

    /// Returns the maximum number of elements
    pub fn capacity(&self) -> usize {
        CAPACITY
    }

    /// Removes every element
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Iterates from head to tail
    pub fn iter(&self) -> Iter<'_, T, CAPACITY> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    fn allocate(&mut self, value: T) -> TimeResult<usize> {
        if self.free == NIL {
            log_warn!("list capacity {} exhausted", CAPACITY);
            return Err(TimeError::CapacityExceeded);
        }

        let index = self.free;
        self.free = self.next[index];
        self.values[index] = Some(value);
        self.next[index] = NIL;
        self.len += 1;

        Ok(index)
    }
}

impl<T: PartialEq, const CAPACITY: usize> List<T, CAPACITY> {
    /// Removes the first element equal to `value`
    ///
    /// Returns false, leaving the list untouched, if no element matches.
    pub fn remove(&mut self, value: &T) -> bool {
        let mut prev = NIL;
        let mut cursor = self.head;

        while cursor != NIL {
            if self.values[cursor].as_ref() == Some(value) {
                let successor = self.next[cursor];
                if prev == NIL {
                    self.head = successor;
                } else {
                    self.next[prev] = successor;
                }
                if self.tail == cursor {
                    self.tail = prev;
                }

                self.values[cursor] = None;
                self.next[cursor] = self.free;
                self.free = cursor;
                self.len -= 1;
                return true;
            }

            prev = cursor;
            cursor = self.next[cursor];
        }

        false
    }

    /// Returns true if an element equal to `value` is present
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|element| element == value)
    }
}

impl<T, const CAPACITY: usize> Default for List<T, CAPACITY> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, const CAPACITY: usize> fmt::Debug for List<T, CAPACITY> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// Equal when the sequences match, regardless of slot layout
impl<T: PartialEq, const CAPACITY: usize> PartialEq for List<T, CAPACITY> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, const CAPACITY: usize> Eq for List<T, CAPACITY> {}

/// Iterator over list elements in order
pub struct Iter<'a, T, const CAPACITY: usize> {
    list: &'a List<T, CAPACITY>,
    cursor: usize,
    remaining: usize,
}

impl<'a, T, const CAPACITY: usize> Iterator for Iter<'a, T, CAPACITY> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == NIL {
            return None;
        }

        let value = self.list.values[self.cursor].as_ref()?;
        self.cursor = self.list.next[self.cursor];
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, const CAPACITY: usize> ExactSizeIterator for Iter<'_, T, CAPACITY> {}

impl<'a, T, const CAPACITY: usize> IntoIterator for &'a List<T, CAPACITY> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, CAPACITY>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<const N: usize>(list: &List<u32, N>) -> ([u32; 8], usize) {
        let mut out = [0u32; 8];
        let mut count = 0;
        for &value in list {
            out[count] = value;
            count += 1;
        }
        (out, count)
    }

    #[test]
    fn test_new_list() {
        let list = List::<u32>::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.capacity(), 16);
        assert_eq!(list.iter().next(), None);
    }

    #[test]
    fn test_append_and_prepend_order() {
        let mut list = List::<u32, 8>::new();
        list.append(2).unwrap();
        list.append(3).unwrap();
        list.prepend(1).unwrap();
        list.prepend(0).unwrap();

        let (values, count) = collect(&list);
        assert_eq!(&values[..count], &[0, 1, 2, 3]);
        assert_eq!(list.len(), 4);
        assert_eq!(list.iter().len(), 4);
    }

    #[test]
    fn test_prepend_into_empty_sets_tail() {
        let mut list = List::<u32, 4>::new();
        list.prepend(1).unwrap();
        list.append(2).unwrap();

        let (values, count) = collect(&list);
        assert_eq!(&values[..count], &[1, 2]);
    }

    #[test]
    fn test_remove_head_middle_tail() {
        let mut list = List::<u32, 8>::new();
        for value in 1..=5 {
            list.append(value).unwrap();
        }

        assert!(list.remove(&1));
        assert!(list.remove(&3));
        assert!(list.remove(&5));
        let (values, count) = collect(&list);
        assert_eq!(&values[..count], &[2, 4]);

        // tail must follow the removal
        list.append(6).unwrap();
        let (values, count) = collect(&list);
        assert_eq!(&values[..count], &[2, 4, 6]);
    }

    #[test]
    fn test_remove_first_occurrence_only() {
        let mut list = List::<u32, 8>::new();
        list.append(7).unwrap();
        list.append(8).unwrap();
        list.append(7).unwrap();

        assert!(list.remove(&7));
        let (values, count) = collect(&list);
        assert_eq!(&values[..count], &[8, 7]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut list = List::<u32, 4>::new();
        assert!(!list.remove(&1));

        list.append(1).unwrap();
        assert!(!list.remove(&2));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_only_element() {
        let mut list = List::<u32, 4>::new();
        list.append(1).unwrap();
        assert!(list.remove(&1));
        assert!(list.is_empty());

        list.append(2).unwrap();
        assert_eq!(*list.get(0).unwrap(), 2);
    }

    #[test]
    fn test_contains() {
        let mut list = List::<u32, 4>::new();
        list.append(10).unwrap();
        list.append(20).unwrap();

        assert!(list.contains(&10));
        assert!(list.contains(&20));
        assert!(!list.contains(&30));
    }

    #[test]
    fn test_get_bounds() {
        let mut list = List::<u32, 4>::new();
        list.append(10).unwrap();
        list.append(20).unwrap();

        assert_eq!(list.get(1), Ok(&20));
        assert_eq!(list.get(2), Err(TimeError::IndexOutOfBounds));
    }

    #[test]
    fn test_capacity_exceeded_and_slot_reuse() {
        let mut list = List::<u32, 3>::new();
        list.append(1).unwrap();
        list.append(2).unwrap();
        list.append(3).unwrap();

        assert!(list.is_full());
        assert_eq!(list.append(4), Err(TimeError::CapacityExceeded));
        assert_eq!(list.prepend(0), Err(TimeError::CapacityExceeded));

        assert!(list.remove(&2));
        list.prepend(0).unwrap();
        let (values, count) = collect(&list);
        assert_eq!(&values[..count], &[0, 1, 3]);
    }

    #[test]
    fn test_zero_capacity() {
        let mut list = List::<u32, 0>::new();
        assert_eq!(list.append(1), Err(TimeError::CapacityExceeded));
        assert!(list.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut list = List::<u32, 4>::new();
        list.append(1).unwrap();
        list.append(2).unwrap();
        list.clear();

        assert!(list.is_empty());
        assert!(!list.contains(&1));
        for value in 0..4 {
            list.append(value).unwrap();
        }
        assert!(list.is_full());
    }

    #[test]
    fn test_equality_ignores_slot_layout() {
        let mut a = List::<u32, 4>::new();
        a.append(1).unwrap();
        a.append(2).unwrap();

        let mut b = List::<u32, 4>::new();
        b.append(9).unwrap();
        b.append(2).unwrap();
        b.remove(&9);
        b.prepend(1).unwrap();

        assert_eq!(a, b);
    }
}
