use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::trace;

use crate::error::{ListError, element_index, insertion_index, non_negative};
use crate::into_iter::LinkedIntoIter;
use crate::iter::LinkedIter;
use crate::node::Node;
use crate::{Linked, List, absent_last};

/// A doubly linked list whose nodes live in an arena owned by the list.
///
/// Nodes refer to their neighbours by arena handle rather than by pointer. Unlinked nodes go to a
/// free list and are reused by later insertions, so the arena only grows when every slot is
/// occupied. Index 0 is always the head of the chain.
///
/// The arena is only released once the list is empty: a list that shrinks from a peak of `n`
/// elements keeps `n` node slots, vacant ones waiting on the free list.
///
/// # Example
/// ```rust
/// use seq_lists::{Linked, LinkedList, List};
///
/// let mut list = LinkedList::new();
/// list.add_last(2);
/// list.add_first(1);
/// list.add(4);
/// list.add_at(3, 2).unwrap();
///
/// assert_eq!(list.to_string(), "[1, 2, 3, 4]");
/// assert_eq!(list.get(2), Ok(&3));
///
/// assert!(list.remove(&1));
/// assert_eq!(list.remove_at(0), Ok(true));
/// assert_eq!(list.to_string(), "[3, 4]");
/// ```
pub struct LinkedList<T> {
    nodes: Vec<Node<T>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    /// Creates an empty list. Does not allocate.
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|handle| self.nodes[handle].element())
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        let handle = self.head?;
        self.nodes[handle].element_mut()
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|handle| self.nodes[handle].element())
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        let handle = self.tail?;
        self.nodes[handle].element_mut()
    }

    /// Removes and returns the head element, if any.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.and_then(|handle| self.unlink(handle))
    }

    /// Removes and returns the tail element, if any.
    pub fn pop_back(&mut self) -> Option<T> {
        self.tail.and_then(|handle| self.unlink(handle))
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// Same as [`List::get`].
    pub fn get_mut(&mut self, index: isize) -> Result<&mut T, ListError> {
        let len = self.len;
        let index = element_index(index, len)?;
        let handle = self
            .locate(index)
            .ok_or(ListError::OutOfBounds { index, len })?;
        self.nodes[handle]
            .element_mut()
            .ok_or(ListError::OutOfBounds { index, len })
    }

    /// Provides a double-ended iterator over the elements, head to tail.
    #[inline]
    pub fn iter(&self) -> LinkedIter<'_, T> {
        LinkedIter::new(&self.nodes, self.head, self.tail, self.len)
    }

    /// Handle of the node at `index`, walking from whichever end is closer.
    fn locate(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }

        if index <= self.len / 2 {
            let mut cursor = self.head;
            for _ in 0..index {
                cursor = cursor.and_then(|handle| self.nodes[handle].next());
            }
            return cursor;
        }

        let mut cursor = self.tail;
        for _ in index + 1..self.len {
            cursor = cursor.and_then(|handle| self.nodes[handle].prev());
        }
        cursor
    }

    fn allocate(&mut self, element: T, prev: Option<usize>, next: Option<usize>) -> usize {
        let node = Node::new(element, prev, next);

        match self.free.pop() {
            Some(handle) => {
                trace!("reusing vacant linked list node {handle}");
                self.nodes[handle] = node;
                handle
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    /// Links a new node right before `target`.
    fn link_before(&mut self, target: usize, element: T) {
        let prev = self.nodes[target].prev();
        let handle = self.allocate(element, prev, Some(target));

        self.nodes[target].set_prev(Some(handle));
        match prev {
            Some(prev) => self.nodes[prev].set_next(Some(handle)),
            None => self.head = Some(handle),
        }

        self.len += 1;
    }

    /// Detaches `handle` from the chain, joining its neighbours, and vacates it.
    fn unlink(&mut self, handle: usize) -> Option<T> {
        let prev = self.nodes[handle].prev();
        let next = self.nodes[handle].next();

        match prev {
            Some(prev) => self.nodes[prev].set_next(next),
            None => self.head = next,
        }
        match next {
            Some(next) => self.nodes[next].set_prev(prev),
            None => self.tail = prev,
        }

        let element = self.nodes[handle].vacate();
        self.free.push(handle);
        self.len -= 1;

        if self.len == 0 {
            self.reset();
        }

        element
    }

    fn position(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let mut cursor = self.head;
        while let Some(handle) = cursor {
            let node = &self.nodes[handle];
            if node.element() == Some(element) {
                return Some(handle);
            }
            cursor = node.next();
        }

        None
    }

    fn reset(&mut self) {
        trace!("releasing {} linked list nodes", self.nodes.len());
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Swaps the elements held by two distinct nodes, leaving the links untouched.
    fn swap_elements(&mut self, a: usize, b: usize) {
        let taken = self.nodes[b].element_slot().take();
        let displaced = std::mem::replace(self.nodes[a].element_slot(), taken);
        *self.nodes[b].element_slot() = displaced;
    }
}

impl<T> Linked<T> for LinkedList<T> {
    fn add_first(&mut self, element: T) {
        let handle = self.allocate(element, None, self.head);

        match self.head {
            Some(head) => self.nodes[head].set_prev(Some(handle)),
            None => self.tail = Some(handle),
        }

        self.head = Some(handle);
        self.len += 1;
    }

    fn add_last(&mut self, element: T) {
        let handle = self.allocate(element, self.tail, None);

        match self.tail {
            Some(tail) => self.nodes[tail].set_next(Some(handle)),
            None => self.head = Some(handle),
        }

        self.tail = Some(handle);
        self.len += 1;
    }
}

impl<T> List<T> for LinkedList<T> {
    #[inline]
    fn add(&mut self, element: T) {
        self.add_last(element);
    }

    fn add_at(&mut self, element: T, index: isize) -> Result<(), ListError> {
        let len = self.len;
        let index = insertion_index(index, len)?;
        if index == len {
            self.add_last(element);
            return Ok(());
        }

        let target = self
            .locate(index)
            .ok_or(ListError::OutOfBounds { index, len })?;
        self.link_before(target, element);
        Ok(())
    }

    fn get(&self, index: isize) -> Result<&T, ListError> {
        let len = self.len;
        let index = element_index(index, len)?;
        self.locate(index)
            .and_then(|handle| self.nodes[handle].element())
            .ok_or(ListError::OutOfBounds { index, len })
    }

    #[inline]
    fn size(&self) -> usize {
        self.len
    }

    /// Single walk of the chain instead of one lookup per index.
    fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.position(element).is_some()
    }

    fn remove_at(&mut self, index: isize) -> Result<bool, ListError> {
        let index = non_negative(index)?;
        let Some(handle) = self.locate(index) else {
            return Ok(false);
        };

        self.unlink(handle);
        Ok(true)
    }

    fn remove(&mut self, element: &T) -> bool
    where
        T: PartialEq,
    {
        match self.position(element) {
            Some(handle) => {
                self.unlink(handle);
                true
            }
            None => false,
        }
    }

    fn remove_all(&mut self) {
        self.reset();
    }

    /// Selection sort over the chain: elements move between nodes, nodes never move.
    fn sort(&mut self)
    where
        T: Ord,
    {
        let mut current = self.head;
        while let Some(handle) = current {
            let mut min = handle;
            let mut scan = self.nodes[handle].next();
            while let Some(candidate) = scan {
                let ordering = absent_last(
                    self.nodes[candidate].element(),
                    self.nodes[min].element(),
                );
                if ordering == Ordering::Less {
                    min = candidate;
                }
                scan = self.nodes[candidate].next();
            }

            if min != handle && !self.nodes[handle].is_vacant() {
                self.swap_elements(handle, min);
            }

            current = self.nodes[handle].next();
        }
    }
}

impl<T, const M: usize> From<[T; M]> for LinkedList<T> {
    fn from(values: [T; M]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.nodes.reserve(iter.size_hint().0);
        iter.for_each(|element| self.add_last(element));
    }
}

impl<'a, T> Extend<&'a T> for LinkedList<T>
where
    T: Clone,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T, const M: usize> PartialEq<[T; M]> for LinkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T; M]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> PartialEq<&[T]> for LinkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &&[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> PartialEq for LinkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> PartialOrd for LinkedList<T>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T> Ord for LinkedList<T>
where
    T: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|v| v.hash(state));
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("]")
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = LinkedIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        LinkedIntoIter::from_list(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = LinkedIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
