use core::iter::FusedIterator;
use std::slice;

use crate::node::Node;

/// An iterator over the elements of an [`ArrayList`](crate::ArrayList).
///
/// This struct is created by [`ArrayList::iter()`](crate::ArrayList::iter).
pub struct ArrayIter<'a, T> {
    slots: slice::Iter<'a, Option<T>>,
}

impl<T> Clone for ArrayIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<'a, T> ArrayIter<'a, T> {
    pub(crate) fn new(live: &'a [Option<T>]) -> Self {
        Self {
            slots: live.iter(),
        }
    }
}

impl<T> Default for ArrayIter<'_, T> {
    fn default() -> Self {
        Self {
            slots: Default::default(),
        }
    }
}

impl<'a, T> Iterator for ArrayIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.find_map(Option::as_ref)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for ArrayIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.by_ref().rev().find_map(Option::as_ref)
    }
}

// live slots always hold an element, so the slot count is exact
impl<T> ExactSizeIterator for ArrayIter<'_, T> {
    fn len(&self) -> usize {
        self.slots.len()
    }
}

impl<T> FusedIterator for ArrayIter<'_, T> {}

impl<T: core::fmt::Debug> core::fmt::Debug for ArrayIter<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("ArrayIter")
            .field(&self.clone().collect::<Vec<_>>())
            .field(&self.len())
            .finish()
    }
}

/// An iterator over the elements of a [`LinkedList`](crate::LinkedList).
///
/// This struct is created by [`LinkedList::iter()`](crate::LinkedList::iter).
pub struct LinkedIter<'a, T> {
    nodes: &'a [Node<T>],
    front: Option<usize>,
    back: Option<usize>,
    len: usize,
}

impl<'a, T> LinkedIter<'a, T> {
    pub(crate) fn new(
        nodes: &'a [Node<T>],
        front: Option<usize>,
        back: Option<usize>,
        len: usize,
    ) -> Self {
        Self {
            nodes,
            front,
            back,
            len,
        }
    }
}

impl<T> Default for LinkedIter<'_, T> {
    fn default() -> Self {
        Self {
            nodes: &[],
            front: None,
            back: None,
            len: 0,
        }
    }
}

impl<T> Clone for LinkedIter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T> Iterator for LinkedIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let node = &self.nodes[self.front?];
        self.front = node.next();
        self.len -= 1;
        node.element()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for LinkedIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let node = &self.nodes[self.back?];
        self.back = node.prev();
        self.len -= 1;
        node.element()
    }
}

impl<T> ExactSizeIterator for LinkedIter<'_, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<T> FusedIterator for LinkedIter<'_, T> {}

impl<T: core::fmt::Debug> core::fmt::Debug for LinkedIter<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("LinkedIter")
            .field(&self.clone().collect::<Vec<_>>())
            .field(&self.len)
            .finish()
    }
}
