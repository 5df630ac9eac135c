use core::iter::FusedIterator;
use std::vec;

use crate::{ArrayList, LinkedList};

/// An owning iterator over the elements of an [`ArrayList`].
///
/// This struct is created by `ArrayList::into_iter()`.
pub struct ArrayIntoIter<T> {
    slots: vec::IntoIter<Option<T>>,
}

impl<T> Default for ArrayIntoIter<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new().into_iter(),
        }
    }
}

impl<T> ArrayIntoIter<T> {
    pub(crate) fn from_list(list: ArrayList<T>) -> Self {
        Self {
            slots: list.into_live_slots().into_iter(),
        }
    }
}

impl<T> Iterator for ArrayIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.find_map(|slot| slot)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for ArrayIntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.by_ref().rev().find_map(|slot| slot)
    }
}

impl<T> ExactSizeIterator for ArrayIntoIter<T> {
    fn len(&self) -> usize {
        self.slots.len()
    }
}

impl<T> FusedIterator for ArrayIntoIter<T> {}

/// An owning iterator over the elements of a [`LinkedList`].
///
/// This struct is created by `LinkedList::into_iter()`.
pub struct LinkedIntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Default for LinkedIntoIter<T> {
    fn default() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }
}

impl<T> LinkedIntoIter<T> {
    pub(crate) fn from_list(list: LinkedList<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for LinkedIntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for LinkedIntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for LinkedIntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<T> FusedIterator for LinkedIntoIter<T> {}

impl<T: core::fmt::Debug> core::fmt::Debug for LinkedIntoIter<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("LinkedIntoIter").field(&self.list).finish()
    }
}
