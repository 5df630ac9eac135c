//! # seq_lists
//!
//! `seq_lists` provides two sequence containers behind a shared [`List`] contract:
//!
//! - [`ArrayList`]: elements stored contiguously in a growable buffer, doubled according to a
//!   [`GrowthPolicy`] once the load factor is reached.
//! - [`LinkedList`]: a doubly linked list whose nodes live in an arena owned by the list and
//!   refer to each other by handle. It additionally implements [`Linked`] for `O(1)` insertion
//!   at both ends.
//!
//! ## Indices
//! Indices are signed at the contract surface. A negative index is reported as
//! [`ListError::InvalidArgument`], an index past the live range as [`ListError::OutOfBounds`].
//! Validation always happens before the container is touched.
//!
//! ## Rendering
//! Both containers implement [`Display`](std::fmt::Display) as a bracketed, comma-space
//! separated listing: `[]`, `[1]`, `[1, 2, 3]`.
//!
//! ## Example
//! ```rust
//! use seq_lists::{ArrayList, Linked, LinkedList, List, ListError};
//!
//! fn fill<L: List<i32>>(list: &mut L) {
//!     for value in [5, 3, 8, 1] {
//!         list.add(value);
//!     }
//!     list.sort();
//! }
//!
//! let mut array = ArrayList::new();
//! fill(&mut array);
//! assert_eq!(array.to_string(), "[1, 3, 5, 8]");
//!
//! let mut linked = LinkedList::new();
//! fill(&mut linked);
//! linked.add_first(0);
//! assert_eq!(linked.to_string(), "[0, 1, 3, 5, 8]");
//!
//! assert!(matches!(array.get(-1), Err(ListError::InvalidArgument { value: -1 })));
//! assert!(linked.get(5).unwrap_err().is_out_of_bounds());
//! ```

mod array_list;
mod error;
mod into_iter;
mod iter;
mod linked_list;
mod node;
mod policy;

pub use array_list::ArrayList;
pub use error::ListError;
pub use into_iter::{ArrayIntoIter, LinkedIntoIter};
pub use iter::{ArrayIter, LinkedIter};
pub use linked_list::LinkedList;
pub use policy::{DEFAULT_CAPACITY, DEFAULT_LOAD_PERCENT, GrowthPolicy};

use std::cmp::Ordering;

/// Operations shared by every sequence container of this crate.
pub trait List<T> {
    /// Appends `element` at the end of the list.
    fn add(&mut self, element: T);

    /// Inserts `element` at `index`, shifting the element there and every following one back.
    ///
    /// `index == size()` appends.
    ///
    /// # Errors
    /// - [`ListError::InvalidArgument`] if `index` is negative.
    /// - [`ListError::OutOfBounds`] if `index > size()`.
    fn add_at(&mut self, element: T, index: isize) -> Result<(), ListError>;

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// - [`ListError::InvalidArgument`] if `index` is negative.
    /// - [`ListError::OutOfBounds`] if `index >= size()`.
    fn get(&self, index: isize) -> Result<&T, ListError>;

    /// Number of elements in the list.
    fn size(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns whether some element of the list is equal to `element`.
    fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        (0..self.size()).any(|index| {
            isize::try_from(index)
                .ok()
                .and_then(|index| self.get(index).ok())
                .is_some_and(|candidate| candidate == element)
        })
    }

    /// Removes the element at `index`, closing the gap it leaves.
    ///
    /// Returns `Ok(false)` without touching the list if `index >= size()`.
    ///
    /// # Errors
    /// [`ListError::InvalidArgument`] if `index` is negative.
    fn remove_at(&mut self, index: isize) -> Result<bool, ListError>;

    /// Removes the first element equal to `element`. Returns whether one was found.
    fn remove(&mut self, element: &T) -> bool
    where
        T: PartialEq;

    /// Removes every element. Calling it on an empty list is a no-op.
    fn remove_all(&mut self);

    /// Sorts the list in ascending order.
    fn sort(&mut self)
    where
        T: Ord;
}

/// Insertion at the ends of a linked list, without any index lookup.
pub trait Linked<T>: List<T> {
    /// Inserts `element` before the current head in `O(1)`.
    fn add_first(&mut self, element: T);

    /// Inserts `element` after the current tail in `O(1)`.
    fn add_last(&mut self, element: T);
}

/// Natural ordering where an absent value sorts after every present one.
pub(crate) fn absent_last<T: Ord>(a: Option<&T>, b: Option<&T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;
    use std::fmt::Display;

    use crate::{ArrayList, Linked, LinkedList, List, ListError, absent_last};

    fn contract<L>(mut sut: L)
    where
        L: List<i32> + Display,
    {
        assert_eq!(sut.size(), 0);
        assert!(sut.is_empty());
        assert!(!sut.contains(&5));
        assert_eq!(sut.to_string(), "[]");

        for value in [5, 3, 8, 1] {
            sut.add(value);
        }
        assert_eq!(sut.size(), 4);
        assert!(!sut.is_empty());
        assert!(sut.contains(&5));
        assert!(sut.contains(&1));
        assert!(!sut.contains(&4));
        assert_eq!(sut.to_string(), "[5, 3, 8, 1]");

        sut.add_at(4, 2).unwrap();
        assert_eq!(sut.get(2), Ok(&4));
        sut.add_at(9, 5).unwrap();
        assert_eq!(sut.get(5), Ok(&9));
        assert_eq!(sut.to_string(), "[5, 3, 4, 8, 1, 9]");

        sut.sort();
        assert_eq!(sut.to_string(), "[1, 3, 4, 5, 8, 9]");

        assert_eq!(sut.get(-1), Err(ListError::InvalidArgument { value: -1 }));
        assert_eq!(sut.remove_at(-1), Err(ListError::InvalidArgument { value: -1 }));
        assert_eq!(sut.add_at(0, -1), Err(ListError::InvalidArgument { value: -1 }));
        assert_eq!(sut.get(6), Err(ListError::OutOfBounds { index: 6, len: 6 }));
        assert_eq!(sut.add_at(0, 7), Err(ListError::OutOfBounds { index: 7, len: 6 }));
        assert_eq!(sut.size(), 6);

        assert!(sut.contains(&4));
        assert!(sut.remove(&4));
        assert!(!sut.remove(&4));
        assert!(!sut.contains(&4));
        assert_eq!(sut.remove_at(0), Ok(true));
        assert_eq!(sut.remove_at(3), Ok(true));
        assert_eq!(sut.remove_at(3), Ok(false));
        assert_eq!(sut.size(), 3);
        assert_eq!(sut.to_string(), "[3, 5, 8]");

        sut.remove_all();
        assert_eq!(sut.size(), 0);
        assert!(sut.is_empty());
        assert!(!sut.contains(&3));
        assert_eq!(sut.to_string(), "[]");
        sut.remove_all();
        assert_eq!(sut.size(), 0);
        assert_eq!(sut.to_string(), "[]");
    }

    #[test]
    fn array_list_satisfies_the_list_contract() {
        contract(ArrayList::new());
        contract(ArrayList::with_capacity(0).unwrap());
    }

    #[test]
    fn linked_list_satisfies_the_list_contract() {
        contract(LinkedList::new());
    }

    #[test]
    fn linked_contract_inserts_at_both_ends() {
        fn ends<L: Linked<char> + Display>(mut sut: L) {
            sut.add_first('b');
            sut.add_last('c');
            sut.add_first('a');
            assert_eq!(sut.size(), 3);
            assert_eq!(sut.to_string(), "[a, b, c]");
        }

        ends(LinkedList::new());
    }

    #[test]
    fn absent_last_orders_absent_values_after_present_ones() {
        assert_eq!(absent_last(Some(&1), Some(&2)), Ordering::Less);
        assert_eq!(absent_last(Some(&2), Some(&2)), Ordering::Equal);
        assert_eq!(absent_last(Some(&3), Some(&2)), Ordering::Greater);
        assert_eq!(absent_last::<i32>(None, None), Ordering::Equal);
        assert_eq!(absent_last(None, Some(&i32::MAX)), Ordering::Greater);
        assert_eq!(absent_last(Some(&i32::MAX), None), Ordering::Less);

        let mut values = [None, Some(3), None, Some(1)];
        values.sort_by(|a, b| absent_last(a.as_ref(), b.as_ref()));
        assert_eq!(values, [Some(1), Some(3), None, None]);
    }
}
