use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::trace;

use crate::error::{ListError, element_index, insertion_index, non_negative};
use crate::into_iter::ArrayIntoIter;
use crate::iter::ArrayIter;
use crate::policy::GrowthPolicy;
use crate::{List, absent_last};

/// A list backed by a single growable buffer.
///
/// Elements live contiguously in the first [`len`](ArrayList::len) slots of the buffer. Before
/// every insertion the buffer is checked against its [`GrowthPolicy`] and doubled once the load
/// factor is reached, moving only the live elements into the new allocation.
///
/// # Example
/// ```rust
/// use seq_lists::{ArrayList, List};
///
/// let mut list = ArrayList::new();
/// list.add(3);
/// list.add(1);
/// list.add_at(2, 1).unwrap();
///
/// assert_eq!(list.to_string(), "[3, 2, 1]");
///
/// list.sort();
/// assert_eq!(list.to_string(), "[1, 2, 3]");
///
/// assert_eq!(list.remove_at(0), Ok(true));
/// assert!(list.remove(&3));
/// assert_eq!(list.size(), 1);
/// ```
pub struct ArrayList<T> {
    slots: Box<[Option<T>]>,
    len: usize,
    policy: GrowthPolicy,
}

fn vacant_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArrayList<T> {
    /// Creates an empty list with the default capacity of 10 slots and a 70% load factor.
    pub fn new() -> Self {
        Self::with_policy(GrowthPolicy::default())
    }

    /// Creates an empty list with room for `capacity` slots.
    ///
    /// Zero is accepted: the first insertion grows the buffer.
    ///
    /// # Errors
    /// Returns [`ListError::InvalidArgument`] if `capacity` is negative.
    ///
    /// # Example
    /// ```rust
    /// use seq_lists::{ArrayList, ListError};
    ///
    /// let list = ArrayList::<u8>::with_capacity(4).unwrap();
    /// assert_eq!(list.capacity(), 4);
    ///
    /// assert!(matches!(
    ///     ArrayList::<u8>::with_capacity(-1),
    ///     Err(ListError::InvalidArgument { value: -1 })
    /// ));
    /// ```
    pub fn with_capacity(capacity: isize) -> Result<Self, ListError> {
        GrowthPolicy::default()
            .with_initial_capacity(capacity)
            .map(Self::with_policy)
    }

    /// Creates an empty list sized and grown according to `policy`.
    pub fn with_policy(policy: GrowthPolicy) -> Self {
        Self {
            slots: vacant_slots(policy.initial_capacity()),
            len: 0,
            policy,
        }
    }

    /// Number of slots currently allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub const fn policy(&self) -> GrowthPolicy {
        self.policy
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
        self.live().first().and_then(Option::as_ref)
    }

    pub fn back(&self) -> Option<&T> {
        self.live().last().and_then(Option::as_ref)
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// Same as [`List::get`].
    pub fn get_mut(&mut self, index: isize) -> Result<&mut T, ListError> {
        let len = self.len;
        let index = element_index(index, len)?;
        self.slots[index]
            .as_mut()
            .ok_or(ListError::OutOfBounds { index, len })
    }

    /// Provides an iterator over the live elements, front to back.
    #[inline]
    pub fn iter(&self) -> ArrayIter<'_, T> {
        ArrayIter::new(self.live())
    }

    #[inline]
    fn live(&self) -> &[Option<T>] {
        &self.slots[..self.len]
    }

    fn ensure_capacity(&mut self) {
        let capacity = self.capacity();
        if !self.policy.must_grow(self.len, capacity) {
            return;
        }

        let grown = GrowthPolicy::grown(capacity);
        trace!("growing array list buffer from {capacity} to {grown} slots");

        let mut slots = vacant_slots(grown);
        for (target, source) in slots.iter_mut().zip(self.slots[..self.len].iter_mut()) {
            *target = source.take();
        }
        self.slots = slots;
    }

    fn remove_live(&mut self, index: usize) -> Option<T> {
        let removed = self.slots[index].take();
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;
        removed
    }

    pub(crate) fn into_live_slots(self) -> Vec<Option<T>> {
        let mut slots = Vec::from(self.slots);
        slots.truncate(self.len);
        slots
    }
}

impl<T> List<T> for ArrayList<T> {
    fn add(&mut self, element: T) {
        self.ensure_capacity();
        self.slots[self.len] = Some(element);
        self.len += 1;
    }

    fn add_at(&mut self, element: T, index: isize) -> Result<(), ListError> {
        let index = insertion_index(index, self.len)?;
        self.ensure_capacity();

        // slot `len` is vacant after the capacity check, rotating brings it to `index`
        self.slots[index..=self.len].rotate_right(1);
        self.slots[index] = Some(element);
        self.len += 1;
        Ok(())
    }

    fn get(&self, index: isize) -> Result<&T, ListError> {
        let len = self.len;
        let index = element_index(index, len)?;
        self.slots[index]
            .as_ref()
            .ok_or(ListError::OutOfBounds { index, len })
    }

    #[inline]
    fn size(&self) -> usize {
        self.len
    }

    fn remove_at(&mut self, index: isize) -> Result<bool, ListError> {
        let index = non_negative(index)?;
        if index >= self.len {
            return Ok(false);
        }

        self.remove_live(index);
        Ok(true)
    }

    fn remove(&mut self, element: &T) -> bool
    where
        T: PartialEq,
    {
        let position = self
            .live()
            .iter()
            .position(|slot| slot.as_ref() == Some(element));

        match position {
            Some(index) => {
                self.remove_live(index);
                true
            }
            None => false,
        }
    }

    fn remove_all(&mut self) {
        trace!(
            "resetting array list buffer to {} slots",
            self.policy.initial_capacity()
        );
        self.slots = vacant_slots(self.policy.initial_capacity());
        self.len = 0;
    }

    fn sort(&mut self)
    where
        T: Ord,
    {
        self.slots[..self.len].sort_by(|a, b| absent_last(a.as_ref(), b.as_ref()));
    }
}

impl<T, const M: usize> From<[T; M]> for ArrayList<T> {
    fn from(values: [T; M]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|element| self.add(element));
    }
}

impl<'a, T> Extend<&'a T> for ArrayList<T>
where
    T: Clone,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        let mut this = Self::with_policy(self.policy);
        this.extend(self.iter());
        this
    }
}

impl<T, const M: usize> PartialEq<[T; M]> for ArrayList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T; M]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> PartialEq<&[T]> for ArrayList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &&[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> PartialEq<[T]> for ArrayList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> PartialEq for ArrayList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T> PartialOrd for ArrayList<T>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T> Ord for ArrayList<T>
where
    T: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Hash> Hash for ArrayList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|v| v.hash(state));
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.live().iter().flatten().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("]")
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = ArrayIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        ArrayIntoIter::from_list(self)
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = ArrayIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
