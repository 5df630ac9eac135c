use tracing::debug;

use crate::error::{ListError, non_negative};

/// Default number of slots allocated by [`ArrayList::new`](crate::ArrayList::new).
pub const DEFAULT_CAPACITY: usize = 10;

/// Default fill percentage at which an [`ArrayList`](crate::ArrayList) doubles its buffer.
pub const DEFAULT_LOAD_PERCENT: usize = 70;

/// Controls how an [`ArrayList`](crate::ArrayList) sizes its buffer.
///
/// The buffer starts with `initial_capacity` slots. Before every insertion the list checks
/// whether `len` has reached `load_percent` percent of the current capacity, and if so doubles
/// the capacity. Emptying the list through
/// [`remove_all`](crate::List::remove_all) goes back to `initial_capacity`.
///
/// # Example
/// ```rust
/// use seq_lists::{ArrayList, GrowthPolicy, List};
///
/// let policy = GrowthPolicy::new(4, 50).unwrap();
/// let mut list = ArrayList::with_policy(policy);
/// list.add(1);
/// list.add(2);
/// assert_eq!(list.capacity(), 4);
///
/// list.add(3);
/// assert_eq!(list.capacity(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GrowthPolicy {
    initial_capacity: usize,
    load_percent: usize,
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            load_percent: DEFAULT_LOAD_PERCENT,
        }
    }
}

impl GrowthPolicy {
    /// Creates a policy, rejecting load factors outside of `1..=100` percent.
    pub fn new(initial_capacity: usize, load_percent: usize) -> Result<Self, ListError> {
        if !(1..=100).contains(&load_percent) {
            debug!("rejecting growth policy with a {load_percent}% load factor");
            return Err(ListError::InvalidLoadFactor {
                percent: load_percent,
            });
        }

        Ok(Self {
            initial_capacity,
            load_percent,
        })
    }

    /// Returns a copy of this policy starting from `capacity` slots.
    ///
    /// Negative capacities are rejected with [`ListError::InvalidArgument`].
    pub fn with_initial_capacity(self, capacity: isize) -> Result<Self, ListError> {
        Ok(Self {
            initial_capacity: non_negative(capacity)?,
            ..self
        })
    }

    #[inline]
    pub const fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    #[inline]
    pub const fn load_percent(&self) -> usize {
        self.load_percent
    }

    /// Whether a buffer holding `len` elements out of `capacity` slots must grow before the
    /// next insertion.
    #[inline]
    pub(crate) const fn must_grow(&self, len: usize, capacity: usize) -> bool {
        len * 100 >= capacity * self.load_percent
    }

    /// Capacity after one growth step.
    #[inline]
    pub(crate) const fn grown(capacity: usize) -> usize {
        if capacity == 0 { 1 } else { capacity * 2 }
    }
}
