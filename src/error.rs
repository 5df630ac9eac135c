use derive_more::{Display, Error};

/// A set of errors that can occur while addressing or configuring a list.
///
/// Every operation validates its arguments before touching the container, so a call that
/// returns one of these leaves the list exactly as it was.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ListError {
    /// A negative value was passed where an index or a capacity was expected.
    #[display("negative value ({value}) is not a valid index or capacity")]
    InvalidArgument { value: isize },

    /// A load factor outside of `1..=100` percent was requested.
    #[display("load factor of {percent}% is outside of the accepted 1..=100 range")]
    InvalidLoadFactor { percent: usize },

    /// The index is past the range the operation accepts.
    #[display("index {index} is out of bounds for a list of length {len}")]
    OutOfBounds { index: usize, len: usize },
}

impl ListError {
    /// Returns `true` for errors caused by a malformed argument rather than by the list state.
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. } | Self::InvalidLoadFactor { .. }
        )
    }

    /// Returns `true` if the index exceeded the live range of the list.
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}

/// Rejects negative values, handing back the value as an unsigned index.
#[inline]
pub(crate) fn non_negative(value: isize) -> Result<usize, ListError> {
    usize::try_from(value).map_err(|_| ListError::InvalidArgument { value })
}

/// Validates an index that must address a live element (`index < len`).
#[inline]
pub(crate) fn element_index(index: isize, len: usize) -> Result<usize, ListError> {
    let index = non_negative(index)?;
    if index >= len {
        return Err(ListError::OutOfBounds { index, len });
    }

    Ok(index)
}

/// Validates an insertion point (`index <= len`).
#[inline]
pub(crate) fn insertion_index(index: isize, len: usize) -> Result<usize, ListError> {
    let index = non_negative(index)?;
    if index > len {
        return Err(ListError::OutOfBounds { index, len });
    }

    Ok(index)
}
