use std::fmt;

/// A specialized `Result` type for list and queue operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by [`List`], [`Queue`] and their cursors.
///
/// The variants fall into three families, see [`Error::is_empty`],
/// [`Error::is_out_of_range`] and [`Error::is_null_cursor`].
///
/// [`List`]: crate::List
/// [`Queue`]: crate::Queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// Removing or peeking at an element of an empty container.
    Empty,
    /// A signed index outside of `-len..len`.
    OutOfRange { index: isize, len: usize },
    /// A sized construction asked for zero elements.
    ZeroLength,
    /// Moving, dereferencing or removing at the null cursor position.
    NullCursor,
}

impl Error {
    /// Returns `true` for the empty-container error.
    pub fn is_empty(&self) -> bool {
        matches!(self, Error::Empty)
    }

    /// Returns `true` for errors of the out-of-range family, which includes
    /// asking for a zero-length list.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let err = List::with_copies(0, 'z').unwrap_err();
    /// assert!(err.is_out_of_range());
    /// ```
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::OutOfRange { .. } | Error::ZeroLength)
    }

    /// Returns `true` when a null cursor was moved or dereferenced.
    pub fn is_null_cursor(&self) -> bool {
        matches!(self, Error::NullCursor)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Empty => f.write_str("the list is empty"),
            Error::OutOfRange { index, len } => write!(
                f,
                "index {} is out of range for a list of length {}",
                index, len
            ),
            Error::ZeroLength => f.write_str("cannot build a list of length 0"),
            Error::NullCursor => f.write_str("the cursor is at the null position"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use crate::Error;

    #[test]
    fn error_families() {
        assert!(Error::Empty.is_empty());
        assert!(!Error::Empty.is_out_of_range());
        assert!(Error::OutOfRange { index: 3, len: 3 }.is_out_of_range());
        assert!(Error::ZeroLength.is_out_of_range());
        assert!(Error::NullCursor.is_null_cursor());
        assert!(!Error::NullCursor.is_empty());
    }

    #[test]
    fn error_display() {
        assert_eq!(Error::Empty.to_string(), "the list is empty");
        assert_eq!(
            Error::OutOfRange { index: -4, len: 3 }.to_string(),
            "index -4 is out of range for a list of length 3"
        );
        assert_eq!(
            Error::ZeroLength.to_string(),
            "cannot build a list of length 0"
        );
    }
}
