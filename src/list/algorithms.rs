use crate::list::List;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Overwrite the list with the elements of `other`, reusing the nodes
    /// already allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let source = List::from_iter([1, 2, 3]);
    ///
    /// let mut longer = List::from_iter([7, 7, 7, 7, 7]);
    /// longer.clone_from(&source);
    /// assert_eq!(longer, source);
    ///
    /// let mut shorter = List::from_iter([7]);
    /// shorter.clone_from(&source);
    /// assert_eq!(shorter, source);
    /// ```
    fn clone_from(&mut self, other: &Self) {
        self.truncate(other.len());
        let kept = self.len();
        for (elt, elt_other) in self.iter_mut().zip(other) {
            elt.clone_from(elt_other);
        }
        self.extend(other.iter().skip(kept).cloned());
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

/// Render the list as `(e0, e1, ...)`, or `()` if it is empty.
///
/// # Examples
///
/// ```
/// use ring_list::List;
/// use std::iter::FromIterator;
///
/// assert_eq!(List::from_iter(["a", "b"]).to_string(), "(a, b)");
/// assert_eq!(List::<u8>::new().to_string(), "()");
/// ```
impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, elt) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(elt, f)?;
        }
        f.write_str(")")
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }
}
