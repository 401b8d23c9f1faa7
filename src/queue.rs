//! A first-in-first-out queue over a [`List`].

use crate::error::Result;
use crate::list::cursor::Cursor;
use crate::list::iterator::{IntoIter, Iter};
use crate::list::List;
use std::fmt;
use std::iter::FromIterator;

/// A first-in-first-out queue, which pushes at the back of its [`List`] and
/// pops at the front.
///
/// # Examples
///
/// ```
/// use ring_list::{List, Queue};
/// use std::iter::FromIterator;
///
/// let mut queue = Queue::from(List::from_iter(["a", "b", "c"]));
/// queue.push("d");
///
/// assert_eq!(queue.pop(), Ok("a"));
/// assert_eq!(queue.pop(), Ok("b"));
/// assert_eq!(queue.pop(), Ok("c"));
/// assert_eq!(queue.to_string(), "(d)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Queue<T> {
    list: List<T>,
}

impl<T> Queue<T> {
    /// Create an empty `Queue`.
    pub fn new() -> Self {
        Self { list: List::new() }
    }

    /// Create a `Queue` of `n` copies of `value`, see [`List::with_copies`].
    pub fn with_copies(n: usize, value: T) -> Result<Self>
    where
        T: Clone,
    {
        List::with_copies(n, value).map(Self::from)
    }

    /// Create a `Queue` holding a copy of every element of `list`, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::{List, Queue};
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2]);
    /// let mut queue = Queue::from_list(&list);
    /// assert_eq!(queue.pop(), Ok(1));
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn from_list(list: &List<T>) -> Self
    where
        T: Clone,
    {
        Self::from(list.clone())
    }

    /// Create a `Queue` from the half-open cursor range `start..end`, see
    /// [`List::from_range`].
    pub fn from_range<'a>(start: Cursor<'a, T>, end: Cursor<'a, T>) -> Result<Self>
    where
        T: Clone + 'a,
    {
        List::from_range(start, end).map(Self::from)
    }

    /// Add an element at the back of the queue.
    pub fn push(&mut self, elt: T) {
        self.list.push_back(elt);
    }

    /// Remove the element at the front of the queue and return it, or
    /// [`Error::Empty`](crate::Error::Empty) if the queue is empty.
    pub fn pop(&mut self) -> Result<T> {
        self.list.pop_front()
    }

    /// Returns `true` if the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Remove every queued element.
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Provides a cursor at the front of the queue, the next one to pop.
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        self.list.cursor_start()
    }

    /// Provides a cursor at the null position past the back of the queue.
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        self.list.cursor_end()
    }

    /// Iterate the queue from front to back, in popping order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<List<T>> for Queue<T> {
    fn from(list: List<T>) -> Self {
        Self { list }
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.list, f)
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Queue").field(&self.list).finish()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(List::from_iter(iter))
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_util::trace_init;
    use crate::{Error, List, Queue};
    use proptest::prelude::*;
    use std::collections::VecDeque;
    use std::iter::FromIterator;

    #[test]
    fn queue_fifo_scenario() {
        let _trace = trace_init();
        let list = List::from_iter(["a", "b", "c"]);
        let mut queue = Queue::from_list(&list);
        queue.push("d");
        assert_eq!(queue.len(), 4);
        assert_eq!(queue.pop(), Ok("a"));
        assert_eq!(queue.pop(), Ok("b"));
        assert_eq!(queue.pop(), Ok("c"));
        assert_eq!(queue.to_string(), "(d)");
        assert_eq!(list.to_string(), "(a, b, c)");
    }

    #[test]
    fn queue_pop_empty() {
        let mut queue = Queue::<u8>::new();
        assert!(queue.is_empty());
        assert_eq!(queue.pop(), Err(Error::Empty));

        queue.push(1);
        queue.clear();
        assert_eq!(queue.pop(), Err(Error::Empty));
        assert_eq!(queue.to_string(), "()");
    }

    #[test]
    fn queue_constructors() {
        let queue = Queue::with_copies(2, 'q').unwrap();
        assert_eq!(queue.to_string(), "(q, q)");
        assert_eq!(Queue::with_copies(0, 'q').unwrap_err(), Error::ZeroLength);

        let list = List::from_iter(1..=5);
        let queue = Queue::from_range(list.cursor(1).unwrap(), list.cursor_end()).unwrap();
        assert_eq!(queue.to_string(), "(2, 3, 4, 5)");
        assert_eq!(
            Queue::from_range(queue.cursor_start(), queue.cursor_end()).unwrap(),
            queue
        );

        let collected = Queue::from_iter(vec![3, 1, 2]);
        assert_eq!(Vec::from_iter(collected), vec![3, 1, 2]);
        assert_eq!(Queue::<i32>::default(), Queue::new());
    }

    #[test]
    fn queue_extend_and_iterate() {
        let mut queue = Queue::from(List::from_iter(0..2));
        queue.extend(2..4);
        let seen: Vec<_> = queue.iter().copied().collect();
        assert_eq!(seen, vec![0, 1, 2, 3]);
        assert_eq!((&queue).into_iter().count(), 4);
        assert_eq!(format!("{:?}", queue), "Queue([0, 1, 2, 3])");
    }

    proptest! {
        #[test]
        fn queue_is_fifo(items in proptest::collection::vec(any::<i16>(), 0..32), pops in 0usize..40) {
            let mut queue = Queue::new();
            let mut model = VecDeque::new();
            for item in items {
                queue.push(item);
                model.push_back(item);
            }
            for _ in 0..pops {
                prop_assert_eq!(queue.pop().ok(), model.pop_front());
            }
            prop_assert_eq!(queue.len(), model.len());
            prop_assert!(queue.iter().eq(model.iter()));
        }
    }
}
