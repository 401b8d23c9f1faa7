use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::ptr::NonNull;

use crate::error::{Error, Result};
use crate::list::cursor::{Cursor, CursorMut};
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;

/// The `List` is a doubly-linked list with owned nodes, implemented as a ring.
/// It allows inserting and removing elements at both ends in constant time.
/// In compromise, accessing or mutating elements by index takes *O*(*n*) time,
/// bounded by *n* / 2 hops.
///
/// The `List` contains:
/// - a pointer `head` to the front node, and a pointer `tail` to the back node,
///   both `None` if and only if the list is empty;
/// - a length field `len`.
///
/// The back node links forward to the front node and the front node links
/// backward to the back node, so the nodes always form a closed ring.
///
/// # Naming Conventions
///
/// - `front`, `back`: the first and the last element;
/// - `start..end`: a half-open range of cursor positions, where `end` is
///   probably the null position past the back node.
pub struct List<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    /// the length of the list
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    pub(crate) element: T,
}

/// Link `prev` and `next` to each other.
///
/// It is unsafe because both pointers must be valid nodes.
pub(crate) unsafe fn connect<T>(mut prev: NonNull<Node<T>>, mut next: NonNull<Node<T>>) {
    prev.as_mut().next = next;
    next.as_mut().prev = prev;
}

// private methods
impl<T> List<T> {
    pub(crate) fn front_node(&self) -> Option<NonNull<Node<T>>> {
        self.head
    }
    pub(crate) fn back_node(&self) -> Option<NonNull<Node<T>>> {
        self.tail
    }

    /// Attach a detached node `node` right before `next`, or after the back
    /// node if `next` is `None`. Attaching before the front node makes `node`
    /// the new front node.
    ///
    /// It is unsafe because it does not check whether `next` belongs to the list.
    ///
    /// If `next` does not belong to the list, this function call will make
    /// the list ill-formed.
    pub(crate) unsafe fn attach_node(
        &mut self,
        node: NonNull<Node<T>>,
        next: Option<NonNull<Node<T>>>,
    ) {
        match self.head {
            Some(head) => {
                let at_back = next.is_none();
                // Appending at the back is inserting between the tail and the head.
                let next = next.unwrap_or(head);
                #[cfg(debug_assertions)]
                assert_adjacent(next.as_ref().prev, next);
                connect(next.as_ref().prev, node);
                connect(node, next);
                if at_back {
                    self.tail = Some(node);
                } else if next == head {
                    self.head = Some(node);
                }
            }
            _ => {
                debug_assert!(next.is_none(), "an empty list has no node to attach before");
                connect(node, node);
                self.head = Some(node);
                self.tail = Some(node);
            }
        }
        self.len += 1;
        trace!(len = self.len, "node attached");
    }

    /// Detach a single node `node` from the list, and return it as a box.
    /// The ring is closed again over the remaining nodes.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the list.
    ///
    /// If the `node` does not belong to the list, this function call will make
    /// the list ill-formed.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        if self.len == 1 {
            self.head = None;
            self.tail = None;
        } else {
            let (prev, next) = (node.as_ref().prev, node.as_ref().next);
            connect(prev, next);
            if self.head == Some(node) {
                self.head = Some(next);
            }
            if self.tail == Some(node) {
                self.tail = Some(prev);
            }
        }
        self.len -= 1;
        trace!(len = self.len, "node detached");
        Box::from_raw(node.as_ptr())
    }

    /// Resolve a signed index into a position in `0..len`.
    fn position(&self, index: isize) -> Result<usize> {
        let len = self.len;
        let at = if index >= 0 {
            Some(index.unsigned_abs()).filter(|&at| at < len)
        } else {
            len.checked_sub(index.unsigned_abs())
        };
        at.ok_or(Error::OutOfRange { index, len })
    }

    fn walk_from_front(&self, steps: usize) -> Option<NonNull<Node<T>>> {
        let mut node = self.head?;
        for _ in 0..steps {
            // SAFETY: every node in the ring has a valid `next`.
            node = unsafe { node.as_ref().next };
        }
        Some(node)
    }

    fn walk_from_back(&self, steps: usize) -> Option<NonNull<Node<T>>> {
        let mut node = self.tail?;
        for _ in 0..steps {
            // SAFETY: every node in the ring has a valid `prev`.
            node = unsafe { node.as_ref().prev };
        }
        Some(node)
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        while self.len > len && self.pop_back().is_ok() {}
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use ring_list::List;
    /// let list: List<u32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Create a `List` of `n` copies of `value`.
    ///
    /// Returns [`Error::ZeroLength`] if `n` is 0; an empty list is built
    /// with [`List::new`] instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let list = List::with_copies(3, "z").unwrap();
    /// assert_eq!(list.to_string(), "(z, z, z)");
    /// assert_eq!(list.len(), 3);
    ///
    /// assert!(List::with_copies(0, "z").is_err());
    /// ```
    pub fn with_copies(n: usize, value: T) -> Result<Self>
    where
        T: Clone,
    {
        if n == 0 {
            return Err(Error::ZeroLength);
        }
        let mut list = List::new();
        for _ in 1..n {
            list.push_front(value.clone());
        }
        list.push_front(value);
        Ok(list)
    }

    /// Create a `List` by copying the elements in the half-open cursor range
    /// `start..end`, in order.
    ///
    /// `end` may be the null position from [`List::cursor_end`], in which case
    /// everything from `start` through the back element is copied. Returns
    /// [`Error::NullCursor`] if the walk from `start` runs off the back of the
    /// list before meeting `end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter(['a', 'b', 'c', 'd']);
    ///
    /// let middle = List::from_range(list.cursor(1).unwrap(), list.cursor(-1).unwrap()).unwrap();
    /// assert_eq!(middle.to_string(), "(b, c)");
    ///
    /// let whole = List::from_range(list.cursor_start(), list.cursor_end()).unwrap();
    /// assert_eq!(whole, list);
    /// ```
    pub fn from_range<'a>(start: Cursor<'a, T>, end: Cursor<'a, T>) -> Result<Self>
    where
        T: Clone + 'a,
    {
        let mut list = List::new();
        let mut cursor = start;
        while cursor != end {
            list.push_back(cursor.current()?.clone());
            cursor.move_next()?;
        }
        Ok(list)
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`. Clearing an empty list does
    /// nothing.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.front(), Ok(&1));
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert!(list.front().is_err());
    ///
    /// list.clear();
    /// assert!(list.is_empty());
    /// ```
    pub fn clear(&mut self) {
        let released = self.len;
        while self.pop_front().is_ok() {}
        if released > 0 {
            debug!(released, "list cleared");
        }
    }

    /// Provides a reference to the front element, or [`Error::Empty`] if
    /// the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::{Error, List};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), Err(Error::Empty));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Ok(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Result<&T> {
        self.cursor_start().current().map_err(|_| Error::Empty)
    }

    /// Provides a mutable reference to the front element, or [`Error::Empty`]
    /// if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_front(1);
    ///
    /// if let Ok(x) = list.front_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.front(), Ok(&5));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T> {
        // SAFETY: `head` is a valid node of the list whenever it is set.
        self.head
            .map(|node| unsafe { &mut (*node.as_ptr()).element })
            .ok_or(Error::Empty)
    }

    /// Provides a reference to the back element, or [`Error::Empty`] if
    /// the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::{Error, List};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), Err(Error::Empty));
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Ok(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Result<&T> {
        self.cursor_back().current().map_err(|_| Error::Empty)
    }

    /// Provides a mutable reference to the back element, or [`Error::Empty`]
    /// if the list is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T> {
        // SAFETY: `tail` is a valid node of the list whenever it is set.
        self.tail
            .map(|node| unsafe { &mut (*node.as_ptr()).element })
            .ok_or(Error::Empty)
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front(), Ok(&2));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Ok(&1));
    /// ```
    pub fn push_front(&mut self, elt: T) {
        self.cursor_start_mut().insert(elt);
    }

    /// Removes the first element and returns it, or [`Error::Empty`] if the
    /// list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::{Error, List};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), Err(Error::Empty));
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Ok(3));
    /// assert_eq!(list.pop_front(), Ok(1));
    /// assert_eq!(list.pop_front(), Err(Error::Empty));
    /// ```
    pub fn pop_front(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        self.cursor_start_mut().remove()
    }

    /// Appends an element to the back of a list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back(), Ok(&3));
    /// ```
    pub fn push_back(&mut self, elt: T) {
        self.cursor_end_mut().insert(elt);
    }

    /// Removes the last element from a list and returns it, or
    /// [`Error::Empty`] if it is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::{Error, List};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), Err(Error::Empty));
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Ok(3));
    /// ```
    pub fn pop_back(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        self.cursor_back_mut().remove()
    }

    /// Provides a reference to the element at a signed `index`.
    ///
    /// Non-negative indices count from the front (`0` is the first element),
    /// negative indices count from the back (`-1` is the last element, `-len`
    /// the first). Any other index gives [`Error::OutOfRange`].
    ///
    /// The list is walked from whichever end is nearer to the element, so at
    /// most *n* / 2 links are followed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([10, 20, 30]);
    /// assert_eq!(list.get(0), Ok(&10));
    /// assert_eq!(list.get(-1), Ok(&30));
    /// assert_eq!(list.get(-3), Ok(&10));
    /// assert!(list.get(3).is_err());
    /// assert!(list.get(-4).is_err());
    /// ```
    pub fn get(&self, index: isize) -> Result<&T> {
        let at = self.position(index)?;
        // `at < len` here, so `len - 1 - at` cannot underflow.
        let node = if at <= self.len / 2 {
            self.walk_from_front(at)
        } else {
            self.walk_from_back(self.len - 1 - at)
        };
        // SAFETY: the walk stays inside the ring of valid nodes.
        node.map(|node| unsafe { &(*node.as_ptr()).element })
            .ok_or(Error::OutOfRange {
                index,
                len: self.len,
            })
    }

    /// Provides a mutable reference to the element at a signed `index`,
    /// validated the same way as [`List::get`].
    ///
    /// Non-negative indices are walked from the front and negative indices
    /// from the back.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// *list.get_mut(-1).unwrap() *= 10;
    /// *list.get_mut(0).unwrap() *= 10;
    /// assert_eq!(list.to_string(), "(10, 2, 30)");
    /// ```
    pub fn get_mut(&mut self, index: isize) -> Result<&mut T> {
        let at = self.position(index)?;
        let node = if index >= 0 {
            self.walk_from_front(at)
        } else {
            self.walk_from_back(self.len - 1 - at)
        };
        // SAFETY: the walk stays inside the ring of valid nodes, and `self`
        // is borrowed mutably for the lifetime of the reference.
        node.map(|node| unsafe { &mut (*node.as_ptr()).element })
            .ok_or(Error::OutOfRange {
                index,
                len: self.len,
            })
    }

    /// Provides a cursor at the element with given signed index, validated the
    /// same way as [`List::get`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.cursor(1).unwrap().current(), Ok(&2));
    /// assert_eq!(list.cursor(-1).unwrap().index(), 2);
    /// assert!(list.cursor(3).is_err());
    /// ```
    pub fn cursor(&self, at: isize) -> Result<Cursor<'_, T>> {
        let at = self.position(at)?;
        let mut cursor = self.cursor_start();
        cursor.seek_to(at)?;
        Ok(cursor)
    }

    /// Provides a cursor at the front node.
    ///
    /// The cursor is at the null position if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let cursor = list.cursor_start();
    /// assert_eq!(cursor.current(), Ok(&1));
    /// ```
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.head, 0)
    }

    /// Provides a cursor at the back node.
    ///
    /// The cursor is at the null position if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let cursor = list.cursor_back();
    /// assert_eq!(cursor.current(), Ok(&3));
    /// assert_eq!(cursor.index(), 2);
    /// ```
    pub fn cursor_back(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.tail, self.len.saturating_sub(1))
    }

    /// Provides a cursor at the null position past the back node.
    ///
    /// This is the exclusive end of a forward walk: a cursor moved forward
    /// from the back node reaches it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let (mut cursor, end) = (list.cursor_start(), list.cursor_end());
    /// let mut visited = Vec::new();
    /// while cursor != end {
    ///     visited.push(*cursor.current().unwrap());
    ///     cursor.move_next().unwrap();
    /// }
    /// assert_eq!(visited, vec![1, 2, 3]);
    /// ```
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, None, self.len)
    }

    /// Provides a cursor with editing operations at the element with given
    /// signed index, validated the same way as [`List::get`].
    pub fn cursor_mut(&mut self, at: isize) -> Result<CursorMut<'_, T>> {
        let at = self.position(at)?;
        let mut cursor = self.cursor_start_mut();
        cursor.seek_to(at)?;
        Ok(cursor)
    }

    /// Provides a cursor with editing operations at the front node.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// if let Ok(x) = cursor.current_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.current(), Ok(&5));
    /// ```
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        let head = self.head;
        CursorMut::new(self, head, 0)
    }

    /// Provides a cursor with editing operations at the back node.
    pub fn cursor_back_mut(&mut self) -> CursorMut<'_, T> {
        let (tail, index) = (self.tail, self.len.saturating_sub(1));
        CursorMut::new(self, tail, index)
    }

    /// Provides a cursor with editing operations at the null position.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_end_mut();
    ///
    /// cursor.insert(4);
    /// assert!(cursor.is_null());
    /// assert_eq!(list.to_string(), "(1, 2, 3, 4)");
    /// ```
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        let len = self.len;
        CursorMut::new(self, None, len)
    }

    /// Provides a forward iterator.
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
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
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
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&10));
    /// assert_eq!(iter.next(), Some(&11));
    /// assert_eq!(iter.next(), Some(&12));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T> Index<isize> for List<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index` is out of range, see [`List::get`].
    fn index(&self, index: isize) -> &T {
        match self.get(index) {
            Ok(elt) => elt,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<isize> for List<T> {
    /// # Panics
    ///
    /// Panics if `index` is out of range, see [`List::get_mut`].
    fn index_mut(&mut self, index: isize) -> &mut T {
        match self.get_mut(index) {
            Ok(elt) => elt,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Create a detached node with given element.
    ///
    /// The links are dangling until the node is attached to a list.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        let node = Box::new(Node {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
            element,
        });
        NonNull::from(Box::leak(node))
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

#[cfg(any(test, debug_assertions))]
fn assert_adjacent<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    unsafe {
        assert_eq!(prev.as_ref().next, next);
        assert_eq!(next.as_ref().prev, prev);
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
impl<T> List<T> {
    /// Check the head/tail/len agreement and the ring closure in both
    /// directions.
    pub(crate) fn assert_ring(&self) {
        match (self.head, self.tail) {
            (None, None) => assert_eq!(self.len, 0, "an unlinked list must be empty"),
            (Some(head), Some(tail)) => unsafe {
                assert!(self.len > 0, "a linked list must not be empty");
                assert_eq!(tail.as_ref().next, head, "tail must link forward to head");
                assert_eq!(head.as_ref().prev, tail, "head must link backward to tail");
                if self.len == 1 {
                    assert_eq!(head, tail, "a single node is both head and tail");
                }
                let mut node = head;
                for _ in 0..self.len {
                    assert_adjacent(node, node.as_ref().next);
                    node = node.as_ref().next;
                }
                assert_eq!(node, head, "`len` forward hops must return to head");
                let mut node = tail;
                for _ in 0..self.len {
                    node = node.as_ref().prev;
                }
                assert_eq!(node, tail, "`len` backward hops must return to tail");
            },
            _ => panic!("head and tail must be both set or both unset"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use crate::test_util::trace_init;
    use crate::Error;
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::iter::FromIterator;

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        list.assert_ring();
        list.push_back(1);
        assert!(!list.is_empty());
        list.assert_ring();
        assert_eq!(list.pop_back(), Ok(1));
        assert!(list.is_empty());
        list.assert_ring();
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_back(DropChecker::new(2, &dropped));
        list.push_back(DropChecker::new(3, &dropped));
        list.push_front(DropChecker::new(1, &dropped));
        list.push_back(DropChecker::new(4, &dropped));
        drop(list.pop_back());
        assert_eq!(dropped.borrow().as_slice(), &[4]);
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[4, 1, 2, 3]);
    }

    #[test]
    fn list_push_and_pop() {
        let _trace = trace_init();
        let mut list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        assert_eq!(list.front(), Err(Error::Empty));
        assert_eq!(list.back(), Err(Error::Empty));
        assert_eq!(list.pop_front(), Err(Error::Empty));
        assert_eq!(list.pop_back(), Err(Error::Empty));

        list.push_back(1);
        assert_eq!(list.back(), Ok(&1));
        assert_eq!(list.front(), Ok(&1));
        list.assert_ring();
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.pop_back(), Err(Error::Empty));
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        list.assert_ring();
        assert_eq!(list.back(), Ok(&3));
        assert_eq!(list.front(), Ok(&2));
        assert_eq!(list.pop_front(), Ok(2));
        list.assert_ring();
        assert_eq!(list.pop_back(), Ok(3));
        list.assert_ring();

        assert_eq!(list.front(), Ok(&1));
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.front(), Err(Error::Empty));
        assert_eq!(list.back(), Err(Error::Empty));
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn list_push_order() {
        let mut list = List::new();
        list.push_front("a");
        list.push_front("b");
        list.push_back("c");
        assert_eq!(list.to_string(), "(b, a, c)");
        list.assert_ring();
    }

    #[test]
    fn list_pop_single() {
        let mut list = List::new();
        list.push_back("x");
        assert_eq!(list.pop_front(), Ok("x"));
        assert!(list.is_empty());
        list.assert_ring();
        assert_eq!(list.pop_front(), Err(Error::Empty));
    }

    #[test]
    fn list_front_and_back_mut() {
        let mut list = List::from_iter([1, 2, 3]);
        *list.front_mut().unwrap() = 10;
        *list.back_mut().unwrap() = 30;
        assert_eq!(list.to_string(), "(10, 2, 30)");

        let mut empty = List::<i32>::new();
        assert_eq!(empty.front_mut(), Err(Error::Empty));
        assert_eq!(empty.back_mut(), Err(Error::Empty));
    }

    #[test]
    fn list_with_copies() {
        let list = List::with_copies(3, String::from("z")).unwrap();
        assert_eq!(list.to_string(), "(z, z, z)");
        assert_eq!(list.len(), 3);
        list.assert_ring();

        let list = List::with_copies(1, 7).unwrap();
        assert_eq!(list.front(), list.back());
        list.assert_ring();

        let err = List::with_copies(0, "z").unwrap_err();
        assert_eq!(err, Error::ZeroLength);
        assert!(err.is_out_of_range());
    }

    #[test]
    fn list_from_range() {
        let list = List::from_iter(0..6);

        let all = List::from_range(list.cursor_start(), list.cursor_end()).unwrap();
        assert_eq!(all, list);

        let inner = List::from_range(list.cursor(1).unwrap(), list.cursor(4).unwrap()).unwrap();
        assert_eq!(inner.to_string(), "(1, 2, 3)");
        inner.assert_ring();

        let tail = List::from_range(list.cursor(-2).unwrap(), list.cursor_end()).unwrap();
        assert_eq!(tail.to_string(), "(4, 5)");

        let empty = List::from_range(list.cursor(2).unwrap(), list.cursor(2).unwrap()).unwrap();
        assert!(empty.is_empty());

        let nothing = List::<i32>::new();
        let empty = List::from_range(nothing.cursor_start(), nothing.cursor_end()).unwrap();
        assert!(empty.is_empty());

        // `end` before `start`: the walk runs off the back of the list.
        let err = List::from_range(list.cursor(4).unwrap(), list.cursor(1).unwrap()).unwrap_err();
        assert_eq!(err, Error::NullCursor);
    }

    #[test]
    fn list_clear() {
        let _trace = trace_init();
        let mut list = List::from_iter(0..4);
        list.clear();
        assert!(list.is_empty());
        list.assert_ring();

        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        list.push_back(5);
        assert_eq!(list.to_string(), "(5)");
    }

    #[test]
    fn list_index_boundaries() {
        let list = List::from_iter(['a', 'b', 'c', 'd', 'e']);
        let len = list.len() as isize;

        assert_eq!(list[0], 'a');
        assert_eq!(list[-len], 'a');
        assert_eq!(list[len - 1], 'e');
        assert_eq!(list[-1], 'e');
        assert_eq!(list[2], 'c');
        assert_eq!(list[-3], 'c');

        assert_eq!(list.get(len), Err(Error::OutOfRange { index: len, len: 5 }));
        assert_eq!(
            list.get(-(len + 1)),
            Err(Error::OutOfRange {
                index: -(len + 1),
                len: 5
            })
        );
        assert!(List::<char>::new().get(0).is_err());
        assert!(List::<char>::new().get(-1).is_err());
    }

    #[test]
    fn list_index_mut() {
        let mut list = List::from_iter(0..5);
        list[1] = 10;
        list[-2] = 30;
        assert_eq!(list.to_string(), "(0, 10, 2, 30, 4)");
        assert_eq!(list.get_mut(5), Err(Error::OutOfRange { index: 5, len: 5 }));
        assert_eq!(
            list.get_mut(-6),
            Err(Error::OutOfRange { index: -6, len: 5 })
        );
    }

    #[test]
    #[should_panic(expected = "index 3 is out of range for a list of length 3")]
    fn list_index_panics() {
        let list = List::from_iter([1, 2, 3]);
        let _value = list[3];
    }

    #[test]
    fn list_cursor_at() {
        let mut list = List::from_iter(0..7);
        for at in 0..7_isize {
            assert_eq!(list.cursor(at).unwrap().current(), Ok(&(at as i32)));
            assert_eq!(list.cursor(at - 7).unwrap().index(), at as usize);
        }
        assert!(list.cursor(7).is_err());
        assert!(list.cursor(-8).is_err());

        *list.cursor_mut(-1).unwrap().current_mut().unwrap() = 60;
        assert_eq!(list.back(), Ok(&60));
    }

    #[derive(Debug, Clone)]
    enum Op {
        PushFront(i32),
        PushBack(i32),
        PopFront,
        PopBack,
        Clear,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => any::<i32>().prop_map(Op::PushFront),
            4 => any::<i32>().prop_map(Op::PushBack),
            3 => Just(Op::PopFront),
            3 => Just(Op::PopBack),
            1 => Just(Op::Clear),
        ]
    }

    proptest! {
        #[test]
        fn fuzz_list_against_deque(ops in proptest::collection::vec(op(), 0..64)) {
            let mut list = List::new();
            let mut reference = VecDeque::new();
            for op in ops {
                match op {
                    Op::PushFront(x) => {
                        list.push_front(x);
                        reference.push_front(x);
                    }
                    Op::PushBack(x) => {
                        list.push_back(x);
                        reference.push_back(x);
                    }
                    Op::PopFront => {
                        prop_assert_eq!(list.pop_front().ok(), reference.pop_front());
                    }
                    Op::PopBack => {
                        prop_assert_eq!(list.pop_back().ok(), reference.pop_back());
                    }
                    Op::Clear => {
                        list.clear();
                        reference.clear();
                    }
                }
                list.assert_ring();
                prop_assert_eq!(list.len(), reference.len());
                prop_assert_eq!(list.front().ok(), reference.front());
                prop_assert_eq!(list.back().ok(), reference.back());
            }
            prop_assert!(list.iter().eq(reference.iter()));
        }

        #[test]
        fn signed_indices_agree(items in proptest::collection::vec(any::<u8>(), 1..48)) {
            let list = List::from_iter(items.iter().copied());
            let len = list.len() as isize;
            for i in 0..len {
                prop_assert_eq!(list.get(i), list.get(i - len));
                prop_assert_eq!(list.get(i), Ok(&items[i as usize]));
            }
            prop_assert!(list.get(len).unwrap_err().is_out_of_range());
            prop_assert!(list.get(-(len + 1)).unwrap_err().is_out_of_range());
        }
    }
}
