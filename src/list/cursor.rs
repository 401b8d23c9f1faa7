use crate::error::{Error, Result};
use crate::list::{List, Node};
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Formatter;
use std::ptr::NonNull;

/// A cursor over a `List`.
///
/// A `Cursor` is like an iterator, except that it can freely seek back-and-forth.
///
/// In a list with length *n*, there are *n* + 1 valid locations for the cursor:
/// the nodes indexed by 0, 1, ..., *n* - 1, and the null position indexed by *n*.
/// Moving forward from the back node, or backward from the front node, reaches
/// the null position. Moving or reading at the null position is an error.
///
/// The cyclic moves follow the ring instead, from the back node to the front
/// node and the other way round, so they never reach the null position.
///
/// # Examples
///
/// Here is a simple example showing how the cursors work. (The null position
/// is denoted by `#`).
/// ```
/// use ring_list::List;
/// use std::iter::FromIterator;
///
/// // Create a list: [ A B C D #]
/// let list = List::from_iter(['A', 'B', 'C', 'D']);
///
/// // Create a cursor at start: [|A B C D #] (index = 0)
/// let mut cursor = list.cursor_start();
/// assert_eq!(cursor.current(), Ok(&'A'));
///
/// // Move cursor forward: [ A|B C D #] (index = 1)
/// assert!(cursor.move_next().is_ok());
/// assert_eq!(cursor.current(), Ok(&'B'));
///
/// // Create a cursor at the back: [ A B C|D #] (index = 3)
/// let mut cursor = list.cursor_back();
/// assert_eq!(cursor.current(), Ok(&'D'));
///
/// // Move cursor forward, off the back: [ A B C D|#] (index = 4)
/// assert!(cursor.move_next().is_ok());
/// assert!(cursor.current().is_err());
/// assert!(cursor.move_next().is_err());
///
/// // Move cursor forward, cyclically: [|A B C D #] (index = 0)
/// let mut cursor = list.cursor_back();
/// assert!(cursor.move_next_cyclic().is_ok());
/// assert_eq!(cursor.current(), Ok(&'A'));
/// ```
pub struct Cursor<'a, T: 'a> {
    index: usize,
    pub(crate) current: Option<NonNull<Node<T>>>,
    pub(crate) list: &'a List<T>,
}

impl<'a, T: 'a> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: 'a> Copy for Cursor<'a, T> {}

/// Compare cursors by their position.
///
/// Cursors are equal if they are at the same node, or if both are at the
/// null position.
///
/// # Examples
/// ```
/// use ring_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter([1, 2, 3]);
/// let cursor1 = list.cursor_start();
/// let mut cursor2 = cursor1;
/// // The same list, and the same position.
/// assert_eq!(cursor1, cursor2);
///
/// cursor2.move_next().unwrap();
/// // The same list, but different positions.
/// assert_ne!(cursor1, cursor2);
///
/// let another_list = list.clone();
/// let cursor3 = another_list.cursor_start();
/// // Different list, different nodes.
/// assert_ne!(cursor1, cursor3);
/// ```
impl<'a, T: 'a> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<'a, T: 'a> Eq for Cursor<'a, T> {}

/// Compare cursors by their index.
///
/// Only cursors belong to the same list can compare, so it is `PartialOrd`
/// but not `Ord`.
///
/// # Examples
/// ```
/// use ring_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter([1, 2, 3]);
/// let cursor1 = list.cursor_start();
/// let mut cursor2 = cursor1;
/// cursor2.move_next().unwrap();
/// // They belong to the same list, can compare.
/// assert!(cursor1 < cursor2);
/// assert!(cursor2 < list.cursor_end());
///
/// let another_list = list.clone();
/// let cursor3 = another_list.cursor_back();
/// // They belong to different lists, cannot compare.
/// assert_eq!(cursor1.partial_cmp(&cursor3), None);
/// ```
impl<'a, T: 'a> PartialOrd for Cursor<'a, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        if !self.same_list_with(other) {
            return None;
        }
        Some(self.index().cmp(&other.index()))
    }
}

/// A cursor over a `List` with editing operations.
///
/// A `CursorMut` is like an iterator, except that it can freely seek back-and-forth,
/// and can safely mutate the list during iteration. This is because the lifetime of
/// its yielded references is tied to its own lifetime, instead of just the underlying
/// list. This means cursors cannot yield multiple elements at once.
///
/// Removing a node through [`CursorMut::remove`] moves the cursor on to the
/// following position, so no cursor is ever left at a freed node.
///
/// # Examples
///
/// ```compile_fail
/// use ring_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut cursor = list.cursor_start_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", cursor.current());
/// ```
pub struct CursorMut<'a, T: 'a> {
    index: usize,
    pub(crate) current: Option<NonNull<Node<T>>>,
    pub(crate) list: &'a mut List<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        // Private methods
        impl<'a, T: 'a> $CURSOR<'a, T> {
            pub(crate) fn is_front_node(&self) -> bool {
                self.current.is_some() && self.current == self.list.head
            }
            pub(crate) fn is_back_node(&self) -> bool {
                self.current.is_some() && self.current == self.list.tail
            }
            fn current_node(&self) -> Result<NonNull<Node<T>>> {
                self.current.ok_or(Error::NullCursor)
            }

            /// Move forward the cursor by given steps, without checking whether
            /// it will pass the back node.
            ///
            /// It is unsafe because if the moving wraps around the ring, the
            /// index will be invalid.
            unsafe fn seek_forward_fast(&mut self, steps: usize) {
                if let Some(mut node) = self.current {
                    for _ in 0..steps {
                        node = node.as_ref().next;
                    }
                    self.current = Some(node);
                    self.index += steps;
                }
            }

            /// Move backward the cursor by given steps, without checking whether
            /// it will pass the front node.
            ///
            /// It is unsafe because if the moving wraps around the ring, the
            /// index will be invalid.
            unsafe fn seek_backward_fast(&mut self, steps: usize) {
                if let Some(mut node) = self.current {
                    for _ in 0..steps {
                        node = node.as_ref().prev;
                    }
                    self.current = Some(node);
                    self.index -= steps;
                }
            }
        }

        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// Return the index of the cursor, which is `len` at the null position.
            pub fn index(&self) -> usize {
                self.index
            }

            /// Returns the length of the `List`. See [`List::len`].
            pub fn len(&self) -> usize {
                self.list.len()
            }

            /// Returns `true` if the `List` is empty. See [`List::is_empty`].
            pub fn is_empty(&self) -> bool {
                self.list.is_empty()
            }

            /// Returns `true` if the cursor is at the null position.
            pub fn is_null(&self) -> bool {
                self.current.is_none()
            }

            /// Move the cursor to the next node, or to the null position if it
            /// is at the back node. Returns [`Error::NullCursor`] if the cursor
            /// is already at the null position.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use ring_list::{Error, List};
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2]);
            /// let mut cursor = list.cursor_start();
            ///
            /// assert_eq!(cursor.move_next(), Ok(()));
            /// assert_eq!(cursor.current(), Ok(&2));
            /// assert_eq!(cursor.move_next(), Ok(()));
            /// assert!(cursor.is_null());
            /// assert_eq!(cursor.move_next(), Err(Error::NullCursor));
            /// ```
            pub fn move_next(&mut self) -> Result<()> {
                if self.is_back_node() {
                    self.move_to_end();
                    return Ok(());
                }
                let node = self.current_node()?;
                // SAFETY: `node` is in the ring, so its `next` is valid.
                self.current = Some(unsafe { node.as_ref().next });
                self.index += 1;
                Ok(())
            }

            /// Move the cursor to the previous node, or to the null position if
            /// it is at the front node. Returns [`Error::NullCursor`] if the
            /// cursor is already at the null position.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use ring_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2]);
            /// let mut cursor = list.cursor_back();
            ///
            /// assert!(cursor.move_prev().is_ok());
            /// assert_eq!(cursor.current(), Ok(&1));
            /// assert!(cursor.move_prev().is_ok());
            /// assert!(cursor.is_null());
            /// assert!(cursor.move_prev().is_err());
            /// ```
            pub fn move_prev(&mut self) -> Result<()> {
                if self.is_front_node() {
                    self.move_to_end();
                    return Ok(());
                }
                let node = self.current_node()?;
                // SAFETY: `node` is in the ring, so its `prev` is valid.
                self.current = Some(unsafe { node.as_ref().prev });
                self.index -= 1;
                Ok(())
            }

            /// Move the cursor to the next node along the ring, where moving
            /// from the back node to the front node is allowed.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use ring_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_back();
            ///
            /// cursor.move_next_cyclic().unwrap();
            /// assert_eq!(cursor.current(), Ok(&1));
            /// assert_eq!(cursor.index(), 0);
            /// ```
            pub fn move_next_cyclic(&mut self) -> Result<()> {
                let node = self.current_node()?;
                self.index = if self.is_back_node() { 0 } else { self.index + 1 };
                // SAFETY: `node` is in the ring, so its `next` is valid.
                self.current = Some(unsafe { node.as_ref().next });
                Ok(())
            }

            /// Move the cursor to the previous node along the ring, where moving
            /// from the front node to the back node is allowed.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use ring_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// cursor.move_prev_cyclic().unwrap();
            /// assert_eq!(cursor.current(), Ok(&3));
            /// assert_eq!(cursor.index(), 2);
            /// ```
            pub fn move_prev_cyclic(&mut self) -> Result<()> {
                let node = self.current_node()?;
                self.index = if self.is_front_node() {
                    self.list.len() - 1
                } else {
                    self.index - 1
                };
                // SAFETY: `node` is in the ring, so its `prev` is valid.
                self.current = Some(unsafe { node.as_ref().prev });
                Ok(())
            }

            /// Move the cursor to the given position `target`, where `target == len`
            /// is the null position, or return an error when `target > len`.
            ///
            /// The walk starts from whichever of the current node, the front node
            /// and the back node is the nearest to `target`.
            ///
            /// If an error occurs, the cursor will stay put.
            ///
            /// This operation should compute in *O*(*n*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use ring_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// // Move cursor to a valid place (at the third node)
            /// assert!(cursor.seek_to(2).is_ok());
            /// assert_eq!(cursor.current(), Ok(&3));
            ///
            /// // Forbid to move to a invalid place
            /// assert!(cursor.seek_to(5).is_err());
            ///
            /// // The cursor is still at the third node
            /// assert_eq!(cursor.current(), Ok(&3));
            /// ```
            pub fn seek_to(&mut self, target: usize) -> Result<()> {
                let len = self.list.len();
                if target > len {
                    let index = isize::try_from(target).unwrap_or(isize::MAX);
                    return Err(Error::OutOfRange { index, len });
                }
                if target == self.index {
                    return Ok(());
                }
                if target == len {
                    self.move_to_end();
                    return Ok(());
                }
                // `target < len` from here on.
                let from_front = target;
                let from_back = len - 1 - target;
                let from_current = self
                    .current
                    .map(|_| if target > self.index { target - self.index } else { self.index - target });
                unsafe {
                    match from_current {
                        // current=c, target=t: [   c-->t   #] or [   t<--c   #]
                        Some(steps) if steps <= from_front && steps <= from_back => {
                            if target > self.index {
                                self.seek_forward_fast(steps);
                            } else {
                                self.seek_backward_fast(steps);
                            }
                        }
                        // target is near the front: [-->t      c #]
                        _ if from_front <= from_back => {
                            self.move_to_start();
                            self.seek_forward_fast(from_front);
                        }
                        // target is near the back: [ c      t<--#]
                        _ => {
                            self.move_to_back();
                            self.seek_backward_fast(from_back);
                        }
                    }
                }
                Ok(())
            }

            /// Set the cursor to the front node, or to the null position if
            /// the list is empty.
            ///
            /// This operation should compute in *O*(*1*) time.
            #[inline]
            pub fn move_to_start(&mut self) {
                self.index = 0;
                self.current = self.list.head;
            }

            /// Set the cursor to the back node, or to the null position if
            /// the list is empty.
            ///
            /// This operation should compute in *O*(*1*) time.
            #[inline]
            pub fn move_to_back(&mut self) {
                self.index = self.list.len().saturating_sub(1);
                self.current = self.list.tail;
            }

            /// Set the cursor to the null position.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use ring_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            /// cursor.move_to_end();
            /// assert!(cursor.is_null());
            /// assert_eq!(cursor.index(), 3);
            /// ```
            #[inline]
            pub fn move_to_end(&mut self) {
                self.index = self.list.len();
                self.current = None;
            }
        }

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                let current = self.current.map(|node| unsafe { &(*node.as_ptr()).element });
                f.debug_struct(stringify!($CURSOR))
                    .field("list", &self.list)
                    .field("current", &current)
                    .field("index", &self.index)
                    .finish()
            }
        }
    };
}

impl_cursor!(CursorMut);
impl_cursor!(Cursor);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a List<T>, current: Option<NonNull<Node<T>>>, index: usize) -> Self {
        Self {
            index,
            current,
            list,
        }
    }

    fn same_list_with(&self, other: &Self) -> bool {
        std::ptr::eq(self.list, other.list)
    }

    /// Return an immutable reference of the element at the cursor, or
    /// [`Error::NullCursor`] at the null position.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.cursor_start().current(), Ok(&1));
    /// assert_eq!(list.cursor_back().current(), Ok(&3));
    /// assert!(list.cursor_end().current().is_err());
    /// ```
    pub fn current(&self) -> Result<&'a T> {
        // SAFETY: a node is valid while the list is borrowed by the cursor.
        self.current
            .map(|node| unsafe { &(*node.as_ptr()).element })
            .ok_or(Error::NullCursor)
    }

    /// Move the cursor forward like [`Cursor::move_next`], and return the
    /// cursor as it was before moving.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter(['a', 'b']);
    /// let mut cursor = list.cursor_start();
    ///
    /// let before = cursor.fetch_next().unwrap();
    /// assert_eq!(before.current(), Ok(&'a'));
    /// assert_eq!(cursor.current(), Ok(&'b'));
    /// ```
    pub fn fetch_next(&mut self) -> Result<Self> {
        let before = *self;
        self.move_next()?;
        Ok(before)
    }

    /// Move the cursor backward like [`Cursor::move_prev`], and return the
    /// cursor as it was before moving.
    pub fn fetch_prev(&mut self) -> Result<Self> {
        let before = *self;
        self.move_prev()?;
        Ok(before)
    }

    /// The list the cursor is walking over.
    pub fn list(&self) -> &'a List<T> {
        self.list
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(
        list: &'a mut List<T>,
        current: Option<NonNull<Node<T>>>,
        index: usize,
    ) -> Self {
        Self {
            index,
            current,
            list,
        }
    }
}

// Methods that does not change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Return an immutable reference of the element at the cursor, or
    /// [`Error::NullCursor`] at the null position.
    pub fn current(&self) -> Result<&T> {
        // SAFETY: a node is valid while the list is borrowed by the cursor.
        self.current
            .map(|node| unsafe { &(*node.as_ptr()).element })
            .ok_or(Error::NullCursor)
    }

    /// Return a mutable reference of the element at the cursor, or
    /// [`Error::NullCursor`] at the null position.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// // Create a cursor and mutate the element in the current node.
    /// let mut cursor = list.cursor_mut(0).unwrap();
    /// *cursor.current_mut().unwrap() *= 5;
    /// assert_eq!(cursor.current(), Ok(&5));
    ///
    /// // Cannot mutate at the null position.
    /// assert!(list.cursor_end_mut().current_mut().is_err());
    /// ```
    pub fn current_mut(&mut self) -> Result<&mut T> {
        // SAFETY: a node is valid while the list is borrowed by the cursor, and
        // the returned reference borrows the cursor mutably.
        self.current
            .map(|node| unsafe { &mut (*node.as_ptr()).element })
            .ok_or(Error::NullCursor)
    }

    /// Re-borrow the mutable cursor as a short-lived immutable one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.list, self.current, self.index)
    }

    /// Convert the mutable cursor to an immutable one.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor::new(self.list, self.current, self.index)
    }

    /// Temporarily view the list via an immutable reference.
    ///
    /// This is useful where the list is not able to read while a
    /// mutable cursor is created and being used. This method
    /// provides an ability of temporarily reading the list.
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
    /// // Temporarily view the list
    /// assert_eq!(cursor.view().back(), Ok(&3));
    ///
    /// cursor.insert(4);
    /// assert_eq!(Vec::from_iter(list), vec![4, 1, 2, 3]);
    /// ```
    pub fn view(&self) -> &List<T> {
        self.list
    }
}

// Methods that might change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Add an element first in the list.
    ///
    /// It is the same as [`List::push_front`], except it avoids
    /// another mutable borrow of the list while the mutable cursor
    /// is being used.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_back_mut();
    ///
    /// cursor.push_front(0);
    /// assert_eq!(cursor.index(), 3);
    /// assert_eq!(cursor.current(), Ok(&3));
    ///
    /// assert_eq!(Vec::from_iter(list), vec![0, 1, 2, 3]);
    /// ```
    pub fn push_front(&mut self, item: T) {
        let node = Node::new_detached(item);
        let front = self.list.head;
        // SAFETY: the front node belongs to the list.
        unsafe { self.list.attach_node(node, front) };
        self.index += 1;
    }

    /// Remove the first element and return it, or [`Error::Empty`] if the
    /// list is empty. A cursor at the front node moves to the new front node.
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
    /// cursor.insert(4); // becomes [1, 2, 3, 4], at the null position
    /// assert_eq!(cursor.pop_front(), Ok(1)); // becomes [2, 3, 4]
    /// assert_eq!(cursor.index(), 3);
    /// assert!(cursor.is_null());
    ///
    /// assert_eq!(Vec::from_iter(list), vec![2, 3, 4]);
    /// ```
    pub fn pop_front(&mut self) -> Result<T> {
        let front = self.list.head.ok_or(Error::Empty)?;
        let is_front = self.is_front_node();
        // SAFETY: `front` is a valid node in the list.
        let node = unsafe { self.list.detach_node(front) };
        if is_front {
            self.current = self.list.head;
        } else {
            self.index -= 1;
        }
        Ok(node.into_element())
    }

    /// Append an element to the back of a list.
    ///
    /// It is the same as [`List::push_back`], except it avoids
    /// another mutable borrow of the list while the mutable cursor
    /// is being used.
    pub fn push_back(&mut self, item: T) {
        let node = Node::new_detached(item);
        // SAFETY: `None` attaches after the back node.
        unsafe { self.list.attach_node(node, None) };
        if self.is_null() {
            self.index += 1;
        }
    }

    /// Remove the last element and return it, or [`Error::Empty`] if the
    /// list is empty. A cursor at the back node moves to the null position.
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
    /// cursor.insert(0);
    /// assert_eq!(cursor.pop_back(), Ok(3));
    /// assert_eq!(cursor.current(), Ok(&1));
    ///
    /// assert_eq!(Vec::from_iter(list), vec![0, 1, 2]);
    /// ```
    pub fn pop_back(&mut self) -> Result<T> {
        let back = self.list.tail.ok_or(Error::Empty)?;
        let was_null = self.is_null();
        let is_back = self.is_back_node();
        // SAFETY: `back` is a valid node in the list.
        let node = unsafe { self.list.detach_node(back) };
        if is_back || was_null {
            self.move_to_end();
        }
        Ok(node.into_element())
    }

    /// Add an element before the cursor position; at the null position the
    /// element is appended to the back of the list.
    ///
    /// After insertion, the cursor stays put but its `index` becomes
    /// `index + 1`.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_mut(1).unwrap();
    ///
    /// cursor.insert(4); // becomes [1, 4, 2, 3]
    /// assert_eq!(cursor.index(), 2);
    /// assert_eq!(cursor.current(), Ok(&2));
    ///
    /// cursor.move_to_end();
    /// cursor.insert(5); // becomes [1, 4, 2, 3, 5]
    /// assert_eq!(cursor.index(), 5);
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 4, 2, 3, 5]);
    /// ```
    pub fn insert(&mut self, item: T) {
        let node = Node::new_detached(item);
        // SAFETY: `self.current` is a valid node in the list, or `None`.
        unsafe { self.list.attach_node(node, self.current) };
        self.index += 1;
    }

    /// Remove the element at the cursor and return it, or return
    /// [`Error::NullCursor`] if the cursor is at the null position. After
    /// removal, the cursor is moved to the next node, or to the null
    /// position if the back node was removed.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..10);
    /// let mut cursor = list.cursor_mut(5).unwrap();
    ///
    /// assert_eq!(cursor.remove(), Ok(5)); // becomes [0, 1, 2, 3, 4, 6, 7, 8, 9]
    /// assert_eq!(cursor.index(), 5);
    /// assert_eq!(cursor.current(), Ok(&6));
    ///
    /// cursor.move_to_back();
    /// assert_eq!(cursor.remove(), Ok(9)); // becomes [0, 1, 2, 3, 4, 6, 7, 8]
    /// assert!(cursor.is_null());
    /// assert_eq!(cursor.index(), 8);
    /// assert!(cursor.remove().is_err());
    ///
    /// assert_eq!(Vec::from_iter(list), vec![0, 1, 2, 3, 4, 6, 7, 8]);
    /// ```
    pub fn remove(&mut self) -> Result<T> {
        let current = self.current_node()?;
        let is_back = self.is_back_node();
        // SAFETY: `current` is a valid node in the list, and its `next` is read
        // before the node is freed.
        let next = unsafe { current.as_ref().next };
        let node = unsafe { self.list.detach_node(current) };
        if is_back {
            self.move_to_end();
        } else {
            self.current = Some(next);
        }
        Ok(node.into_element())
    }
}

/// `CursorIter` provides an cursor-like iterator that goes around the ring
/// endlessly, starting at the cursor.
///
/// A cursor at the null position yields nothing.
///
/// If you are looking for container-like iterators,
/// see [`Iter`](crate::Iter) and [`IterMut`](crate::IterMut) for details.
///
/// # Examples
///
/// ```
/// use ring_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter([1, 2, 3]);
/// // Create a cursor iterator
/// let mut cursor_iter = list.cursor(1).unwrap().into_iter();
/// assert_eq!(cursor_iter.next(), Some(&2));
/// assert_eq!(cursor_iter.next(), Some(&3));
/// assert_eq!(cursor_iter.next(), Some(&1)); // Cyclic
/// assert_eq!(cursor_iter.next(), Some(&2));
///
/// // Convert back to a cursor
/// let cursor = cursor_iter.into_cursor();
/// assert_eq!(cursor.current(), Ok(&3));
/// ```
pub struct CursorIter<'a, T: 'a> {
    pub(crate) cursor: Cursor<'a, T>,
}

/// `CursorBackIter` is largely the same as [`CursorIter`],
/// except that the cursor is moving in the opposite direction.
///
/// # Examples
///
/// ```
/// use ring_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter([1, 2, 3]);
/// // Create a cursor back iterator
/// let mut cursor_iter = list.cursor_start().into_iter().rev();
/// assert_eq!(cursor_iter.next(), Some(&1));
/// assert_eq!(cursor_iter.next(), Some(&3)); // Cyclic
/// assert_eq!(cursor_iter.next(), Some(&2));
/// assert_eq!(cursor_iter.next(), Some(&1));
/// ```
pub struct CursorBackIter<'a, T: 'a> {
    pub(crate) cursor: Cursor<'a, T>,
}

impl<'a, T: 'a> CursorIter<'a, T> {
    pub fn into_cursor(self) -> Cursor<'a, T> {
        self.cursor
    }
    pub fn rev(self) -> CursorBackIter<'a, T> {
        CursorBackIter {
            cursor: self.cursor,
        }
    }
    pub fn peek(&self) -> Option<&'a T> {
        self.cursor.current().ok()
    }
}

impl<'a, T: 'a> CursorBackIter<'a, T> {
    pub fn into_cursor(self) -> Cursor<'a, T> {
        self.cursor
    }
    pub fn rev(self) -> CursorIter<'a, T> {
        CursorIter {
            cursor: self.cursor,
        }
    }
    pub fn peek(&self) -> Option<&'a T> {
        self.cursor.current().ok()
    }
}

impl<'a, T: 'a> From<CursorIter<'a, T>> for Cursor<'a, T> {
    fn from(cursor_iter: CursorIter<'a, T>) -> Self {
        cursor_iter.into_cursor()
    }
}

impl<'a, T: 'a> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        cursor.into_cursor()
    }
}

unsafe impl<T: Sync> Send for Cursor<'_, T> {}

unsafe impl<T: Sync> Sync for Cursor<'_, T> {}

unsafe impl<T: Send> Send for CursorMut<'_, T> {}

unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}

unsafe impl<T: Sync> Send for CursorIter<'_, T> {}

unsafe impl<T: Sync> Sync for CursorIter<'_, T> {}

unsafe impl<T: Sync> Send for CursorBackIter<'_, T> {}

unsafe impl<T: Sync> Sync for CursorBackIter<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::test_util::trace_init;
    use crate::{Error, List};
    use std::iter::FromIterator;

    #[test]
    fn cursor_linear_walk() {
        let list = List::from_iter(0..4);
        let mut cursor = list.cursor_start();
        for i in 0..4 {
            assert_eq!(cursor.index(), i);
            assert_eq!(cursor.current(), Ok(&(i as i32)));
            cursor.move_next().unwrap();
        }
        assert!(cursor.is_null());
        assert_eq!(cursor, list.cursor_end());
        assert_eq!(cursor.index(), 4);
        assert_eq!(cursor.current(), Err(Error::NullCursor));
        assert_eq!(cursor.move_next(), Err(Error::NullCursor));
        assert_eq!(cursor.move_prev(), Err(Error::NullCursor));

        let mut cursor = list.cursor_back();
        for i in (0..4).rev() {
            assert_eq!(cursor.index(), i);
            assert_eq!(cursor.current(), Ok(&(i as i32)));
            cursor.move_prev().unwrap();
        }
        assert!(cursor.is_null());
    }

    #[test]
    fn cursor_cyclic_walk() {
        let list = List::from_iter(0..3);
        let start = list.cursor_start();
        let mut cursor = start;
        for _ in 0..3 {
            cursor.move_next_cyclic().unwrap();
        }
        assert_eq!(cursor, start);
        assert_eq!(cursor.index(), 0);

        for _ in 0..3 {
            cursor.move_prev_cyclic().unwrap();
        }
        assert_eq!(cursor, start);

        let single = List::from_iter(Some('x'));
        let mut cursor = single.cursor_start();
        cursor.move_next_cyclic().unwrap();
        assert_eq!(cursor, single.cursor_back());
        cursor.move_prev_cyclic().unwrap();
        assert_eq!(cursor.current(), Ok(&'x'));

        let mut null = list.cursor_end();
        assert_eq!(null.move_next_cyclic(), Err(Error::NullCursor));
        assert_eq!(null.move_prev_cyclic(), Err(Error::NullCursor));
    }

    #[test]
    fn cursor_fetch() {
        let list = List::from_iter(['a', 'b', 'c']);
        let mut cursor = list.cursor_back();
        let before = cursor.fetch_next().unwrap();
        assert_eq!(before.current(), Ok(&'c'));
        assert!(cursor.is_null());
        assert_eq!(cursor.fetch_next(), Err(Error::NullCursor));

        let mut cursor = list.cursor(1).unwrap();
        let before = cursor.fetch_prev().unwrap();
        assert_eq!(before.current(), Ok(&'b'));
        assert_eq!(cursor.current(), Ok(&'a'));
    }

    #[test]
    fn cursor_empty_list() {
        let list = List::<i32>::new();
        assert!(list.cursor_start().is_null());
        assert!(list.cursor_back().is_null());
        assert_eq!(list.cursor_start(), list.cursor_end());
        assert_eq!(list.cursor_back().index(), 0);
        assert!(list.cursor(0).is_err());
    }

    #[test]
    fn cursor_seek() {
        let list = List::from_iter(0..9);
        let mut cursor = list.cursor_start();
        for &target in &[8, 3, 5, 0, 7, 9, 4, 4, 1] {
            cursor.seek_to(target).unwrap();
            assert_eq!(cursor.index(), target);
            if target < 9 {
                assert_eq!(cursor.current(), Ok(&(target as i32)));
            } else {
                assert!(cursor.is_null());
            }
        }
        assert_eq!(
            cursor.seek_to(10),
            Err(Error::OutOfRange { index: 10, len: 9 })
        );
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn cursor_mut_insert_and_remove() {
        let _trace = trace_init();
        let mut list = List::from_iter(0..5);
        {
            let mut cursor = list.cursor_start_mut();
            cursor.insert(-1);
            assert_eq!(cursor.index(), 1);
            assert_eq!(cursor.current(), Ok(&0));
            assert_eq!(cursor.view().front(), Ok(&-1));

            assert_eq!(cursor.remove(), Ok(0));
            assert_eq!(cursor.current(), Ok(&1));
            assert_eq!(cursor.index(), 1);
        }
        list.assert_ring();
        assert_eq!(list.to_string(), "(-1, 1, 2, 3, 4)");

        {
            let mut cursor = list.cursor_start_mut();
            while !cursor.is_null() {
                cursor.remove().unwrap();
            }
            assert_eq!(cursor.remove(), Err(Error::NullCursor));
            assert_eq!(cursor.index(), 0);
        }
        assert!(list.is_empty());
        list.assert_ring();

        let mut cursor = list.cursor_end_mut();
        cursor.insert(1);
        cursor.insert(2);
        assert_eq!(cursor.index(), 2);
        assert!(cursor.is_null());
        list.assert_ring();
        assert_eq!(list.to_string(), "(1, 2)");
    }

    #[test]
    fn cursor_mut_ends() {
        let mut list = List::from_iter(1..=3);
        let mut cursor = list.cursor_mut(1).unwrap();
        cursor.push_front(0);
        cursor.push_back(4);
        assert_eq!(cursor.index(), 2);
        assert_eq!(cursor.current(), Ok(&2));
        assert_eq!(cursor.pop_front(), Ok(0));
        assert_eq!(cursor.pop_back(), Ok(4));
        assert_eq!(cursor.index(), 1);
        assert_eq!(cursor.current(), Ok(&2));

        cursor.move_to_back();
        assert_eq!(cursor.pop_back(), Ok(3));
        assert!(cursor.is_null());
        assert_eq!(cursor.index(), 2);
        cursor.push_back(3);
        assert_eq!(cursor.index(), 3);

        cursor.move_to_start();
        assert_eq!(cursor.pop_front(), Ok(1));
        assert_eq!(cursor.current(), Ok(&2));
        assert_eq!(cursor.index(), 0);
        list.assert_ring();
        assert_eq!(list.to_string(), "(2, 3)");

        let mut empty = List::<i32>::new();
        let mut cursor = empty.cursor_end_mut();
        assert_eq!(cursor.pop_front(), Err(Error::Empty));
        assert_eq!(cursor.pop_back(), Err(Error::Empty));
    }

    #[test]
    fn cursor_iter_cycles() {
        let list = List::from_iter(0..3);
        let forward: Vec<_> = list.cursor_back().into_iter().take(7).copied().collect();
        assert_eq!(forward, vec![2, 0, 1, 2, 0, 1, 2]);
        let backward: Vec<_> = list.cursor_start().into_iter().rev().take(4).copied().collect();
        assert_eq!(backward, vec![0, 2, 1, 0]);
        assert_eq!(list.cursor_end().into_iter().next(), None);
    }
}
