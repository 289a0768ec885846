use crate::error::{Error, Result};
use crate::order::{Order, Position, Walk};
use std::convert::TryFrom;
use std::fmt;
use std::iter::FusedIterator;

/// An iterator over the elements of an [`Order`], in visiting order.
///
/// It uses a pair of positions `front..back` to represent the half-open
/// range of the traversal that is not visited yet, where `front` is
/// inclusive and `back` is not.
///
/// # Examples
///
/// ```
/// use multi_order::order::MiddleOutOrder;
///
/// let order = MiddleOutOrder::new(vec![0, 1, 2, 3, 4]).unwrap();
/// let mut iter = order.iter();
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next_back(), Some(&4));
/// assert_eq!(iter.len(), 3);
/// assert_eq!(iter.copied().collect::<Vec<_>>(), vec![1, 3, 0]);
/// ```
pub struct Iter<'a, T: 'a, W: Walk> {
    front: Position<'a, T, W>,
    back: Position<'a, T, W>,
}

impl<'a, T: 'a, W: Walk> Iter<'a, T, W> {
    pub(crate) fn new(order: &'a Order<T, W>) -> Self {
        Self {
            front: order.begin(),
            back: order.end(),
        }
    }

    /// An iterator over `start..end`.
    ///
    /// Returns [`Error::ForeignPosition`] if the positions belong to different
    /// traversals, or [`Error::ReversedRange`] if `start` is after `end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use multi_order::order::{Iter, SideCrossOrder};
    ///
    /// let order = SideCrossOrder::new(vec![1, 2, 3, 4, 5]).unwrap();
    /// let start = order.begin().offset_by(1).unwrap();
    /// let end = order.end().offset_by(-1).unwrap();
    /// let iter = Iter::between(start, end).unwrap();
    /// assert_eq!(iter.copied().collect::<Vec<_>>(), vec![5, 2, 4]);
    ///
    /// assert!(Iter::between(end, start).is_err());
    /// ```
    pub fn between(start: Position<'a, T, W>, end: Position<'a, T, W>) -> Result<Self> {
        if !start.same_order_with(&end) {
            return Err(Error::ForeignPosition);
        }
        if start.progress() > end.progress() {
            return Err(Error::ReversedRange {
                start: start.progress(),
                end: end.progress(),
            });
        }
        Ok(Self {
            front: start,
            back: end,
        })
    }

    fn remaining(&self) -> usize {
        self.back.progress() - self.front.progress()
    }
}

impl<'a, T: 'a, W: Walk> Clone for Iter<'a, T, W> {
    fn clone(&self) -> Self {
        Self {
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T: fmt::Debug + 'a, W: Walk> fmt::Debug for Iter<'a, T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<Vec<_>>()).finish()
    }
}

impl<'a, T: 'a, W: Walk> Iterator for Iter<'a, T, W> {
    type Item = &'a T;

    /// Return the element at `front` and move `front` forward, or return
    /// `None` if `front..back` is already empty.
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let current = self.front.get().ok()?;
        self.front.step_forward().ok()?;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining();
        (len, Some(len))
    }

    /// Jump `front` directly, without stepping through the skipped elements.
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.remaining() {
            self.front = self.back;
            return None;
        }
        self.front.advance_by(isize::try_from(n).ok()?).ok()?;
        self.next()
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a, W: Walk> DoubleEndedIterator for Iter<'a, T, W> {
    /// Move `back` backward and return the element there, or return `None`
    /// if `front..back` is already empty.
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back.step_backward().ok()?;
        self.back.get().ok()
    }
}

impl<'a, T: 'a, W: Walk> ExactSizeIterator for Iter<'a, T, W> {}

impl<'a, T: 'a, W: Walk> FusedIterator for Iter<'a, T, W> {}
