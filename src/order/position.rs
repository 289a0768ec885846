use crate::error::{Error, Result};
use crate::order::{Order, Walk};
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;
use std::fmt::Formatter;
use std::ptr;

/// A position in a traversal of an [`Order`].
///
/// A `Position` is like a bidirectional, random-access iterator: it can step
/// back-and-forth and jump by any offset, and every move is bounds-checked.
///
/// In a snapshot with length *n*, there are *n* + 1 valid positions, with
/// progress 0, 1, ..., *n*, where *n* is the end of the traversal and can not
/// be dereferenced.
///
/// Positions borrow their `Order`, so the snapshot always outlives them.
///
/// # Examples
///
/// ```
/// use multi_order::order::ReverseOrder;
///
/// // Visiting order: [|C B A #] (progress = 0)
/// let order = ReverseOrder::new(vec!['A', 'B', 'C']).unwrap();
/// let mut position = order.begin();
/// assert_eq!(position.get(), Ok(&'C'));
///
/// // Step forward: [ C|B A #] (progress = 1)
/// assert!(position.step_forward().is_ok());
/// assert_eq!(position.get(), Ok(&'B'));
///
/// // Jump to the end: [ C B A|#] (progress = 3)
/// let end = position.offset_by(2).unwrap();
/// assert!(end.get().is_err());
/// assert_eq!(end, order.end());
///
/// // Stepping back from the start is an error: [|C B A #]
/// let mut start = order.begin();
/// assert!(start.step_backward().is_err());
/// assert_eq!(start.get(), Ok(&'C'));
/// ```
pub struct Position<'a, T: 'a, W: Walk> {
    order: &'a Order<T, W>,
    progress: usize,
    cursor: W::Cursor,
}

impl<'a, T: 'a, W: Walk> Clone for Position<'a, T, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: 'a, W: Walk> Copy for Position<'a, T, W> {}

/// Compare positions by their progress.
///
/// Only positions of the same traversal with the same progress are
/// considered equal.
///
/// # Examples
/// ```
/// use multi_order::order::NaturalOrder;
///
/// let order = NaturalOrder::new(vec![1, 2, 3]).unwrap();
/// let position1 = order.begin();
/// let mut position2 = position1;
/// // The same traversal, and the same progress.
/// assert_eq!(position1, position2);
///
/// position2.step_forward().unwrap();
/// // The same traversal, but different progress.
/// assert_ne!(position1, position2);
///
/// let another_order = order.clone();
/// // Different traversals, even with equal contents.
/// assert_ne!(position1, another_order.begin());
/// ```
impl<'a, T: 'a, W: Walk> PartialEq for Position<'a, T, W> {
    fn eq(&self, other: &Self) -> bool {
        self.same_order_with(other) && self.progress == other.progress
    }
}

impl<'a, T: 'a, W: Walk> Eq for Position<'a, T, W> {}

/// Only positions of the same traversal can compare, so it is `PartialOrd`
/// but not `Ord`.
///
/// # Examples
/// ```
/// use multi_order::order::AscendingOrder;
///
/// let order = AscendingOrder::new(vec![3, 1, 2]).unwrap();
/// assert!(order.begin() < order.end());
///
/// let another_order = order.clone();
/// assert_eq!(order.begin().partial_cmp(&another_order.end()), None);
/// ```
impl<'a, T: 'a, W: Walk> PartialOrd for Position<'a, T, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.same_order_with(other) {
            return None;
        }
        Some(self.progress.cmp(&other.progress))
    }
}

impl<'a, T: 'a, W: Walk> fmt::Debug for Position<'a, T, W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Position")
            .field("progress", &self.progress)
            .field("len", &self.len())
            .field("cursor", &self.cursor)
            .finish()
    }
}

// Private methods
impl<'a, T: 'a, W: Walk> Position<'a, T, W> {
    pub(crate) fn new(order: &'a Order<T, W>, progress: usize) -> Self {
        let cursor = W::seek(order.len(), progress);
        Self {
            order,
            progress,
            cursor,
        }
    }

    pub(crate) fn same_order_with(&self, other: &Self) -> bool {
        ptr::eq(self.order, other.order)
    }

    fn out_of_bounds(&self) -> Error {
        Error::OutOfBounds {
            progress: self.progress,
            len: self.len(),
        }
    }

    /// The progress `offset` steps away, if it stays within `0..=len`.
    fn checked_target(&self, offset: isize) -> Result<usize> {
        let target = if offset >= 0 {
            self.progress.checked_add(offset.unsigned_abs())
        } else {
            self.progress.checked_sub(offset.unsigned_abs())
        };
        target
            .filter(|&target| target <= self.len())
            .ok_or(Error::OffsetOutOfRange {
                progress: self.progress,
                offset,
                len: self.len(),
            })
    }
}

impl<'a, T: 'a, W: Walk> Position<'a, T, W> {
    /// The logical progress counter: the number of elements visited before
    /// this position.
    #[inline]
    pub fn progress(&self) -> usize {
        self.progress
    }

    /// Length of the traversal.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the traversal is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns `true` if this is the end position.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.progress == self.len()
    }

    /// The traversal this position belongs to.
    #[inline]
    pub fn order(&self) -> &'a Order<T, W> {
        self.order
    }

    /// Number of elements between this position and the end.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.len() - self.progress
    }

    /// The element at this position, or an error at the end.
    pub fn get(&self) -> Result<&'a T> {
        if self.progress >= self.len() {
            return Err(self.out_of_bounds());
        }
        W::slot(&self.cursor, self.len(), self.progress)
            .and_then(|slot| self.order.as_slice().get(slot))
            .ok_or_else(|| self.out_of_bounds())
    }

    /// Move to the next position, or return an error at the end.
    ///
    /// If an error occurs, the position stays put.
    pub fn step_forward(&mut self) -> Result<()> {
        if self.progress >= self.len() {
            return Err(self.out_of_bounds());
        }
        let len = self.len();
        W::advance(&mut self.cursor, len, self.progress);
        self.progress += 1;
        Ok(())
    }

    /// Move to the previous position, or return an error at the start.
    ///
    /// This is the exact inverse of [`Position::step_forward`]. If an error
    /// occurs, the position stays put.
    pub fn step_backward(&mut self) -> Result<()> {
        if self.progress == 0 {
            return Err(self.out_of_bounds());
        }
        let len = self.len();
        W::retreat(&mut self.cursor, len, self.progress);
        self.progress -= 1;
        Ok(())
    }

    /// A new position `offset` steps away; a negative `offset` moves backward.
    ///
    /// Returns an error if the result would fall outside `0..=len`.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use multi_order::order::MiddleOutOrder;
    ///
    /// let order = MiddleOutOrder::new(vec![0, 1, 2, 3, 4]).unwrap();
    /// let position = order.begin().offset_by(3).unwrap();
    /// assert_eq!(position.get(), Ok(&0));
    /// assert_eq!(position.offset_by(-2).unwrap().get(), Ok(&1));
    /// assert!(position.offset_by(3).is_err());
    /// assert!(position.offset_by(-4).is_err());
    /// ```
    pub fn offset_by(&self, offset: isize) -> Result<Self> {
        let target = self.checked_target(offset)?;
        Ok(Self::new(self.order, target))
    }

    /// Move this position `offset` steps away in place.
    ///
    /// If an error occurs, the position stays put.
    pub fn advance_by(&mut self, offset: isize) -> Result<()> {
        *self = self.offset_by(offset)?;
        Ok(())
    }

    /// Move this position `offset` steps back in place.
    ///
    /// If an error occurs, the position stays put.
    pub fn retreat_by(&mut self, offset: isize) -> Result<()> {
        let offset = offset.checked_neg().ok_or(Error::OffsetOutOfRange {
            progress: self.progress,
            offset,
            len: self.len(),
        })?;
        self.advance_by(offset)
    }

    /// The element `offset` steps ahead, without moving.
    ///
    /// Equivalent to `self.offset_by(offset)?.get()`, but the slot is computed
    /// directly from the target progress.
    ///
    /// # Examples
    ///
    /// ```
    /// use multi_order::order::DescendingOrder;
    ///
    /// let order = DescendingOrder::new(vec![2, 1, 3]).unwrap();
    /// let position = order.begin();
    /// assert_eq!(position.index(0), Ok(&3));
    /// assert_eq!(position.index(2), Ok(&1));
    /// assert!(position.index(3).is_err());
    /// ```
    pub fn index(&self, offset: usize) -> Result<&'a T> {
        let len = self.len();
        let out_of_bounds = || Error::OffsetOutOfRange {
            progress: self.progress,
            offset: isize::try_from(offset).unwrap_or(isize::MAX),
            len,
        };
        let target = self
            .progress
            .checked_add(offset)
            .filter(|&target| target < len)
            .ok_or_else(out_of_bounds)?;
        W::locate(len, target)
            .and_then(|slot| self.order.as_slice().get(slot))
            .ok_or_else(out_of_bounds)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::order::{
        AscendingOrder, DescendingOrder, MiddleOutOrder, NaturalOrder, ReverseOrder,
        SideCrossOrder, Walk,
    };
    use crate::order::Order;

    fn check_random_access<T, W>(order: &Order<T, W>)
    where
        T: PartialEq + std::fmt::Debug,
        W: Walk,
    {
        let len = order.len() as isize;
        let begin = order.begin();
        for from in 0..=len {
            let position = begin.offset_by(from).unwrap();
            assert_eq!(position.progress() as isize, from);
            for offset in -len - 1..=len + 1 {
                let target = from + offset;
                let jumped = position.offset_by(offset);
                if target < 0 || target > len {
                    assert!(jumped.is_err());
                    continue;
                }
                let jumped = jumped.unwrap();
                assert_eq!(jumped.offset_by(-offset).unwrap(), position);
                if offset >= 0 {
                    assert_eq!(position.index(offset as usize).ok(), jumped.get().ok());
                }
            }
        }
    }

    #[test]
    fn random_access_matches_stepping() {
        let items = vec![7, 15, 6, 1, 3, 3, 9];
        check_random_access(&NaturalOrder::new(items.clone()).unwrap());
        check_random_access(&AscendingOrder::new(items.clone()).unwrap());
        check_random_access(&DescendingOrder::new(items.clone()).unwrap());
        check_random_access(&ReverseOrder::new(items.clone()).unwrap());
        check_random_access(&SideCrossOrder::new(items.clone()).unwrap());
        check_random_access(&MiddleOutOrder::new(items).unwrap());
        check_random_access(&SideCrossOrder::<i32>::new(vec![]).unwrap());
    }

    #[test]
    fn offset_equals_repeated_steps() {
        let order = SideCrossOrder::new(vec![10, 20, 30, 40, 50]).unwrap();
        let mut stepped = order.begin();
        for progress in 0..=order.len() {
            let jumped = order.begin().offset_by(progress as isize).unwrap();
            assert_eq!(stepped, jumped);
            assert_eq!(stepped.get(), jumped.get());
            if progress < order.len() {
                stepped.step_forward().unwrap();
            }
        }
    }

    #[test]
    fn boundaries() {
        let order = MiddleOutOrder::new(vec![1, 2, 3]).unwrap();
        let mut end = order.end();
        assert_eq!(end.get(), Err(Error::OutOfBounds { progress: 3, len: 3 }));
        assert_eq!(
            end.step_forward(),
            Err(Error::OutOfBounds { progress: 3, len: 3 })
        );
        assert!(end.is_end());

        let mut begin = order.begin();
        assert_eq!(
            begin.step_backward(),
            Err(Error::OutOfBounds { progress: 0, len: 3 })
        );
        assert_eq!(begin.get(), Ok(&2));

        assert_eq!(
            begin.offset_by(4).unwrap_err(),
            Error::OffsetOutOfRange {
                progress: 0,
                offset: 4,
                len: 3
            }
        );
        assert!(begin.index(3).is_err());
        assert_eq!(
            begin.index(usize::MAX).unwrap_err(),
            Error::OffsetOutOfRange {
                progress: 0,
                offset: isize::MAX,
                len: 3
            }
        );
        assert!(begin.offset_by(isize::MIN).is_err());
        assert!(begin.retreat_by(isize::MIN).is_err());
    }

    #[test]
    fn step_back_and_forth() {
        let order = MiddleOutOrder::new(vec![0, 1, 2, 3, 4, 5]).unwrap();
        let mut position = order.end();
        let mut backward = Vec::new();
        while position.step_backward().is_ok() {
            backward.push(*position.get().unwrap());
        }
        assert_eq!(backward, vec![0, 5, 1, 4, 2, 3]);
        assert_eq!(position, order.begin());
    }

    #[test]
    fn step_forward_then_backward_restores_cursor() {
        let order = SideCrossOrder::new(vec![5, 4, 3, 2, 1, 0]).unwrap();
        let mut position = order.begin();
        while !position.is_end() {
            let before = position;
            let value = position.get().unwrap();
            position.step_forward().unwrap();
            let mut back = position;
            back.step_backward().unwrap();
            assert_eq!(back, before);
            assert_eq!(back.get(), Ok(value));
        }
    }

    #[test]
    fn advance_and_retreat_in_place() {
        let order = ReverseOrder::new(vec![1, 2, 3, 4]).unwrap();
        let mut position = order.begin();
        position.advance_by(3).unwrap();
        assert_eq!(position.get(), Ok(&1));
        assert!(position.advance_by(2).is_err());
        assert_eq!(position.progress(), 3);
        position.retreat_by(2).unwrap();
        assert_eq!(position.get(), Ok(&3));
        assert_eq!(position.remaining(), 3);
    }

    #[test]
    fn snapshot_identity() {
        let left = NaturalOrder::new(vec![1, 2]).unwrap();
        let right = NaturalOrder::new(vec![1, 2]).unwrap();
        assert_ne!(left.begin(), right.begin());
        assert_eq!(left.begin().partial_cmp(&right.begin()), None);
        assert!(left.begin() < left.end());
    }
}
