use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;

use crate::error::{Error, Result};

pub use iterator::Iter;
pub use position::Position;
pub use walk::{
    Ascending, Descending, IndexCursor, MiddleOut, MiddleOutCursor, Natural, Reverse, SideCross,
    SideCrossCursor,
};

pub mod iterator;
pub mod position;
pub mod walk;

/// Visits the snapshot in insertion order.
pub type NaturalOrder<T> = Order<T, Natural>;
/// Visits the snapshot sorted in ascending order.
pub type AscendingOrder<T> = Order<T, Ascending>;
/// Visits the snapshot sorted in descending order.
pub type DescendingOrder<T> = Order<T, Descending>;
/// Visits the snapshot in reversed insertion order.
pub type ReverseOrder<T> = Order<T, Reverse>;
/// Visits the sorted snapshot alternately from both ends inward.
pub type SideCrossOrder<T> = Order<T, SideCross>;
/// Visits the snapshot alternately outward from its center.
pub type MiddleOutOrder<T> = Order<T, MiddleOut>;

/// The visiting order of an [`Order`].
///
/// A walk maps the logical progress of a [`Position`] (the number of elements
/// visited so far) to a slot of the snapshot. The position keeps the
/// progress counter and does all the bounds checking; the walk only keeps its
/// own cursor state consistent.
///
/// In a snapshot with length *n*, there are *n* + 1 valid progress values,
/// 0, 1, ..., *n*, where *n* is the end of the traversal.
pub trait Walk {
    /// Name reported in [`Error::InvalidState`].
    const NAME: &'static str;
    /// Whether an empty snapshot can be walked.
    const ALLOWS_EMPTY: bool;

    /// Strategy-specific cursor state.
    type Cursor: Copy + Eq + Debug;

    /// The cursor at `progress`, computed without walking there.
    fn seek(len: usize, progress: usize) -> Self::Cursor;

    /// The snapshot slot under `cursor`, or `None` if `progress` is the end.
    fn slot(cursor: &Self::Cursor, len: usize, progress: usize) -> Option<usize>;

    /// Move `cursor` from `progress` to `progress + 1`.
    ///
    /// Only called with `progress < len`.
    fn advance(cursor: &mut Self::Cursor, len: usize, progress: usize);

    /// Move `cursor` from `progress` to `progress - 1`.
    ///
    /// Only called with `progress > 0`.
    fn retreat(cursor: &mut Self::Cursor, len: usize, progress: usize);

    /// The snapshot slot visited at `progress`.
    fn locate(len: usize, progress: usize) -> Option<usize> {
        Self::slot(&Self::seek(len, progress), len, progress)
    }
}

/// Snapshot preparation for a [`Walk`] over elements of type `T`.
pub trait Arrange<T>: Walk {
    /// Reorder the freshly copied snapshot, e.g. sort it.
    fn arrange(_items: &mut [T]) {}
}

/// A traversal over an immutable snapshot.
///
/// The snapshot is copied (and arranged by the walk `W`) once, at
/// construction; the source it was taken from may change afterwards without
/// affecting the traversal.
///
/// # Examples
///
/// ```
/// use multi_order::order::SideCrossOrder;
///
/// let order = SideCrossOrder::new(vec![30, 10, 40, 20]).unwrap();
/// assert_eq!(order.iter().copied().collect::<Vec<_>>(), vec![10, 40, 20, 30]);
///
/// let mut position = order.begin();
/// assert_eq!(position.get(), Ok(&10));
/// position.step_forward().unwrap();
/// assert_eq!(position.get(), Ok(&40));
/// assert_eq!(position.index(2), Ok(&30));
/// ```
pub struct Order<T, W> {
    snapshot: Box<[T]>,
    _walk: PhantomData<W>,
}

impl<T, W: Arrange<T>> Order<T, W> {
    /// Take ownership of `items` as the snapshot and arrange it.
    ///
    /// Returns [`Error::InvalidState`] if `items` is empty and the walk does
    /// not allow it.
    pub fn new(items: Vec<T>) -> Result<Self> {
        if items.is_empty() && !W::ALLOWS_EMPTY {
            return Err(Error::InvalidState { strategy: W::NAME });
        }
        let mut snapshot = items.into_boxed_slice();
        W::arrange(&mut snapshot);
        Ok(Self {
            snapshot,
            _walk: PhantomData,
        })
    }
}

impl<T, W: Walk> Order<T, W> {
    /// Number of elements in the snapshot.
    #[inline]
    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    /// The arranged snapshot, in storage (not visiting) order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.snapshot
    }

    /// A position at the first element of the traversal.
    ///
    /// It equals [`Order::end`] if the snapshot is empty.
    pub fn begin(&self) -> Position<'_, T, W> {
        Position::new(self, 0)
    }

    /// A position one past the last element. It is never dereferenceable.
    pub fn end(&self) -> Position<'_, T, W> {
        Position::new(self, self.len())
    }

    /// A position at the given progress, or an error when `progress > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use multi_order::order::MiddleOutOrder;
    ///
    /// let order = MiddleOutOrder::new(vec![0, 1, 2, 3, 4]).unwrap();
    /// assert_eq!(order.position(3).and_then(|p| p.get().copied()), Ok(0));
    /// assert!(order.position(6).is_err());
    /// ```
    pub fn position(&self, progress: usize) -> Result<Position<'_, T, W>> {
        if progress > self.len() {
            return Err(Error::OutOfBounds {
                progress,
                len: self.len(),
            });
        }
        Ok(Position::new(self, progress))
    }

    /// An iterator over the elements in visiting order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, W> {
        Iter::new(self)
    }
}

impl<T: Clone, W> Clone for Order<T, W> {
    fn clone(&self) -> Self {
        Self {
            snapshot: self.snapshot.clone(),
            _walk: PhantomData,
        }
    }
}

impl<T: Debug, W: Walk> Debug for Order<T, W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T, W: Walk> IntoIterator for &'a Order<T, W> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, W>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;
    use rstest::rstest;

    fn visit<T: Copy, W: Walk>(order: &Order<T, W>) -> Vec<T> {
        let mut visited = Vec::new();
        let (mut it, end) = (order.begin(), order.end());
        while it != end {
            visited.push(*it.get().unwrap());
            it.step_forward().unwrap();
        }
        visited
    }

    #[rstest]
    #[case(vec![4, 1, 3], vec![1, 3, 4])]
    #[case(vec![7, 15, 6, 1], vec![1, 6, 7, 15])]
    #[case(vec![2, 2, 1, 2], vec![1, 2, 2, 2])]
    #[case(vec![], vec![])]
    fn ascending_order(#[case] items: Vec<i32>, #[case] expected: Vec<i32>) {
        assert_eq!(visit(&AscendingOrder::new(items).unwrap()), expected);
    }

    #[rstest]
    #[case(vec![2, 1, 3], vec![3, 2, 1])]
    #[case(vec![7, 15, 6, 1], vec![15, 7, 6, 1])]
    #[case(vec![], vec![])]
    fn descending_order(#[case] items: Vec<i32>, #[case] expected: Vec<i32>) {
        assert_eq!(visit(&DescendingOrder::new(items).unwrap()), expected);
    }

    #[test]
    fn ascending_mirrors_descending() {
        let items = vec![9, -3, 14, 0, 7, 7, 2];
        let mut ascending = visit(&AscendingOrder::new(items.clone()).unwrap());
        ascending.reverse();
        assert_eq!(ascending, visit(&DescendingOrder::new(items).unwrap()));
    }

    #[rstest]
    #[case(vec![9, 8, 7])]
    #[case(vec![1])]
    #[case(vec![5, 1, 5, 3])]
    fn natural_and_reverse_order(#[case] items: Vec<i32>) {
        assert_eq!(visit(&NaturalOrder::new(items.clone()).unwrap()), items);
        let mut reversed = items.clone();
        reversed.reverse();
        assert_eq!(visit(&ReverseOrder::new(items).unwrap()), reversed);
    }

    #[rstest]
    #[case(vec![10, 20, 30, 40], vec![10, 40, 20, 30])]
    #[case(vec![3, 1, 2], vec![1, 3, 2])]
    #[case(vec![5], vec![5])]
    #[case(vec![], vec![])]
    fn side_cross_order(#[case] items: Vec<i32>, #[case] expected: Vec<i32>) {
        assert_eq!(visit(&SideCrossOrder::new(items).unwrap()), expected);
    }

    #[test]
    fn side_cross_pairs_ends() {
        for n in 0..12 {
            let items: Vec<i32> = (0..n).rev().collect();
            let mut sorted = items.clone();
            sorted.sort();
            let visited = visit(&SideCrossOrder::new(items).unwrap());
            assert_eq!(visited.len(), sorted.len());
            for (i, value) in visited.iter().enumerate() {
                let k = i / 2;
                if i % 2 == 0 {
                    assert_eq!(*value, sorted[k]);
                } else {
                    assert_eq!(*value, sorted[sorted.len() - 1 - k]);
                }
            }
        }
    }

    #[rstest]
    #[case(vec![0, 1, 2, 3, 4], vec![2, 1, 3, 0, 4])]
    #[case(vec![0, 1, 2, 3], vec![2, 1, 3, 0])]
    #[case(vec![0, 1, 2, 3, 4, 5], vec![3, 2, 4, 1, 5, 0])]
    #[case(vec![0, 1], vec![1, 0])]
    #[case(vec![7], vec![7])]
    fn middle_out_order(#[case] items: Vec<i32>, #[case] expected: Vec<i32>) {
        assert_eq!(visit(&MiddleOutOrder::new(items).unwrap()), expected);
    }

    #[test]
    fn middle_out_is_a_permutation() {
        for n in 1..16 {
            let items: Vec<i32> = (0..n).map(|i| (i * 7) % 5).collect();
            let visited = visit(&MiddleOutOrder::new(items.clone()).unwrap());
            assert_eq!(visited[0], items[items.len() / 2]);
            let (mut lhs, mut rhs) = (visited, items);
            lhs.sort();
            rhs.sort();
            assert_eq!(lhs, rhs);
        }
    }

    #[test]
    fn empty_input_policy() {
        assert_eq!(
            NaturalOrder::<i32>::new(vec![]).unwrap_err(),
            Error::InvalidState {
                strategy: "NaturalOrder"
            }
        );
        assert!(matches!(
            ReverseOrder::<i32>::new(vec![]),
            Err(Error::InvalidState { .. })
        ));
        assert!(matches!(
            MiddleOutOrder::<i32>::new(vec![]),
            Err(Error::InvalidState { .. })
        ));

        let ascending = AscendingOrder::<i32>::new(vec![]).unwrap();
        assert!(ascending.begin() == ascending.end());
        let side_cross = SideCrossOrder::<i32>::new(vec![]).unwrap();
        assert!(side_cross.begin() == side_cross.end());
        assert!(side_cross.begin().get().is_err());
    }

    #[test]
    fn floating_point_elements() {
        let items: Vec<OrderedFloat<f64>> = [2.2, 3.3, 1.1].iter().copied().map(OrderedFloat).collect();
        let ascending = AscendingOrder::new(items).unwrap();
        let expected = [1.1, 2.2, 3.3];
        for (value, expected) in ascending.iter().zip(expected.iter()) {
            assert!((value.into_inner() - expected).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn position_beyond_end() {
        let order = NaturalOrder::new(vec![1, 2]).unwrap();
        assert!(order.position(2).is_ok());
        assert_eq!(
            order.position(3).unwrap_err(),
            Error::OutOfBounds {
                progress: 3,
                len: 2
            }
        );
    }

    #[test]
    fn debug_lists_visiting_order() {
        let order = MiddleOutOrder::new(vec![0, 1, 2, 3, 4]).unwrap();
        assert_eq!(format!("{:?}", order), "[2, 1, 3, 0, 4]");
    }
}
