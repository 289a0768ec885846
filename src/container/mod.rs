use std::fmt::{Display, Formatter};

use crate::error::{Error, Result};
use crate::order::{
    AscendingOrder, DescendingOrder, MiddleOutOrder, NaturalOrder, ReverseOrder, SideCrossOrder,
};

mod algorithms;

/// A growable sequence of elements in insertion order, with duplicates.
///
/// The `Container` hands out traversals in six different orders. Each
/// traversal copies the elements when it is created, so the container can be
/// mutated again as soon as the call returns.
///
/// # Examples
///
/// ```
/// use multi_order::Container;
///
/// let mut container = Container::new();
/// for item in [7, 15, 6, 1, 2, 2, 2, 2].iter() {
///     container.add(*item);
/// }
/// container.remove(&2).unwrap();
/// assert_eq!(container.size(), 4);
/// assert_eq!(container.to_string(), "[ 7 15 6 1 ]");
///
/// let ascending = container.ascending_order().unwrap();
/// container.add(0);
/// assert_eq!(ascending.iter().copied().collect::<Vec<_>>(), vec![1, 6, 7, 15]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Container<T = i32> {
    items: Vec<T>,
}

impl<T> Container<T> {
    /// Create an empty `Container`.
    ///
    /// # Examples
    /// ```
    /// use multi_order::Container;
    /// let container: Container<u32> = Container::new();
    /// assert!(container.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends an element to the back of the container.
    ///
    /// # Complexity
    ///
    /// This operation should compute in amortized *O*(1) time.
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes **all** elements equal to `item`.
    ///
    /// Returns [`Error::NotFound`] if there is none, and the container is left
    /// unchanged.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use multi_order::{Container, Error};
    /// use std::iter::FromIterator;
    ///
    /// let mut container = Container::from_iter([1, 2, 2, 3].iter().copied());
    /// assert!(container.remove(&2).is_ok());
    /// assert_eq!(container.as_slice(), &[1, 3]);
    /// assert_eq!(container.remove(&2), Err(Error::NotFound));
    /// ```
    pub fn remove(&mut self, item: &T) -> Result<()>
    where
        T: PartialEq,
    {
        if !self.contains(item) {
            return Err(Error::NotFound);
        }
        self.items.retain(|e| e != item);
        Ok(())
    }

    /// Number of elements in the container.
    #[inline]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Same as [`Container::size`].
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The elements in insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// A copy of the elements in insertion order.
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    /// Provides a forward iterator in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

/// Traversal factories. Each one snapshots the current elements.
impl<T: Clone> Container<T> {
    /// Insertion order.
    ///
    /// Returns [`Error::InvalidState`] if the container is empty.
    pub fn order(&self) -> Result<NaturalOrder<T>> {
        NaturalOrder::new(self.snapshot())
    }

    /// Ascending order. An empty container gives an empty traversal.
    pub fn ascending_order(&self) -> Result<AscendingOrder<T>>
    where
        T: Ord,
    {
        AscendingOrder::new(self.snapshot())
    }

    /// Descending order. An empty container gives an empty traversal.
    pub fn descending_order(&self) -> Result<DescendingOrder<T>>
    where
        T: Ord,
    {
        DescendingOrder::new(self.snapshot())
    }

    /// Reversed insertion order.
    ///
    /// Returns [`Error::InvalidState`] if the container is empty.
    pub fn reverse_order(&self) -> Result<ReverseOrder<T>> {
        ReverseOrder::new(self.snapshot())
    }

    /// Smallest, largest, second smallest, second largest, and so on.
    /// An empty container gives an empty traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use multi_order::Container;
    /// use std::iter::FromIterator;
    ///
    /// let container = Container::from_iter(vec![10, 20, 30, 40]);
    /// let side_cross = container.side_cross_order().unwrap();
    /// assert_eq!(side_cross.iter().copied().collect::<Vec<_>>(), vec![10, 40, 20, 30]);
    /// ```
    pub fn side_cross_order(&self) -> Result<SideCrossOrder<T>>
    where
        T: Ord,
    {
        SideCrossOrder::new(self.snapshot())
    }

    /// The element at `len / 2` first, then alternately left and right of it.
    ///
    /// Returns [`Error::InvalidState`] if the container is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use multi_order::Container;
    /// use std::iter::FromIterator;
    ///
    /// let container = Container::from_iter(0..5);
    /// let middle_out = container.middle_out_order().unwrap();
    /// assert_eq!(middle_out.iter().copied().collect::<Vec<_>>(), vec![2, 1, 3, 0, 4]);
    /// ```
    pub fn middle_out_order(&self) -> Result<MiddleOutOrder<T>> {
        MiddleOutOrder::new(self.snapshot())
    }
}

impl<T> Default for Container<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders as `[ e1 e2 ... en ]`, or `[ ]` when empty.
impl<T: Display> Display for Container<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("[ ")?;
        for item in &self.items {
            write!(f, "{} ", item)?;
        }
        f.write_str("]")
    }
}
