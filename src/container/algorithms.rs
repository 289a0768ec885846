use crate::container::Container;
use std::iter::FromIterator;

impl<T> Container<T> {
    /// Returns `true` if the `Container` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use multi_order::Container;
    ///
    /// let mut container = Container::new();
    ///
    /// container.add(0);
    /// container.add(1);
    /// container.add(2);
    ///
    /// assert_eq!(container.contains(&0), true);
    /// assert_eq!(container.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Number of elements equal to the given value.
    pub fn count(&self, x: &T) -> usize
    where
        T: PartialEq<T>,
    {
        self.iter().filter(|&e| e == x).count()
    }

    /// Consume the container and return its elements in insertion order.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> From<Vec<T>> for Container<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Container<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: Vec::from_iter(iter),
        }
    }
}

impl<T> Extend<T> for Container<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.add(item));
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for Container<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> IntoIterator for Container<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Container<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
