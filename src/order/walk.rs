//! The six visiting orders.
//!
//! Index walks (`Natural`, `Ascending`, `Descending`, `Reverse`) keep a single
//! index and map it to a slot with plain arithmetic. `SideCross` and
//! `MiddleOut` keep a pair of cursors and an alternation flag.

use crate::order::{Arrange, Walk};

/// Cursor of the index walks: the index of the current element, counted
/// from the start of the walk.
pub type IndexCursor = usize;

/// Insertion order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Natural;

/// Ascending order of a sorted copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ascending;

/// Descending order of a sorted copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Descending;

/// Reversed insertion order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reverse;

/// Alternately the smallest and the largest remaining element.
#[derive(Debug, Clone, Copy, Default)]
pub struct SideCross;

/// The center element, then alternately left and right of it.
#[derive(Debug, Clone, Copy, Default)]
pub struct MiddleOut;

macro_rules! impl_index_walk {
    ($WALK:ident, $NAME:literal, $ALLOWS_EMPTY:literal, |$len:ident, $index:ident| $slot:expr) => {
        impl Walk for $WALK {
            const NAME: &'static str = $NAME;
            const ALLOWS_EMPTY: bool = $ALLOWS_EMPTY;

            type Cursor = IndexCursor;

            #[inline]
            fn seek(_len: usize, progress: usize) -> IndexCursor {
                progress
            }

            #[inline]
            fn slot(cursor: &IndexCursor, len: usize, _progress: usize) -> Option<usize> {
                Self::locate(len, *cursor)
            }

            #[inline]
            fn advance(cursor: &mut IndexCursor, _len: usize, _progress: usize) {
                *cursor += 1;
            }

            #[inline]
            fn retreat(cursor: &mut IndexCursor, _len: usize, _progress: usize) {
                *cursor -= 1;
            }

            #[inline]
            fn locate($len: usize, $index: usize) -> Option<usize> {
                $slot
            }
        }
    };
}

impl_index_walk!(Natural, "NaturalOrder", false, |len, index| Some(index)
    .filter(|&slot| slot < len));
impl_index_walk!(Ascending, "AscendingOrder", true, |len, index| Some(index)
    .filter(|&slot| slot < len));
impl_index_walk!(Descending, "DescendingOrder", true, |len, index| Some(index)
    .filter(|&slot| slot < len));
impl_index_walk!(Reverse, "ReverseOrder", false, |len, index| len
    .checked_sub(index)
    .and_then(|rest| rest.checked_sub(1)));

impl<T> Arrange<T> for Natural {}

impl<T: Ord> Arrange<T> for Ascending {
    fn arrange(items: &mut [T]) {
        items.sort();
    }
}

impl<T: Ord> Arrange<T> for Descending {
    fn arrange(items: &mut [T]) {
        items.sort_by(|a, b| b.cmp(a));
    }
}

impl<T> Arrange<T> for Reverse {}

impl<T: Ord> Arrange<T> for SideCross {
    fn arrange(items: &mut [T]) {
        items.sort();
    }
}

impl<T> Arrange<T> for MiddleOut {}

/// Cursor of [`SideCross`].
///
/// `left` moves right on every left turn, `right` moves left on every right
/// turn. `right` becomes `None` instead of wrapping below zero, which also
/// covers the empty snapshot (`len - 1` does not exist).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideCrossCursor {
    left: usize,
    right: Option<usize>,
    left_turn: bool,
}

impl Walk for SideCross {
    const NAME: &'static str = "SideCrossOrder";
    const ALLOWS_EMPTY: bool = true;

    type Cursor = SideCrossCursor;

    fn seek(len: usize, progress: usize) -> SideCrossCursor {
        SideCrossCursor {
            left: (progress + 1) / 2,
            right: len
                .checked_sub(1)
                .and_then(|last| last.checked_sub(progress / 2)),
            left_turn: progress % 2 == 0,
        }
    }

    fn slot(cursor: &SideCrossCursor, len: usize, progress: usize) -> Option<usize> {
        // the cursors cross before the end
        if progress >= len {
            return None;
        }
        let slot = if cursor.left_turn {
            Some(cursor.left)
        } else {
            cursor.right
        };
        slot.filter(|&slot| slot < len)
    }

    fn advance(cursor: &mut SideCrossCursor, _len: usize, _progress: usize) {
        if cursor.left_turn {
            cursor.left += 1;
        } else {
            cursor.right = cursor.right.and_then(|right| right.checked_sub(1));
        }
        cursor.left_turn = !cursor.left_turn;
    }

    fn retreat(cursor: &mut SideCrossCursor, _len: usize, _progress: usize) {
        cursor.left_turn = !cursor.left_turn;
        if cursor.left_turn {
            cursor.left = cursor.left.saturating_sub(1);
        } else {
            cursor.right = Some(cursor.right.map_or(0, |right| right + 1));
        }
    }

    fn locate(len: usize, progress: usize) -> Option<usize> {
        if progress >= len {
            return None;
        }
        let pair = progress / 2;
        if progress % 2 == 0 {
            Some(pair)
        } else {
            Some(len - 1 - pair)
        }
    }
}

/// Cursor of [`MiddleOut`].
///
/// Past the center, `left` and `right` are the next unvisited slots on each
/// side; `left` is `None` once the left side is exhausted and `right == len`
/// once the right side is. The alternation flag flips on every step after the
/// center, and a turn whose side is exhausted takes the other side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiddleOutCursor {
    left: Option<usize>,
    right: usize,
    left_turn: bool,
}

impl MiddleOutCursor {
    /// Whether the element under the cursor comes from the left side.
    fn on_left(&self, len: usize) -> bool {
        if self.left_turn {
            self.left.is_some()
        } else {
            self.right >= len
        }
    }
}

/// How many elements the first `steps` outward visits take from the left and
/// the right of the center.
fn outward_split(len: usize, steps: usize) -> (usize, usize) {
    let center = len / 2;
    let (lefts, rights) = (center, len.saturating_sub(center + 1));
    let pairs = lefts.min(rights);
    if steps <= 2 * pairs {
        return ((steps + 1) / 2, steps / 2);
    }
    let extra = steps - 2 * pairs;
    if lefts > rights {
        (pairs + extra, pairs)
    } else {
        (pairs, pairs + extra)
    }
}

impl Walk for MiddleOut {
    const NAME: &'static str = "MiddleOutOrder";
    const ALLOWS_EMPTY: bool = false;

    type Cursor = MiddleOutCursor;

    fn seek(len: usize, progress: usize) -> MiddleOutCursor {
        let center = len / 2;
        // the center itself is not an outward visit
        let (lefts, rights) = match progress.checked_sub(1) {
            Some(steps) => outward_split(len, steps),
            None => (0, 0),
        };
        MiddleOutCursor {
            left: center.checked_sub(lefts + 1),
            right: center + 1 + rights,
            left_turn: progress == 0 || progress % 2 == 1,
        }
    }

    fn slot(cursor: &MiddleOutCursor, len: usize, progress: usize) -> Option<usize> {
        if progress >= len {
            return None;
        }
        if progress == 0 {
            return Some(len / 2);
        }
        if cursor.on_left(len) {
            cursor.left
        } else {
            Some(cursor.right)
        }
    }

    fn advance(cursor: &mut MiddleOutCursor, len: usize, progress: usize) {
        if progress == 0 {
            return;
        }
        if cursor.on_left(len) {
            cursor.left = cursor.left.and_then(|left| left.checked_sub(1));
        } else {
            cursor.right += 1;
        }
        cursor.left_turn = !cursor.left_turn;
    }

    /// Once a side runs dry the flag alone no longer tells which side the
    /// previous element came from, so stepping back recomputes the cursor.
    fn retreat(cursor: &mut MiddleOutCursor, len: usize, progress: usize) {
        *cursor = Self::seek(len, progress.saturating_sub(1));
    }
}
