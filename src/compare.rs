//! Key ordering for [`BstMap`][crate::map::BstMap].
//!
//! A comparator only has to answer "is `lhs` strictly less than `rhs`?". Two keys are considered
//! the same key when neither is less than the other.

use std::cmp::Ordering;
use std::fmt;

/// A strict weak ordering over keys of type `K`.
pub trait KeyComparator<K> {
    /// Returns `true` if `lhs` sorts strictly before `rhs`.
    fn less(&self, lhs: &K, rhs: &K) -> bool;

    /// Derives a total [`Ordering`] from [`less`][KeyComparator::less].
    fn compare(&self, lhs: &K, rhs: &K) -> Ordering {
        if self.less(lhs, rhs) {
            Ordering::Less
        } else if self.less(rhs, lhs) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Orders keys by their [`Ord`] implementation. This is the default comparator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: Ord> KeyComparator<K> for NaturalOrder {
    fn less(&self, lhs: &K, rhs: &K) -> bool {
        lhs < rhs
    }

    fn compare(&self, lhs: &K, rhs: &K) -> Ordering {
        lhs.cmp(rhs)
    }
}

/// Orders keys with a "less than" closure.
///
/// # Examples
///
/// ```
/// use bst_map::compare::LessBy;
/// use bst_map::map::BstMap;
///
/// // Largest key first.
/// let mut map = BstMap::with_comparator(LessBy(|a: &i32, b: &i32| a > b));
/// map.insert(1, "one");
/// map.insert(3, "three");
/// map.insert(2, "two");
///
/// let keys: Vec<_> = map.keys().copied().collect();
/// assert_eq!(keys, [3, 2, 1]);
/// ```
#[derive(Clone, Copy, Default)]
pub struct LessBy<F>(pub F);

impl<K, F> KeyComparator<K> for LessBy<F>
where
    F: Fn(&K, &K) -> bool,
{
    fn less(&self, lhs: &K, rhs: &K) -> bool {
        (self.0)(lhs, rhs)
    }
}

impl<F> fmt::Debug for LessBy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LessBy(..)")
    }
}
