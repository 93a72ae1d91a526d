//! Human-readable rendering of a map's entries.

use std::fmt;

use crate::iter::Iter;

/// Renders every entry of a map on its own line as `{key : value}`, in ascending key order.
///
/// Created by [`BstMap::in_order`][crate::map::BstMap::in_order]. Both keys and values must be
/// [`Display`][fmt::Display]; nothing is assumed about how a value prints itself.
///
/// # Examples
///
/// ```
/// use bst_map::map::BstMap;
///
/// let map = BstMap::from([(2, "b"), (1, "a")]);
/// assert_eq!(map.in_order().to_string(), "{1 : a}\n{2 : b}\n");
/// ```
pub struct InOrder<'a, K, V> {
    pub(crate) iter: Iter<'a, K, V>,
}

impl<K, V> fmt::Display for InOrder<'_, K, V>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.iter.clone() {
            writeln!(f, "{{{} : {}}}", key, value)?;
        }
        Ok(())
    }
}
