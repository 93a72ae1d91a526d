use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// a map in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<K, V> {
    /// Insert the K, V into the map
    Insert(K, V),
    /// Erase the K from the map
    Erase(K),
    /// Look up K through auto-vivifying indexed access
    Index(K),
    /// Compare iterators
    Iter,
    /// Mirror the tree and mirror it back
    InvertTwice,
}

impl<K, V> Arbitrary for Op<K, V>
where
    K: Arbitrary,
    V: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2, 3, 4]).unwrap() {
            0 => Op::Insert(K::arbitrary(g), V::arbitrary(g)),
            1 => Op::Erase(K::arbitrary(g)),
            2 => Op::Index(K::arbitrary(g)),
            3 => Op::Iter,
            4 => Op::InvertTwice,
            _ => unreachable!(),
        }
    }
}
