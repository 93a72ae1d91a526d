use bst_map::map::BstMap;

use std::collections::{BTreeMap, HashSet};

use crate::Op;

/// Applies a set of operations to a map and a `BTreeMap`.
/// This way we can ensure that after a random smattering of inserts
/// and erases we have the same set of keys in both.
fn do_ops<K, V>(ops: &[Op<K, V>], bst: &mut BstMap<K, V>, model: &mut BTreeMap<K, V>)
where
    K: Ord + Clone,
    V: Clone,
{
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                bst.insert(k.clone(), v.clone());
                model.entry(k.clone()).or_insert_with(|| v.clone());
            }
            Op::Erase(k) => {
                bst.erase(k);
                model.remove(k);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    let mut map = BstMap::new();
    let mut model = BTreeMap::new();

    do_ops(&ops, &mut map, &mut model);
    map.len() == model.len() && model.keys().all(|key| map.get(key) == model.get(key))
}

#[quickcheck]
fn sorted_and_sized(xs: Vec<i8>) -> bool {
    let map: BstMap<i8, ()> = xs.iter().map(|x| (*x, ())).collect();
    let distinct: HashSet<_> = xs.iter().collect();

    let keys: Vec<_> = map.keys().collect();
    map.len() == distinct.len() && keys.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let map: BstMap<i8, i8> = xs.iter().map(|x| (*x, *x)).collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| map.get(x).is_none())
}

#[quickcheck]
fn with_erasures(xs: Vec<i8>, erasures: Vec<i8>) -> bool {
    let mut map: BstMap<i8, i8> = xs.iter().map(|x| (*x, *x)).collect();
    let mut removed = 0;
    for erase in &erasures {
        removed += map.erase(erase);
    }

    let mut still_present: HashSet<_> = xs.into_iter().collect();
    let before = still_present.len();
    for erase in &erasures {
        still_present.remove(erase);
    }

    removed == before - still_present.len()
        && erasures.iter().all(|x| !map.contains_key(x))
        && still_present.iter().all(|x| map.contains_key(x))
}

#[quickcheck]
fn invert_round_trips(xs: Vec<(i8, i8)>) -> bool {
    let original: BstMap<i8, i8> = xs.into_iter().collect();
    let mut map = original.clone();

    map.invert();
    let mut descending: Vec<_> = map.keys().copied().collect();
    descending.reverse();
    let reversed = descending.iter().eq(original.keys());
    map.invert();

    reversed && map.iter().eq(original.iter()) && map.height() == original.height()
}

#[quickcheck]
fn vivify_grows_by_one_only_when_absent(xs: Vec<i8>, key: i8) -> bool {
    let mut map: BstMap<i8, i8> = xs.iter().map(|x| (*x, *x)).collect();
    let before = map.len();
    let present = map.contains_key(&key);

    let value = *map.get_or_insert_default(key);

    if present {
        map.len() == before && value == key
    } else {
        map.len() == before + 1 && value == 0
    }
}
