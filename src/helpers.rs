use std::collections::BTreeMap;
use std::fmt::Debug;

/// Asserts that two iterators produce the same multiset of elements,
/// ignoring order.
pub fn assert_same_elements<T>(a: impl IntoIterator<Item = T>, b: impl IntoIterator<Item = T>)
where
    T: Ord + Debug,
{
    let mut counts: BTreeMap<T, isize> = BTreeMap::new();
    for item in a {
        *counts.entry(item).or_default() += 1;
    }
    for item in b {
        *counts.entry(item).or_default() -= 1;
    }

    counts.retain(|_, count| *count != 0);
    assert!(
        counts.is_empty(),
        "element counts differ (positive: only left, negative: only right): {counts:?}"
    );
}
