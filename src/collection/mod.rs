//! Collection batching and order-insensitive comparison helpers.

use std::collections::HashMap;
use std::hash::Hash;

pub mod opt_map;

#[doc(inline)]
pub use opt_map::OptValueMap;

/// Splits the source into consecutive batches of at most `batch_size`
/// elements. The last batch may be shorter.
///
/// An empty source yields no batches. A `batch_size` of zero yields a
/// single batch holding the whole slice.
pub fn batches<T>(source: &[T], batch_size: usize) -> Vec<&[T]> {
    if source.is_empty() {
        return Vec::new();
    }
    if batch_size == 0 {
        return vec![source];
    }
    source.chunks(batch_size).collect()
}

/// Maps each distinct element to the number of times it occurs.
pub fn cardinality_map<T, I>(items: I) -> HashMap<T, usize>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

/// Returns `true` iff both slices contain exactly the same elements with
/// exactly the same cardinalities, regardless of order.
pub fn collections_equal<T: Eq + Hash>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let counts_a = cardinality_map(a.iter());
    let counts_b = cardinality_map(b.iter());
    if counts_a.len() != counts_b.len() {
        return false;
    }

    counts_a
        .iter()
        .all(|(item, count)| counts_b.get(item) == Some(count))
}
