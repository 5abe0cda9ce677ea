//! Shared mode computation for the report modules.

use std::collections::HashMap;
use std::hash::Hash;

/// Returns the most frequent value produced by `values` together with its
/// occurrence count, or `None` for an empty sequence.
///
/// Ties break toward the value seen first in input order, which keeps the
/// result deterministic for tables loaded from the same file. The count is
/// always the true maximum.
pub fn most_frequent<T, I>(values: I) -> Option<(T, usize)>
where
    T: Clone + Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let values: Vec<T> = values.into_iter().collect();
    let mut counts: HashMap<&T, usize> = HashMap::new();
    for value in &values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut best: Option<(&T, usize)> = None;
    for value in &values {
        let count = counts[value];
        match best {
            Some((_, best_count)) if best_count >= count => {}
            _ => best = Some((value, count)),
        }
    }
    best.map(|(value, count)| (value.clone(), count))
}
