// src/application/queries/mod.rs
pub mod authors;
pub mod magazines;
pub mod report;

use std::collections::HashMap;
use std::hash::Hash;

/// Tallies keys, keeping the order in which each key first appeared.
pub(crate) fn count_first_seen<K, I>(keys: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Copy,
    I: IntoIterator<Item = K>,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();
    for key in keys {
        match slots.get(&key) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(key, counts.len());
                counts.push((key, 1));
            }
        }
    }
    counts
}

/// Keys in first-seen order with duplicates dropped.
pub(crate) fn unique_first_seen<K, I>(keys: I) -> Vec<K>
where
    K: Eq + Hash + Copy,
    I: IntoIterator<Item = K>,
{
    count_first_seen(keys).into_iter().map(|(key, _)| key).collect()
}
