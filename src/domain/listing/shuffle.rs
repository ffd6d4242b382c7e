use rand::Rng;
use std::collections::HashMap;
use std::hash::Hash;

/// Return a uniformly random permutation of `items`, leaving the input untouched.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(items, &mut rand::thread_rng())
}

/// Durstenfeld's Fisher-Yates over a copy of `items`, drawing from `rng`.
pub fn shuffle_with<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

/// Partition `items` by the key `key_fn` extracts.
///
/// Items without a key are dropped rather than collected into an "unknown"
/// bucket. Each group keeps the relative order of the input.
pub fn group_by_key<T, K, F>(items: impl IntoIterator<Item = T>, key_fn: F) -> HashMap<K, Vec<T>>
where
    K: Eq + Hash,
    F: Fn(&T) -> Option<K>,
{
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();
    for item in items {
        if let Some(key) = key_fn(&item) {
            groups.entry(key).or_default().push(item);
        }
    }
    groups
}

/// Shuffle every group independently.
pub fn shuffle_groups<K, T>(groups: HashMap<K, Vec<T>>) -> HashMap<K, Vec<T>>
where
    K: Eq + Hash,
    T: Clone,
{
    let mut rng = rand::thread_rng();
    groups
        .into_iter()
        .map(|(key, items)| {
            let shuffled = shuffle_with(&items, &mut rng);
            (key, shuffled)
        })
        .collect()
}
