//! Grouping and sorting helpers shared by the index and the presentation layer.
//!
//! Both [`key_by`] and [`sort_by`] take an accessor closure instead of a
//! field name and return views that borrow from the input slice, which is
//! never reordered.

use std::collections::HashMap;
use std::hash::Hash;

/// Map the key produced by `key` for each item to the item itself.
///
/// When two items produce the same key the later one wins.
pub fn key_by<'a, T, K, F>(items: &'a [T], mut key: F) -> HashMap<K, &'a T>
where
    K: Eq + Hash,
    F: FnMut(&'a T) -> K,
{
    let mut map = HashMap::with_capacity(items.len());
    for item in items {
        map.insert(key(item), item);
    }
    map
}

/// Return a new vector of references to `items`, ascending by `key`.
///
/// The sort is stable: items with equal keys keep their relative order.
pub fn sort_by<'a, T, K, F>(items: &'a [T], mut key: F) -> Vec<&'a T>
where
    K: Ord,
    F: FnMut(&'a T) -> K,
{
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by_cached_key(|item| key(*item));
    sorted
}

/// Format `"<count> <word>"`, pluralising `word` unless `count == 1`.
///
/// `plural_form` defaults to `singular` with an `s` appended.
pub fn plural(count: usize, singular: &str, plural_form: Option<&str>) -> String {
    if count == 1 {
        return format!("{count} {singular}");
    }
    match plural_form {
        Some(word) => format!("{count} {word}"),
        None => format!("{count} {singular}s"),
    }
}
