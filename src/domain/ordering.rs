use std::collections::HashMap;
use std::hash::Hash;

/// Re-sequences a collection to follow an explicit order of ids
///
/// For each id in `ordered_ids`, in order, the first item whose key equals
/// that id is cloned into the result. Ids with no matching item are skipped,
/// and items whose id is not listed are dropped: the order array is the
/// single source of truth for both membership and order.
///
/// When `ordered_ids` is `None` or empty the collection is returned as-is,
/// which lets partially populated data still render.
///
/// # Arguments
/// * `items` - The unordered collection
/// * `ordered_ids` - Desired order of ids, if any
/// * `key` - Extracts the id from an item
///
/// # Examples
/// ```
/// use taskboard_core::domain::ordering::map_order;
///
/// let items = vec![("b", 2), ("a", 1), ("c", 3)];
/// let order = ["a", "b", "c"];
///
/// let ordered = map_order(&items, Some(&order[..]), |item| &item.0);
/// assert_eq!(ordered, vec![("a", 1), ("b", 2), ("c", 3)]);
/// ```
pub fn map_order<T, K, F>(items: &[T], ordered_ids: Option<&[K]>, key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> &K,
{
    let ordered_ids = match ordered_ids {
        Some(ids) if !ids.is_empty() => ids,
        _ => return items.to_vec(),
    };

    let mut by_id: HashMap<&K, &T> = HashMap::with_capacity(items.len());
    for item in items {
        by_id.entry(key(item)).or_insert(item);
    }

    let ordered: Vec<T> = ordered_ids
        .iter()
        .filter_map(|id| by_id.get(id).map(|item| (*item).clone()))
        .collect();

    if ordered.len() != items.len() {
        tracing::trace!(
            items = items.len(),
            ordered = ordered.len(),
            "order array and collection disagree on membership"
        );
    }

    ordered
}

/// Checks that `ordered_ids` lists every item's id exactly once
pub fn is_permutation<T, K, F>(items: &[T], ordered_ids: &[K], key: F) -> bool
where
    K: Eq + Hash,
    F: Fn(&T) -> &K,
{
    if items.len() != ordered_ids.len() {
        return false;
    }

    let mut counts: HashMap<&K, isize> = HashMap::with_capacity(items.len());
    for item in items {
        *counts.entry(key(item)).or_default() += 1;
    }
    for id in ordered_ids {
        *counts.entry(id).or_default() -= 1;
    }

    counts.values().all(|count| *count == 0) && counts.len() == items.len()
}
