//! Exact-match partitioning by one or two attributes.

use std::collections::BTreeMap;

use groupforge_core::{Entry, GroupResult};
use tracing::debug;

#[cfg(test)]
mod tests;

/// Key used for entries whose attribute is missing or empty.
pub const UNKNOWN_KEY: &str = "Unknown";

/// Separator between the values of a two-field key.
pub const KEY_SEPARATOR: &str = " + ";

/// Builds the grouping key of an entry from the given fields.
///
/// # Example
///
/// ```
/// use groupforge_core::Entry;
/// use groupforge_solver::split::group_key;
///
/// let entry = Entry::new("u1").with("gender", "Male").with("age", 30.0);
///
/// assert_eq!(group_key(&entry, &["gender", "age"]), "Male + 30");
/// assert_eq!(group_key(&entry, &["city"]), "Unknown");
/// ```
pub fn group_key<S: AsRef<str>>(entry: &Entry, field_ids: &[S]) -> String {
    field_ids
        .iter()
        .map(|field| {
            entry
                .get(field.as_ref())
                .key_string()
                .unwrap_or_else(|| UNKNOWN_KEY.to_string())
        })
        .collect::<Vec<_>>()
        .join(KEY_SEPARATOR)
}

/// Splits entries into one group per distinct key.
///
/// Groups are named by their key and ordered lexicographically by it;
/// members keep input order.
pub fn split_by_attributes<S: AsRef<str>>(entries: &[Entry], field_ids: &[S]) -> Vec<GroupResult> {
    if entries.is_empty() || field_ids.is_empty() {
        return Vec::new();
    }

    let mut buckets: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for entry in entries {
        buckets
            .entry(group_key(entry, field_ids))
            .or_default()
            .push(entry.id().to_string());
    }

    debug!(
        event = "split_complete",
        entries = entries.len(),
        groups = buckets.len(),
    );

    buckets
        .into_iter()
        .map(|(key, members)| GroupResult::new(key, members))
        .collect()
}
