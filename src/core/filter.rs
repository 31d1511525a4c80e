// Unibox - core/filter.rs
//
// Free-text search and categorical counting over in-memory record lists.
// Every screen calls into this module with its own field accessors.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{Contact, Conversation, Notification, SmartFilter, TopContact};
use crate::core::settings::ConnectedAccount;
use std::collections::HashMap;
use std::hash::Hash;

/// Accessor for one searchable text field of a record.
pub type FieldSelector<R> = fn(&R) -> &str;

/// Record types with a default set of searchable fields.
pub trait Searchable: Sized + 'static {
    /// Fields matched by [`filter_records`], in the order they are tried.
    const SEARCH_FIELDS: &'static [FieldSelector<Self>];
}

impl Searchable for Conversation {
    const SEARCH_FIELDS: &'static [FieldSelector<Self>] = &[Self::contact_name, Self::preview];
}

impl Searchable for Contact {
    const SEARCH_FIELDS: &'static [FieldSelector<Self>] = &[Self::name, Self::channel];
}

impl Searchable for SmartFilter {
    const SEARCH_FIELDS: &'static [FieldSelector<Self>] = &[Self::name, Self::description];
}

impl Searchable for Notification {
    const SEARCH_FIELDS: &'static [FieldSelector<Self>] = &[Self::sender, Self::message];
}

impl Searchable for TopContact {
    const SEARCH_FIELDS: &'static [FieldSelector<Self>] = &[Self::name, Self::platform_label];
}

impl Searchable for ConnectedAccount {
    const SEARCH_FIELDS: &'static [FieldSelector<Self>] = &[Self::platform_label, Self::handle];
}

/// Matching records together with per-category counts over them.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterResult<'a, R, K: Eq + Hash> {
    /// Matching records in input order.
    pub records: Vec<&'a R>,

    /// Category value -> number of matching records. Zero counts are absent.
    pub counts: HashMap<K, usize>,
}

impl<R, K: Eq + Hash> FilterResult<'_, R, K> {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Count for one category, 0 when absent.
    pub fn count(&self, category: &K) -> usize {
        self.counts.get(category).copied().unwrap_or(0)
    }
}

/// Trim and lowercase a raw query. An empty result means "no filter".
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Return the records whose selected fields contain `query`.
///
/// Matching is a case-insensitive substring test against each field in
/// turn; a record matches if any field does. An empty or whitespace-only
/// query returns every record. Input order is preserved.
pub fn filter<'a, R>(records: &'a [R], query: &str, fields: &[FieldSelector<R>]) -> Vec<&'a R> {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|&record| matches_any(record, &needle, fields))
        .collect()
}

/// Like [`filter`], but returns indices into `records`.
///
/// List views keep these so a selection survives re-filtering.
pub fn filter_indices<R>(records: &[R], query: &str, fields: &[FieldSelector<R>]) -> Vec<usize> {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return (0..records.len()).collect();
    }

    records
        .iter()
        .enumerate()
        .filter(|&(_, record)| matches_any(record, &needle, fields))
        .map(|(idx, _)| idx)
        .collect()
}

/// [`filter`] using the record type's default search fields.
pub fn filter_records<'a, R: Searchable>(records: &'a [R], query: &str) -> Vec<&'a R> {
    filter(records, query, R::SEARCH_FIELDS)
}

/// Count records per category value in a single pass.
///
/// Categories that never occur are absent from the map rather than
/// present with a zero count.
pub fn count_by_category<'a, R, K, I, F>(records: I, category: F) -> HashMap<K, usize>
where
    R: 'a,
    K: Eq + Hash,
    I: IntoIterator<Item = &'a R>,
    F: Fn(&R) -> K,
{
    let mut counts = HashMap::new();
    for record in records {
        *counts.entry(category(record)).or_insert(0) += 1;
    }
    counts
}

/// Filter, then count the matches by category.
pub fn filter_and_count<'a, R, K, F>(
    records: &'a [R],
    query: &str,
    fields: &[FieldSelector<R>],
    category: F,
) -> FilterResult<'a, R, K>
where
    K: Eq + Hash,
    F: Fn(&R) -> K,
{
    let records = filter(records, query, fields);
    let counts = count_by_category(records.iter().copied(), category);
    FilterResult { records, counts }
}

/// Check if any selected field contains the already-normalised needle.
fn matches_any<R>(record: &R, needle: &str, fields: &[FieldSelector<R>]) -> bool {
    fields
        .iter()
        .any(|field| field(record).to_lowercase().contains(needle))
}
