//! Normalized table state
//!
//! One [`EntityTable`] per name-keyed entity kind, plus the id-keyed
//! [`StatusTable`]. Tables are plain values; reducers consume a table and
//! return the next one.

use indexmap::IndexMap;
use mlboard_entity::{Record, StatusRecord, UniqueName};

/// Transient view of the most recent list query
///
/// Distinct from the accumulated `unique_names`: it holds only the names
/// returned by the latest fetch plus the total count the server reported.
/// When two fetches race, the later arrival unconditionally overwrites
/// this value (last-write-wins); callers that need ordering must
/// serialize their own fetches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LastFetched {
    /// Names returned by the latest fetch, in response order
    pub names: Vec<UniqueName>,
    /// Total result count reported by the server
    pub count: u64,
}

/// Normalized store slice of one entity kind
///
/// Invariants upheld by the reducers:
/// - every name in `unique_names` and `last_fetched.names` has an entry
///   in `by_unique_name`;
/// - `unique_names` contains no duplicates;
/// - deleted records stay in `by_unique_name` and only leave
///   `unique_names`.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityTable<R: Record> {
    /// Records keyed by unique name; never shrinks
    pub by_unique_name: IndexMap<UniqueName, R>,
    /// All known live names, in first-seen order
    pub unique_names: Vec<UniqueName>,
    /// Latest list query result
    pub last_fetched: LastFetched,
}

impl<R: Record> EntityTable<R> {
    /// Create an empty table
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record stored under `name`, if any (deleted records included)
    #[inline]
    #[must_use]
    pub fn get(&self, name: &UniqueName) -> Option<&R> {
        self.by_unique_name.get(name)
    }

    /// Whether `name` is a live list member
    #[inline]
    #[must_use]
    pub fn is_listed(&self, name: &UniqueName) -> bool {
        self.unique_names.contains(name)
    }

    /// Number of records in the table, deleted ones included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_unique_name.len()
    }

    /// Whether the table holds no records
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_unique_name.is_empty()
    }
}

impl<R: Record> Default for EntityTable<R> {
    fn default() -> Self {
        Self {
            by_unique_name: IndexMap::new(),
            unique_names: Vec::new(),
            last_fetched: LastFetched::default(),
        }
    }
}

/// Append `name` unless the sequence already contains it
///
/// The idempotent-insert rule shared by every reducer: overlapping
/// fetches must not produce duplicate list entries.
pub(crate) fn push_unique(names: &mut Vec<UniqueName>, name: &UniqueName) {
    if !names.contains(name) {
        names.push(name.clone());
    }
}

/// Latest status list query result (id-keyed counterpart of [`LastFetched`])
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LastFetchedIds {
    /// Ids returned by the latest fetch, in response order
    pub ids: Vec<i64>,
    /// Total result count reported by the server
    pub count: u64,
}

/// Store slice for run statuses, keyed by numeric id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusTable {
    /// Status records keyed by server id
    pub by_id: IndexMap<i64, StatusRecord>,
    /// All known ids, in first-seen order
    pub ids: Vec<i64>,
    /// Latest list query result
    pub last_fetched: LastFetchedIds,
}

impl StatusTable {
    /// Create an empty table
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Status stored under `id`, if any
    #[inline]
    #[must_use]
    pub fn get(&self, id: i64) -> Option<&StatusRecord> {
        self.by_id.get(&id)
    }
}
