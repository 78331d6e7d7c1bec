//! Store projections for views
//!
//! Selectors read the normalized store and project it into the shape a
//! view needs. The latest fetch (`last_fetched`) is the single source of
//! truth for list views; stale names surface as `None`, never as errors.

use mlboard_entity::{Record, StatusRecord, UniqueName};
use mlboard_store::{EntityTable, StatusTable};

/// Latest-fetch projection of a table
///
/// Items come back in response order. A name whose record is not loaded
/// (or was never loaded) yields `None` so the view can render a loading
/// or empty state.
#[must_use]
pub fn select_last_fetched<R: Record>(table: &EntityTable<R>) -> (Vec<Option<R>>, u64) {
    let items = table
        .last_fetched
        .names
        .iter()
        .map(|name| table.get(name).cloned())
        .collect();
    (items, table.last_fetched.count)
}

/// Detail projection of one record
///
/// Membership-gated: a record that is in the table but no longer listed
/// (soft-deleted) reads as absent.
#[must_use]
pub fn select_detail<'a, R: Record>(
    table: &'a EntityTable<R>,
    name: &UniqueName,
) -> Option<&'a R> {
    if table.is_listed(name) {
        table.get(name)
    } else {
        None
    }
}

/// Latest-fetch projection of the status table
#[must_use]
pub fn select_statuses(table: &StatusTable) -> (Vec<Option<StatusRecord>>, u64) {
    let items = table
        .last_fetched
        .ids
        .iter()
        .map(|id| table.get(*id).cloned())
        .collect();
    (items, table.last_fetched.count)
}
