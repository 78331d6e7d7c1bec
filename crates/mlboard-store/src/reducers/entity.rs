//! Generic reducer for name-keyed entity tables
//!
//! One transition function serves every name-keyed kind; the store
//! instantiates it per table. All arms are total: malformed input cannot
//! reach this layer (normalization rejects it upstream).

use mlboard_entity::Record;

use crate::actions::EntityAction;
use crate::table::{push_unique, EntityTable, LastFetched};

/// Apply one action to an entity table, returning the next table
///
/// Transition semantics:
/// - `RequestList` resets `last_fetched` only;
/// - `ReceiveList` resets `last_fetched`, records the server count, then
///   upserts every item with idempotent name insertion;
/// - `Receive` upserts a single item under the same insertion rule;
/// - `Create` inserts without a duplicate check (callers must not
///   double-create);
/// - `Update` overlays provided fields, inserting when the record was
///   absent;
/// - `Delete` flags the record deleted and revokes only its list
///   presence;
/// - `Bookmark`/`Unbookmark` flip the bookmark flag when the record
///   exists.
#[must_use]
pub fn reduce<R: Record>(mut state: EntityTable<R>, action: &EntityAction<R>) -> EntityTable<R> {
    match action {
        EntityAction::RequestList => {
            state.last_fetched = LastFetched::default();
            state
        }
        EntityAction::ReceiveList { items, count } => {
            state.last_fetched = LastFetched {
                names: Vec::new(),
                count: *count,
            };
            for item in items {
                receive(&mut state, item);
            }
            state
        }
        EntityAction::Receive(item) => {
            receive(&mut state, item);
            state
        }
        EntityAction::Create(item) => {
            let name = item.unique_name().clone();
            state.by_unique_name.insert(name.clone(), item.clone());
            state.unique_names.push(name);
            state
        }
        EntityAction::Update(item) => {
            match state.by_unique_name.get_mut(item.unique_name()) {
                Some(existing) => existing.merge_from(item.clone()),
                None => {
                    state
                        .by_unique_name
                        .insert(item.unique_name().clone(), item.clone());
                }
            }
            state
        }
        EntityAction::Delete(name) => {
            if let Some(record) = state.by_unique_name.get_mut(name) {
                record.set_deleted(true);
            }
            state.unique_names.retain(|known| known != name);
            state
        }
        EntityAction::Bookmark(name) => {
            if let Some(record) = state.by_unique_name.get_mut(name) {
                record.set_bookmarked(true);
            }
            state
        }
        EntityAction::Unbookmark(name) => {
            if let Some(record) = state.by_unique_name.get_mut(name) {
                record.set_bookmarked(false);
            }
            state
        }
    }
}

// Shared upsert path for Receive and ReceiveList: track the name in both
// sequences idempotently, then merge into the record table.
fn receive<R: Record>(state: &mut EntityTable<R>, item: &R) {
    let name = item.unique_name().clone();
    push_unique(&mut state.last_fetched.names, &name);
    push_unique(&mut state.unique_names, &name);
    match state.by_unique_name.get_mut(&name) {
        Some(existing) => existing.merge_from(item.clone()),
        None => {
            state.by_unique_name.insert(name, item.clone());
        }
    }
}
