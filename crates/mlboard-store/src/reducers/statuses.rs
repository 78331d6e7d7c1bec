//! Reducer for the id-keyed status table

use mlboard_entity::StatusRecord;

use crate::actions::StatusAction;
use crate::table::{LastFetchedIds, StatusTable};

/// Apply one status action, returning the next table
///
/// Statuses never merge partially: a re-received status row replaces the
/// stored one wholesale (status rows are immutable server-side).
#[must_use]
pub fn reduce_statuses(mut state: StatusTable, action: &StatusAction) -> StatusTable {
    match action {
        StatusAction::RequestList => {
            state.last_fetched = LastFetchedIds::default();
            state
        }
        StatusAction::ReceiveList { items, count } => {
            state.last_fetched = LastFetchedIds {
                ids: Vec::new(),
                count: *count,
            };
            for item in items {
                receive(&mut state, item);
            }
            state
        }
        StatusAction::Receive(item) => {
            receive(&mut state, item);
            state
        }
    }
}

fn receive(state: &mut StatusTable, item: &StatusRecord) {
    if !state.last_fetched.ids.contains(&item.id) {
        state.last_fetched.ids.push(item.id);
    }
    if !state.ids.contains(&item.id) {
        state.ids.push(item.id);
    }
    state.by_id.insert(item.id, item.clone());
}
