//! The [`Record`] trait shared by all name-keyed entity records.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::name::{EntityKind, UniqueName};

/// A name-keyed entity record stored in a normalized table
///
/// Records are payload-shaped: every optional server field is an `Option`
/// (or an empty collection), and fields the schema does not know about are
/// retained in a flattened `extra` map so normalization never loses input.
///
/// Merging follows the partial-update contract: a patch overlays only the
/// fields it provides. `None` and empty relation lists mean "not provided"
/// and preserve whatever an earlier action populated.
pub trait Record: Clone + std::fmt::Debug + Serialize + DeserializeOwned {
    /// Entity kind of this record type
    const KIND: EntityKind;

    /// Primary key into the store
    fn unique_name(&self) -> &UniqueName;

    /// Soft-delete flag (absent counts as live)
    fn deleted(&self) -> bool;

    /// Set the soft-delete flag
    fn set_deleted(&mut self, deleted: bool);

    /// Set the bookmark flag
    ///
    /// Default is a no-op for kinds that are not bookmarkable.
    fn set_bookmarked(&mut self, _bookmarked: bool) {}

    /// Overlay the fields provided by `patch` onto this record
    fn merge_from(&mut self, patch: Self);
}

/// Overlay one field: a provided (`Some`) patch value replaces the base
#[inline]
pub fn overlay<T>(base: &mut Option<T>, patch: Option<T>) {
    if patch.is_some() {
        *base = patch;
    }
}

/// Overlay a relation list: an empty patch list means "not provided"
#[inline]
pub fn overlay_list<T>(base: &mut Vec<T>, patch: Vec<T>) {
    if !patch.is_empty() {
        *base = patch;
    }
}

/// Overlay unrecognized payload fields key by key
#[inline]
pub fn overlay_extra(base: &mut Map<String, Value>, patch: Map<String, Value>) {
    for (key, value) in patch {
        base.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn overlay_keeps_base_when_absent() {
        let mut base = Some(1);
        overlay(&mut base, None);
        assert_eq!(base, Some(1));
    }

    #[test]
    fn overlay_replaces_when_provided() {
        let mut base = Some(1);
        overlay(&mut base, Some(2));
        assert_eq!(base, Some(2));
    }

    #[test]
    fn overlay_list_keeps_base_when_empty() {
        let mut base = vec!["a"];
        overlay_list(&mut base, Vec::new());
        assert_eq!(base, vec!["a"]);

        overlay_list(&mut base, vec!["b", "c"]);
        assert_eq!(base, vec!["b", "c"]);
    }

    #[test]
    fn overlay_extra_merges_per_key() {
        let mut base = Map::new();
        base.insert("kept".to_string(), json!(1));
        base.insert("replaced".to_string(), json!("old"));

        let mut patch = Map::new();
        patch.insert("replaced".to_string(), json!("new"));
        patch.insert("added".to_string(), json!(true));

        overlay_extra(&mut base, patch);
        assert_eq!(base.get("kept"), Some(&json!(1)));
        assert_eq!(base.get("replaced"), Some(&json!("new")));
        assert_eq!(base.get("added"), Some(&json!(true)));
    }
}
