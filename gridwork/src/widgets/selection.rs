//! Shared selection types for the data grid.

use std::collections::{HashMap, HashSet};
use std::fmt;

/// Selection mode for the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// No selection controls rendered.
    #[default]
    None,
    /// Single row selection (radio indicator, display only).
    Single,
    /// Multiple rows can be selected (checkbox per row plus select-all).
    Multi,
}

/// Stable key for a row.
///
/// Rows with a unique id are keyed by it; rows without an id, or whose id
/// appears more than once, fall back to their position. Index keys survive
/// nothing: any resync that reorders rows reassigns them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowKey {
    /// The row's declared id.
    Id(String),
    /// Position fallback for rows without a usable id.
    Index(usize),
}

impl RowKey {
    /// The declared id, if this key carries one.
    pub fn id(&self) -> Option<&str> {
        match self {
            RowKey::Id(id) => Some(id),
            RowKey::Index(_) => None,
        }
    }
}

/// Textual form used in element ids and event payloads: the id itself,
/// or `#3` for an index key.
impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Id(id) => write!(f, "{id}"),
            RowKey::Index(i) => write!(f, "#{i}"),
        }
    }
}

/// Assign a key to each row from its optional id.
///
/// A row gets `RowKey::Id` only when its id is present and unique across the
/// whole batch. Absent ids fall back to `RowKey::Index`, and so does every
/// row sharing a duplicated id, so that no two rows ever collide on a key.
pub fn assign_keys<'a>(ids: impl IntoIterator<Item = Option<&'a str>>) -> Vec<RowKey> {
    let ids: Vec<Option<&str>> = ids.into_iter().collect();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for id in ids.iter().flatten() {
        *counts.entry(id).or_default() += 1;
    }

    let mut warned: HashSet<&str> = HashSet::new();
    ids.iter()
        .enumerate()
        .map(|(i, id)| match id {
            Some(id) if counts.get(id) == Some(&1) => RowKey::Id((*id).to_string()),
            Some(id) => {
                if warned.insert(id) {
                    log::warn!("[selection] duplicate row id {id:?}, using index keys for those rows");
                }
                RowKey::Index(i)
            }
            None => RowKey::Index(i),
        })
        .collect()
}

/// Tracks selected rows plus the select-all flag.
///
/// The select-all flag is kept equal to the conjunction of the per-row flags
/// after every mutation. With no rows at all there is no conjunction to
/// follow, so only `toggle_all` moves the flag.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    selected: HashSet<RowKey>,
    select_all: bool,
}

impl SelectionSet {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a key is selected.
    pub fn is_selected(&self, key: &RowKey) -> bool {
        self.selected.contains(key)
    }

    /// The select-all flag.
    pub fn all_selected(&self) -> bool {
        self.select_all
    }

    /// Number of selected rows.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if no row is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Iterate the selected keys (unordered).
    pub fn selected_keys(&self) -> impl Iterator<Item = &RowKey> {
        self.selected.iter()
    }

    /// Flip the select-all flag and drive every row flag to match.
    /// Returns the new flag value.
    pub fn toggle_all(&mut self, keys: &[RowKey]) -> bool {
        self.select_all = !self.select_all;
        if self.select_all {
            self.selected = keys.iter().cloned().collect();
        } else {
            self.selected.clear();
        }
        self.select_all
    }

    /// Flip one row's flag, then recompute select-all from the row flags.
    /// Returns the row's new flag value.
    pub fn toggle(&mut self, key: RowKey, keys: &[RowKey]) -> bool {
        let now_selected = if self.selected.contains(&key) {
            self.selected.remove(&key);
            false
        } else {
            self.selected.insert(key);
            true
        };
        self.recompute_all(keys);
        now_selected
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.select_all = false;
    }

    /// Resync against a fresh key assignment: flags for id-keyed rows that
    /// are still present survive, positional flags are dropped (a position
    /// may now name a different row), and select-all is recomputed.
    pub fn resync(&mut self, keys: &[RowKey]) {
        let keep: HashSet<&RowKey> = keys.iter().filter(|k| k.id().is_some()).collect();
        self.selected.retain(|k| keep.contains(k));
        self.recompute_all(keys);
    }

    fn recompute_all(&mut self, keys: &[RowKey]) {
        self.select_all = !keys.is_empty() && keys.iter().all(|k| self.selected.contains(k));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(n: usize) -> Vec<RowKey> {
        (0..n).map(RowKey::Index).collect()
    }

    #[test]
    fn test_assign_keys_unique_ids() {
        let assigned = assign_keys([Some("a"), Some("b"), Some("c")]);
        assert_eq!(
            assigned,
            vec![
                RowKey::Id("a".to_string()),
                RowKey::Id("b".to_string()),
                RowKey::Id("c".to_string()),
            ]
        );
    }

    #[test]
    fn test_assign_keys_missing_ids_use_index() {
        let assigned = assign_keys([Some("a"), None, Some("c")]);
        assert_eq!(assigned[1], RowKey::Index(1));
        assert_eq!(assigned[0], RowKey::Id("a".to_string()));
    }

    #[test]
    fn test_assign_keys_duplicates_all_demoted() {
        let assigned = assign_keys([Some("dup"), Some("b"), Some("dup")]);
        assert_eq!(assigned[0], RowKey::Index(0));
        assert_eq!(assigned[1], RowKey::Id("b".to_string()));
        assert_eq!(assigned[2], RowKey::Index(2));
    }

    #[test]
    fn test_row_key_display() {
        assert_eq!(RowKey::Id("r1".to_string()).to_string(), "r1");
        assert_eq!(RowKey::Index(3).to_string(), "#3");
    }

    #[test]
    fn test_toggle_all_selects_and_deselects() {
        let keys = keys(3);
        let mut set = SelectionSet::new();

        assert!(set.toggle_all(&keys));
        assert!(set.all_selected());
        assert_eq!(set.len(), 3);

        assert!(!set.toggle_all(&keys));
        assert!(!set.all_selected());
        assert!(set.is_empty());
    }

    #[test]
    fn test_select_all_follows_row_flags() {
        let keys = keys(2);
        let mut set = SelectionSet::new();

        assert!(set.toggle(keys[0].clone(), &keys));
        assert!(!set.all_selected());

        assert!(set.toggle(keys[1].clone(), &keys));
        assert!(set.all_selected());

        assert!(!set.toggle(keys[0].clone(), &keys));
        assert!(!set.all_selected());
    }

    #[test]
    fn test_toggle_all_on_empty_flips_flag_only() {
        let mut set = SelectionSet::new();
        assert!(set.toggle_all(&[]));
        assert!(set.all_selected());
        assert!(set.is_empty());
        assert!(!set.toggle_all(&[]));
    }

    #[test]
    fn test_resync_keeps_id_flags_drops_positional() {
        let before = vec![
            RowKey::Id("a".to_string()),
            RowKey::Id("b".to_string()),
            RowKey::Index(2),
        ];
        let mut set = SelectionSet::new();
        set.toggle_all(&before);
        assert_eq!(set.len(), 3);

        // Row "b" is gone, the unkeyed row moved; only "a" survives.
        let after = vec![RowKey::Id("a".to_string()), RowKey::Index(1)];
        set.resync(&after);
        assert_eq!(set.len(), 1);
        assert!(set.is_selected(&RowKey::Id("a".to_string())));
        assert!(!set.is_selected(&RowKey::Index(1)));
        assert!(!set.all_selected());
    }

    #[test]
    fn test_resync_recomputes_select_all() {
        let before = vec![RowKey::Id("a".to_string()), RowKey::Id("b".to_string())];
        let mut set = SelectionSet::new();
        set.toggle(before[0].clone(), &before);
        assert!(!set.all_selected());

        // After the resync only "a" remains, and it is selected.
        let after = vec![RowKey::Id("a".to_string())];
        set.resync(&after);
        assert!(set.all_selected());
    }

    #[test]
    fn test_resync_to_empty_clears_flag() {
        let all = keys(2);
        let mut set = SelectionSet::new();
        set.toggle_all(&all);
        set.resync(&[]);
        assert!(!set.all_selected());
        assert!(set.is_empty());
    }
}
