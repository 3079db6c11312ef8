//! Selection set

use super::item::ItemId;

/// Ordered set of selected item ids
///
/// Keeps insertion order so the selection can be shown (and sent) in the
/// order the user picked items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<ItemId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the id if absent, remove it if present.
    ///
    /// Returns `true` when the id is selected afterwards.
    pub fn toggle(&mut self, id: &ItemId) -> bool {
        if let Some(pos) = self.ids.iter().position(|selected| selected == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.clone());
            true
        }
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.ids.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemId> {
        self.ids.iter()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = Selection::new();
        let id = ItemId::from("item-1");

        assert!(selection.toggle(&id));
        assert!(selection.contains(&id));
        assert!(!selection.toggle(&id));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut selection = Selection::new();
        selection.toggle(&ItemId::from("item-a"));
        selection.toggle(&ItemId::from("item-b"));
        let before = selection.clone();

        let id = ItemId::from("item-c");
        selection.toggle(&id);
        selection.toggle(&id);
        assert_eq!(selection, before);

        let id = ItemId::from("item-a");
        selection.toggle(&id);
        selection.toggle(&id);
        // order changes when an existing id is re-added, membership does not
        let mut members: Vec<_> = selection.iter().cloned().collect();
        members.sort();
        assert_eq!(members, vec![ItemId::from("item-a"), ItemId::from("item-b")]);
    }

    #[test]
    fn test_preserves_insertion_order() {
        let mut selection = Selection::new();
        for id in ["item-3", "item-1", "item-2"] {
            selection.toggle(&ItemId::from(id));
        }
        let order: Vec<_> = selection.iter().map(|id| id.as_str()).collect();
        assert_eq!(order, vec!["item-3", "item-1", "item-2"]);
    }
}
