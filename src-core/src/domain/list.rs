//! Hierarchical List
//!
//! An ordered sequence of items where each item's nesting depth encodes the
//! tree. Tree-aware scans live in `hierarchy`, reordering in `positioning`.
//!
//! Every mutator taking an index is a silent no-op when the index is out of
//! range.

use chrono::{DateTime, Utc};

use super::entity::Entity;
use super::hierarchy::HierarchyOperations;
use super::item::{Item, ItemId, Priority};

/// Flat, depth-annotated to-do list with a selection cursor
#[derive(Debug, Clone, Default)]
pub struct HierarchicalList {
    pub(super) items: Vec<Item>,
    /// Valid iff `items` is non-empty, 0 otherwise
    pub(super) selected_index: usize,
    next_id: u32,
}

impl HierarchicalList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item at the end of the list.
    ///
    /// The caller keeps the list well-formed by passing `0` or a depth at most
    /// one deeper than the last item.
    pub fn add_item(
        &mut self,
        text: impl Into<String>,
        nest_level: u32,
        priority: Priority,
    ) -> ItemId {
        self.adopt(Item::new(text, nest_level, priority))
    }

    /// Insert an item before `index`, or append when `index` is past the end.
    ///
    /// The cursor keeps pointing at the item it pointed at. Well-formedness
    /// is the caller's concern, as with `add_item`.
    pub fn insert_item(
        &mut self,
        index: usize,
        text: impl Into<String>,
        nest_level: u32,
        priority: Priority,
    ) -> ItemId {
        let index = index.min(self.items.len());
        let mut item = Item::new(text, nest_level, priority);
        let id = self.issue_id();
        item.id = id;

        if index <= self.selected_index && !self.items.is_empty() {
            self.selected_index += 1;
        }
        self.items.insert(index, item);
        id
    }

    /// Remove the item at `index` together with its subtree
    pub fn remove_item(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }

        let range = self.subtree_range(index);
        let removed = range.len();
        self.items.drain(range);
        log::debug!("Removed {} item(s) starting at {}", removed, index);

        if self.selected_index >= self.items.len() {
            self.selected_index = self.items.len().saturating_sub(1);
        }
    }

    /// Flip completion of a single item; children are left alone
    pub fn toggle_item(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            item.completed = !item.completed;
        }
    }

    pub fn change_priority(&mut self, index: usize, priority: Priority) {
        if let Some(item) = self.items.get_mut(index) {
            item.priority = priority;
        }
    }

    /// Set the due date in seconds since the epoch, 0 clears it
    pub fn set_due_date(&mut self, index: usize, due_date: i64) {
        if let Some(item) = self.items.get_mut(index) {
            item.due_date = due_date;
        }
    }

    /// Move the cursor up one item, wrapping to the last.
    /// Returns false only when the list is empty.
    pub fn select_previous(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.selected_index = if self.selected_index > 0 {
            self.selected_index - 1
        } else {
            self.items.len() - 1
        };
        true
    }

    /// Move the cursor down one item, wrapping to the first.
    /// Returns false only when the list is empty.
    pub fn select_next(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.selected_index = if self.selected_index + 1 < self.items.len() {
            self.selected_index + 1
        } else {
            0
        };
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.items.get(self.selected_index)
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Current index of the item with the given id
    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    /// Open items past their due date, in list order
    pub fn overdue_items(&self, now: DateTime<Utc>) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(move |item| item.is_overdue(now))
    }

    /// Drop every item and reset the cursor. Issued ids are not reused.
    pub fn clear(&mut self) {
        self.items.clear();
        self.selected_index = 0;
    }

    /// Replace the whole sequence, issuing fresh ids and resetting the cursor
    pub fn replace_items(&mut self, items: impl IntoIterator<Item = Item>) {
        self.clear();
        for item in items {
            self.adopt(item);
        }
    }

    /// Jump the cursor to `index` if it names an item
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.selected_index = index;
            true
        } else {
            false
        }
    }

    fn issue_id(&mut self) -> ItemId {
        self.next_id += 1;
        ItemId(self.next_id)
    }

    fn adopt(&mut self, mut item: Item) -> ItemId {
        let id = self.issue_id();
        item.id = id;
        self.items.push(item);
        id
    }
}

impl<'a> IntoIterator for &'a HierarchicalList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Build a list from `(text, nest_level)` pairs
    pub(crate) fn list_of(entries: &[(&str, u32)]) -> HierarchicalList {
        let mut list = HierarchicalList::new();
        for (text, level) in entries {
            list.add_item(*text, *level, Priority::None);
        }
        list
    }

    pub(crate) fn shape(list: &HierarchicalList) -> Vec<(String, u32)> {
        list.iter().map(|i| (i.text.clone(), i.nest_level)).collect()
    }

    #[test]
    fn test_add_item_appends_with_defaults() {
        let mut list = HierarchicalList::new();
        let first = list.add_item("Buy milk", 0, Priority::None);
        let second = list.add_item("Whole milk", 1, Priority::High);

        assert_eq!(list.len(), 2);
        assert_ne!(first, second);
        let item = list.get(1).unwrap();
        assert_eq!(item.text, "Whole milk");
        assert_eq!(item.nest_level, 1);
        assert_eq!(item.priority, Priority::High);
        assert!(!item.completed);
        assert_eq!(item.due_date, 0);
        assert_eq!(list.position_of(second), Some(1));
    }

    #[test]
    fn test_remove_item_takes_subtree() {
        let mut list = list_of(&[("A", 0), ("B", 1), ("C", 2), ("D", 0)]);
        list.remove_item(0);
        assert_eq!(shape(&list), vec![("D".to_string(), 0)]);
    }

    #[test]
    fn test_remove_nested_item_keeps_siblings() {
        let mut list = list_of(&[("A", 0), ("B", 1), ("C", 2), ("E", 1), ("D", 0)]);
        list.remove_item(1);
        assert_eq!(
            shape(&list),
            vec![("A".to_string(), 0), ("E".to_string(), 1), ("D".to_string(), 0)]
        );
    }

    #[test]
    fn test_remove_clamps_selection() {
        let mut list = list_of(&[("A", 0), ("B", 0), ("C", 1)]);
        list.selected_index = 2;
        list.remove_item(1);
        assert_eq!(list.len(), 1);
        assert_eq!(list.selected_index(), 0);

        list.remove_item(0);
        assert!(list.is_empty());
        assert_eq!(list.selected_index(), 0);
    }

    #[test]
    fn test_remove_keeps_selection_in_range() {
        let mut list = list_of(&[("A", 0), ("B", 0), ("C", 0)]);
        list.selected_index = 0;
        list.remove_item(2);
        assert_eq!(list.selected_index(), 0);
    }

    #[test]
    fn test_out_of_range_mutators_are_noops() {
        let mut list = list_of(&[("A", 0), ("B", 1), ("C", 0)]);
        let before = list.items().to_vec();

        list.toggle_item(999);
        list.remove_item(999);
        list.change_priority(999, Priority::High);
        list.set_due_date(999, 42);

        assert_eq!(list.items(), before.as_slice());
    }

    #[test]
    fn test_toggle_does_not_cascade() {
        let mut list = list_of(&[("A", 0), ("B", 1)]);
        list.toggle_item(0);
        assert!(list.get(0).unwrap().completed);
        assert!(!list.get(1).unwrap().completed);
        assert_eq!(list.completed_count(), 1);

        list.toggle_item(0);
        assert!(!list.get(0).unwrap().completed);
    }

    #[test]
    fn test_change_priority() {
        let mut list = list_of(&[("A", 0)]);
        list.change_priority(0, Priority::Medium);
        assert_eq!(list.get(0).unwrap().priority, Priority::Medium);
    }

    #[test]
    fn test_overdue_items() {
        let now = DateTime::<Utc>::from_timestamp(1_000_000, 0).unwrap();
        let mut list = list_of(&[("A", 0), ("B", 1), ("C", 0), ("D", 0)]);
        list.set_due_date(0, 999_000);
        list.set_due_date(1, 2_000_000);
        list.set_due_date(2, 500_000);
        list.toggle_item(2);
        list.set_due_date(3, 10);

        let overdue: Vec<&str> = list.overdue_items(now).map(|i| i.text.as_str()).collect();
        assert_eq!(overdue, vec!["A", "D"]);
    }

    #[test]
    fn test_wraparound_navigation() {
        let mut list = list_of(&[("A", 0), ("B", 0), ("C", 0)]);
        assert!(list.select_previous());
        assert_eq!(list.selected_index(), 2);
        assert!(list.select_next());
        assert_eq!(list.selected_index(), 0);
        assert!(list.select_next());
        assert_eq!(list.selected_index(), 1);
    }

    #[test]
    fn test_navigation_on_empty_and_single() {
        let mut list = HierarchicalList::new();
        assert!(!list.select_next());
        assert!(!list.select_previous());
        assert_eq!(list.selected_index(), 0);
        assert!(list.selected_item().is_none());

        list.add_item("Only", 0, Priority::None);
        assert!(list.select_next());
        assert_eq!(list.selected_index(), 0);
        assert!(list.select_previous());
        assert_eq!(list.selected_index(), 0);
    }

    #[test]
    fn test_insert_item_keeps_cursor_on_its_item() {
        let mut list = list_of(&[("A", 0), ("B", 0), ("C", 0)]);
        list.selected_index = 1;

        let id = list.insert_item(1, "X", 0, Priority::Low);
        assert_eq!(list.position_of(id), Some(1));
        assert_eq!(list.selected_item().unwrap().text, "B");

        list.insert_item(4, "Y", 0, Priority::None);
        assert_eq!(list.selected_item().unwrap().text, "B");
        assert_eq!(list.get(4).unwrap().text, "Y");

        // Past the end appends
        list.insert_item(99, "Z", 0, Priority::None);
        assert_eq!(list.items().last().unwrap().text, "Z");
    }

    #[test]
    fn test_insert_into_empty_list() {
        let mut list = HierarchicalList::new();
        list.insert_item(0, "Only", 0, Priority::None);
        assert_eq!(list.len(), 1);
        assert_eq!(list.selected_index(), 0);
    }

    #[test]
    fn test_select_bounds() {
        let mut list = list_of(&[("A", 0), ("B", 0)]);
        assert!(list.select(1));
        assert_eq!(list.selected_index(), 1);
        assert!(!list.select(2));
        assert_eq!(list.selected_index(), 1);
    }

    #[test]
    fn test_replace_items_issues_fresh_ids() {
        let mut list = list_of(&[("A", 0), ("B", 0)]);
        let old_id = list.get(0).unwrap().id();
        list.selected_index = 1;

        list.replace_items(vec![Item::new("X", 0, Priority::Low)]);
        assert_eq!(list.len(), 1);
        assert_eq!(list.selected_index(), 0);
        assert_ne!(list.get(0).unwrap().id(), old_id);
        assert_eq!(list.position_of(old_id), None);
    }
}
