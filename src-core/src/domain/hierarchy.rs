//! Item Hierarchy Operations
//!
//! Tree-aware scans over the flat list. The subtree of an item is the item
//! plus the run of following items that are strictly deeper than it.

use std::ops::Range;

use super::list::HierarchicalList;

/// Trait for hierarchy operations on a depth-annotated list
pub trait HierarchyOperations {
    /// Index range covering the item at `index` and its descendants.
    /// Empty when `index` is out of range.
    fn subtree_range(&self, index: usize) -> Range<usize>;

    /// Nearest preceding item that is shallower than the item at `index`
    fn parent_of(&self, index: usize) -> Option<usize>;

    /// Nearest preceding item at the same depth without crossing a shallower item
    fn previous_sibling(&self, index: usize) -> Option<usize>;

    /// Start of the next subtree at the same depth, if it directly follows
    fn next_sibling(&self, index: usize) -> Option<usize>;

    fn has_children(&self, index: usize) -> bool;

    /// Select the parent of the selected item
    fn select_parent(&mut self) -> bool;

    /// Select the first child of the selected item
    fn select_first_child(&mut self) -> bool;

    /// First item at depth 0 and no step deeper than one level
    fn is_well_formed(&self) -> bool;
}

impl HierarchyOperations for HierarchicalList {
    fn subtree_range(&self, index: usize) -> Range<usize> {
        let Some(root) = self.items.get(index) else {
            return index..index;
        };

        let mut end = index + 1;
        while end < self.items.len() && self.items[end].nest_level > root.nest_level {
            end += 1;
        }
        index..end
    }

    fn parent_of(&self, index: usize) -> Option<usize> {
        let level = self.items.get(index)?.nest_level;
        if level == 0 {
            return None;
        }
        (0..index).rev().find(|&i| self.items[i].nest_level < level)
    }

    fn previous_sibling(&self, index: usize) -> Option<usize> {
        let level = self.items.get(index)?.nest_level;
        for i in (0..index).rev() {
            let other = self.items[i].nest_level;
            if other == level {
                return Some(i);
            }
            if other < level {
                return None;
            }
        }
        None
    }

    fn next_sibling(&self, index: usize) -> Option<usize> {
        let level = self.items.get(index)?.nest_level;
        let end = self.subtree_range(index).end;
        match self.items.get(end) {
            Some(item) if item.nest_level == level => Some(end),
            _ => None,
        }
    }

    fn has_children(&self, index: usize) -> bool {
        self.subtree_range(index).len() > 1
    }

    fn select_parent(&mut self) -> bool {
        match self.parent_of(self.selected_index) {
            Some(parent) => {
                self.selected_index = parent;
                true
            }
            None => false,
        }
    }

    fn select_first_child(&mut self) -> bool {
        if self.has_children(self.selected_index) {
            self.selected_index += 1;
            true
        } else {
            false
        }
    }

    fn is_well_formed(&self) -> bool {
        match self.items.first() {
            None => true,
            Some(first) if first.nest_level != 0 => false,
            Some(_) => self
                .items
                .windows(2)
                .all(|pair| pair[1].nest_level <= pair[0].nest_level + 1),
        }
    }
}
