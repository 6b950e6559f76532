//! Item Positioning Operations
//!
//! Reordering swaps whole sibling subtrees so descendants always travel with
//! their parent.

use super::hierarchy::HierarchyOperations;
use super::list::HierarchicalList;

/// Trait for item positioning operations
pub trait PositioningOperations {
    /// Swap the subtree at `index` with the preceding sibling subtree
    fn move_item_up(&mut self, index: usize);

    /// Swap the subtree at `index` with the following sibling subtree
    fn move_item_down(&mut self, index: usize);
}

impl PositioningOperations for HierarchicalList {
    fn move_item_up(&mut self, index: usize) {
        if index == 0 || index >= self.items.len() {
            return;
        }
        let Some(prev) = self.previous_sibling(index) else {
            return;
        };

        // The sibling's subtree is exactly prev..index
        let end = self.subtree_range(index).end;
        self.items[prev..end].rotate_left(index - prev);
        self.selected_index = prev;
        log::debug!("Moved subtree {}..{} up to {}", index, end, prev);
    }

    fn move_item_down(&mut self, index: usize) {
        if index + 1 >= self.items.len() {
            return;
        }
        let Some(next) = self.next_sibling(index) else {
            return;
        };

        let next_end = self.subtree_range(next).end;
        self.items[index..next_end].rotate_left(next - index);
        self.selected_index = index + (next_end - next);
        log::debug!("Moved subtree at {} down to {}", index, self.selected_index);
    }
}
