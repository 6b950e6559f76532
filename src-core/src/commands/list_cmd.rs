//! List Commands
//!
//! Discrete input actions forwarded by the presentation layer, applied to the
//! selected item of a list.

use crate::domain::{HierarchicalList, HierarchyOperations, PositioningOperations, Priority};

const DEFAULT_TASK_TEXT: &str = "New Task";
const DEFAULT_SUBTASK_TEXT: &str = "New Subtask";

/// A single user action on the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectPrevious,
    SelectNext,
    SelectParent,
    SelectFirstChild,
    Toggle,
    Remove,
    SetPriority(Priority),
    /// Due date in seconds since the epoch, 0 clears it
    SetDueDate(i64),
    /// Append a top-level item and move the cursor forward
    AddItem(String),
    /// Insert a last child under the selected item and select it
    AddSubtask(String),
    MoveUp,
    MoveDown,
}

impl Action {
    /// Whether the action can change stored item data
    pub fn is_mutation(&self) -> bool {
        !matches!(
            self,
            Action::SelectPrevious
                | Action::SelectNext
                | Action::SelectParent
                | Action::SelectFirstChild
        )
    }
}

/// Apply an action to the list. Returns whether the action was handled.
pub fn dispatch(list: &mut HierarchicalList, action: Action) -> bool {
    log::debug!("Dispatching {:?} at {}", action, list.selected_index());
    let selected = list.selected_index();

    match action {
        Action::SelectPrevious => list.select_previous(),
        Action::SelectNext => list.select_next(),
        Action::SelectParent => list.select_parent(),
        Action::SelectFirstChild => list.select_first_child(),
        Action::Toggle => on_selection(list, |list| list.toggle_item(selected)),
        Action::Remove => on_selection(list, |list| list.remove_item(selected)),
        Action::SetPriority(priority) => {
            on_selection(list, |list| list.change_priority(selected, priority))
        }
        Action::SetDueDate(due_date) => {
            on_selection(list, |list| list.set_due_date(selected, due_date))
        }
        Action::MoveUp => on_selection(list, |list| list.move_item_up(selected)),
        Action::MoveDown => on_selection(list, |list| list.move_item_down(selected)),
        Action::AddItem(text) => {
            list.add_item(text_or(text, DEFAULT_TASK_TEXT), 0, Priority::None);
            list.select_next();
            true
        }
        Action::AddSubtask(text) => {
            let Some(parent) = list.selected_item() else {
                return false;
            };
            let level = parent.nest_level + 1;
            // After the parent's existing descendants
            let index = list.subtree_range(selected).end;
            list.insert_item(index, text_or(text, DEFAULT_SUBTASK_TEXT), level, Priority::None);
            list.select(index)
        }
    }
}

fn on_selection(list: &mut HierarchicalList, f: impl FnOnce(&mut HierarchicalList)) -> bool {
    if list.is_empty() {
        return false;
    }
    f(list);
    true
}

fn text_or(text: String, fallback: &str) -> String {
    if text.trim().is_empty() {
        fallback.to_string()
    } else {
        text
    }
}
