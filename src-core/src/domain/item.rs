//! Item Entity
//!
//! Represents one to-do entry. Hierarchy is not stored on the item itself
//! beyond its nesting depth; the owning list's order gives the tree shape.

use chrono::{DateTime, Utc};
use std::fmt;

use super::entity::Entity;

/// Process-local item identity, issued by the owning list.
///
/// Never persisted: a reload issues fresh ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Priority levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Priority {
    #[default]
    None,
    Low,
    Medium,
    High,
}

impl Priority {
    /// Numeric value used by the list file format
    pub fn as_i32(&self) -> i32 {
        match self {
            Priority::None => 0,
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }

    /// Out-of-range values fall back to `None`
    pub fn from_i32(value: i32) -> Self {
        match value {
            1 => Priority::Low,
            2 => Priority::Medium,
            3 => Priority::High,
            _ => Priority::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::None => "none",
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A to-do item
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Identity issued by the owning list
    pub(crate) id: ItemId,
    /// Item label
    pub text: String,
    /// Completion status
    pub completed: bool,
    /// Depth in the tree, 0 = top level
    pub nest_level: u32,
    pub priority: Priority,
    /// Seconds since the Unix epoch, 0 = unset
    pub due_date: i64,
}

impl Item {
    /// Create an item with default completion and no due date.
    ///
    /// The id stays at its default until a list adopts the item.
    pub fn new(text: impl Into<String>, nest_level: u32, priority: Priority) -> Self {
        Self {
            id: ItemId::default(),
            text: text.into(),
            completed: false,
            nest_level,
            priority,
            due_date: 0,
        }
    }

    pub fn is_top_level(&self) -> bool {
        self.nest_level == 0
    }

    pub fn has_due_date(&self) -> bool {
        self.due_date != 0
    }

    /// Due date as a UTC timestamp, `None` when unset or out of range
    pub fn due_date_utc(&self) -> Option<DateTime<Utc>> {
        if !self.has_due_date() {
            return None;
        }
        DateTime::<Utc>::from_timestamp(self.due_date, 0)
    }

    pub fn set_due_date(&mut self, when: Option<DateTime<Utc>>) {
        self.due_date = when.map(|t| t.timestamp()).unwrap_or(0);
    }

    /// Open and past its due date. Items without a due date are never overdue.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.completed && self.due_date_utc().is_some_and(|due| due < now)
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_item_creation() {
        let item = Item::new("Test item", 0, Priority::None);
        assert_eq!(item.text, "Test item");
        assert!(!item.completed);
        assert!(item.is_top_level());
        assert!(!item.has_due_date());
        assert_eq!(item.id(), ItemId::default());
    }

    #[test]
    fn test_child_item_creation() {
        let child = Item::new("Child", 2, Priority::High);
        assert_eq!(child.nest_level, 2);
        assert!(!child.is_top_level());
        assert_eq!(child.priority, Priority::High);
    }

    #[test]
    fn test_priority_numeric_mapping() {
        for p in [Priority::None, Priority::Low, Priority::Medium, Priority::High] {
            assert_eq!(Priority::from_i32(p.as_i32()), p);
        }
        assert_eq!(Priority::from_i32(-1), Priority::None);
        assert_eq!(Priority::from_i32(4), Priority::None);
        assert_eq!(Priority::Medium.to_string(), "medium");
    }

    #[test]
    fn test_due_date() {
        let mut item = Item::new("Pay rent", 0, Priority::Medium);
        assert_eq!(item.due_date_utc(), None);

        let when = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        item.set_due_date(Some(when));
        assert_eq!(item.due_date, when.timestamp());
        assert_eq!(item.due_date_utc(), Some(when));

        item.set_due_date(None);
        assert_eq!(item.due_date, 0);
    }

    #[test]
    fn test_overdue() {
        let now = DateTime::<Utc>::from_timestamp(1_745_280_000, 0).unwrap();
        let mut item = Item::new("Renew passport", 0, Priority::Medium);
        assert!(!item.is_overdue(now));

        item.due_date = 1_745_280_000 - 86_400;
        assert!(item.is_overdue(now));

        item.due_date = 1_745_280_000;
        assert!(!item.is_overdue(now));

        item.due_date = 1_745_280_000 - 1;
        item.completed = true;
        assert!(!item.is_overdue(now));
    }
}
