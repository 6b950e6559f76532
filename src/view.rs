//! Text View
//!
//! Renders the list as indented text rows, one per item.

use chrono::{DateTime, Utc};
use tewduwu_core::{Entity, HierarchicalList, HierarchyOperations, Item, Priority};

use crate::glow::GlowTracker;

const INDENT: &str = "  ";

fn priority_badge(priority: Priority) -> &'static str {
    match priority {
        Priority::None => "   ",
        Priority::Low => "!  ",
        Priority::Medium => "!! ",
        Priority::High => "!!!",
    }
}

/// Map glow intensity onto a short bar
fn glow_bar(intensity: f32) -> &'static str {
    match intensity {
        i if i >= 0.75 => "***",
        i if i >= 0.4 => "** ",
        i if i >= 0.1 => "*  ",
        _ => "   ",
    }
}

/// One row for a single item
pub fn render_item(
    item: &Item,
    selected: bool,
    has_children: bool,
    glow: f32,
    now: DateTime<Utc>,
) -> String {
    let marker = if selected { '>' } else { ' ' };
    let check = if item.completed { "[x]" } else { "[ ]" };
    let fold = if has_children { '+' } else { ' ' };
    let indent = INDENT.repeat(item.nest_level as usize);

    let mut row = format!(
        "{marker}{glow} {indent}{fold}{check} {badge} {text}",
        glow = glow_bar(glow),
        badge = priority_badge(item.priority),
        text = item.text,
    );
    if let Some(due) = item.due_date_utc() {
        let label = if item.is_overdue(now) { "overdue" } else { "due" };
        row.push_str(&format!("  ({label} {})", due.format("%Y-%m-%d")));
    }
    row
}

/// All rows in list order
pub fn render_list(
    list: &HierarchicalList,
    glow: &GlowTracker,
    now: DateTime<Utc>,
) -> Vec<String> {
    list.iter()
        .enumerate()
        .map(|(index, item)| {
            render_item(
                item,
                index == list.selected_index(),
                list.has_children(index),
                glow.intensity(item.id()),
                now,
            )
        })
        .collect()
}

/// One-line summary shown under the list
pub fn status_line(list: &HierarchicalList, now: DateTime<Utc>) -> String {
    if list.is_empty() {
        return "no tasks, press 'a' to add one".to_string();
    }
    let overdue = list.overdue_items(now).count();
    let overdue = if overdue > 0 {
        format!(", {overdue} overdue")
    } else {
        String::new()
    };
    format!(
        "{}/{} done{}, item {} of {}",
        list.completed_count(),
        list.len(),
        overdue,
        list.selected_index() + 1,
        list.len()
    )
}
