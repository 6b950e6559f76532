//! List Record Codec
//!
//! One item per line, comma separated:
//! `completed,nest_level,priority,due_date,text`
//!
//! `text` is the rest of the line, so it may contain commas. Parsing is
//! lenient: a numeric field that does not parse takes its default and the
//! line is still used as long as the text field is present.

use std::str::FromStr;

use crate::domain::{Item, Priority};

const FIELD_COUNT: usize = 5;

/// Encode one item as a record line, without the trailing newline
pub fn format_record(item: &Item) -> String {
    format!(
        "{},{},{},{},{}",
        if item.completed { 1 } else { 0 },
        item.nest_level,
        item.priority.as_i32(),
        item.due_date,
        item.text
    )
}

/// Decode one record line. Returns `None` when the line has no text field.
pub fn parse_record(line: &str) -> Option<Item> {
    let fields: Vec<&str> = line.splitn(FIELD_COUNT, ',').collect();
    if fields.len() < FIELD_COUNT {
        return None;
    }

    let mut item = Item::new(fields[4], parse_field(fields[1]), Priority::None);
    item.completed = fields[0].trim() == "1";
    item.priority = Priority::from_i32(parse_field(fields[2]));
    item.due_date = parse_field(fields[3]);
    Some(item)
}

/// Decode every line of a list file, dropping lines without a text field
pub fn parse_records(content: &str) -> Vec<Item> {
    let mut skipped = 0usize;
    let items: Vec<Item> = content
        .lines()
        .filter_map(|line| {
            let parsed = parse_record(line);
            if parsed.is_none() {
                skipped += 1;
            }
            parsed
        })
        .collect();

    if skipped > 0 {
        log::debug!("Skipped {} record(s) without a text field", skipped);
    }
    items
}

/// Encode a whole list, one line per item
pub fn format_records<'a>(items: impl IntoIterator<Item = &'a Item>) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(&format_record(item));
        out.push('\n');
    }
    out
}

fn parse_field<T: FromStr + Default>(field: &str) -> T {
    match field.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            log::debug!("Unparsable record field {:?}, using default", field);
            T::default()
        }
    }
}
