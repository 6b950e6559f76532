//! Key Map
//!
//! Translates one line of terminal input into a command. The first word is
//! the key, anything after it is text for the add keys.

use chrono::NaiveDate;
use tewduwu_core::{Action, Priority};

/// What a key asks the shell to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyCommand {
    Action(Action),
    Save,
    /// Print the most recent log lines
    ShowLog,
    Quit,
    Help,
}

pub const HELP: &str = "\
k/up j/down   previous / next
h l           parent / first child
space         toggle done
d             delete with subtasks
0 1 2 3       priority none/low/medium/high
a [text]      add task
i [text]      add subtask
K J           move up / down
t [date]      set due date (YYYY-MM-DD), none clears
w             save
L             show recent log
q             quit";

/// Parse a key line. Unknown keys yield `None`.
pub fn parse_key(line: &str) -> Option<KeyCommand> {
    let line = line.trim_end_matches(&['\r', '\n'][..]);
    // A lone space is the toggle key
    if line == " " {
        return Some(KeyCommand::Action(Action::Toggle));
    }

    let line = line.trim_start();
    let (key, rest) = match line.split_once(char::is_whitespace) {
        Some((key, rest)) => (key, rest.trim()),
        None => (line, ""),
    };

    let action = match key {
        "k" | "up" => Action::SelectPrevious,
        "j" | "down" => Action::SelectNext,
        "h" | "left" => Action::SelectParent,
        "l" | "right" => Action::SelectFirstChild,
        "space" | "x" => Action::Toggle,
        "d" | "delete" => Action::Remove,
        "0" => Action::SetPriority(Priority::None),
        "1" => Action::SetPriority(Priority::Low),
        "2" => Action::SetPriority(Priority::Medium),
        "3" => Action::SetPriority(Priority::High),
        "a" => Action::AddItem(rest.to_string()),
        "i" => Action::AddSubtask(rest.to_string()),
        "K" => Action::MoveUp,
        "J" => Action::MoveDown,
        "t" => Action::SetDueDate(parse_due_date(rest)?),
        "w" => return Some(KeyCommand::Save),
        "L" | "log" => return Some(KeyCommand::ShowLog),
        "q" | "escape" => return Some(KeyCommand::Quit),
        "?" | "help" => return Some(KeyCommand::Help),
        _ => return None,
    };
    Some(KeyCommand::Action(action))
}

/// Midnight UTC of a `YYYY-MM-DD` date as epoch seconds, 0 for no date
fn parse_due_date(text: &str) -> Option<i64> {
    if text.is_empty() {
        return Some(0);
    }
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(line: &str) -> Action {
        match parse_key(line) {
            Some(KeyCommand::Action(action)) => action,
            other => panic!("expected an action for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(action("k"), Action::SelectPrevious);
        assert_eq!(action("up"), Action::SelectPrevious);
        assert_eq!(action("j"), Action::SelectNext);
        assert_eq!(action("h"), Action::SelectParent);
        assert_eq!(action("l"), Action::SelectFirstChild);
    }

    #[test]
    fn test_editing_keys() {
        assert_eq!(action(" "), Action::Toggle);
        assert_eq!(action("space"), Action::Toggle);
        assert_eq!(action("d"), Action::Remove);
        assert_eq!(action("3"), Action::SetPriority(Priority::High));
        assert_eq!(action("0"), Action::SetPriority(Priority::None));
        assert_eq!(action("K"), Action::MoveUp);
        assert_eq!(action("J\n"), Action::MoveDown);
    }

    #[test]
    fn test_add_keys_take_text() {
        assert_eq!(
            action("a Call the bank, today"),
            Action::AddItem("Call the bank, today".to_string())
        );
        assert_eq!(action("i  ask about fees  "), Action::AddSubtask("ask about fees".to_string()));
        assert_eq!(action("a"), Action::AddItem(String::new()));
    }

    #[test]
    fn test_shell_keys() {
        assert_eq!(parse_key("w"), Some(KeyCommand::Save));
        assert_eq!(parse_key("q"), Some(KeyCommand::Quit));
        assert_eq!(parse_key("escape"), Some(KeyCommand::Quit));
        assert_eq!(parse_key("?"), Some(KeyCommand::Help));
        assert_eq!(parse_key("L"), Some(KeyCommand::ShowLog));
        assert_eq!(parse_key("log"), Some(KeyCommand::ShowLog));
    }

    #[test]
    fn test_due_date_key() {
        assert_eq!(action("t 2025-04-22"), Action::SetDueDate(1_745_280_000));
        assert_eq!(action("t"), Action::SetDueDate(0));
        assert_eq!(parse_key("t next week"), None);
        assert_eq!(parse_key("t 2025-02-30"), None);
    }

    #[test]
    fn test_unknown_keys() {
        assert_eq!(parse_key("z"), None);
        assert_eq!(parse_key(""), None);
        assert_eq!(parse_key("   "), None);
    }
}
