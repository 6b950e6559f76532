//! Circular line buffer
//!
//! Keeps the most recent log lines in memory so they can be shown without
//! reading the log file back.

use std::collections::VecDeque;

#[derive(Debug)]
pub struct LineBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LineBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append one line, evicting the oldest when full
    pub fn push(&mut self, line: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line.into());
    }

    /// Split a formatted chunk on newlines and push every non-empty line
    pub fn push_chunk(&mut self, chunk: &str) {
        for line in chunk.lines().filter(|l| !l.is_empty()) {
            self.push(line);
        }
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
