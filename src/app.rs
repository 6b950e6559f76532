//! tewduwu App
//!
//! Owns the list and the presentation state. Each input line is handled to
//! completion (mutate, autosave, animate, render) before the next is read,
//! so rendering never observes a half-applied action.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use chrono::Utc;

use tewduwu_core::{dispatch, Action, DomainError, HierarchicalList, ListPersistenceOperations};

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::glow::GlowTracker;
use crate::keymap::{parse_key, KeyCommand, HELP};
use crate::view;

/// Log lines shown by the log key
const LOG_LINES: usize = 20;

/// Whether the loop keeps going after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    config: AppConfig,
    list: HierarchicalList,
    glow: GlowTracker,
    /// Unsaved changes since the last save
    dirty: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            list: HierarchicalList::new(),
            glow: GlowTracker::new(),
            dirty: false,
        }
    }

    /// Create the app and load the data file. A missing file starts an empty list.
    pub fn open(config: AppConfig) -> AppResult<Self> {
        let mut app = Self::new(config);
        match app.list.load_from_file(&app.config.data_file) {
            Ok(count) => log::info!("Loaded {} task(s)", count),
            Err(DomainError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                log::info!(
                    "No list at {}, starting empty",
                    app.config.data_file.display()
                );
            }
            Err(e) => return Err(e.into()),
        }
        Ok(app)
    }

    pub fn list(&self) -> &HierarchicalList {
        &self.list
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn save(&mut self) -> AppResult<()> {
        self.list.save_to_file(&self.config.data_file)?;
        self.dirty = false;
        Ok(())
    }

    /// Save and report a failure on `out`. The changes stay pending.
    fn save_or_report<W: Write>(&mut self, out: &mut W) -> AppResult<bool> {
        match self.save() {
            Ok(()) => Ok(true),
            Err(e) => {
                log::error!("Save failed: {}", e);
                writeln!(out, "save failed: {e}")?;
                Ok(false)
            }
        }
    }

    /// Apply one action, autosaving when it may have changed data
    pub fn apply<W: Write>(&mut self, action: Action, out: &mut W) -> AppResult<bool> {
        let mutation = action.is_mutation();
        let handled = dispatch(&mut self.list, action);
        if handled && mutation {
            self.dirty = true;
            if self.config.autosave {
                self.save_or_report(out)?;
            }
        }
        Ok(handled)
    }

    /// Handle one input line and write the resulting frame
    pub fn handle_line<W: Write>(
        &mut self,
        line: &str,
        delta_time: f32,
        out: &mut W,
    ) -> AppResult<Flow> {
        match parse_key(line) {
            Some(KeyCommand::Action(action)) => {
                self.apply(action, out)?;
            }
            Some(KeyCommand::Save) => {
                if self.save_or_report(out)? {
                    writeln!(out, "saved to {}", self.config.data_file.display())?;
                }
            }
            Some(KeyCommand::Help) => {
                writeln!(out, "{HELP}")?;
                return Ok(Flow::Continue);
            }
            Some(KeyCommand::ShowLog) => {
                match rolling_logger::log_path() {
                    Some(path) => writeln!(out, "log file: {}", path.display())?,
                    None => writeln!(out, "logging is not set up")?,
                }
                let lines = rolling_logger::recent_lines();
                for line in &lines[lines.len().saturating_sub(LOG_LINES)..] {
                    writeln!(out, "{line}")?;
                }
                return Ok(Flow::Continue);
            }
            Some(KeyCommand::Quit) => return Ok(Flow::Quit),
            None => {
                if !line.trim().is_empty() {
                    log::debug!("Ignoring unknown key {:?}", line.trim());
                    writeln!(out, "unknown key {:?}, '?' for help", line.trim())?;
                }
            }
        }

        self.glow.update(&self.list, delta_time);
        self.render(out)?;
        Ok(Flow::Continue)
    }

    pub fn render<W: Write>(&self, out: &mut W) -> AppResult<()> {
        let now = Utc::now();
        for row in view::render_list(&self.list, &self.glow, now) {
            writeln!(out, "{row}")?;
        }
        writeln!(out, "-- {}", view::status_line(&self.list, now))?;
        out.flush()?;
        Ok(())
    }

    /// Read lines until quit or end of input, then save pending changes
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> AppResult<()> {
        self.render(&mut out)?;
        let mut last = Instant::now();

        for line in input.lines() {
            let line = line?;
            let now = Instant::now();
            let delta_time = now.duration_since(last).as_secs_f32();
            last = now;

            if self.handle_line(&line, delta_time, &mut out)? == Flow::Quit {
                break;
            }
        }

        if self.is_dirty() {
            self.save()?;
        }
        Ok(())
    }
}
