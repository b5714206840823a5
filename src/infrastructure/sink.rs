//! Entry creation through the Day One command line tool

use crate::domain::entry::ENTRY_DATE_FORMAT;
use crate::domain::Entry;
use crate::error::{DaymarkError, Result};
use chrono_tz::Tz;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

/// Receives entries one at a time
pub trait EntrySink {
    fn create(&mut self, entry: &Entry) -> Result<()>;
}

/// Builds `dayone2 new` invocations for entries
#[derive(Debug, Clone)]
pub struct DayOneCommand {
    pub program: String,
    pub journal: String,
    pub photo_base: PathBuf,
}

impl DayOneCommand {
    pub fn new(program: String, journal: String, photo_base: PathBuf) -> Self {
        DayOneCommand {
            program,
            journal,
            photo_base,
        }
    }

    /// Arguments after the program name. The body text is not included;
    /// it goes to stdin.
    pub fn build_args(&self, entry: &Entry) -> Result<Vec<String>> {
        let date = entry
            .date
            .ok_or_else(|| DaymarkError::missing_field("date", "entry to import"))?;

        let mut args = vec!["new".to_string(), format!("--journal={}", self.journal)];

        if let Some(photo) = &entry.photo {
            args.push("--photos".to_string());
            args.push(self.photo_base.join(photo).to_string_lossy().to_string());
        }

        if let Some(coordinate) = &entry.coordinate {
            args.push("--coordinate".to_string());
            args.push(coordinate.latitude.to_string());
            args.push(coordinate.longitude.to_string());
        }

        let zone = entry.timezone.as_deref().and_then(|name| {
            name.parse::<Tz>()
                .map_err(|e| log::warn!("Unknown timezone '{}': {}", name, e))
                .ok()
        });
        match zone {
            Some(tz) => {
                args.push(format!("--time-zone={}", tz.name()));
                args.push(format!(
                    "--date={}",
                    date.with_timezone(&tz).format(ENTRY_DATE_FORMAT)
                ));
            }
            None => args.push(format!("--date={}", date.format(ENTRY_DATE_FORMAT))),
        }

        if let Some(tag) = entry.tag {
            args.push(format!("--tags={}", tag.as_str()));
        }

        Ok(args)
    }
}

/// Runs the Day One CLI once per entry, strictly one at a time
pub struct DayOneCli {
    command: DayOneCommand,
    delay: Duration,
}

impl DayOneCli {
    pub fn new(command: DayOneCommand, delay: Duration) -> Self {
        DayOneCli { command, delay }
    }

    fn program(&self) -> &Path {
        Path::new(&self.command.program)
    }
}

impl EntrySink for DayOneCli {
    fn create(&mut self, entry: &Entry) -> Result<()> {
        let args = self.command.build_args(entry)?;
        log::debug!("{} {}", self.command.program, args.join(" "));

        let mut child = Command::new(self.program())
            .args(&args)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| {
                DaymarkError::Sink(format!(
                    "Failed to launch '{}': {}",
                    self.command.program, e
                ))
            })?;

        // stdin is closed before waiting; the child is always reaped
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(entry.text.as_bytes()),
            None => Ok(()),
        };

        let status = child.wait()?;
        if !status.success() {
            return Err(DaymarkError::Sink(format!(
                "'{}' exited with {}",
                self.command.program, status
            )));
        }
        written.map_err(|e| {
            DaymarkError::Sink(format!(
                "Failed to write entry text to '{}': {}",
                self.command.program, e
            ))
        })?;

        // dayone2 loses entries when invocations arrive back to back
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        Ok(())
    }
}

/// Writes the commands that would run instead of running them
pub struct DryRunSink<W: Write> {
    command: DayOneCommand,
    out: W,
}

impl<W: Write> DryRunSink<W> {
    pub fn new(command: DayOneCommand, out: W) -> Self {
        DryRunSink { command, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> EntrySink for DryRunSink<W> {
    fn create(&mut self, entry: &Entry) -> Result<()> {
        let args = self.command.build_args(entry)?;
        writeln!(
            self.out,
            "{} {}  # {} bytes on stdin",
            self.command.program,
            args.join(" "),
            entry.text.len()
        )?;
        Ok(())
    }
}
