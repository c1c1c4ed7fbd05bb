// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::borrow::Cow;
use std::fmt;
use std::panic::Location;
use std::path::Path;
use std::sync::RwLock;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::AtomicU8;
use std::sync::atomic::Ordering;

use jiff::Zoned;

use crate::ColorMode;
use crate::Error;
use crate::Level;
use crate::LevelFilter;
use crate::append::Console;
use crate::append::FileSink;
use crate::layout::JsonLayout;
use crate::layout::Layout;
use crate::layout::TextLayout;
use crate::record::Caller;
use crate::record::Record;
use crate::time;

pub use self::builder::LoggerBuilder;

mod builder;
#[cfg(feature = "bridge-log")]
mod log_impl;

/// The outcome of emitting one record.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emission {
    /// The threshold rejected the record. Nothing was written.
    Filtered,
    /// The record was written to the sinks.
    Logged,
    /// The record was written and the caller is expected to exit the process.
    ///
    /// Only [`Level::Fatal`] records produce this outcome.
    Terminate,
}

impl Emission {
    /// Whether the record reached the sinks.
    pub fn is_logged(self) -> bool {
        !matches!(self, Emission::Filtered)
    }

    /// Whether the process should exit.
    pub fn terminates(self) -> bool {
        matches!(self, Emission::Terminate)
    }
}

/// A leveled logger writing to the console and, optionally, to a file.
///
/// Every method takes `&self`; share one logger across threads with an `Arc` or a `static`.
/// Records written to the file are serialized by a mutex, so concurrent callers never
/// interleave partial lines, and the file can be swapped or dropped at runtime.
///
/// # Examples
///
/// ```no_run
/// let logger = yagalog::Logger::new("app.log").unwrap();
///
/// yagalog::info!(logger, "Hello from yagalog {}", 1);
/// yagalog::warn!(logger, "Be careful");
/// yagalog::error!(logger, "Oops: {}", "something went wrong");
///
/// logger.close().unwrap();
/// ```
#[derive(Debug)]
pub struct Logger {
    threshold: AtomicU8,
    color_mode: AtomicU8,
    with_caller: AtomicBool,
    structured: AtomicBool,
    time_format: RwLock<String>,
    console: Console,
    file: FileSink,
}

impl Logger {
    /// Create a logger that appends to the file at `path`, creating it if absent.
    ///
    /// The logger passes every level, writes plain text records without caller information,
    /// and reads its color mode from the environment (see [`ColorMode::from_env`]).
    ///
    /// # Errors
    ///
    /// Return an error if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Result<Logger, Error> {
        Logger::builder(path).build()
    }

    /// Create a [`LoggerBuilder`] that configures a logger writing to `path`.
    pub fn builder(path: impl AsRef<Path>) -> LoggerBuilder {
        LoggerBuilder::new(path)
    }

    /// Log a record at [`Level::Debug`].
    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        let _ = self.emit(Level::Debug, Some(Location::caller().into()), args);
    }

    /// Log a record at [`Level::Info`].
    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        let _ = self.emit(Level::Info, Some(Location::caller().into()), args);
    }

    /// Log a record at [`Level::Warning`].
    #[track_caller]
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        let _ = self.emit(Level::Warning, Some(Location::caller().into()), args);
    }

    /// Log a record at [`Level::Warning`]. Same as [`Logger::warn`].
    #[track_caller]
    pub fn warning(&self, args: fmt::Arguments<'_>) {
        let _ = self.emit(Level::Warning, Some(Location::caller().into()), args);
    }

    /// Log a record at [`Level::Error`].
    #[track_caller]
    pub fn error(&self, args: fmt::Arguments<'_>) {
        let _ = self.emit(Level::Error, Some(Location::caller().into()), args);
    }

    /// Log a record at [`Level::Fatal`], then exit the process with status 1.
    ///
    /// If the threshold rejects the record, nothing is logged and the process keeps running.
    #[track_caller]
    pub fn fatal(&self, args: fmt::Arguments<'_>) {
        if self
            .emit(Level::Fatal, Some(Location::caller().into()), args)
            .terminates()
        {
            self.console.flush();
            std::process::exit(1);
        }
    }

    /// Write one record at `level` to both sinks.
    ///
    /// This never exits the process, even for [`Level::Fatal`]; it reports
    /// [`Emission::Terminate`] instead and leaves the decision to the caller.
    ///
    /// `caller` is written to the file only when caller reporting is enabled, reduced to the
    /// file name and line. It is dropped silently if the path has no file name.
    pub fn emit(
        &self,
        level: Level,
        caller: Option<Caller<'_>>,
        args: fmt::Arguments<'_>,
    ) -> Emission {
        if !self.level().enabled(level) {
            return Emission::Filtered;
        }

        let message = match args.as_str() {
            Some(message) => Cow::Borrowed(message),
            None => Cow::Owned(args.to_string()),
        };

        let colorize = self
            .color_mode()
            .should_colorize(self.console.is_interactive());
        self.console.append(level, &message, colorize);

        if self.file.is_enabled() {
            let time = self.render_time();
            let caller = caller
                .filter(|_| self.caller_enabled())
                .and_then(Caller::basename);
            let record = Record::new(&time, level, &message, caller);
            if let Ok(bytes) = self.layout().format(&record) {
                self.file.append(bytes);
            }
        }

        match level {
            Level::Fatal => Emission::Terminate,
            _ => Emission::Logged,
        }
    }

    fn render_time(&self) -> String {
        let now = Zoned::now();
        let format = self.time_format.read().unwrap_or_else(|e| e.into_inner());
        time::render(&format, &now)
            .or_else(|| time::render(time::DEFAULT_TIME_FORMAT, &now))
            .unwrap_or_default()
    }

    fn layout(&self) -> Layout {
        if self.is_structured() {
            JsonLayout::default().into()
        } else {
            TextLayout::default().into()
        }
    }

    /// The current threshold.
    pub fn level(&self) -> LevelFilter {
        LevelFilter::from_u8(self.threshold.load(Ordering::Relaxed))
    }

    /// Replace the threshold. Records below it are dropped without side effects.
    pub fn set_level(&self, level: impl Into<LevelFilter>) {
        self.threshold.store(level.into() as u8, Ordering::Relaxed);
    }

    /// The current color mode.
    pub fn color_mode(&self) -> ColorMode {
        ColorMode::from_u8(self.color_mode.load(Ordering::Relaxed))
    }

    /// Replace the color mode of the console tags.
    pub fn set_color_mode(&self, mode: ColorMode) {
        self.color_mode.store(mode as u8, Ordering::Relaxed);
    }

    /// Force console colors on or off.
    pub fn with_colors(&self, enable: bool) {
        self.set_color_mode(ColorMode::from(enable));
    }

    /// The `strftime` pattern of file timestamps.
    pub fn time_format(&self) -> String {
        self.time_format
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Replace the `strftime` pattern of file timestamps.
    ///
    /// An empty pattern, or one that cannot render the current time, is ignored and the
    /// previous pattern is kept.
    pub fn set_time_format(&self, format: &str) {
        if time::is_valid(format) {
            *self.time_format.write().unwrap_or_else(|e| e.into_inner()) = format.to_string();
        }
    }

    /// Whether file records carry the caller's `file:line`.
    pub fn caller_enabled(&self) -> bool {
        self.with_caller.load(Ordering::Relaxed)
    }

    /// Toggle caller reporting in file records.
    pub fn set_caller(&self, enable: bool) {
        self.with_caller.store(enable, Ordering::Relaxed);
    }

    /// Whether file records are written as JSON lines.
    pub fn is_structured(&self) -> bool {
        self.structured.load(Ordering::Relaxed)
    }

    /// Write file records as JSON lines from now on. There is no way back to plain text.
    pub fn enable_json(&self) {
        self.structured.store(true, Ordering::Relaxed);
    }

    /// Whether a log file is attached.
    pub fn has_file(&self) -> bool {
        self.file.is_enabled()
    }

    /// Close the log file and stop writing to it. Idempotent.
    pub fn disable_file(&self) {
        self.file.disable();
    }

    /// Close the current log file, if any, and append to `path` instead.
    ///
    /// # Errors
    ///
    /// Return an error if `path` cannot be opened. The logger is then left without a log
    /// file; console output is unaffected.
    pub fn enable_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        self.file.replace(path)
    }

    /// Sync and close the log file.
    ///
    /// # Errors
    ///
    /// Return an error if syncing fails. The file is closed regardless, and a logger
    /// without a file returns `Ok(())`.
    pub fn close(&self) -> Result<(), Error> {
        self.file.close()
    }
}
