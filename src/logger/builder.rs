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

use std::path::Path;
use std::path::PathBuf;
use std::sync::RwLock;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::AtomicU8;

use crate::ColorMode;
use crate::Error;
use crate::LevelFilter;
use crate::Logger;
use crate::append::Console;
use crate::append::FileSink;
use crate::time;

/// A builder for configuring a [`Logger`] before it opens its file.
///
/// ## Examples
///
/// ```rust,no_run
/// use yagalog::ColorMode;
/// use yagalog::Level;
/// use yagalog::Logger;
///
/// let logger = Logger::builder("app.log")
///     .level(Level::Info)
///     .time_format("%d/%m/%Y %H:%M:%S")
///     .caller(true)
///     .json()
///     .color_mode(ColorMode::Never)
///     .build()
///     .unwrap();
/// ```
#[must_use = "call `build` to open the log file and create the logger"]
#[derive(Debug)]
pub struct LoggerBuilder {
    path: PathBuf,
    level: LevelFilter,
    time_format: String,
    caller: bool,
    structured: bool,
    color_mode: ColorMode,
    console: Option<Console>,
}

impl LoggerBuilder {
    /// Create a new builder for a logger appending to `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            level: LevelFilter::Debug,
            time_format: time::DEFAULT_TIME_FORMAT.to_string(),
            caller: false,
            structured: false,
            color_mode: ColorMode::from_env(),
            console: None,
        }
    }

    /// Set the threshold.
    ///
    /// Default to [`LevelFilter::Debug`], which passes every level.
    pub fn level(mut self, level: impl Into<LevelFilter>) -> Self {
        self.level = level.into();
        self
    }

    /// Set the `strftime` pattern of file timestamps.
    ///
    /// Default to `%Y-%m-%d %H:%M:%S`. An empty or unrenderable pattern is ignored.
    pub fn time_format(mut self, format: &str) -> Self {
        if time::is_valid(format) {
            self.time_format = format.to_string();
        }
        self
    }

    /// Set whether file records carry the caller's `file:line`.
    pub fn caller(mut self, enable: bool) -> Self {
        self.caller = enable;
        self
    }

    /// Write file records as JSON lines.
    pub fn json(mut self) -> Self {
        self.structured = true;
        self
    }

    /// Set the color mode of the console tags.
    ///
    /// Default to [`ColorMode::from_env`].
    pub fn color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = mode;
        self
    }

    /// Set the console sink.
    ///
    /// Default to [`Console::stdout`].
    pub fn console(mut self, console: Console) -> Self {
        self.console = Some(console);
        self
    }

    /// Open the log file and build the [`Logger`].
    ///
    /// # Errors
    ///
    /// Return an error if the log file cannot be opened.
    pub fn build(self) -> Result<Logger, Error> {
        let LoggerBuilder {
            path,
            level,
            time_format,
            caller,
            structured,
            color_mode,
            console,
        } = self;

        let file = FileSink::open(&path)?;
        Ok(Logger {
            threshold: AtomicU8::new(level as u8),
            color_mode: AtomicU8::new(color_mode as u8),
            with_caller: AtomicBool::new(caller),
            structured: AtomicBool::new(structured),
            time_format: RwLock::new(time_format),
            console: console.unwrap_or_default(),
            file,
        })
    }
}
