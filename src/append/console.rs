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

use std::fmt;
use std::io;
use std::io::IsTerminal;
use std::io::Write;
use std::sync::Mutex;
use std::sync::MutexGuard;

use jiff::Zoned;

use crate::Level;
use crate::color::LevelColor;
use crate::time;

/// The console sink: a stream that receives one line per record.
///
/// Output format:
///
/// ```text
/// [INFO] 22:44:57 Hello info!
/// [WARNING] 22:44:57 Hello warning!
/// ```
///
/// The bracketed tag is colorized when the logger's color mode says so. The clock prefix
/// always uses `HH:MM:SS` and ignores the logger's time format.
pub struct Console {
    writer: Mutex<Box<dyn Write + Send>>,
    interactive: bool,
    colors: LevelColor,
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("interactive", &self.interactive)
            .field("colors", &self.colors)
            .finish_non_exhaustive()
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Console {
    /// Create a console sink writing to stdout.
    ///
    /// The sink counts as interactive when stdout is a terminal.
    pub fn stdout() -> Self {
        let interactive = io::stdout().is_terminal();
        Self::new(io::stdout(), interactive)
    }

    /// Create a console sink writing to stderr.
    ///
    /// The sink counts as interactive when stderr is a terminal.
    pub fn stderr() -> Self {
        let interactive = io::stderr().is_terminal();
        Self::new(io::stderr(), interactive)
    }

    /// Create a console sink over any writer.
    ///
    /// `interactive` decides whether [`ColorMode::Auto`] colorizes the output.
    ///
    /// [`ColorMode::Auto`]: crate::ColorMode::Auto
    pub fn new(writer: impl Write + Send + 'static, interactive: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            interactive,
            colors: LevelColor::default(),
        }
    }

    /// Set the colors of the level tags.
    pub fn with_colors(mut self, colors: LevelColor) -> Self {
        self.colors = colors;
        self
    }

    /// Whether the underlying stream is interactive.
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn writer(&self) -> MutexGuard<'_, Box<dyn Write + Send>> {
        self.writer.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub(crate) fn append(&self, level: Level, message: &str, colorize: bool) {
        let tag = self.colors.colorize_tag(colorize, level);
        let clock = time::render(time::CONSOLE_TIME_FORMAT, &Zoned::now()).unwrap_or_default();
        let line = format!("{tag} {clock} {message}\n");

        // best-effort: a broken console must not fail the caller
        let _ = self.writer().write_all(line.as_bytes());
    }

    pub(crate) fn flush(&self) {
        let _ = self.writer().flush();
    }
}
