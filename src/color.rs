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

//! Color utilities.

use std::env;
use std::ffi::OsStr;

use colored::Color;

use crate::Level;

/// Whether the console tag of a record is colorized.
#[repr(u8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// Colorize only when the console is interactive.
    #[default]
    Auto = 0,
    /// Always colorize.
    Always = 1,
    /// Never colorize.
    Never = 2,
}

impl ColorMode {
    /// Read the color mode from the environment.
    ///
    /// A non-empty `FORCE_COLOR` yields [`ColorMode::Always`]. Otherwise a non-empty `NO_COLOR`
    /// yields [`ColorMode::Never`]. Otherwise the mode is [`ColorMode::Auto`].
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var_os("FORCE_COLOR").as_deref(),
            env::var_os("NO_COLOR").as_deref(),
        )
    }

    fn from_vars(force_color: Option<&OsStr>, no_color: Option<&OsStr>) -> Self {
        let set = |v: Option<&OsStr>| v.is_some_and(|v| !v.is_empty());
        if set(force_color) {
            ColorMode::Always
        } else if set(no_color) {
            ColorMode::Never
        } else {
            ColorMode::Auto
        }
    }

    /// Resolve the mode against whether the output is interactive.
    pub fn should_colorize(self, interactive: bool) -> bool {
        match self {
            ColorMode::Auto => interactive,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    pub(crate) fn from_u8(v: u8) -> ColorMode {
        match v {
            1 => ColorMode::Always,
            2 => ColorMode::Never,
            _ => ColorMode::Auto,
        }
    }
}

impl From<bool> for ColorMode {
    fn from(enable: bool) -> Self {
        if enable {
            ColorMode::Always
        } else {
            ColorMode::Never
        }
    }
}

/// Colors for different log levels.
#[derive(Debug, Clone)]
pub struct LevelColor {
    /// Color for debug level logs.
    pub debug: Color,
    /// Color for info level logs.
    pub info: Color,
    /// Color for warning level logs.
    pub warning: Color,
    /// Color for error level logs.
    pub error: Color,
    /// Color for fatal level logs.
    pub fatal: Color,
}

impl Default for LevelColor {
    fn default() -> Self {
        Self {
            debug: Color::Green,
            info: Color::Cyan,
            warning: Color::Yellow,
            error: Color::Red,
            fatal: Color::Magenta,
        }
    }
}

impl LevelColor {
    /// Return the color of the given level.
    pub fn color(&self, level: Level) -> Color {
        match level {
            Level::Debug => self.debug,
            Level::Info => self.info,
            Level::Warning => self.warning,
            Level::Error => self.error,
            Level::Fatal => self.fatal,
        }
    }

    /// Render the bracketed tag of the level, e.g. `[INFO]`, colorized if `colorize` is set.
    ///
    /// The escape codes are written directly so that `colored`'s process-wide override does
    /// not leak into loggers that chose their own mode.
    pub fn colorize_tag(&self, colorize: bool, level: Level) -> String {
        let name = level.name();
        if colorize {
            // `colorize` already resolved the logger's own ColorMode; bypass colored's global switch
            let code = self.color(level).to_fg_str();
            format!("\x1b[{code}m[{name}]\x1b[0m")
        } else {
            format!("[{name}]")
        }
    }
}
