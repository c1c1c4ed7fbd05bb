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

//! Log levels and the threshold that filters them.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// The severity of a log record.
///
/// From least to most severe, the levels are:
///
/// - `Debug`
/// - `Info`
/// - `Warning`
/// - `Error`
/// - `Fatal`
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Verbose diagnostics.
    Debug = 0,
    /// Routine information.
    Info = 1,
    /// Something unexpected that the program can recover from.
    Warning = 2,
    /// A failed operation.
    Error = 3,
    /// An unrecoverable failure. Logging at this level through [`Logger::fatal`] exits the
    /// process.
    ///
    /// [`Logger::fatal`]: crate::Logger::fatal
    Fatal = 4,
}

impl Level {
    /// All levels, from least to most severe.
    pub const ALL: [Level; 5] = [
        Level::Debug,
        Level::Info,
        Level::Warning,
        Level::Error,
        Level::Fatal,
    ];

    /// Return the upper-case name of the level, e.g. `"WARNING"`.
    pub const fn name(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warning),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            _ => Err(Error::new("unknown log level").with_context("input", s)),
        }
    }
}

/// The minimum level a record must have to reach the sinks.
///
/// `Off` ranks above every [`Level`] and rejects all records.
#[repr(u8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LevelFilter {
    /// Pass every level.
    #[default]
    Debug = 0,
    /// Pass `Info` and above.
    Info = 1,
    /// Pass `Warning` and above.
    Warning = 2,
    /// Pass `Error` and above.
    Error = 3,
    /// Pass `Fatal` only.
    Fatal = 4,
    /// Reject everything.
    Off = 5,
}

impl LevelFilter {
    /// Return true if records at `level` pass this filter.
    pub fn enabled(self, level: Level) -> bool {
        level as u8 >= self as u8
    }

    pub(crate) fn from_u8(v: u8) -> LevelFilter {
        match v {
            0 => LevelFilter::Debug,
            1 => LevelFilter::Info,
            2 => LevelFilter::Warning,
            3 => LevelFilter::Error,
            4 => LevelFilter::Fatal,
            _ => LevelFilter::Off,
        }
    }
}

impl From<Level> for LevelFilter {
    fn from(level: Level) -> Self {
        LevelFilter::from_u8(level as u8)
    }
}

impl fmt::Display for LevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelFilter::Off => f.pad("OFF"),
            filter => {
                let level = Level::ALL[*filter as usize];
                fmt::Display::fmt(&level, f)
            }
        }
    }
}

impl FromStr for LevelFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("off") {
            return Ok(LevelFilter::Off);
        }
        s.parse::<Level>().map(LevelFilter::from)
    }
}
