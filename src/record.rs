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

//! The record handed from the logger to a layout.

use std::fmt;
use std::panic::Location;
use std::path::Path;

use crate::Level;

/// The source location that emitted a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller<'a> {
    file: &'a str,
    line: u32,
}

impl<'a> Caller<'a> {
    /// Create a caller from a source path and a line number.
    pub fn new(file: &'a str, line: u32) -> Self {
        Self { file, line }
    }

    /// The source file, as given on construction.
    pub fn file(&self) -> &'a str {
        self.file
    }

    /// The line number in the source file.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Strip the directories from the source path.
    ///
    /// Returns `None` if the path has no file name.
    pub fn basename(self) -> Option<Caller<'a>> {
        let file = Path::new(self.file).file_name()?.to_str()?;
        Some(Caller {
            file,
            line: self.line,
        })
    }
}

impl From<&'static Location<'static>> for Caller<'static> {
    fn from(location: &'static Location<'static>) -> Self {
        Caller::new(location.file(), location.line())
    }
}

impl fmt::Display for Caller<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// A rendered log record, ready to be laid out for the file sink.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub(crate) time: &'a str,
    pub(crate) level: Level,
    pub(crate) message: &'a str,
    pub(crate) caller: Option<Caller<'a>>,
}

impl<'a> Record<'a> {
    /// Create a record.
    pub fn new(time: &'a str, level: Level, message: &'a str, caller: Option<Caller<'a>>) -> Self {
        Self {
            time,
            level,
            message,
            caller,
        }
    }

    /// The formatted timestamp.
    pub fn time(&self) -> &'a str {
        self.time
    }

    /// The severity of the record.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The rendered message.
    pub fn message(&self) -> &'a str {
        self.message
    }

    /// The resolved caller, if caller reporting is on and resolution succeeded.
    pub fn caller(&self) -> Option<Caller<'a>> {
        self.caller
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_basename() {
        let caller = Caller::new("src/bin/server/main.rs", 42).basename().unwrap();
        assert_eq!(caller.file(), "main.rs");
        assert_eq!(caller.to_string(), "main.rs:42");

        let caller = Caller::new("lib.rs", 7).basename().unwrap();
        assert_eq!(caller.to_string(), "lib.rs:7");
    }

    #[test]
    fn test_caller_basename_fails() {
        assert!(Caller::new("", 1).basename().is_none());
        assert!(Caller::new("src/..", 1).basename().is_none());
    }

    #[test]
    fn test_caller_from_location() {
        let caller = Caller::from(Location::caller());
        assert!(caller.file().ends_with("record.rs"));
        assert!(caller.line() > 0);
    }
}
