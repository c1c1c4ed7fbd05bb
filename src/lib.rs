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

//! Yagalog is a small leveled logger that writes every record to the console and, optionally,
//! to a log file.
//!
//! # Overview
//!
//! A [`Logger`] owns two sinks. The console receives a `[LEVEL] HH:MM:SS message` line per
//! record with a colorized tag. The log file receives a timestamped line per record, as plain
//! text or as a JSON object. Records below the logger's threshold are dropped before any work
//! is done.
//!
//! The logger is shared by reference across threads. File writes are serialized so that
//! concurrent records never interleave, and the file can be disabled, swapped or closed at any
//! time.
//!
//! # Examples
//!
//! ```no_run
//! use yagalog::Level;
//!
//! let logger = yagalog::Logger::new("app.log").unwrap();
//! logger.set_level(Level::Info);
//! logger.set_caller(true);
//!
//! yagalog::info!(logger, "Hello from yagalog {}", 1);
//! yagalog::debug!(logger, "dropped: below the threshold");
//!
//! logger.enable_json();
//! yagalog::error!(logger, "Oops: {}", "something went wrong");
//!
//! logger.close().unwrap();
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod append;
pub mod color;
pub mod layout;
pub mod record;

mod error;
mod level;
mod logger;
mod time;

pub use self::color::ColorMode;
pub use self::error::Error;
pub use self::level::Level;
pub use self::level::LevelFilter;
pub use self::logger::Emission;
pub use self::logger::Logger;
pub use self::logger::LoggerBuilder;
pub use self::time::DEFAULT_TIME_FORMAT;

/// Log a record at [`Level::Debug`] with `format!`-style arguments.
///
/// ```no_run
/// let logger = yagalog::Logger::new("app.log").unwrap();
/// yagalog::debug!(logger, "cache hit ratio: {:.2}", 0.93);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(::std::format_args!($($arg)+))
    };
}

/// Log a record at [`Level::Info`] with `format!`-style arguments.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(::std::format_args!($($arg)+))
    };
}

/// Log a record at [`Level::Warning`] with `format!`-style arguments.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn(::std::format_args!($($arg)+))
    };
}

/// Log a record at [`Level::Warning`] with `format!`-style arguments. Same as [`warn!`].
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warning(::std::format_args!($($arg)+))
    };
}

/// Log a record at [`Level::Error`] with `format!`-style arguments.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(::std::format_args!($($arg)+))
    };
}

/// Log a record at [`Level::Fatal`] with `format!`-style arguments, then exit the process with
/// status 1 unless the record was filtered.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(::std::format_args!($($arg)+))
    };
}
