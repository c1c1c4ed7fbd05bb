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

use crate::Level;
use crate::Logger;
use crate::record::Caller;

fn level_of(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warning,
        log::Level::Info => Level::Info,
        log::Level::Debug | log::Level::Trace => Level::Debug,
    }
}

/// Records from the [`log`] crate are written like any other record. `Trace` is folded into
/// [`Level::Debug`], and the record's file and line become the caller.
impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.level().enabled(level_of(metadata.level()))
    }

    fn log(&self, record: &log::Record) {
        let caller = record
            .file()
            .zip(record.line())
            .map(|(file, line)| Caller::new(file, line));
        let _ = self.emit(level_of(record.level()), caller, *record.args());
    }

    fn flush(&self) {
        self.console.flush();
    }
}

impl Logger {
    /// Install this logger as the [`log`] crate's global logger.
    ///
    /// The logger is leaked to obtain the `'static` lifetime the `log` crate requires, and the
    /// global maximum level is set to `Trace` so the logger's own threshold does the filtering.
    ///
    /// # Errors
    ///
    /// Return an error if a global logger has already been set.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// let logger = yagalog::Logger::new("app.log").unwrap().apply().unwrap();
    ///
    /// log::info!("routed through yagalog");
    /// logger.close().unwrap();
    /// ```
    pub fn apply(self) -> Result<&'static Logger, log::SetLoggerError> {
        let logger: &'static Logger = Box::leak(Box::new(self));
        log::set_logger(logger)?;
        log::set_max_level(log::LevelFilter::Trace);
        Ok(logger)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io;

    use log::Log;
    use tempfile::TempDir;

    use super::*;
    use crate::LevelFilter;
    use crate::append::Console;

    #[test]
    fn test_level_mapping() {
        assert_eq!(level_of(log::Level::Trace), Level::Debug);
        assert_eq!(level_of(log::Level::Debug), Level::Debug);
        assert_eq!(level_of(log::Level::Warn), Level::Warning);
        assert_eq!(level_of(log::Level::Error), Level::Error);
    }

    #[test]
    fn test_bridge_writes_record() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let path = temp_dir.path().join("app.log");
        let logger = Logger::builder(&path)
            .caller(true)
            .console(Console::new(io::sink(), false))
            .build()
            .unwrap();

        logger.log(
            &log::Record::builder()
                .args(format_args!("from log {}", 7))
                .level(log::Level::Warn)
                .file(Some("src/service/handler.rs"))
                .line(Some(88))
                .build(),
        );

        let contents = fs::read_to_string(&path).unwrap();
        assert!(
            contents.ends_with("[WARNING] from log 7 (handler.rs:88)\n"),
            "{contents}"
        );
    }

    #[test]
    fn test_bridge_respects_threshold() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let logger = Logger::builder(temp_dir.path().join("app.log"))
            .level(LevelFilter::Error)
            .console(Console::new(io::sink(), false))
            .build()
            .unwrap();

        let metadata = log::Metadata::builder().level(log::Level::Info).build();
        assert!(!logger.enabled(&metadata));
        let metadata = log::Metadata::builder().level(log::Level::Error).build();
        assert!(logger.enabled(&metadata));
    }
}
