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

use std::fs::File;
use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::Error;

/// The file sink: an optional append-mode file guarded by one mutex.
///
/// Every write, close and reopen happens under the mutex, so a record is never interleaved
/// with another and no caller sees a half-swapped handle.
#[derive(Debug)]
pub struct FileSink {
    file: Mutex<Option<File>>,
}

impl FileSink {
    /// Open `path` in append mode, creating the file if it is absent.
    ///
    /// # Errors
    ///
    /// Return an error if the file cannot be opened, e.g. when the parent directory is
    /// missing or permission is denied.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let file = open_append(path.as_ref())?;
        Ok(Self {
            file: Mutex::new(Some(file)),
        })
    }

    fn file(&self) -> MutexGuard<'_, Option<File>> {
        self.file.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Whether a file is currently attached.
    pub fn is_enabled(&self) -> bool {
        self.file().is_some()
    }

    /// Append `bytes` and a line terminator as one write.
    ///
    /// Write errors are dropped.
    pub(crate) fn append(&self, mut bytes: Vec<u8>) {
        bytes.push(b'\n');
        if let Some(file) = self.file().as_mut() {
            let _ = file.write_all(&bytes);
        }
    }

    /// Close the current file, if any. Idempotent.
    pub fn disable(&self) {
        // dropping the handle closes it
        self.file().take();
    }

    /// Close the current file, if any, and attach `path` instead.
    ///
    /// # Errors
    ///
    /// Return an error if `path` cannot be opened. The sink is left without a file.
    pub fn replace(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let mut file = self.file();
        file.take();
        *file = Some(open_append(path.as_ref())?);
        Ok(())
    }

    /// Sync the current file to disk and close it.
    ///
    /// Devices, pipes and terminals that do not support syncing are closed without error.
    ///
    /// # Errors
    ///
    /// Return an error if syncing fails. The file is closed regardless.
    pub fn close(&self) -> Result<(), Error> {
        let Some(file) = self.file().take() else {
            return Ok(());
        };
        match file.sync_all() {
            // EINVAL on character devices and pipes
            Err(err) if !is_unsyncable(&err) => {
                Err(Error::new("failed to close log file").with_source(err))
            }
            _ => Ok(()),
        }
    }
}

fn is_unsyncable(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::InvalidInput | io::ErrorKind::Unsupported
    )
}

fn open_append(path: &Path) -> Result<File, Error> {
    OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|err| {
            Error::new("failed to open log file")
                .with_context("path", path.display())
                .with_source(err)
        })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use rand::Rng;
    use rand::distr::Alphanumeric;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_append_lines() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let path = temp_dir.path().join("app.log");
        let sink = FileSink::open(&path).unwrap();

        let rand_str = generate_random_string();
        sink.append(rand_str.clone().into_bytes());
        sink.append(b"second".to_vec());

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, format!("{rand_str}\nsecond\n"));
    }

    #[test]
    fn test_open_appends_to_existing_file() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let path = temp_dir.path().join("app.log");
        fs::write(&path, "kept\n").unwrap();

        let sink = FileSink::open(&path).unwrap();
        sink.append(b"added".to_vec());
        sink.close().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "kept\nadded\n");
    }

    #[test]
    fn test_open_missing_parent() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let path = temp_dir.path().join("missing").join("app.log");

        let err = FileSink::open(&path).unwrap_err();
        assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
        assert!(err.to_string().contains("failed to open log file"));
    }

    #[test]
    fn test_disable_is_idempotent() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let sink = FileSink::open(temp_dir.path().join("app.log")).unwrap();
        assert!(sink.is_enabled());

        sink.disable();
        sink.disable();
        assert!(!sink.is_enabled());

        // writes with no file are dropped
        sink.append(b"lost".to_vec());
        assert!(sink.close().is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_close_device_file() {
        let sink = FileSink::open("/dev/null").unwrap();
        sink.append(b"discarded".to_vec());

        sink.close().unwrap();
        assert!(!sink.is_enabled());
    }

    #[test]
    fn test_replace_failure_leaves_no_file() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let sink = FileSink::open(temp_dir.path().join("app.log")).unwrap();

        let bad = temp_dir.path().join("missing").join("app.log");
        assert!(sink.replace(&bad).is_err());
        assert!(!sink.is_enabled());
    }

    fn generate_random_string() -> String {
        let mut rng = rand::rng();
        let len = rng.random_range(50..=100);
        std::iter::repeat(())
            .map(|()| rng.sample(Alphanumeric))
            .map(char::from)
            .take(len)
            .collect()
    }
}
