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

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::thread;

use rand::Rng;
use rand::distr::Alphanumeric;
use serde_json::Value;
use tempfile::TempDir;
use yagalog::ColorMode;
use yagalog::Logger;
use yagalog::append::Console;

const THREADS: usize = 8;
const MESSAGES: usize = 100;

fn build_logger(path: &std::path::Path) -> Logger {
    Logger::builder(path)
        .color_mode(ColorMode::Never)
        .console(Console::new(io::sink(), false))
        .build()
        .unwrap()
}

fn message(thread: usize, seq: usize, padding: &str) -> String {
    format!("thread-{thread} seq-{seq} {padding}")
}

fn random_padding() -> String {
    let mut rng = rand::rng();
    let len = rng.random_range(50..=500);
    std::iter::repeat(())
        .map(|()| rng.sample(Alphanumeric))
        .map(char::from)
        .take(len)
        .collect()
}

#[test]
fn test_concurrent_plain_records() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let path = temp_dir.path().join("app.log");
    let logger = build_logger(&path);
    let padding = random_padding();

    thread::scope(|s| {
        for t in 0..THREADS {
            let logger = &logger;
            let padding = padding.as_str();
            s.spawn(move || {
                for i in 0..MESSAGES {
                    yagalog::info!(logger, "{}", message(t, i, padding));
                }
            });
        }
    });
    logger.close().unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines = contents.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), THREADS * MESSAGES);

    let seen = lines
        .iter()
        .map(|line| {
            let (_, message) = line
                .split_once(" [INFO] ")
                .unwrap_or_else(|| panic!("malformed line: {line}"));
            message.to_string()
        })
        .collect::<BTreeSet<_>>();
    let expected = (0..THREADS)
        .flat_map(|t| (0..MESSAGES).map(move |i| (t, i)))
        .map(|(t, i)| message(t, i, &padding))
        .collect::<BTreeSet<_>>();
    assert_eq!(seen, expected);
}

#[test]
fn test_concurrent_json_records() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let path = temp_dir.path().join("app.log");
    let logger = Arc::new(build_logger(&path));
    logger.enable_json();
    logger.set_caller(true);
    let padding = random_padding();

    let handles = (0..THREADS)
        .map(|t| {
            let logger = logger.clone();
            let padding = padding.clone();
            thread::spawn(move || {
                for i in 0..MESSAGES {
                    yagalog::warn!(logger, "{}", message(t, i, &padding));
                }
            })
        })
        .collect::<Vec<_>>();
    for handle in handles {
        handle.join().unwrap();
    }

    let contents = fs::read_to_string(&path).unwrap();
    let mut seen = BTreeSet::new();
    for line in contents.lines() {
        let record: Value = serde_json::from_str(line).unwrap();
        assert_eq!(record["level"], "WARNING");
        assert!(record["caller"].as_str().unwrap().starts_with("concurrent_writes.rs:"));
        seen.insert(record["msg"].as_str().unwrap().to_string());
    }
    assert_eq!(seen.len(), THREADS * MESSAGES);
    assert_eq!(contents.lines().count(), THREADS * MESSAGES);
}

#[test]
fn test_swap_file_while_writing() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let first = temp_dir.path().join("first.log");
    let second = temp_dir.path().join("second.log");
    let logger = build_logger(&first);
    logger.enable_json();
    let done = AtomicBool::new(false);

    thread::scope(|s| {
        let writers = (0..THREADS)
            .map(|t| {
                let logger = &logger;
                s.spawn(move || {
                    for i in 0..MESSAGES {
                        yagalog::info!(logger, "{}", message(t, i, "swap"));
                    }
                })
            })
            .collect::<Vec<_>>();

        let logger = &logger;
        let done = &done;
        let (first, second) = (&first, &second);
        s.spawn(move || {
            let mut toggle = false;
            while !done.load(Ordering::Relaxed) {
                let path = if toggle { first } else { second };
                logger.enable_file(path).unwrap();
                if toggle {
                    logger.disable_file();
                }
                toggle = !toggle;
            }
        });

        for writer in writers {
            writer.join().unwrap();
        }
        done.store(true, Ordering::Relaxed);
    });

    // every line that made it to either file is whole
    let mut total = 0;
    for path in [&first, &second] {
        let contents = fs::read_to_string(path).unwrap_or_default();
        assert!(contents.is_empty() || contents.ends_with('\n'));
        for line in contents.lines() {
            let record: Value = serde_json::from_str(line).unwrap();
            assert_eq!(record["level"], "INFO");
            assert!(record["msg"].as_str().unwrap().ends_with(" swap"));
            total += 1;
        }
    }
    assert!(total <= THREADS * MESSAGES);
}
