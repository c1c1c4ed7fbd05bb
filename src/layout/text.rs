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

use std::fmt::Write;

use crate::layout::Layout;
use crate::record::Record;

/// A layout that formats file records as plain text.
///
/// Output format:
///
/// ```text
/// 2024-08-11 22:44:57 [ERROR] Hello error!
/// 2024-08-11 22:44:57 [WARNING] Hello warning! (main.rs:52)
/// 2024-08-11 22:44:57 [INFO] Hello info!
/// ```
///
/// The caller suffix is present only when caller reporting is enabled on the logger.
#[derive(Default, Debug, Clone)]
#[non_exhaustive]
pub struct TextLayout {}

impl TextLayout {
    pub(crate) fn format(&self, record: &Record) -> Vec<u8> {
        let time = record.time();
        let level = record.level().name();
        let message = record.message();

        let mut text = format!("{time} [{level}] {message}");
        if let Some(caller) = record.caller() {
            // SAFETY: write to a string always succeeds
            write!(&mut text, " ({caller})").unwrap();
        }
        text.into_bytes()
    }
}

impl From<TextLayout> for Layout {
    fn from(layout: TextLayout) -> Self {
        Layout::Text(layout)
    }
}
