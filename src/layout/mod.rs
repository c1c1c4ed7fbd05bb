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

//! Layouts for formatting file records.

pub use json::JsonLayout;
pub use text::TextLayout;

use crate::Error;
use crate::record::Record;

mod json;
mod text;

/// Represents a layout for formatting file records.
///
/// The returned bytes never carry the line terminator; the file sink appends it.
#[derive(Debug, Clone)]
pub enum Layout {
    Text(TextLayout),
    Json(JsonLayout),
}

impl Layout {
    pub(crate) fn format(&self, record: &Record) -> Result<Vec<u8>, Error> {
        match self {
            Layout::Text(layout) => Ok(layout.format(record)),
            Layout::Json(layout) => layout.format(record),
        }
    }
}
