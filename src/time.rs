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

//! Timestamp rendering with `strftime`-style patterns.

use jiff::Zoned;
use jiff::fmt::strtime;

/// The pattern used for file records unless configured otherwise.
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The pattern of the clock prefix on console lines.
pub(crate) const CONSOLE_TIME_FORMAT: &str = "%H:%M:%S";

/// Render `now` with `format`, or `None` if the pattern cannot be rendered.
pub(crate) fn render(format: &str, now: &Zoned) -> Option<String> {
    strtime::format(format, now).ok()
}

/// Return true if `format` is non-empty and renders the current time.
///
/// Some directives only fail against particular values, so this is a best-effort check.
pub(crate) fn is_valid(format: &str) -> bool {
    !format.is_empty() && render(format, &Zoned::now()).is_some()
}
