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

use serde::Serialize;

use crate::Error;
use crate::layout::Layout;
use crate::record::Caller;
use crate::record::Record;

/// A JSON layout for formatting file records, one object per line.
///
/// Output format:
///
/// ```json
/// {"time":"2024-08-11 22:44:57","level":"ERROR","msg":"Hello error!"}
/// {"time":"2024-08-11 22:44:57","level":"WARNING","msg":"Hello warning!","caller":"main.rs:52"}
/// {"time":"2024-08-11 22:44:57","level":"INFO","msg":"<b>Tom & Jerry</b>"}
/// ```
///
/// Markup characters such as `<`, `>` and `&` are written as-is.
///
/// # Examples
///
/// ```
/// use yagalog::layout::JsonLayout;
///
/// let json_layout = JsonLayout::default();
/// ```
#[derive(Default, Debug, Clone)]
#[non_exhaustive]
pub struct JsonLayout {}

#[derive(Debug, Serialize)]
struct RecordLine<'a> {
    time: &'a str,
    level: &'a str,
    msg: &'a str,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_caller"
    )]
    caller: Option<Caller<'a>>,
}

fn serialize_caller<S>(caller: &Option<Caller>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match caller {
        Some(caller) => serializer.collect_str(caller),
        None => serializer.serialize_none(),
    }
}

impl JsonLayout {
    pub(crate) fn format(&self, record: &Record) -> Result<Vec<u8>, Error> {
        let record_line = RecordLine {
            time: record.time(),
            level: record.level().name(),
            msg: record.message(),
            caller: record.caller(),
        };

        serde_json::to_vec(&record_line)
            .map_err(|err| Error::new("failed to serialize log record").with_source(err))
    }
}

impl From<JsonLayout> for Layout {
    fn from(layout: JsonLayout) -> Self {
        Layout::Json(layout)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::Level;

    #[test]
    fn test_format_without_caller() {
        let record = Record::new("2024-08-11 22:44:57", Level::Error, "Hello error!", None);
        let bytes = JsonLayout::default().format(&record).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"{"time":"2024-08-11 22:44:57","level":"ERROR","msg":"Hello error!"}"#
        );
    }

    #[test]
    fn test_markup_is_not_escaped() {
        let record = Record::new("t", Level::Info, "<b>Tom & Jerry</b>", None);
        let bytes = JsonLayout::default().format(&record).unwrap();
        let line = String::from_utf8(bytes).unwrap();
        assert!(line.contains("<b>Tom & Jerry</b>"), "{line}");
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_caller_round_trip() {
        let caller = Caller::new("main.rs", 52);
        let record = Record::new("t", Level::Warning, "line\nbreak \"quoted\"", Some(caller));
        let bytes = JsonLayout::default().format(&record).unwrap();
        assert!(!bytes.contains(&b'\n'));

        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["level"], "WARNING");
        assert_eq!(value["msg"], "line\nbreak \"quoted\"");
        assert_eq!(value["caller"], "main.rs:52");
    }
}
