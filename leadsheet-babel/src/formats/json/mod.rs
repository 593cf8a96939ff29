//! JSON output of the song model
//!
//! Pretty-printed through serde. Chordless pairs omit the `chord` key, and missing
//! titles are omitted too.

use crate::error::FormatError;
use crate::format::Format;
use leadsheet_parser::Song;

pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "The parsed song as pretty JSON"
    }

    fn file_extension(&self) -> &str {
        "json"
    }

    fn render(&self, song: &Song) -> Result<String, FormatError> {
        let mut json = serde_json::to_string_pretty(song)?;
        json.push('\n');
        Ok(json)
    }
}
