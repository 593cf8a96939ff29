//! ChordPro source output
//!
//! Writes the song back as inline-chord source, so a transposed song can be saved and
//! edited again. Titles come out as `{title: ..}` and `{subtitle: ..}` at the top.
//! Comments are not part of the song model and do not survive the trip.

use crate::error::FormatError;
use crate::format::Format;
use leadsheet_parser::{Song, SongLine};

pub struct ChordProFormat;

impl Format for ChordProFormat {
    fn name(&self) -> &str {
        "chordpro"
    }

    fn description(&self) -> &str {
        "ChordPro source with inline [chords]"
    }

    fn file_extension(&self) -> &str {
        "cho"
    }

    fn render(&self, song: &Song) -> Result<String, FormatError> {
        let mut out = String::new();
        if let Some(title) = &song.title {
            out.push_str(&format!("{{title: {title}}}\n"));
        }
        if let Some(subtitle) = &song.subtitle {
            out.push_str(&format!("{{subtitle: {subtitle}}}\n"));
        }
        for line in &song.lines {
            out.push_str(&render_line(line));
            out.push('\n');
        }
        Ok(out)
    }
}

fn render_line(line: &SongLine) -> String {
    let mut out = String::new();
    for pair in &line.pairs {
        if let Some(chord) = &pair.chord {
            out.push('[');
            out.push_str(chord);
            out.push(']');
        }
        out.push_str(&pair.text);
    }
    out
}
