//! HTML chord sheet
//!
//! Every lyric line becomes a two-row `<table>`: chords in the top row, lyrics in the
//! bottom one, one cell per `(chord, text)` pair. Cells line up on their own so no
//! character counting is needed, but neighbouring cells still need a gap:
//!
//! - every cell but the last gets a trailing space on its chord
//! - if that chord is wider than its lyric, the lyric gets ` -` so the split word
//!   still reads as one
//!
//! Titles become `<h1>` and `<h2>`. Cells keep their whitespace (`white-space: pre`).

use crate::error::FormatError;
use crate::format::Format;
use leadsheet_parser::{Song, SongLine};

const STYLE: &str = "\
table.line { border-collapse: collapse; margin: 0 0 4px 0; }
table.line td { padding: 0; white-space: pre; vertical-align: bottom; }
tr.chords td { font: bold 10pt Times, serif; }
tr.lyrics td { font: 12pt Times, serif; }
";

/// Standalone HTML page, one table per line.
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Standalone HTML page with a chord table per line"
    }

    fn file_extension(&self) -> &str {
        "html"
    }

    fn render(&self, song: &Song) -> Result<String, FormatError> {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        if let Some(title) = &song.title {
            out.push_str(&format!("<title>{}</title>\n", escape_html(title)));
        }
        out.push_str("<style>\n");
        out.push_str(STYLE);
        out.push_str("</style>\n</head>\n<body>\n");

        if let Some(title) = &song.title {
            out.push_str(&format!("<h1>{}</h1>\n", escape_html(title)));
        }
        if let Some(subtitle) = &song.subtitle {
            out.push_str(&format!("<h2>{}</h2>\n", escape_html(subtitle)));
        }
        for line in &song.lines {
            out.push_str(&render_table(line));
        }

        out.push_str("</body>\n</html>\n");
        Ok(out)
    }
}

fn render_table(line: &SongLine) -> String {
    let last = line.pairs.len().saturating_sub(1);
    let mut chords = String::new();
    let mut lyrics = String::new();

    for (idx, pair) in line.pairs.iter().enumerate() {
        let mut chord = pair.chord.clone().unwrap_or_default();
        let mut text = pair.text.clone();
        if idx < last {
            if chord.chars().count() > text.chars().count() {
                text.push_str(" -");
            }
            chord.push(' ');
        }
        chords.push_str(&format!("<td>{}</td>", escape_html(&chord)));
        lyrics.push_str(&format!("<td>{}</td>", escape_html(&text)));
    }

    format!(
        "<table class=\"line\">\n<tr class=\"chords\">{chords}</tr>\n<tr class=\"lyrics\">{lyrics}</tr>\n</table>\n"
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
