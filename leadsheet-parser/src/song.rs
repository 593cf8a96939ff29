//! Song model handed to renderers
//!
//! Source lines fall into three groups:
//!
//! - `# ...` comments, dropped
//! - `{name: args}` directives (title and subtitle are understood)
//! - everything else, lyric lines with inline chords
//!
//! A lyric line is stored as `(chord, text)` pairs: the chord sits above the start of
//! its text. Text before the first chord gets a pair without a chord.
//!
//! ```text
//! Hello [G]world   ->  (None, "Hello ") (Some("G"), "world")
//! [C]Hello         ->  (Some("C"), "Hello")
//! ```

use crate::splitter::{split, Segment};
use serde::Serialize;
use tracing::warn;

/// A `{name: args}` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Title(String),
    Subtitle(String),
    Unsupported { name: String, args: String },
}

impl Directive {
    /// Parse a directive line; `None` when the line does not start with `{`.
    pub fn parse(line: &str) -> Option<Directive> {
        if !line.starts_with('{') {
            return None;
        }
        let body = line.trim_matches(|c| matches!(c, '{' | '}' | ' ' | '\t'));
        let (name, args) = body.split_once(':').unwrap_or((body, ""));
        let (name, args) = (name.trim(), args.trim().to_string());

        let directive = match name {
            "title" | "t" => Directive::Title(args),
            "subtitle" | "st" => Directive::Subtitle(args),
            _ => Directive::Unsupported {
                name: name.to_string(),
                args,
            },
        };
        Some(directive)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChordPair {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chord: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SongLine {
    pub pairs: Vec<ChordPair>,
}

impl SongLine {
    pub fn parse(line: &str) -> Self {
        let segments = split(line);
        let mut pairs = Vec::with_capacity(segments.len() / 2 + 1);
        let mut chord = None;
        for segment in segments {
            match segment {
                Segment::Chord { token, .. } => chord = Some(token.to_string()),
                Segment::Text(text) => pairs.push(ChordPair {
                    chord: chord.take(),
                    text: text.to_string(),
                }),
            }
        }
        // A line opening with a chord has an empty lead-in; drop it.
        if line.starts_with('[') {
            pairs.remove(0);
        }
        SongLine { pairs }
    }

    pub fn has_chords(&self) -> bool {
        self.pairs.iter().any(|pair| pair.chord.is_some())
    }

    /// Lyric text with the chords taken out.
    pub fn text(&self) -> String {
        self.pairs.iter().map(|pair| pair.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Song {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub lines: Vec<SongLine>,
}

impl Song {
    pub fn parse(source: &str) -> Self {
        Self::from_lines(source.lines())
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut song = Song::default();
        for line in lines {
            let line = line.as_ref();
            if line.starts_with('#') {
                continue;
            }
            match Directive::parse(line) {
                Some(Directive::Title(title)) => song.title = Some(title),
                Some(Directive::Subtitle(subtitle)) => song.subtitle = Some(subtitle),
                Some(Directive::Unsupported { name, .. }) => {
                    warn!(directive = %name, "unsupported directive, keeping it as text");
                    song.lines.push(SongLine::parse(line));
                }
                None => song.lines.push(SongLine::parse(line)),
            }
        }
        song
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(chord: Option<&str>, text: &str) -> ChordPair {
        ChordPair {
            chord: chord.map(str::to_string),
            text: text.to_string(),
        }
    }

    #[test]
    fn parses_known_directives() {
        assert_eq!(
            Directive::parse("{title: Amazing Grace}"),
            Some(Directive::Title("Amazing Grace".to_string()))
        );
        assert_eq!(
            Directive::parse("{st:Traditional}"),
            Some(Directive::Subtitle("Traditional".to_string()))
        );
        assert_eq!(
            Directive::parse("{soc}"),
            Some(Directive::Unsupported {
                name: "soc".to_string(),
                args: String::new()
            })
        );
        assert_eq!(Directive::parse("no braces"), None);
    }

    #[test]
    fn line_starting_with_text_gets_chordless_lead_in() {
        let line = SongLine::parse("Hello [G]world");
        assert_eq!(
            line.pairs,
            vec![pair(None, "Hello "), pair(Some("G"), "world")]
        );
    }

    #[test]
    fn line_starting_with_chord_drops_empty_lead_in() {
        let line = SongLine::parse("[C]Hello [G]world");
        assert_eq!(
            line.pairs,
            vec![pair(Some("C"), "Hello "), pair(Some("G"), "world")]
        );
        assert_eq!(line.text(), "Hello world");
    }

    #[test]
    fn chord_at_end_has_empty_text() {
        let line = SongLine::parse("[C]la [G]");
        assert_eq!(line.pairs, vec![pair(Some("C"), "la "), pair(Some("G"), "")]);
    }

    #[test]
    fn blank_line_is_one_empty_pair() {
        let line = SongLine::parse("");
        assert_eq!(line.pairs, vec![pair(None, "")]);
        assert!(!line.has_chords());
    }

    #[test]
    fn song_collects_titles_and_skips_comments() {
        let song = Song::parse("{t: Title}\n{subtitle: Sub}\n# comment\n[C]la\n\n{x: y}\n");
        assert_eq!(song.title.as_deref(), Some("Title"));
        assert_eq!(song.subtitle.as_deref(), Some("Sub"));
        assert_eq!(song.lines.len(), 3);
        assert_eq!(song.lines[2].text(), "{x: y}");
    }
}
