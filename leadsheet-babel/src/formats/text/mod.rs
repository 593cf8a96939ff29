//! Plain-text chord sheet
//!
//! Each lyric line with chords becomes two rows, chords above the syllable they start
//! on:
//!
//! ```text
//! [Em7]Hello, [Dsus4]why not try the [Em]ChordPro for[Am]mat
//!
//! Em7    Dsus4           Em          Am
//! Hello, why not try the ChordPro format
//! ```
//!
//! When a chord is wider than the lyric under it, the next chord is pushed right by one
//! space past it and the lyric is padded to match. A gap that falls inside a word is
//! drawn as `-` so the word still reads as one (`Hel - lo`).

use crate::error::FormatError;
use crate::format::Format;
use leadsheet_parser::{Song, SongLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextOptions {
    pub show_titles: bool,
    pub hyphenate: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        TextOptions {
            show_titles: true,
            hyphenate: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TextFormat {
    options: TextOptions,
}

impl TextFormat {
    pub fn new(options: TextOptions) -> Self {
        TextFormat { options }
    }
}

impl Format for TextFormat {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Chords aligned above lyrics, for the terminal"
    }

    fn render(&self, song: &Song) -> Result<String, FormatError> {
        let mut out = String::new();
        if self.options.show_titles && (song.title.is_some() || song.subtitle.is_some()) {
            for heading in [&song.title, &song.subtitle].into_iter().flatten() {
                out.push_str(heading);
                out.push('\n');
            }
            out.push('\n');
        }
        for line in &song.lines {
            out.push_str(&render_line(line, self.options.hyphenate));
        }
        Ok(out)
    }
}

/// Render one line as `chords\nlyrics\n`, or just `lyrics\n` when it has no chords.
pub fn render_line(line: &SongLine, hyphenate: bool) -> String {
    let mut chord_row = String::new();
    let mut text_row = String::new();
    // Lyric characters written since the last chord started.
    let mut text_since_chord = 0;
    let mut prev_chord_len = 0;

    for pair in &line.pairs {
        if let Some(chord) = &pair.chord {
            if prev_chord_len > 0 && prev_chord_len >= text_since_chord {
                chord_row.push(' ');
                let gap = prev_chord_len - text_since_chord + 1;
                if !hyphenate || text_row.is_empty() || text_row.ends_with(' ') {
                    push_spaces(&mut text_row, gap);
                } else {
                    push_spaces(&mut text_row, if gap % 2 == 1 { gap / 2 } else { gap / 2 - 1 });
                    text_row.push('-');
                    push_spaces(&mut text_row, gap / 2);
                }
            } else if prev_chord_len < text_since_chord {
                push_spaces(&mut chord_row, text_since_chord - prev_chord_len);
            }
            chord_row.push_str(chord);
            prev_chord_len = chord.chars().count();
            text_since_chord = 0;
        }
        text_row.push_str(&pair.text);
        text_since_chord += pair.text.chars().count();
    }

    if chord_row.is_empty() {
        format!("{text_row}\n")
    } else {
        format!("{chord_row}\n{text_row}\n")
    }
}

fn push_spaces(out: &mut String, count: usize) {
    out.extend(std::iter::repeat(' ').take(count));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(source: &str) -> String {
        render_line(&SongLine::parse(source), true)
    }

    #[test]
    fn aligns_chords_over_their_syllables() {
        assert_eq!(
            render("[Em7]Hello, [Dsus4]why not try the [Em]ChordPro for[Am]mat"),
            "Em7    Dsus4           Em          Am\nHello, why not try the ChordPro format\n"
        );
    }

    #[test]
    fn text_before_first_chord_pushes_it_right() {
        assert_eq!(render("Hello [G]world"), "      G\nHello world\n");
    }

    #[test]
    fn wide_chord_inside_a_word_is_hyphenated() {
        assert_eq!(render("[Am7]Hel[Gsus4]lo"), "Am7 Gsus4\nHel-lo\n");
        assert_eq!(render("[Cmaj7]Hel[G]lo"), "Cmaj7 G\nHel - lo\n");
    }

    #[test]
    fn wide_chord_between_words_is_padded() {
        assert_eq!(render("[Cmaj7]Hi [G]there"), "Cmaj7 G\nHi    there\n");
    }

    #[test]
    fn hyphenation_can_be_turned_off() {
        let line = SongLine::parse("[Cmaj7]Hel[G]lo");
        assert_eq!(render_line(&line, false), "Cmaj7 G\nHel   lo\n");
    }

    #[test]
    fn lines_without_chords_are_single_rows() {
        assert_eq!(render("just words"), "just words\n");
        assert_eq!(render(""), "\n");
    }

    #[test]
    fn titles_are_optional() {
        let song = Song::parse("{title: T}\n{st: S}\n[C]la\n");
        let with = TextFormat::default().render(&song).unwrap();
        assert_eq!(with, "T\nS\n\nC\nla\n");

        let without = TextFormat::new(TextOptions {
            show_titles: false,
            hyphenate: true,
        })
        .render(&song)
        .unwrap();
        assert_eq!(without, "C\nla\n");
    }
}
