//! Line splitting
//!
//! ```text
//! [Em7]Hello, [Dsus4]why not
//!
//! Text("") Chord("Em7") Text("Hello, ") Chord("Dsus4") Text("why not")
//! ```
//!
//! The result always alternates text and chord, starting and ending with text (either
//! may be empty), so chord `i` sits between text `i` and text `i + 1`. Brackets do not
//! nest: a chord runs to the first `]`, and an unterminated `[` swallows the rest of
//! the line as one chord token.

/// One piece of a split line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Chord {
        token: &'a str,
        /// False when the line ended before a closing `]`.
        closed: bool,
    },
}

impl<'a> Segment<'a> {
    pub fn as_chord(&self) -> Option<&'a str> {
        match self {
            Segment::Chord { token, .. } => Some(*token),
            Segment::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            Segment::Text(text) => Some(*text),
            Segment::Chord { .. } => None,
        }
    }

    fn write_to(&self, out: &mut String) {
        match self {
            Segment::Text(text) => out.push_str(text),
            Segment::Chord { token, closed } => {
                out.push('[');
                out.push_str(token);
                if *closed {
                    out.push(']');
                }
            }
        }
    }
}

/// Split `line` into alternating text and chord segments in document order.
pub fn split(line: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest = line;
    loop {
        let Some(open) = rest.find('[') else {
            segments.push(Segment::Text(rest));
            return segments;
        };
        segments.push(Segment::Text(&rest[..open]));
        let inner = &rest[open + 1..];
        match inner.find(']') {
            Some(close) => {
                segments.push(Segment::Chord {
                    token: &inner[..close],
                    closed: true,
                });
                rest = &inner[close + 1..];
            }
            None => {
                segments.push(Segment::Chord {
                    token: inner,
                    closed: false,
                });
                segments.push(Segment::Text(""));
                return segments;
            }
        }
    }
}

/// Chord tokens of `line`, left to right.
pub fn chords(line: &str) -> impl Iterator<Item = &str> {
    split(line).into_iter().filter_map(|s| s.as_chord())
}

/// Reassemble segments into a line, bracketing chords the way they were found.
pub fn join(segments: &[Segment<'_>]) -> String {
    let mut out = String::new();
    for segment in segments {
        segment.write_to(&mut out);
    }
    out
}

/// Rebuild `line` with every chord token replaced by `rewrite(token)`.
///
/// The first error aborts the rewrite. Lines without chords come back unchanged.
pub fn rewrite_chords<E, F>(line: &str, mut rewrite: F) -> Result<String, E>
where
    F: FnMut(&str) -> Result<String, E>,
{
    let mut out = String::with_capacity(line.len());
    for segment in split(line) {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Chord { token, closed } => {
                let replaced = rewrite(token)?;
                Segment::Chord {
                    token: &replaced,
                    closed,
                }
                .write_to(&mut out);
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_a_single_segment() {
        assert_eq!(split("Hello world"), vec![Segment::Text("Hello world")]);
        assert_eq!(split(""), vec![Segment::Text("")]);
    }

    #[test]
    fn alternates_text_and_chords() {
        let segments = split("[Em7]Hello, [Dsus4]why not");
        assert_eq!(
            segments,
            vec![
                Segment::Text(""),
                Segment::Chord {
                    token: "Em7",
                    closed: true
                },
                Segment::Text("Hello, "),
                Segment::Chord {
                    token: "Dsus4",
                    closed: true
                },
                Segment::Text("why not"),
            ]
        );
    }

    #[test]
    fn trailing_chord_is_followed_by_empty_text() {
        let segments = split("end[G]");
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[2], Segment::Text(""));
    }

    #[test]
    fn unterminated_bracket_runs_to_end_of_line() {
        let segments = split("la [G7 la la");
        assert_eq!(
            segments,
            vec![
                Segment::Text("la "),
                Segment::Chord {
                    token: "G7 la la",
                    closed: false
                },
                Segment::Text(""),
            ]
        );
        assert_eq!(join(&segments), "la [G7 la la");
    }

    #[test]
    fn brackets_do_not_nest() {
        let tokens: Vec<_> = chords("[[]]").collect();
        assert_eq!(tokens, vec!["["]);
        assert_eq!(join(&split("[[]]")), "[[]]");
    }

    #[test]
    fn text_segments_keep_positions() {
        let line = "[C]Hel[G]lo [Am]world";
        let text: String = split(line).iter().filter_map(|s| s.as_text()).collect();
        assert_eq!(text, "Hello world");
        assert_eq!(join(&split(line)), line);
    }

    #[test]
    fn rewrite_replaces_only_chords() {
        let out = rewrite_chords::<(), _>("[C]Hello [G]world", |t| Ok(t.to_lowercase()));
        assert_eq!(out, Ok("[c]Hello [g]world".to_string()));
    }

    #[test]
    fn rewrite_stops_at_first_error() {
        let mut seen = Vec::new();
        let out = rewrite_chords("[A][B][C]", |t| {
            seen.push(t.to_string());
            if t == "B" {
                Err("bad")
            } else {
                Ok(t.to_string())
            }
        });
        assert_eq!(out, Err("bad"));
        assert_eq!(seen, vec!["A", "B"]);
    }
}
