//! Chord model
//!
//! A chord token such as `abm7sus4/g#` breaks down as:
//!
//! ```text
//! [Ab][m7sus4]/[G#]
//!
//! root     = Ab
//! quality  = m7sus4
//! bass     = G#
//! minor    = true
//! ```
//!
//! The quality is kept as opaque text. Only the root, the bass and the "is this a
//! minor chord" bit take part in key estimation and transposition.

use crate::error::ParseError;
use crate::pitch::{Accidental, Note};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// `(` prefix, root, quality up to `/`, optional `/bass`, and whatever is left.
///
/// A `/` that is not followed by a note letter is not consumed by the bass group and
/// ends up in the trailing annotation, so nothing is lost on serialization.
static CHORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^(\()?([A-Ga-g][b#]?)([^/]*)(?:/([A-Ga-g][b#]?))?(.*)$").unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    pub root: Note,
    pub quality: String,
    pub bass: Option<Note>,
    /// Anything after the bass note, kept verbatim.
    pub annotation: String,
    /// A leading `(` marking an optional or alternate chord.
    pub opening_paren: bool,
}

impl Chord {
    /// Bare chord with just a root.
    pub fn new(root: Note) -> Self {
        Chord {
            root,
            quality: String::new(),
            bass: None,
            annotation: String::new(),
            opening_paren: false,
        }
    }

    /// True when the quality, once every `maj` is removed, starts with `m`.
    ///
    /// `m7`, `min` and `mmaj7` are minor; `maj7` and `sus4` are not.
    pub fn is_minor(&self) -> bool {
        self.quality.replace("maj", "").starts_with('m')
    }

    /// Move root and bass up by `shift` semitones, one step at a time.
    ///
    /// Callers reduce the shift modulo 12 first; walking a full octave lands on the
    /// same pitch class but not necessarily the same spelling.
    pub fn transpose(&mut self, shift: u32) {
        for _ in 0..shift {
            self.root = self.root.semitone_up();
            self.bass = self.bass.map(Note::semitone_up);
        }
    }

    /// Respell black-key root and bass toward `accidental`.
    pub fn normalise(&mut self, accidental: Accidental) {
        self.root = self.root.spelled(accidental);
        self.bass = self.bass.map(|bass| bass.spelled(accidental));
    }
}

impl FromStr for Chord {
    type Err = ParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let caps = CHORD_REGEX
            .captures(token)
            .ok_or_else(|| ParseError::InvalidChord(token.to_string()))?;

        let root = caps[2].parse::<Note>()?;
        let bass = caps
            .get(4)
            .map(|m| m.as_str().parse::<Note>())
            .transpose()?;

        Ok(Chord {
            root,
            quality: caps[3].to_string(),
            bass,
            annotation: caps[5].to_string(),
            opening_paren: caps.get(1).is_some(),
        })
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.opening_paren {
            f.write_str("(")?;
        }
        write!(f, "{}{}", self.root, self.quality)?;
        if let Some(bass) = self.bass {
            write!(f, "/{bass}")?;
        }
        f.write_str(&self.annotation)
    }
}
