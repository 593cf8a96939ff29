//! Pitch-class tables
//!
//! Everything here is a `const` or a `match`, so the tables are immutable and shared
//! by every caller without initialization order concerns.
//!
//! Accidental normalisation. Chords in each key, read across (I, V/vii, ii, bIII, iii,
//! IV, V/VII, V, V/vi, vi, bVII, V/V):
//!
//! ```text
//! [C]  [A/C#]  [Dm]  [Eb] [Em]  [F]  [D/F#] [G]  [E/G#]  [Am]  [Bb] [G/B]
//! [D]  [B/D#]  [Em]  [F]  [F#m] [G]  [E/G#] [A]  [F#/A#] [Bm]  [C]  [A/C#]
//! [F]  [D/F#]  [Gm]  [Ab] [Am]  [Bb] [G/B]  [C]  [A/C#]  [Dm]  [Eb] [C/E]
//! [G]  [E/G#]  [Am]  [Bb] [Bm]  [C]  [A/C#] [D]  [B/D#]  [Em]  [F]  [D/F#]
//! [A]  [F#/A#] [Bm]  [C]  [C#m] [D]  [B/D#] [E]  [C#/F]  [F#m] [G]  [E/G#]
//! [Bb] [G/B]   [Cm]  [Db] [Dm]  [Eb] [C/E]  [F]  [D/F#]  [Gm]  [Ab] [F/A]
//! [B]  [G#/C]  [C#m] [D]  [D#m] [E]  [C#/F] [F#] [D#/G]  [G#m] [A]  [F#/A#]
//! ```

use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

/// Number of pitch classes in an octave.
pub const SEMITONES: u8 = 12;

/// Preferred accidental when respelling a black-key pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accidental {
    Flat,
    Sharp,
}

impl Accidental {
    pub fn as_char(self) -> char {
        match self {
            Accidental::Flat => 'b',
            Accidental::Sharp => '#',
        }
    }
}

/// Likely accidental used in the key whose tonic sits at each offset (C = 0).
pub const KEY_ACCIDENTALS: [Accidental; SEMITONES as usize] = {
    use Accidental::{Flat as F, Sharp as S};
    [F, S, S, F, S, F, S, S, S, S, F, S]
};

/// Accidental preference for a key offset; offsets wrap modulo 12.
pub fn key_accidental(offset: u8) -> Accidental {
    KEY_ACCIDENTALS[(offset % SEMITONES) as usize]
}

/// A pitch spelling as it may appear in a chord root or bass.
///
/// The five black keys have two spellings each, so there are 17 variants for the 12
/// pitch classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Note {
    C,
    Cs,
    Db,
    D,
    Ds,
    Eb,
    E,
    F,
    Fs,
    Gb,
    G,
    Gs,
    Ab,
    A,
    As,
    Bb,
    B,
}

impl Note {
    /// Every accepted spelling, in pitch order.
    pub const ALL: [Note; 17] = [
        Note::C,
        Note::Cs,
        Note::Db,
        Note::D,
        Note::Ds,
        Note::Eb,
        Note::E,
        Note::F,
        Note::Fs,
        Note::Gb,
        Note::G,
        Note::Gs,
        Note::Ab,
        Note::A,
        Note::As,
        Note::Bb,
        Note::B,
    ];

    /// Spelling of the pitch class at `offset` (wrapping), black keys toward `accidental`.
    pub fn from_offset(offset: u8, accidental: Accidental) -> Note {
        let sharp = match offset % SEMITONES {
            0 => Note::C,
            1 => Note::Cs,
            2 => Note::D,
            3 => Note::Ds,
            4 => Note::E,
            5 => Note::F,
            6 => Note::Fs,
            7 => Note::G,
            8 => Note::Gs,
            9 => Note::A,
            10 => Note::As,
            _ => Note::B,
        };
        sharp.spelled(accidental)
    }

    /// Conventional name of the key whose tonic sits at `offset`.
    pub fn key_name(offset: u8) -> Note {
        Note::from_offset(offset, key_accidental(offset))
    }

    /// Pitch-class offset from C, 0..=11.
    pub fn offset(self) -> u8 {
        match self {
            Note::C => 0,
            Note::Cs | Note::Db => 1,
            Note::D => 2,
            Note::Ds | Note::Eb => 3,
            Note::E => 4,
            Note::F => 5,
            Note::Fs | Note::Gb => 6,
            Note::G => 7,
            Note::Gs | Note::Ab => 8,
            Note::A => 9,
            Note::As | Note::Bb => 10,
            Note::B => 11,
        }
    }

    /// The spelling one semitone up.
    ///
    /// Both spellings of a black key resolve to the natural above, and naturals step to
    /// the sharp spelling (`E` and `B` have no sharp and step to `F` and `C`).
    pub fn semitone_up(self) -> Note {
        match self {
            Note::Cs | Note::Db => Note::D,
            Note::Ds | Note::Eb => Note::E,
            Note::Fs | Note::Gb => Note::G,
            Note::Gs | Note::Ab => Note::A,
            Note::As | Note::Bb => Note::B,
            Note::C => Note::Cs,
            Note::D => Note::Ds,
            Note::E => Note::F,
            Note::F => Note::Fs,
            Note::G => Note::Gs,
            Note::A => Note::As,
            Note::B => Note::C,
        }
    }

    /// Flat spelling of a black key; naturals and flats are returned as-is.
    pub fn flat(self) -> Note {
        match self {
            Note::Cs => Note::Db,
            Note::Ds => Note::Eb,
            Note::Fs => Note::Gb,
            Note::Gs => Note::Ab,
            Note::As => Note::Bb,
            other => other,
        }
    }

    /// Sharp spelling of a black key; naturals and sharps are returned as-is.
    pub fn sharp(self) -> Note {
        match self {
            Note::Db => Note::Cs,
            Note::Eb => Note::Ds,
            Note::Gb => Note::Fs,
            Note::Ab => Note::Gs,
            Note::Bb => Note::As,
            other => other,
        }
    }

    /// Respell toward `accidental`.
    pub fn spelled(self, accidental: Accidental) -> Note {
        match accidental {
            Accidental::Flat => self.flat(),
            Accidental::Sharp => self.sharp(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Note::C => "C",
            Note::Cs => "C#",
            Note::Db => "Db",
            Note::D => "D",
            Note::Ds => "D#",
            Note::Eb => "Eb",
            Note::E => "E",
            Note::F => "F",
            Note::Fs => "F#",
            Note::Gb => "Gb",
            Note::G => "G",
            Note::Gs => "G#",
            Note::Ab => "Ab",
            Note::A => "A",
            Note::As => "A#",
            Note::Bb => "Bb",
            Note::B => "B",
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Note {
    type Err = ParseError;

    /// The letter is case-insensitive; the accidental must be `b` or `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars
            .next()
            .map(|c| c.to_ascii_uppercase())
            .ok_or_else(|| ParseError::UnknownSpelling(s.to_string()))?;
        let accidental = chars.next();
        if chars.next().is_some() {
            return Err(ParseError::UnknownSpelling(s.to_string()));
        }

        let note = match (letter, accidental) {
            ('C', None) => Note::C,
            ('C', Some('#')) => Note::Cs,
            ('D', Some('b')) => Note::Db,
            ('D', None) => Note::D,
            ('D', Some('#')) => Note::Ds,
            ('E', Some('b')) => Note::Eb,
            ('E', None) => Note::E,
            ('F', None) => Note::F,
            ('F', Some('#')) => Note::Fs,
            ('G', Some('b')) => Note::Gb,
            ('G', None) => Note::G,
            ('G', Some('#')) => Note::Gs,
            ('A', Some('b')) => Note::Ab,
            ('A', None) => Note::A,
            ('A', Some('#')) => Note::As,
            ('B', Some('b')) => Note::Bb,
            ('B', None) => Note::B,
            _ => return Err(ParseError::UnknownSpelling(s.to_string())),
        };
        Ok(note)
    }
}
