//! Song loading utilities
//!
//! `SongLoader` holds the source text of one song and chains the library passes on it.
//! Transposing returns a new loader over the rewritten text, which then goes through
//! the same parse path as an untransposed song.
//!
//! ```rust
//! use leadsheet_parser::loader::SongLoader;
//!
//! let song = SongLoader::from_string("{title: Test}\n[C]Hello [G]world\n")
//!     .transpose("D")?
//!     .parse();
//! ```

use crate::error::{LoaderError, TransposeError};
use crate::key::KeyEstimate;
use crate::song::Song;
use crate::transpose::{estimate_keys, transpose_lines};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongLoader {
    source: String,
}

impl SongLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let source = fs::read_to_string(path)?;
        Ok(SongLoader { source })
    }

    pub fn from_string<S: Into<String>>(source: S) -> Self {
        SongLoader {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    fn lines(&self) -> Vec<&str> {
        self.source.lines().collect()
    }

    /// Rewrite every chord into the key named by `target`.
    pub fn transpose(&self, target: &str) -> Result<SongLoader, TransposeError> {
        let mut source = transpose_lines(&self.lines(), target)?.join("\n");
        if self.source.ends_with('\n') {
            source.push('\n');
        }
        Ok(SongLoader { source })
    }

    /// Transpose when a target is given, otherwise pass the source through unchanged.
    pub fn transpose_opt(self, target: Option<&str>) -> Result<SongLoader, TransposeError> {
        match target {
            Some(target) => self.transpose(target),
            None => Ok(self),
        }
    }

    /// Key estimate for each paragraph.
    pub fn estimate_keys(&self) -> Result<Vec<KeyEstimate>, TransposeError> {
        estimate_keys(&self.lines())
    }

    pub fn parse(&self) -> Song {
        Song::parse(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untransposed_source_is_untouched() {
        let loader = SongLoader::from_string("[C]a\n\n[G]b\n")
            .transpose_opt(None)
            .unwrap();
        assert_eq!(loader.source(), "[C]a\n\n[G]b\n");
    }

    #[test]
    fn transpose_keeps_trailing_newline() {
        let loader = SongLoader::from_string("[C]Hello [G]world\n")
            .transpose("D")
            .unwrap();
        assert_eq!(loader.source(), "[D]Hello [A]world\n");

        let loader = SongLoader::from_string("[C]Hello [G]world")
            .transpose("D")
            .unwrap();
        assert_eq!(loader.source(), "[D]Hello [A]world");
    }

    #[test]
    fn parse_after_transpose_sees_new_chords() {
        let song = SongLoader::from_string("{title: T}\n[C]Hello [G]world\n")
            .transpose("D")
            .unwrap()
            .parse();
        assert_eq!(song.title.as_deref(), Some("T"));
        assert_eq!(song.lines[0].pairs[0].chord.as_deref(), Some("D"));
        assert_eq!(song.lines[0].pairs[1].chord.as_deref(), Some("A"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = SongLoader::from_path("/definitely/not/here.cho").unwrap_err();
        assert!(matches!(err, LoaderError::Io(_)));
    }
}
