//! Error types for chord parsing, transposition and loading

use thiserror::Error;

/// A chord token that does not follow the `root[quality][/bass][rest]` grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The token does not start with a letter A-G (after an optional `(`).
    #[error("unable to parse '{0}' as a valid chord")]
    InvalidChord(String),

    /// Letter and accidental matched, but the spelling is not one of the 17 we accept
    /// (`E#`, `Cb`, `Fb`, `B#`).
    #[error("unknown pitch spelling '{0}'")]
    UnknownSpelling(String),
}

/// Errors raised while transposing a whole document.
///
/// Any of these aborts the run; no partially rewritten text is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransposeError {
    #[error("unknown target key '{0}' (expected a root such as C, F# or Bb, or an offset 0-11)")]
    UnknownKey(String),

    #[error("line {line}: {source}")]
    Chord {
        line: usize,
        #[source]
        source: ParseError,
    },
}

/// Error that can occur when loading songs
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("transpose error: {0}")]
    Transpose(#[from] TransposeError),
}
