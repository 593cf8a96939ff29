//! # leadsheet-parser
//!
//! Core library for lead-sheet notation: lyric lines with inline chord markers
//! such as `[Em7]Hello, [Dsus4]why not try the [Em]ChordPro for[Am]mat`.
//!
//! File Layout
//!
//!     src
//!     ├── pitch.rs        Pitch-class tables (offsets, semitone steps, key accidentals)
//!     ├── chord.rs        Chord model: parse, serialize, transpose, respell
//!     ├── key.rs          Per-paragraph chord histograms and key estimation
//!     ├── splitter.rs     Splits a line into alternating text / chord segments
//!     ├── transpose.rs    Document transposer (count, resolve, rewrite)
//!     ├── song.rs         Directives and the (chord, text) line model handed to renderers
//!     ├── loader.rs       Source loading and the transpose -> parse shortcut chain
//!     └── error.rs
//!
//! The data flow is: raw lines -> splitter -> chord parse -> histograms -> key
//! estimate per paragraph -> shift and respelling -> rewritten lines -> song model.
//!
//! This is a pure lib: nothing here prints or reads the environment. Diagnostics go
//! through `tracing`; the binary decides where they end up.

pub mod chord;
pub mod error;
pub mod key;
pub mod loader;
pub mod pitch;
pub mod song;
pub mod splitter;
pub mod transpose;

pub use chord::Chord;
pub use error::{LoaderError, ParseError, TransposeError};
pub use key::{estimate, ChordHistogram, KeyEstimate, Mode};
pub use loader::SongLoader;
pub use pitch::{Accidental, Note};
pub use song::{ChordPair, Directive, Song, SongLine};
pub use splitter::{split, Segment};
pub use transpose::{estimate_keys, resolve_target, transpose_lines, Plan, Target};
