//! Output formats for leadsheet songs
//!
//!     This crate turns a parsed [`Song`](leadsheet_parser::Song) into text for people or
//!     programs: chord-over-lyrics plain text, HTML tables, ChordPro source, or JSON.
//!
//! Architecture
//!
//!     - Format trait: uniform interface for all output formats
//!     - FormatRegistry: centralized discovery and selection of formats by name
//!     - Format implementations: one module per format under `formats/`
//!
//!     This is a pure lib: it powers leadsheet-cli but is shell agnostic, so nothing here
//!     prints, reads env vars or touches the filesystem.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── text                # chord row above lyric row
//!     │   ├── html                # one two-row table per line
//!     │   ├── chordpro            # back to inline [chord] source
//!     │   └── json
//!     ├── lib.rs
//!
//! Formats are render-only. Reading songs is the parser's job, and transposition happens
//! before a song reaches any format.

pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub use error::FormatError;
pub use format::Format;
pub use registry::FormatRegistry;
