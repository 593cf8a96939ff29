//! Format trait definition
//!
//! This module defines the core Format trait that all output formats implement.

use crate::error::FormatError;
use leadsheet_parser::Song;

/// Trait for song output formats
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn render(&self, song: &Song) -> Result<String, FormatError> {
///         Ok(song.lines.iter().map(|l| l.text() + "\n").collect())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "text", "html")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// Conventional file extension, without the dot
    fn file_extension(&self) -> &str {
        "txt"
    }

    /// Render a song to a string
    fn render(&self, song: &Song) -> Result<String, FormatError>;
}
