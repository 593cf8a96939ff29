//! Format implementations
//!
//! This module contains all formats a song can be rendered to.

pub mod chordpro;
pub mod html;
pub mod json;
pub mod text;

pub use chordpro::ChordProFormat;
pub use html::HtmlFormat;
pub use json::JsonFormat;
pub use text::{TextFormat, TextOptions};
