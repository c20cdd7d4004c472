//! IRC control-code dialect: the wire characters, the color palette,
//! and a parser that lifts a formatted line into styled text runs.

pub mod code;
pub mod color;
pub mod run;

pub use color::{Color, ParseColorError};
pub use run::{Style, TextRun, parse};
