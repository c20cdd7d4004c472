//! # ircmark
//!
//! Inline style conversion between two chat formatting dialects: a
//! markdown-like dialect (bold/italic/underline/strikethrough/spoiler/
//! inline-code markers) and the terminal-control-code dialect used by
//! line-oriented chat protocols (bold/italic/underline/color escapes).
//!
//! A bridge relaying messages between the two networks calls
//! [`markdown_to_irc`] for traffic headed to the control-code side and
//! [`irc_to_markdown`] for traffic headed the other way; everything else
//! (connections, relay plumbing, commands) lives outside this crate.
//!
//! Modules:
//!
//! - **[`span`]** -- [`Span`], the style-annotated parse tree
//! - **[`markdown`]** -- parser for the markdown dialect
//! - **[`irc`]** -- control-code constants, writer helpers, the color
//!   palette, and the run parser
//! - **[`convert`]** -- the two direction converters and the
//!   [`StyleDispatcher`] registry

pub mod convert;
pub mod irc;
pub mod markdown;
pub mod span;

pub use convert::{
    IrcToMarkdown, MarkdownToIrc, StyleConverter, StyleDispatcher, irc_to_markdown,
    markdown_to_irc,
};
pub use irc::{Color, ParseColorError, Style, TextRun};
pub use span::Span;
