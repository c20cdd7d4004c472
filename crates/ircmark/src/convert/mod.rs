//! Conversion between the two inline-style dialects.
//!
//! Each side of a bridge speaks its own dialect:
//!
//! - **Chat markdown** marks styles with `**`, `*`, `__`, `~~`, `||`
//!   and backtick pairs.
//! - **IRC** toggles styles with control characters (`\x02`, `\x1d`,
//!   `\x1f`, `\x03`, ...).
//!
//! The [`StyleConverter`] trait provides a uniform interface for
//! rewriting a line into the dialect of the network it is relayed to.

pub mod dispatch;
pub mod to_irc;
pub mod to_markdown;

pub use dispatch::StyleDispatcher;
pub use to_irc::MarkdownToIrc;
pub use to_markdown::IrcToMarkdown;

/// Trait for rewriting one line of inline-styled text into a target
/// dialect.
///
/// Implementations are used by bridges when relaying messages between
/// networks via the [`dispatch::StyleDispatcher`].
pub trait StyleConverter: Send + Sync {
    /// Convert the given single-line `text` into the target dialect.
    fn convert(&self, text: &str) -> String;
}

/// Convert one line of chat markdown into IRC control codes, with the
/// default red spoiler concealment.
pub fn markdown_to_irc(text: &str) -> String {
    MarkdownToIrc::new().convert(text)
}

/// Convert one formatted IRC line into chat markdown.
pub fn irc_to_markdown(text: &str) -> String {
    IrcToMarkdown::new().convert(text)
}

#[cfg(test)]
mod tests;
