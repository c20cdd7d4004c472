//! Dialect-aware style dispatch.
//!
//! Routes relayed message content through the appropriate
//! [`StyleConverter`] based on the target dialect name.

use std::collections::HashMap;

use super::StyleConverter;
use super::to_irc::MarkdownToIrc;
use super::to_markdown::IrcToMarkdown;

/// Dispatches style conversion based on the target dialect name.
///
/// Maps dialect names ("irc", "markdown") to their respective
/// [`StyleConverter`] implementations. Unknown targets get the content
/// passed through unchanged.
pub struct StyleDispatcher {
    converters: HashMap<String, Box<dyn StyleConverter>>,
}

impl StyleDispatcher {
    /// Create a dispatcher with both built-in converters registered.
    pub fn new() -> Self {
        let mut converters: HashMap<String, Box<dyn StyleConverter>> = HashMap::new();
        converters.insert("irc".into(), Box::new(MarkdownToIrc::new()));
        converters.insert("markdown".into(), Box::new(IrcToMarkdown::new()));
        Self { converters }
    }

    /// Convert message content for the given target dialect.
    ///
    /// If the target has a registered converter, applies it. Otherwise
    /// returns the content unchanged.
    pub fn convert(&self, target: &str, content: &str) -> String {
        match self.converters.get(target) {
            Some(converter) => converter.convert(content),
            None => content.to_string(),
        }
    }

    /// Register a custom converter for a target dialect name.
    pub fn register(&mut self, target: impl Into<String>, converter: Box<dyn StyleConverter>) {
        self.converters.insert(target.into(), converter);
    }

    /// List all registered target dialect names.
    pub fn targets(&self) -> Vec<String> {
        let mut names: Vec<String> = self.converters.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for StyleDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_has_two_converters() {
        let dispatcher = StyleDispatcher::new();
        assert_eq!(dispatcher.targets(), vec!["irc".to_string(), "markdown".to_string()]);
    }

    #[test]
    fn convert_to_irc() {
        let dispatcher = StyleDispatcher::new();
        assert_eq!(dispatcher.convert("irc", "**bold**"), "\x02bold\x02");
    }

    #[test]
    fn convert_to_markdown() {
        let dispatcher = StyleDispatcher::new();
        assert_eq!(dispatcher.convert("markdown", "\x02bold\x02"), "**bold**");
    }

    #[test]
    fn convert_unknown_target_passthrough() {
        let dispatcher = StyleDispatcher::new();
        let input = "**hello** \x02world\x02";
        assert_eq!(dispatcher.convert("matrix", input), input);
    }

    #[test]
    fn register_custom_converter() {
        struct UpperConverter;
        impl StyleConverter for UpperConverter {
            fn convert(&self, text: &str) -> String {
                text.to_uppercase()
            }
        }

        let mut dispatcher = StyleDispatcher::new();
        dispatcher.register("shout", Box::new(UpperConverter));
        assert_eq!(dispatcher.convert("shout", "hello"), "HELLO");
    }

    #[test]
    fn default_is_same_as_new() {
        let d1 = StyleDispatcher::new();
        let d2 = StyleDispatcher::default();
        assert_eq!(d1.targets(), d2.targets());
    }

    #[test]
    fn empty_content_passthrough() {
        let dispatcher = StyleDispatcher::new();
        assert_eq!(dispatcher.convert("irc", ""), "");
        assert_eq!(dispatcher.convert("unknown", ""), "");
    }
}
