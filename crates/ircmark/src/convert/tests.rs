use super::*;

#[test]
fn trait_is_object_safe() {
    // Verify `StyleConverter` can be used as a trait object.
    fn _accepts(_: &dyn StyleConverter) {}
}

#[test]
fn top_level_functions_match_converters() {
    assert_eq!(markdown_to_irc("**x**"), MarkdownToIrc::new().convert("**x**"));
    assert_eq!(irc_to_markdown("\x02x\x02"), IrcToMarkdown::new().convert("\x02x\x02"));
}

#[test]
fn bold_survives_a_round_trip() {
    let irc = markdown_to_irc("**loud**");
    assert_eq!(irc, "\x02loud\x02");
    assert_eq!(irc_to_markdown(&irc), "**loud**");
}

#[test]
fn underscore_italic_normalizes_to_star() {
    let irc = markdown_to_irc("_quiet_");
    assert_eq!(irc, "\x1dquiet\x1d");
    assert_eq!(irc_to_markdown(&irc), "*quiet*");
}

#[test]
fn spoiler_text_survives_a_round_trip() {
    let irc = markdown_to_irc("||secret||");
    assert_eq!(irc, "\x0304,04||secret||\x03");
    assert_eq!(irc_to_markdown(&irc), "||secret||");
}

#[test]
fn dropped_styles_flatten_to_plain_text() {
    let irc = markdown_to_irc("~~gone~~ and `kept`");
    assert_eq!(irc, "gone and kept");
    assert_eq!(irc_to_markdown(&irc), "gone and kept");
}

#[test]
fn overlapping_irc_styles_bridge_to_nested_markers() {
    let md = irc_to_markdown("\x02bold \x1dboth\x02 italic\x1d");
    assert_eq!(md, "**bold *both** italic*");
}
