//! Legacy formatting codes understood by game clients.

/// Escape character that starts a two-character color code.
pub const COLOR_ESCAPE: char = '\u{00A7}';
/// Reset to white, emitted before a symbol.
pub const WHITE: &str = "\u{00A7}f";
/// Reset to black, emitted after a symbol on signs.
pub const BLACK: &str = "\u{00A7}0";

/// The first two characters of `message` if they contain the color escape.
///
/// Returns `None` for messages shorter than two characters.
pub fn leading_color(message: &str) -> Option<&str> {
    let end = message.char_indices().nth(2).map_or(message.len(), |(i, _)| i);
    let prefix = &message[..end];
    (prefix.chars().count() == 2 && prefix.contains(COLOR_ESCAPE)).then_some(prefix)
}
