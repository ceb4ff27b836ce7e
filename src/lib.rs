//! Emoji chat: rewrites player text (chat, sign lines, commands) by expanding
//! shortcuts and replacing emoji name-tokens with private-use symbols.
//!
//! The substitution engine lives in `emoji_core`; this crate is the thin layer
//! a game server plugin calls into once per event.

mod chat;
pub mod trace_init;

pub use chat::{read_config_or_default, EmojiChat};
pub use emoji_core::{
    config, rewrite, shortcuts, symbols, EmojiConfig, LoadReport, NameSource, PlayerId,
    SourceKind,
};

pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
