pub mod config;
pub mod rewrite;
pub mod shortcuts;
pub mod symbols;

pub use config::{EmojiConfig, ShortcutGroup};
pub use rewrite::{LoadReport, PlayerId, RewriteEngine, SourceKind};
pub use shortcuts::ShortcutMap;
pub use symbols::{NameSource, SymbolTable};
