//! Text rewriting: shorthand expansion and name-token → symbol substitution.
//!
//! Every pass is a sequence of literal replacements, one table entry at a
//! time, in table order. Earlier entries win where two of them overlap.

mod color;
#[cfg(test)]
mod tests;

pub use color::{leading_color, BLACK, COLOR_ESCAPE, WHITE};

use std::collections::HashSet;

use tracing::{debug, debug_span, warn};

use crate::config::{ConfigError, EmojiConfig};
use crate::shortcuts::ShortcutMap;
use crate::symbols::{LoadError, NameSource, SymbolTable};

/// Stable player identifier.
pub type PlayerId = uuid::Uuid;

/// Where a piece of text came from. Selects the substitution variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Chat,
    Sign,
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Unloaded,
    Loaded,
}

/// Problem absorbed during `load`. The engine still ends up loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadIssue {
    #[error(transparent)]
    Names(#[from] LoadError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Default)]
pub struct LoadReport {
    pub symbols: usize,
    pub shortcuts: usize,
    pub issues: Vec<LoadIssue>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Replace every configured shortcut with its name-token.
pub fn expand_shorthand(text: &str, shortcuts: &ShortcutMap) -> String {
    shortcuts.expand(text)
}

/// Replace every name-token with its symbol.
pub fn to_symbol(text: &str, names: &SymbolTable) -> String {
    substitute(text, names, |out, symbol| out.push(symbol))
}

/// Like [`to_symbol`], with each symbol forced white and the text after it
/// reset to black. Signs have no per-character color otherwise.
pub fn to_symbol_for_sign(text: &str, names: &SymbolTable) -> String {
    substitute(text, names, |out, symbol| {
        out.push_str(WHITE);
        out.push(symbol);
        out.push_str(BLACK);
    })
}

/// Chat substitution.
///
/// With `fix_coloring` off, or for messages under three characters, this is
/// [`to_symbol`]. Otherwise each symbol is forced white and, when the message
/// starts with a color code, that code is emitted again after the symbol.
/// Without a leading color code the white carries on into the rest of the
/// message.
pub fn to_symbol_for_chat(text: &str, names: &SymbolTable, fix_coloring: bool) -> String {
    if !fix_coloring || text.chars().count() < 3 {
        return to_symbol(text, names);
    }
    let chat_color = leading_color(text);
    substitute(text, names, |out, symbol| {
        out.push_str(WHITE);
        out.push(symbol);
        if let Some(color) = chat_color {
            out.push_str(color);
        }
    })
}

fn substitute(text: &str, names: &SymbolTable, render: impl Fn(&mut String, char)) -> String {
    let mut out = text.to_string();
    let mut replacement = String::new();
    for entry in names {
        if !out.contains(entry.token()) {
            continue;
        }
        replacement.clear();
        render(&mut replacement, entry.symbol());
        out = out.replace(entry.token(), &replacement);
    }
    out
}

/// Symbol and shortcut tables plus the per-player opt-out set.
///
/// Substitution methods are meant to be called in the `Loaded` state. An
/// unloaded engine has empty tables, so text passes through untouched.
#[derive(Debug)]
pub struct RewriteEngine {
    state: EngineState,
    symbols: SymbolTable,
    shortcuts: ShortcutMap,
    fix_coloring: bool,
    opted_out: HashSet<PlayerId>,
}

impl Default for RewriteEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RewriteEngine {
    /// An unloaded engine.
    pub fn new() -> Self {
        Self {
            state: EngineState::Unloaded,
            symbols: SymbolTable::new(),
            shortcuts: ShortcutMap::new(),
            fix_coloring: false,
            opted_out: HashSet::new(),
        }
    }

    /// Create an engine and load it immediately.
    pub fn loaded(names: &NameSource, config: &EmojiConfig) -> (Self, LoadReport) {
        let mut engine = Self::new();
        let report = engine.load(names, config);
        (engine, report)
    }

    /// Rebuild everything from scratch.
    ///
    /// Starts from [`disable`](Self::disable), so the opt-out set is cleared
    /// as well. Failures leave the affected table empty and are returned in
    /// the report; the engine is `Loaded` either way.
    pub fn load(&mut self, names: &NameSource, config: &EmojiConfig) -> LoadReport {
        let _span = debug_span!("load").entered();
        self.disable();

        let mut report = LoadReport::default();
        match SymbolTable::load(names) {
            Ok(table) => self.symbols = table,
            Err(e) => {
                warn!("an error occurred while loading emojis: {e}");
                report.issues.push(e.into());
            }
        }

        if config.validate() {
            let groups = config.shortcuts.as_deref().unwrap_or_default();
            self.shortcuts = ShortcutMap::from_groups(groups);
            self.fix_coloring = config.fix_coloring();
        } else {
            warn!("config is invalid, no shortcuts were loaded; fix the config and reload");
            report.issues.push(ConfigError::Invalid.into());
        }

        self.state = EngineState::Loaded;
        report.symbols = self.symbols.len();
        report.shortcuts = self.shortcuts.len();
        debug!(
            symbols = report.symbols,
            shortcuts = report.shortcuts,
            fix_coloring = self.fix_coloring,
            "engine loaded"
        );
        report
    }

    /// Clear all tables and the opt-out set.
    pub fn disable(&mut self) {
        self.symbols.clear();
        self.shortcuts.clear();
        self.opted_out.clear();
        self.fix_coloring = false;
        self.state = EngineState::Unloaded;
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_loaded(&self) -> bool {
        self.state == EngineState::Loaded
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn shortcuts(&self) -> &ShortcutMap {
        &self.shortcuts
    }

    pub fn fix_coloring(&self) -> bool {
        self.fix_coloring
    }

    pub fn has_shortcuts_off(&self, player: PlayerId) -> bool {
        self.opted_out.contains(&player)
    }

    /// Flip the player's opt-out. Returns `true` if shortcuts are now off.
    pub fn toggle_shortcuts_off(&mut self, player: PlayerId) -> bool {
        if self.opted_out.remove(&player) {
            false
        } else {
            self.opted_out.insert(player);
            true
        }
    }

    pub fn expand_shorthand(&self, text: &str) -> String {
        expand_shorthand(text, &self.shortcuts)
    }

    pub fn to_symbol(&self, text: &str) -> String {
        to_symbol(text, &self.symbols)
    }

    pub fn to_symbol_for_sign(&self, text: &str) -> String {
        to_symbol_for_sign(text, &self.symbols)
    }

    pub fn to_symbol_for_chat(&self, text: &str) -> String {
        to_symbol_for_chat(text, &self.symbols, self.fix_coloring)
    }

    /// Full pipeline for one piece of player text: shorthand expansion unless
    /// the player opted out, then the substitution variant for `source`.
    pub fn rewrite(&self, source: SourceKind, player: PlayerId, text: &str) -> String {
        let expanded;
        let text = if self.has_shortcuts_off(player) {
            text
        } else {
            expanded = self.expand_shorthand(text);
            expanded.as_str()
        };
        match source {
            SourceKind::Chat => self.to_symbol_for_chat(text),
            SourceKind::Sign => self.to_symbol_for_sign(text),
            SourceKind::Command => self.to_symbol(text),
        }
    }
}
