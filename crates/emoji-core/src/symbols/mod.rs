//! Ordered name → symbol table.
//!
//! Every name receives one codepoint from the private-use area, assigned
//! sequentially from [`SYMBOL_BASE`] in list order. The assignment only
//! depends on list position, so reloading an unchanged list reproduces the
//! same symbols. Reordering the list changes the meaning of every symbol after
//! the first moved name, which breaks glyphs already shipped in resource packs.

mod names;

pub use names::{parse_name_list, NameSource, DEFAULT_NAMES};

use names::strip_colons;

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use tracing::{debug, warn};

/// First codepoint handed out (start of the BMP private-use area).
pub const SYMBOL_BASE: char = '\u{E000}';
/// Last codepoint of the BMP private-use area.
pub const SYMBOL_LAST: char = '\u{F8FF}';
/// Number of names a table can hold.
pub const SYMBOL_CAPACITY: usize = (SYMBOL_LAST as usize) - (SYMBOL_BASE as usize) + 1;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read name list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("name list has {count} names but only {max} symbols are available")]
    Capacity { count: usize, max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    name: String,
    token: String,
    symbol: char,
}

impl SymbolEntry {
    /// Bare name, e.g. `grin`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name-token as typed in chat, e.g. `:grin:`.
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }
}

/// Wrap a bare name into its colon-delimited name-token.
pub fn name_token(name: &str) -> String {
    format!(":{name}:")
}

#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    entries: Vec<SymbolEntry>,
    by_name: HashMap<String, usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign symbols to `names` in order.
    ///
    /// Duplicate names are skipped and do not consume a codepoint.
    pub fn build<I, S>(names: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for name in names {
            let name = strip_colons(name.as_ref().trim());
            if name.is_empty() {
                continue;
            }
            if table.by_name.contains_key(name) {
                warn!(name, "duplicate emoji name skipped");
                continue;
            }
            let index = table.entries.len();
            let symbol = (index < SYMBOL_CAPACITY)
                .then(|| char::from_u32(SYMBOL_BASE as u32 + index as u32))
                .flatten()
                .ok_or(LoadError::Capacity {
                    count: index + 1,
                    max: SYMBOL_CAPACITY,
                })?;
            table.by_name.insert(name.to_string(), index);
            table.entries.push(SymbolEntry {
                name: name.to_string(),
                token: name_token(name),
                symbol,
            });
        }
        debug!(names = table.entries.len(), "symbol table built");
        Ok(table)
    }

    /// Read `source` and build a table from its names.
    pub fn load(source: &NameSource) -> Result<Self, LoadError> {
        let content = source.read()?;
        Self::build(parse_name_list(&content))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in substitution order.
    pub fn iter(&self) -> std::slice::Iter<'_, SymbolEntry> {
        self.entries.iter()
    }

    /// Look up a symbol by bare name or name-token.
    pub fn symbol_of(&self, name: &str) -> Option<char> {
        self.by_name
            .get(strip_colons(name))
            .map(|&i| self.entries[i].symbol)
    }

    pub fn name_of(&self, symbol: char) -> Option<&str> {
        let offset = (symbol as u32).checked_sub(SYMBOL_BASE as u32)? as usize;
        self.entries.get(offset).map(|e| e.name.as_str())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.by_name.clear();
    }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = &'a SymbolEntry;
    type IntoIter = std::slice::Iter<'a, SymbolEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
