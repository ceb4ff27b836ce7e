//! Shortcut → name-token map.
//!
//! Expansion walks the entries in load order and replaces every literal
//! occurrence of each shortcut, one entry at a time. When two shortcuts
//! overlap, whichever was loaded first claims the text.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::config::ShortcutGroup;
use crate::symbols::name_token;

#[derive(Debug, Clone, Default)]
pub struct ShortcutMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl ShortcutMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from shortcut groups, groups in order and shortcuts in
    /// order within each group.
    pub fn from_groups(groups: &[ShortcutGroup]) -> Self {
        let mut map = Self::new();
        for group in groups {
            let token = name_token(&group.name);
            for shortcut in &group.shortcuts {
                map.insert(shortcut, &token);
            }
        }
        debug!(
            groups = groups.len(),
            shortcuts = map.len(),
            "shortcuts loaded"
        );
        map
    }

    /// Map `shortcut` to `token`.
    ///
    /// A shortcut that is already present keeps its position and takes the new
    /// token. Empty shortcuts are ignored.
    pub fn insert(&mut self, shortcut: &str, token: &str) {
        if shortcut.is_empty() {
            warn!(token, "empty shortcut skipped");
            return;
        }
        match self.index.get(shortcut) {
            Some(&i) => {
                debug!(shortcut, old = %self.entries[i].1, new = token, "shortcut redefined");
                self.entries[i].1 = token.to_string();
            }
            None => {
                self.index.insert(shortcut.to_string(), self.entries.len());
                self.entries.push((shortcut.to_string(), token.to_string()));
            }
        }
    }

    pub fn get(&self, shortcut: &str) -> Option<&str> {
        self.index
            .get(shortcut)
            .map(|&i| self.entries[i].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(shortcut, token)` pairs in expansion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(s, t)| (s.as_str(), t.as_str()))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Replace every shortcut in `text` with its name-token.
    pub fn expand(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (shortcut, token) in &self.entries {
            if out.contains(shortcut.as_str()) {
                out = out.replace(shortcut.as_str(), token);
            }
        }
        out
    }
}
