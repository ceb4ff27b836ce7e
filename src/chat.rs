//! Host-facing entry points.
//!
//! The host event layer calls one method per event and writes the returned
//! text back into the event. Every call goes through the same mutex, so a
//! reload never runs alongside a rewrite.

use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use emoji_core::config::load_config_file;
use emoji_core::{EmojiConfig, LoadReport, NameSource, PlayerId, RewriteEngine, SourceKind};
use tracing::{debug, info, warn};

struct Inner {
    engine: RewriteEngine,
    config: EmojiConfig,
}

pub struct EmojiChat {
    names: NameSource,
    inner: Mutex<Inner>,
}

/// Read the config at `path`. A missing or malformed file yields an empty
/// config, which loads symbols but no shortcuts.
pub fn read_config_or_default(path: &Path) -> EmojiConfig {
    match load_config_file(path) {
        Ok(config) => config,
        Err(e) => {
            warn!("{e}");
            EmojiConfig::default()
        }
    }
}

impl EmojiChat {
    pub fn new(names: NameSource, config: EmojiConfig) -> (Self, LoadReport) {
        let (engine, report) = RewriteEngine::loaded(&names, &config);
        log_report(&report);
        let chat = Self {
            names,
            inner: Mutex::new(Inner { engine, config }),
        };
        (chat, report)
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the config and rebuild the engine.
    pub fn reload(&self, config: EmojiConfig) -> LoadReport {
        let mut inner = self.lock();
        let report = inner.engine.load(&self.names, &config);
        inner.config = config;
        log_report(&report);
        report
    }

    /// Re-read the config file at `path` and rebuild the engine.
    pub fn reload_from(&self, path: &Path) -> LoadReport {
        self.reload(read_config_or_default(path))
    }

    /// Tear down: clears all tables and opt-outs.
    pub fn disable(&self) {
        self.lock().engine.disable();
    }

    pub fn is_loaded(&self) -> bool {
        self.lock().engine.is_loaded()
    }

    pub fn has_shortcuts_off(&self, player: PlayerId) -> bool {
        self.lock().engine.has_shortcuts_off(player)
    }

    /// Flip the player's shortcut opt-out. Returns `true` if shortcuts are
    /// now off for them.
    pub fn toggle_shortcuts(&self, player: PlayerId) -> bool {
        let off = self.lock().engine.toggle_shortcuts_off(player);
        debug!(%player, shortcuts_off = off, "shortcuts toggled");
        off
    }

    pub fn on_chat(&self, player: PlayerId, message: &str) -> String {
        self.lock().engine.rewrite(SourceKind::Chat, player, message)
    }

    /// Rewrite every sign line. `None` when signs are disabled in the config.
    pub fn on_sign<S: AsRef<str>>(&self, player: PlayerId, lines: &[S]) -> Option<Vec<String>> {
        let inner = self.lock();
        if !inner.config.emojis_on_signs {
            return None;
        }
        let lines = lines
            .iter()
            .map(|line| inner.engine.rewrite(SourceKind::Sign, player, line.as_ref()))
            .collect();
        Some(lines)
    }

    /// Rewrite a command line. `None` when commands are disabled or the
    /// command is not on the allow-list.
    pub fn on_command(&self, player: PlayerId, command: &str) -> Option<String> {
        let inner = self.lock();
        if !inner.config.emojis_in_commands || !inner.config.allows_command(command) {
            return None;
        }
        Some(inner.engine.rewrite(SourceKind::Command, player, command))
    }
}

fn log_report(report: &LoadReport) {
    for issue in &report.issues {
        warn!("{issue}");
    }
    info!(
        symbols = report.symbols,
        shortcuts = report.shortcuts,
        "emoji engine loaded"
    );
}
