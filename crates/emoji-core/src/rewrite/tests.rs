use proptest::prelude::*;

use super::*;
use crate::config::{parse_config_toml, ShortcutGroup};
use crate::symbols::{SymbolEntry, SYMBOL_CAPACITY};

const GRIN: char = '\u{E000}';
const HEART: char = '\u{E001}';

fn table() -> SymbolTable {
    SymbolTable::build(["grin", "heart"]).unwrap()
}

fn shortcuts() -> ShortcutMap {
    ShortcutMap::from_groups(&[
        ShortcutGroup {
            name: "grin".into(),
            shortcuts: vec![":)".into()],
        },
        ShortcutGroup {
            name: "heart".into(),
            shortcuts: vec!["<3".into()],
        },
    ])
}

fn config(fix_coloring: bool) -> EmojiConfig {
    parse_config_toml(&format!(
        "fix-emoji-coloring = {fix_coloring}\n[shortcuts]\ngrin = [\":)\"]\nheart = [\"<3\"]\n"
    ))
    .unwrap()
}

fn engine(fix_coloring: bool) -> RewriteEngine {
    let names = NameSource::Text("grin\nheart\n".into());
    let (engine, report) = RewriteEngine::loaded(&names, &config(fix_coloring));
    assert!(report.is_clean(), "{:?}", report.issues);
    engine
}

fn player() -> PlayerId {
    PlayerId::new_v4()
}

// --- free functions ---

#[test]
fn shorthand_then_symbol() {
    let expanded = expand_shorthand(":) <3", &shortcuts());
    assert_eq!(expanded, ":grin: :heart:");
    assert_eq!(to_symbol(&expanded, &table()), format!("{GRIN} {HEART}"));
}

#[test]
fn to_symbol_replaces_all_occurrences() {
    let out = to_symbol(":grin::grin: and :heart:", &table());
    assert_eq!(out, format!("{GRIN}{GRIN} and {HEART}"));
}

#[test]
fn unknown_token_passes_through() {
    assert_eq!(to_symbol(":nope: hi", &table()), ":nope: hi");
}

#[test]
fn sign_wraps_symbol() {
    let out = to_symbol_for_sign("hi :grin:", &table());
    assert_eq!(out, format!("hi {WHITE}{GRIN}{BLACK}"));
}

#[test]
fn chat_reemits_leading_color() {
    let out = to_symbol_for_chat("§a:grin: there", &table(), true);
    assert_eq!(out, format!("§a{WHITE}{GRIN}§a there"));
}

#[test]
fn chat_without_fix_is_plain() {
    let out = to_symbol_for_chat("§a:grin: there", &table(), false);
    assert_eq!(out, format!("§a{GRIN} there"));
}

#[test]
fn chat_without_color_prefix_leaves_white() {
    let out = to_symbol_for_chat("hey :grin: there", &table(), true);
    assert_eq!(out, format!("hey {WHITE}{GRIN} there"));
}

#[test]
fn chat_threshold_is_three_characters() {
    let names = SymbolTable::build(["x"]).unwrap();
    // ":x:" is three characters, so it takes the color-fix path.
    assert_eq!(to_symbol_for_chat(":x:", &names, true), format!("{WHITE}{GRIN}"));
    assert_eq!(to_symbol_for_chat("ab", &names, true), "ab");
}

#[test]
fn chat_length_counts_characters() {
    // Two characters but four bytes.
    assert_eq!(to_symbol_for_chat("§§", &table(), true), "§§");
}

#[test]
fn empty_input() {
    assert_eq!(expand_shorthand("", &shortcuts()), "");
    assert_eq!(to_symbol("", &table()), "");
    assert_eq!(to_symbol_for_sign("", &table()), "");
    assert_eq!(to_symbol_for_chat("", &table(), true), "");
}

#[test]
fn raw_symbols_are_literal_text() {
    let text = format!("{GRIN}{HEART} already here");
    assert_eq!(to_symbol(&text, &table()), text);
}

#[test]
fn list_order_breaks_ties() {
    // ":a:" sits inside ":a:b:"; whichever entry comes first claims the colon.
    let first_a = SymbolTable::build(["a", "b"]).unwrap();
    assert_eq!(to_symbol(":a:b:", &first_a), "\u{E000}b:");
    let first_b = SymbolTable::build(["b", "a"]).unwrap();
    assert_eq!(to_symbol(":a:b:", &first_b), ":a\u{E000}");
}

// --- engine ---

#[test]
fn starts_unloaded() {
    let engine = RewriteEngine::new();
    assert_eq!(engine.state(), EngineState::Unloaded);
    assert!(engine.symbols().is_empty());
}

#[test]
fn load_reports_counts() {
    let names = NameSource::Text("grin\nheart\n".into());
    let mut engine = RewriteEngine::new();
    let report = engine.load(&names, &config(true));
    assert!(engine.is_loaded());
    assert_eq!(report.symbols, 2);
    assert_eq!(report.shortcuts, 2);
    assert!(engine.fix_coloring());
}

#[test]
fn rewrite_chat_pipeline() {
    let engine = engine(false);
    let out = engine.rewrite(SourceKind::Chat, player(), "hi :) <3");
    assert_eq!(out, format!("hi {GRIN} {HEART}"));
}

#[test]
fn rewrite_sign_pipeline() {
    let engine = engine(true);
    let out = engine.rewrite(SourceKind::Sign, player(), "<3");
    assert_eq!(out, format!("{WHITE}{HEART}{BLACK}"));
}

#[test]
fn rewrite_command_pipeline_ignores_coloring() {
    let engine = engine(true);
    let out = engine.rewrite(SourceKind::Command, player(), "/msg bob :)");
    assert_eq!(out, format!("/msg bob {GRIN}"));
}

#[test]
fn opted_out_player_keeps_shortcuts() {
    let mut engine = engine(false);
    let p = player();
    assert!(engine.toggle_shortcuts_off(p));
    let out = engine.rewrite(SourceKind::Chat, p, ":) :heart:");
    assert_eq!(out, format!(":) {HEART}"));
    // Other players are unaffected.
    let out = engine.rewrite(SourceKind::Chat, player(), ":)");
    assert_eq!(out, GRIN.to_string());
}

#[test]
fn toggle_twice_restores() {
    let mut engine = engine(false);
    let p = player();
    assert!(!engine.has_shortcuts_off(p));
    assert!(engine.toggle_shortcuts_off(p));
    assert!(engine.has_shortcuts_off(p));
    assert!(!engine.toggle_shortcuts_off(p));
    assert!(!engine.has_shortcuts_off(p));
}

#[test]
fn disable_clears_everything() {
    let mut engine = engine(true);
    let p = player();
    engine.toggle_shortcuts_off(p);
    engine.disable();
    assert_eq!(engine.state(), EngineState::Unloaded);
    assert!(engine.symbols().is_empty());
    assert!(engine.shortcuts().is_empty());
    assert!(!engine.has_shortcuts_off(p));
    assert!(!engine.fix_coloring());
}

#[test]
fn reload_rebuilds_and_clears_opt_out() {
    let mut engine = engine(true);
    let p = player();
    engine.toggle_shortcuts_off(p);
    let before: Vec<SymbolEntry> = engine.symbols().iter().cloned().collect();

    let report = engine.load(&NameSource::Text("grin\nheart\n".into()), &config(false));
    assert!(report.is_clean());
    let after: Vec<SymbolEntry> = engine.symbols().iter().cloned().collect();
    assert_eq!(before, after);
    assert!(!engine.fix_coloring());
    assert!(!engine.has_shortcuts_off(p));
}

#[test]
fn unreadable_names_leave_empty_table() {
    let dir = tempfile::tempdir().unwrap();
    let names = NameSource::File(dir.path().join("missing.txt"));
    let mut engine = RewriteEngine::new();
    let report = engine.load(&names, &config(false));
    assert!(engine.is_loaded());
    assert!(engine.symbols().is_empty());
    assert!(matches!(
        report.issues.as_slice(),
        [LoadIssue::Names(LoadError::Io { .. })]
    ));
    // Shortcuts still load; their tokens simply find no symbol.
    assert_eq!(engine.rewrite(SourceKind::Chat, player(), ":)"), ":grin:");
}

#[test]
fn oversized_name_list_leaves_empty_table() {
    let names: String = (0..=SYMBOL_CAPACITY).map(|i| format!("n{i}\n")).collect();
    let mut engine = RewriteEngine::new();
    let report = engine.load(&NameSource::Text(names), &config(false));
    assert!(engine.is_loaded());
    assert!(engine.symbols().is_empty());
    assert_eq!(report.symbols, 0);
    assert!(matches!(
        report.issues.as_slice(),
        [LoadIssue::Names(LoadError::Capacity { max, .. })] if *max == SYMBOL_CAPACITY
    ));
    assert_eq!(report.shortcuts, 2);
}

#[test]
fn invalid_config_keeps_symbols_only() {
    let mut engine = RewriteEngine::new();
    let config = parse_config_toml("emojis-on-signs = true").unwrap();
    let report = engine.load(&NameSource::Text("grin\n".into()), &config);
    assert!(matches!(
        report.issues.as_slice(),
        [LoadIssue::Config(ConfigError::Invalid)]
    ));
    assert!(engine.shortcuts().is_empty());
    assert!(!engine.fix_coloring());
    assert_eq!(engine.rewrite(SourceKind::Chat, player(), ":) :grin:"), format!(":) {GRIN}"));
}

#[test]
fn default_data_loads_cleanly() {
    let config = EmojiConfig::embedded().unwrap();
    let (engine, report) = RewriteEngine::loaded(&NameSource::Default, &config);
    assert!(report.is_clean(), "{:?}", report.issues);
    let heart = engine.symbols().symbol_of("heart").unwrap();
    let broken = engine.symbols().symbol_of("broken_heart").unwrap();
    let out = engine.rewrite(SourceKind::Command, player(), "<3 </3");
    assert_eq!(out, format!("{heart} {broken}"));
}

#[test]
fn every_default_shortcut_resolves() {
    let config = EmojiConfig::embedded().unwrap();
    let (engine, _) = RewriteEngine::loaded(&NameSource::Default, &config);
    for (shortcut, token) in engine.shortcuts().iter() {
        assert!(
            engine.symbols().symbol_of(token).is_some(),
            "shortcut {shortcut} points at unknown {token}"
        );
    }
}

// --- properties ---

fn arb_message() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            ":grin:", ":heart:", ":", "::", "grin", "heart", ":)", "<3", "§a", " ", "x",
            "\u{E000}",
        ]),
        0..12,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn to_symbol_is_idempotent(msg in arb_message()) {
        let once = to_symbol(&msg, &table());
        prop_assert_eq!(to_symbol(&once, &table()), once);
    }

    #[test]
    fn literal_text_is_unchanged(msg in "[a-zA-Z0-9 .,!?§\u{E000}-\u{E0FF}]{0,40}") {
        let names = table();
        prop_assert_eq!(expand_shorthand(&msg, &shortcuts()), msg.clone());
        prop_assert_eq!(to_symbol(&msg, &names), msg.clone());
        prop_assert_eq!(to_symbol_for_sign(&msg, &names), msg.clone());
        prop_assert_eq!(to_symbol_for_chat(&msg, &names, true), msg.clone());
        prop_assert_eq!(to_symbol_for_chat(&msg, &names, false), msg);
    }

    #[test]
    fn expansion_composes_with_substitution(
        parts in prop::collection::vec(prop::sample::select(vec![":)", "<3", " ", "hi"]), 0..10)
    ) {
        let msg = parts.concat();
        let expected: String = parts
            .iter()
            .map(|p| match *p {
                ":)" => GRIN.to_string(),
                "<3" => HEART.to_string(),
                other => other.to_string(),
            })
            .collect();
        prop_assert_eq!(to_symbol(&expand_shorthand(&msg, &shortcuts()), &table()), expected);
    }

    #[test]
    fn double_toggle_is_identity(ids in prop::collection::vec(any::<u128>(), 1..8)) {
        let mut engine = RewriteEngine::new();
        for id in &ids {
            let p = PlayerId::from_u128(*id);
            let before = engine.has_shortcuts_off(p);
            engine.toggle_shortcuts_off(p);
            engine.toggle_shortcuts_off(p);
            prop_assert_eq!(engine.has_shortcuts_off(p), before);
        }
    }
}
