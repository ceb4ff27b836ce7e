use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use emoji_core::{PlayerId, RewriteEngine, SourceKind};

use super::die;

#[derive(Serialize)]
struct SymbolRow<'a> {
    name: &'a str,
    token: &'a str,
    codepoint: String,
    shortcuts: Vec<&'a str>,
}

pub fn list(names_file: Option<&str>, config_file: Option<&str>, json: bool) {
    let names = super::name_source(names_file);
    let config = super::config(config_file);
    let (engine, report) = RewriteEngine::loaded(&names, &config);
    for issue in &report.issues {
        eprintln!("Warning: {issue}");
    }

    let rows: Vec<SymbolRow> = engine
        .symbols()
        .iter()
        .map(|entry| SymbolRow {
            name: entry.name(),
            token: entry.token(),
            codepoint: format!("U+{:04X}", entry.symbol() as u32),
            shortcuts: engine
                .shortcuts()
                .iter()
                .filter(|(_, token)| *token == entry.token())
                .map(|(shortcut, _)| shortcut)
                .collect(),
        })
        .collect();

    if json {
        println!("{}", die!(serde_json::to_string_pretty(&rows), "Error: {}"));
        return;
    }

    let width = rows.iter().map(|r| r.token.width()).max().unwrap_or(0);
    for row in &rows {
        let pad = width - row.token.width();
        println!(
            "{}  {}{}  {}",
            row.codepoint,
            row.token,
            " ".repeat(pad),
            row.shortcuts.join(" ")
        );
    }
    println!("{} symbols", rows.len());
}

pub fn convert(
    text: &str,
    source: SourceKind,
    names_file: Option<&str>,
    config_file: Option<&str>,
    no_shortcuts: bool,
    escape: bool,
) {
    let names = super::name_source(names_file);
    let config = super::config(config_file);
    let (mut engine, report) = RewriteEngine::loaded(&names, &config);
    for issue in &report.issues {
        eprintln!("Warning: {issue}");
    }

    let player = PlayerId::nil();
    if no_shortcuts {
        engine.toggle_shortcuts_off(player);
    }
    let out = engine.rewrite(source, player, text);
    if escape {
        println!("{}", escape_private_use(&out));
    } else {
        println!("{out}");
    }
}

/// Render private-use characters as `\u{XXXX}` so output is readable without
/// the resource pack.
fn escape_private_use(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if ('\u{E000}'..='\u{F8FF}').contains(&c) {
            out.push_str(&format!("\\u{{{:04X}}}", c as u32));
        } else {
            out.push(c);
        }
    }
    out
}
