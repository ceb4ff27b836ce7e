use std::fs;

use emoji_core::config::{default_toml, parse_config_toml};
use emoji_core::symbols::{parse_name_list, SymbolTable, DEFAULT_NAMES, SYMBOL_BASE};

use super::die;

pub fn names_export() {
    print!("{DEFAULT_NAMES}");
}

pub fn names_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let names = parse_name_list(&content);
    let table = die!(SymbolTable::build(&names), "Error: {}");
    if table.len() < names.len() {
        println!(
            "Warning: {} duplicate name(s) skipped",
            names.len() - table.len()
        );
    }
    match table.iter().last() {
        Some(last) => println!(
            "OK: {} names, U+{:04X}..=U+{:04X}",
            table.len(),
            SYMBOL_BASE as u32,
            last.symbol() as u32
        ),
        None => println!("OK: 0 names"),
    }
}

pub fn config_export() {
    print!("{}", default_toml());
}

pub fn config_validate(file: &str, names_file: Option<&str>) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let config = die!(parse_config_toml(&content), "Error: {}");
    if !config.validate() {
        eprintln!("Error: config must set 'fix-emoji-coloring' and have a [shortcuts] table");
        std::process::exit(1);
    }

    let names = super::name_source(names_file);
    let table = die!(SymbolTable::load(&names), "Error: {}");
    let groups = config.shortcuts.as_deref().unwrap_or_default();
    let mut unknown = 0;
    for group in groups {
        if table.symbol_of(&group.name).is_none() {
            println!("Warning: shortcuts.{} is not a known emoji name", group.name);
            unknown += 1;
        }
    }
    let shortcut_count: usize = groups.iter().map(|g| g.shortcuts.len()).sum();
    println!(
        "OK: {} groups, {} shortcuts, {} unknown names, fix-emoji-coloring={}",
        groups.len(),
        shortcut_count,
        unknown,
        config.fix_coloring()
    );
}
