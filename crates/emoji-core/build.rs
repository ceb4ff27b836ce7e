use std::collections::HashSet;

const CONFIG_PATH: &str = "src/default_config.toml";
const NAMES_PATH: &str = "src/symbols/default_names.txt";

fn main() {
    println!("cargo:rerun-if-changed={CONFIG_PATH}");
    println!("cargo:rerun-if-changed={NAMES_PATH}");

    // Embedded defaults must load with no issues.
    let names = validate_name_list(include_str!("src/symbols/default_names.txt"));
    validate_default_config(include_str!("src/default_config.toml"), &names);
}

/// Collects the listed names; panics on a duplicate.
fn validate_name_list(content: &str) -> HashSet<&str> {
    let mut seen = HashSet::new();
    for line in content.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if !seen.insert(line) {
            panic!("{NAMES_PATH} lists '{line}' more than once");
        }
    }
    seen
}

/// The default config must load without issues: both required keys present,
/// every shortcut group a list of strings naming a known emoji.
fn validate_default_config(content: &str, names: &HashSet<&str>) {
    let table: toml::Table = content
        .parse()
        .unwrap_or_else(|e| panic!("{CONFIG_PATH} contains invalid TOML: {e}"));

    if !table.get("fix-emoji-coloring").is_some_and(toml::Value::is_bool) {
        panic!("{CONFIG_PATH} needs a boolean 'fix-emoji-coloring'");
    }
    let Some(shortcuts) = table.get("shortcuts").and_then(toml::Value::as_table) else {
        panic!("{CONFIG_PATH} needs a [shortcuts] table");
    };

    for (name, group) in shortcuts {
        if !names.contains(name.as_str()) {
            panic!("{CONFIG_PATH}: shortcut group '{name}' is not in {NAMES_PATH}");
        }
        let Some(items) = group.as_array() else {
            panic!("{CONFIG_PATH}: shortcuts.{name} must be a list");
        };
        if items.iter().any(|item| item.as_str().map_or(true, str::is_empty)) {
            panic!("{CONFIG_PATH}: shortcuts.{name} must hold non-empty strings");
        }
    }
}
