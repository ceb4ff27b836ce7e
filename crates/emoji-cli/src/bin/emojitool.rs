use clap::{Parser, Subcommand, ValueEnum};

use emoji_cli::commands::{config_ops, convert_ops};
use emoji_core::SourceKind;

#[derive(Parser)]
#[command(name = "emojitool", about = "Emoji chat data and rewrite tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Emoji name list operations
    Names {
        #[command(subcommand)]
        action: DataAction,
    },

    /// Config file operations
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// List every symbol with its codepoint and shortcuts
    List {
        /// Name list file (defaults to the embedded list)
        #[arg(long)]
        names: Option<String>,
        /// Config file (defaults to the embedded config)
        #[arg(long)]
        config: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Rewrite a piece of text the way the server would
    Convert {
        /// Text to rewrite
        text: String,
        /// Where the text came from
        #[arg(long, value_enum, default_value = "chat")]
        source: Source,
        /// Name list file (defaults to the embedded list)
        #[arg(long)]
        names: Option<String>,
        /// Config file (defaults to the embedded config)
        #[arg(long)]
        config: Option<String>,
        /// Behave as a player who turned shortcuts off
        #[arg(long)]
        no_shortcuts: bool,
        /// Print private-use symbols as \u{XXXX}
        #[arg(long)]
        escape: bool,
    },
}

#[derive(Subcommand)]
enum DataAction {
    /// Print the embedded default name list
    Export,
    /// Check a name list file
    Validate {
        /// Path to the name list
        file: String,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the embedded default config
    Export,
    /// Check a config file
    Validate {
        /// Path to the config TOML
        file: String,
        /// Name list to check shortcut targets against
        #[arg(long)]
        names: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Source {
    Chat,
    Sign,
    Command,
}

impl From<Source> for SourceKind {
    fn from(s: Source) -> Self {
        match s {
            Source::Chat => SourceKind::Chat,
            Source::Sign => SourceKind::Sign,
            Source::Command => SourceKind::Command,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Names { action } => match action {
            DataAction::Export => config_ops::names_export(),
            DataAction::Validate { file } => config_ops::names_validate(&file),
        },
        Command::Config { action } => match action {
            ConfigAction::Export => config_ops::config_export(),
            ConfigAction::Validate { file, names } => {
                config_ops::config_validate(&file, names.as_deref())
            }
        },
        Command::List {
            names,
            config,
            json,
        } => convert_ops::list(names.as_deref(), config.as_deref(), json),
        Command::Convert {
            text,
            source,
            names,
            config,
            no_shortcuts,
            escape,
        } => convert_ops::convert(
            &text,
            source.into(),
            names.as_deref(),
            config.as_deref(),
            no_shortcuts,
            escape,
        ),
    }
}
