pub mod config_ops;
pub mod convert_ops;

use std::path::PathBuf;

use emoji_core::config::load_config_file;
use emoji_core::{EmojiConfig, NameSource};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}
pub(crate) use die;

/// Name list from `--names`, or the embedded default.
pub(crate) fn name_source(path: Option<&str>) -> NameSource {
    path.map_or(NameSource::Default, |p| NameSource::File(PathBuf::from(p)))
}

/// Config from `--config`, or the embedded default.
pub(crate) fn config(path: Option<&str>) -> EmojiConfig {
    match path {
        Some(p) => die!(load_config_file(p.as_ref()), "Error: {}"),
        None => die!(EmojiConfig::embedded(), "Error in embedded config: {}"),
    }
}
