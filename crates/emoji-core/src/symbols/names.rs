use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

use super::LoadError;

pub const DEFAULT_NAMES: &str = include_str!("default_names.txt");

/// Where the ordered emoji name list comes from.
#[derive(Debug, Clone, Default)]
pub enum NameSource {
    /// The list embedded in this crate.
    #[default]
    Default,
    /// A text file with one name per line.
    File(PathBuf),
    /// Name list content already held in memory.
    Text(String),
}

impl NameSource {
    pub fn read(&self) -> Result<Cow<'_, str>, LoadError> {
        match self {
            NameSource::Default => Ok(Cow::Borrowed(DEFAULT_NAMES)),
            NameSource::File(path) => fs::read_to_string(path)
                .map(Cow::Owned)
                .map_err(|source| LoadError::Io {
                    path: path.clone(),
                    source,
                }),
            NameSource::Text(text) => Ok(Cow::Borrowed(text)),
        }
    }
}

/// Split name list content into names, in file order.
///
/// Lines are trimmed. Blank lines and lines starting with `#` are skipped.
/// A name may be written bare (`grin`) or colon-wrapped (`:grin:`).
pub fn parse_name_list(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(strip_colons)
        .filter(|name| !name.is_empty())
        .collect()
}

pub(crate) fn strip_colons(name: &str) -> &str {
    name.strip_prefix(':')
        .and_then(|n| n.strip_suffix(':'))
        .unwrap_or(name)
}
