use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Result, WoordError};
use crate::list::{Languages, WordList, WordPairs};

/// Options for reading line-oriented word files
#[derive(Debug, Clone)]
pub struct LocalOptions {
    /// Character separating terms on one line
    pub separator: char,
    /// Column languages assigned to every loaded list
    pub languages: Languages,
}

impl Default for LocalOptions {
    fn default() -> Self {
        Self {
            separator: '=',
            languages: Languages::new("Nederlands", "Russisch"),
        }
    }
}

/// Split word file contents into a flat term sequence
pub fn parse_terms(contents: &str, separator: char) -> Vec<String> {
    contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .flat_map(|line| line.split(separator))
        .map(|term| term.trim().to_string())
        .collect()
}

fn load_with_index(path: &Path, index: usize, options: &LocalOptions) -> Result<WordList> {
    let contents = fs::read_to_string(path).map_err(|e| WoordError::WordFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let terms = parse_terms(&contents, options.separator);
    let (pairs, dropped) = WordPairs::from_flat(terms);

    if let Some(word) = dropped {
        warn!(path = %path.display(), %word, "dropping unpaired trailing word");
    }
    if pairs.is_empty() {
        return Err(WoordError::WordFile {
            path: path.to_path_buf(),
            reason: "no word pairs found".to_string(),
        });
    }

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string());

    debug!(path = %path.display(), pairs = pairs.len(), "loaded word file");

    Ok(WordList::new(
        format!("local-{index}"),
        name,
        options.languages.clone(),
        pairs,
    ))
}

/// Load a single word file as a list with id `local-0`
pub fn load_word_file(path: &Path, options: &LocalOptions) -> Result<WordList> {
    load_with_index(path, 0, options)
}

/// Load several word files in order. The first unusable file aborts the load.
pub fn load_word_files<P: AsRef<Path>>(paths: &[P], options: &LocalOptions) -> Result<Vec<WordList>> {
    paths
        .iter()
        .enumerate()
        .map(|(i, p)| load_with_index(p.as_ref(), i, options))
        .collect()
}
