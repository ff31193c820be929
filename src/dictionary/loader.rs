//! Dictionary loading utilities
//!
//! Reads whitespace/newline separated word lists from files or readers.

use super::WordIndex;
use crate::error::Diagnostic;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

/// Read every whitespace-separated token from a reader
///
/// # Errors
///
/// Returns an I/O error if reading fails or the content is not valid UTF-8.
pub fn from_reader<R: BufRead>(reader: R) -> io::Result<WordIndex> {
    let mut tokens = Vec::new();
    for line in reader.lines() {
        let line = line?;
        tokens.extend(line.split_whitespace().map(str::to_owned));
    }
    Ok(WordIndex::from_words(tokens))
}

/// Load a dictionary file
///
/// # Errors
///
/// Returns `Diagnostic::DictionaryLoadFailure` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use word_weaver::dictionary::loader::load_from_file;
///
/// let index = load_from_file("dictionary.txt").unwrap();
/// println!("Loaded {} words", index.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordIndex, Diagnostic> {
    let path = path.as_ref();
    let failure = |e: io::Error| Diagnostic::DictionaryLoadFailure {
        source: path.display().to_string(),
        reason: e.to_string(),
    };

    let file = File::open(path).map_err(failure)?;
    let index = from_reader(BufReader::new(file)).map_err(failure)?;

    info!(path = %path.display(), words = index.len(), "loaded dictionary");
    Ok(index)
}

/// Load a dictionary file, degrading to an empty dictionary on failure
///
/// The engine keeps running on an empty dictionary; the diagnostic tells the
/// caller why.
pub fn load_or_empty<P: AsRef<Path>>(path: P) -> (WordIndex, Option<Diagnostic>) {
    match load_from_file(path) {
        Ok(index) => (index, None),
        Err(diagnostic) => {
            warn!(%diagnostic, "falling back to empty dictionary");
            (WordIndex::default(), Some(diagnostic))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn from_reader_splits_lines_and_spaces() {
        let input = Cursor::new("Word\nWARD wars\n\n  cars\t cord\n");
        let index = from_reader(input).unwrap();

        assert_eq!(index.len(), 5);
        for word in ["word", "ward", "wars", "cars", "cord"] {
            assert!(index.contains(word), "missing {word}");
        }
    }

    #[test]
    fn from_reader_dedups_after_normalizing() {
        let input = Cursor::new("ward\nWard\nWARD\n");
        let index = from_reader(input).unwrap();
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn from_reader_rejects_invalid_utf8() {
        let input = Cursor::new(vec![0xff, 0xfe, b'\n']);
        assert!(from_reader(input).is_err());
    }

    #[test]
    fn load_from_missing_file_reports_failure() {
        let result = load_from_file("definitely/not/here/dictionary.txt");
        assert!(matches!(
            result,
            Err(Diagnostic::DictionaryLoadFailure { .. })
        ));
    }

    #[test]
    fn load_or_empty_degrades_softly() {
        let (index, diagnostic) = load_or_empty("definitely/not/here/dictionary.txt");
        assert!(index.is_empty());
        assert!(diagnostic.is_some());
    }

    #[test]
    fn load_from_real_file() {
        let path = std::env::temp_dir().join(format!(
            "word_weaver_loader_test_{}.txt",
            std::process::id()
        ));
        std::fs::write(&path, "WAST\nWEST\n").unwrap();

        let (index, diagnostic) = load_or_empty(&path);
        std::fs::remove_file(&path).ok();

        assert!(diagnostic.is_none());
        assert_eq!(index.len(), 2);
        assert!(index.contains("wast"));
    }
}
