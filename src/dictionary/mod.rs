//! Dictionary storage and membership queries
//!
//! `WordIndex` owns the normalized word list. It is immutable after
//! construction, so a single index can back many games across threads.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

use crate::core::{Word, canonical};
use crate::error::Diagnostic;
use rustc_hash::FxHashMap;
use std::path::Path;
use std::sync::OnceLock;
use tracing::info;

/// Stable position of a word inside a `WordIndex`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(usize);

impl WordId {
    /// Position in `WordIndex::words`
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A word with one position removed, tagged with that position
pub(crate) type BucketKey = (usize, String);

/// Normalized, deduplicated dictionary
#[derive(Debug, Default)]
pub struct WordIndex {
    words: Vec<Word>,
    ids: FxHashMap<Word, WordId>,
    buckets: OnceLock<FxHashMap<BucketKey, Vec<WordId>>>,
}

impl WordIndex {
    /// Build an index from raw tokens
    ///
    /// Tokens are lowercased; blanks are skipped and duplicates collapse onto
    /// their first occurrence.
    ///
    /// # Examples
    /// ```
    /// use word_weaver::dictionary::WordIndex;
    ///
    /// let index = WordIndex::from_words(["Word", "WARD", "ward"]);
    /// assert_eq!(index.len(), 2);
    /// assert!(index.contains("wOrD"));
    /// ```
    pub fn from_words<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut ids = FxHashMap::default();

        for token in tokens {
            let Ok(word) = Word::new(token) else {
                continue;
            };
            if ids.contains_key(&word) {
                continue;
            }
            ids.insert(word.clone(), WordId(words.len()));
            words.push(word);
        }

        Self {
            words,
            ids,
            buckets: OnceLock::new(),
        }
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(DICTIONARY)
    }

    /// Load from a file, falling back to an empty index if it cannot be read
    ///
    /// The diagnostic is returned alongside the (possibly empty) index.
    pub fn load<P: AsRef<Path>>(path: P) -> (Self, Option<Diagnostic>) {
        loader::load_or_empty(path)
    }

    /// Membership test on canonical form
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.id_of(word).is_some()
    }

    /// Look up the id of a word (any case)
    #[must_use]
    pub fn id_of(&self, word: &str) -> Option<WordId> {
        self.ids.get(canonical(word.trim()).as_str()).copied()
    }

    /// Get a word by id
    ///
    /// Returns `None` for ids from another index that are out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, id: WordId) -> Option<&Word> {
        self.words.get(id.0)
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Same as `len`, kept for parity with the original API
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in first-seen order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Iterate over ids and words together
    pub fn iter(&self) -> impl Iterator<Item = (WordId, &Word)> {
        self.words
            .iter()
            .enumerate()
            .map(|(i, word)| (WordId(i), word))
    }

    /// Ids of all words with the given character count
    #[must_use]
    pub fn words_of_length(&self, len: usize) -> Vec<WordId> {
        self.iter()
            .filter(|(_, word)| word.len() == len)
            .map(|(id, _)| id)
            .collect()
    }

    /// Wildcard buckets, built on first use
    pub(crate) fn buckets(&self) -> &FxHashMap<BucketKey, Vec<WordId>> {
        self.buckets.get_or_init(|| {
            let mut buckets: FxHashMap<BucketKey, Vec<WordId>> = FxHashMap::default();
            for (id, word) in self.iter() {
                for key in bucket_keys(word.text()) {
                    buckets.entry(key).or_default().push(id);
                }
            }
            info!(
                words = self.words.len(),
                buckets = buckets.len(),
                "built wildcard buckets"
            );
            buckets
        })
    }
}

/// One key per position: the word with that position removed
///
/// Two equal-length words are adjacent iff they share exactly one key.
pub(crate) fn bucket_keys(word: &str) -> impl Iterator<Item = BucketKey> + '_ {
    let chars: Vec<char> = word.chars().collect();
    (0..chars.len()).map(move |skip| {
        let rest: String = chars
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != skip)
            .map(|(_, &c)| c)
            .collect();
        (skip, rest)
    })
}
