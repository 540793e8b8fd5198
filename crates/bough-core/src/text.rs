//! Turning book text into dictionary insertions.
//!
//! # Overview
//!
//! Project Gutenberg texts wrap the book in licence boilerplate. Only the
//! lines strictly between the first `*** START OF` line and the following
//! `*** END OF` line are counted.
//!
//! Within the body, every character other than an ASCII letter, digit,
//! apostrophe or hyphen separates words. Words are lowercased, words shorter
//! than [`TokenizerOptions::min_word_len`] are dropped, and so is anything in
//! the caller's [`Stopwords`] set. No stemming is applied.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::dict::FrequencyDictionary;
use crate::error::ErrorCode;

/// Line prefix that opens the book body.
pub const START_MARKER: &str = "*** START OF";
/// Line prefix that closes the book body.
pub const END_MARKER: &str = "*** END OF";

/// Errors from loading or scanning input text.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    #[error("no line starting with `*** START OF` found")]
    MissingStartMarker,

    #[error("no line starting with `*** END OF` after the start marker")]
    MissingEndMarker,

    #[error("failed to read stopwords from {path}: {source}")]
    Stopwords {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TextError {
    /// Machine-readable code associated with this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::MissingStartMarker => ErrorCode::MissingStartMarker,
            Self::MissingEndMarker => ErrorCode::MissingEndMarker,
            Self::Stopwords { .. } => ErrorCode::StopwordsUnreadable,
        }
    }
}

/// Set of words excluded from counting.
#[derive(Debug, Clone, Default)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One stopword per line; surrounding whitespace and blank lines ignored.
    #[must_use]
    pub fn from_lines(text: &str) -> Self {
        text.lines().collect()
    }

    /// Read a stopword file.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::Stopwords`] if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self, TextError> {
        let content = std::fs::read_to_string(path).map_err(|source| TextError::Stopwords {
            path: path.to_path_buf(),
            source,
        })?;
        let stopwords = Self::from_lines(&content);
        debug!(path = %path.display(), count = stopwords.len(), "loaded stopwords");
        Ok(stopwords)
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Stopwords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(|w| w.as_ref().trim().to_ascii_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }
}

/// Knobs for [`count_words`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// Words with fewer characters than this are skipped.
    pub min_word_len: usize,
    /// Fail when the start/end markers are absent instead of counting the
    /// whole text.
    pub require_markers: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            min_word_len: 2,
            require_markers: true,
        }
    }
}

const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '\'' || c == '-'
}

/// Lines of the book body.
///
/// With `require_markers` unset, a missing start marker means the whole
/// text is the body and a missing end marker means the body runs to EOF.
///
/// # Errors
///
/// Returns [`TextError::MissingStartMarker`] or
/// [`TextError::MissingEndMarker`] when `require_markers` is set and the
/// corresponding line is absent.
pub fn body_lines(text: &str, require_markers: bool) -> Result<Vec<&str>, TextError> {
    let mut lines = text.lines();
    let has_start = lines.by_ref().any(|line| line.starts_with(START_MARKER));

    if !has_start {
        if require_markers {
            return Err(TextError::MissingStartMarker);
        }
        return Ok(text
            .lines()
            .take_while(|line| !line.starts_with(END_MARKER))
            .collect());
    }

    let mut body = Vec::new();
    for line in lines {
        if line.starts_with(END_MARKER) {
            return Ok(body);
        }
        body.push(line);
    }

    if require_markers {
        Err(TextError::MissingEndMarker)
    } else {
        Ok(body)
    }
}

/// Split one line into lowercased words.
pub fn words(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split(|c: char| !is_word_char(c))
        .filter(|w| !w.is_empty())
        .map(str::to_ascii_lowercase)
}

/// Count the words of `text` into a fresh dictionary.
///
/// # Errors
///
/// Propagates marker errors from [`body_lines`].
#[instrument(skip(text, stopwords), fields(bytes = text.len()))]
pub fn count_words(
    text: &str,
    stopwords: &Stopwords,
    options: TokenizerOptions,
) -> Result<FrequencyDictionary, TextError> {
    let body = body_lines(text, options.require_markers)?;

    let mut dict = FrequencyDictionary::new();
    for line in &body {
        for word in words(line) {
            if word.len() < options.min_word_len || stopwords.contains(&word) {
                continue;
            }
            dict.insert(&word);
        }
    }

    debug!(
        lines = body.len(),
        distinct = dict.len(),
        total = dict.total(),
        "counted words"
    );
    Ok(dict)
}
