//! # Text Splitter

use std::borrow::Cow;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::errors::{WLResult, WordloomError};

/// The default word span pattern.
///
/// Matches runs of word characters (with embedded apostrophes),
/// and runs of non-word, non-space characters.
pub const WORD_SPAN_PATTERN: &str = r"\w+(?:['’]\w+)*|[^\w\s]+";

/// The unit of a token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitMode {
    /// Word tokens, found by a span pattern.
    #[default]
    Words,

    /// One token per character; whitespace characters are kept.
    Chars,
}

impl SplitMode {
    /// The separator placed between tokens when joining them back into text.
    pub fn separator(self) -> &'static str {
        match self {
            SplitMode::Words => " ",
            SplitMode::Chars => "",
        }
    }
}

/// Options for [`TextSplitter`].
#[derive(Debug, Clone)]
pub struct SplitterOptions {
    /// The unit of the token stream.
    pub mode: SplitMode,

    /// Apply NFKD compatibility decomposition before splitting.
    pub normalize: bool,

    /// Case-fold tokens to lowercase.
    pub lowercase: bool,

    /// Drop tokens which contain no alphanumeric characters.
    ///
    /// In [`SplitMode::Chars`] whitespace is never dropped.
    pub drop_punctuation: bool,

    /// The word span pattern used in [`SplitMode::Words`].
    pub pattern: String,
}

impl Default for SplitterOptions {
    fn default() -> Self {
        Self {
            mode: SplitMode::Words,
            normalize: true,
            lowercase: true,
            drop_punctuation: true,
            pattern: WORD_SPAN_PATTERN.to_string(),
        }
    }
}

impl SplitterOptions {
    /// Sets the split mode.
    pub fn with_mode(
        self,
        mode: SplitMode,
    ) -> Self {
        Self { mode, ..self }
    }

    /// Sets NFKD normalization.
    pub fn with_normalize(
        self,
        normalize: bool,
    ) -> Self {
        Self { normalize, ..self }
    }

    /// Sets lowercase folding.
    pub fn with_lowercase(
        self,
        lowercase: bool,
    ) -> Self {
        Self { lowercase, ..self }
    }

    /// Sets punctuation dropping.
    pub fn with_drop_punctuation(
        self,
        drop_punctuation: bool,
    ) -> Self {
        Self {
            drop_punctuation,
            ..self
        }
    }

    /// Sets the word span pattern.
    pub fn with_pattern<S: Into<String>>(
        self,
        pattern: S,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            ..self
        }
    }

    /// Build a [`TextSplitter`] from these options.
    ///
    /// ## Returns
    /// The splitter, or [`WordloomError::InvalidOption`] if the pattern fails to compile.
    pub fn build(self) -> WLResult<TextSplitter> {
        let regex =
            Regex::new(&self.pattern).map_err(|e| WordloomError::InvalidOption(e.to_string()))?;
        Ok(TextSplitter {
            options: self,
            regex,
        })
    }
}

/// Splits raw text into a normalized token stream.
#[derive(Debug, Clone)]
pub struct TextSplitter {
    options: SplitterOptions,
    regex: Regex,
}

impl Default for TextSplitter {
    fn default() -> Self {
        Self {
            options: SplitterOptions::default(),
            regex: Regex::new(WORD_SPAN_PATTERN).expect("default pattern compiles"),
        }
    }
}

impl TextSplitter {
    /// Get the splitter options.
    pub fn options(&self) -> &SplitterOptions {
        &self.options
    }

    /// Split text into tokens.
    ///
    /// ## Arguments
    /// * `text` - the raw text.
    ///
    /// ## Returns
    /// The normalized token stream, in source order.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn split(
        &self,
        text: &str,
    ) -> Vec<String> {
        let text: Cow<str> = if self.options.normalize {
            Cow::Owned(text.nfkd().collect())
        } else {
            Cow::Borrowed(text)
        };

        match self.options.mode {
            SplitMode::Words => self
                .regex
                .find_iter(&text)
                .map(|m| m.as_str())
                .filter(|s| !self.options.drop_punctuation || s.chars().any(char::is_alphanumeric))
                .map(|s| self.fold(s))
                .collect(),
            SplitMode::Chars => text
                .chars()
                .filter(|&c| {
                    !self.options.drop_punctuation || c.is_alphanumeric() || c.is_whitespace()
                })
                .map(|c| self.fold(c.encode_utf8(&mut [0; 4])))
                .collect(),
        }
    }

    fn fold(
        &self,
        s: &str,
    ) -> String {
        if self.options.lowercase {
            s.to_lowercase()
        } else {
            s.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_word_split() {
        let splitter = TextSplitter::default();
        assert_eq!(
            splitter.split("Mr. and Mrs. Dursley, of number four -- Privet Drive!"),
            vec!["mr", "and", "mrs", "dursley", "of", "number", "four", "privet", "drive"]
        );
    }

    #[test]
    fn test_contractions_are_kept() {
        let splitter = TextSplitter::default();
        assert_eq!(splitter.split("Don't panic"), vec!["don't", "panic"]);
    }

    #[test]
    fn test_keep_punctuation_and_case() {
        let splitter = SplitterOptions::default()
            .with_lowercase(false)
            .with_drop_punctuation(false)
            .build()
            .unwrap();
        assert_eq!(splitter.split("Hi, Bob!"), vec!["Hi", ",", "Bob", "!"]);
    }

    #[test]
    fn test_char_split() {
        let splitter = SplitterOptions::default()
            .with_mode(SplitMode::Chars)
            .build()
            .unwrap();
        assert_eq!(splitter.split("Ab, c"), vec!["a", "b", " ", "c"]);
    }

    #[test]
    fn test_nfkd_normalization() {
        let splitter = TextSplitter::default();
        assert_eq!(
            splitter.split("The \u{FB01}ne Caf\u{E9}"),
            vec!["the", "fine", "cafe\u{301}"]
        );

        let splitter = SplitterOptions::default()
            .with_normalize(false)
            .build()
            .unwrap();
        assert_eq!(
            splitter.split("The \u{FB01}ne Caf\u{E9}"),
            vec!["the", "\u{FB01}ne", "caf\u{E9}"]
        );
    }

    #[test]
    fn test_separator() {
        assert_eq!(SplitMode::Words.separator(), " ");
        assert_eq!(SplitMode::Chars.separator(), "");
    }

    #[test]
    fn test_bad_pattern() {
        let res = SplitterOptions::default().with_pattern("(").build();
        assert!(matches!(res, Err(WordloomError::InvalidOption(_))));
    }
}
