//! # Combined Tokenizer

use std::sync::Arc;

use crate::{
    errors::WLResult,
    text::TextSplitter,
    types::TokenType,
    vocab::{Vocabulary, VocabularyOptions},
};

/// A text <-> index codec.
pub trait TokenCodec<T: TokenType>: Send + Sync {
    /// Encode text to indices; unknown tokens are dropped.
    fn encode(
        &self,
        text: &str,
    ) -> Vec<T>;

    /// Resolve an index to its token.
    ///
    /// ## Returns
    /// The token; or [`crate::WordloomError::UnknownIndex`].
    fn decode_index(
        &self,
        index: T,
    ) -> WLResult<&str>;

    /// The separator placed between decoded tokens when rebuilding text.
    fn separator(&self) -> &str {
        " "
    }
}

/// Unified Tokenizer.
///
/// Combines:
///  * [`TextSplitter`], and
///  * [`Vocabulary`].
#[derive(Debug, Clone)]
pub struct Tokenizer<T: TokenType> {
    splitter: Arc<TextSplitter>,
    vocab: Arc<Vocabulary<T>>,
}

impl<T: TokenType> Tokenizer<T> {
    /// Create a new tokenizer.
    pub fn new(
        splitter: Arc<TextSplitter>,
        vocab: Arc<Vocabulary<T>>,
    ) -> Self {
        Self { splitter, vocab }
    }

    /// Split `text` and fit a vocabulary to it.
    ///
    /// ## Returns
    /// The tokenizer, and the token stream of `text`.
    pub fn fit(
        splitter: TextSplitter,
        options: &VocabularyOptions,
        text: &str,
    ) -> WLResult<(Self, Vec<String>)> {
        let tokens = splitter.split(text);
        let vocab: Vocabulary<T> = options.fit(&tokens)?;
        log::info!(
            "fit tokenizer: {} tokens; vocabulary size {}",
            tokens.len(),
            vocab.len()
        );
        Ok((Self::new(splitter.into(), vocab.into()), tokens))
    }

    /// Get the underlying splitter.
    pub fn splitter(&self) -> &Arc<TextSplitter> {
        &self.splitter
    }

    /// Get the underlying vocabulary.
    pub fn vocab(&self) -> &Arc<Vocabulary<T>> {
        &self.vocab
    }

    /// Encode a batch of texts, in parallel.
    #[cfg(feature = "rayon")]
    pub fn encode_batch<S: AsRef<str> + Sync>(
        &self,
        batch: &[S],
    ) -> Vec<Vec<T>> {
        use rayon::prelude::*;
        batch
            .par_iter()
            .map(|text| self.encode(text.as_ref()))
            .collect()
    }

    /// Encode a batch of texts.
    #[cfg(not(feature = "rayon"))]
    pub fn encode_batch<S: AsRef<str> + Sync>(
        &self,
        batch: &[S],
    ) -> Vec<Vec<T>> {
        batch.iter().map(|text| self.encode(text.as_ref())).collect()
    }
}

impl<T: TokenType> TokenCodec<T> for Tokenizer<T> {
    fn encode(
        &self,
        text: &str,
    ) -> Vec<T> {
        self.vocab.encode_tokens(&self.splitter.split(text))
    }

    fn decode_index(
        &self,
        index: T,
    ) -> WLResult<&str> {
        self.vocab.decode_index(index)
    }

    fn separator(&self) -> &str {
        self.splitter.options().mode.separator()
    }
}
