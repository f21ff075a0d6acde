//! # Bidirectional Vocabulary

use crate::{
    errors::{WLResult, WordloomError},
    types::{TokenType, WLHashMap, hash_map_with_capacity},
};

/// A bidirectional ``{ token <-> index }`` vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary<T: TokenType> {
    token_to_index: WLHashMap<String, T>,
    index_to_token: WLHashMap<T, String>,
    oov_index: Option<T>,
}

impl<T: TokenType> Default for Vocabulary<T> {
    fn default() -> Self {
        Self {
            token_to_index: Default::default(),
            index_to_token: Default::default(),
            oov_index: None,
        }
    }
}

impl<T: TokenType> Vocabulary<T> {
    /// Build a vocabulary from ``(token, index)`` pairs.
    ///
    /// ## Arguments
    /// * `pairs` - the entries.
    ///
    /// ## Returns
    /// The vocabulary; or [`WordloomError::VocabConflict`] if a token or index
    /// repeats, or an index is the reserved padding index.
    pub fn from_pairs<I, S>(pairs: I) -> WLResult<Self>
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
    {
        let pairs = pairs.into_iter();
        let (lower, _) = pairs.size_hint();
        let mut token_to_index = hash_map_with_capacity(lower);
        let mut index_to_token = hash_map_with_capacity(lower);

        for (token, index) in pairs {
            let token = token.into();
            if index.is_zero() {
                return Err(WordloomError::VocabConflict(format!(
                    "token {token:?} uses the reserved padding index"
                )));
            }
            if let Some(prev) = index_to_token.insert(index, token.clone()) {
                return Err(WordloomError::VocabConflict(format!(
                    "index {index} assigned to both {prev:?} and {token:?}"
                )));
            }
            if let Some(prev) = token_to_index.insert(token.clone(), index) {
                return Err(WordloomError::VocabConflict(format!(
                    "token {token:?} assigned to both {prev} and {index}"
                )));
            }
        }

        Ok(Self {
            token_to_index,
            index_to_token,
            oov_index: None,
        })
    }

    /// Designate an existing token as the out-of-vocabulary token.
    ///
    /// When set, unknown tokens encode to its index instead of being dropped.
    pub fn with_oov_token(
        self,
        token: &str,
    ) -> WLResult<Self> {
        let index = self.token_index(token).ok_or_else(|| {
            WordloomError::VocabConflict(format!("oov token {token:?} is not in the vocabulary"))
        })?;
        Ok(Self {
            oov_index: Some(index),
            ..self
        })
    }

    /// The index used for unknown tokens, if any.
    pub fn oov_index(&self) -> Option<T> {
        self.oov_index
    }

    /// The reserved padding index.
    pub fn pad_index(&self) -> T {
        T::zero()
    }

    /// Returns the number of tokens in the vocabulary.
    pub fn len(&self) -> usize {
        self.token_to_index.len()
    }

    /// Returns true if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The size of a distribution covering every index, including padding.
    pub fn distribution_size(&self) -> usize {
        self.max_index()
            .and_then(|t| t.to_usize())
            .map_or(1, |m| m + 1)
    }

    /// Gets the highest assigned index.
    pub fn max_index(&self) -> Option<T> {
        self.index_to_token.keys().max().copied()
    }

    /// Look up a token's index.
    pub fn token_index(
        &self,
        token: &str,
    ) -> Option<T> {
        self.token_to_index.get(token).copied()
    }

    /// Resolve an index to its token.
    ///
    /// ## Returns
    /// The token; or [`WordloomError::UnknownIndex`].
    pub fn decode_index(
        &self,
        index: T,
    ) -> WLResult<&str> {
        self.index_to_token
            .get(&index)
            .map(String::as_str)
            .ok_or_else(|| WordloomError::UnknownIndex {
                index: index.to_u64().unwrap_or(u64::MAX),
            })
    }

    /// Encode a token stream, appending to `indices`.
    ///
    /// Unknown tokens are dropped, unless an oov token is configured.
    pub fn encode_tokens_append<S: AsRef<str>>(
        &self,
        tokens: &[S],
        indices: &mut Vec<T>,
    ) {
        indices.extend(
            tokens
                .iter()
                .filter_map(|t| self.token_index(t.as_ref()).or(self.oov_index)),
        );
    }

    /// Encode a token stream.
    ///
    /// Unknown tokens are dropped, unless an oov token is configured.
    pub fn encode_tokens<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> Vec<T> {
        let mut indices = Vec::with_capacity(tokens.len());
        self.encode_tokens_append(tokens, &mut indices);
        indices
    }

    /// Decode a sequence of indices into tokens.
    ///
    /// Padding indices are skipped.
    pub fn decode_indices(
        &self,
        indices: &[T],
    ) -> WLResult<Vec<&str>> {
        indices
            .iter()
            .filter(|t| !t.is_zero())
            .map(|&t| self.decode_index(t))
            .collect()
    }

    /// Iterate over ``(token, index)`` pairs, sorted by index.
    pub fn sorted_pairs(&self) -> Vec<(&str, T)> {
        let mut items: Vec<(&str, T)> = self
            .token_to_index
            .iter()
            .map(|(token, &index)| (token.as_str(), index))
            .collect();
        items.sort_by_key(|&(_, t)| t);
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_vocab() -> Vocabulary<u32> {
        Vocabulary::from_pairs([("the", 1), ("wizard", 2), ("cast", 3)]).unwrap()
    }

    #[test]
    fn test_bidirectional_lookup() {
        let vocab = test_vocab();
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.max_index(), Some(3));
        assert_eq!(vocab.distribution_size(), 4);
        assert_eq!(vocab.token_index("wizard"), Some(2));
        assert_eq!(vocab.decode_index(3).unwrap(), "cast");
        assert_eq!(vocab.pad_index(), 0);
    }

    #[test]
    fn test_unknown_index() {
        let vocab = test_vocab();
        let err = vocab.decode_index(9).unwrap_err();
        assert!(matches!(err, WordloomError::UnknownIndex { index: 9 }));
        assert!(vocab.decode_index(0).is_err());
    }

    #[test]
    fn test_encode_drops_unknown() {
        let vocab = test_vocab();
        assert_eq!(
            vocab.encode_tokens(&["the", "owl", "wizard", "cast"]),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_encode_with_oov() {
        let vocab = Vocabulary::<u32>::from_pairs([("<unk>", 1), ("the", 2)])
            .unwrap()
            .with_oov_token("<unk>")
            .unwrap();
        assert_eq!(vocab.encode_tokens(&["the", "owl"]), vec![2, 1]);

        assert!(test_vocab().with_oov_token("<unk>").is_err());
    }

    #[test]
    fn test_decode_indices_skips_padding() {
        let vocab = test_vocab();
        assert_eq!(
            vocab.decode_indices(&[0, 0, 1, 2]).unwrap(),
            vec!["the", "wizard"]
        );
    }

    #[test]
    fn test_conflicts() {
        assert!(Vocabulary::<u32>::from_pairs([("a", 1), ("b", 1)]).is_err());
        assert!(Vocabulary::<u32>::from_pairs([("a", 1), ("a", 2)]).is_err());
        assert!(Vocabulary::<u32>::from_pairs([("a", 0)]).is_err());
    }

    #[test]
    fn test_sorted_pairs() {
        let vocab = test_vocab();
        assert_eq!(
            vocab.sorted_pairs(),
            vec![("the", 1), ("wizard", 2), ("cast", 3)]
        );
    }
}
