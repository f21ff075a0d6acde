//! # Vocabulary Fitting

use crate::{
    errors::{WLResult, WordloomError},
    types::{TokenType, WLHashMap, hash_map_new},
    vocab::Vocabulary,
};

/// Options for fitting a [`Vocabulary`] to a token stream.
#[derive(Debug, Clone, Default)]
pub struct VocabularyOptions {
    /// The maximum number of tokens to keep; `None` keeps all.
    ///
    /// Includes the oov token, when set.
    pub max_size: Option<usize>,

    /// An out-of-vocabulary token, assigned index `1`.
    pub oov_token: Option<String>,
}

impl VocabularyOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum vocabulary size.
    pub fn with_max_size(
        self,
        max_size: Option<usize>,
    ) -> Self {
        Self { max_size, ..self }
    }

    /// Sets the out-of-vocabulary token.
    pub fn with_oov_token<S: Into<String>>(
        self,
        oov_token: Option<S>,
    ) -> Self {
        Self {
            oov_token: oov_token.map(Into::into),
            ..self
        }
    }

    /// Fit a [`Vocabulary`] to a token stream.
    ///
    /// Indices are assigned from `1` in descending frequency order;
    /// ties are broken by first occurrence.
    ///
    /// ## Arguments
    /// * `tokens` - the token stream.
    ///
    /// ## Returns
    /// The fitted vocabulary; or [`WordloomError::TokenOutOfRange`]
    /// if the vocabulary does not fit in `T`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokens)))]
    pub fn fit<T, I, S>(
        &self,
        tokens: I,
    ) -> WLResult<Vocabulary<T>>
    where
        T: TokenType,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // token -> (count, first position)
        let mut counts: WLHashMap<String, (usize, usize)> = hash_map_new();
        for (pos, token) in tokens.into_iter().enumerate() {
            let token = token.as_ref();
            if let Some(entry) = counts.get_mut(token) {
                entry.0 += 1;
            } else {
                counts.insert(token.to_string(), (1, pos));
            }
        }

        if let Some(oov) = &self.oov_token {
            counts.remove(oov.as_str());
        }

        let mut ranked: Vec<(String, (usize, usize))> = counts.into_iter().collect();
        ranked.sort_by(|(_, (ca, pa)), (_, (cb, pb))| cb.cmp(ca).then(pa.cmp(pb)));

        let mut ordered: Vec<String> = Vec::with_capacity(ranked.len() + 1);
        if let Some(oov) = &self.oov_token {
            ordered.push(oov.clone());
        }
        ordered.extend(ranked.into_iter().map(|(token, _)| token));

        if let Some(max_size) = self.max_size {
            ordered.truncate(max_size);
        }

        log::debug!("fit vocabulary: {} tokens", ordered.len());

        let pairs = ordered
            .into_iter()
            .enumerate()
            .map(|(idx, token)| {
                T::from_usize(idx + 1)
                    .map(|t| (token, t))
                    .ok_or(WordloomError::TokenOutOfRange)
            })
            .collect::<WLResult<Vec<_>>>()?;

        let vocab = Vocabulary::from_pairs(pairs)?;
        match &self.oov_token {
            Some(oov) if !vocab.is_empty() => vocab.with_oov_token(oov),
            _ => Ok(vocab),
        }
    }
}
