//! # Greedy Autoregressive Sampler
//!
//! Extends a seed text one token at a time. Each step:
//! 1. encodes the running text with a [`TokenCodec`],
//! 2. fits the encoding to `seq_len` with [`pad_sequence`],
//! 3. takes the model's argmax via [`NextTokenModel::predict_next`],
//! 4. decodes the index and appends the token to the running text,
//!    joined by the codec's [`TokenCodec::separator`].
//!
//! There is no randomness; identical inputs produce identical outputs.

use crate::{
    errors::WLResult,
    models::NextTokenModel,
    sequences::{PadOptions, pad_sequence},
    tokenizer::TokenCodec,
    types::TokenType,
};

/// Options for [`GreedySampler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerOptions<T: TokenType> {
    /// Context fitting; `pad.seq_len` is the model's input length.
    pub pad: PadOptions<T>,
}

impl<T: TokenType> SamplerOptions<T> {
    /// Create options for a model input length of `seq_len`.
    ///
    /// Contexts keep the most recent `seq_len` indices, and are left-padded with `0`.
    pub fn new(seq_len: usize) -> Self {
        Self {
            pad: PadOptions::new(seq_len),
        }
    }

    /// Sets the context fitting options.
    pub fn with_pad(
        self,
        pad: PadOptions<T>,
    ) -> Self {
        Self { pad }
    }

    /// Build a [`GreedySampler`] from these options.
    pub fn build(self) -> GreedySampler<T> {
        GreedySampler::new(self)
    }
}

/// Greedy (argmax) autoregressive sampler.
#[derive(Debug, Clone)]
pub struct GreedySampler<T: TokenType> {
    options: SamplerOptions<T>,
}

impl<T: TokenType> GreedySampler<T> {
    /// Create a new sampler.
    pub fn new(options: SamplerOptions<T>) -> Self {
        Self { options }
    }

    /// Get the sampler options.
    pub fn options(&self) -> &SamplerOptions<T> {
        &self.options
    }

    /// Generate `num_gen_words` tokens following `seed_text`.
    ///
    /// ## Arguments
    /// * `model` - the trained model.
    /// * `codec` - the codec the model was trained with.
    /// * `seed_text` - the initial context; not included in the output.
    /// * `num_gen_words` - the number of tokens to generate.
    ///
    /// ## Returns
    /// The generated tokens, in order; or the first model / decode failure.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, model, codec, seed_text))
    )]
    pub fn generate_tokens<M, C>(
        &self,
        model: &M,
        codec: &C,
        seed_text: &str,
        num_gen_words: usize,
    ) -> WLResult<Vec<String>>
    where
        M: NextTokenModel<T> + ?Sized,
        C: TokenCodec<T> + ?Sized,
    {
        let separator = codec.separator();
        let mut input_text = seed_text.to_string();
        let mut output = Vec::with_capacity(num_gen_words);

        for step in 0..num_gen_words {
            let encoded = codec.encode(&input_text);
            let context = pad_sequence(&encoded, &self.options.pad);

            let index = model.predict_next(&context)?;
            let token = codec.decode_index(index)?;
            log::trace!("step {step}: {index} -> {token:?}");

            input_text.push_str(separator);
            input_text.push_str(token);
            output.push(token.to_string());
        }

        Ok(output)
    }

    /// Generate `num_gen_words` tokens following `seed_text`, joined by the codec's separator.
    ///
    /// See [`Self::generate_tokens`].
    pub fn generate<M, C>(
        &self,
        model: &M,
        codec: &C,
        seed_text: &str,
        num_gen_words: usize,
    ) -> WLResult<String>
    where
        M: NextTokenModel<T> + ?Sized,
        C: TokenCodec<T> + ?Sized,
    {
        Ok(self
            .generate_tokens(model, codec, seed_text, num_gen_words)?
            .join(codec.separator()))
    }
}

/// Generate `num_gen_words` tokens following `seed_text` with greedy decoding.
///
/// ## Arguments
/// * `model` - the trained model.
/// * `codec` - the codec the model was trained with.
/// * `seq_len` - the model's input length.
/// * `seed_text` - the initial context; not included in the output.
/// * `num_gen_words` - the number of tokens to generate.
///
/// ## Returns
/// The generated tokens joined by the codec's separator (a single space for words);
/// `""` when `num_gen_words == 0`.
pub fn generate_text<T, M, C>(
    model: &M,
    codec: &C,
    seq_len: usize,
    seed_text: &str,
    num_gen_words: usize,
) -> WLResult<String>
where
    T: TokenType,
    M: NextTokenModel<T> + ?Sized,
    C: TokenCodec<T> + ?Sized,
{
    SamplerOptions::new(seq_len)
        .build()
        .generate(model, codec, seed_text, num_gen_words)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::{
        errors::WordloomError,
        tokenizer::Tokenizer,
        text::{SplitMode, SplitterOptions, TextSplitter},
        vocab::Vocabulary,
    };

    fn wizard_tokenizer() -> Tokenizer<u32> {
        let vocab: Vocabulary<u32> =
            Vocabulary::from_pairs([("the", 1), ("wizard", 2), ("cast", 3), ("spell", 4)]).unwrap();
        Tokenizer::new(TextSplitter::default().into(), vocab.into())
    }

    /// Always predicts one index; records the contexts it saw.
    struct ConstantModel {
        index: u32,
        seen: Mutex<Vec<Vec<u32>>>,
    }

    impl ConstantModel {
        fn new(index: u32) -> Self {
            Self {
                index,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl NextTokenModel<u32> for ConstantModel {
        fn predict_distribution(
            &self,
            context: &[u32],
        ) -> WLResult<Vec<f32>> {
            self.seen.lock().unwrap().push(context.to_vec());
            let mut dist = vec![0.0; self.index as usize + 1];
            dist[self.index as usize] = 1.0;
            Ok(dist)
        }
    }

    #[test]
    fn test_cast_cast_cast() {
        let tok = wizard_tokenizer();
        let model = ConstantModel::new(3);

        let out = generate_text(&model, &tok, 2, "the wizard", 3).unwrap();
        assert_eq!(out, "cast cast cast");

        assert_eq!(
            *model.seen.lock().unwrap(),
            vec![vec![1, 2], vec![2, 3], vec![3, 3]]
        );
    }

    #[test]
    fn test_zero_words() {
        let tok = wizard_tokenizer();
        let model = ConstantModel::new(3);
        assert_eq!(generate_text(&model, &tok, 2, "the wizard", 0).unwrap(), "");
        assert!(model.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_short_seed_is_left_padded() {
        let tok = wizard_tokenizer();
        let model = ConstantModel::new(4);

        // "dragon" is unknown, and dropped by encoding.
        let out = generate_text(&model, &tok, 3, "dragon wizard", 2).unwrap();
        assert_eq!(out, "spell spell");
        assert_eq!(
            *model.seen.lock().unwrap(),
            vec![vec![0, 0, 2], vec![0, 2, 4]]
        );
    }

    #[test]
    fn test_unknown_index_is_fatal() {
        let tok = wizard_tokenizer();
        let model = ConstantModel::new(7);
        let err = generate_text(&model, &tok, 2, "the wizard", 3).unwrap_err();
        assert!(matches!(err, WordloomError::UnknownIndex { index: 7 }));
    }

    fn char_tokenizer() -> Tokenizer<u32> {
        let splitter = SplitterOptions::default()
            .with_mode(SplitMode::Chars)
            .build()
            .unwrap();
        let vocab: Vocabulary<u32> =
            Vocabulary::from_pairs([("a", 1), ("b", 2), (" ", 3)]).unwrap();
        Tokenizer::new(splitter.into(), vocab.into())
    }

    #[test]
    fn test_char_mode_adds_no_separator() {
        let tok = char_tokenizer();
        let model = ConstantModel::new(1);

        let out = generate_text(&model, &tok, 2, "ab", 3).unwrap();
        assert_eq!(out, "aaa");
        assert_eq!(
            *model.seen.lock().unwrap(),
            vec![vec![1, 2], vec![2, 1], vec![1, 1]]
        );
    }

    #[test]
    fn test_char_mode_space_token_length() {
        let tok = char_tokenizer();
        let model = ConstantModel::new(3);
        let sampler = SamplerOptions::new(2).build();

        let tokens = sampler.generate_tokens(&model, &tok, "ab", 2).unwrap();
        assert_eq!(tokens, vec![" ", " "]);
        assert_eq!(sampler.generate(&model, &tok, "ab", 2).unwrap(), "  ");
        assert_eq!(
            *model.seen.lock().unwrap(),
            vec![vec![1, 2], vec![2, 3], vec![3, 3]]
        );
    }

    #[test]
    fn test_dyn_model_and_length_law() {
        let tok = wizard_tokenizer();
        let model: Box<dyn NextTokenModel<u32>> = Box::new(ConstantModel::new(1));
        let sampler = SamplerOptions::new(4).build();

        for n in 0..6 {
            let a = sampler.generate(model.as_ref(), &tok, "wizard", n).unwrap();
            let b = sampler.generate(model.as_ref(), &tok, "wizard", n).unwrap();
            assert_eq!(a, b);
            if n == 0 {
                assert!(a.is_empty());
            } else {
                assert_eq!(a.split(' ').count(), n);
            }
        }
    }
}
