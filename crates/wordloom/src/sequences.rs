//! # Fixed-Length Sequence Fitting
//!
//! Models consume context sequences of an exact length;
//! [`pad_sequence`] truncates or pads encoded sequences to that length.

use crate::types::TokenType;

/// Which end of an over-long sequence is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Truncating {
    /// Drop the oldest tokens; keep the most recent `seq_len`.
    #[default]
    Pre,

    /// Drop the newest tokens.
    Post,
}

/// Which end of a short sequence receives padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Padding {
    /// Pad before the sequence.
    #[default]
    Pre,

    /// Pad after the sequence.
    Post,
}

/// Options for [`pad_sequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadOptions<T: TokenType> {
    /// The exact output length.
    pub seq_len: usize,

    /// The filler index.
    pub pad_token: T,

    /// The truncation side.
    pub truncating: Truncating,

    /// The padding side.
    pub padding: Padding,
}

impl<T: TokenType> PadOptions<T> {
    /// Create options which pre-truncate and pre-pad with `0`.
    pub fn new(seq_len: usize) -> Self {
        Self {
            seq_len,
            pad_token: T::zero(),
            truncating: Truncating::default(),
            padding: Padding::default(),
        }
    }

    /// Sets the filler index.
    pub fn with_pad_token(
        self,
        pad_token: T,
    ) -> Self {
        Self { pad_token, ..self }
    }

    /// Sets the truncation side.
    pub fn with_truncating(
        self,
        truncating: Truncating,
    ) -> Self {
        Self { truncating, ..self }
    }

    /// Sets the padding side.
    pub fn with_padding(
        self,
        padding: Padding,
    ) -> Self {
        Self { padding, ..self }
    }
}

/// Fit an encoded sequence to exactly `options.seq_len` tokens.
///
/// ## Arguments
/// * `tokens` - the encoded sequence.
/// * `options` - the length and fill policy.
///
/// ## Returns
/// A sequence of length `options.seq_len`.
pub fn pad_sequence<T: TokenType>(
    tokens: &[T],
    options: &PadOptions<T>,
) -> Vec<T> {
    let seq_len = options.seq_len;

    let kept = if tokens.len() > seq_len {
        match options.truncating {
            Truncating::Pre => &tokens[tokens.len() - seq_len..],
            Truncating::Post => &tokens[..seq_len],
        }
    } else {
        tokens
    };

    let fill = seq_len - kept.len();
    let mut out = Vec::with_capacity(seq_len);
    match options.padding {
        Padding::Pre => {
            out.resize(fill, options.pad_token);
            out.extend_from_slice(kept);
        }
        Padding::Post => {
            out.extend_from_slice(kept);
            out.resize(seq_len, options.pad_token);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pre_truncate_keeps_recent() {
        let opts = PadOptions::<u32>::new(3);
        assert_eq!(pad_sequence(&[1, 2, 3, 4, 5], &opts), vec![3, 4, 5]);
    }

    #[test]
    fn test_post_truncate() {
        let opts = PadOptions::<u32>::new(3).with_truncating(Truncating::Post);
        assert_eq!(pad_sequence(&[1, 2, 3, 4, 5], &opts), vec![1, 2, 3]);
    }

    #[test]
    fn test_pre_pad() {
        let opts = PadOptions::<u32>::new(4);
        assert_eq!(pad_sequence(&[7, 8], &opts), vec![0, 0, 7, 8]);
    }

    #[test]
    fn test_post_pad_custom_token() {
        let opts = PadOptions::<u16>::new(4)
            .with_padding(Padding::Post)
            .with_pad_token(9);
        assert_eq!(pad_sequence(&[7], &opts), vec![7, 9, 9, 9]);
    }

    #[test]
    fn test_exact_and_empty() {
        let opts = PadOptions::<u32>::new(2);
        assert_eq!(pad_sequence(&[5, 6], &opts), vec![5, 6]);
        assert_eq!(pad_sequence(&[], &opts), vec![0, 0]);

        let opts = PadOptions::<u32>::new(0);
        assert!(pad_sequence(&[1, 2], &opts).is_empty());
    }

    proptest::proptest! {
        #[test]
        fn pad_sequence_length_law(
            tokens in proptest::collection::vec(1..100u32, 0..40),
            seq_len in 0..20usize,
        ) {
            let out = pad_sequence(&tokens, &PadOptions::new(seq_len));
            proptest::prop_assert_eq!(out.len(), seq_len);

            let kept = tokens.len().min(seq_len);
            proptest::prop_assert_eq!(&out[seq_len - kept..], &tokens[tokens.len() - kept..]);
        }
    }
}
