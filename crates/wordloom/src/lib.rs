//! # `wordloom` Sequence Windowing and Greedy Generation
//!
//! Small building blocks for word- and character-level text generation:
//! * [`text`] to read and split raw text into a token stream.
//! * [`vocab`] to fit, store, and load a bidirectional [`Vocabulary`].
//! * [`windows`] to cut a token stream into fixed-length training windows.
//! * [`sequences`] to fit encoded contexts to a model's input length.
//! * [`models`] for the [`NextTokenModel`] capability, and a [`FrequencyModel`].
//! * [`sampler`] to extend a seed text with greedy decoding.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``rayon``
//!
//! #### feature: ``ahash``
//!
//! This swaps all `HashMap` implementations for ``ahash``.
//!
//! This is done by the ``types::WLHash{*}`` type alias machinery.
//!
//! #### feature: ``rayon``
//!
//! This enables parallel batch encoding in [`Tokenizer::encode_batch`].
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
//!
//! ## Example
//!
//! ```rust
//! use wordloom::{
//!     FrequencyModelOptions, SamplerOptions, TextSplitter, Tokenizer, VocabularyOptions,
//!     windows::{WindowOptions, training_examples},
//! };
//!
//! let text = "the boy who lived. the boy who waited. the girl who read.";
//!
//! let (tokenizer, tokens) =
//!     Tokenizer::<u32>::fit(TextSplitter::default(), &VocabularyOptions::new(), text)?;
//! let encoded = tokenizer.vocab().encode_tokens(&tokens);
//!
//! let train_len = 3;
//! let examples = training_examples(WindowOptions::new(train_len).windows(&encoded));
//!
//! let mut model = FrequencyModelOptions::new(tokenizer.vocab().distribution_size()).init();
//! model.train(&examples)?;
//!
//! let sampler = SamplerOptions::new(train_len - 1).build();
//! let out = sampler.generate(&model, &tokenizer, "the boy", 2)?;
//! assert_eq!(out, "who lived");
//! # Ok::<(), wordloom::WordloomError>(())
//! ```
#![warn(missing_docs, unused)]

pub mod errors;
pub mod models;
pub mod sampler;
pub mod sequences;
pub mod text;
pub mod tokenizer;
pub mod types;
pub mod utility;
pub mod vocab;
pub mod windows;

#[doc(inline)]
pub use errors::{WLResult, WordloomError};
#[doc(inline)]
pub use models::{FrequencyModel, FrequencyModelOptions, NextTokenModel};
#[doc(inline)]
pub use sampler::{GreedySampler, SamplerOptions, generate_text};
#[doc(inline)]
pub use sequences::{PadOptions, pad_sequence};
#[doc(inline)]
pub use text::{SplitMode, SplitterOptions, TextSplitter};
#[doc(inline)]
pub use tokenizer::{TokenCodec, Tokenizer};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::{Vocabulary, VocabularyOptions};
#[doc(inline)]
pub use windows::create_text_sequences;
