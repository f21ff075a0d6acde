//! # Vocabulary
//!
//! This module provides the bidirectional token/index vocabulary and related io mechanisms.
//!
//! A [`Vocabulary`] holds two explicit maps:
//! * `token_to_index` - ``{ String -> T }``,
//! * `index_to_token` - ``{ T -> String }``.
//!
//! Index `0` is reserved for padding and is never assigned to a token.
//!
//! Vocabularies are fit from a token stream with [`VocabularyOptions`].
pub mod io;

mod vocab_options;
mod vocabulary;

#[doc(inline)]
pub use vocab_options::VocabularyOptions;
#[doc(inline)]
pub use vocabulary::Vocabulary;
