//! # Predictive Models
//!
//! The sampler treats a model as an opaque capability:
//! * [`NextTokenModel`] - ``context -> distribution over indices``.
//!
//! Any lookup table, classifier, or network may implement it.
//! A back-off frequency table is provided:
//! * [`FrequencyModel`].

mod frequency_model;
mod next_token_model;

#[doc(inline)]
pub use frequency_model::{FrequencyModel, FrequencyModelOptions};
#[doc(inline)]
pub use next_token_model::{NextTokenModel, argmax};
