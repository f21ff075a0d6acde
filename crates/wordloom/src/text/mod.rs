//! # Text Sources and Splitting
//!
//! Upstream of windowing and encoding, raw text is read and split into
//! a normalized token stream:
//! * [`read_text_files`] - concatenate text sources.
//! * [`TextSplitter`] - NFKD-normalize text, and split it into word or character tokens.

mod text_reader;
mod text_splitter;

#[doc(inline)]
pub use text_reader::{read_text, read_text_files};
#[doc(inline)]
pub use text_splitter::{SplitMode, SplitterOptions, TextSplitter, WORD_SPAN_PATTERN};
