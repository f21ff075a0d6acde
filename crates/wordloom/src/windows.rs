//! # Sequence Windowing
//!
//! Transforms a flat token stream into fixed-length, stride-1 training windows.
//!
//! For a stream of length `n` and a window length `k`, the windows are
//! `stream[i - k..i]` for each `i` in `k..n`; there are `n - k` of them,
//! and the final token of the stream only ever appears as a label.
//! [`WindowOptions::with_final_window`] extends the set with the window ending
//! at the last token.
//!
//! ```rust
//! use wordloom::windows::create_text_sequences;
//!
//! let windows = create_text_sequences(&["a", "b", "c", "d", "e"], 3);
//! assert_eq!(windows, vec![vec!["a", "b", "c"], vec!["b", "c", "d"]]);
//! ```

use core::iter::FusedIterator;

/// Options for window generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowOptions {
    /// The window length.
    pub train_len: usize,

    /// Also emit the window which ends at the final token.
    pub final_window: bool,
}

impl WindowOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `train_len` - the window length.
    pub fn new(train_len: usize) -> Self {
        Self {
            train_len,
            final_window: false,
        }
    }

    /// Sets whether the window ending at the final token is emitted.
    pub fn with_final_window(
        self,
        final_window: bool,
    ) -> Self {
        Self {
            final_window,
            ..self
        }
    }

    /// The number of windows produced for a stream of `n` tokens.
    pub fn window_count(
        &self,
        n: usize,
    ) -> usize {
        let k = self.train_len;
        if k == 0 || k > n {
            return 0;
        }
        let count = n - k;
        if self.final_window { count + 1 } else { count }
    }

    /// Iterate over the windows of `tokens`, without copying.
    pub fn windows<'a, S>(
        &self,
        tokens: &'a [S],
    ) -> SequenceWindows<'a, S> {
        SequenceWindows {
            tokens,
            train_len: self.train_len,
            next: 0,
            end: self.window_count(tokens.len()),
        }
    }

    /// Collect the windows of `tokens` into owned sequences.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokens)))]
    pub fn collect_windows<S: Clone>(
        &self,
        tokens: &[S],
    ) -> Vec<Vec<S>> {
        self.windows(tokens).map(<[S]>::to_vec).collect()
    }
}

/// Build the training windows of a token stream.
///
/// Returns an empty set when `train_len >= tokens.len()`, or `train_len == 0`.
///
/// ## Arguments
/// * `tokens` - the token stream.
/// * `train_len` - the window length.
///
/// ## Returns
/// `tokens.len() - train_len` windows, in start-offset order.
pub fn create_text_sequences<S: Clone>(
    tokens: &[S],
    train_len: usize,
) -> Vec<Vec<S>> {
    WindowOptions::new(train_len).collect_windows(tokens)
}

/// Zero-copy iterator over stride-1 windows.
#[derive(Debug, Clone)]
pub struct SequenceWindows<'a, S> {
    tokens: &'a [S],
    train_len: usize,
    next: usize,
    end: usize,
}

impl<'a, S> Iterator for SequenceWindows<'a, S> {
    type Item = &'a [S];

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let start = self.next;
        self.next += 1;
        Some(&self.tokens[start..start + self.train_len])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl<S> ExactSizeIterator for SequenceWindows<'_, S> {}

impl<S> FusedIterator for SequenceWindows<'_, S> {}

/// A window split into its context and the label that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingExample<S> {
    /// All but the final token of the window.
    pub context: Vec<S>,

    /// The final token of the window.
    pub label: S,
}

/// Split a window into context and label.
///
/// ## Returns
/// `None` for an empty window.
pub fn split_context_label<S: Clone>(window: &[S]) -> Option<TrainingExample<S>> {
    let (label, context) = window.split_last()?;
    Some(TrainingExample {
        context: context.to_vec(),
        label: label.clone(),
    })
}

/// Split every window into training examples.
pub fn training_examples<'a, S, I>(windows: I) -> Vec<TrainingExample<S>>
where
    S: Clone + 'a,
    I: IntoIterator<Item = &'a [S]>,
{
    windows
        .into_iter()
        .filter_map(split_context_label)
        .collect()
}
