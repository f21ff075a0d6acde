//! # Next Token Model Trait

use crate::{
    errors::{WLResult, WordloomError},
    types::TokenType,
};

/// Index of the largest value; ties resolve to the lowest index.
///
/// `NaN` entries never win.
///
/// ## Returns
/// `None` if `values` has no comparable entry.
pub fn argmax(values: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (idx, &v) in values.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((idx, v)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// A model predicting the next index from a fixed-length context.
pub trait NextTokenModel<T: TokenType>: Send + Sync {
    /// Predict a probability distribution over vocabulary indices.
    ///
    /// ## Arguments
    /// * `context` - the encoded, padded context.
    ///
    /// ## Returns
    /// Scores indexed by token index.
    fn predict_distribution(
        &self,
        context: &[T],
    ) -> WLResult<Vec<f32>>;

    /// Predict the most probable next index.
    ///
    /// ## Arguments
    /// * `context` - the encoded, padded context.
    ///
    /// ## Returns
    /// The argmax of [`Self::predict_distribution`]; or
    /// [`WordloomError::EmptyDistribution`].
    fn predict_next(
        &self,
        context: &[T],
    ) -> WLResult<T> {
        let dist = self.predict_distribution(context)?;
        let idx = argmax(&dist).ok_or(WordloomError::EmptyDistribution)?;
        T::from_usize(idx).ok_or(WordloomError::TokenOutOfRange)
    }
}
