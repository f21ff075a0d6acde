//! # Back-off Frequency Model

use crate::{
    errors::{WLResult, WordloomError},
    models::NextTokenModel,
    types::{TokenType, WLHashMap, hash_map_new},
    windows::TrainingExample,
};

/// Options for [`FrequencyModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyModelOptions {
    /// The longest context suffix tracked.
    pub order: usize,

    /// The length of returned distributions; usually the vocabulary's
    /// `distribution_size()`.
    pub distribution_size: usize,
}

impl FrequencyModelOptions {
    /// Create new options, with an `order` of 3.
    pub fn new(distribution_size: usize) -> Self {
        Self {
            order: 3,
            distribution_size,
        }
    }

    /// Sets the longest context suffix tracked.
    pub fn with_order(
        self,
        order: usize,
    ) -> Self {
        Self { order, ..self }
    }

    /// Initializes an untrained [`FrequencyModel`].
    pub fn init<T: TokenType>(self) -> FrequencyModel<T> {
        FrequencyModel::new(self)
    }
}

/// A back-off table of label counts, keyed by context suffix.
///
/// Prediction uses the longest context suffix seen in training,
/// backing off to shorter suffixes; the empty suffix holds the
/// overall label counts. Suffixes reaching into padding are not used.
#[derive(Debug, Clone)]
pub struct FrequencyModel<T: TokenType> {
    options: FrequencyModelOptions,
    table: WLHashMap<Vec<T>, WLHashMap<T, u64>>,
}

impl<T: TokenType> FrequencyModel<T> {
    /// Create an untrained model.
    pub fn new(options: FrequencyModelOptions) -> Self {
        Self {
            options,
            table: hash_map_new(),
        }
    }

    /// Get the model options.
    pub fn options(&self) -> &FrequencyModelOptions {
        &self.options
    }

    /// Returns true if no examples have been observed.
    pub fn is_untrained(&self) -> bool {
        self.table.is_empty()
    }

    fn usable_suffix_len(
        &self,
        context: &[T],
    ) -> usize {
        let unpadded = context.iter().rev().take_while(|t| !t.is_zero()).count();
        unpadded.min(self.options.order)
    }

    /// Record one training example.
    ///
    /// ## Returns
    /// [`WordloomError::TokenOutOfRange`] if the label does not fit the distribution.
    pub fn observe(
        &mut self,
        context: &[T],
        label: T,
    ) -> WLResult<()> {
        match label.to_usize() {
            Some(idx) if idx < self.options.distribution_size && !label.is_zero() => {}
            _ => return Err(WordloomError::TokenOutOfRange),
        }

        let max_len = self.usable_suffix_len(context);
        for len in 0..=max_len {
            let key = context[context.len() - len..].to_vec();
            *self
                .table
                .entry(key)
                .or_insert_with(hash_map_new)
                .entry(label)
                .or_insert(0) += 1;
        }
        Ok(())
    }

    /// Record a batch of training examples.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, examples)))]
    pub fn train<'a, I>(
        &mut self,
        examples: I,
    ) -> WLResult<()>
    where
        I: IntoIterator<Item = &'a TrainingExample<T>>,
    {
        let mut count = 0usize;
        for example in examples {
            self.observe(&example.context, example.label)?;
            count += 1;
        }
        log::debug!(
            "frequency model: observed {count} examples; {} contexts",
            self.table.len()
        );
        Ok(())
    }
}

impl<T: TokenType> NextTokenModel<T> for FrequencyModel<T> {
    fn predict_distribution(
        &self,
        context: &[T],
    ) -> WLResult<Vec<f32>> {
        let max_len = self.usable_suffix_len(context);
        for len in (0..=max_len).rev() {
            let Some(counts) = self.table.get(&context[context.len() - len..]) else {
                continue;
            };

            let total: u64 = counts.values().sum();
            let mut dist = vec![0.0f32; self.options.distribution_size];
            for (label, &count) in counts.iter() {
                if let Some(idx) = label.to_usize() {
                    dist[idx] = count as f32 / total as f32;
                }
            }
            return Ok(dist);
        }
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::windows::{WindowOptions, training_examples};

    fn trained(order: usize) -> FrequencyModel<u32> {
        // [1, 2] -> 3, [2, 3] -> 1, [3, 1] -> 2, [1, 2] -> 4,
        // [2, 4] -> 5, [4, 5] -> 2, [5, 2] -> 4
        let stream: Vec<u32> = vec![1, 2, 3, 1, 2, 4, 5, 2, 4];
        let examples = training_examples(
            WindowOptions::new(3)
                .with_final_window(true)
                .windows(&stream),
        );

        let mut model = FrequencyModelOptions::new(6).with_order(order).init();
        model.train(&examples).unwrap();
        model
    }

    #[test]
    fn test_longest_suffix_wins() {
        let model = trained(2);
        // [1, 2] -> {3: 1, 4: 1}; tie resolves to the lower index.
        assert_eq!(model.predict_next(&[1, 2]).unwrap(), 3);
        // [5, 2] -> {4: 1}
        assert_eq!(model.predict_next(&[5, 2]).unwrap(), 4);
    }

    #[test]
    fn test_backoff() {
        let model = trained(2);
        // [3, 2] unseen; [2] -> {3: 1, 4: 2}
        assert_eq!(model.predict_next(&[3, 2]).unwrap(), 4);
        // [9, 3] unseen; [3] -> {1: 1}
        assert_eq!(model.predict_next(&[9, 3]).unwrap(), 1);
        // nothing ends in 9; the overall label counts are used.
        let dist = model.predict_distribution(&[9]).unwrap();
        assert_eq!(dist.len(), 6);
        assert!((dist.iter().sum::<f32>() - 1.0).abs() < 1e-6);
        assert_eq!(dist[0], 0.0);
    }

    #[test]
    fn test_padding_is_ignored() {
        let model = trained(2);
        assert_eq!(
            model.predict_distribution(&[0, 2]).unwrap(),
            model.predict_distribution(&[9, 2]).unwrap()
        );
        assert_eq!(
            model.predict_distribution(&[0, 0]).unwrap(),
            model.predict_distribution(&[]).unwrap()
        );
    }

    #[test]
    fn test_untrained() {
        let model: FrequencyModel<u32> = FrequencyModelOptions::new(4).init();
        assert!(model.is_untrained());
        assert!(matches!(
            model.predict_next(&[1]),
            Err(WordloomError::EmptyDistribution)
        ));
    }

    #[test]
    fn test_label_range() {
        let mut model: FrequencyModel<u32> = FrequencyModelOptions::new(4).init();
        assert!(model.observe(&[1], 4).is_err());
        assert!(model.observe(&[1], 0).is_err());
        assert!(model.observe(&[1], 3).is_ok());
    }
}
