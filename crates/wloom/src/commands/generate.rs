use std::{io::Write, sync::Arc};

use wordloom::{
    FrequencyModel,
    FrequencyModelOptions,
    SamplerOptions,
    Tokenizer,
    Vocabulary,
    VocabularyOptions,
    utility::timers::{DurationParts, timeit},
    vocab::io::load_vocab_path,
    windows::{WindowOptions, training_examples},
};

use crate::{corpus::CorpusArgs, input_output::OutputArgs, logging::LogArgs};

/// Args for the generate command.
#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    corpus: CorpusArgs,

    /// Seed text.
    #[arg(long)]
    seed: String,

    /// Model input length; training windows are one token longer.
    #[arg(long, default_value = "3")]
    seq_len: usize,

    /// Number of tokens to generate.
    #[arg(long, default_value = "20")]
    num_words: usize,

    /// Longest context suffix the model tracks; defaults to `--seq-len`.
    #[arg(long)]
    order: Option<usize>,

    /// Load the vocabulary from a file instead of fitting it.
    #[arg(long)]
    vocab: Option<String>,

    /// Max vocab size, when fitting.
    #[arg(long)]
    max_size: Option<usize>,

    #[command(flatten)]
    output: OutputArgs,

    #[clap(flatten)]
    pub logging: LogArgs,
}

impl GenerateArgs {
    /// Run the generate command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let (splitter, tokens) = self.corpus.read_tokens()?;

        let vocab: Vocabulary<u32> = match &self.vocab {
            Some(path) => {
                log::info!("Loading vocabulary: {path}");
                load_vocab_path(path)?
            }
            None => VocabularyOptions::new()
                .with_max_size(self.max_size)
                .fit(&tokens)?,
        };
        log::info!("Vocabulary Size: {}", vocab.len());

        let tokenizer = Tokenizer::new(Arc::new(splitter), Arc::new(vocab));
        let encoded = tokenizer.vocab().encode_tokens(&tokens);

        let (elapsed, model) = timeit(|| self.train(&tokenizer, &encoded));
        let model = model?;
        log::info!("Training took {}", DurationParts::from(elapsed));

        let text = SamplerOptions::new(self.seq_len).build().generate(
            &model,
            &tokenizer,
            &self.seed,
            self.num_words,
        )?;

        let mut writer = self.output.open_writer()?;
        writeln!(writer, "{text}")?;
        writer.flush()?;

        Ok(())
    }

    fn train(
        &self,
        tokenizer: &Tokenizer<u32>,
        encoded: &[u32],
    ) -> Result<FrequencyModel<u32>, Box<dyn std::error::Error>> {
        let windows = WindowOptions::new(self.seq_len + 1).windows(encoded);
        log::info!("Training on {} windows", windows.len());
        let examples = training_examples(windows);

        let mut model = FrequencyModelOptions::new(tokenizer.vocab().distribution_size())
            .with_order(self.order.unwrap_or(self.seq_len))
            .init();
        model.train(&examples)?;
        Ok(model)
    }
}
