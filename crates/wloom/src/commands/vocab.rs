use std::io::Write;

use wordloom::{Vocabulary, VocabularyOptions, vocab::io::write_vocab};

use crate::{corpus::CorpusArgs, input_output::OutputArgs, logging::LogArgs};

/// Args for the vocab command.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    #[command(flatten)]
    corpus: CorpusArgs,

    /// Max vocab size.
    #[arg(long)]
    max_size: Option<usize>,

    /// Out-of-vocabulary token; assigned index 1.
    #[arg(long)]
    oov_token: Option<String>,

    #[command(flatten)]
    output: OutputArgs,

    #[clap(flatten)]
    pub logging: LogArgs,
}

impl VocabArgs {
    /// Run the vocab command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;
        self.fit_and_write()
    }

    /// Fit the vocabulary, and write it to the output.
    fn fit_and_write(&self) -> Result<(), Box<dyn std::error::Error>> {
        let (_splitter, tokens) = self.corpus.read_tokens()?;

        let vocab: Vocabulary<u32> = VocabularyOptions::new()
            .with_max_size(self.max_size)
            .with_oov_token(self.oov_token.clone())
            .fit(&tokens)?;
        log::info!("Vocabulary Size: {}", vocab.len());

        if let Some(path) = &self.output.output {
            log::info!("output: {}", path);
        }
        let mut writer = self.output.open_writer()?;
        write_vocab(&vocab, &mut writer)?;
        writer.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use wordloom::vocab::io::load_vocab_path;

    use super::*;
    use crate::{Args, commands::Commands};

    #[test]
    fn test_vocab_with_oov_token() {
        tempdir::TempDir::new("wloom_vocab")
            .and_then(|dir| {
                let corpus = dir.path().join("corpus.txt");
                let output = dir.path().join("vocab.txt");
                std::fs::write(&corpus, "the owl, the post; the owl")?;

                let args = Args::try_parse_from([
                    "wloom",
                    "vocab",
                    corpus.to_str().unwrap(),
                    "--oov-token",
                    "<unk>",
                    "--output",
                    output.to_str().unwrap(),
                ])
                .unwrap();
                let Commands::Vocab(cmd) = args.command else {
                    panic!("expected the vocab command");
                };
                cmd.fit_and_write().expect("vocab failed");

                let written = std::fs::read_to_string(&output)?;
                assert_eq!(written.lines().next(), Some("#oov 1"));

                let vocab: Vocabulary<u32> = load_vocab_path(&output).expect("failed to load");
                assert_eq!(vocab.oov_index(), Some(1));
                assert_eq!(vocab.token_index("<unk>"), Some(1));
                assert_eq!(vocab.token_index("the"), Some(2));
                assert_eq!(vocab.token_index("owl"), Some(3));
                assert_eq!(vocab.token_index("post"), Some(4));

                Ok(())
            })
            .unwrap();
    }
}
