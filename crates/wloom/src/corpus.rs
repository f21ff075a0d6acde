use wordloom::{SplitMode, SplitterOptions, TextSplitter, WLResult, text::read_text_files};

/// Corpus source and splitting arg group.
#[derive(clap::Args, Debug)]
pub struct CorpusArgs {
    /// Input text files.
    #[arg(required = true)]
    files: Vec<String>,

    /// Split into character tokens instead of words.
    #[arg(long)]
    chars: bool,

    /// Keep the original case of tokens.
    #[arg(long)]
    keep_case: bool,

    /// Keep punctuation-only tokens.
    #[arg(long)]
    keep_punctuation: bool,
}

impl CorpusArgs {
    /// Build the text splitter.
    pub fn splitter(&self) -> WLResult<TextSplitter> {
        SplitterOptions::default()
            .with_mode(if self.chars {
                SplitMode::Chars
            } else {
                SplitMode::Words
            })
            .with_lowercase(!self.keep_case)
            .with_drop_punctuation(!self.keep_punctuation)
            .build()
    }

    /// Read and concatenate the input files.
    pub fn read_text(&self) -> WLResult<String> {
        log::info!("Reading {} corpus files", self.files.len());
        for (idx, path) in self.files.iter().enumerate() {
            log::info!("{idx}: {path}");
        }
        read_text_files(&self.files)
    }

    /// Read the input files, and split them into a token stream.
    pub fn read_tokens(&self) -> WLResult<(TextSplitter, Vec<String>)> {
        let splitter = self.splitter()?;
        let tokens = splitter.split(&self.read_text()?);
        log::info!("Token stream length: {}", tokens.len());
        Ok((splitter, tokens))
    }
}
