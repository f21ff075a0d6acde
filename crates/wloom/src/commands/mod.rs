mod generate;
mod vocab;
mod windows;

/// Subcommands for wloom
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Write the training windows of a corpus, one per line.
    Windows(windows::WindowsArgs),

    /// Fit a vocabulary to a corpus.
    Vocab(vocab::VocabArgs),

    /// Train a frequency model on a corpus, and extend a seed text.
    Generate(generate::GenerateArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Windows(cmd) => cmd.run(),
            Commands::Vocab(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
        }
    }
}
