use std::io::Write;

use wordloom::windows::WindowOptions;

use crate::{corpus::CorpusArgs, input_output::OutputArgs, logging::LogArgs};

/// Args for the windows command.
#[derive(clap::Args, Debug)]
pub struct WindowsArgs {
    #[command(flatten)]
    corpus: CorpusArgs,

    /// Window length.
    #[arg(long)]
    train_len: usize,

    /// Also emit the window ending at the final token.
    #[arg(long)]
    final_window: bool,

    /// Token separator within a window line.
    #[arg(long, default_value = " ")]
    separator: String,

    #[command(flatten)]
    output: OutputArgs,

    #[clap(flatten)]
    pub logging: LogArgs,
}

impl WindowsArgs {
    /// Run the windows command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;
        self.write_windows()
    }

    /// Write each window of the corpus as one line.
    fn write_windows(&self) -> Result<(), Box<dyn std::error::Error>> {
        let (_splitter, tokens) = self.corpus.read_tokens()?;

        let options = WindowOptions::new(self.train_len).with_final_window(self.final_window);
        log::info!(
            "Writing {} windows of length {}",
            options.window_count(tokens.len()),
            self.train_len
        );

        let mut writer = self.output.open_writer()?;
        for window in options.windows(&tokens) {
            writeln!(writer, "{}", window.join(self.separator.as_str()))?;
        }
        writer.flush()?;

        Ok(())
    }
}
