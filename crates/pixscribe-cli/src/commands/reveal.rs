use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Reveals the text message hidden in an image
#[derive(Args, Debug)]
pub struct RevealArgs {
    /// Source image that contains a hidden message
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image source file",
        required = true
    )]
    pub media: PathBuf,

    /// Write the revealed message to this file instead of stdout
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,
}

impl RevealArgs {
    pub fn run(self) -> CliResult<()> {
        match self.output_file {
            Some(output_file) => {
                pixscribe_core::commands::reveal_into(&self.media, &output_file)
            }
            None => {
                let message = pixscribe_core::commands::reveal(&self.media)?;
                println!("{message}");
                Ok(())
            }
        }
    }
}
