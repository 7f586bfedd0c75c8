use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Tells whether an image already carries a hidden message
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Image to inspect for the watermark
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image source file",
        required = true
    )]
    pub media: PathBuf,
}

impl CheckArgs {
    pub fn run(self) -> CliResult<()> {
        if pixscribe_core::commands::check(&self.media)? {
            println!("{}: carries encoded data", self.media.display());
        } else {
            println!("{}: looks clean", self.media.display());
        }

        Ok(())
    }
}
