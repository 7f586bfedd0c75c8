use std::fs;
use std::path::PathBuf;

use clap::Args;
use log::info;
use pixscribe_core::PixscribeError;

use crate::CliResult;

/// Hides a text message in a raster image
#[derive(Args, Debug)]
pub struct ConcealArgs {
    /// Carrier image such as a PNG or JPEG file, used readonly.
    #[arg(short = 'i', long = "in", value_name = "carrier image", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as file, always as PNG data
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// A text message that will be hidden
    #[arg(
        short,
        long,
        value_name = "text message",
        required_unless_present = "message_file"
    )]
    pub message: Option<String>,

    /// UTF-8 text file with the message that will be hidden
    #[arg(
        short = 'd',
        long = "data",
        value_name = "text file",
        required_unless_present = "message"
    )]
    pub message_file: Option<PathBuf>,
}

impl ConcealArgs {
    pub fn run(self) -> CliResult<()> {
        let message = match (self.message, self.message_file) {
            (Some(message), _) => message,
            (None, Some(file)) => fs::read_to_string(file)?,
            (None, None) => return Err(PixscribeError::MissingMessage),
        };

        pixscribe_core::commands::conceal(&self.media, &self.write_to_file, &message)?;
        info!("message hidden in {:?}", self.write_to_file);

        Ok(())
    }
}
