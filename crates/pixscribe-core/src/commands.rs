use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::PixscribeError;
use crate::media::{Media, Persist};
use crate::result::Result;

/// Hides `message` inside the carrier at `media` and writes the encoded
/// image to `write_to_file`.
pub fn conceal(media: &Path, write_to_file: &Path, message: &str) -> Result<()> {
    let mut media = Media::from_file(media)?;
    media.conceal_text(message)?.save_as(write_to_file)
}

/// Recovers the hidden message from the carrier at `media`.
pub fn reveal(media: &Path) -> Result<String> {
    Media::from_file(media)?.reveal_text()
}

/// Recovers the hidden message and writes it to `destination_file`.
pub fn reveal_into(media: &Path, destination_file: &Path) -> Result<()> {
    let text = reveal(media)?;
    let mut destination_file =
        File::create(destination_file).map_err(|source| PixscribeError::WriteError { source })?;

    destination_file
        .write_all(text.as_bytes())
        .map_err(|source| PixscribeError::WriteError { source })
}

/// Returns true when the carrier at `media` holds the signature watermark.
pub fn check(media: &Path) -> Result<bool> {
    Ok(Media::from_file(media)?.is_encoded())
}
