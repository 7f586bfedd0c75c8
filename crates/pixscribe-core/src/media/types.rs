use std::fs::File;
use std::path::Path;

pub use image::RgbaImage;
use log::{error, warn};

use crate::error::PixscribeError;
use crate::media::image::{conceal, is_encoded, payload_capacity, reveal};
use crate::result::Result;

use super::Persist;

/// a carrier container for the pixel codec
#[derive(Debug, Clone)]
pub struct Media {
    image: RgbaImage,
}

impl Media {
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn from_file(f: &Path) -> Result<Self> {
        if let Some(ext) = f.extension() {
            let ext = ext.to_string_lossy().to_lowercase();
            match ext.as_str() {
                "png" | "jpg" | "jpeg" => Ok(Self::from_image(
                    image::open(f)
                        .map_err(|_e| PixscribeError::InvalidImageMedia)?
                        .to_rgba8(),
                )),
                _ => Err(PixscribeError::UnsupportedMedia),
            }
        } else {
            Err(PixscribeError::UnsupportedMedia)
        }
    }

    /// Maximum payload length in bytes this carrier can hold.
    pub fn capacity(&self) -> usize {
        let (width, height) = self.image.dimensions();
        payload_capacity(width, height)
    }

    /// Returns true when the carrier already holds encoded data.
    pub fn is_encoded(&self) -> bool {
        is_encoded(&self.image)
    }

    pub fn conceal_text(&mut self, payload: &str) -> Result<&mut Self> {
        conceal(payload, &mut self.image)?;
        Ok(self)
    }

    pub fn reveal_text(&self) -> Result<String> {
        reveal(&self.image)
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }
}

impl Persist for Media {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        if file
            .extension()
            .map_or(true, |ext| !ext.eq_ignore_ascii_case("png"))
        {
            warn!("target {file:?} has no png extension, png data is written anyway");
        }
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            PixscribeError::WriteError { source: e }
        })?;
        self.save_to_writer(f)
    }
}

impl Media {
    /// Writes the carrier as PNG, the only format that survives a round trip.
    pub fn save_to_writer<W: std::io::Write + std::io::Seek>(&mut self, mut writer: W) -> Result<()> {
        self.image
            .write_to(&mut writer, image::ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                PixscribeError::ImageEncodingError
            })
    }
}
