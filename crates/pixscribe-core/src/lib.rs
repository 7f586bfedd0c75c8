//! # PixScribe Core API
//!
//! Hides a UTF-8 text payload inside the pixels of a raster image and
//! recovers it later. Every second pixel column carries three hex digits of
//! the payload as a color value; an encoded carrier is stamped with a fixed
//! watermark in its bottom-right corner so it is never encoded twice.
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```rust
//! use image::RgbaImage;
//! use pixscribe_core::media::image::{conceal, is_encoded, reveal};
//!
//! let mut carrier = RgbaImage::from_pixel(40, 10, image::Rgba([120, 130, 140, 255]));
//!
//! conceal("Hi", &mut carrier).expect("Failed to hide message in image");
//!
//! assert!(is_encoded(&carrier));
//! assert_eq!(reveal(&carrier).unwrap(), "Hi");
//! ```
//!
//! ## Work with image files
//!
//! ```rust,no_run
//! use pixscribe_core::PixscribeCore;
//!
//! PixscribeCore::encoder()
//!     .use_media("tests/images/plain/carrier-image.png").unwrap()
//!     .save_as("image-with-a-message-inside.png")
//!     .with_message("Hello, World!")
//!     .conceal_and_save()
//!     .expect("Failed to hide message in image");
//!
//! pixscribe_core::commands::reveal("image-with-a-message-inside.png".as_ref())
//!     .expect("Failed to reveal message from image");
//! ```

#![warn(clippy::redundant_else)]

pub mod commands;
pub mod error;
pub mod media;
pub mod result;

use std::path::{Path, PathBuf};

use crate::media::{Media, Persist};

pub use crate::error::PixscribeError;
pub use crate::media::image::{payload_capacity, TERMINATOR};
pub use crate::result::Result;

pub struct PixscribeCore;

impl PixscribeCore {
    pub fn encoder() -> PixscribeEncoder {
        PixscribeEncoder::new()
    }
}

/// Builder style API for encoding a message into a carrier image file.
#[derive(Default)]
pub struct PixscribeEncoder {
    target: Option<PathBuf>,
    carrier: Option<Media>,
    message: Option<String>,
}

impl PixscribeEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn use_media(&mut self, input_file: impl AsRef<Path>) -> Result<&mut Self> {
        self.carrier = Some(Media::from_file(input_file.as_ref())?);

        Ok(self)
    }

    pub fn save_as(&mut self, output_file: impl AsRef<Path>) -> &mut Self {
        self.target = Some(output_file.as_ref().to_owned());
        self
    }

    pub fn with_message<S: Into<String>>(&mut self, msg: S) -> &mut Self {
        self.message = Some(msg.into());
        self
    }

    pub fn conceal_and_save(&mut self) -> Result<&mut Self> {
        let Some(media) = self.carrier.as_mut() else {
            return Err(PixscribeError::CarrierNotSet);
        };
        let Some(target) = self.target.as_ref() else {
            return Err(PixscribeError::TargetNotSet);
        };
        let Some(message) = self.message.as_ref() else {
            return Err(PixscribeError::MissingMessage);
        };

        media.conceal_text(message)?.save_as(target)?;

        Ok(self)
    }
}


#[cfg(test)]
pub(crate) mod test_utils {
    use image::{ImageBuffer, RgbaImage};

    /// Deterministic carrier whose channel values are never doubled nibbles,
    /// so untouched pixels cannot pose as encoded digits.
    pub fn prepare_gradient_image(width: u32, height: u32) -> RgbaImage {
        ImageBuffer::from_fn(width, height, |x, y| {
            let base = (x * 7 + y * 13) as u8;
            image::Rgba([
                nudge(base),
                nudge(base.wrapping_add(85)),
                nudge(base.wrapping_add(170)),
                255,
            ])
        })
    }

    fn nudge(channel: u8) -> u8 {
        if channel % 17 == 0 {
            channel.wrapping_add(3)
        } else {
            channel
        }
    }
}
