//! The hex-triplet pixel codec.
//!
//! [`conceal`] rewrites every second pixel column of the carrier with three
//! hex digits of the terminated payload and stamps the signature watermark
//! into the reserved bottom-right block. [`reveal`] walks the same pixel
//! sequence and reassembles the payload up to the terminator.

use image::RgbaImage;
use log::debug;

use super::addressing::{payload_addresses, payload_pixel_count, signature_addresses};
use super::hex::{
    channel_to_digit, digit_to_channel, pixels_required, HexTriplets, SIGNATURE, TERMINATOR_BYTES,
};
use crate::error::PixscribeError;
use crate::result::Result;

/// Sentinel appended to every payload before encoding,
/// `U+009C STRING TERMINATOR`. A payload containing this character itself is
/// truncated at its first occurrence on reveal.
pub const TERMINATOR: char = '\u{009C}';

/// Maximum payload length in bytes for a carrier of the given dimensions.
///
/// Each payload pixel stores three hex digits, two digits make one byte, and
/// two bytes are reserved for the terminator sequence.
pub fn payload_capacity(width: u32, height: u32) -> usize {
    (payload_pixel_count(width, height) * 3 / 2).saturating_sub(TERMINATOR_BYTES.len())
}

/// Returns true when the carrier is stamped with the watermark of an
/// earlier [`conceal`] run.
pub fn is_encoded(image: &RgbaImage) -> bool {
    let (width, height) = image.dimensions();
    let mut marker = Vec::with_capacity(SIGNATURE.len());
    let mut high = None;
    for (x, y) in signature_addresses(width, height).take(pixels_required(SIGNATURE.len())) {
        let pixel = image.get_pixel(x, y);
        for channel in &pixel.0[..3] {
            let Some(digit) = channel_to_digit(*channel) else {
                return false;
            };
            match high.take() {
                None => high = Some(digit),
                Some(h) => marker.push(h << 4 | digit),
            }
        }
    }
    marker == SIGNATURE
}

/// Hides `payload` inside the carrier and stamps the signature region.
///
/// Fails without touching a single pixel when the carrier is already
/// stamped, cannot hold the watermark, or is too small for the payload.
/// Even columns, payload pixels beyond the consumed hex stream and all
/// alpha channels stay bit-for-bit untouched.
pub fn conceal(payload: &str, image: &mut RgbaImage) -> Result<()> {
    let (width, height) = image.dimensions();

    if is_encoded(image) {
        return Err(PixscribeError::AlreadyEncoded);
    }

    if signature_addresses(width, height).count() < pixels_required(SIGNATURE.len()) {
        return Err(PixscribeError::CarrierTooSmall { width, height });
    }

    let mut data = payload.as_bytes().to_vec();
    data.extend_from_slice(&TERMINATOR_BYTES);

    let required = pixels_required(data.len());
    let available = payload_pixel_count(width, height);
    if required > available {
        return Err(PixscribeError::PayloadTooLarge {
            required,
            available,
        });
    }
    debug!(
        "concealing {} bytes in {required} of {available} payload pixels",
        data.len()
    );

    for (triplet, (x, y)) in HexTriplets::new(&data).zip(payload_addresses(width, height)) {
        put_triplet(image, x, y, triplet);
    }
    for (triplet, (x, y)) in HexTriplets::new(SIGNATURE).zip(signature_addresses(width, height)) {
        put_triplet(image, x, y, triplet);
    }

    Ok(())
}

/// Recovers the payload hidden by [`conceal`].
///
/// The scan ends at the terminator sequence. A channel that does not hold a
/// doubled hex nibble was never written by the encoder and ends the scan
/// early; reaching the end of the payload region either way without a
/// terminator is reported as [`PixscribeError::UnterminatedPayload`].
pub fn reveal(image: &RgbaImage) -> Result<String> {
    let (width, height) = image.dimensions();

    if !is_encoded(image) {
        return Err(PixscribeError::NoSecretData);
    }

    let mut bytes = Vec::new();
    let mut high = None;
    'pixels: for (x, y) in payload_addresses(width, height) {
        let pixel = image.get_pixel(x, y);
        for channel in &pixel.0[..3] {
            let Some(digit) = channel_to_digit(*channel) else {
                break 'pixels;
            };
            match high.take() {
                None => high = Some(digit),
                Some(h) => {
                    bytes.push(h << 4 | digit);
                    if bytes.ends_with(&TERMINATOR_BYTES) {
                        bytes.truncate(bytes.len() - TERMINATOR_BYTES.len());
                        debug!("revealed {} payload bytes, scan ended at ({x}, {y})", bytes.len());
                        return Ok(String::from_utf8(bytes)?);
                    }
                }
            }
        }
    }

    Err(PixscribeError::UnterminatedPayload)
}

fn put_triplet(image: &mut RgbaImage, x: u32, y: u32, triplet: [u8; 3]) {
    let pixel = image.get_pixel_mut(x, y);
    for (channel, digit) in pixel.0.iter_mut().zip(triplet) {
        *channel = digit_to_channel(digit);
    }
}
