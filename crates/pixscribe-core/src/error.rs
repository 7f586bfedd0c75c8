use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PixscribeError {
    /// Represents an unsupported carrier media. For example, a Movie file is not supported
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Raised before any pixel is written when the payload does not fit the carrier
    #[error("Payload too large: {required} carrier pixels required, but only {available} available")]
    PayloadTooLarge { required: usize, available: usize },

    /// The carrier cannot even hold the signature watermark
    #[error("Carrier too small: a {width}x{height} image has no room for the signature region")]
    CarrierTooSmall { width: u32, height: u32 },

    /// The carrier is already stamped with the signature of an earlier encode
    #[error("Carrier already contains encoded data")]
    AlreadyEncoded,

    /// Represents a reveal on a carrier without any encoded data
    #[error("No secret data found")]
    NoSecretData,

    /// The payload region ended before the terminator sequence was found
    #[error("Encoded payload is not terminated")]
    UnterminatedPayload,

    /// Represents the error of invalid UTF-8 text data recovered from a carrier
    #[error("Invalid text data found inside a payload")]
    InvalidTextData(#[from] FromUtf8Error),

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,
}
