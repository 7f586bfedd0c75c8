use crate::error::PixscribeError;

pub type Result<T> = std::result::Result<T, PixscribeError>;
