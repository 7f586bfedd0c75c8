mod addressing;
pub mod codec;
mod hex;

pub use codec::{conceal, is_encoded, payload_capacity, reveal, TERMINATOR};
