#![warn(clippy::pedantic)]

pub mod config;
pub mod decoder;
pub mod error;

mod budget;

pub use config::DecoderConfig;
pub use decoder::NbtDecoder;
pub use error::DecodeError;
