#![warn(clippy::pedantic)]

pub mod error;
pub mod mutf8;
pub mod reader;

pub use error::WireError;
pub use reader::{ByteSource, WireReader};
