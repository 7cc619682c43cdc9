#![warn(clippy::pedantic)]

pub mod compound;
pub mod entry;
pub mod error;
pub mod string;
pub mod tag;

pub use compound::Compound;
pub use entry::{Entry, List, NamedEntry};
pub use error::TypeError;
pub use string::NbtString;
pub use tag::Tag;
