#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod indent;
pub mod pretty;

mod sink;

pub use config::RenderConfig;
pub use error::RenderError;
pub use indent::IndentWriter;
pub use pretty::PrettyPrinter;
