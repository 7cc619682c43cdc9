//! Shared helpers for the NBT integration tests, benches and the golden
//! fixture generator.

pub mod fixture;

pub use fixture::PayloadBuilder;
