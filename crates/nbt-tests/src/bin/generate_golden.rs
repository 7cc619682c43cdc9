//! Golden fixture generator for the NBT conformance suite.
//!
//! Writes every payload from [`nbt_tests::fixture::golden_fixtures`] under
//! `tests/golden/`. Run it after changing a fixture; snapshot files are
//! updated separately via `cargo insta review`.
//!
//! ```bash
//! cargo run --bin generate_golden -p nbt-tests
//! ```

#![allow(clippy::pedantic)]

use nbt_tests::fixture::{golden_dir, golden_fixtures};

fn main() {
    let dir = golden_dir();
    std::fs::create_dir_all(&dir).expect("create_dir_all");

    for (name, payload) in golden_fixtures() {
        let path = dir.join(name);
        std::fs::write(&path, &payload).expect("write_file");
        println!("  wrote {} ({} bytes)", path.display(), payload.len());
    }

    println!("All golden fixtures written to {}", dir.display());
}
