//! Conformance tests: golden fixture files decoded and rendered to insta snapshots.
//!
//! Each test reads a committed `.nbt` fixture from `tests/golden/`, decodes it
//! with [`NbtDecoder`] and renders it with the default [`PrettyPrinter`]. The
//! rendered text is compared against an insta snapshot in `tests/snapshots/`.
//!
//! The fixtures are produced by `src/bin/generate_golden.rs`; a diff in a
//! snapshot signals either a deliberate format change (accept via
//! `cargo insta review`) or a regression.

use insta::assert_snapshot;
use nbt_decoder::NbtDecoder;
use nbt_render::PrettyPrinter;
use nbt_tests::fixture::{golden_dir, golden_fixtures};
use nbt_wire::WireReader;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn golden_payload(name: &str) -> Vec<u8> {
    let path = golden_dir().join(name);
    std::fs::read(&path)
        .unwrap_or_else(|e| panic!("failed to read golden fixture {}: {e}", path.display()))
}

fn render(name: &str) -> String {
    let payload = golden_payload(name);
    let root = NbtDecoder::decode_slice(&payload)
        .unwrap_or_else(|e| panic!("decode failed for {name}: {e}"));
    PrettyPrinter::default().named_to_string(&root)
}

// ── Fixture integrity ─────────────────────────────────────────────────────────

#[test]
fn committed_fixtures_match_generator() {
    assert!(golden_dir().is_dir());
    for (name, expected) in golden_fixtures() {
        assert_eq!(
            golden_payload(name),
            expected,
            "{name} is stale; rerun generate_golden"
        );
    }
}

// ── Rendered fixtures ─────────────────────────────────────────────────────────

#[test]
fn bananrama() {
    let output = render("bananrama.nbt");
    assert_snapshot!("bananrama", output);
}

#[test]
fn int_list() {
    let output = render("int_list.nbt");
    assert_snapshot!("int_list", output);
}

#[test]
fn all_types() {
    let output = render("all_types.nbt");
    assert_snapshot!("all_types", output);
}

#[test]
fn nested() {
    let output = render("nested.nbt");
    assert_snapshot!("nested", output);
}

#[test]
fn long_string() {
    let output = render("long_string.nbt");
    assert_snapshot!("long_string", output);
}

#[test]
fn mutf8() {
    let output = render("mutf8.nbt");
    assert_snapshot!("mutf8", output);
}

#[test]
fn bananrama_as_compound() {
    let payload = golden_payload("bananrama.nbt");
    let root = NbtDecoder::decode_as_compound(&mut WireReader::new(payload.as_slice()))
        .expect("decode_as_compound should succeed");
    let output = PrettyPrinter::default().to_string(&root);
    assert_snapshot!("bananrama_as_compound", output);
}
