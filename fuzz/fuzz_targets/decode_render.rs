#![no_main]

use libfuzzer_sys::fuzz_target;
use nbt_decoder::NbtDecoder;
use nbt_render::PrettyPrinter;

// Fuzz target: decode, then render whatever decoded.
//
// Rendering never fails on tree shape, and the String helper produces the
// same text as rendering into a sink.
fuzz_target!(|data: &[u8]| {
    let Ok(root) = NbtDecoder::decode_slice(data) else {
        return;
    };
    let mut out = String::new();
    PrettyPrinter::default()
        .render_named(&root, &mut out)
        .expect("rendering into a String cannot fail");
    assert_eq!(out, PrettyPrinter::default().named_to_string(&root));
});
