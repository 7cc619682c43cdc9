/// Implementation of `nbt validate`.
///
/// Decodes the whole file and reports either a series of success checkmarks
/// (`✓`) or a diagnostic failure line (`✗`). The main dispatcher turns the
/// returned `Err` into exit code 1.
///
/// # Success output
///
/// ```text
/// ✓ Root: TAG_Compound "hello world"
/// ✓ Entries: 1 entry
/// ✓ Size: 33 bytes consumed, no trailing data
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ Error: input truncated at offset 21
/// ✗ Error: invalid tag byte 0x1F at offset 0 (file starts with the gzip magic; decompress it first)
/// ```
use std::fs;

use anyhow::{Context, Result, anyhow};
use nbt_decoder::{DecodeError, NbtDecoder};
use nbt_types::Entry;

use crate::ValidateArgs;

const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// Run the `nbt validate` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not decode cleanly.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;

    match NbtDecoder::decode_slice(&bytes) {
        Ok(root) => {
            match &root.name {
                Some(name) => println!("✓ Root: {} \"{name}\"", root.entry.tag()),
                None => println!("✓ Root: {} (unnamed)", root.entry.tag()),
            }
            if let Some(count) = entry_count(&root.entry) {
                println!(
                    "✓ Entries: {count} entr{}",
                    if count == 1 { "y" } else { "ies" }
                );
            }
            println!("✓ Size: {} bytes consumed, no trailing data", bytes.len());
            Ok(())
        }

        Err(e) => {
            let diagnostic = decode_error_diagnostic(&e, &bytes);
            println!("✗ Error: {diagnostic}");
            Err(anyhow!("validation failed"))
        }
    }
}

/// Number of direct children of a container root.
fn entry_count(entry: &Entry) -> Option<usize> {
    match entry {
        Entry::Compound(c) => Some(c.len()),
        Entry::List(l) => Some(l.len()),
        _ => None,
    }
}

// ── Error formatting ──────────────────────────────────────────────────────────

/// Converts a `DecodeError` into a human-readable diagnostic string.
///
/// Compressed input is the most common reason a real file fails, so a gzip
/// header gets called out explicitly.
fn decode_error_diagnostic(e: &DecodeError, bytes: &[u8]) -> String {
    if bytes.starts_with(&GZIP_MAGIC) {
        return format!("{e} (file starts with the gzip magic; decompress it first)");
    }
    match e {
        DecodeError::TrailingData { extra_bytes } => {
            format!("{extra_bytes} unexpected bytes after the root entry")
        }
        other => other.to_string(),
    }
}
