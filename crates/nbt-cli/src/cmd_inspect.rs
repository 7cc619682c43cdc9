/// Implementation of `nbt inspect`.
///
/// Streams the file through the decoder and prints the pretty rendering of
/// the root to stdout.
///
/// # Output format
///
/// ```text
/// TAG_Compound("hello world"): 1 entry
/// {
///   TAG_String("name"): "Bananrama"
/// }
/// ```
///
/// With `--compound` the root is first wrapped into a one-entry compound and
/// printed without a prefix:
///
/// ```text
/// 1 entry
/// {
///   TAG_Compound("hello world"): 1 entry
///   {
///     TAG_String("name"): "Bananrama"
///   }
/// }
/// ```
use std::fs::File;
use std::io::{self, BufReader, Write};

use anyhow::{Context, Result};
use nbt_decoder::NbtDecoder;
use nbt_render::{PrettyPrinter, RenderConfig};
use nbt_wire::{ByteSource, WireReader};

use crate::InspectArgs;

/// Run the `nbt inspect` command.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, the payload does not
/// decode, or stdout cannot be written.
pub fn run(args: &InspectArgs) -> Result<()> {
    let file =
        File::open(&args.file).with_context(|| format!("cannot open {}", args.file.display()))?;
    let mut reader = WireReader::new(BufReader::new(file));

    let printer = PrettyPrinter::new(RenderConfig {
        indent_width: args.indent,
        string_preview: args.preview,
    });
    let stdout = io::stdout();

    if args.compound {
        let root = NbtDecoder::decode_as_compound(&mut reader)
            .with_context(|| format!("failed to decode {}", args.file.display()))?;
        let mut out = stdout.lock();
        writeln!(out, "{}", printer.to_string(&root)).context("cannot write to stdout")?;
    } else {
        let root = NbtDecoder::decode(&mut reader)
            .with_context(|| format!("failed to decode {}", args.file.display()))?;
        printer
            .render_to_io(&root, stdout.lock())
            .context("cannot write to stdout")?;
    }

    log::debug!("{}: {} bytes decoded", args.file.display(), reader.offset());
    Ok(())
}
