use std::fmt::{self, Write};
use std::io;

use nbt_types::{Compound, Entry, List, NamedEntry, NbtString, Tag};
use nbt_wire::mutf8;

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::indent::IndentWriter;
use crate::sink::IoSink;

/// Diagnostic text renderer for decoded trees.
///
/// The output is meant for people, not for parsing back. A root compound
/// named `hello world` holding one string renders as:
///
/// ```text
/// TAG_Compound("hello world"): 1 entry
/// {
///   TAG_String("name"): "Bananrama"
/// }
/// ```
///
/// Per-variant rules:
///
/// ```text
/// ┌────────────────────────┬──────────────────────────────────────────┐
/// │ Variant                │ Rendering                                │
/// ├────────────────────────┼──────────────────────────────────────────┤
/// │ Byte … Double          │ decimal value                            │
/// │ ByteArray / Int / Long │ [B;1,2,3]  [I;…]  [L;…]                  │
/// │ String                 │ "text", or "first 50 bytes"[... N chars  │
/// │                        │ remaining] when longer; control chars,   │
/// │                        │ quotes and backslashes escaped           │
/// │ List                   │ N entries of type TAG_X, then a braced   │
/// │                        │ body of TAG_X(None): value lines         │
/// │ Compound               │ N entries, then a braced body of         │
/// │                        │ TAG_X("key"): value lines                │
/// │ End                    │ END                                      │
/// └────────────────────────┴──────────────────────────────────────────┘
/// ```
///
/// Each render owns its own [`IndentWriter`], so one printer can be shared
/// between threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrettyPrinter {
    config: RenderConfig,
}

impl PrettyPrinter {
    #[must_use]
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render a bare value, without a tag or name prefix.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::SinkFailure`] if `sink` fails.
    pub fn render<W: fmt::Write + ?Sized>(&self, entry: &Entry, sink: &mut W) -> Result<(), RenderError> {
        let mut out = IndentWriter::new(sink, self.config.indent_width);
        self.write_entry(&mut out, entry)?;
        Ok(())
    }

    /// Render a value behind its `TAG_X("name"): ` prefix, as a root is shown.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::SinkFailure`] if `sink` fails.
    pub fn render_named<W: fmt::Write + ?Sized>(
        &self,
        named: &NamedEntry,
        sink: &mut W,
    ) -> Result<(), RenderError> {
        let mut out = IndentWriter::new(sink, self.config.indent_width);
        self.write_member(&mut out, named.entry.tag(), named.name.as_ref(), &named.entry)?;
        Ok(())
    }

    /// [`render`](Self::render) into a new `String`.
    #[must_use]
    pub fn to_string(&self, entry: &Entry) -> String {
        Rendered {
            printer: self,
            name: None,
            entry,
            prefixed: false,
        }
        .to_string()
    }

    /// [`render_named`](Self::render_named) into a new `String`.
    #[must_use]
    pub fn named_to_string(&self, named: &NamedEntry) -> String {
        Rendered {
            printer: self,
            name: named.name.as_ref(),
            entry: &named.entry,
            prefixed: true,
        }
        .to_string()
    }

    /// Render a named root to a byte sink, followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Io`] with the writer's own error if writing or
    /// flushing fails.
    pub fn render_to_io<W: io::Write>(&self, named: &NamedEntry, sink: W) -> Result<(), RenderError> {
        let mut sink = IoSink::new(sink);
        let result = {
            let mut out = IndentWriter::new(&mut sink, self.config.indent_width);
            self.write_member(&mut out, named.entry.tag(), named.name.as_ref(), &named.entry)
                .and_then(|()| out.write_char('\n'))
        };
        sink.finish(result)
    }

    // ── Tree walk ─────────────────────────────────────────────────────────

    /// `TAG_X("name"): value`, or `TAG_X(None): value` when unnamed.
    fn write_member<W: fmt::Write + ?Sized>(
        &self,
        out: &mut IndentWriter<'_, W>,
        tag: Tag,
        name: Option<&NbtString>,
        entry: &Entry,
    ) -> fmt::Result {
        match name {
            Some(name) => write!(out, "{tag}({:?}): ", name.to_string_lossy())?,
            None => write!(out, "{tag}(None): ")?,
        }
        self.write_entry(out, entry)
    }

    fn write_entry<W: fmt::Write + ?Sized>(
        &self,
        out: &mut IndentWriter<'_, W>,
        entry: &Entry,
    ) -> fmt::Result {
        match entry {
            Entry::End => out.write_str("END"),
            Entry::Byte(v) => write!(out, "{v}"),
            Entry::Short(v) => write!(out, "{v}"),
            Entry::Int(v) => write!(out, "{v}"),
            Entry::Long(v) => write!(out, "{v}"),
            Entry::Float(v) => write!(out, "{v}"),
            Entry::Double(v) => write!(out, "{v}"),
            Entry::ByteArray(values) => write_array(out, 'B', values),
            Entry::IntArray(values) => write_array(out, 'I', values),
            Entry::LongArray(values) => write_array(out, 'L', values),
            Entry::String(s) => self.write_string(out, s),
            Entry::List(list) => self.write_list(out, list),
            Entry::Compound(compound) => self.write_compound(out, compound),
        }
    }

    fn write_string<W: fmt::Write + ?Sized>(
        &self,
        out: &mut IndentWriter<'_, W>,
        s: &NbtString,
    ) -> fmt::Result {
        // Quoted with control characters escaped, so a '\n' in the text
        // never reaches the indenting writer.
        let bytes = s.as_bytes();
        let preview = self.config.string_preview;
        if bytes.len() <= preview {
            return write!(out, "{:?}", s.to_string_lossy());
        }
        let remaining = bytes.len() - preview;
        write!(
            out,
            "{:?}[... {remaining} chars remaining]",
            mutf8::decode_lossy(&bytes[..preview])
        )
    }

    fn write_list<W: fmt::Write + ?Sized>(
        &self,
        out: &mut IndentWriter<'_, W>,
        list: &List,
    ) -> fmt::Result {
        write!(out, "{} of type {}\n{{", Count(list.len()), list.tag)?;
        out.indent();
        for item in list.iter() {
            out.write_char('\n')?;
            self.write_member(out, list.tag, None, item)?;
        }
        out.dedent();
        out.write_str("\n}")
    }

    fn write_compound<W: fmt::Write + ?Sized>(
        &self,
        out: &mut IndentWriter<'_, W>,
        compound: &Compound,
    ) -> fmt::Result {
        write!(out, "{}\n{{", Count(compound.len()))?;
        out.indent();
        for (name, value) in compound {
            out.write_char('\n')?;
            self.write_member(out, value.tag(), Some(name), value)?;
        }
        out.dedent();
        out.write_str("\n}")
    }
}

fn write_array<W, T>(out: &mut W, prefix: char, values: &[T]) -> fmt::Result
where
    W: fmt::Write + ?Sized,
    T: fmt::Display,
{
    write!(out, "[{prefix};")?;
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            out.write_char(',')?;
        }
        write!(out, "{v}")?;
    }
    out.write_char(']')
}

/// `1 entry`, `2 entries`.
struct Count(usize);

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            1 => f.write_str("1 entry"),
            n => write!(f, "{n} entries"),
        }
    }
}

/// `Display` view used by the `String` helpers.
struct Rendered<'a> {
    printer: &'a PrettyPrinter,
    name: Option<&'a NbtString>,
    entry: &'a Entry,
    prefixed: bool,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = IndentWriter::new(f, self.printer.config.indent_width);
        if self.prefixed {
            self.printer
                .write_member(&mut out, self.entry.tag(), self.name, self.entry)
        } else {
            self.printer.write_entry(&mut out, self.entry)
        }
    }
}
