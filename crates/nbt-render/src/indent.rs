use std::fmt;

const SPACES: &str = "                                                                ";

/// A `fmt::Write` adapter that owns the indentation depth of one render.
///
/// Every `'\n'` written through it is immediately followed by the padding
/// for the current depth, so nested output never needs to know how deep it
/// sits. The depth changes only through [`indent`](Self::indent) and
/// [`dedent`](Self::dedent), which the printer calls around each container
/// body:
///
/// ```text
///   write "{"        depth 0
///   indent()         depth 1
///   write "\nchild"  → "\n" + "  " + "child"
///   dedent()         depth 0
///   write "\n}"      → "\n" + "" + "}"
/// ```
pub struct IndentWriter<'a, W: ?Sized> {
    inner: &'a mut W,
    width: usize,
    depth: usize,
}

impl<'a, W: fmt::Write + ?Sized> IndentWriter<'a, W> {
    /// Wrap `inner`, padding each level with `width` spaces.
    #[must_use]
    pub fn new(inner: &'a mut W, width: usize) -> Self {
        Self {
            inner,
            width,
            depth: 0,
        }
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn dedent(&mut self) {
        debug_assert!(self.depth > 0, "dedent below zero");
        self.depth = self.depth.saturating_sub(1);
    }

    fn pad(&mut self) -> fmt::Result {
        let mut left = self.depth * self.width;
        while left > 0 {
            let n = left.min(SPACES.len());
            self.inner.write_str(&SPACES[..n])?;
            left -= n;
        }
        Ok(())
    }
}

impl<W: fmt::Write + ?Sized> fmt::Write for IndentWriter<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut lines = s.split('\n');
        if let Some(first) = lines.next() {
            self.inner.write_str(first)?;
        }
        for line in lines {
            self.inner.write_char('\n')?;
            self.pad()?;
            self.inner.write_str(line)?;
        }
        Ok(())
    }
}
