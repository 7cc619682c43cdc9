/// Default number of spaces per nesting level.
pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// Default number of string bytes shown before the remainder is summarised.
pub const DEFAULT_STRING_PREVIEW: usize = 50;

/// Layout settings for [`PrettyPrinter`](crate::PrettyPrinter).
///
/// ```text
/// ┌────────────────┬─────────┬──────────────────────────────────────────┐
/// │ Field          │ Default │ Purpose                                  │
/// ├────────────────┼─────────┼──────────────────────────────────────────┤
/// │ indent_width   │ 2       │ Spaces of padding per nesting level      │
/// │ string_preview │ 50      │ Bytes of a string shown before the       │
/// │                │         │ `[... N chars remaining]` marker         │
/// └────────────────┴─────────┴──────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    pub indent_width: usize,
    pub string_preview: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            string_preview: DEFAULT_STRING_PREVIEW,
        }
    }
}
