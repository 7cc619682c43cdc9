use crate::error::TypeError;

// ── Macro for wire-byte enum boilerplate ──────────────────────────────
//
// Declares the enum with explicit discriminants, the strict byte
// conversion pair, and the diagnostic label per variant, so the wire code
// and the label of a variant sit on the same line.

macro_rules! tag_enum {
  (
    $(#[$meta:meta])*
    pub enum $name:ident {
      $( $(#[$vmeta:meta])* $variant:ident = $wire:literal => $label:literal ),+ $(,)?
    }
  ) => {
    $(#[$meta])*
    #[repr(u8)]
    pub enum $name {
      $( $(#[$vmeta])* $variant = $wire ),+
    }

    impl $name {
      /// The one-byte wire code of this tag.
      #[must_use]
      pub fn to_byte(self) -> u8 {
        self as u8
      }

      /// Convert a wire byte into a tag.
      ///
      /// # Errors
      ///
      /// Returns [`TypeError::InvalidTag`] for any byte that is not a
      /// known wire code. Unknown bytes are never aliased or defaulted.
      pub fn from_byte(value: u8) -> Result<Self, TypeError> {
        match value {
          $( $wire => Ok(Self::$variant), )+
          other => Err(TypeError::InvalidTag { value: other }),
        }
      }

      /// Diagnostic label, as used by the pretty-printer.
      #[must_use]
      pub fn name(self) -> &'static str {
        match self {
          $( Self::$variant => $label ),+
        }
      }
    }
  };
}

tag_enum! {
  /// The one-byte type discriminator that precedes every value on the wire.
  ///
  /// The wire code is the ordinal, ascending from zero:
  ///
  /// ```text
  /// ┌──────┬───────────┬──────────────────────────────────────────┐
  /// │ Wire │ Variant   │ Payload                                  │
  /// ├──────┼───────────┼──────────────────────────────────────────┤
  /// │ 0x00 │ End       │ none, terminates a compound              │
  /// │ 0x01 │ Byte      │ i8                                       │
  /// │ 0x02 │ Short     │ i16                                      │
  /// │ 0x03 │ Int       │ i32                                      │
  /// │ 0x04 │ Long      │ i64                                      │
  /// │ 0x05 │ Float     │ binary32 bits                            │
  /// │ 0x06 │ Double    │ binary64 bits                            │
  /// │ 0x07 │ ByteArray │ i32 length + i8 × length                 │
  /// │ 0x08 │ String    │ u16 length + modified UTF-8 bytes        │
  /// │ 0x09 │ List      │ child tag + i32 count + untagged values  │
  /// │ 0x0A │ Compound  │ named tagged values until End            │
  /// │ 0x0B │ IntArray  │ i32 length + i32 × length                │
  /// │ 0x0C │ LongArray │ i32 length + i64 × length                │
  /// └──────┴───────────┴──────────────────────────────────────────┘
  /// ```
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
  pub enum Tag {
    End = 0 => "TAG_End",
    Byte = 1 => "TAG_Byte",
    Short = 2 => "TAG_Short",
    Int = 3 => "TAG_Int",
    Long = 4 => "TAG_Long",
    Float = 5 => "TAG_Float",
    Double = 6 => "TAG_Double",
    ByteArray = 7 => "TAG_Byte_Array",
    String = 8 => "TAG_String",
    List = 9 => "TAG_List",
    Compound = 10 => "TAG_Compound",
    IntArray = 11 => "TAG_Int_Array",
    LongArray = 12 => "TAG_Long_Array",
  }
}

impl TryFrom<u8> for Tag {
    type Error = TypeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_byte(value)
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        tag.to_byte()
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
