//! Constant and data lists.
//!
//! A [`DataList`] is a possibly-nested sequence of literal or computed
//! values used as a fill value or attribute/variable default. Each list is
//! owned by exactly one symbol and is released with it; references to other
//! symbols (an enum constant, say) stay ids and are never owned here.

use cdl_types::Tag;

use crate::SymbolId;

/// A single literal or computed constant.
#[derive(Clone, Debug, PartialEq)]
pub enum Constant {
    Byte(i8),
    Char(u8),
    Short(i16),
    Int(i32),
    Float(f32),
    Double(f64),
    UByte(u8),
    UShort(u16),
    UInt(u32),
    Int64(i64),
    UInt64(u64),
    String(String),
    /// Raw opaque bytes, parsed from hex text.
    Opaque(Vec<u8>),
    /// Reference to an enum-constant symbol (not owned).
    EnumConst(SymbolId),
    /// Nested compound value.
    Compound(DataList),
    /// The generic fill-value marker (`_`).
    FillValue,
    /// The nil marker.
    Nil,
}

impl Constant {
    /// The type tag this constant classifies as.
    pub fn tag(&self) -> Tag {
        match self {
            Constant::Byte(_) => Tag::BYTE,
            Constant::Char(_) => Tag::CHAR,
            Constant::Short(_) => Tag::SHORT,
            Constant::Int(_) => Tag::INT,
            Constant::Float(_) => Tag::FLOAT,
            Constant::Double(_) => Tag::DOUBLE,
            Constant::UByte(_) => Tag::UBYTE,
            Constant::UShort(_) => Tag::USHORT,
            Constant::UInt(_) => Tag::UINT,
            Constant::Int64(_) => Tag::INT64,
            Constant::UInt64(_) => Tag::UINT64,
            Constant::String(_) => Tag::STRING,
            Constant::Opaque(_) => Tag::OPAQUE,
            Constant::EnumConst(_) => Tag::ECONST,
            Constant::Compound(_) => Tag::COMPOUND,
            Constant::FillValue => Tag::FILLVALUE,
            Constant::Nil => Tag::NIL,
        }
    }

    /// Parse an opaque constant from hex text (without the `0x` prefix).
    ///
    /// Two digits per byte; a non-hex character reads as zero, matching the
    /// lexer's lenient digit conversion. Empty or odd-length text is a
    /// reported error.
    pub fn opaque_from_hex(text: &str) -> Result<Self, DataError> {
        if text.is_empty() {
            return Err(DataError::EmptyOpaque);
        }
        if text.len() % 2 != 0 {
            return Err(DataError::OddOpaqueDigits(text.len()));
        }
        let bytes = text
            .as_bytes()
            .chunks_exact(2)
            .map(|pair| (hex_nibble(pair[0]) << 4) | hex_nibble(pair[1]))
            .collect();
        Ok(Constant::Opaque(bytes))
    }
}

/// Hex digit value; any other character reads as zero.
const fn hex_nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'A'..=b'F' => c - b'A' + 0x0a,
        b'a'..=b'f' => c - b'a' + 0x0a,
        _ => 0,
    }
}

/// Malformed constant data.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum DataError {
    #[error("opaque constant is empty")]
    EmptyOpaque,
    #[error("opaque constant has an odd number of hex digits ({0})")]
    OddOpaqueDigits(usize),
}

/// An ordered, possibly-nested sequence of constants.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataList {
    items: Vec<Constant>,
}

impl DataList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: Constant) {
        self.items.push(value);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Constant> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Constant> {
        self.items.iter()
    }
}

impl From<Vec<Constant>> for DataList {
    fn from(items: Vec<Constant>) -> Self {
        DataList { items }
    }
}

impl FromIterator<Constant> for DataList {
    fn from_iter<I: IntoIterator<Item = Constant>>(iter: I) -> Self {
        DataList {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DataList {
    type Item = &'a Constant;
    type IntoIter = std::slice::Iter<'a, Constant>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
