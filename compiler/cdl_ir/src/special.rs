//! Variable "special" storage metadata.
//!
//! Backend-facing storage hints attached to a variable declaration: fill
//! value, chunking, checksums, filters, codecs. The flags word records
//! which clauses the source actually wrote, so generators can distinguish
//! an explicit default from an absent clause.

use bitflags::bitflags;

use crate::DataList;

bitflags! {
    /// Which special clauses were written for a variable.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct SpecialFlags: u32 {
        const FILLVALUE   = 1 << 0;
        const STORAGE     = 1 << 1;
        const CHUNKSIZES  = 1 << 2;
        const FLETCHER32  = 1 << 3;
        const DEFLATE     = 1 << 4;
        const SHUFFLE     = 1 << 5;
        const ENDIANNESS  = 1 << 6;
        const NOFILL      = 1 << 7;
        const FILTERS     = 1 << 8;
        const CODECS      = 1 << 9;
    }
}

/// Storage layout of a variable.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Storage {
    #[default]
    Contiguous,
    Chunked,
    Compact,
}

/// Byte order requested for a variable.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Endianness {
    #[default]
    Native,
    Little,
    Big,
}

/// One filter specification: filter id plus unsigned parameters.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FilterSpec {
    pub id: u32,
    pub params: Vec<u32>,
}

impl FilterSpec {
    pub fn new(id: u32, params: Vec<u32>) -> Self {
        FilterSpec { id, params }
    }
}

/// One codec specification: codec id plus its parameter text.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CodecSpec {
    pub id: String,
    pub parameters: String,
}

/// The owned special metadata of one variable.
///
/// Everything here is owned by the declaring variable symbol and released
/// with it; the attribute symbols a variable also tracks are referenced by
/// id elsewhere and never appear here.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Special {
    /// Which clauses were written.
    pub flags: SpecialFlags,
    /// `_FillValue` constant list.
    pub fill_value: Option<DataList>,
    /// `_Storage` layout.
    pub storage: Storage,
    /// `_ChunkSizes`, one extent per dimension.
    pub chunks: Vec<u64>,
    /// `_Fletcher32` checksumming.
    pub fletcher32: bool,
    /// `_Shuffle` filter.
    pub shuffle: bool,
    /// `_DeflateLevel`, when written.
    pub deflate_level: Option<u32>,
    /// `_Endianness`.
    pub endianness: Endianness,
    /// `_NoFill` mode.
    pub no_fill: bool,
    /// `_Filter` specifications, declaration order.
    pub filters: Vec<FilterSpec>,
    /// `_Codecs` specifications, declaration order.
    pub codecs: Vec<CodecSpec>,
}

impl Special {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no special clause was written at all.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Record a fill value clause.
    pub fn set_fill_value(&mut self, values: DataList) {
        self.fill_value = Some(values);
        self.flags |= SpecialFlags::FILLVALUE;
    }

    /// Record a chunk-sizes clause.
    pub fn set_chunks(&mut self, chunks: Vec<u64>) {
        self.chunks = chunks;
        self.storage = Storage::Chunked;
        self.flags |= SpecialFlags::CHUNKSIZES | SpecialFlags::STORAGE;
    }

    /// Record a filter clause.
    pub fn add_filter(&mut self, filter: FilterSpec) {
        self.filters.push(filter);
        self.flags |= SpecialFlags::FILTERS;
    }

    /// Record a codec clause.
    pub fn add_codec(&mut self, codec: CodecSpec) {
        self.codecs.push(codec);
        self.flags |= SpecialFlags::CODECS;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Constant;

    #[test]
    fn fresh_special_is_empty() {
        let special = Special::new();
        assert!(special.is_empty());
        assert!(special.fill_value.is_none());
        assert_eq!(special.storage, Storage::Contiguous);
        assert_eq!(special.endianness, Endianness::Native);
    }

    #[test]
    fn clauses_set_their_flags() {
        let mut special = Special::new();
        special.set_fill_value(vec![Constant::Int(-1)].into());
        special.set_chunks(vec![16, 16]);
        special.add_filter(FilterSpec::new(307, vec![9]));

        assert!(special.flags.contains(SpecialFlags::FILLVALUE));
        assert!(special.flags.contains(SpecialFlags::CHUNKSIZES));
        assert!(special.flags.contains(SpecialFlags::STORAGE));
        assert!(special.flags.contains(SpecialFlags::FILTERS));
        assert!(!special.flags.contains(SpecialFlags::CODECS));
        assert_eq!(special.storage, Storage::Chunked);
        assert!(!special.is_empty());
    }
}
