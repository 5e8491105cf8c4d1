//! The netCDF type-tag space and total classification functions.
//!
//! Tags occupy two disjoint contiguous bands plus two sentinels:
//! - 0..=16: the primitive band (`NAT` through `COMPOUND`)
//! - 31, 32: the `FILLVALUE` and `NIL` sentinels
//! - 100..=108: the meta band, identifying symbol kinds themselves
//!
//! Every function here is total over the entire `i32` space: an
//! out-of-range tag never errors, it classifies as nothing and renders a
//! synthetic `NC_<n>` name. This favors debuggability of malformed input
//! over strict failure.

use std::borrow::Cow;
use std::fmt;

/// Mirror of the storage library's vlen descriptor (`nc_vlen_t`).
///
/// Only its size matters to the compiler: it is the fixed width reported
/// for the `VLEN` tag.
#[repr(C)]
pub struct VlenDescriptor {
    pub len: usize,
    pub data: *const u8,
}

/// Literal names of the primitive band, indexed by tag value.
const TYPE_NAMES: [&str; 17] = [
    "NC_NAT",
    "NC_BYTE",
    "NC_CHAR",
    "NC_SHORT",
    "NC_INT",
    "NC_FLOAT",
    "NC_DOUBLE",
    "NC_UBYTE",
    "NC_USHORT",
    "NC_UINT",
    "NC_INT64",
    "NC_UINT64",
    "NC_STRING",
    "NC_VLEN",
    "NC_OPAQUE",
    "NC_ENUM",
    "NC_COMPOUND",
];

/// Literal names of the meta band, indexed from `GRP`.
const META_NAMES: [&str; 9] = [
    "NC_GRP", "NC_DIM", "NC_VAR", "NC_ATT", "NC_TYPE", "NC_ECONST", "NC_FIELD", "NC_ARRAY",
    "NC_PRIM",
];

/// Object-class spellings of the meta band, indexed from `GRP`.
///
/// Differs from [`META_NAMES`] in one entry: the type class renders as
/// `NC_TYP`.
const CLASS_NAMES: [&str; 9] = [
    "NC_GRP", "NC_DIM", "NC_VAR", "NC_ATT", "NC_TYP", "NC_ECONST", "NC_FIELD", "NC_ARRAY",
    "NC_PRIM",
];

/// CDL source spellings of the primitive band, indexed by tag value.
const CDL_NAMES: [&str; 17] = [
    "nat", "byte", "char", "short", "int", "float", "double", "ubyte", "ushort", "uint", "int64",
    "uint64", "string", "vlen", "opaque", "enum", "compound",
];

/// Fixed byte widths of the primitive band, indexed by tag value.
///
/// `STRING` is pointer-sized; `VLEN` is the descriptor-struct width;
/// `OPAQUE`/`ENUM`/`COMPOUND` have no fixed width (the declaring type
/// symbol carries the actual size).
const SIZES: [usize; 17] = [
    0,
    1,
    1,
    2,
    4,
    4,
    8,
    1,
    2,
    4,
    8,
    8,
    std::mem::size_of::<*const u8>(),
    std::mem::size_of::<VlenDescriptor>(),
    0,
    0,
    0,
];

/// A netCDF type tag.
///
/// A thin wrapper over the storage library's `nc_type` integer, so that
/// classification stays total even for values no constant names.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Tag(i32);

impl Tag {
    // === Primitive band (0..=16) ===
    /// Not-a-type.
    pub const NAT: Self = Self(0);
    pub const BYTE: Self = Self(1);
    pub const CHAR: Self = Self(2);
    pub const SHORT: Self = Self(3);
    pub const INT: Self = Self(4);
    pub const FLOAT: Self = Self(5);
    pub const DOUBLE: Self = Self(6);
    pub const UBYTE: Self = Self(7);
    pub const USHORT: Self = Self(8);
    pub const UINT: Self = Self(9);
    pub const INT64: Self = Self(10);
    pub const UINT64: Self = Self(11);
    pub const STRING: Self = Self(12);
    pub const VLEN: Self = Self(13);
    pub const OPAQUE: Self = Self(14);
    pub const ENUM: Self = Self(15);
    pub const COMPOUND: Self = Self(16);

    // === Sentinels ===
    /// Generic fill-value marker.
    pub const FILLVALUE: Self = Self(31);
    /// Nil constant marker.
    pub const NIL: Self = Self(32);

    // === Meta band (100..=108): symbol kinds ===
    pub const GRP: Self = Self(100);
    pub const DIM: Self = Self(101);
    pub const VAR: Self = Self(102);
    pub const ATT: Self = Self(103);
    pub const TYPE: Self = Self(104);
    pub const ECONST: Self = Self(105);
    pub const FIELD: Self = Self(106);
    pub const ARRAY: Self = Self(107);
    pub const PRIM: Self = Self(108);

    /// Create a tag from a raw storage-library value.
    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Get the raw storage-library value.
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// True for an integer kind: the numeric sub-range excluding `CHAR`.
    #[inline]
    pub const fn is_int_type(self) -> bool {
        self.0 != Self::CHAR.0
            && ((self.0 >= Self::BYTE.0 && self.0 <= Self::INT.0)
                || (self.0 >= Self::UBYTE.0 && self.0 <= Self::UINT64.0))
    }

    /// True for the four genuinely unsigned integer widths.
    #[inline]
    pub const fn is_uint_type(self) -> bool {
        self.is_int_type()
            && self.0 >= Self::UBYTE.0
            && self.0 <= Self::UINT64.0
            && self.0 != Self::INT64.0
    }

    /// True for a floating-point kind.
    ///
    /// Known quirk, preserved on purpose: the upper bound is the only range
    /// check, so every tag `<= DOUBLE` (including `NAT`, the small integer
    /// kinds, and negative values) also answers true. Callers that need a
    /// strict test must combine with [`is_int_type`](Self::is_int_type).
    #[inline]
    pub const fn is_float_type(self) -> bool {
        self.0 == Self::FLOAT.0 || self.0 <= Self::DOUBLE.0
    }

    /// True for a classic-format primitive (`BYTE..=DOUBLE`).
    #[inline]
    pub const fn is_classic_prim(self) -> bool {
        self.0 >= Self::BYTE.0 && self.0 <= Self::DOUBLE.0
    }

    /// True for a classic-format primitive or `STRING`.
    #[inline]
    pub const fn is_classic_prim_plus(self) -> bool {
        self.is_classic_prim() || self.0 == Self::STRING.0
    }

    /// True for any primitive (`BYTE..=STRING`).
    #[inline]
    pub const fn is_prim(self) -> bool {
        self.0 >= Self::BYTE.0 && self.0 <= Self::STRING.0
    }

    /// True for any primitive, an enum constant, or an opaque value.
    #[inline]
    pub const fn is_prim_plus(self) -> bool {
        self.is_prim() || self.0 == Self::ECONST.0 || self.0 == Self::OPAQUE.0
    }

    /// True for a meta-band tag (a symbol kind).
    #[inline]
    pub const fn is_object_class(self) -> bool {
        self.0 >= Self::GRP.0 && self.0 <= Self::PRIM.0
    }

    /// Map an unsigned integer kind to its signed partner.
    ///
    /// Total and involutive with [`to_unsigned`](Self::to_unsigned) over the
    /// four width pairs; the identity on every other tag.
    #[inline]
    pub const fn to_signed(self) -> Self {
        match self {
            Self::UBYTE => Self::BYTE,
            Self::USHORT => Self::SHORT,
            Self::UINT => Self::INT,
            Self::UINT64 => Self::INT64,
            other => other,
        }
    }

    /// Map a signed integer kind to its unsigned partner.
    ///
    /// Total and involutive with [`to_signed`](Self::to_signed) over the
    /// four width pairs; the identity on every other tag.
    #[inline]
    pub const fn to_unsigned(self) -> Self {
        match self {
            Self::BYTE => Self::UBYTE,
            Self::SHORT => Self::USHORT,
            Self::INT => Self::UINT,
            Self::INT64 => Self::UINT64,
            other => other,
        }
    }

    /// Fixed byte width of a primitive-band tag; 0 elsewhere.
    ///
    /// `OPAQUE`/`ENUM`/`COMPOUND` report 0 here: their actual size lives on
    /// the declaring type symbol.
    #[inline]
    pub const fn size(self) -> usize {
        if self.0 >= Self::NAT.0 && self.0 <= Self::COMPOUND.0 {
            SIZES[self.0 as usize]
        } else {
            0
        }
    }

    /// The storage-library name of this tag.
    ///
    /// Never fails: values outside every known band format a synthetic
    /// `NC_<n>` label.
    pub fn type_name(self) -> Cow<'static, str> {
        if self.0 >= Self::NAT.0 && self.0 <= Self::COMPOUND.0 {
            #[expect(clippy::cast_sign_loss, reason = "band check bounds the value")]
            return Cow::Borrowed(TYPE_NAMES[self.0 as usize]);
        }
        if self.is_object_class() {
            #[expect(clippy::cast_sign_loss, reason = "band check bounds the value")]
            return Cow::Borrowed(META_NAMES[(self.0 - Self::GRP.0) as usize]);
        }
        if self == Self::FILLVALUE {
            return Cow::Borrowed("NC_FILL");
        }
        if self == Self::NIL {
            return Cow::Borrowed("NC_NIL");
        }
        Cow::Owned(format!("NC_<{}>", self.0))
    }

    /// The object-class name of this tag.
    ///
    /// Primitive-band tags defer to [`type_name`](Self::type_name); the meta
    /// band uses the class spellings (note `NC_TYP`). `NIL` has no class
    /// spelling and falls through to the synthetic label, as the original
    /// table does.
    pub fn class_name(self) -> Cow<'static, str> {
        if self.0 >= Self::NAT.0 && self.0 <= Self::COMPOUND.0 {
            return self.type_name();
        }
        if self == Self::FILLVALUE {
            return Cow::Borrowed("NC_FILL");
        }
        if self.is_object_class() {
            #[expect(clippy::cast_sign_loss, reason = "band check bounds the value")]
            return Cow::Borrowed(CLASS_NAMES[(self.0 - Self::GRP.0) as usize]);
        }
        Cow::Owned(format!("NC_<{}>", self.0))
    }

    /// The CDL source spelling of a primitive-band tag.
    pub const fn cdl_name(self) -> Option<&'static str> {
        if self.0 >= Self::NAT.0 && self.0 <= Self::COMPOUND.0 {
            Some(CDL_NAMES[self.0 as usize])
        } else {
            None
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({})", self.type_name())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

// Compile-time size assertion: Tag must stay a bare i32
const _: () = assert!(std::mem::size_of::<Tag>() == 4);

#[cfg(test)]
mod tests;
