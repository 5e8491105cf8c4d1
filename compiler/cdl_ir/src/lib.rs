//! Symbol graph for the CDL compiler.
//!
//! The semantic core of the compiler: every entity the parser discovers
//! becomes a [`Symbol`] owned by the [`SymbolTable`] arena and referenced
//! everywhere else by [`SymbolId`]. On top of the graph sit the ordered
//! dimension sequences ([`DimSet`]), the constant/data model
//! ([`Constant`], [`DataList`]), variable storage metadata ([`Special`]),
//! and the hierarchical qualified-name resolver ([`path`]).
//!
//! Phases are strictly sequential: parse populates and registers symbols,
//! validation and generation read them, and dropping the table at the end
//! of the run releases everything exactly once.

mod data;
mod dimset;
pub mod path;
mod special;
mod symbol;
mod symbol_id;
mod table;

pub use data::{Constant, DataError, DataList};
pub use dimset::DimSet;
pub use special::{CodecSpec, Endianness, FilterSpec, Special, SpecialFlags, Storage};
pub use symbol::{
    ArrayDetail, AttrDetail, DimSize, FieldDetail, GroupDetail, ObjectClass, Symbol, SymbolDetail,
    TypeDetail, VarDetail,
};
pub use symbol_id::SymbolId;
pub use table::SymbolTable;
