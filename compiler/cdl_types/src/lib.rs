//! Type classification for the CDL compiler.
//!
//! The storage format's type enumeration is an irregular integer space:
//! a primitive band, a meta band of symbol-kind tags, and two sentinels.
//! [`Tag`] wraps the raw value and provides total classification — sizes,
//! signed/unsigned pairing, band predicates, and name lookup that never
//! fails. [`Kind`] selects the output dialect and its unlimited-dimension
//! placement policy.

mod kind;
mod layout;
mod literal;
mod tag;

pub use kind::Kind;
pub use layout::padding;
pub use literal::{exponent_to_fortran, trim_trailing_zeros};
pub use tag::{Tag, VlenDescriptor};
