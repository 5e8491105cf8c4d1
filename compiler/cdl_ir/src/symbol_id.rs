//! Stable symbol handle.
//!
//! Symbols live in one arena owned by the [`SymbolTable`](crate::SymbolTable)
//! and are referenced everywhere else by this 32-bit index. All graph
//! relations (containment, prefixes, subnodes, attribute lists) are handle
//! lookups, never ownership.

use std::fmt;

/// A 32-bit index into the symbol arena.
///
/// Symbols are compared by index equality; two ids are the same entity.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct SymbolId(u32);

impl SymbolId {
    /// Create an id from a raw arena index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw arena index.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Get the arena index as a usize.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolId({})", self.0)
    }
}

// Compile-time size assertion: SymbolId must stay a bare u32
const _: () = assert!(std::mem::size_of::<SymbolId>() == 4);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_copy_and_comparable() {
        let a = SymbolId::from_raw(3);
        let b = a;
        assert_eq!(a, b);
        assert_ne!(a, SymbolId::from_raw(4));
        assert_eq!(a.index(), 3);
        assert_eq!(a.raw(), 3);
    }
}
