//! Hierarchical qualified-name resolution.
//!
//! Prefixes stored on symbols are root-first; walking `container`
//! back-references naturally yields child-to-root order, so traversal
//! output must be reversed before it is used as, or compared against, a
//! stored prefix. [`render_prefix`] follows the canonical policy: the root
//! group renders as the empty string, so a top-level entity's fully
//! qualified name is simply `separator + local name`.

use crate::{SymbolId, SymbolTable};

/// Separator used in fully qualified names.
pub const PATH_SEPARATOR: &str = "/";

/// Walk `container` back-references from `from` to the root, producing a
/// child-to-root ordered sequence that includes `from` itself.
pub fn collect_path(table: &SymbolTable, from: SymbolId) -> Vec<SymbolId> {
    let mut path = Vec::new();
    let mut next = Some(from);
    while let Some(id) = next {
        path.push(id);
        next = table.symbol(id).container;
    }
    path
}

/// Reverse a child-to-root traversal into the canonical root-first order.
pub fn root_first(mut path: Vec<SymbolId>) -> Vec<SymbolId> {
    path.reverse();
    path
}

/// Concatenate `separator + name` for every entry of a root-first prefix.
///
/// The root group's prefix is empty and renders as the empty string.
pub fn render_prefix(table: &SymbolTable, prefix: &[SymbolId], separator: &str) -> String {
    let mut out = String::new();
    for &id in prefix {
        out.push_str(separator);
        out.push_str(&table.symbol(id).name);
    }
    out
}

/// Structural path equality: equal length and pairwise-equal ancestor
/// *names*. Two distinct traversals that reach same-named ancestors compare
/// equal; this is the redeclaration test.
pub fn path_eq(table: &SymbolTable, a: &[SymbolId], b: &[SymbolId]) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b)
            .all(|(&x, &y)| table.symbol(x).name == table.symbol(y).name)
}

/// An independent prefix container referencing the same ancestor entities
/// (shallow copy) for callers that need to own a mutable path.
pub fn duplicate(prefix: &[SymbolId]) -> Vec<SymbolId> {
    prefix.to_vec()
}
