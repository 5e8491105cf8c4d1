use std::fmt;

/// Error codes for all compiler diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E2xxx: Semantic errors (symbol table, dimensions, naming)
/// - E9xxx: Storage / internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Semantic Errors (E2xxx)
    /// Name already declared in the enclosing group
    E2001,
    /// Unlimited dimension in a position the format dialect forbids
    E2002,
    /// Unknown output format code
    E2003,
    /// Malformed opaque constant
    E2004,
    /// Declaration references an entity of the wrong class
    E2005,

    // Storage / Internal Errors (E9xxx)
    /// Storage library reported a non-success status
    E9001,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
