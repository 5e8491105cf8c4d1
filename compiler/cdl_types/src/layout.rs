//! Byte-layout arithmetic for compound types.

/// Padding needed to advance `offset` to the next multiple of `alignment`.
///
/// An alignment of 0 needs no padding.
#[inline]
pub const fn padding(offset: usize, alignment: usize) -> usize {
    let rem = if alignment == 0 { 0 } else { offset % alignment };
    if rem == 0 {
        0
    } else {
        alignment - rem
    }
}
