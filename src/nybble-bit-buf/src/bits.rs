//! Branch-free masking and shifting of single bytes.
//!
//! These two functions are the entire vocabulary of field
//! extraction. Bit positions are in `0..=7`, counted from the
//! LSB.

/// Clears every bit of `value` outside the inclusive range
/// `start..=stop`.
///
/// # Panics
///
/// Panics when `start > stop` or `stop > 7`.
#[inline]
pub const fn select(value: u8, start: u32, stop: u32) -> u8 {
    assert!(stop < u8::BITS, "bit position out of range");
    assert!(start <= stop, "bit range is inverted");

    value & (0xFF >> (7 - stop)) & (0xFF << start)
}

/// Shifts `value` right by `start` bits and then left by `offset`
/// bits, discarding everything that moves past bit 7.
///
/// # Panics
///
/// Panics when `start > 7` or `offset > 8`.
#[inline]
pub const fn shift(value: u8, start: u32, offset: u32) -> u8 {
    assert!(start < u8::BITS, "bit position out of range");
    assert!(offset <= u8::BITS, "shift offset out of range");

    // Widen first so an offset of 8 yields zero instead of overflowing.
    (((value >> start) as u16) << offset) as u8
}
