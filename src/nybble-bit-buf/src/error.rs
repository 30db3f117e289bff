use thiserror::Error;

/// Contract violations detected by the reading operations.
///
/// None of these are recoverable conditions of the data itself;
/// each one means the caller asked for something the buffer can
/// not provide. The panicking APIs report them as panics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BitError {
    /// The requested field width is not in `1..=8`.
    #[error("field width must be between 1 and 8 bits, got {0}")]
    InvalidWidth(u32),

    /// The field would extend past the end of the buffer.
    #[error("reading {nbits} bits at position {pos} overruns buffer of {capacity} bits")]
    Overrun {
        pos: usize,
        nbits: u32,
        capacity: usize,
    },

    /// A cursor position beyond the buffer was requested.
    #[error("position {pos} is past the buffer end at {capacity} bits")]
    InvalidPosition { pos: usize, capacity: usize },
}
