use std::fmt;

use crate::{
    extract::contract_violation, BitBuffer, BitError, ExtractObserver, Extraction, NoopObserver,
};

/// The bit positions of a [`BitReader`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    read: usize,

    // Reserved for a symmetric writer; never advanced.
    write: usize,
}

impl Cursor {
    /// Gets the bit position of the next read.
    #[inline]
    pub const fn read_pos(&self) -> usize {
        self.read
    }

    /// Gets the bit position of the next write.
    ///
    /// Writing is not supported, so this is always `0`.
    #[inline]
    pub const fn write_pos(&self) -> usize {
        self.write
    }
}

/// A reader which extracts consecutive fields of 1 to 8 bits
/// from a [`BitBuffer`].
///
/// Individual bit reading starts at the LSB of the byte, working
/// towards the MSB. Fields may straddle two adjacent bytes.
///
/// The reader borrows the buffer and owns its own [`Cursor`], so
/// several readers can walk the same data independently.
pub struct BitReader<'a, O = NoopObserver> {
    buffer: BitBuffer<'a>,
    cursor: Cursor,
    observer: O,
}

impl<'a> BitReader<'a> {
    /// Creates a new [`BitReader`] positioned at the start of `buffer`.
    #[inline]
    pub fn new(buffer: BitBuffer<'a>) -> Self {
        Self::with_observer(buffer, NoopObserver)
    }
}

impl<'a, O: ExtractObserver> BitReader<'a, O> {
    /// Creates a new [`BitReader`] which notifies `observer` about
    /// every successful read.
    #[inline]
    pub fn with_observer(buffer: BitBuffer<'a>, observer: O) -> Self {
        Self {
            buffer,
            cursor: Cursor::default(),
            observer,
        }
    }

    /// Gets the buffer this reader operates on.
    #[inline]
    pub fn buffer(&self) -> BitBuffer<'a> {
        self.buffer
    }

    /// Gets the current cursor state.
    #[inline]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Gets the bit position of the next read.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor.read
    }

    /// Gets the number of bits left to read.
    #[inline]
    pub fn remaining_bits(&self) -> usize {
        self.buffer.bit_len() - self.cursor.read
    }

    /// Gets a reference to the installed observer.
    #[inline]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Consumes the reader and returns its observer.
    #[inline]
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Attempts to read an `nbits` wide field and advance the cursor.
    ///
    /// On error, the cursor is left unchanged.
    pub fn try_read_bits(&mut self, nbits: u32) -> Result<u8, BitError> {
        let plan = Extraction::plan(self.buffer.bit_len(), self.cursor.read, nbits)?;
        let field = plan.apply(self.buffer);

        self.observer.on_extract(&plan, &field);
        self.cursor.read = field.new_pos;

        Ok(field.value)
    }

    /// Reads an `nbits` wide field and advances the cursor.
    ///
    /// # Panics
    ///
    /// Panics when `nbits` is not in `1..=8` or fewer than `nbits`
    /// bits remain. The cursor is not moved in that case.
    #[inline]
    #[track_caller]
    pub fn read_bits(&mut self, nbits: u32) -> u8 {
        match self.try_read_bits(nbits) {
            Ok(v) => v,
            Err(e) => contract_violation(e),
        }
    }

    /// Attempts to move the read cursor to bit `pos`.
    ///
    /// Any position up to and including the end of the buffer is
    /// valid, which allows rewinding to re-read data.
    pub fn try_reset_read(&mut self, pos: usize) -> Result<(), BitError> {
        let capacity = self.buffer.bit_len();
        if pos > capacity {
            return Err(BitError::InvalidPosition { pos, capacity });
        }

        self.cursor.read = pos;
        Ok(())
    }

    /// Moves the read cursor to bit `pos`.
    ///
    /// # Panics
    ///
    /// Panics when `pos` is past the end of the buffer.
    #[inline]
    #[track_caller]
    pub fn reset_read(&mut self, pos: usize) {
        if let Err(e) = self.try_reset_read(pos) {
            contract_violation(e);
        }
    }
}

impl<O> fmt::Debug for BitReader<'_, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitReader")
            .field("len", &self.buffer.len())
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}
