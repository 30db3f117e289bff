//! Decoding of records described by named bit field layouts.
//!
//! A layout is written as a comma-separated list of `name:width`
//! pairs, for example `flag:1,count:4,kind:7`. Widths may be up
//! to 64 bits; fields wider than a byte are composed from several
//! reads with the earliest bits being the least significant.
//!
//! Unlike [`BitReader`], which treats running out of bits as a
//! contract violation, the functions here check the remaining
//! bits up front and report shortage as [`LayoutError::OutOfBits`].

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use nybble_bit_buf::{BitError, BitReader, ExtractObserver, MAX_FIELD_BITS};
use thiserror::Error;

mod layout;
pub use layout::{FieldSpec, Layout, MAX_WIDE_BITS};

mod record;
pub use record::Record;

/// Errors that may occur when parsing or decoding layouts.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The layout string did not describe any field.
    #[error("layout contains no fields")]
    Empty,

    /// A field was given without a name.
    #[error("field {0} has an empty name")]
    EmptyName(usize),

    /// A field was given without a `:width` suffix.
    #[error("field '{0}' is missing a width")]
    MissingWidth(String),

    /// The width of a field is not a plain decimal number.
    #[error("field '{name}' has a malformed width '{width}'")]
    MalformedWidth { name: String, width: String },

    /// The width of a field is zero or exceeds [`MAX_WIDE_BITS`].
    #[error("field '{name}' must be between 1 and 64 bits, got {nbits}")]
    WidthOutOfRange { name: String, nbits: u32 },

    /// A wide read was requested with a width outside `1..=64`.
    #[error("wide reads must be between 1 and 64 bits, got {0}")]
    InvalidWidth(u32),

    /// Two fields share the same name.
    #[error("field '{0}' is defined more than once")]
    DuplicateName(String),

    /// Fewer bits are left in the buffer than a read requires.
    #[error("need {needed} bits but only {remaining} are left")]
    OutOfBits { needed: usize, remaining: usize },

    /// The underlying reader rejected a read.
    #[error(transparent)]
    Bit(#[from] BitError),
}

/// Reads a field of up to 64 bits by composing byte-sized reads.
///
/// The first chunk read ends up in the least significant bits of
/// the result. The cursor is not moved when fewer than `nbits`
/// bits remain.
pub fn read_wide<O: ExtractObserver>(
    reader: &mut BitReader<'_, O>,
    nbits: u32,
) -> Result<u64, LayoutError> {
    if !(1..=MAX_WIDE_BITS).contains(&nbits) {
        return Err(LayoutError::InvalidWidth(nbits));
    }

    let remaining = reader.remaining_bits();
    if (nbits as usize) > remaining {
        return Err(LayoutError::OutOfBits {
            needed: nbits as usize,
            remaining,
        });
    }

    let mut value = 0;
    let mut done = 0;
    while done < nbits {
        let chunk = (nbits - done).min(MAX_FIELD_BITS);
        value |= u64::from(reader.try_read_bits(chunk)?) << done;
        done += chunk;
    }

    Ok(value)
}
