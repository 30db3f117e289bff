//! Provides bit-level extraction of small fields from byte buffers.
//!
//! Binary protocols frequently pack flags, short counters and
//! enumerations into fewer than 8 bits. This crate reads such
//! fields one at a time from a borrowed buffer, tracking the
//! position with a bit cursor.
//!
//! # Bit ordering
//!
//! Bits are numbered from the LSB of the first byte towards its
//! MSB, then continue into the next byte. The first bit of a
//! field ends up as the LSB of the returned value.
//!
//! ```
//! use nybble_bit_buf::{BitBuffer, BitReader};
//!
//! let data = [0xFD, 0x8A, 0xF7];
//! let mut reader = BitReader::new(BitBuffer::new(&data));
//!
//! assert_eq!(reader.read_bits(1), 0b1);
//! assert_eq!(reader.read_bits(4), 0b1110);
//! assert_eq!(reader.read_bits(7), 0b1010111);
//! ```

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bits;

mod buffer;
pub use buffer::BitBuffer;

mod error;
pub use error::BitError;

mod extract;
pub use extract::{extract, try_extract, Extraction, Field, MAX_FIELD_BITS};

mod observer;
pub use observer::{ExtractObserver, LogObserver, NoopObserver};

mod reader;
pub use reader::{BitReader, Cursor};
