use std::{collections::HashSet, fmt, str::FromStr};

use nybble_bit_buf::{BitReader, ExtractObserver};

use crate::{read_wide, LayoutError, Record};

/// The widest field a layout may describe.
pub const MAX_WIDE_BITS: u32 = u64::BITS;

/// A single named field of a [`Layout`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    name: String,
    nbits: u32,
}

impl FieldSpec {
    /// Gets the name of the field.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the width of the field in bits.
    #[inline]
    pub fn nbits(&self) -> u32 {
        self.nbits
    }
}

/// An ordered description of the fields making up a record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    fields: Vec<FieldSpec>,
    bit_len: usize,
}

impl Layout {
    /// Parses a layout from its `name:width,...` representation.
    ///
    /// Whitespace around names and widths is ignored.
    pub fn parse(s: &str) -> Result<Self, LayoutError> {
        let mut fields = Vec::new();
        let mut seen = HashSet::new();

        for (idx, part) in s.split(',').map(str::trim).enumerate() {
            if part.is_empty() && s.trim().is_empty() {
                return Err(LayoutError::Empty);
            }

            let (name, width) = match part.split_once(':') {
                Some((name, width)) => (name.trim(), width.trim()),
                None if part.is_empty() => return Err(LayoutError::EmptyName(idx)),
                None => return Err(LayoutError::MissingWidth(part.to_owned())),
            };

            if name.is_empty() {
                return Err(LayoutError::EmptyName(idx));
            }

            // Widths are plain decimal digits; no signs.
            let nbits = match width.parse::<u32>() {
                Ok(nbits) if width.bytes().all(|b| b.is_ascii_digit()) => nbits,
                _ => {
                    return Err(LayoutError::MalformedWidth {
                        name: name.to_owned(),
                        width: width.to_owned(),
                    })
                }
            };
            if !(1..=MAX_WIDE_BITS).contains(&nbits) {
                return Err(LayoutError::WidthOutOfRange {
                    name: name.to_owned(),
                    nbits,
                });
            }

            if !seen.insert(name) {
                return Err(LayoutError::DuplicateName(name.to_owned()));
            }

            fields.push(FieldSpec {
                name: name.to_owned(),
                nbits,
            });
        }

        let bit_len = fields.iter().map(|f| f.nbits as usize).sum();
        Ok(Self { fields, bit_len })
    }

    /// Gets the fields of this layout in reading order.
    #[inline]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Gets the total number of bits in one record.
    #[inline]
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Decodes a single record at the current reader position.
    ///
    /// Either the whole record is read or, when not enough bits
    /// are left, the reader is not moved at all.
    pub fn decode<O: ExtractObserver>(
        &self,
        reader: &mut BitReader<'_, O>,
    ) -> Result<Record, LayoutError> {
        let remaining = reader.remaining_bits();
        if self.bit_len > remaining {
            return Err(LayoutError::OutOfBits {
                needed: self.bit_len,
                remaining,
            });
        }

        log::debug!("Decoding record at bit {}", reader.position());

        let mut record = Record::with_capacity(self.fields.len());
        for field in &self.fields {
            let value = read_wide(reader, field.nbits)?;
            log::trace!("Got {} = {value:#x}", field.name);

            record.insert(field.name.clone(), value);
        }

        Ok(record)
    }

    /// Decodes consecutive records until fewer bits than one record
    /// remain, or `limit` records were read.
    pub fn decode_all<O: ExtractObserver>(
        &self,
        reader: &mut BitReader<'_, O>,
        limit: Option<usize>,
    ) -> Result<Vec<Record>, LayoutError> {
        let limit = limit.unwrap_or(usize::MAX);
        let mut records = Vec::new();

        while records.len() < limit && reader.remaining_bits() >= self.bit_len {
            records.push(self.decode(reader)?);
        }

        if reader.remaining_bits() != 0 {
            log::debug!(
                "Stopped with {} trailing bits after {} records",
                reader.remaining_bits(),
                records.len()
            );
        }

        Ok(records)
    }
}

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, field) in self.fields.iter().enumerate() {
            if idx != 0 {
                f.write_str(",")?;
            }
            write!(f, "{}:{}", field.name, field.nbits)?;
        }

        Ok(())
    }
}
