use crate::{
    bits::{select, shift},
    BitBuffer, BitError,
};

/// The widest field that can be extracted in one operation.
pub const MAX_FIELD_BITS: u32 = u8::BITS;

/// The result of extracting a single field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    /// The field bits, packed into the low bits with the rest zeroed.
    pub value: u8,
    /// The bit position right after the field.
    pub new_pos: usize,
}

/// The byte and bit coordinates of one extraction.
///
/// Since a field has at most 8 bits, it covers either a single
/// byte or the tail of one byte and the head of the next.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Extraction {
    /// The global bit position of the first field bit.
    pub pos: usize,
    /// The width of the field in bits.
    pub nbits: u32,
    /// Bit index of the first field bit inside its byte.
    pub local_start: u32,
    /// Bit index of the last field bit inside its byte.
    pub local_end: u32,
    /// Index of the byte holding the first field bit.
    pub byte_first: usize,
    /// Index of the byte holding the last field bit.
    pub byte_last: usize,
    /// Whether the field straddles two bytes.
    pub two_bytes: bool,
    /// Number of bits taken from the first byte.
    pub count_first: u32,
    /// Number of bits taken from the second byte.
    pub count_second: u32,
}

impl Extraction {
    /// Computes the coordinates of an `nbits` wide field at `pos`
    /// in a buffer of `capacity` bits.
    pub fn plan(capacity: usize, pos: usize, nbits: u32) -> Result<Self, BitError> {
        if !(1..=MAX_FIELD_BITS).contains(&nbits) {
            return Err(BitError::InvalidWidth(nbits));
        }

        let last = match pos.checked_add(nbits as usize - 1) {
            Some(last) if last < capacity => last,
            _ => {
                return Err(BitError::Overrun {
                    pos,
                    nbits,
                    capacity,
                })
            }
        };

        let local_start = (pos & 7) as u32;
        let local_end = (last & 7) as u32;
        let two_bytes = local_end < local_start;

        let count_first = (u8::BITS - local_start).min(nbits);
        let count_second = nbits - count_first;

        let plan = Self {
            pos,
            nbits,
            local_start,
            local_end,
            byte_first: pos >> 3,
            byte_last: last >> 3,
            two_bytes,
            count_first,
            count_second,
        };

        debug_assert_eq!(plan.count_first + plan.count_second, nbits);
        debug_assert_eq!(plan.two_bytes, plan.byte_first != plan.byte_last);
        debug_assert!(plan.byte_last < capacity.div_ceil(8));

        Ok(plan)
    }

    /// Extracts the planned field from `buffer`.
    ///
    /// # Panics
    ///
    /// Panics if `buffer` is smaller than the capacity the plan
    /// was computed for.
    #[inline]
    pub fn apply(&self, buffer: BitBuffer<'_>) -> Field {
        // With a single byte, the selection ends at the field's last bit.
        // Otherwise it runs to the MSB and the rest comes from the next byte.
        let first_stop = if self.two_bytes { 7 } else { self.local_end };
        let first = shift(
            select(buffer.byte(self.byte_first), self.local_start, first_stop),
            self.local_start,
            0,
        );

        let second = if self.two_bytes {
            shift(
                select(buffer.byte(self.byte_last), 0, self.local_end),
                0,
                self.count_first,
            )
        } else {
            0
        };

        Field {
            value: first | second,
            new_pos: self.pos + self.nbits as usize,
        }
    }
}

/// Attempts to extract an `nbits` wide field starting at bit `pos`.
///
/// This is a pure function of its inputs. Contract violations are
/// reported as [`BitError`]s.
#[inline]
pub fn try_extract(buffer: BitBuffer<'_>, pos: usize, nbits: u32) -> Result<Field, BitError> {
    Extraction::plan(buffer.bit_len(), pos, nbits).map(|plan| plan.apply(buffer))
}

/// Extracts an `nbits` wide field starting at bit `pos`.
///
/// # Panics
///
/// Panics when `nbits` is not in `1..=8` or the field would run
/// past the end of `buffer`.
#[inline]
#[track_caller]
pub fn extract(buffer: BitBuffer<'_>, pos: usize, nbits: u32) -> Field {
    match try_extract(buffer, pos, nbits) {
        Ok(field) => field,
        Err(e) => contract_violation(e),
    }
}

#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn contract_violation(e: BitError) -> ! {
    panic!("{e}")
}
