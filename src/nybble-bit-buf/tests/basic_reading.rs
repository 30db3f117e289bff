use nybble_bit_buf::{BitBuffer, BitError, BitReader, ExtractObserver, Extraction, Field};

const DATA: [u8; 3] = [0b1111_1101, 0b1000_1010, 0b1111_0111];

#[derive(Debug, Default)]
struct Counter {
    reads: usize,
    bits: u32,
}

impl ExtractObserver for Counter {
    fn on_extract(&mut self, plan: &Extraction, _field: &Field) {
        self.reads += 1;
        self.bits += plan.nbits;
    }
}

#[test]
fn read_fields_and_rewind() {
    let mut reader = BitReader::new(BitBuffer::new(&DATA));

    assert_eq!(reader.read_bits(1), 1);
    assert_eq!(reader.position(), 1);
    assert_eq!(reader.read_bits(4), 0b1110);
    assert_eq!(reader.position(), 5);
    assert_eq!(reader.read_bits(7), 0b101_0111);
    assert_eq!(reader.position(), 12);

    reader.reset_read(0);
    assert_eq!(reader.read_bits(8), 0xFD);
    assert_eq!(reader.read_bits(8), 0x8A);
    assert_eq!(reader.read_bits(8), 0xF7);
    assert_eq!(reader.remaining_bits(), 0);
}

#[test]
fn read_within_bytes() {
    let mut reader = BitReader::new(BitBuffer::new(&DATA));

    assert_eq!(reader.read_bits(1), 1);
    assert_eq!(reader.read_bits(7), 0b111_1110);
    assert_eq!(reader.read_bits(1), 0);
    assert_eq!(reader.read_bits(6), 0b00_0101);
    assert_eq!(reader.read_bits(1), 1);
    assert_eq!(reader.position(), 16);
}

#[test]
fn failed_read_keeps_cursor() {
    let mut reader = BitReader::new(BitBuffer::new(&DATA));
    reader.reset_read(20);

    assert_eq!(
        reader.try_read_bits(5),
        Err(BitError::Overrun {
            pos: 20,
            nbits: 5,
            capacity: 24
        })
    );
    assert_eq!(reader.position(), 20);

    assert_eq!(reader.try_read_bits(0), Err(BitError::InvalidWidth(0)));
    assert_eq!(reader.try_read_bits(9), Err(BitError::InvalidWidth(9)));
    assert_eq!(reader.position(), 20);

    assert_eq!(reader.try_read_bits(4), Ok(0b1111));
    assert_eq!(reader.remaining_bits(), 0);
}

#[test]
fn reset_bounds() {
    let mut reader = BitReader::new(BitBuffer::new(&DATA));

    assert_eq!(reader.try_reset_read(24), Ok(()));
    assert_eq!(reader.remaining_bits(), 0);
    assert_eq!(
        reader.try_reset_read(25),
        Err(BitError::InvalidPosition {
            pos: 25,
            capacity: 24
        })
    );
    assert_eq!(reader.position(), 24);
}

#[test]
fn write_cursor_is_untouched() {
    let mut reader = BitReader::new(BitBuffer::new(&DATA));
    reader.read_bits(7);
    reader.read_bits(3);

    let cursor = reader.cursor();
    assert_eq!(cursor.read_pos(), 10);
    assert_eq!(cursor.write_pos(), 0);
}

#[test]
fn readers_share_a_buffer() {
    let buffer = BitBuffer::new(&DATA);
    let mut a = BitReader::new(buffer);
    let mut b = BitReader::new(buffer);

    assert_eq!(a.read_bits(8), 0xFD);
    assert_eq!(b.read_bits(4), 0xD);
    assert_eq!(a.read_bits(8), 0x8A);
    assert_eq!(b.read_bits(8), 0xAF);
}

#[test]
fn observer_sees_successful_reads() {
    let mut seen = Vec::new();
    let mut reader = BitReader::with_observer(
        BitBuffer::new(&DATA),
        |plan: &Extraction, field: &Field| seen.push((plan.two_bytes, plan.count_second, *field)),
    );

    reader.read_bits(5);
    reader.read_bits(7);
    assert!(reader.try_read_bits(16).is_err());
    assert!(reader.try_read_bits(13).is_err());
    drop(reader);

    assert_eq!(
        seen,
        [
            (
                false,
                0,
                Field {
                    value: 0b1_1101,
                    new_pos: 5
                }
            ),
            (
                true,
                4,
                Field {
                    value: 0b101_0111,
                    new_pos: 12
                }
            ),
        ]
    );
}

#[test]
#[should_panic(expected = "overruns buffer")]
fn read_past_end_panics() {
    let mut reader = BitReader::new(BitBuffer::new(&DATA));
    reader.reset_read(17);
    reader.read_bits(8);
}

#[test]
#[should_panic(expected = "field width")]
fn read_zero_bits_panics() {
    let mut reader = BitReader::new(BitBuffer::new(&DATA));
    reader.read_bits(0);
}

#[test]
#[should_panic(expected = "past the buffer end")]
fn reset_past_end_panics() {
    let mut reader = BitReader::new(BitBuffer::new(&DATA));
    reader.reset_read(25);
}

#[test]
fn empty_buffer_is_exhausted() {
    let mut reader = BitReader::new(BitBuffer::empty());

    assert_eq!(reader.remaining_bits(), 0);
    assert!(matches!(
        reader.try_read_bits(1),
        Err(BitError::Overrun { capacity: 0, .. })
    ));
}

#[test]
fn observer_is_handed_back() {
    let buffer = BitBuffer::from(&DATA);
    let mut reader = BitReader::with_observer(buffer, Counter::default());

    reader.read_bits(3);
    reader.read_bits(8);
    assert!(reader.try_read_bits(0).is_err());
    assert_eq!(reader.observer().reads, 2);

    assert_eq!(reader.buffer(), buffer);
    assert_eq!(reader.buffer().as_bytes(), &DATA);

    let counter = reader.into_observer();
    assert_eq!((counter.reads, counter.bits), (2, 11));
}

#[test]
fn buffer_views() {
    let slice: &[u8] = &DATA[..2];
    let buffer = BitBuffer::from(slice);

    assert_eq!(buffer.len(), 2);
    assert_eq!(buffer.bit_len(), 16);
    assert!(!buffer.is_empty());
    assert_eq!(buffer.as_bytes(), &DATA[..2]);

    assert!(BitBuffer::empty().is_empty());
    assert_eq!(BitBuffer::from(&DATA), BitBuffer::new(&DATA));
}
