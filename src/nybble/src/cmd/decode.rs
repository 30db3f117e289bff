use clap::Args;
use nybble_bit_buf::{BitBuffer, BitReader, LogObserver};
use nybble_layout::Layout;

use super::Command;
use crate::{cli::Input, utils};

/// Subcommand for decoding records of named fields into JSON.
#[derive(Debug, Args)]
pub struct Decode {
    #[clap(flatten)]
    input: Input,

    /// The record layout as comma-separated `name:width` pairs.
    ///
    /// Example: `flag:1,count:4,kind:7`. Widths may be 1 to 64 bits.
    #[clap(short, long)]
    layout: Layout,

    /// The maximum number of records to decode.
    ///
    /// By default, records are decoded until fewer bits than one
    /// full record remain.
    #[clap(short, long)]
    records: Option<usize>,
}

impl Command for Decode {
    fn handle(self) -> eyre::Result<()> {
        let data = self.input.load()?;

        let mut reader = BitReader::with_observer(BitBuffer::new(&data), LogObserver);
        reader.try_reset_read(self.input.offset)?;

        log::debug!(
            "Decoding records of {} bits with layout '{}'",
            self.layout.bit_len(),
            self.layout
        );

        let records = self.layout.decode_all(&mut reader, self.records)?;
        utils::serialize_to_stdout(&records)
    }
}
