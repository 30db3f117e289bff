use std::io::{self, Write};

use clap::Args;
use nybble_bit_buf::{BitBuffer, BitReader, LogObserver};
use nybble_layout::read_wide;

use super::Command;
use crate::{cli::Input, utils};

/// Subcommand for reading a sequence of unnamed fields.
#[derive(Debug, Args)]
pub struct Read {
    #[clap(flatten)]
    input: Input,

    /// Comma-separated widths of the fields to read, in bits.
    ///
    /// Widths above 8 bits are composed from several reads, up
    /// to a maximum of 64 bits per field.
    #[clap(short, long, value_delimiter = ',', required = true)]
    widths: Vec<u32>,

    /// Prints the values as a JSON array instead of one per line.
    #[clap(long)]
    json: bool,
}

impl Command for Read {
    fn handle(self) -> eyre::Result<()> {
        let data = self.input.load()?;

        let mut reader = BitReader::with_observer(BitBuffer::new(&data), LogObserver);
        reader.try_reset_read(self.input.offset)?;

        let values = self
            .widths
            .iter()
            .map(|&nbits| read_wide(&mut reader, nbits))
            .collect::<Result<Vec<_>, _>>()?;

        if self.json {
            utils::serialize_to_stdout(&values)
        } else {
            let mut stdout = io::stdout().lock();
            for value in values {
                writeln!(stdout, "{value}")?;
            }

            Ok(())
        }
    }
}
