use std::{fs, path::PathBuf};

use clap::{ArgAction, Args};

use super::HYPHEN;
use crate::utils;

/// Configures the verbosity of the builtin logger.
#[derive(Clone, Copy, Debug, Args)]
pub struct Verbosity {
    /// Configures the log verbosity of nybble.
    ///
    /// `-v` is Debug, `-vv` is Trace. Trace output includes the
    /// coordinates of every single bit field read.
    #[clap(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Verbosity {
    /// Configures the global logger based on the settings.
    pub fn setup(self) -> eyre::Result<()> {
        let level = self.log_level();
        simple_logger::init_with_level(level)?;

        Ok(())
    }

    fn log_level(self) -> log::Level {
        match self.verbose {
            0 => log::Level::Info,
            1 => log::Level::Debug,
            _ => log::Level::Trace,
        }
    }
}

/// Command options for selecting the data to read bits from.
#[derive(Debug, Args)]
pub struct Input {
    /// The file to read the data from.
    ///
    /// When the value is "-", the data will be read from stdin.
    pub input: PathBuf,

    /// The bit position to start reading at.
    #[clap(long, default_value_t = 0)]
    pub offset: usize,
}

impl Input {
    /// Loads the full input data into memory.
    pub fn load(&self) -> eyre::Result<Vec<u8>> {
        let data = if self.input.as_os_str() == HYPHEN {
            utils::read_stdin()?
        } else {
            fs::read(&self.input)?
        };

        log::debug!("Loaded {} bytes from '{}'", data.len(), self.input.display());
        Ok(data)
    }
}
