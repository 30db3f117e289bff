use std::{
    io::{self, IsTerminal, Read, Write},
    process,
};

use clap::CommandFactory;
use serde::Serialize;

use crate::cli::Cli;

/// Reads the full contents of stdin into memory.
///
/// This function will terminate the process and print the
/// command's help if stdin is connected to a terminal.
pub fn read_stdin() -> io::Result<Vec<u8>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        let _ = Cli::command().print_help();
        process::exit(2);
    }

    let mut data = Vec::new();
    stdin.lock().read_to_end(&mut data)?;

    Ok(data)
}

/// Serializes the given value as JSON to stdout.
///
/// Output to a terminal gets pretty-printed, otherwise a minified
/// representation will be emitted.
pub fn serialize_to_stdout<T: Serialize>(value: &T) -> eyre::Result<()> {
    let mut stdout = io::stdout().lock();

    if stdout.is_terminal() {
        serde_json::to_writer_pretty(&mut stdout, value)?;
    } else {
        serde_json::to_writer(&mut stdout, value)?;
    }
    writeln!(stdout)?;

    Ok(())
}
