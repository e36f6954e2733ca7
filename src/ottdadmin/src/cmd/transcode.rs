use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
};

use clap::Args;
use ottdadmin_utils::text::{ensure_binary, ensure_text, Encoding, Errors};

use super::Command;
use crate::cli::HYPHEN;

/// Subcommand for converting text between character encodings.
#[derive(Debug, Args)]
pub struct Transcode {
    /// The input file to read.
    ///
    /// When the value is "-", input will be read from stdin.
    input: PathBuf,

    /// An optional output file for the converted text.
    ///
    /// Defaults to "-" for printing output to stdout.
    #[clap(short, default_value = HYPHEN)]
    output: PathBuf,

    /// The encoding of the input.
    #[clap(long, default_value = "utf-8", env = "OTTDADMIN_ENCODING")]
    from: Encoding,

    /// The encoding to produce.
    #[clap(long, default_value = "utf-8", env = "OTTDADMIN_TARGET_ENCODING")]
    to: Encoding,

    /// How to handle characters that cannot be converted.
    ///
    /// One of "strict", "ignore" or "replace".
    #[clap(long, default_value = "strict", env = "OTTDADMIN_ERRORS")]
    errors: Errors,
}

impl Transcode {
    fn read_input(&self) -> io::Result<Vec<u8>> {
        if self.input.as_os_str() == HYPHEN {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf)?;
            Ok(buf)
        } else {
            fs::read(&self.input)
        }
    }

    fn write_output(&self, data: &[u8]) -> io::Result<()> {
        if self.output.as_os_str() == HYPHEN {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()
        } else {
            fs::write(&self.output, data)
        }
    }
}

impl Command for Transcode {
    fn handle(self) -> eyre::Result<()> {
        let input = self.read_input()?;
        log::debug!(
            "Transcoding {} bytes from '{}' to '{}' ({} errors)",
            input.len(),
            self.from,
            self.to,
            self.errors
        );

        let text = ensure_text(input, self.from, self.errors)?;
        let output = ensure_binary(text, self.to, self.errors)?;

        self.write_output(&output)?;
        Ok(())
    }
}
