//! Argument parsing and expansion dispatch for the `fileseq` binary.

use std::io::{self, BufWriter, Write};

use clap::Parser;
use eyre::{Result, WrapErr, bail};
use fileseq::{EagerSequence, LazySequence, PathSequence, SequenceOptions};

/// Expand file sequence patterns into concrete path lists.
#[derive(Parser)]
#[command(author, version, about)]
pub(crate) struct Cli {
    /// Patterns to expand, e.g. `render/beauty.1-100#.exr`.
    #[arg(required = true)]
    patterns: Vec<String>,
    /// Tokenize on these characters instead of `\`, `/` and `.`.
    #[arg(long, default_value = "")]
    delimiters: String,
    /// Fill character for padded frame numbers.
    #[arg(long, default_value_t = '0')]
    pad_char: char,
    /// Synthesize each path on demand instead of materializing the list.
    #[arg(long)]
    lazy: bool,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    let options = SequenceOptions::default()
        .with_delimiters(cli.delimiters.as_str())
        .with_pad_char(cli.pad_char);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for pattern in &cli.patterns {
        if cli.lazy {
            write_expansion(&LazySequence::with_options(pattern, &options), &mut out)?;
        } else {
            write_expansion(&EagerSequence::with_options(pattern, &options), &mut out)?;
        }
    }
    out.flush().wrap_err("failed to flush path listing to stdout")
}

/// Print every path of `sequence` on its own line, failing when the pattern
/// did not expand to a genuine multi-path sequence.
fn write_expansion(sequence: &dyn PathSequence, out: &mut impl Write) -> Result<()> {
    if !sequence.is_ok() {
        // Paths of earlier arguments stay visible, as with eager printing.
        out.flush()
            .wrap_err("failed to flush path listing to stdout")?;
        bail!("cannot parse {}", sequence.pattern());
    }

    for index in 0..sequence.len() {
        if let Some(path) = sequence.path(index) {
            writeln!(out, "{path}").wrap_err("failed to write expanded path")?;
        }
    }
    Ok(())
}
