//! Command-line expander for file sequence patterns.
//!
//! Each pattern argument is expanded and printed one path per line; the
//! process fails as soon as a pattern does not describe a multi-path
//! sequence.

mod cli;
mod logging;

use eyre::Result;

fn main() -> Result<()> {
    logging::init_logging();
    cli::run()
}
