//! `tcp-client` entry point: parse the command line and run the command.

use std::io;

use clap::Parser;

use tcp_client::cli::CommandLine;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = CommandLine::parse();
    cli.run(io::stdout().lock())
        .map_err(color_eyre::eyre::Report::from)
}
