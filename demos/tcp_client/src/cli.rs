//! Command-line surface of the demo.

use std::io;

use clap::{Args, Parser, Subcommand, ValueEnum};
use coral_config::{PrintOptions, render_json, write_table};

use crate::error::{Result, TcpClientError};
use crate::resolve::{resolve, write_resolutions};
use crate::scopes;

/// Inspect and resolve the demo client's configuration parameters.
#[derive(Debug, Parser)]
#[command(name = "tcp-client", bin_name = "tcp-client", version)]
pub struct CommandLine {
    /// Selected command.
    #[command(subcommand)]
    pub command: Commands,
}

/// Commands offered by the demo.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the parameter table of the named scopes.
    Print(PrintArgs),
    /// Resolve parameters after seeding values and overwriting defaults.
    Resolve(ResolveArgs),
}

/// Output formats of `print`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Comma-separated table.
    #[default]
    Table,
    /// Pretty-printed JSON array.
    Json,
}

/// Arguments of `print`.
#[derive(Debug, Args)]
pub struct PrintArgs {
    /// Omit the header line.
    #[arg(long)]
    pub no_header: bool,
    /// Show the full type path of each declaring scope.
    #[arg(long)]
    pub full_holder_name: bool,
    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,
    /// Scopes to print; every scope when omitted.
    #[arg(value_name = "SCOPE")]
    pub scopes: Vec<String>,
}

/// Arguments of `resolve`.
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Explicit values as `name=value` pairs separated by spaces.
    #[arg(long, default_value = "")]
    pub params: String,
    /// Replacement defaults as `name=value` pairs separated by spaces.
    #[arg(long, default_value = "")]
    pub overwrite: String,
    /// Parameter names to resolve.
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,
}

impl CommandLine {
    /// Run the selected command, writing its output to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error when the command's arguments name unknown scopes or
    /// parameters, when resolution fails, or when writing fails.
    pub fn run<W: io::Write>(&self, out: W) -> Result<()> {
        match &self.command {
            Commands::Print(args) => print(args, out),
            Commands::Resolve(args) => {
                let resolutions = resolve(&args.params, &args.overwrite, &args.names)?;
                Ok(write_resolutions(&resolutions, out)?)
            }
        }
    }
}

fn print<W: io::Write>(args: &PrintArgs, mut out: W) -> Result<()> {
    let aggregate = scopes::aggregate(&args.scopes)?;
    let options = PrintOptions {
        with_header: !args.no_header,
        full_holder_name: args.full_holder_name,
    };
    match args.format {
        Format::Table => Ok(write_table(&aggregate, options, out)?),
        Format::Json => {
            let json = render_json(&aggregate, options)
                .map_err(|err| TcpClientError::Json(err.to_string()))?;
            writeln!(out, "{json}")?;
            Ok(out.flush()?)
        }
    }
}
