//! Command line arguments.

use clap::Parser;
use std::error::Error;
use std::ffi::OsString;
use std::fmt;

#[derive(Parser, Debug)]
#[command(name = "ipv4-cidr-info")]
#[command(about = "Show mask, network prefix and host prefix of an IPv4 CIDR", long_about = None)]
struct Args {
    /// IPv4 address with prefix length, e.g. 192.168.1.0/24
    #[arg(allow_hyphen_values = true)]
    cidr: Option<String>,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
    #[arg(hide = true)]
    extra: Vec<String>,
}

/// Options for a single report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub cidr: String,
    pub json: bool,
    pub verbose: bool,
    /// Positional arguments after the CIDR, ignored.
    pub extra: Vec<String>,
}

#[derive(Debug)]
pub enum CliError {
    MissingCidr,
    Clap(clap::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CliError::MissingCidr => write!(f, "missing <CIDR> argument"),
            CliError::Clap(e) => write!(f, "{e}"),
        }
    }
}

impl Error for CliError {}

impl From<clap::Error> for CliError {
    fn from(e: clap::Error) -> Self {
        CliError::Clap(e)
    }
}

pub fn usage(program: &str) -> String {
    format!("Usage {program} [--json] [--verbose] <CIDR>")
}

/// Parse the process arguments, program name first.
///
/// A CIDR starting with `-` (e.g. `-1.0.0.1/24`) is taken as the CIDR so
/// it reaches validation. Positional arguments after it are kept in
/// [`Options::extra`].
pub fn parse_args<I, T>(args: I) -> Result<Options, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = Args::try_parse_from(args)?;
    let cidr = args.cidr.ok_or(CliError::MissingCidr)?;
    Ok(Options {
        cidr,
        json: args.json,
        verbose: args.verbose,
        extra: args.extra,
    })
}
