use colored::Colorize;
use ipv4_cidr_info::cli::{self, CliError};
use std::io::IsTerminal;
use std::process;

const DEFAULT_PROGRAM: &str = "ipv4-cidr-info";

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    // Colored text only ever goes to stderr
    colored::control::set_override(std::io::stderr().is_terminal());
    let args: Vec<String> = std::env::args().collect();
    let program = args
        .first()
        .cloned()
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());

    let opts = match cli::parse_args(&args) {
        Ok(opts) => opts,
        // --help and --version go to stdout with exit code 0
        Err(CliError::Clap(e)) if !e.use_stderr() => e.exit(),
        Err(CliError::Clap(e)) => {
            eprint!("{e}");
            process::exit(1);
        }
        Err(CliError::MissingCidr) => {
            eprintln!("{}", cli::usage(&program));
            process::exit(1);
        }
    };

    if let Err(e) = ipv4_cidr_info::logging::init(opts.verbose) {
        eprintln!("{failed} to initialize logging: {e}", failed = "failed".red());
    }
    log::info!("#Start main()");

    match ipv4_cidr_info::run(&opts) {
        Ok(out) => print!("{out}"),
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            process::exit(1);
        }
    }
}
