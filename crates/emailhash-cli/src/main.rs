use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Exit status for a missing or surplus email argument.
const USAGE_EXIT_CODE: i32 = 1;

/// Hash an email address with SHA-256, print the hex digest and save it to a file.
#[derive(Parser, Debug)]
#[command(name = "email-hasher", version, about)]
struct Cli {
    /// Email address to hash, taken verbatim
    email: String,

    /// File the digest is written to
    #[arg(short, long, default_value = emailhash_core::DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Log filter used when `RUST_LOG` is unset.
    fn default_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse_from(normalize_args(std::env::args_os().collect())) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => {
            // Usage is printed on stdout, not stderr.
            print_usage();
            std::process::exit(USAGE_EXIT_CODE);
        }
    };

    init_tracing(&cli)?;
    run(&cli)
}

/// A lone argument is always the email, even when it starts with `-`.
///
/// Only `-h`, `--help`, `-V` and `--version` keep their meaning on their own.
fn normalize_args(args: Vec<OsString>) -> Vec<OsString> {
    if let [bin, only] = args.as_slice() {
        if !is_info_flag(only) {
            return vec![bin.clone(), OsString::from("--"), only.clone()];
        }
    }
    args
}

fn is_info_flag(arg: &OsStr) -> bool {
    matches!(arg.to_str(), Some("-h" | "--help" | "-V" | "--version"))
}

fn print_usage() {
    println!("Error: must provide valid email address as a command line argument.");
    println!("Usage: email-hasher \"<email_address>\"");
}

fn init_tracing(cli: &Cli) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.default_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))
}

fn run(cli: &Cli) -> Result<()> {
    let digest = emailhash_core::hash(&cli.email);
    println!("{digest}");
    emailhash_core::write(&digest, &cli.output)?;
    Ok(())
}
