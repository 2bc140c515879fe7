use clap::Parser;
use exact_json_parser::{parse_document, read_json_value};
use std::{fs, path::PathBuf, process::ExitCode};
use tracing_subscriber::EnvFilter;

/// Parse a json file, keeping numbers exact, and print it back in canonical form.
#[derive(Parser)]
#[command(name = "exact-json", version)]
struct Cli {
    /// File to parse
    path: PathBuf,

    /// Reject anything but whitespace after the value
    #[arg(long)]
    strict: bool,

    /// Only report success or failure through the exit code
    #[arg(short, long)]
    quiet: bool,

    /// Log debug information to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let parsed = if cli.strict {
        fs::read_to_string(&cli.path).map(|json| parse_document(&json))
    } else {
        read_json_value(&cli.path).map(|result| result.map(|(_, value)| value))
    };

    match parsed {
        Ok(Ok(value)) => {
            if !cli.quiet {
                println!("{}", value);
            }
            ExitCode::SUCCESS
        }
        Ok(Err(e)) => {
            if !cli.quiet {
                eprintln!("{}: {}", cli.path.display(), e);
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{}: {}", cli.path.display(), e);
            ExitCode::FAILURE
        }
    }
}
