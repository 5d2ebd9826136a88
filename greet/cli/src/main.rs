//! CLI for printing a greeting.
//!
//! ## Usage
//!
//! ```bash
//! # Informal greeting
//! greet Alice
//!
//! # Formal greeting
//! greet --formal Bob
//!
//! # Greeting for a given hour, or for the current local hour
//! greet --hour 20 Eve
//! greet --now Frank
//!
//! # Name from stdin
//! echo "Grace" | greet -
//!
//! # Generate shell completions
//! source <(COMPLETE=bash greet)
//! ```

mod error;

use std::ffi::OsString;
use std::io::{self, BufRead, IsTerminal};

use clap::error::ErrorKind;
use clap::parser::ValueSource;
use clap::{CommandFactory, FromArgMatches, Parser};
use clap_complete::Shell;
use greet_lib::Greeting;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::GreetError;

/// Print a greeting for a name, formally or by time of day
#[derive(Debug, Parser)]
#[command(name = "greet", version, about, long_about = None)]
#[command(after_help = AFTER_HELP)]
struct Cli {
    /// Name to greet (use "-" to read it from stdin)
    #[arg(value_name = "NAME")]
    name: Option<String>,

    /// Use the formal greeting ("Good day, NAME.")
    ///
    /// Ignored for --hour and --now when it only comes from GREET_FORMAL.
    #[arg(short, long, env = "GREET_FORMAL")]
    formal: bool,

    /// Greet according to an hour of day (values outside 0-23 greet as night)
    #[arg(short = 'H', long, value_name = "HOUR", allow_negative_numbers = true, conflicts_with = "now")]
    hour: Option<i64>,

    /// Greet according to the current local hour
    #[arg(short, long)]
    now: bool,

    /// Output as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

const AFTER_HELP: &str = "\
SHELL COMPLETIONS:
  Enable tab completions by adding one line to your shell config:

  Bash (~/.bashrc):
    source <(COMPLETE=bash greet)

  Zsh (~/.zshrc):
    source <(COMPLETE=zsh greet)

  Fish (~/.config/fish/config.fish):
    COMPLETE=fish greet | source

EXAMPLES:
  greet Alice                # Hello, Alice!
  greet --formal Bob         # Good day, Bob.
  greet --hour 9 Carol       # Good morning, Carol
  greet --now Dan            # Greeting for the current hour
  echo Eve | greet -         # Name from stdin
  greet --json --hour 20 Eve # Greeting as JSON
";

fn main() {
    // Check for shell completion generation before parsing args
    if let Ok(shell_name) = std::env::var("COMPLETE") {
        generate_completions(&shell_name);
        return;
    }

    let cli = parse_args(std::env::args_os()).unwrap_or_else(|e| e.exit());

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), GreetError> {
    init_logging(cli.verbose)?;

    // Nothing to greet and nobody piping a name in
    if cli.name.is_none() && io::stdin().is_terminal() {
        Cli::command().print_help().map_err(GreetError::Help)?;
        println!();
        return Ok(());
    }

    let name = get_name(cli)?;
    let greeting = build_greeting(cli, &name);
    debug!(style = ?greeting.style, "built greeting");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&greeting)?);
    } else {
        println!("{greeting}");
    }

    Ok(())
}

/// Parses arguments, rejecting `--formal` next to `--hour` or `--now`.
///
/// Only a `--formal` typed on the command line conflicts. A value picked up
/// from `GREET_FORMAL` is a default and yields to the time flags.
fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = Cli::command().try_get_matches_from(args)?;
    let cli = Cli::from_arg_matches(&matches)?;

    let formal_on_command_line = matches.value_source("formal") == Some(ValueSource::CommandLine);
    if formal_on_command_line && cli.formal && (cli.hour.is_some() || cli.now) {
        let other = if cli.now { "--now" } else { "--hour <HOUR>" };
        return Err(Cli::command().error(
            ErrorKind::ArgumentConflict,
            format!("the argument '--formal' cannot be used with '{other}'"),
        ));
    }

    Ok(cli)
}

/// Picks the greeting style from the parsed flags.
fn build_greeting(cli: &Cli, name: &str) -> Greeting {
    match (cli.hour, cli.now) {
        (Some(hour), _) => Greeting::by_time(name, hour),
        (None, true) => Greeting::now(name),
        (None, false) => Greeting::by_name(name, Some(cli.formal)),
    }
}

/// Get the name from the positional argument or stdin.
fn get_name(cli: &Cli) -> Result<String, GreetError> {
    match cli.name.as_deref() {
        Some("-") | None => read_from_stdin(),
        Some(name) => Ok(name.to_string()),
    }
}

/// Read the name from stdin, joining multiple lines with spaces.
fn read_from_stdin() -> Result<String, GreetError> {
    let stdin = io::stdin();
    let mut name = String::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if !name.is_empty() {
            name.push(' ');
        }
        name.push_str(line);
    }

    if name.is_empty() {
        return Err(GreetError::EmptyName);
    }

    debug!(%name, "read name from stdin");
    Ok(name)
}

/// Installs a stderr subscriber. `RUST_LOG` wins over `-v` when set.
fn init_logging(verbose: u8) -> Result<(), GreetError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .finish()
        .try_init()?;

    Ok(())
}

fn verbosity_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Generate shell completions and exit.
fn generate_completions(shell_name: &str) {
    let shell = match shell_name.to_lowercase().as_str() {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        "powershell" => Shell::PowerShell,
        "elvish" => Shell::Elvish,
        _ => {
            eprintln!(
                "Unknown shell: {shell_name}. Supported: bash, zsh, fish, powershell, elvish"
            );
            std::process::exit(1);
        }
    };

    clap_complete::generate(shell, &mut Cli::command(), "greet", &mut io::stdout());
}
