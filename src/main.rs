mod analysis;
mod error;
mod logging;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use grammar_token::{Scanner, TokenKind};

use crate::analysis::GrammarStats;
use crate::error::Error;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None, args_conflicts_with_subcommands = true)]
struct Cli {
    /// The grammar specification to check. Prints the number of rule-sets,
    /// non-terminal occurrences and terminal occurrences.
    file: Option<PathBuf>,

    /// Log every token the recognizer consumes.
    #[arg(long)]
    trace_tokens: bool,

    /// Directory holding grammar_stats.toml, defaults to the current directory.
    #[arg(long)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Creates a grammar_stats.toml on the current working directory or on the specified path
    Init {
        /// The path to create the grammar_stats.toml file in.
        path: Option<PathBuf>,
    },
    /// Prints the tokens of a grammar specification, one per line
    Tokens {
        /// The grammar specification to scan.
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { path }) => return init(path.as_deref()),
        Some(Commands::Tokens { file }) => return print_tokens(&file),
        None => {}
    }

    let Some(file) = cli.file else {
        eprintln!("{}", Cli::command().render_usage());
        return ExitCode::FAILURE;
    };

    let config_dir = cli.config_dir.or_else(|| std::env::current_dir().ok());
    let config = grammar_config::load_config(config_dir);
    logging::init_tracing(&config, cli.trace_tokens).ok();

    match GrammarStats::open(&file).and_then(GrammarStats::compute_stats) {
        Ok(stats) => {
            println!("{stats}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn init(path: Option<&Path>) -> ExitCode {
    let root_dir = path.unwrap_or(Path::new("."));

    match grammar_config::write_default_config(root_dir) {
        Ok(config_path) => {
            println!("Initialising in {}", config_path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn print_tokens(file: &Path) -> ExitCode {
    let content = match std::fs::read_to_string(file) {
        Ok(content) => content,
        Err(source) => {
            let err = Error::Io {
                path: file.to_path_buf(),
                source,
            };
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let mut scanner = Scanner::new(&content);
    loop {
        let token = scanner.next_token();
        println!("{token}");

        if token.kind() == TokenKind::EndOfInput {
            break ExitCode::SUCCESS;
        }
    }
}
