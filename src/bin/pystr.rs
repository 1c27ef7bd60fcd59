//! Command-line front end for pystr-utils
//!
//! Evaluates one string or path operation and prints the result.

use std::env;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::debug;
use pystr_utils::path::Convention;
use pystr_utils::END;

#[derive(Parser)]
#[command(name = "pystr")]
#[command(version)]
#[command(about = "Python string methods and os.path operations", long_about = None)]
struct Cli {
    /// Path convention: posix, nt, windows or host
    #[arg(long, global = true, default_value = "host")]
    convention: String,

    #[command(subcommand)]
    command: Commands,
}

/// Start/end window shared by the ranged string operations
#[derive(clap::Args)]
struct Window {
    /// Start index; negative counts from the end
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    start: isize,

    /// End index; negative counts from the end
    #[arg(long, default_value_t = END, allow_negative_numbers = true)]
    end: isize,
}

#[derive(Subcommand)]
enum Commands {
    /// Abspath against the working directory
    Abspath {
        path: String,

        /// Directory to resolve against (default: the process working directory)
        #[arg(long)]
        cwd: Option<String>,
    },

    /// Final component of a path
    Basename { path: String },

    /// Non-overlapping occurrences of SUB
    Count {
        text: String,
        sub: String,
        #[command(flatten)]
        window: Window,
    },

    /// Everything but the final component of a path
    Dirname { path: String },

    /// Lowest index of SUB, or -1
    Find {
        text: String,
        sub: String,
        #[command(flatten)]
        window: Window,
    },

    /// Whether a path is absolute
    Isabs { path: String },

    /// Join path segments
    Join {
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Collapse separators and resolve `.` and `..`
    Normpath { path: String },

    /// Split around the first SEP
    Partition { text: String, sep: String },

    /// Highest index of SUB, or -1
    Rfind {
        text: String,
        sub: String,
        #[command(flatten)]
        window: Window,
    },

    /// Split around the last SEP
    Rpartition { text: String, sep: String },

    /// Split from the right
    Rsplit {
        text: String,

        /// Separator; empty splits on whitespace runs
        #[arg(long, default_value = "")]
        sep: String,

        /// Maximum number of splits; negative for no limit
        #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
        maxsplit: isize,
    },

    /// Python-style slice
    Slice {
        text: String,
        #[command(flatten)]
        window: Window,
    },

    /// Split from the left
    Split {
        text: String,

        /// Separator; empty splits on whitespace runs
        #[arg(long, default_value = "")]
        sep: String,

        /// Maximum number of splits; negative for no limit
        #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
        maxsplit: isize,
    },

    /// Split a path into drive and rest
    Splitdrive { path: String },

    /// Split a path into root and extension
    Splitext { path: String },

    /// Split a path into head and final component
    Splitpath { path: String },
}

fn print_pair((a, b): (String, String)) {
    println!("{}\t{}", a, b);
}

fn print_lines(items: &[String]) {
    for item in items {
        println!("{}", item);
    }
}

fn run(cli: Cli) -> Result<()> {
    let convention: Convention = cli.convention.parse().context("Invalid --convention")?;
    debug!("using {} path convention", convention);

    match cli.command {
        Commands::Find { text, sub, window } => {
            println!("{}", pystr_utils::find(&text, &sub, window.start, window.end));
        }
        Commands::Rfind { text, sub, window } => {
            println!("{}", pystr_utils::rfind(&text, &sub, window.start, window.end));
        }
        Commands::Count { text, sub, window } => {
            println!("{}", pystr_utils::count(&text, &sub, window.start, window.end));
        }
        Commands::Slice { text, window } => {
            println!("{}", pystr_utils::slice(&text, window.start, window.end));
        }
        Commands::Split { text, sep, maxsplit } => {
            print_lines(&pystr_utils::split(&text, &sep, maxsplit));
        }
        Commands::Rsplit { text, sep, maxsplit } => {
            print_lines(&pystr_utils::rsplit(&text, &sep, maxsplit));
        }
        Commands::Partition { text, sep } => {
            let (head, sep, tail) = pystr_utils::partition(&text, &sep);
            println!("{}\t{}\t{}", head, sep, tail);
        }
        Commands::Rpartition { text, sep } => {
            let (head, sep, tail) = pystr_utils::rpartition(&text, &sep);
            println!("{}\t{}\t{}", head, sep, tail);
        }
        Commands::Splitdrive { path } => print_pair(convention.splitdrive(&path)),
        Commands::Splitpath { path } => print_pair(convention.split(&path)),
        Commands::Splitext { path } => print_pair(convention.splitext(&path)),
        Commands::Basename { path } => println!("{}", convention.basename(&path)),
        Commands::Dirname { path } => println!("{}", convention.dirname(&path)),
        Commands::Isabs { path } => println!("{}", convention.isabs(&path)),
        Commands::Join { paths } => println!("{}", convention.join_all(&paths)),
        Commands::Normpath { path } => println!("{}", convention.normpath(&path)),
        Commands::Abspath { path, cwd } => {
            let cwd = match cwd {
                Some(cwd) => cwd,
                None => env::current_dir()
                    .context("Failed to read the current directory")?
                    .to_str()
                    .context("Current directory is not valid UTF-8")?
                    .to_string(),
            };
            println!("{}", convention.abspath(&path, &cwd));
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
