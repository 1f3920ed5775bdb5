//! CLI entry point for jls

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, CommandFactory, Parser, ValueEnum};
use env_logger::Env;
use jls::{DEFAULT_INPUT, EntryKind, ListConfig, load_tree, run};
use termcolor::{ColorChoice, StandardStream};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "jls")]
#[command(about = "List information about the entries of a JSON-described directory tree")]
#[command(version)]
#[command(disable_help_flag = true)]
struct Args {
    /// Path inside the tree to list (the root by default; the last one wins)
    #[arg(value_name = "PATH")]
    paths: Vec<String>,

    /// Do not ignore entries starting with .
    #[arg(short = 'A')]
    almost_all: bool,

    /// Use a long listing format
    #[arg(short = 'l')]
    long: bool,

    /// Reverse order while sorting
    #[arg(short = 'r')]
    reverse: bool,

    /// Sort by modification time, newest first
    #[arg(short = 't')]
    time: bool,

    /// Show only files or only directories
    #[arg(long = "filter", value_name = "KIND")]
    filter: Option<EntryKind>,

    /// Print sizes in human readable format (with -l)
    #[arg(short = 'h')]
    human_readable: bool,

    /// JSON document describing the tree
    #[arg(long = "input", value_name = "FILE", default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Display this help and exit
    #[arg(long = "help", action = ArgAction::Help)]
    help: Option<bool>,
}

impl Args {
    fn list_config(&self) -> ListConfig {
        ListConfig {
            input_path: self.input.clone(),
            target_path: self.paths.last().cloned(),
            show_all: self.almost_all,
            long_format: self.long,
            reverse: self.reverse,
            sort_by_time: self.time,
            filter_by: self.filter,
            human_readable: self.human_readable,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    // --help wins over anything else on the command line, valid or not.
    if std::env::args_os().skip(1).any(|arg| arg == "--help") {
        if let Err(e) = Args::command().print_help() {
            eprintln!("jls: error writing output: {}", e);
            process::exit(1);
        }
        process::exit(0);
    }

    let args = Args::parse();
    let config = args.list_config();
    log::debug!("{:?}", config);

    let root = load_tree(&config.input_path).unwrap_or_else(|e| {
        eprintln!("jls: {}", e);
        process::exit(1);
    });

    let choice = if should_use_color(args.color) {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    if let Err(e) = run(&root, &config, &mut stdout) {
        eprintln!("jls: error writing output: {}", e);
        process::exit(1);
    }
}
