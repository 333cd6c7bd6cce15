//! Shared argument builders for the CLI.

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction};

/// Pattern to search for (-E, required).
pub fn pattern_arg() -> Arg {
    Arg::new("pattern")
        .short('E')
        .long("extended-regexp")
        .value_name("PATTERN")
        .required(true)
        .help("Pattern to search for")
}

/// Files to search, or directories with -r (positional).
pub fn paths_arg() -> Arg {
    Arg::new("paths")
        .value_name("PATH")
        .num_args(0..)
        .value_parser(value_parser!(PathBuf))
        .help("Files to search (directories with -r); stdin when omitted")
}

/// Recursive directory search (-r).
pub fn recursive_arg() -> Arg {
    Arg::new("recursive")
        .short('r')
        .long("recursive")
        .action(ArgAction::SetTrue)
        .help("Search directories recursively")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize matched spans and path prefixes")
}
