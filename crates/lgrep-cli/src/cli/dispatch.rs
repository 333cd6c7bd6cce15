//! Dispatch logic: extract params from `ArgMatches` and convert them to
//! command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::search::SearchArgs;
use crate::commands::walk::WalkArgs;

/// Everything the single command accepts, straight from clap.
pub struct SearchParams {
    pub pattern: String,
    pub paths: Vec<PathBuf>,
    pub recursive: bool,
    pub color: ColorChoice,
}

impl SearchParams {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            // required by the arg definition
            pattern: matches
                .get_one::<String>("pattern")
                .cloned()
                .unwrap_or_default(),
            paths: matches
                .get_many::<PathBuf>("paths")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            recursive: matches.get_flag("recursive"),
            color: parse_color(matches),
        }
    }
}

fn parse_color(matches: &ArgMatches) -> ColorChoice {
    match matches.get_one::<String>("color").map(String::as_str) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

impl From<SearchParams> for SearchArgs {
    fn from(params: SearchParams) -> Self {
        Self {
            pattern: params.pattern,
            paths: params.paths,
            color: params.color.should_colorize(),
        }
    }
}

impl From<SearchParams> for WalkArgs {
    fn from(params: SearchParams) -> Self {
        Self {
            pattern: params.pattern,
            roots: params.paths,
            color: params.color.should_colorize(),
        }
    }
}
