//! The command builder for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI: a single grep-style command.
pub fn build_cli() -> Command {
    Command::new("lgrep")
        .about("Line-oriented search with a minimal grep -E pattern dialect")
        .override_usage(
            "\
  lgrep -E <PATTERN>
  lgrep -E <PATTERN> <FILE>...
  lgrep -r -E <PATTERN> <DIR>...",
        )
        .after_help(
            r#"EXAMPLES:
  echo 'sally has 12 apples' | lgrep -E '\d+ apples'
  lgrep -E '^cat' pets.txt notes.txt
  lgrep -r -E '(cat) and \1' ./notes"#,
        )
        .arg(pattern_arg())
        .arg(paths_arg())
        .arg(recursive_arg())
        .arg(color_arg())
}
