//! Stdin and file search modes.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;

use lgrep_lib::{find, matches, Match};

use crate::colors::Colors;
use crate::error::SearchError;

pub struct SearchArgs {
    pub pattern: String,
    pub paths: Vec<PathBuf>,
    pub color: bool,
}

/// Runs stdin mode (no paths) or file mode; returns whether anything
/// matched.
pub fn run(args: SearchArgs) -> Result<bool, SearchError> {
    if args.paths.is_empty() {
        return run_stdin(&args.pattern);
    }
    Ok(run_files(&args))
}

/// stdin mode: one line in, a verdict out, nothing printed.
fn run_stdin(pattern: &str) -> Result<bool, SearchError> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let line = line.strip_suffix('\n').unwrap_or(&line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    Ok(matches(line.as_bytes(), pattern.as_bytes()))
}

/// file mode: print matching lines, `path:`-prefixed when more than one
/// file was named. Unreadable files warn and are skipped.
fn run_files(args: &SearchArgs) -> bool {
    let colors = Colors::new(args.color);
    let with_prefix = args.paths.len() > 1;
    let mut any = false;

    for path in &args.paths {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                eprintln!("lgrep: cannot read {}: {err}", path.display());
                continue;
            }
        };

        let prefix = with_prefix.then(|| path.display().to_string());
        for line in split_lines(&bytes) {
            if let Some(found) = find(line, args.pattern.as_bytes()) {
                any = true;
                println!("{}", render_line(line, prefix.as_deref(), found, colors));
            }
        }
    }
    any
}

/// Splits file contents into lines: LF separators, a trailing CR stripped
/// from each line, and no phantom empty line after a final newline.
pub(crate) fn split_lines(bytes: &[u8]) -> Vec<&[u8]> {
    let mut lines: Vec<&[u8]> = bytes.split(|&byte| byte == b'\n').collect();
    if bytes.is_empty() || bytes.ends_with(b"\n") {
        lines.pop();
    }
    for line in &mut lines {
        if line.ends_with(b"\r") {
            *line = &line[..line.len() - 1];
        }
    }
    lines
}

/// Renders one matching line: optional `path:` prefix, the matched span
/// highlighted. Non-UTF-8 bytes are printed lossily.
pub(crate) fn render_line(
    line: &[u8],
    prefix: Option<&str>,
    found: Match,
    colors: Colors,
) -> String {
    let mut out = String::new();
    if let Some(path) = prefix {
        let _ = write!(
            out,
            "{}{}{}{}:{}",
            colors.magenta, path, colors.reset, colors.dim, colors.reset
        );
    }

    let before = String::from_utf8_lossy(&line[..found.start]);
    let matched = String::from_utf8_lossy(&line[found.range()]);
    let after = String::from_utf8_lossy(&line[found.end..]);
    let _ = write!(
        out,
        "{}{}{}{}{}",
        before, colors.red, matched, colors.reset, after
    );
    out
}
