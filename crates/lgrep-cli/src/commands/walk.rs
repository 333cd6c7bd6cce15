//! Recursive directory search.

use std::fs;
use std::path::PathBuf;

use lgrep_lib::{find, matches};
use walkdir::WalkDir;

use crate::colors::Colors;
use crate::error::SearchError;

use super::search::{render_line, split_lines};

pub struct WalkArgs {
    pub pattern: String,
    pub roots: Vec<PathBuf>,
    pub color: bool,
}

/// Walks each root, collects matching `(path, line)` pairs, and prints
/// them sorted lexicographically by path then line. Returns whether
/// anything matched.
///
/// An unreadable root is fatal; anything below it warns and is skipped.
pub fn run(args: WalkArgs) -> Result<bool, SearchError> {
    let mut collected: Vec<(String, Vec<u8>)> = Vec::new();

    for root in &args.roots {
        for entry in WalkDir::new(root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    return Err(SearchError::Walk {
                        path: root.clone(),
                        source: err,
                    });
                }
                Err(err) => {
                    eprintln!("lgrep: {err}");
                    continue;
                }
            };

            // regular files only: directories, symlinks, and the rest are
            // navigation, not content
            if !entry.file_type().is_file() {
                continue;
            }

            let bytes = match fs::read(entry.path()) {
                Ok(bytes) => bytes,
                Err(err) => {
                    eprintln!("lgrep: cannot read {}: {err}", entry.path().display());
                    continue;
                }
            };

            for line in split_lines(&bytes) {
                if matches(line, args.pattern.as_bytes()) {
                    collected.push((entry.path().display().to_string(), line.to_vec()));
                }
            }
        }
    }

    let any = !collected.is_empty();
    collected.sort();

    let colors = Colors::new(args.color);
    for (path, line) in &collected {
        if let Some(found) = find(line, args.pattern.as_bytes()) {
            println!("{}", render_line(line, Some(path), found, colors));
        }
    }
    Ok(any)
}
