//! Backtracking regular-expression engine for a line-oriented search tool.
//!
//! The dialect is a small subset of POSIX extended regular expressions:
//! literals, `.`, `\d`, `\w`, escaped literals, `[...]`/`[^...]` classes,
//! capturing groups with alternation `(A|B)`, backreferences `\1`..`\9`,
//! the `?` and `+` quantifiers, and the `^`/`$` line anchors.
//!
//! Patterns are not compiled: elements are rediscovered on each visit as
//! windows into the pattern bytes, and matching is a recursive backtracking
//! walk that enumerates every offset a sub-match can end at.
//!
//! # Example
//!
//! ```
//! use lgrep_lib::matches;
//!
//! assert!(matches(b"sally has 12 apples", b"\\d+ apples"));
//! assert!(matches(b"cat and cat", b"(cat) and \\1"));
//! assert!(!matches(b"cat and dog", b"(cat) and \\1"));
//! ```

pub mod engine;
pub mod pattern;

pub use engine::{find, matches, Match};
