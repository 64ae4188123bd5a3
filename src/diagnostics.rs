use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::types::Suggestion;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Render an error as markdown with bold headings and print to stderr.
pub fn print_error(e: &Error) {
    let md = render_error(e);
    for line in md.lines() {
        if line.starts_with('#') {
            eprintln!("{BOLD}{line}{RESET}");
        } else {
            eprintln!("{line}");
        }
    }
}

/// Render an error as a structured markdown diagnostic: what happened,
/// and where there is one, how to fix it.
pub fn render_error(e: &Error) -> String {
    match e {
        Error::AmbiguousTarget { target, candidates, suggestions, latex_dir } => {
            render_ambiguous_target(target, candidates, suggestions, latex_dir)
        },
        Error::ExcludedTarget { target } => render_excluded_target(target),
        Error::LatexDirNotFound { path } => render_latex_dir_not_found(path),
        Error::TargetNotFound { target, latex_dir } => render_target_not_found(target, latex_dir),
        _ => render_generic(e),
    }
}

fn render_generic(e: &Error) -> String {
    match e {
        Error::NoNotation { path } => format!("\
# Error: No Notation

`{}` is not inside body or back matter, so it has no numeric notation.
", path.display()),

        Error::ToolNotFound { tool } => format!("\
# Error: Tool Not Found

Could not run `{tool}`.

## Fix

Install it, or point `.bookref.toml` at another executable:

    [compile]
    engine = \"lualatex\"
"),

        Error::ToolFailed { .. } => format!("\
# Error: Compilation Failed

{e}
"),

        Error::Io(e) => format!("\
# Error: I/O

{e}
"),
        Error::TomlDe(e) => format!("\
# Error: Invalid Config

{e}
"),
        // Already handled in render_error, but need exhaustive match.
        _ => format!("\
# Error

{e}
"),
    }
}

fn render_ambiguous_target(
    target: &str,
    candidates: &[PathBuf],
    suggestions: &[Suggestion],
    latex_dir: &Path,
) -> String {
    let mut out = format!("\
# Error: Ambiguous Target

`{target}` matches multiple files:

");
    for (i, candidate) in candidates.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i.saturating_add(1), relative_display(candidate, latex_dir));
    }

    if !suggestions.is_empty() {
        out.push_str("\n## Use numeric notation to pick one\n\n");
        for s in suggestions {
            let _ = writeln!(out, "    bookref compile {}  # {}", s.notation, relative_display(&s.path, latex_dir));
        }
    }
    out
}

fn render_excluded_target(target: &str) -> String {
    format!("\
# Error: Not A Standalone File

`{target}.tex` is pulled in by other files and cannot be compiled on its own.
")
}

fn render_latex_dir_not_found(path: &Path) -> String {
    format!("\
# Error: Latex Directory Not Found

`{}` does not exist.

## Fix

Run bookref from the project root, pass `--root`, or set `latex_dir` in `.bookref.toml`.
", path.display())
}

fn render_target_not_found(target: &str, latex_dir: &Path) -> String {
    format!("\
# Error: Target Not Found

Could not find `{target}.tex` in `{}`.

## Accepted forms

- `3.5.13`  part 3, chapter 5, section 13 (`0.5` for a book without parts)
- `A.2.5`   appendix 2, section 5
- `ch01`    file name or prefix of one
", latex_dir.display())
}

/// Path relative to the latex directory, for display.
fn relative_display(path: &Path, latex_dir: &Path) -> String {
    return path.strip_prefix(latex_dir).unwrap_or(path).display().to_string();
}
