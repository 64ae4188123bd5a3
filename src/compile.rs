//! Typesetting driver: engine pass, optional bibliography pass, and the
//! two follow-up engine passes that settle cross-references.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::CompileSettings;
use crate::error::Error;

/// Separator printed around each tool run.
const RULE: &str = "--------------------------------------------------";

/// Compile one resolved `.tex` file into `<latex_dir>/<build_dir>`.
///
/// The engine runs from the file's own directory so that subfile-relative
/// paths resolve the same way they do for the main document.
///
/// # Errors
///
/// Returns `Error::Io` if the build directory cannot be created,
/// `Error::ToolNotFound` if an executable cannot be started,
/// or `Error::ToolFailed` if a pass exits unsuccessfully.
pub fn run(tex_file: &Path, latex_dir: &Path, bib: bool, settings: &CompileSettings) -> Result<PathBuf, Error> {
    let build_dir = std::path::absolute(latex_dir.join(&settings.build_dir))?;
    std::fs::create_dir_all(&build_dir)?;

    let work_dir = tex_file.parent().unwrap_or_else(|| return Path::new("."));
    let file_name = tex_file.file_name().unwrap_or(tex_file.as_os_str());
    let stem = tex_file.file_stem().unwrap_or(file_name);

    let relative_dir = work_dir.strip_prefix(latex_dir).unwrap_or(work_dir);
    println!("Compiling: {}", tex_file.strip_prefix(latex_dir).unwrap_or(tex_file).display());
    if relative_dir.as_os_str().is_empty() {
        println!("Working directory: .");
    } else {
        println!("Working directory: {}", relative_dir.display());
    }
    println!("Output directory: {}", build_dir.display());
    println!("{RULE}");

    let mut engine = Command::new(&settings.engine);
    engine
        .arg("-interaction=nonstopmode")
        .arg(format!("-output-directory={}", build_dir.display()))
        .arg(file_name)
        .current_dir(work_dir);
    run_tool(&mut engine, &settings.engine)?;

    if bib {
        println!("{RULE}");
        println!("Running {} for bibliography...", settings.bib_tool);
        let mut bib_tool = Command::new(&settings.bib_tool);
        bib_tool
            .arg(format!("--output-directory={}", build_dir.display()))
            .arg(stem)
            .current_dir(work_dir);
        run_tool(&mut bib_tool, &settings.bib_tool)?;

        for pass in 2..=3 {
            println!("{RULE}");
            println!("Running {} (pass {pass})...", settings.engine);
            run_tool(&mut engine, &settings.engine)?;
        }
    }

    let mut pdf = build_dir.join(stem);
    pdf.set_extension("pdf");
    println!("{RULE}");
    println!("Success! Output: {}", pdf.display());
    return Ok(pdf);
}

/// Run a prepared command with inherited stdio and map its exit status.
///
/// # Errors
///
/// Returns `Error::ToolNotFound` if the executable cannot be started,
/// `Error::Io` for other spawn failures, or `Error::ToolFailed` on a non-zero exit.
fn run_tool(cmd: &mut Command, tool: &str) -> Result<(), Error> {
    tracing::info!(tool, dir = ?cmd.get_current_dir(), "running");
    let status = match cmd.status() {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::ToolNotFound { tool: tool.to_string() });
        },
        Err(e) => return Err(Error::Io(e)),
        Ok(s) => s,
    };
    if !status.success() {
        tracing::warn!(tool, code = ?status.code(), "tool failed");
        return Err(Error::ToolFailed { code: status.code(), tool: tool.to_string() });
    }
    return Ok(());
}
