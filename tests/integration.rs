use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn bookref_cmd(fixture: &str) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bookref"));
    cmd.current_dir(Path::new("tests/fixtures").join(fixture));
    cmd
}

fn resolve(target: &str) -> Output {
    bookref_cmd("book").args(["resolve", target]).output().unwrap()
}

fn stdout_path(output: &Output) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(&output.stdout).trim())
}

fn assert_resolves(target: &str, expected: &str) {
    let output = resolve(target);
    assert!(
        output.status.success(),
        "resolve {target} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(stdout_path(&output), Path::new("latex").join(expected), "resolve {target}");
}

#[test]
fn numeric_body_targets() {
    assert_resolves("2.1", "200-bodymatter/part02-methods/ch01-intro/ch01-intro.tex");
    assert_resolves("2.1.1", "200-bodymatter/part02-methods/ch01-intro/sec01-basics.tex");
    assert_resolves("1", "200-bodymatter/part01-foundations/part01.tex");
    assert_resolves("1.0.0", "200-bodymatter/part01-foundations/part01.tex");
}

#[test]
fn roman_chapter_directory() {
    assert_resolves("1.2", "200-bodymatter/part01-foundations/chii-prologue/chii-prologue.tex");
}

#[test]
fn part_without_aggregator_is_not_found() {
    let output = resolve("2");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Target Not Found"));
}

#[test]
fn appendix_targets() {
    assert_resolves("A.1", "300-backmatter/app01-glossary/app01-glossary.tex");
    assert_resolves("a.1.1", "300-backmatter/app01-glossary/sec01-terms.tex");
    assert_eq!(resolve("A").status.code(), Some(1));
}

#[test]
fn names_and_slugs() {
    assert_resolves("main", "main.tex");
    assert_resolves("ch01-intro", "200-bodymatter/part02-methods/ch01-intro/ch01-intro.tex");
    assert_resolves("chii", "200-bodymatter/part01-foundations/chii-prologue/chii-prologue.tex");
}

#[test]
fn localsettings_is_refused() {
    let output = resolve("localsettings");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("localsettings.tex"));
    assert!(output.stdout.is_empty());
}

#[test]
fn ambiguous_prefix_lists_candidates_and_suggestions() {
    let output = resolve("ch01");
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ch01-overview/ch01-overview.tex"), "{stderr}");
    assert!(stderr.contains("ch01-intro/ch01-intro.tex"), "{stderr}");
    assert!(stderr.contains("bookref compile 1.1"), "{stderr}");
    assert!(stderr.contains("bookref compile 2.1"), "{stderr}");
}

#[test]
fn json_ambiguity_suggestions_resolve_back() {
    let output = bookref_cmd("book").args(["resolve", "sec01", "--json"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["kind"], "ambiguous");
    assert_eq!(report["target"], "sec01");
    // The front-matter preface matches too but has no notation.
    assert_eq!(report["candidates"].as_array().unwrap().len(), 4);
    let suggestions = report["suggestions"].as_array().unwrap();
    assert_eq!(suggestions.len(), 3);

    for suggestion in suggestions {
        let notation = suggestion["notation"].as_str().unwrap();
        let path = suggestion["path"].as_str().unwrap();
        let back = bookref_cmd("book").args(["resolve", notation, "--json"]).output().unwrap();
        let back: serde_json::Value = serde_json::from_slice(&back.stdout).unwrap();
        assert_eq!(back["kind"], "resolved", "{notation}");
        assert_eq!(back["path"], path, "{notation}");
    }
}

#[test]
fn json_not_found() {
    let output = bookref_cmd("book").args(["resolve", "nothing", "--json"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["kind"], "not_found");
}

#[test]
fn notation_of_files() {
    let notation = |file: &str| {
        let output = bookref_cmd("book").args(["notation", file]).output().unwrap();
        (output.status.code(), String::from_utf8_lossy(&output.stdout).trim().to_string())
    };
    assert_eq!(
        notation("latex/200-bodymatter/part01-foundations/ch01-overview/sec01-history.tex"),
        (Some(0), "1.1.1".to_string())
    );
    assert_eq!(
        notation("latex/300-backmatter/app01-glossary/sec01-terms.tex"),
        (Some(0), "A.1.1".to_string())
    );
    assert_eq!(notation("latex/100-frontmatter/sec01-preface.tex").0, Some(1));
}

#[test]
fn notation_file_is_relative_to_root() {
    let output = Command::new(env!("CARGO_BIN_EXE_bookref"))
        .args([
            "--root",
            "tests/fixtures/book",
            "notation",
            "latex/200-bodymatter/part01-foundations/ch01-overview/sec01-history.tex",
        ])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "1.1.1");
}

#[test]
fn root_flag_and_missing_latex_dir() {
    let output = Command::new(env!("CARGO_BIN_EXE_bookref"))
        .args(["--root", "tests/fixtures/book", "resolve", "main"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(stdout_path(&output).ends_with("latex/main.tex"));

    let empty = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_bookref"))
        .arg("--root")
        .arg(empty.path())
        .args(["resolve", "main"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Latex Directory Not Found"));
}

#[test]
fn config_moves_the_latex_dir() {
    let project = tempfile::tempdir().unwrap();
    let chapter = project.path().join("tex/200-bodymatter/ch03-results");
    std::fs::create_dir_all(&chapter).unwrap();
    std::fs::write(chapter.join("ch03-results.tex"), "").unwrap();
    std::fs::write(project.path().join(".bookref.toml"), "latex_dir = \"tex\"\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_bookref"))
        .current_dir(project.path())
        .args(["resolve", "0.3"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(stdout_path(&output), Path::new("tex/200-bodymatter/ch03-results/ch03-results.tex"));
}

#[cfg(unix)]
#[test]
fn compile_runs_configured_engine() {
    let project = tempfile::tempdir().unwrap();
    let latex = project.path().join("latex");
    std::fs::create_dir_all(&latex).unwrap();
    std::fs::write(latex.join("main.tex"), "").unwrap();
    std::fs::write(project.path().join(".bookref.toml"), "[compile]\nengine = \"true\"\nbib_tool = \"true\"\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_bookref"))
        .current_dir(project.path())
        .args(["compile", "--bib"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Compiling: main.tex"), "{stdout}");
    assert!(stdout.contains("pass 3"), "{stdout}");
    assert!(stdout.contains("Success! Output:"), "{stdout}");
    assert!(latex.join("build").is_dir());
}
