use super::{notes, run, Error, Options};
use std::io::Write;
use tempfile::NamedTempFile;

fn changelog(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

fn options(file: &NamedTempFile, banner: bool) -> Options {
    Options {
        changelog: file.path().to_path_buf(),
        banner,
    }
}

#[test]
fn test_run_prints_banner_then_newest_section() {
    let file = changelog("# v2\n## 2.0.0\n- feature A\n- feature B\n# v1\n## 1.0.0\n- old\n");
    let mut out = Vec::new();

    run(&options(&file, true), &mut out).unwrap();

    let expected = format!("\n{}\n\n## 2.0.0\n- feature A\n- feature B\n", notes::BANNER);
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn test_run_without_banner() {
    let file = changelog("# v1\n## 1.0.0\nonly release\n");
    let mut out = Vec::new();

    run(&options(&file, false), &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "## 1.0.0\nonly release\n");
}

#[test]
fn test_missing_marker_writes_nothing() {
    let file = changelog("# v1\nnotes\n");
    let mut out = Vec::new();

    let result = run(&options(&file, true), &mut out);

    assert!(matches!(result, Err(Error::MissingSection)));
    assert!(out.is_empty(), "no output expected, got: {out:?}");
}

#[test]
fn test_missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("CHANGELOG.md");
    let mut out = Vec::new();

    let result = run(
        &Options {
            changelog: path.clone(),
            banner: true,
        },
        &mut out,
    );

    match result {
        Err(Error::Read { path: failed, .. }) => assert_eq!(failed, path),
        other => panic!("expected read error, got: {other:?}"),
    }
    assert!(out.is_empty());
}

#[test]
fn test_repeated_runs_are_identical() {
    let file = changelog("# v2\n## 2.0.0\n- a\n# v1\n");
    let mut first = Vec::new();
    let mut second = Vec::new();

    run(&options(&file, true), &mut first).unwrap();
    run(&options(&file, true), &mut second).unwrap();

    assert_eq!(first, second);
}
