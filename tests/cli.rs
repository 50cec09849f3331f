use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn cli_converts_input_to_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("notes.md");
    let output = dir.path().join("notes.docx");
    fs::write(&input, "# Notes\n\n- **one**\n- two\n").unwrap();

    let mut cmd = cargo_bin_cmd!("md2docx");
    cmd.arg(&input).arg("-o").arg(&output);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("SUCCESS! Created"))
        .stdout(predicate::str::contains("Enable Editing"));

    assert!(fs::read(&output).unwrap().starts_with(b"PK"));
}

#[test]
fn cli_uses_default_file_names() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("Report.md"), "Hello **world**\n").unwrap();

    let mut cmd = cargo_bin_cmd!("md2docx");
    cmd.current_dir(dir.path());

    cmd.assert().success();
    assert!(dir.path().join("Report_Editable.docx").exists());
}

#[test]
fn cli_fails_on_missing_input() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.docx");

    let mut cmd = cargo_bin_cmd!("md2docx");
    cmd.arg(dir.path().join("missing.md")).arg("-o").arg(&output);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read"));
    assert!(!output.exists());
}

#[test]
fn cli_reports_save_failure() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.md");
    fs::write(&input, "text\n").unwrap();
    let output = dir.path().join("occupied");
    fs::create_dir(&output).unwrap();

    let mut cmd = cargo_bin_cmd!("md2docx");
    cmd.arg(&input).arg("--output").arg(&output);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("could not save"));
}

#[test]
fn cli_rejects_invalid_config() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.md");
    let config = dir.path().join("config.toml");
    fs::write(&input, "text\n").unwrap();
    fs::write(&config, "[font\nname = ").unwrap();

    let mut cmd = cargo_bin_cmd!("md2docx");
    cmd.arg(&input)
        .arg("-o")
        .arg(dir.path().join("out.docx"))
        .arg("--config")
        .arg(&config);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn cli_title_override() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.md");
    let output = dir.path().join("out.docx");
    fs::write(&input, "text\n").unwrap();

    let mut cmd = cargo_bin_cmd!("md2docx");
    cmd.arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--title")
        .arg("Field Notes");

    cmd.assert().success();

    let bytes = fs::read(&output).unwrap();
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
    let mut core = String::new();
    std::io::Read::read_to_string(&mut archive.by_name("docProps/core.xml").unwrap(), &mut core)
        .unwrap();
    assert!(core.contains("<dc:title>Field Notes</dc:title>"));
}
