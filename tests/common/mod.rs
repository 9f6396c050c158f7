use assert_cmd::Command;
use std::path::Path;

pub fn notekeep_cmd() -> Command {
    let mut cmd = Command::cargo_bin("notekeep").unwrap();
    cmd.env_remove("NOTEKEEP_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Run `notekeep add` in `dir` and return the new note id
#[allow(dead_code)]
pub fn add_note(dir: &Path, args: &[&str]) -> String {
    let output = notekeep_cmd()
        .current_dir(dir)
        .arg("add")
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "add failed: {:?}", output);

    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .trim()
        .strip_prefix("Created note ")
        .expect("unexpected add output")
        .to_string()
}
