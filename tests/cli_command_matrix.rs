use assert_cmd::Command;
use tempfile::TempDir;

fn run_help(home: &TempDir, args: &[&str]) {
    let mut cmd = Command::cargo_bin("afairhome").unwrap();
    cmd.env("HOME", home.path())
        .args(args)
        .arg("--help")
        .assert()
        .success();
}

#[test]
fn every_cli_command_has_help_path() {
    let home = TempDir::new().expect("temp home");

    // top-level
    run_help(&home, &[]);

    // analysis commands
    run_help(&home, &["analyze"]);
    run_help(&home, &["scenarios"]);

    // verification command tree
    run_help(&home, &["verify"]);
    run_help(&home, &["verify", "report"]);
    run_help(&home, &["verify", "checklist"]);
    run_help(&home, &["verify", "urls"]);
    run_help(&home, &["verify", "components"]);
    run_help(&home, &["verify", "frequency"]);
}
