use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("afairhome").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn analyze_prints_summary() {
    let home = TempDir::new().expect("temp home");
    cmd(&home)
        .args(["analyze", "--skip-export"])
        .assert()
        .success()
        .stdout(contains("benefit-cost ratio: 5.0"))
        .stdout(contains("annual users: 500"));
}

#[test]
fn scenarios_lists_all_three_variants() {
    let home = TempDir::new().expect("temp home");
    cmd(&home)
        .arg("scenarios")
        .assert()
        .success()
        .stdout(contains("conservative"))
        .stdout(contains("base"))
        .stdout(contains("optimistic"));
}

#[test]
fn verify_checklist_names_budget_documents() {
    let home = TempDir::new().expect("temp home");
    cmd(&home)
        .args(["verify", "checklist"])
        .assert()
        .success()
        .stdout(contains("Department of Streets and Sanitation"));
}

#[test]
fn verify_urls_json_envelope() {
    let home = TempDir::new().expect("temp home");
    cmd(&home)
        .args(["--json", "verify", "urls"])
        .assert()
        .success()
        .stdout(contains("\"ok\": true"))
        .stdout(contains("data.cityofchicago.org"));
}
