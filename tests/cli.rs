//! End-to-end tests for the trustcomply binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command with its config directory pointed at a temp dir, so tests never
/// touch (or depend on) a real policy file.
fn trustcomply(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("trustcomply").unwrap();
    cmd.env("TRUSTCOMPLY_DATA_DIR", config_dir.path());
    cmd
}

fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

const CLEAN_ACCOUNTS: &str = r#"[
    {
        "id": "trust-001",
        "name": "Firm IOLTA Trust Account",
        "balance": 250000,
        "next_reconciliation_due": "2099-01-01",
        "state_bar_approved": true,
        "authorized_signatories": ["atty-1"]
    }
]"#;

const OVERDRAWN_ACCOUNTS: &str = r#"[
    {
        "id": "trust-002",
        "name": "Firm IOLTA Trust Account",
        "balance": -500,
        "next_reconciliation_due": "2099-01-01",
        "authorized_signatories": ["atty-1"]
    }
]"#;

#[test]
fn scan_clean_portfolio_exits_zero() {
    let dir = TempDir::new().unwrap();
    let accounts = write_file(&dir, "accounts.json", CLEAN_ACCOUNTS);

    trustcomply(&dir)
        .arg("scan")
        .arg(&accounts)
        .assert()
        .success()
        .stdout(predicate::str::contains("No compliance issues found."))
        .stdout(predicate::str::contains("0 errors, 0 warnings"));
}

#[test]
fn scan_overdrawn_account_fails_with_issue() {
    let dir = TempDir::new().unwrap();
    let accounts = write_file(&dir, "accounts.json", OVERDRAWN_ACCOUNTS);

    trustcomply(&dir)
        .arg("scan")
        .arg(&accounts)
        .assert()
        .failure()
        .stdout(predicate::str::contains("zero balance principle"))
        .stderr(predicate::str::contains("Compliance check failed"));
}

#[test]
fn scan_warnings_alone_exit_zero() {
    let dir = TempDir::new().unwrap();
    let accounts = write_file(
        &dir,
        "accounts.json",
        r#"[
            {
                "id": "trust-003",
                "name": "Firm Escrow Account",
                "balance": 100000,
                "state_bar_approved": false,
                "authorized_signatories": ["atty-1"]
            }
        ]"#,
    );

    trustcomply(&dir)
        .arg("scan")
        .arg(&accounts)
        .assert()
        .success()
        .stdout(predicate::str::contains("state bar"))
        .stdout(predicate::str::contains("0 errors, 1 warning"));
}

#[test]
fn scan_as_of_controls_reconciliation_overdue() {
    let dir = TempDir::new().unwrap();
    let accounts = write_file(
        &dir,
        "accounts.json",
        r#"[
            {
                "id": "trust-004",
                "name": "Firm IOLTA Trust Account",
                "balance": 100000,
                "next_reconciliation_due": "2025-03-05",
                "authorized_signatories": ["atty-1"]
            }
        ]"#,
    );

    // 10 days overdue: error severity, non-zero exit
    trustcomply(&dir)
        .arg("scan")
        .arg(&accounts)
        .args(["--as-of", "2025-03-15"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("10 days overdue"));

    // On the due date there is nothing to report
    trustcomply(&dir)
        .arg("scan")
        .arg(&accounts)
        .args(["--as-of", "2025-03-05"])
        .assert()
        .success();
}

#[test]
fn scan_json_report_to_file() {
    let dir = TempDir::new().unwrap();
    let accounts = write_file(&dir, "accounts.json", CLEAN_ACCOUNTS);
    let report_path = dir.path().join("report.json");

    trustcomply(&dir)
        .arg("scan")
        .arg(&accounts)
        .args(["--format", "json", "--output"])
        .arg(&report_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written to"));

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(report["schema_version"], "1.0.0");
    assert_eq!(report["accounts_scanned"], 1);
    assert_eq!(report["error_count"], 0);
}

#[test]
fn scan_rejects_malformed_accounts_file() {
    let dir = TempDir::new().unwrap();
    let accounts = write_file(&dir, "accounts.json", r#"{"not": "an array"}"#);

    trustcomply(&dir)
        .arg("scan")
        .arg(&accounts)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a JSON array"));
}

#[test]
fn deposit_check_passes_with_timing_warning() {
    let dir = TempDir::new().unwrap();

    // 30-hour gap: valid, but flagged against the 24-hour guidance
    trustcomply(&dir)
        .args([
            "deposit",
            "check",
            "--amount",
            "1500.00",
            "--description",
            "Retainer - Smith v. Jones",
            "--payor",
            "Robert Smith",
            "--date",
            "2025-01-02T16:00:00",
            "--received",
            "2025-01-01T10:00:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deposit: OK"))
        .stdout(predicate::str::contains("best practice"));
}

#[test]
fn deposit_check_rejects_missing_payor() {
    let dir = TempDir::new().unwrap();

    trustcomply(&dir)
        .args([
            "deposit",
            "check",
            "--amount",
            "1500.00",
            "--description",
            "Retainer",
            "--date",
            "2025-01-02T16:00:00",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Payor is required"));
}

#[test]
fn deposit_check_reads_json_file() {
    let dir = TempDir::new().unwrap();
    let deposit = write_file(
        &dir,
        "deposit.json",
        r#"{
            "amount": 150000,
            "description": "Settlement proceeds",
            "payor": "Opposing Counsel",
            "deposited_at": "2025-01-01T12:00:00"
        }"#,
    );

    trustcomply(&dir)
        .args(["deposit", "check"])
        .arg(&deposit)
        .assert()
        .success()
        .stdout(predicate::str::contains("could not be verified"));
}

#[test]
fn withdrawal_check_rejects_cash() {
    let dir = TempDir::new().unwrap();

    trustcomply(&dir)
        .args([
            "withdrawal",
            "check",
            "--amount",
            "100.00",
            "--balance",
            "1000.00",
            "--description",
            "Client refund",
            "--payee",
            "Robert Smith",
            "--method",
            "CASH",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Withdrawal: REJECTED"))
        .stdout(predicate::str::contains("prohibited"));
}

#[test]
fn withdrawal_check_passes_for_numbered_check() {
    let dir = TempDir::new().unwrap();

    trustcomply(&dir)
        .args([
            "withdrawal",
            "check",
            "--amount",
            "500.00",
            "--balance",
            "1000.00",
            "--description",
            "Filing fees",
            "--payee",
            "County Clerk",
            "--method",
            "check",
            "--check-number",
            "1041",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Withdrawal: OK"));
}

#[test]
fn withdrawal_check_rejects_unknown_method() {
    let dir = TempDir::new().unwrap();

    trustcomply(&dir)
        .args([
            "withdrawal",
            "check",
            "--amount",
            "500.00",
            "--balance",
            "1000.00",
            "--description",
            "Refund",
            "--payee",
            "Robert Smith",
            "--method",
            "venmo",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown payment method"));
}

#[test]
fn policy_init_and_custom_thresholds_apply() {
    let dir = TempDir::new().unwrap();

    trustcomply(&dir)
        .args(["policy", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default policy"));

    // Loosen the hard limit to 72 hours and re-check a 50-hour deposit:
    // under the default policy this would carry a violation warning.
    let policy_path = dir.path().join("policy.json");
    let mut policy: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&policy_path).unwrap()).unwrap();
    policy["prompt_deposit_hours"] = serde_json::json!(72);
    policy["prompt_deposit_warning_hours"] = serde_json::json!(72);
    std::fs::write(&policy_path, serde_json::to_string(&policy).unwrap()).unwrap();

    trustcomply(&dir)
        .args([
            "deposit",
            "check",
            "--amount",
            "1500.00",
            "--description",
            "Retainer",
            "--payor",
            "Robert Smith",
            "--date",
            "2025-01-03T12:00:00",
            "--received",
            "2025-01-01T10:00:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deposit: OK"))
        .stdout(predicate::str::contains("warning:").not());
}

#[test]
fn policy_show_reports_defaults() {
    let dir = TempDir::new().unwrap();

    trustcomply(&dir)
        .args(["policy", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("48 hours"))
        .stdout(predicate::str::contains("cash, ATM"));
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();

    trustcomply(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("policy.json"));
}
