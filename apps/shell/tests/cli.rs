use assert_cmd::Command;
use predicates::prelude::*;

fn edupath() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_edupath"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn initiate_prints_checkout_handle_after_latency() {
    edupath()
        .args(["--latency-ms", "50", "initiate", "--phone", "0712345678", "--amount", "250"])
        .args(["--name", "Wanjiku"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r#"\{"checkoutRequestId":"ws_CO_[0-9A-Z]{10}"\}"#).unwrap())
        .stdout(predicate::str::is_match(r"elapsed_ms=([5-9][0-9]|[0-9]{3,})").unwrap());
}

#[test]
fn initiate_rejects_malformed_numbers() {
    edupath()
        .args(["initiate", "--phone", "12345", "--amount", "250", "--name", "Otieno"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid Safaricom M-Pesa number"));
}

#[test]
fn otp_prints_four_digit_codes() {
    let output = edupath().args(["otp", "--count", "5"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let codes: Vec<_> = stdout.lines().collect();
    assert_eq!(codes.len(), 5);
    for code in codes {
        let value: u16 = code.parse().unwrap();
        assert!((1000..=9999).contains(&value), "{code}");
    }
}

#[test]
fn match_lists_eligible_courses() {
    edupath()
        .args(["match", "--grades", "eng=B,kis=B-,mat=C+,bio=C,che=C,his=B,geo=B-,bst=C+"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mean grade B- (54 / 84 points)"))
        .stdout(predicate::str::contains("MASENO-EDA"))
        .stdout(predicate::str::contains("UON-MBCHB").not());
}

#[test]
fn match_json_uses_camel_case() {
    edupath()
        .args(["match", "--json", "--grades", "eng=A,kis=A-,mat=A,bio=A,che=A-,phy=B+,geo=B"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""meanGrade": "A-""#))
        .stdout(predicate::str::contains(r#""courseCode": "EGERTON-AGR""#));
}

#[test]
fn incomplete_sheet_fails() {
    edupath()
        .args(["match", "--grades", "eng=A,mat=A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Incomplete grade sheet: 2 of 7 subjects graded"));
}
