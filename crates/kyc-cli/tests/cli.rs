use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn kyc() -> Command {
    Command::cargo_bin("kyc").unwrap()
}

#[test]
fn validate_accepts_well_formed_tax_id() {
    kyc()
        .args(["validate", "--type", "tax_id", "--number", "ABCDE1234F"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"success\": true"))
        .stdout(predicate::str::contains("\"confidence\": \"High\""));
}

#[test]
fn validate_reports_findings_without_failing() {
    kyc()
        .args([
            "validate",
            "--type",
            "pan",
            "--number",
            "XABCDE1234F",
            "--dob",
            "1990-08-15",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"success\": false"))
        .stdout(predicate::str::contains("invalid date of birth format"));
}

#[test]
fn validate_rejects_unknown_type() {
    kyc()
        .args(["validate", "--type", "passport", "--number", "X1"])
        .assert()
        .failure();
}

#[test]
fn validate_text_format() {
    kyc()
        .args([
            "validate",
            "--type",
            "national_id",
            "--number",
            "1234 5678 9012",
            "--format",
            "text",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: valid"))
        .stdout(predicate::str::contains("document_number: 1234 5678 9012"));
}

#[test]
fn extract_national_id_from_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("card.txt");
    fs::write(
        &input,
        "GOVERNMENT OF INDIA\nDOB: 15/08/1990\nMale\n1234 5678 9012\n",
    )
    .unwrap();

    kyc()
        .args(["extract", "--type", "national_id"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"document_number\": \"123456789012\""))
        .stdout(predicate::str::contains("\"gender\": \"Male\""));
}

#[test]
fn extract_detects_type_from_stdin() {
    kyc()
        .arg("extract")
        .write_stdin("INCOME TAX DEPARTMENT\nABCPE1234F\nName: Asha Rao\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"document_type\": \"tax_id\""))
        .stdout(predicate::str::contains("\"name\": \"Asha Rao\""));
}

#[test]
fn extract_fails_when_type_cannot_be_detected() {
    kyc()
        .arg("extract")
        .write_stdin("shopping list: eggs, milk")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not detect the document type"));
}

#[test]
fn extract_writes_output_file() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("result.json");

    kyc()
        .args(["extract", "--type", "dl", "-o"])
        .arg(&output)
        .write_stdin("")
        .assert()
        .success();

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("\"confidence\": \"Medium\""));
    assert!(written.contains("\"document_number\": null"));
}

#[test]
fn detect_prints_document_type() {
    kyc()
        .arg("detect")
        .write_stdin("Unique Identification Authority of India")
        .assert()
        .success()
        .stdout(predicate::str::diff("national_id\n"));

    kyc()
        .arg("detect")
        .write_stdin("nothing to see")
        .assert()
        .success()
        .stdout(predicate::str::diff("unknown\n"));
}

#[test]
fn batch_summarizes_text_files() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("good.txt"),
        "Driving Licence\nMH12 20110012345\nDOB: 21-06-1988\n",
    )
    .unwrap();
    fs::write(dir.path().join("bad.txt"), "Driving Licence\n").unwrap();
    let out_dir = dir.path().join("out");
    let pattern = dir.path().join("*.txt");

    kyc()
        .args(["batch", "--type", "driving_license", "--summary", "--output-dir"])
        .arg(&out_dir)
        .arg(pattern.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed 2 files"));

    let summary = fs::read_to_string(out_dir.join("summary.csv")).unwrap();
    assert!(summary.starts_with("file,document_type,success,confidence,errors"));
    assert!(summary.contains("good.txt,driving_license,true,High,"));
    assert!(summary.contains("bad.txt,driving_license,false,Medium,"));
    assert!(out_dir.join("good.txt.json").exists());
    assert!(out_dir.join("bad.txt.json").exists());
    assert!(!out_dir.join("good.json").exists());
}

#[test]
fn config_init_get_set_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    let path = path.to_str().unwrap();

    kyc().args(["--config", path, "config", "init"]).assert().success();

    kyc()
        .args(["--config", path, "config", "get", "ocr.recognition_model"])
        .assert()
        .success()
        .stdout(predicate::str::contains("latin_rec.onnx"));

    kyc()
        .args(["--config", path, "config", "set", "preprocessing.contrast", "1.5"])
        .assert()
        .success();

    kyc()
        .args(["--config", path, "config", "get", "preprocessing.contrast"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.5"));

    kyc()
        .args(["--config", path, "config", "set", "preprocessing.missing", "1"])
        .assert()
        .failure();
}

#[test]
fn scan_without_models_fails() {
    let dir = tempdir().unwrap();
    let image_path = dir.path().join("card.png");
    image::RgbImage::new(4, 4).save(&image_path).unwrap();

    kyc()
        .args(["scan", "--type", "tax_id", "--model-dir"])
        .arg(dir.path().join("no-models"))
        .arg(&image_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load OCR models"));
}
