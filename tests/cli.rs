mod common;

use std::path::PathBuf;
use std::process::Command;

use p256_precomputed::table::{TABLE_SIZE, encode};

const BIN: &str = env!("CARGO_BIN_EXE_gen-p256-table");

/// A per-test output path under the system temp dir.
fn output_path(test: &str) -> PathBuf {
    std::env::temp_dir().join(format!("gen-p256-table-{}-{}", std::process::id(), test))
}

#[test]
fn writes_binary_table() {
    let path = output_path("binary");

    let status = Command::new(BIN)
        .args(["--format", "binary", "-o"])
        .arg(&path)
        .status()
        .unwrap();
    assert!(status.success());

    let written = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(written.len(), TABLE_SIZE);
    assert_eq!(written, encode(common::standard_table()));
}

#[test]
fn writes_rust_source_by_default() {
    let path = output_path("rust");

    let output = Command::new(BIN)
        .args(["-n", "TABLE", "-o"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Wrote"));

    let source = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(source.starts_with("// Generated by gen-p256-table. DO NOT EDIT.\n"));
    assert!(source.contains("pub const TABLE: [u8; 88064] = [\n    0x3c, 0x14, 0xa9, 0x18,"));
    assert!(source.ends_with("];\n"));
}

#[test]
fn rejects_invalid_name() {
    let path = output_path("bad-name");

    let output = Command::new(BIN)
        .args(["-n", "fn", "-o"])
        .arg(&path)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("error:"));
    assert!(!path.exists());
}

#[test]
fn requires_output_path() {
    let output = Command::new(BIN).output().unwrap();

    assert!(!output.status.success());
}
