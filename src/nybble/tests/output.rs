use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

const DATA: [u8; 3] = [0xFD, 0x8A, 0xF7];

// Runs the binary with `DATA` piped to stdin.
fn run(args: &[&str]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_nybble"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child.stdin.take().unwrap().write_all(&DATA).unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn decode_prints_only_records() {
    let out = run(&["decode", "-", "-l", "flag:1,count:4,kind:7", "-vv"]);
    assert!(out.status.success());

    let records: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(
        records,
        serde_json::json!([
            { "flag": 1, "count": 14, "kind": 87 },
            { "flag": 0, "count": 12, "kind": 123 },
        ])
    );

    // Logging goes to stderr.
    assert!(!out.stderr.is_empty());
}

#[test]
fn read_prints_only_values() {
    let out = run(&["read", "-", "-w", "1,4,7,12", "-vv"]);
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout, "1\n14\n87\n3960\n");
}
