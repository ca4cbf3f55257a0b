// crates/microcipher-cli/tests/cipher_cli.rs

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_microcipher-cli"))
}

fn run_ok(cmd: &mut Command) -> Output {
    let out = cmd.output().expect("spawn command");
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    out
}

fn stdout_of(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn cipher_text_with_default_key() {
    let out = run_ok(bin().args(["cipher", "--text", "HELLO WORLD"]));
    assert_eq!(stdout_of(&out), "SXSUT NXWEO\n");
}

#[test]
fn cipher_text_with_historical_wheels() {
    let out = run_ok(bin().args([
        "cipher",
        "--wheels",
        "historical",
        "--fast",
        "3",
        "--medium",
        "14",
        "--slow",
        "9",
        "--text",
        "ATTACK AT DAWN",
    ]));
    assert_eq!(stdout_of(&out), "QPKTTI TL KZTA\n");
}

#[test]
fn file_roundtrip_streams_across_lines() {
    let dir = tempfile::tempdir().expect("tempdir");
    let plain = dir.path().join("plain.txt");
    let cipher = dir.path().join("cipher.txt");
    let back = dir.path().join("back.txt");

    fs::write(&plain, "MEET ME AT NOON\nBRING THE MAPS\n").expect("write plain");

    for (src, dst) in [(&plain, &cipher), (&cipher, &back)] {
        let out = run_ok(bin().args([
            "cipher",
            "--wheels",
            "historical",
            "--fast",
            "7",
            "--medium",
            "19",
            "--slow",
            "2",
            "--in",
            src.to_str().unwrap(),
            "--out",
            dst.to_str().unwrap(),
        ]));
        assert!(String::from_utf8_lossy(&out.stderr).contains("cipher ok:"));
    }

    let c = fs::read_to_string(&cipher).expect("read cipher");
    assert_ne!(c, "MEET ME AT NOON\nBRING THE MAPS\n");
    assert_eq!(
        fs::read_to_string(&back).expect("read back"),
        "MEET ME AT NOON\nBRING THE MAPS\n"
    );
}

#[test]
fn fresh_rewinds_per_line() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.txt");
    fs::write(&input, "AAAA\nAAAA\n").expect("write input");

    let streamed = stdout_of(&run_ok(bin().args(["cipher", "--in", input.to_str().unwrap()])));
    let lines: Vec<&str> = streamed.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_ne!(lines[0], lines[1]);

    let fresh = stdout_of(&run_ok(bin().args([
        "cipher",
        "--fresh",
        "--in",
        input.to_str().unwrap(),
    ])));
    let lines: Vec<&str> = fresh.lines().collect();
    assert_eq!(lines, vec!["ZBDF", "ZBDF"]);
}

#[test]
fn cipher_reads_stdin() {
    let mut child = bin()
        .args(["cipher"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"HELLO WORLD\n")
        .expect("write stdin");
    let out = child.wait_with_output().expect("wait");
    assert!(out.status.success());
    assert_eq!(stdout_of(&out), "SXSUT NXWEO\n");
}

#[test]
fn lowercase_input_fails_without_output() {
    let out = bin()
        .args(["cipher", "--text", "hello"])
        .output()
        .expect("spawn");
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("invalid character"));
}

#[test]
fn out_of_range_setting_is_refused() {
    let out = bin()
        .args(["cipher", "--fast", "27", "--text", "A"])
        .output()
        .expect("spawn");
    assert!(!out.status.success());
}

#[test]
fn key_encode_then_cipher_with_key() {
    let enc = run_ok(bin().args([
        "key", "encode", "--wheels", "plain", "--fast", "5", "--medium", "17", "--slow", "22",
    ]));
    let key = stdout_of(&enc).trim().to_string();
    assert!(key.starts_with("MCK1:P-05-17-22-"), "{key}");

    let out = run_ok(bin().args(["cipher", "--key", &key, "--text", "ATTACK AT DAWN"]));
    assert_eq!(stdout_of(&out), "DMOJJD PY QVBM\n");

    let dec = run_ok(bin().args(["key", "decode", "--key", &key]));
    assert_eq!(stdout_of(&dec), "wheels=plain fast=5 medium=17 slow=22\n");
}

#[test]
fn key_file_roundtrip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let kf = dir.path().join("k.mck");

    run_ok(bin().args([
        "key",
        "encode",
        "--wheels",
        "historical",
        "--out",
        kf.to_str().unwrap(),
    ]));
    let out = run_ok(bin().args([
        "cipher",
        "--key-file",
        kf.to_str().unwrap(),
        "--text",
        "HELLO WORLD",
    ]));
    assert_eq!(stdout_of(&out), "VSQHP AZQKF\n");
}

#[test]
fn tables_lists_four_wirings_and_reflection() {
    let out = run_ok(bin().args(["tables", "--wheels", "historical"]));
    let s = stdout_of(&out);
    assert!(s.contains("fast      EKMFLGDQVZNTOWYHXUSPAIBRCJ"));
    assert!(s.contains("reflector YRUHQSLDPXNGOKMIEBFZCWVJAT"));
    assert_eq!(s.lines().count(), 5);
}

#[test]
fn trace_prints_one_row_per_character() {
    let out = run_ok(bin().args(["trace", "--text", "A A"]));
    let s = stdout_of(&out);
    let rows: Vec<&str> = s.lines().collect();
    assert_eq!(rows.len(), 4);
    assert!(rows[1].contains(" A   Z "), "{}", rows[1]);
}
