#[macro_use] extern crate pretty_assertions;

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempdir::TempDir;

fn write_file(dir: &TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, text).unwrap();
    path
}

fn matkit<I, S>(args: I) -> Output
where I: IntoIterator<Item = S>, S: AsRef<std::ffi::OsStr>,
{
    Command::new(env!("CARGO_BIN_EXE_matkit")).args(args).output().unwrap()
}

fn stdout(output: &Output) -> String {
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn path(p: &Path) -> &str { p.to_str().unwrap() }

#[test]
fn reduce_file() {
    let dir = TempDir::new("matkit-cli-reduce").unwrap();
    let a = write_file(&dir, "a.txt", "# fractional pivots\n4 0 1\n-2 1 0\n-2 0 1\n");
    let out = matkit(&["reduce", path(&a)]);
    assert_eq!(stdout(&out), "1\t0\t0.25\n0\t1\t0.5\n0\t0\t1\n");
}

#[test]
fn eliminate_script_with_errors() {
    let dir = TempDir::new("matkit-cli-eliminate").unwrap();
    let a = write_file(&dir, "a.txt", "1, 2\n3, 4\n");
    let script = write_file(&dir, "script.txt", "combine 1 2 -3\nswap 2 2\nscale 2 -1/2\nquit\n");
    let config = write_file(&dir, "config.yaml", "display:\n  echo: false\n");

    let out = matkit(&["eliminate", path(&a), path(&script), "-c", path(&config)]);
    assert_eq!(stdout(&out), "error: cannot exchange row 2 with itself\n");

    let script = write_file(&dir, "print.txt", "combine 1 2 -3\nscale 2 -1/2\nprint\n");
    let out = matkit(&["eliminate", path(&a), path(&script), "-c", path(&config)]);
    assert_eq!(stdout(&out), "1\t2\n0\t1\n");
}

#[test]
fn failure_exits_nonzero() {
    let dir = TempDir::new("matkit-cli-failure").unwrap();
    let a = write_file(&dir, "a.txt", "1 2\n");
    let b = write_file(&dir, "b.txt", "1 2\n");
    let out = matkit(&["multiply", path(&a), path(&b)]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("invalid dimensions for A: 1x2 B: 1x2"), "stderr: {}", stderr);
}
