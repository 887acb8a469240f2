mod common;
use common::*;
use std::path::PathBuf;

fn temp(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("basic-{}-{}.txt", name, std::process::id()));
    let _ = std::fs::remove_file(&path);
    path
}

#[test]
fn test_write_then_read() {
    let path = temp("roundtrip");
    let p = path.display();
    let out = run(&[
        &format!("10 OPEN \"{}\" FOR OUTPUT AS #1", p),
        "20 PRINT #1, \"HELLO\"; 42",
        "30 PRINT #1, \"SECOND\"",
        "40 CLOSE #1",
        &format!("50 OPEN \"{}\" FOR INPUT AS #2", p),
        "60 INPUT #2, A$",
        "70 INPUT #2, B$",
        "80 PRINT A$; \"/\"; B$",
        "90 CLOSE",
    ]);
    assert_eq!(out, "HELLO42/SECOND\n");
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_append() {
    let path = temp("append");
    let p = path.display();
    let out = run(&[
        &format!("10 OPEN \"{}\" FOR OUTPUT AS #1", p),
        "20 PRINT #1, \"A\"",
        "30 CLOSE #1",
        &format!("40 OPEN \"{}\" FOR APPEND AS #1", p),
        "50 PRINT #1, \"B\"",
        "60 CLOSE #1",
    ]);
    assert_eq!(out, "");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "A\nB\n");
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_files_closed_at_end() {
    let path = temp("stop");
    let p = path.display();
    run(&[
        &format!("10 OPEN \"{}\" FOR OUTPUT AS #1", p),
        "20 PRINT #1, \"X\"",
        "30 STOP",
    ]);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "X\n");
    run(&[
        &format!("10 OPEN \"{}\" FOR OUTPUT AS #1", p),
        "20 PRINT #1, \"Y\"",
    ]);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "Y\n");
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_numeric_input_from_file() {
    let path = temp("numeric");
    std::fs::write(&path, "12\n").unwrap();
    let out = run(&[
        &format!("10 OPEN \"{}\" FOR INPUT AS #1", path.display()),
        "20 INPUT #1, N",
        "30 PRINT N + 1",
    ]);
    assert_eq!(out, "13\n");
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_file_errors() {
    let path = temp("errors");
    std::fs::write(&path, "").unwrap();
    let p = path.display();
    assert_eq!(
        run(&[&format!("10 OPEN \"{}\" FOR INPUT AS #1", p), "20 INPUT #1, A$"]),
        "INPUT PAST END in line 20\n"
    );
    assert_eq!(
        run(&[&format!("10 OPEN \"{}\" FOR INPUT AS #1", p), "20 PRINT #1, 1"]),
        "BAD FILE MODE in line 20\n"
    );
    assert_eq!(
        run(&[
            &format!("10 OPEN \"{}\" FOR INPUT AS #1", p),
            &format!("20 OPEN \"{}\" FOR INPUT AS #1", p),
        ]),
        "FILE ALREADY OPEN in line 20\n"
    );
    let _ = std::fs::remove_file(&path);
    let missing = temp("missing");
    assert!(run(&[&format!("10 OPEN \"{}\" FOR INPUT AS #1", missing.display())])
        .starts_with("FILE NOT FOUND"));
}
