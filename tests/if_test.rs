mod common;
use common::*;

#[test]
fn test_if_then_statement() {
    assert_eq!(run(&["10 IF 1 THEN PRINT \"ONE\""]), "ONE\n");
}

#[test]
fn test_if_then_else_statement() {
    assert_eq!(
        run(&["10 IF 0 THEN PRINT \"ONE\" ELSE PRINT \"TWO\""]),
        "TWO\n"
    );
    assert_eq!(
        run(&["10 IF 1 THEN PRINT \"ONE\" ELSE PRINT \"TWO\""]),
        "ONE\n"
    );
}

#[test]
fn test_if_then_line() {
    let out = run(&["10 IF 1 THEN 30", "20 PRINT \"NO\"", "30 PRINT \"YES\""]);
    assert_eq!(out, "YES\n");
}

#[test]
fn test_if_else_line() {
    let out = run(&[
        "10 IF 0 THEN 30 ELSE 40",
        "20 PRINT \"NO\"",
        "30 PRINT \"THEN\"",
        "40 PRINT \"ELSE\"",
    ]);
    assert_eq!(out, "ELSE\n");
}

#[test]
fn test_if_false_ends_line() {
    let out = run(&["10 IF 0 THEN PRINT \"A\": PRINT \"B\"", "20 PRINT \"C\""]);
    assert_eq!(out, "C\n");
}

#[test]
fn test_if_branch_runs_until_else() {
    let out = run(&["10 IF 1 THEN PRINT \"A\";: PRINT \"B\" ELSE PRINT \"C\""]);
    assert_eq!(out, "AB\n");
    let out = run(&["10 IF 0 THEN PRINT \"A\" ELSE PRINT \"C\";: PRINT \"D\""]);
    assert_eq!(out, "CD\n");
}

#[test]
fn test_if_string_condition() {
    assert_eq!(
        run(&["10 IF \"\" THEN PRINT \"T\" ELSE PRINT \"F\""]),
        "F\n"
    );
}

#[test]
fn test_if_goto_in_branch() {
    let out = run(&["10 IF 1 THEN GOTO 30", "20 PRINT \"NO\"", "30 PRINT \"YES\""]);
    assert_eq!(out, "YES\n");
}

#[test]
fn test_if_missing_then() {
    assert_eq!(
        run(&["10 IF 1 PRINT"]),
        "SYNTAX ERROR; EXPECTED THEN in line 10\n"
    );
}

#[test]
fn test_if_relational_operators() {
    let out = run(&[
        "10 A = 5",
        "20 IF A >= 5 AND A <= 5 THEN PRINT \"EQ\"",
        "30 IF A <> 4 THEN PRINT \"NE\"",
    ]);
    assert_eq!(out, "EQ\nNE\n");
}
