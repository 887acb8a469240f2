mod common;
use basic::mach::Runtime;
use common::*;

#[test]
fn test_gosub_return_is_lifo() {
    let out = run(&[
        "10 GOSUB 100",
        "20 PRINT \"B\"",
        "30 END",
        "100 PRINT \"A\"",
        "110 GOSUB 200",
        "120 RETURN",
        "200 PRINT \"C\"",
        "210 RETURN",
    ]);
    assert_eq!(out, "A\nC\nB\n");
}

#[test]
fn test_return_without_gosub() {
    assert_eq!(run(&["10 RETURN"]), "RETURN WITHOUT GOSUB in line 10\n");
}

#[test]
fn test_goto_undefined_line() {
    assert_eq!(
        run(&["10 GOTO 50"]),
        "UNDEFINED LINE; NO LINE 50 in line 10\n"
    );
}

#[test]
fn test_on_goto() {
    let out = run(&[
        "10 FOR N = 0 TO 3",
        "20 ON N GOTO 100, 200",
        "30 PRINT \"FALL\";",
        "40 GOTO 300",
        "100 PRINT \"ONE\";",
        "110 GOTO 300",
        "200 PRINT \"TWO\";",
        "300 NEXT N",
    ]);
    assert_eq!(out, "FALLONETWOFALL");
}

#[test]
fn test_on_gosub() {
    let out = run(&[
        "10 ON 2 GOSUB 100, 200",
        "20 PRINT \"BACK\"",
        "30 END",
        "100 PRINT \"ONE\"",
        "110 RETURN",
        "200 PRINT \"TWO\"",
        "210 RETURN",
    ]);
    assert_eq!(out, "TWO\nBACK\n");
}

#[test]
fn test_on_negative() {
    assert_eq!(
        run(&["10 ON -1 GOTO 10"]),
        "ILLEGAL FUNCTION CALL; NEGATIVE ON SELECTOR in line 10\n"
    );
}

#[test]
fn test_colon_separated_statements() {
    assert_eq!(run(&["10 A = 1: B = 2: PRINT A + B"]), "3\n");
    assert_eq!(run(&["10 LET A = 4:: PRINT A"]), "4\n");
}

#[test]
fn test_assignment_suffix_mismatch() {
    assert_eq!(
        run(&["10 A$ = 5"]),
        "SYNTAX ERROR; ATTEMPT TO ASSIGN NUMBER TO STRING VARIABLE in line 10\n"
    );
    assert_eq!(
        run(&["10 A = \"X\""]),
        "SYNTAX ERROR; ATTEMPT TO ASSIGN STRING TO NUMERIC VARIABLE in line 10\n"
    );
}

#[test]
fn test_stop_and_end() {
    assert_eq!(run(&["10 PRINT 1", "20 STOP", "30 PRINT 2"]), "1\n");
    assert_eq!(run(&["10 PRINT 1", "20 END", "30 PRINT 2"]), "1\n");
}

#[test]
fn test_rem() {
    assert_eq!(run(&["10 REM HELLO: PRINT 1", "20 PRINT 2"]), "2\n");
}

#[test]
fn test_trailing_tokens() {
    assert_eq!(
        run(&["10 PRINT 1 2"]),
        "1\nSYNTAX ERROR; UNEXPECTED TOKEN in line 10\n"
    );
}

#[test]
fn test_runtime_error_has_line() {
    assert_eq!(run(&["10 PRINT 1 / 0"]), "DIVISION BY ZERO in line 10\n");
    assert_eq!(
        run(&["10 IF 1 THEN PRINT 1 / 0"]),
        "DIVISION BY ZERO in line 10\n"
    );
}

#[test]
fn test_commands_not_allowed_in_program() {
    assert_eq!(
        run(&["10 RUN"]),
        "SYNTAX ERROR; RUN IS NOT ALLOWED IN A PROGRAM in line 10\n"
    );
}

#[test]
fn test_empty_program() {
    let mut r = Runtime::default();
    assert_eq!(exec(&mut r, "RUN"), "UNDEFINED LINE; NO PROGRAM\n");
}

#[test]
fn test_variables_cleared_by_run() {
    let mut r = Runtime::default();
    exec(&mut r, "10 PRINT A");
    exec(&mut r, "20 A = 5");
    assert_eq!(exec(&mut r, "RUN"), "0\n");
    assert_eq!(exec(&mut r, "RUN"), "0\n");
}

#[test]
fn test_gosub_from_last_line() {
    assert_eq!(
        run(&["10 GOSUB 10"]),
        "UNDEFINED LINE; GOSUB FROM LAST LINE in line 10\n"
    );
}

#[test]
fn test_on_not_a_number() {
    assert_eq!(
        run(&[
            "10 A = VAL(\"1E308\") * 10",
            "20 B = A - A",
            "30 ON B GOTO 40",
            "40 PRINT \"OK\"",
        ]),
        "ILLEGAL FUNCTION CALL; INVALID ON SELECTOR in line 30\n"
    );
}
