mod common;
use basic::mach::Runtime;
use common::*;

fn direct(s: &str) -> String {
    exec(&mut Runtime::new(Some(1)), s)
}

#[test]
fn test_arithmetic() {
    assert_eq!(direct("PRINT 7 / 2: PRINT 7 MOD 3: PRINT -7 MOD 3"), "3.5\n1\n2\n");
    assert_eq!(direct("PRINT 1 / 4; 2.0"), "0.252.0\n");
    assert_eq!(direct("PRINT 9223372036854775807 + 1"), "OVERFLOW\n");
    assert_eq!(direct("PRINT 1 / 0"), "DIVISION BY ZERO\n");
    assert_eq!(direct("PRINT 5 MOD 0"), "DIVISION BY ZERO\n");
}

#[test]
fn test_strings_and_logic() {
    assert_eq!(direct("PRINT \"AB\" + \"CD\"; \"A\" < \"B\""), "ABCD1\n");
    assert_eq!(direct("PRINT \"A\" = 1"), "TYPE MISMATCH\n");
    assert_eq!(direct("PRINT NOT 0; 1 AND 0; 1 OR 0"), "101\n");
    assert_eq!(direct("PRINT 7 % 3; 1 != 2"), "11\n");
}

#[test]
fn test_int_abs_sqr() {
    assert_eq!(direct("PRINT INT(-2.7); INT(2.7)"), "-22\n");
    assert_eq!(direct("PRINT ABS(-3); SQR(16)"), "34.0\n");
    assert_eq!(direct("PRINT SQR(-1)"), "ILLEGAL FUNCTION CALL\n");
}

#[test]
fn test_string_functions() {
    assert_eq!(
        direct("PRINT LEFT$(\"HELLO\", 2); RIGHT$(\"HELLO\", 3); LEN(\"HELLO\")"),
        "HELLLO5\n"
    );
    assert_eq!(direct("PRINT MID$(\"HELLO\", 2, 3); MID$(\"HELLO\", 4)"), "ELLLO\n");
    assert_eq!(direct("PRINT CHR$(65); ASC(\"B\")"), "A66\n");
    assert_eq!(direct("PRINT STR$(12) + \"A\""), "12A\n");
    assert_eq!(direct("PRINT LEN(5)"), "TYPE MISMATCH\n");
}

#[test]
fn test_val() {
    assert_eq!(direct("PRINT VAL(\"3.0\") + 1"), "4\n");
    assert_eq!(direct("PRINT VAL(\"2.5\")"), "2.5\n");
    assert_eq!(direct("PRINT VAL(\"X\")"), "ILLEGAL FUNCTION CALL; INVALID NUMBER\n");
}

#[test]
fn test_wrong_argument_count() {
    assert_eq!(
        direct("PRINT LEN(\"A\", \"B\")"),
        "ILLEGAL FUNCTION CALL; WRONG NUMBER OF ARGUMENTS TO LEN\n"
    );
}

#[test]
fn test_rnd() {
    assert_eq!(
        direct("IF RND(1) < 1 AND RND(1) >= 0 THEN PRINT \"OK\""),
        "OK\n"
    );
    let a = exec(&mut Runtime::new(Some(42)), "PRINT RND(1)");
    let b = exec(&mut Runtime::new(Some(42)), "PRINT RND(1)");
    assert_eq!(a, b);
}
