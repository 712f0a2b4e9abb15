mod common;
use common::*;

#[test]
fn test_if_then() {
    let mut r = program(&["if 1 then print \"one\""]);
    assert_eq!(exec(&mut r), "one\n");
    r.enter("if 0 then print \"zero\"");
    assert_eq!(exec(&mut r), "");
}

#[test]
fn test_if_comparison() {
    let mut r = program(&["A = 5", "IF A > 3 THEN PRINT \"BIG\"", "IF A < 3 THEN PRINT \"SMALL\""]);
    assert_eq!(exec(&mut r), "BIG\n");
}

#[test]
fn test_if_then_line_number() {
    let mut r = program(&[
        "10 A = 5",
        "20 IF A = 5 THEN 40",
        "30 PRINT \"SKIPPED\"",
        "40 PRINT \"LANDED\"",
        "run",
    ]);
    assert_eq!(exec(&mut r), "LANDED\n");
}

#[test]
fn test_if_then_assignment() {
    let mut r = program(&["A = 2", "if A then B = A * 2", "print B"]);
    assert_eq!(exec(&mut r), "4\n");
}

#[test]
fn test_if_then_goto_and_end() {
    let mut r = program(&[
        "10 for i = 1 to 10",
        "20 if i = 3 then end",
        "30 print i",
        "40 next i",
        "run",
    ]);
    assert_eq!(exec(&mut r), "1\n2\n");
}

#[test]
fn test_if_boolean() {
    let mut r = program(&["if true = not false then print \"yes\""]);
    assert_eq!(exec(&mut r), "yes\n");
}

#[test]
fn test_if_missing_then() {
    let mut r = program(&["if 1 print 2"]);
    assert_eq!(exec(&mut r), "SYNTAX ERROR; EXPECTED THEN\n");
}

#[test]
fn test_if_string_condition() {
    let mut r = program(&["if \"a\" then print 1"]);
    assert_eq!(exec(&mut r), "TYPE MISMATCH\n");
}

#[test]
fn test_if_list_is_illegal_in_program() {
    let mut r = program(&["10 if 1 then list", "run"]);
    assert_eq!(exec(&mut r), "ILLEGAL IN PROGRAM IN 10; LIST\n");
}

#[test]
fn test_if_run_is_illegal_in_program() {
    let mut r = program(&["10 if 1 then run", "run"]);
    assert_eq!(exec(&mut r), "ILLEGAL IN PROGRAM IN 10; RUN\n");
}

#[test]
fn test_nested_if() {
    let mut r = program(&[
        "10 if 1 then if 0 then print \"no\"",
        "20 if 1 then if 2 then print \"yes\"",
        "run",
    ]);
    assert_eq!(exec(&mut r), "yes\n");
}

#[test]
fn test_if_then_direct_list() {
    let mut r = program(&["10 print 1", "if 1 then list"]);
    assert_eq!(exec(&mut r), "10 print 1\n");
}
