mod common;
use common::*;

#[test]
fn test_array_basics() {
    let mut r = program(&[
        "10 DIM A$(100), X(10,10)",
        "20 A$(42)=\"THE ANSWER\"",
        "30 X(4,2)=2.5",
        "40 PRINT A$(42) & \"!\"; \" \"; X(4,2)",
        "run",
    ]);
    assert_eq!(exec(&mut r), "THE ANSWER! 2.5\n");
}

#[test]
fn test_round_trip_and_bounds() {
    let mut r = program(&["DIM A(3)", "A(1) = 7"]);
    r.enter("print A(1); A(0)");
    assert_eq!(exec(&mut r), "70\n");
    r.enter("print A(3)");
    assert_eq!(exec(&mut r), "SUBSCRIPT OUT OF RANGE\n");
    r.enter("A(3) = 1");
    assert_eq!(exec(&mut r), "SUBSCRIPT OUT OF RANGE\n");
}

#[test]
fn test_nan_subscript() {
    let mut r = program(&["DIM A(3)", "A(0) = 7"]);
    r.enter("print A(0/0)");
    assert_eq!(exec(&mut r), "SUBSCRIPT OUT OF RANGE\n");
    r.enter("A(0/0) = 1");
    assert_eq!(exec(&mut r), "SUBSCRIPT OUT OF RANGE\n");
    r.enter("print A(0)");
    assert_eq!(exec(&mut r), "7\n");
}

#[test]
fn test_redimension() {
    let mut r = program(&["DIM A(3)", "DIM A(5)"]);
    assert_eq!(exec(&mut r), "REDIMENSIONED ARRAY; A\n");
    r.enter("A(4) = 1");
    assert_eq!(exec(&mut r), "SUBSCRIPT OUT OF RANGE\n");
}

#[test]
fn test_index_count_must_match() {
    let mut r = program(&["DIM B#(2, 2)", "B#(1) = 1"]);
    assert_eq!(
        exec(&mut r),
        "SUBSCRIPT OUT OF RANGE; WRONG NUMBER OF SUBSCRIPTS\n"
    );
}

#[test]
fn test_integer_array_truncates() {
    let mut r = program(&["DIM B#(2, 2)", "B#(1.7, 1) = 9.9", "print B#(1, 1)"]);
    assert_eq!(exec(&mut r), "9\n");
}

#[test]
fn test_undimensioned() {
    let mut r = program(&["C(1) = 1"]);
    assert_eq!(exec(&mut r), "INVALID VARIABLE; C IS NOT AN ARRAY\n");
}

#[test]
fn test_for_over_array() {
    let mut r = program(&[
        "10 dim S#(5)",
        "20 for i = 0 to 4",
        "30 S#(i) = i * i",
        "40 next i",
        "50 print S#(4); S#(2)",
        "run",
    ]);
    assert_eq!(exec(&mut r), "164\n");
}
