mod common;
use basic::mach::Listing;
use common::*;

#[test]
fn test_listing_is_sorted() {
    let mut r = program(&["30 print 3", "10 print 1", "50 print 5", "20 print 2"]);
    r.enter("list");
    assert_eq!(
        exec(&mut r),
        "10 print 1\n20 print 2\n30 print 3\n50 print 5\n"
    );
}

#[test]
fn test_replace_line() {
    let mut r = program(&["10 print 1", "20 print 2", "10 print \"one\""]);
    r.enter("list");
    assert_eq!(exec(&mut r), "10 print \"one\"\n20 print 2\n");
    assert_eq!(r.get_listing().len(), 2);
}

#[test]
fn test_list_lines() {
    let mut r = program(&["10 print 1", "20 print 2", "30 print 3"]);
    r.enter("list 30, 10");
    assert_eq!(exec(&mut r), "30 print 3\n10 print 1\n");
    r.enter("list 15");
    assert_eq!(exec(&mut r), "UNDEFINED LINE; 15\n");
}

#[test]
fn test_delete() {
    let mut r = program(&["10 print 1", "20 print 2", "30 print 3"]);
    r.enter("del 20");
    r.enter("DELETE 30");
    r.enter("list");
    assert_eq!(exec(&mut r), "10 print 1\n");
    r.enter("delete 20");
    assert_eq!(exec(&mut r), "UNDEFINED LINE; 20\n");
}

#[test]
fn test_listing_round_trip() {
    let r = program(&[
        "20 print \"a  b\"; X",
        "10 let X = 1",
        "30 if X > 0 then goto 10",
    ]);
    let mut copy = Listing::default();
    for line in r.get_listing().lines() {
        copy.load_str(&line.to_string()).unwrap();
    }
    let original: Vec<String> = r.get_listing().lines().map(|l| l.to_string()).collect();
    let reloaded: Vec<String> = copy.lines().map(|l| l.to_string()).collect();
    assert_eq!(original, reloaded);
}

#[test]
fn test_new_keeps_variables() {
    let mut r = program(&["10 print 1", "A = 5", "new", "list", "print A"]);
    assert_eq!(exec(&mut r), "5\n");
    r.enter("clear");
    r.enter("print A");
    assert_eq!(exec(&mut r), "INVALID VARIABLE; A NOT SET\n");
}
