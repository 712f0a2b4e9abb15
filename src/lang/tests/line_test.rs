use super::*;

#[test]
fn test_program_line() {
    let l = Line::new("10 print \"a  b\"; X");
    assert_eq!(l.number(), Some(10));
    assert_eq!(l.words(), ["print", "\"a  b\";", "X"]);
    assert_eq!(l.to_string(), "10 print \"a  b\"; X");
}

#[test]
fn test_direct_line() {
    let l = Line::new("  LIST  ");
    assert!(l.is_direct());
    assert_eq!(l.verb(), Some("list".to_string()));
    assert!(l.arguments().is_empty());
}

#[test]
fn test_bare_number() {
    let l = Line::new("20");
    assert_eq!(l.number(), Some(20));
    assert!(l.is_empty());
}

#[test]
fn test_number_out_of_range() {
    let l = Line::new("4294967295 print");
    assert!(l.is_direct());
    assert_eq!(l.words().len(), 2);
}

#[test]
fn test_crlf() {
    let l = Line::new("run\r\n");
    assert_eq!(l.words(), ["run"]);
}
