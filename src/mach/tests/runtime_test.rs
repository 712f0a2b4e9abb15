use super::*;

fn program(lines: &[&str]) -> Runtime {
    let mut r = Runtime::default();
    for line in lines {
        r.enter(line);
    }
    r
}

#[test]
fn test_direct_print() {
    let mut r = Runtime::default();
    r.enter("print 3 + 4 * 2");
    assert_eq!(run(&mut r), "11\n");
}

#[test]
fn test_print_concat() {
    let mut r = program(&["A$ = \"ab\"", "let B$ = \"cd\""]);
    r.enter("print A$; B$");
    assert_eq!(run(&mut r), "abcd\n");
    r.enter("print A$;");
    assert_eq!(run(&mut r), "ab");
}

#[test]
fn test_run_program() {
    let mut r = program(&["20 print \"world\"", "10 print \"hello\"", "run"]);
    assert_eq!(run(&mut r), "hello\nworld\n");
}

#[test]
fn test_breaking_out_of_loop_with_goto() {
    let mut r = program(&[
        "10 for y = 1 to 2",
        "20 for x = 8 to 9",
        "30 print y; \" \"; x",
        "40 goto 60",
        "50 next x",
        "60 next y",
        "run",
    ]);
    assert_eq!(run(&mut r), "1 8\n2 8\n");
}

#[test]
fn test_error_ends_program() {
    let mut r = program(&["10 print 1", "20 goto 99", "30 print 3", "run"]);
    assert_eq!(run(&mut r), "1\nUNDEFINED LINE IN 20; 99\n");
    assert!(!r.is_running());
}

#[test]
fn test_illegal_in_program() {
    let mut r = program(&["10 print 1", "20 list", "run"]);
    assert_eq!(run(&mut r), "1\nILLEGAL IN PROGRAM IN 20; LIST\n");
}

#[test]
fn test_runaway_program() {
    let mut r = program(&["10 goto 10", "run"]);
    assert_eq!(run_cycles(&mut r, 100), "\n100 Execution cycles exceeded.\n");
    r.interrupt();
    assert_eq!(run(&mut r), "BREAK IN 10\n");
}

#[test]
fn test_input_resumes_program() {
    let mut r = program(&["10 input \"name\"; N$", "20 print \"hi \"; N$", "run"]);
    assert_eq!(run(&mut r), "name? ");
    r.enter("Ada");
    assert_eq!(run(&mut r), "hi Ada\n");
}

#[test]
fn test_input_redo() {
    let mut r = program(&["input A#"]);
    assert_eq!(run(&mut r), "? ");
    r.enter("lots");
    assert_eq!(run(&mut r), "TYPE MISMATCH; NUMBER EXPECTED\n? ");
    r.enter("7.9");
    r.enter("print A#");
    assert_eq!(run(&mut r), "7\n");
}

#[test]
fn test_set_listing_runs_after_load() {
    let mut r = Runtime::default();
    r.enter("run \"hello.bas\"");
    assert_eq!(r.execute(10), Event::Load("hello.bas".to_string()));
    r.set_listing(listing(&["10 print \"loaded\""]));
    assert_eq!(run(&mut r), "loaded\n");
}

#[test]
fn test_save_event() {
    let mut r = program(&["10 rem", "save \"out.bas\""]);
    assert_eq!(r.execute(10), Event::Save("out.bas".to_string()));
    assert_eq!(r.get_listing().len(), 1);
}

#[test]
fn test_bare_number_deletes() {
    let mut r = program(&["10 print 1", "20 print 2", "10"]);
    r.enter("list");
    assert_eq!(run(&mut r), "20 print 2\n");
}

#[test]
fn test_if_then_exit() {
    let mut r = Runtime::default();
    r.enter("if 1 then bye");
    assert_eq!(r.execute(10), Event::Exit);
}

#[test]
fn test_for_next_on_last_line() {
    let mut r = program(&["10 for i = 1 to 3", "20 print i", "30 next i", "run"]);
    assert_eq!(run(&mut r), "1\n2\n3\n");
}
