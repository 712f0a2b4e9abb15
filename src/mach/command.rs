/// ## Statement verbs
///
/// The first word of a statement names one of these. Matching
/// ignores case.

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Command {
    Clear,
    Cls,
    Delete,
    Dim,
    End,
    Exit,
    For,
    Gosub,
    Goto,
    If,
    Input,
    Let,
    List,
    Load,
    New,
    Next,
    Print,
    Rem,
    Return,
    Run,
    Save,
}

/// Verbs that stop a running program when it reaches them.
const ILLEGAL_IN_PROGRAM: &[&str] = &[
    "add", "bye", "del", "delete", "exit", "goodbye", "list", "new", "renumber", "run",
];

impl Command {
    pub fn from_verb(verb: &str) -> Option<Command> {
        use Command::*;
        let command = match verb.to_ascii_lowercase().as_str() {
            "clear" => Clear,
            "cls" => Cls,
            "del" | "delete" => Delete,
            "dim" => Dim,
            "end" => End,
            "bye" | "exit" | "goodbye" => Exit,
            "for" => For,
            "gosub" => Gosub,
            "goto" => Goto,
            "if" => If,
            "input" => Input,
            "let" => Let,
            "list" => List,
            "load" => Load,
            "new" => New,
            "next" => Next,
            "print" => Print,
            "rem" => Rem,
            "return" => Return,
            "run" => Run,
            "save" => Save,
            _ => return None,
        };
        Some(command)
    }

    pub fn is_illegal_in_program(verb: &str) -> bool {
        ILLEGAL_IN_PROGRAM
            .iter()
            .any(|illegal| illegal.eq_ignore_ascii_case(verb))
    }
}
