use std::rc::Rc;

/// One lexeme of a statement. Immutable once produced.
#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub lexeme: Rc<str>,
    pub kind: TokenKind,
    pub literal: Option<Literal>,
}

impl Token {
    pub fn new(lexeme: &str, kind: TokenKind) -> Token {
        Token {
            lexeme: lexeme.into(),
            kind,
            literal: None,
        }
    }

    pub fn with_literal(lexeme: &str, kind: TokenKind, literal: Literal) -> Token {
        Token {
            lexeme: lexeme.into(),
            kind,
            literal: Some(literal),
        }
    }

    pub fn is_variable(&self) -> bool {
        use TokenKind::*;
        matches!(
            self.kind,
            StringVariable | IntegerVariable | DoubleVariable
        )
    }

    pub fn operator(&self) -> Option<Operator> {
        use TokenKind::*;
        match self.kind {
            Plus => Some(Operator::Plus),
            Minus => Some(Operator::Minus),
            Asterisk => Some(Operator::Multiply),
            Slash => Some(Operator::Divide),
            Ampersand => Some(Operator::Concat),
            Equal => Some(Operator::Equal),
            NotEqual => Some(Operator::NotEqual),
            Less => Some(Operator::Less),
            LessEqual => Some(Operator::LessEqual),
            Greater => Some(Operator::Greater),
            GreaterEqual => Some(Operator::GreaterEqual),
            Not => Some(Operator::Not),
            _ => Option::None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TokenKind {
    None,
    Number,
    String,
    True,
    False,
    StringVariable,
    IntegerVariable,
    DoubleVariable,
    CommandName,
    Then,
    To,
    Step,
    Not,
    LParen,
    RParen,
    Plus,
    Minus,
    Asterisk,
    Slash,
    Ampersand,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Semicolon,
    Comma,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Number(f64),
    String(Rc<str>),
    Boolean(bool),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Literal::*;
        match self {
            Number(n) => write!(f, "{}", n),
            String(s) => write!(f, "{}", s),
            Boolean(b) => write!(f, "{}", b),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Multiply,
    Divide,
    Plus,
    Minus,
    Concat,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Not,
}

impl Operator {
    pub fn is_comparison(&self) -> bool {
        use Operator::*;
        match self {
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => true,
            Multiply | Divide | Plus | Minus | Concat | Not => false,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Concat => write!(f, "&"),
            Equal => write!(f, "="),
            NotEqual => write!(f, "<>"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
            Not => write!(f, "NOT"),
        }
    }
}

/// Words the lexer recognizes ahead of variable names.
/// Matching ignores ASCII case; the lexeme keeps what was typed.
///
/// Every statement verb is listed, so any statement may follow `THEN`.
/// Keywords fold case to agree with the statement dispatcher; variable
/// names keep theirs.
pub fn keyword(s: &str) -> Option<TokenKind> {
    const KEYWORDS: &[(&str, TokenKind)] = &[
        ("then", TokenKind::Then),
        ("to", TokenKind::To),
        ("step", TokenKind::Step),
        ("not", TokenKind::Not),
        ("add", TokenKind::CommandName),
        ("bye", TokenKind::CommandName),
        ("del", TokenKind::CommandName),
        ("delete", TokenKind::CommandName),
        ("exit", TokenKind::CommandName),
        ("for", TokenKind::CommandName),
        ("goodbye", TokenKind::CommandName),
        ("if", TokenKind::CommandName),
        ("list", TokenKind::CommandName),
        ("load", TokenKind::CommandName),
        ("new", TokenKind::CommandName),
        ("renumber", TokenKind::CommandName),
        ("run", TokenKind::CommandName),
        ("save", TokenKind::CommandName),
        ("goto", TokenKind::CommandName),
        ("gosub", TokenKind::CommandName),
        ("print", TokenKind::CommandName),
        ("let", TokenKind::CommandName),
        ("return", TokenKind::CommandName),
        ("end", TokenKind::CommandName),
        ("input", TokenKind::CommandName),
        ("next", TokenKind::CommandName),
        ("dim", TokenKind::CommandName),
        ("rem", TokenKind::CommandName),
        ("cls", TokenKind::CommandName),
        ("clear", TokenKind::CommandName),
    ];
    KEYWORDS
        .iter()
        .find(|(word, _)| word.eq_ignore_ascii_case(s))
        .map(|(_, kind)| *kind)
}

pub fn constant(s: &str) -> Option<(TokenKind, bool)> {
    if s.eq_ignore_ascii_case("true") {
        Some((TokenKind::True, true))
    } else if s.eq_ignore_ascii_case("false") {
        Some((TokenKind::False, false))
    } else {
        None
    }
}
