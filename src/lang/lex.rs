use super::token::{self, Literal, Token, TokenKind};
use super::Error;

type Result<T> = std::result::Result<T, Error>;

/// Scan one line or fragment into tokens.
pub fn tokenize(s: &str) -> Result<Vec<Token>> {
    BasicLexer {
        chars: s.chars().peekable(),
    }
    .collect()
}

/// Scan several fragments as if they were one line.
pub fn tokenize_all<S: AsRef<str>>(fragments: &[S]) -> Result<Vec<Token>> {
    let mut tokens = vec![];
    for fragment in fragments {
        tokens.append(&mut tokenize(fragment.as_ref())?);
    }
    Ok(tokens)
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r' || c == '\n'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_variable_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$' || c == '#' || c == '%'
}

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>>;

    fn whitespace(&mut self) {
        while let Some(pk) = self.chars().peek() {
            if !is_basic_whitespace(*pk) {
                break;
            }
            self.chars().next();
        }
    }

    fn number(&mut self) -> Result<Token> {
        let mut s = String::new();
        while let Some(pk) = self.chars().peek() {
            if !is_basic_digit(*pk) && *pk != '.' {
                break;
            }
            s.push(*pk);
            self.chars().next();
        }
        match s.parse::<f64>() {
            Ok(n) => Ok(Token::with_literal(&s, TokenKind::Number, Literal::Number(n))),
            Err(_) => Err(error!(InvalidNumber; &s)),
        }
    }

    fn string(&mut self) -> Token {
        let mut s = String::new();
        if let Some(quote) = self.chars().next() {
            s.push(quote);
        }
        for ch in self.chars() {
            s.push(ch);
            if ch == '"' {
                return Token::with_literal(&s, TokenKind::String, Literal::String(s.as_str().into()));
            }
        }
        Token::new(&s, TokenKind::None)
    }

    fn alphabetic(&mut self) -> Token {
        let mut s = String::new();
        while let Some(pk) = self.chars().peek() {
            if !is_variable_char(*pk) {
                break;
            }
            s.push(*pk);
            self.chars().next();
        }
        if let Some(kind) = token::keyword(&s) {
            return Token::new(&s, kind);
        }
        if let Some((kind, b)) = token::constant(&s) {
            return Token::with_literal(&s, kind, Literal::Boolean(b));
        }
        let kind = match s.chars().last() {
            Some('$') => TokenKind::StringVariable,
            Some('#') => TokenKind::IntegerVariable,
            _ => TokenKind::DoubleVariable,
        };
        Token::with_literal(&s, kind, Literal::String(s.as_str().into()))
    }

    fn minutia(&mut self) -> Option<Token> {
        let ch = self.chars().next()?;
        let kind = match ch {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Asterisk,
            '/' => TokenKind::Slash,
            '&' => TokenKind::Ampersand,
            '=' => TokenKind::Equal,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '<' => match self.chars().peek() {
                Some('=') => {
                    self.chars().next();
                    return Some(Token::new("<=", TokenKind::LessEqual));
                }
                Some('>') => {
                    self.chars().next();
                    return Some(Token::new("<>", TokenKind::NotEqual));
                }
                _ => TokenKind::Less,
            },
            '>' => match self.chars().peek() {
                Some('=') => {
                    self.chars().next();
                    return Some(Token::new(">=", TokenKind::GreaterEqual));
                }
                _ => TokenKind::Greater,
            },
            _ => TokenKind::None,
        };
        Some(Token::new(&ch.to_string(), kind))
    }
}

struct BasicLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Tokenizers<'a> for BasicLexer<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>> {
        &mut self.chars
    }
}

impl<'a> Iterator for BasicLexer<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if is_basic_whitespace(*self.chars.peek()?) {
            self.whitespace();
        }
        let pk = *self.chars.peek()?;
        if pk == '"' {
            return Some(Ok(self.string()));
        }
        if is_basic_digit(pk) || pk == '.' {
            return Some(self.number());
        }
        if is_basic_alphabetic(pk) {
            return Some(Ok(self.alphabetic()));
        }
        self.minutia().map(Ok)
    }
}
