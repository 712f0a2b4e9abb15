use super::ast::*;
use super::lex::{tokenize, tokenize_all};
use super::token::{Literal, Token, TokenKind};
use super::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Resumable parser session
///
/// Multi-clause statements such as `FOR I=1 TO 9 STEP 2` and
/// `IF X THEN PRINT X` are parsed one element at a time. The handler
/// calls `parse` for the first element, inspects it, then calls
/// `continue_parsing` for each following element of the same stream.
/// A session belongs to one statement and is dropped with it.

pub struct Parser {
    token_stream: std::iter::Peekable<std::vec::IntoIter<Token>>,
}

impl Default for Parser {
    fn default() -> Parser {
        Parser::new()
    }
}

impl Parser {
    pub fn new() -> Parser {
        Parser {
            token_stream: Vec::new().into_iter().peekable(),
        }
    }

    /// Reset to a new token stream and parse its first element.
    pub fn parse(&mut self, tokens: Vec<Token>) -> Result<SyntaxElement> {
        self.token_stream = tokens.into_iter().peekable();
        self.element()
    }

    pub fn parse_str(&mut self, s: &str) -> Result<SyntaxElement> {
        let tokens = tokenize(s)?;
        self.parse(tokens)
    }

    pub fn parse_fragments<S: AsRef<str>>(&mut self, fragments: &[S]) -> Result<SyntaxElement> {
        let tokens = tokenize_all(fragments)?;
        self.parse(tokens)
    }

    /// Parse the next element of the current stream. `None` at the end.
    pub fn continue_parsing(&mut self) -> Result<Option<SyntaxElement>> {
        if self.is_at_end() {
            return Ok(None);
        }
        self.element().map(Some)
    }

    /// Parse the next element and require it to be an expression.
    pub fn expression(&mut self) -> Result<Expression> {
        match self.continue_parsing()? {
            Some(SyntaxElement::Expression(expr)) => Ok(expr),
            _ => Err(error!(SyntaxError; "EXPECTED EXPRESSION")),
        }
    }

    pub fn is_at_end(&mut self) -> bool {
        self.token_stream.peek().is_none()
    }

    fn next(&mut self) -> Option<Token> {
        self.token_stream.next()
    }

    fn peek_kind(&mut self) -> Option<TokenKind> {
        self.token_stream.peek().map(|t| t.kind)
    }

    fn expect(&mut self, kind: TokenKind, message: &str) -> Result<()> {
        match self.next() {
            Some(t) if t.kind == kind => Ok(()),
            _ => Err(error!(SyntaxError; message)),
        }
    }

    fn element(&mut self) -> Result<SyntaxElement> {
        self.equality()
    }

    /// Left-associative binary layer. Markers pass through untouched.
    fn binary_layer(
        &mut self,
        operators: &[TokenKind],
        operand: fn(&mut Parser) -> Result<SyntaxElement>,
    ) -> Result<SyntaxElement> {
        let mut lhs = match operand(self)? {
            SyntaxElement::Expression(expr) => expr,
            other => return Ok(other),
        };
        while let Some(kind) = self.peek_kind() {
            if !operators.contains(&kind) {
                break;
            }
            let op = match self.next().and_then(|t| t.operator()) {
                Some(op) => op,
                None => return Err(error!(InternalError; "OPERATOR EXPECTED")),
            };
            let rhs = match operand(self)? {
                SyntaxElement::Expression(expr) => expr,
                _ => {
                    return Err(error!(SyntaxError; &format!("EXPECTED EXPRESSION AFTER {}", op)))
                }
            };
            lhs = Expression::binary(op, lhs, rhs);
        }
        Ok(SyntaxElement::Expression(lhs))
    }

    fn equality(&mut self) -> Result<SyntaxElement> {
        use TokenKind::*;
        self.binary_layer(&[Equal, NotEqual], Parser::comparison)
    }

    fn comparison(&mut self) -> Result<SyntaxElement> {
        use TokenKind::*;
        self.binary_layer(&[Greater, GreaterEqual, Less, LessEqual], Parser::list)
    }

    fn list(&mut self) -> Result<SyntaxElement> {
        let first = match self.term()? {
            SyntaxElement::Expression(expr) => expr,
            other => return Ok(other),
        };
        if self.peek_kind() != Some(TokenKind::Comma) {
            return Ok(SyntaxElement::Expression(first));
        }
        let mut v = vec![first];
        while self.peek_kind() == Some(TokenKind::Comma) {
            self.next();
            match self.term()? {
                SyntaxElement::Expression(expr) => v.push(expr),
                _ => return Err(error!(SyntaxError; "EXPECTED EXPRESSION IN LIST")),
            }
        }
        Ok(SyntaxElement::Expression(Expression::List(v)))
    }

    fn term(&mut self) -> Result<SyntaxElement> {
        use TokenKind::*;
        self.binary_layer(&[Plus, Minus, Ampersand], Parser::factor)
    }

    fn factor(&mut self) -> Result<SyntaxElement> {
        use TokenKind::*;
        self.binary_layer(&[Asterisk, Slash], Parser::unary)
    }

    fn unary(&mut self) -> Result<SyntaxElement> {
        let kind = match self.peek_kind() {
            Some(k @ TokenKind::Minus) | Some(k @ TokenKind::Not) => k,
            _ => return self.primary(),
        };
        self.next();
        let expr = match self.unary()? {
            SyntaxElement::Expression(expr) => Box::new(expr),
            _ => return Err(error!(SyntaxError; "EXPECTED EXPRESSION AFTER UNARY OPERATOR")),
        };
        Ok(SyntaxElement::Expression(match kind {
            TokenKind::Minus => Expression::Negation(expr),
            _ => Expression::Not(expr),
        }))
    }

    fn primary(&mut self) -> Result<SyntaxElement> {
        let token = match self.next() {
            Some(t) => t,
            None => return Err(error!(SyntaxError; "UNEXPECTED END OF STATEMENT")),
        };
        let expr = match token.kind {
            TokenKind::StringVariable | TokenKind::IntegerVariable | TokenKind::DoubleVariable => {
                self.variable(token)?
            }
            TokenKind::True => Expression::Boolean(true),
            TokenKind::False => Expression::Boolean(false),
            TokenKind::Number => match token.literal {
                Some(Literal::Number(n)) => Expression::Number(n),
                _ => return Err(error!(InternalError; "NUMBER WITHOUT VALUE")),
            },
            TokenKind::String => Expression::String(token.lexeme),
            TokenKind::Then => return Ok(SyntaxElement::Then),
            TokenKind::Semicolon => return Ok(SyntaxElement::LineConcat),
            TokenKind::To | TokenKind::Step => {
                if self.is_at_end() {
                    return Ok(SyntaxElement::Keyword(token.lexeme));
                }
                return match self.element()? {
                    SyntaxElement::Expression(expr) if token.kind == TokenKind::To => {
                        Ok(SyntaxElement::To(expr))
                    }
                    SyntaxElement::Expression(expr) => Ok(SyntaxElement::Step(expr)),
                    _ => Err(error!(SyntaxError;
                        &format!("EXPECTED EXPRESSION AFTER {}", token))),
                };
            }
            TokenKind::CommandName => {
                let mut args = vec![token.lexeme.to_string()];
                while let Some(t) = self.next() {
                    args.push(t.lexeme.to_string());
                }
                return Ok(SyntaxElement::Command(args));
            }
            TokenKind::LParen => {
                let element = self.element()?;
                self.expect(TokenKind::RParen, "EXPECTED CLOSING PARENTHESIS")?;
                match element {
                    SyntaxElement::Expression(expr) => Expression::Group(Box::new(expr)),
                    _ => return Err(error!(SyntaxError; "EXPECTED EXPRESSION")),
                }
            }
            _ => return Err(error!(SyntaxError; &format!("UNEXPECTED TOKEN {}", token))),
        };
        Ok(SyntaxElement::Expression(expr))
    }

    fn variable(&mut self, token: Token) -> Result<Expression> {
        let ident = match token.kind {
            TokenKind::StringVariable => Ident::String(token.lexeme),
            TokenKind::IntegerVariable => Ident::Integer(token.lexeme),
            _ => Ident::Double(token.lexeme),
        };
        if self.peek_kind() != Some(TokenKind::LParen) {
            return Ok(Expression::Var(ident));
        }
        self.next();
        let element = self.element()?;
        self.expect(TokenKind::RParen, "EXPECTED CLOSING PARENTHESIS")?;
        match element {
            SyntaxElement::Expression(Expression::List(v)) => Ok(Expression::Array(ident, v)),
            SyntaxElement::Expression(expr) => Ok(Expression::Array(ident, vec![expr])),
            _ => Err(error!(SyntaxError; "EXPECTED INDEX EXPRESSION")),
        }
    }
}
