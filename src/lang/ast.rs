use super::token::Operator;
use std::rc::Rc;

/// Anything the parser produces, value-producing or not.
#[derive(Debug, PartialEq, Clone)]
pub enum SyntaxElement {
    Expression(Expression),
    Then,
    /// `;` between print items.
    LineConcat,
    To(Expression),
    Step(Expression),
    Keyword(Rc<str>),
    /// A statement in statement position, e.g. after `THEN`.
    /// Holds the raw lexemes, verb first.
    Command(Vec<String>),
}

impl SyntaxElement {
    pub fn is_expression(&self) -> bool {
        matches!(self, SyntaxElement::Expression(_))
    }
}

/// A variable name. The sigil is part of the name.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Ident {
    String(Rc<str>),
    Integer(Rc<str>),
    Double(Rc<str>),
}

impl Ident {
    pub fn name(&self) -> &Rc<str> {
        match self {
            Ident::String(s) | Ident::Integer(s) | Ident::Double(s) => s,
        }
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Number(f64),
    /// Lexeme with its quotes.
    String(Rc<str>),
    Boolean(bool),
    Var(Ident),
    Array(Ident, Vec<Expression>),
    Negation(Box<Expression>),
    Not(Box<Expression>),
    Binary(Operator, Box<Expression>, Box<Expression>),
    Group(Box<Expression>),
    List(Vec<Expression>),
}

impl Expression {
    pub fn binary(op: Operator, lhs: Expression, rhs: Expression) -> Expression {
        Expression::Binary(op, Box::new(lhs), Box::new(rhs))
    }
}
