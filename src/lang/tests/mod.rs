use super::ast::*;
use super::token::{Operator, TokenKind};
use super::*;

mod line_test;
mod parse_test;

fn num(n: f64) -> Expression {
    Expression::Number(n)
}

fn double(name: &str) -> Expression {
    Expression::Var(Ident::Double(name.into()))
}

fn string_var(name: &str) -> Expression {
    Expression::Var(Ident::String(name.into()))
}
