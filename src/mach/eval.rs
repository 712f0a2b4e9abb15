use super::{Operation, Val, Var};
use crate::lang::ast::{Expression, Ident};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

impl Expression {
    /// Reduce to a value. Operands are reduced first, then the
    /// operator table is consulted with the two values.
    pub fn evaluate(&self, var: &Var) -> Result<Val> {
        match self {
            Expression::Number(n) => Ok(Val::Double(*n)),
            Expression::String(s) => Ok(Val::String(unquote(s).into())),
            Expression::Boolean(b) => Ok(Val::Boolean(*b)),
            Expression::Var(ident) => var.get(ident),
            Expression::Array(ident, indices) => {
                let index = evaluate_index(indices, var)?;
                var.get_element(ident, &index)
            }
            Expression::Negation(expr) => Operation::negate(expr.evaluate(var)?),
            Expression::Not(expr) => Operation::not(expr.evaluate(var)?),
            Expression::Binary(op, lhs, rhs) => {
                let lhs = lhs.evaluate(var)?;
                let rhs = rhs.evaluate(var)?;
                Operation::binary(*op, lhs, rhs)
            }
            Expression::Group(expr) => expr.evaluate(var),
            Expression::List(v) => Ok(Val::List(
                v.iter().map(|e| e.evaluate(var)).collect::<Result<_>>()?,
            )),
        }
    }

    /// The variable this expression names when used as a target.
    pub fn target(&self) -> Option<(&Ident, Option<&[Expression]>)> {
        match self {
            Expression::Var(ident) => Some((ident, None)),
            Expression::Array(ident, indices) => Some((ident, Some(indices.as_slice()))),
            _ => None,
        }
    }
}

/// Evaluate subscripts, truncating each toward zero.
pub fn evaluate_index(indices: &[Expression], var: &Var) -> Result<Vec<usize>> {
    indices
        .iter()
        .map(|e| e.evaluate(var).and_then(|v| v.to_index()))
        .collect()
}

fn unquote(s: &str) -> &str {
    let s = s.strip_prefix('"').unwrap_or(s);
    s.strip_suffix('"').unwrap_or(s)
}
