use super::Val;
use crate::error;
use crate::lang::token::Operator;
use crate::lang::Error;
use std::cmp::Ordering;

type Result<T> = std::result::Result<T, Error>;

/// ## Operator tables
///
/// Both operands are already reduced to values. Arithmetic is done in
/// double precision; integers are promoted. Non-finite results flow
/// through unchanged.

pub struct Operation {}

impl Operation {
    pub fn binary(op: Operator, lhs: Val, rhs: Val) -> Result<Val> {
        use Operator::*;
        match op {
            Plus => Operation::sum(lhs, rhs),
            Minus => Operation::arithmetic(lhs, rhs, |l, r| l - r),
            Multiply => Operation::arithmetic(lhs, rhs, |l, r| l * r),
            Divide => Operation::arithmetic(lhs, rhs, |l, r| l / r),
            Concat => Operation::concat(lhs, rhs),
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => {
                Operation::compare(op, lhs, rhs)
            }
            Not => Err(error!(InternalError; "NOT IS UNARY")),
        }
    }

    pub fn negate(val: Val) -> Result<Val> {
        use Val::*;
        match val {
            Integer(n) => match n.checked_neg() {
                Some(n) => Ok(Integer(n)),
                None => Err(error!(Overflow)),
            },
            Double(n) => Ok(Double(-n)),
            Boolean(_) | String(_) | List(_) => Err(error!(TypeMismatch)),
        }
    }

    pub fn not(val: Val) -> Result<Val> {
        Ok(Val::Boolean(!val.is_true()?))
    }

    fn numeric_pair(lhs: &Val, rhs: &Val) -> Option<(f64, f64)> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => Some((*l as f64, *r as f64)),
            (Integer(l), Double(r)) => Some((*l as f64, *r)),
            (Double(l), Integer(r)) => Some((*l, *r as f64)),
            (Double(l), Double(r)) => Some((*l, *r)),
            _ => None,
        }
    }

    fn arithmetic(lhs: Val, rhs: Val, f: fn(f64, f64) -> f64) -> Result<Val> {
        match Operation::numeric_pair(&lhs, &rhs) {
            Some((l, r)) => Ok(Val::Double(f(l, r))),
            None => Err(error!(TypeMismatch)),
        }
    }

    fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        match (lhs, rhs) {
            (Val::String(l), Val::String(r)) => Ok(Val::String((l.to_string() + &r).into())),
            (lhs, rhs) => Operation::arithmetic(lhs, rhs, |l, r| l + r),
        }
    }

    fn concat(lhs: Val, rhs: Val) -> Result<Val> {
        match (&lhs, &rhs) {
            (Val::List(_), _) | (_, Val::List(_)) => Err(error!(TypeMismatch)),
            _ => Ok(Val::String(format!("{}{}", lhs, rhs).into())),
        }
    }

    fn compare(op: Operator, lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        let ordering = match (&lhs, &rhs) {
            (String(l), String(r)) => l.cmp(r),
            (Boolean(_), _) | (_, Boolean(_)) => {
                return Operation::compare_truth(op, lhs.is_true()?, rhs.is_true()?)
            }
            _ => match Operation::numeric_pair(&lhs, &rhs) {
                Some((l, r)) => match l.partial_cmp(&r) {
                    Some(ordering) => ordering,
                    None => return Ok(Boolean(op == Operator::NotEqual)),
                },
                None => return Err(error!(TypeMismatch)),
            },
        };
        Ok(Boolean(match op {
            Operator::Equal => ordering == Ordering::Equal,
            Operator::NotEqual => ordering != Ordering::Equal,
            Operator::Less => ordering == Ordering::Less,
            Operator::LessEqual => ordering != Ordering::Greater,
            Operator::Greater => ordering == Ordering::Greater,
            Operator::GreaterEqual => ordering != Ordering::Less,
            _ => return Err(error!(InternalError; "NOT A COMPARISON")),
        }))
    }

    fn compare_truth(op: Operator, lhs: bool, rhs: bool) -> Result<Val> {
        match op {
            Operator::Equal => Ok(Val::Boolean(lhs == rhs)),
            Operator::NotEqual => Ok(Val::Boolean(lhs != rhs)),
            _ => Err(error!(TypeMismatch)),
        }
    }
}
