use crate::error;
use crate::lang::ast::Ident;
use crate::lang::Error;
use std::convert::TryFrom;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Runtime value
///
/// Values are copied on evaluation; nothing holds a reference
/// into the variable store.

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Double(f64),
    Integer(i32),
    Boolean(bool),
    String(Rc<str>),
    List(Vec<Val>),
}

impl Val {
    /// Convert to the storage kind fixed by the identifier's sigil.
    pub fn coerce_to(self, ident: &Ident) -> Result<Val> {
        match ident {
            Ident::Double(_) => Ok(Val::Double(f64::try_from(self)?)),
            Ident::Integer(_) => Ok(Val::Integer(i32::try_from(self)?)),
            Ident::String(_) => match self {
                Val::String(s) => Ok(Val::String(s)),
                _ => Err(error!(TypeMismatch)),
            },
        }
    }

    /// Convert typed input text to the storage kind of the identifier.
    pub fn from_input(text: &str, ident: &Ident) -> Result<Val> {
        match ident {
            Ident::String(_) => Ok(Val::String(text.into())),
            _ => match text.trim().parse::<f64>() {
                Ok(n) => Val::Double(n).coerce_to(ident),
                Err(_) => Err(error!(TypeMismatch; "NUMBER EXPECTED")),
            },
        }
    }

    /// Numbers are true when non-zero.
    pub fn is_true(&self) -> Result<bool> {
        match self {
            Val::Boolean(b) => Ok(*b),
            Val::Double(n) => Ok(*n != 0.0),
            Val::Integer(n) => Ok(*n != 0),
            Val::String(_) | Val::List(_) => Err(error!(TypeMismatch)),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Val::Double(_) | Val::Integer(_))
    }

    /// Array subscripts truncate toward zero.
    pub fn to_index(&self) -> Result<usize> {
        let n = f64::try_from(self.clone())?.trunc();
        if !n.is_finite() || n < 0.0 || n > usize::max_value() as f64 {
            return Err(error!(SubscriptOutOfRange));
        }
        Ok(n as usize)
    }
}

impl TryFrom<Val> for f64 {
    type Error = Error;
    fn try_from(val: Val) -> std::result::Result<Self, Self::Error> {
        match val {
            Val::Double(n) => Ok(n),
            Val::Integer(n) => Ok(n as f64),
            Val::Boolean(_) | Val::String(_) | Val::List(_) => Err(error!(TypeMismatch)),
        }
    }
}

impl TryFrom<Val> for i32 {
    type Error = Error;
    fn try_from(val: Val) -> std::result::Result<Self, Self::Error> {
        match val {
            Val::Integer(n) => Ok(n),
            Val::Double(n) => {
                let n = n.trunc();
                if n.is_nan() || n < i32::min_value() as f64 || n > i32::max_value() as f64 {
                    Err(error!(Overflow))
                } else {
                    Ok(n as i32)
                }
            }
            Val::Boolean(_) | Val::String(_) | Val::List(_) => Err(error!(TypeMismatch)),
        }
    }
}

impl TryFrom<Val> for Rc<str> {
    type Error = Error;
    fn try_from(val: Val) -> std::result::Result<Self, Self::Error> {
        match val {
            Val::String(s) => Ok(s),
            _ => Err(error!(TypeMismatch)),
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Val::*;
        match self {
            Double(n) => write!(f, "{}", n),
            Integer(n) => write!(f, "{}", n),
            Boolean(b) => write!(f, "{}", b),
            String(s) => write!(f, "{}", s),
            List(v) => {
                let s: Vec<std::string::String> = v.iter().map(|v| v.to_string()).collect();
                write!(f, "{}", s.join("\t"))
            }
        }
    }
}
