use super::Val;
use crate::error;
use crate::lang::ast::Ident;
use crate::lang::Error;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Bindings are keyed by the full name, sigil included, so `X`, `X#`
/// and `X$` never collide. A name holds either a scalar or an array.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, Variable>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Variable {
    Double(f64),
    Integer(i32),
    String(Rc<str>),
    DoubleArray(Array<f64>),
    IntegerArray(Array<i32>),
    StringArray(Array<Rc<str>>),
}

/// Rectangular block of one scalar kind, fixed in shape once created.
/// Elements live in one flat buffer in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Array<T> {
    dims: Vec<usize>,
    data: Vec<T>,
}

impl<T: Clone> Array<T> {
    pub fn new(dims: Vec<usize>, fill: T) -> Result<Array<T>> {
        let mut len: usize = 1;
        for &d in &dims {
            if d == 0 {
                return Err(error!(SubscriptOutOfRange; "DIMENSION MUST BE AT LEAST 1"));
            }
            len = match len.checked_mul(d) {
                Some(len) if len <= u16::max_value() as usize * 16 => len,
                _ => return Err(error!(OutOfMemory)),
            };
        }
        Ok(Array {
            dims,
            data: vec![fill; len],
        })
    }

    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    fn offset(&self, index: &[usize]) -> Result<usize> {
        if index.len() != self.dims.len() {
            return Err(error!(SubscriptOutOfRange; "WRONG NUMBER OF SUBSCRIPTS"));
        }
        let mut offset = 0;
        for (&i, &d) in index.iter().zip(&self.dims) {
            if i >= d {
                return Err(error!(SubscriptOutOfRange));
            }
            offset = offset * d + i;
        }
        Ok(offset)
    }

    pub fn get(&self, index: &[usize]) -> Result<&T> {
        let offset = self.offset(index)?;
        Ok(&self.data[offset])
    }

    pub fn set(&mut self, index: &[usize], value: T) -> Result<()> {
        let offset = self.offset(index)?;
        self.data[offset] = value;
        Ok(())
    }
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn contains(&self, ident: &Ident) -> bool {
        self.vars.contains_key(ident.name())
    }

    pub fn get(&self, ident: &Ident) -> Result<Val> {
        match (ident, self.vars.get(ident.name())) {
            (_, None) => Err(error!(InvalidVariable; &format!("{} NOT SET", ident))),
            (Ident::Double(_), Some(Variable::Double(n))) => Ok(Val::Double(*n)),
            (Ident::Integer(_), Some(Variable::Integer(n))) => Ok(Val::Integer(*n)),
            (Ident::String(_), Some(Variable::String(s))) => Ok(Val::String(s.clone())),
            _ => Err(error!(InvalidVariable; &format!("{} IS AN ARRAY", ident))),
        }
    }

    /// Store a value already converted to the identifier's kind.
    pub fn set(&mut self, ident: &Ident, value: Val) -> Result<()> {
        let variable = match (ident, value) {
            (Ident::Double(_), Val::Double(n)) => Variable::Double(n),
            (Ident::Integer(_), Val::Integer(n)) => Variable::Integer(n),
            (Ident::String(_), Val::String(s)) => Variable::String(s),
            _ => return Err(error!(TypeMismatch)),
        };
        if let Some(old) = self.vars.get(ident.name()) {
            if old.is_array() {
                return Err(error!(TypeMismatch; &format!("{} IS AN ARRAY", ident)));
            }
        }
        self.insert(ident.name().clone(), variable)
    }

    pub fn dimension(&mut self, ident: &Ident, dims: Vec<usize>) -> Result<()> {
        if self.vars.contains_key(ident.name()) {
            return Err(error!(RedimensionedArray; &ident.to_string()));
        }
        let variable = match ident {
            Ident::Double(_) => Variable::DoubleArray(Array::new(dims, 0.0)?),
            Ident::Integer(_) => Variable::IntegerArray(Array::new(dims, 0)?),
            Ident::String(_) => Variable::StringArray(Array::new(dims, "".into())?),
        };
        self.insert(ident.name().clone(), variable)
    }

    pub fn get_element(&self, ident: &Ident, index: &[usize]) -> Result<Val> {
        match (ident, self.vars.get(ident.name())) {
            (Ident::Double(_), Some(Variable::DoubleArray(a))) => Ok(Val::Double(*a.get(index)?)),
            (Ident::Integer(_), Some(Variable::IntegerArray(a))) => {
                Ok(Val::Integer(*a.get(index)?))
            }
            (Ident::String(_), Some(Variable::StringArray(a))) => {
                Ok(Val::String(a.get(index)?.clone()))
            }
            _ => Err(error!(InvalidVariable; &format!("{} IS NOT AN ARRAY", ident))),
        }
    }

    pub fn store_element(&mut self, ident: &Ident, index: &[usize], value: Val) -> Result<()> {
        match (self.vars.get_mut(ident.name()), value) {
            (Some(Variable::DoubleArray(a)), Val::Double(n)) => a.set(index, n),
            (Some(Variable::IntegerArray(a)), Val::Integer(n)) => a.set(index, n),
            (Some(Variable::StringArray(a)), Val::String(s)) => a.set(index, s),
            (Some(v), _) if v.is_array() => Err(error!(TypeMismatch)),
            _ => Err(error!(InvalidVariable; &format!("{} IS NOT AN ARRAY", ident))),
        }
    }

    fn insert(&mut self, name: Rc<str>, variable: Variable) -> Result<()> {
        if self.vars.len() > u16::max_value() as usize {
            return Err(error!(OutOfMemory));
        }
        self.vars.insert(name, variable);
        Ok(())
    }
}

impl Variable {
    pub fn is_array(&self) -> bool {
        matches!(
            self,
            Variable::DoubleArray(_) | Variable::IntegerArray(_) | Variable::StringArray(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn ident(name: &str) -> Ident {
        match name.chars().last() {
            Some('$') => Ident::String(name.into()),
            Some('#') => Ident::Integer(name.into()),
            _ => Ident::Double(name.into()),
        }
    }

    #[test]
    fn test_row_major() {
        let mut a = Array::new(vec![2, 3], 0).unwrap();
        a.set(&[1, 2], 7).unwrap();
        assert_eq!(a.offset(&[1, 2]), Ok(5));
        assert_eq!(a.get(&[1, 2]), Ok(&7));
        assert_eq!(a.get(&[0, 2]), Ok(&0));
        assert!(a.get(&[2, 0]).is_err());
        assert!(a.get(&[1]).is_err());
    }

    #[test]
    fn test_sigil_is_part_of_key() {
        let mut var = Var::new();
        var.set(&ident("X#"), Val::Integer(5)).unwrap();
        var.set(&ident("X$"), Val::String("hi".into())).unwrap();
        assert_eq!(var.get(&ident("X#")), Ok(Val::Integer(5)));
        assert_eq!(var.get(&ident("X$")), Ok(Val::String("hi".into())));
        assert!(var.get(&ident("X")).is_err());
    }

    #[test]
    fn test_unset_is_invalid_variable() {
        let var = Var::new();
        assert_eq!(
            var.get(&ident("Q")).unwrap_err().to_string(),
            "INVALID VARIABLE; Q NOT SET"
        );
    }

    #[test]
    fn test_dimension_once() {
        let mut var = Var::new();
        let a = ident("A");
        var.dimension(&a, vec![3]).unwrap();
        var.store_element(&a, &[1], Val::Double(2.5)).unwrap();
        assert_eq!(var.get_element(&a, &[1]), Ok(Val::Double(2.5)));
        assert_eq!(var.get_element(&a, &[0]), Ok(Val::Double(0.0)));
        assert_eq!(
            var.get_element(&a, &[3]).unwrap_err().code(),
            ErrorCode::SubscriptOutOfRange as u16
        );
        assert_eq!(
            var.dimension(&a, vec![5]).unwrap_err().code(),
            ErrorCode::RedimensionedArray as u16
        );
    }

    #[test]
    fn test_array_is_not_scalar() {
        let mut var = Var::new();
        let a = ident("A$");
        var.dimension(&a, vec![2]).unwrap();
        assert!(var.get(&a).is_err());
        assert!(var.set(&a, Val::String("x".into())).is_err());
        assert_eq!(var.get_element(&a, &[1]), Ok(Val::String("".into())));
    }
}
