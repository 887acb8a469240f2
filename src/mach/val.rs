use crate::error;
use crate::lang::{Error, LineNumber, MAX_LINE_NUMBER};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Runtime values

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Integer(i64),
    Float(f64),
    String(Rc<str>),
}

impl Val {
    /// The value an unassigned variable of this name reads as.
    pub fn zero(name: &str) -> Val {
        if name.ends_with('$') {
            Val::String("".into())
        } else {
            Val::Integer(0)
        }
    }

    pub fn from_bool(b: bool) -> Val {
        Val::Integer(if b { 1 } else { 0 })
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Val::String(_))
    }

    pub fn is_true(&self) -> bool {
        match self {
            Val::Integer(n) => *n != 0,
            Val::Float(n) => *n != 0.0,
            Val::String(s) => !s.is_empty(),
        }
    }

    pub fn to_f64(&self) -> Result<f64> {
        match self {
            Val::Integer(n) => Ok(*n as f64),
            Val::Float(n) => Ok(*n),
            Val::String(_) => Err(error!(TypeMismatch)),
        }
    }

    /// Whole numbers only. `None` means the number had a fractional part.
    pub fn integral(&self) -> Result<Option<i64>> {
        match self {
            Val::Integer(n) => Ok(Some(*n)),
            Val::Float(n) => {
                if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
                    Ok(Some(*n as i64))
                } else {
                    Ok(None)
                }
            }
            Val::String(_) => Err(error!(TypeMismatch)),
        }
    }

    pub fn line_number(&self) -> Result<LineNumber> {
        match self.integral()? {
            Some(n) if (0..=MAX_LINE_NUMBER as i64).contains(&n) => Ok(n as LineNumber),
            _ => Err(error!(UndefinedLine; "INVALID LINE NUMBER")),
        }
    }

    /// Text to number the way VAL and INPUT read it. Whole floats
    /// come back as integers.
    pub fn parse(s: &str) -> Option<Val> {
        let s = s.trim();
        if let Ok(n) = s.parse::<i64>() {
            return Some(Val::Integer(n));
        }
        if !s.chars().all(|c| c.is_ascii_digit() || "+-.eE".contains(c)) {
            return None;
        }
        match s.parse::<f64>() {
            Ok(n) if n.is_finite() => Some(Val::normalize(n)),
            _ => None,
        }
    }

    pub fn normalize(n: f64) -> Val {
        if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
            Val::Integer(n as i64)
        } else {
            Val::Float(n)
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Val::*;
        match self {
            Integer(n) => write!(f, "{}", n),
            Float(n) => write!(f, "{:?}", n),
            String(s) => write!(f, "{}", s),
        }
    }
}
