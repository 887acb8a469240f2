use super::Val;
use crate::error;
use crate::lang::Error;
use std::cmp::Ordering;

type Result<T> = std::result::Result<T, Error>;

/// Arithmetic, relational and logical operators on runtime values.
///
/// Integers stay integers until they meet a float, except for `/`
/// which always gives a float. Relational and logical results are 1 or 0.
pub struct Operation {}

impl Operation {
    pub fn negate(val: Val) -> Result<Val> {
        use Val::*;
        match val {
            Integer(n) => match n.checked_neg() {
                Some(n) => Ok(Integer(n)),
                None => Err(error!(Overflow)),
            },
            Float(n) => Ok(Float(-n)),
            String(_) => Err(error!(TypeMismatch)),
        }
    }

    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (String(l), String(r)) => Ok(String(format!("{}{}", l, r).into())),
            (Integer(l), Integer(r)) => match l.checked_add(r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            (l, r) => Ok(Float(l.to_f64()? + r.to_f64()?)),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_sub(r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            (l, r) => Ok(Float(l.to_f64()? - r.to_f64()?)),
        }
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_mul(r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            (l, r) => Ok(Float(l.to_f64()? * r.to_f64()?)),
        }
    }

    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        let l = lhs.to_f64()?;
        let r = rhs.to_f64()?;
        if r == 0.0 {
            return Err(error!(DivisionByZero));
        }
        Ok(Val::Float(l / r))
    }

    /// The result takes the sign of the divisor.
    pub fn modulus(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(_), Integer(0)) => Err(error!(DivisionByZero)),
            (Integer(l), Integer(r)) => match l.checked_rem(r) {
                Some(m) if m != 0 && (m < 0) != (r < 0) => Ok(Integer(m + r)),
                Some(m) => Ok(Integer(m)),
                None => Ok(Integer(0)),
            },
            (l, r) => {
                let l = l.to_f64()?;
                let r = r.to_f64()?;
                if r == 0.0 {
                    return Err(error!(DivisionByZero));
                }
                let m = l % r;
                if m != 0.0 && (m < 0.0) != (r < 0.0) {
                    Ok(Float(m + r))
                } else {
                    Ok(Float(m))
                }
            }
        }
    }

    pub fn equal(lhs: Val, rhs: Val) -> Result<Val> {
        let ord = Operation::ordering(&lhs, &rhs)?;
        Ok(Val::from_bool(ord == Some(Ordering::Equal)))
    }

    pub fn not_equal(lhs: Val, rhs: Val) -> Result<Val> {
        let ord = Operation::ordering(&lhs, &rhs)?;
        Ok(Val::from_bool(ord != Some(Ordering::Equal)))
    }

    pub fn less(lhs: Val, rhs: Val) -> Result<Val> {
        let ord = Operation::ordering(&lhs, &rhs)?;
        Ok(Val::from_bool(ord == Some(Ordering::Less)))
    }

    pub fn less_equal(lhs: Val, rhs: Val) -> Result<Val> {
        let ord = Operation::ordering(&lhs, &rhs)?;
        Ok(Val::from_bool(matches!(
            ord,
            Some(Ordering::Less) | Some(Ordering::Equal)
        )))
    }

    pub fn greater(lhs: Val, rhs: Val) -> Result<Val> {
        let ord = Operation::ordering(&lhs, &rhs)?;
        Ok(Val::from_bool(ord == Some(Ordering::Greater)))
    }

    pub fn greater_equal(lhs: Val, rhs: Val) -> Result<Val> {
        let ord = Operation::ordering(&lhs, &rhs)?;
        Ok(Val::from_bool(matches!(
            ord,
            Some(Ordering::Greater) | Some(Ordering::Equal)
        )))
    }

    pub fn not(val: Val) -> Val {
        Val::from_bool(!val.is_true())
    }

    pub fn and(lhs: Val, rhs: Val) -> Val {
        Val::from_bool(lhs.is_true() && rhs.is_true())
    }

    pub fn or(lhs: Val, rhs: Val) -> Val {
        Val::from_bool(lhs.is_true() || rhs.is_true())
    }

    fn ordering(lhs: &Val, rhs: &Val) -> Result<Option<Ordering>> {
        use Val::*;
        match (lhs, rhs) {
            (String(l), String(r)) => Ok(Some(l.cmp(r))),
            (Integer(l), Integer(r)) => Ok(Some(l.cmp(r))),
            (String(_), _) | (_, String(_)) => Err(error!(TypeMismatch)),
            (l, r) => Ok(l.to_f64()?.partial_cmp(&r.to_f64()?)),
        }
    }
}
