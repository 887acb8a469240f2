use super::Val;
use crate::error;
use crate::lang::token::Function;
use crate::lang::Error;
use rand::rngs::StdRng;
use rand::Rng;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

const MAX_TAB: usize = 255;

/// Calls a built-in function with already evaluated arguments.
pub fn call(func: Function, args: Vec<Val>, rng: &mut StdRng) -> Result<Val> {
    if !func.arity().contains(&args.len()) {
        return Err(error!(IllegalFunctionCall; format!("WRONG NUMBER OF ARGUMENTS TO {}", func)));
    }
    let argc = args.len();
    let mut args = args.into_iter();
    let mut arg = || args.next().unwrap_or(Val::Integer(0));
    match func {
        Function::Abs => abs(arg()),
        Function::Asc => asc(arg()),
        Function::Chr => chr(arg()),
        Function::Int => int(arg()),
        Function::Left => left(arg(), arg()),
        Function::Len => len(arg()),
        Function::Mid => {
            let (s, start) = (arg(), arg());
            let n = if argc == 3 { Some(arg()) } else { None };
            mid(s, start, n)
        }
        Function::Right => right(arg(), arg()),
        Function::Rnd => Ok(Val::Float(rng.gen::<f64>())),
        Function::Sqr => sqr(arg()),
        Function::Str => str(arg()),
        Function::Tab => tab(arg()),
        Function::Val => val(arg()),
    }
}

fn string(val: Val) -> Result<Rc<str>> {
    match val {
        Val::String(s) => Ok(s),
        _ => Err(error!(TypeMismatch)),
    }
}

fn count(val: Val) -> Result<usize> {
    match val.integral()? {
        Some(n) if n >= 0 => Ok(n as usize),
        _ => Err(error!(IllegalFunctionCall)),
    }
}

fn abs(val: Val) -> Result<Val> {
    match val {
        Val::Integer(n) => match n.checked_abs() {
            Some(n) => Ok(Val::Integer(n)),
            None => Err(error!(Overflow)),
        },
        Val::Float(n) => Ok(Val::Float(n.abs())),
        Val::String(_) => Err(error!(TypeMismatch)),
    }
}

fn asc(val: Val) -> Result<Val> {
    match string(val)?.chars().next() {
        Some(ch) => Ok(Val::Integer(ch as i64)),
        None => Err(error!(IllegalFunctionCall; "EMPTY STRING")),
    }
}

fn chr(val: Val) -> Result<Val> {
    let code = u32::try_from(count(val)?).ok().and_then(char::from_u32);
    match code {
        Some(ch) => Ok(Val::String(ch.to_string().into())),
        None => Err(error!(IllegalFunctionCall)),
    }
}

/// Truncates toward zero.
fn int(val: Val) -> Result<Val> {
    match val {
        Val::Integer(n) => Ok(Val::Integer(n)),
        Val::Float(n) => {
            let n = n.trunc();
            if n.is_finite() && n.abs() < i64::MAX as f64 {
                Ok(Val::Integer(n as i64))
            } else {
                Err(error!(Overflow))
            }
        }
        Val::String(_) => Err(error!(TypeMismatch)),
    }
}

fn left(s: Val, n: Val) -> Result<Val> {
    let s = string(s)?;
    let n = count(n)?;
    Ok(Val::String(s.chars().take(n).collect::<String>().into()))
}

fn len(val: Val) -> Result<Val> {
    Ok(Val::Integer(string(val)?.chars().count() as i64))
}

/// 1-based start. Without a length, the rest of the string.
fn mid(s: Val, start: Val, n: Option<Val>) -> Result<Val> {
    let s = string(s)?;
    let start = match count(start)? {
        0 => return Err(error!(IllegalFunctionCall)),
        start => start - 1,
    };
    let n = match n {
        Some(n) => count(n)?,
        None => usize::MAX,
    };
    Ok(Val::String(s.chars().skip(start).take(n).collect::<String>().into()))
}

fn right(s: Val, n: Val) -> Result<Val> {
    let s = string(s)?;
    let n = count(n)?;
    let len = s.chars().count();
    Ok(Val::String(s.chars().skip(len.saturating_sub(n)).collect::<String>().into()))
}

fn sqr(val: Val) -> Result<Val> {
    let n = val.to_f64()?;
    if n < 0.0 {
        return Err(error!(IllegalFunctionCall));
    }
    Ok(Val::Float(n.sqrt()))
}

fn str(val: Val) -> Result<Val> {
    match val {
        Val::String(_) => Err(error!(TypeMismatch)),
        n => Ok(Val::String(n.to_string().into())),
    }
}

/// Columns past `MAX_TAB` are an error rather than a huge string.
fn tab(val: Val) -> Result<Val> {
    match count(val)? {
        n if n <= MAX_TAB => Ok(Val::String(" ".repeat(n).into())),
        _ => Err(error!(IllegalFunctionCall; "TAB PAST END OF LINE")),
    }
}

fn val(val: Val) -> Result<Val> {
    match val {
        Val::String(s) => match Val::parse(&s) {
            Some(n) => Ok(n),
            None => Err(error!(IllegalFunctionCall; "INVALID NUMBER")),
        },
        Val::Float(n) => Ok(Val::normalize(n)),
        n => Ok(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn run(func: Function, args: Vec<Val>) -> Result<Val> {
        call(func, args, &mut StdRng::seed_from_u64(7))
    }

    fn s(s: &str) -> Val {
        Val::String(s.into())
    }

    #[test]
    fn test_string_slicing() {
        assert_eq!(run(Function::Left, vec![s("HELLO"), Val::Integer(2)]).unwrap(), s("HE"));
        assert_eq!(run(Function::Right, vec![s("HELLO"), Val::Integer(3)]).unwrap(), s("LLO"));
        assert_eq!(run(Function::Right, vec![s("HI"), Val::Integer(0)]).unwrap(), s(""));
        assert_eq!(run(Function::Left, vec![s("HI"), Val::Integer(9)]).unwrap(), s("HI"));
        assert_eq!(
            run(Function::Mid, vec![s("HELLO"), Val::Integer(2), Val::Integer(3)]).unwrap(),
            s("ELL")
        );
    }

    #[test]
    fn test_int_truncates() {
        assert_eq!(run(Function::Int, vec![Val::Float(-2.7)]).unwrap(), Val::Integer(-2));
        assert_eq!(run(Function::Int, vec![Val::Float(2.7)]).unwrap(), Val::Integer(2));
    }

    #[test]
    fn test_val_and_str() {
        assert_eq!(run(Function::Val, vec![s("3.0")]).unwrap(), Val::Integer(3));
        assert_eq!(run(Function::Val, vec![s("2.5")]).unwrap(), Val::Float(2.5));
        assert!(run(Function::Val, vec![s("X")]).is_err());
        assert_eq!(run(Function::Str, vec![Val::Integer(12)]).unwrap(), s("12"));
    }

    #[test]
    fn test_arity_and_kind() {
        let e = run(Function::Len, vec![]).unwrap_err();
        assert_eq!(e.to_string(), "ILLEGAL FUNCTION CALL; WRONG NUMBER OF ARGUMENTS TO LEN");
        let e = run(Function::Len, vec![Val::Integer(1)]).unwrap_err();
        assert_eq!(e.to_string(), "TYPE MISMATCH");
    }

    #[test]
    fn test_rnd_range() {
        for _ in 0..10 {
            match run(Function::Rnd, vec![Val::Integer(1)]).unwrap() {
                Val::Float(n) => assert!((0.0..1.0).contains(&n)),
                v => panic!("{:?}", v),
            }
        }
    }
}
