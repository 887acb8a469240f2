use super::{Array, Val};
use crate::error;
use crate::lang::Error;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Scalars and arrays live in separate tables, so `A` and `A(1)` are
/// different variables.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, Val>,
    arrays: HashMap<Rc<str>, Array>,
}

/// A place a value can be bound to.
#[derive(Debug, Clone, PartialEq)]
pub enum Variable {
    Unary(Rc<str>),
    Array(Rc<str>, Vec<Val>),
}

/// Names ending in `$` hold strings, every other name holds numbers.
pub fn validate(var_name: &str, value: &Val) -> Result<()> {
    match (var_name.ends_with('$'), value.is_string()) {
        (true, false) => Err(error!(SyntaxError; "ATTEMPT TO ASSIGN NUMBER TO STRING VARIABLE")),
        (false, true) => Err(error!(SyntaxError; "ATTEMPT TO ASSIGN STRING TO NUMERIC VARIABLE")),
        _ => Ok(()),
    }
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
        self.arrays.clear();
    }

    pub fn fetch(&self, var_name: &str) -> Val {
        match self.vars.get(var_name) {
            Some(val) => val.clone(),
            None => Val::zero(var_name),
        }
    }

    pub fn store(&mut self, var_name: &Rc<str>, value: Val) -> Result<()> {
        validate(var_name, &value)?;
        self.vars.insert(var_name.clone(), value);
        Ok(())
    }

    pub fn fetch_array(&self, var_name: &str, index: &[Val]) -> Result<Val> {
        match self.arrays.get(var_name) {
            Some(array) => array.get(index),
            None => Err(error!(SubscriptOutOfRange; "ARRAY NOT DIMENSIONED")),
        }
    }

    pub fn store_array(&mut self, var_name: &str, index: &[Val], value: Val) -> Result<()> {
        validate(var_name, &value)?;
        match self.arrays.get_mut(var_name) {
            Some(array) => array.set(index, value),
            None => Err(error!(SubscriptOutOfRange; "ARRAY NOT DIMENSIONED")),
        }
    }

    /// Declaring an existing array again replaces it.
    pub fn dimension_array(&mut self, var_name: Rc<str>, sizes: &[Val]) -> Result<()> {
        let array = Array::new(&var_name, sizes)?;
        self.arrays.insert(var_name, array);
        Ok(())
    }

    pub fn assign(&mut self, variable: &Variable, value: Val) -> Result<()> {
        match variable {
            Variable::Unary(name) => self.store(name, value),
            Variable::Array(name, index) => self.store_array(name, index, value),
        }
    }
}
